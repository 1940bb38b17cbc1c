use std::sync::mpsc::Receiver;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use log::info;
use log::warn;

use crate::host::HostRequest;
use crate::host::HostState;

/// The host side of the bridge: runs on its own thread and applies
/// every value a component reports to the host state.
pub struct HostEventLoop<S, V>
where
    S: HostState<V>,
{
    pub state: S,
    request_rx: Receiver<HostRequest<V>>,
    should_stop: bool,
}

impl<S, V> HostEventLoop<S, V>
where
    S: HostState<V> + Send + 'static,
    V: Send + 'static,
{
    pub fn update(&mut self) -> bool {
        while let Ok(request) = self.request_rx.try_recv() {
            match request {
                HostRequest::Value(value) => {
                    info!("handeling component value submission");
                    self.state.apply_component_value(value);
                }
                HostRequest::Stop => {
                    self.should_stop = true;
                }
            }
        }
        self.should_stop
    }
    pub fn run(mut self) -> std::thread::JoinHandle<()> {
        std::thread::spawn(move || loop {
            let stop_loop = self.update();
            if stop_loop {
                info!("stopping host event loop");
                break;
            }
        })
    }
    pub fn new(request_rx: Receiver<HostRequest<V>>, state: S) -> Self {
        info!("creating new host event loop");
        Self {
            state,
            request_rx,
            should_stop: false,
        }
    }
}

pub fn request_stop<V>(request_tx: &Sender<HostRequest<V>>, host_thread_handle: JoinHandle<()>) {
    info!("sending signal to end host event loop");
    if request_tx.send(HostRequest::Stop).is_err() {
        warn!("host event loop is already gone");
    }
    match host_thread_handle.join() {
        Ok(_) => info!("host event loop ended"),
        Err(e) => warn!("failed to join host event loop thread: {e:?}"),
    }
}
