use log::info;
use std::sync::mpsc::Sender;

/// Messages a component instance can send to the host event loop.
pub enum HostRequest<V> {
    /// A value reported by the component.
    Value(V),
    /// Ask the event loop to shut down.
    Stop,
}

/// The outbound capability a component uses to report a value back to
/// the host runtime. Injected at construction time, so tests can
/// substitute a recording double.
pub trait ComponentBridge<V> {
    /// Transmits one value to the host. Fire-and-forget; the only error
    /// is an unavailable host (its event loop is gone).
    fn set_component_value(&self, value: V) -> Result<(), String>;
}

/// Channel-backed bridge delivering values to the host event loop thread.
pub struct ChannelBridge<V> {
    request_tx: Sender<HostRequest<V>>,
}

impl<V> Clone for ChannelBridge<V> {
    fn clone(&self) -> Self {
        Self {
            request_tx: self.request_tx.clone(),
        }
    }
}

impl<V> ComponentBridge<V> for ChannelBridge<V> {
    fn set_component_value(&self, value: V) -> Result<(), String> {
        self.request_tx
            .send(HostRequest::Value(value))
            .map_err(|_| "host event loop is gone, component value was dropped".to_string())
    }
}

/// Registers a component instance with the host and hands out its
/// bridge. Called once per instance, before the first render.
pub fn register_component<V>(name: &str, request_tx: Sender<HostRequest<V>>) -> ChannelBridge<V> {
    info!("registering component instance '{name}'");
    ChannelBridge { request_tx }
}
