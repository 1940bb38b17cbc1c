#![warn(clippy::all, rust_2018_idioms)]

pub mod host;
pub mod string_error;

#[cfg(test)]
mod tests {
    use std::sync::mpsc::Sender;
    use std::time::Duration;

    use log::trace;

    use crate::host::{
        register_component, request_stop, ComponentBridge, HostEventLoop, HostState,
    };

    /// Forwards every applied value back out of the loop thread, so the
    /// test can observe what reached the host state.
    struct TestState {
        seen_tx: Sender<u32>,
    }

    impl HostState<u32> for TestState {
        fn apply_component_value(&mut self, value: u32) {
            let _ = self.seen_tx.send(value);
        }
    }

    #[test]
    fn test_submitted_values_reach_host_state() {
        let _ = env_logger::builder().is_test(true).try_init();

        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let (seen_tx, seen_rx) = std::sync::mpsc::channel();
        let host_state = TestState { seen_tx };
        let eventloop_handle = HostEventLoop::new(request_rx, host_state).run();

        let bridge = register_component("test", request_tx.clone());
        bridge.set_component_value(17).unwrap();
        bridge.set_component_value(17).unwrap();
        trace!("values submitted through bridge");

        // Repeated submissions arrive in order, each one unchanged.
        let timeout = Duration::from_secs(1);
        assert_eq!(seen_rx.recv_timeout(timeout).unwrap(), 17);
        assert_eq!(seen_rx.recv_timeout(timeout).unwrap(), 17);

        // (this joins the thread handle of the event loop)
        request_stop(&request_tx, eventloop_handle);

        // After the loop is gone, the bridge reports unavailability.
        assert!(bridge.set_component_value(17).is_err());
    }

    #[test]
    fn test_bridge_without_host_loop_errors() {
        let _ = env_logger::builder().is_test(true).try_init();

        let (request_tx, request_rx) = std::sync::mpsc::channel::<crate::host::HostRequest<u32>>();
        let bridge = register_component("test", request_tx);
        drop(request_rx);
        assert!(bridge.set_component_value(1).is_err());
    }
}
