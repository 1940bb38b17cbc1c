mod bridge;
mod eventloop;

pub use self::{
    bridge::{register_component, ChannelBridge, ComponentBridge, HostRequest},
    eventloop::{request_stop, HostEventLoop},
};

/// State held by the host runtime while its event loop runs. Receives
/// every value a component reports through its bridge.
pub trait HostState<V> {
    fn apply_component_value(&mut self, value: V);
}
