use host_core::host::HostState;

use crate::app::SelectionResult;

/// Host-side record of every value the widget has reported. Lives on
/// the host event loop thread; nothing is persisted.
#[derive(Debug, Default)]
pub struct SubmissionLog {
    received: Vec<SelectionResult>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> &[SelectionResult] {
        &self.received
    }
}

impl HostState<SelectionResult> for SubmissionLog {
    fn apply_component_value(&mut self, value: SelectionResult) {
        match serde_json::to_string(&value) {
            Ok(encoded) => log::info!("component value received: {encoded}"),
            Err(error) => log::warn!("received component value could not be encoded: {error}"),
        }
        self.received.push(value);
    }
}
