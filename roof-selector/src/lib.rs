#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod host_state;

pub use app::config::Config;
pub use app::{EguiApp, RoofSelector, SelectionResult, SelectorProps};
pub use host_state::SubmissionLog;
