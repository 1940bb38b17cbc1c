#![warn(clippy::all, rust_2018_idioms)]

use host_core::host::HostEventLoop;
use roof_selector::{Config, EguiApp, SubmissionLog};

const WINDOW_NAME: &str = "Roof Selector";
const WINDOW_WIDTH: f32 = 400.0;
const WINDOW_HEIGHT: f32 = 300.0;

fn main() -> eframe::Result {
    env_logger::init();

    // start host event loop
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let config = if let Ok(config) = Config::from_config_file() {
        config
    } else {
        log::warn!("unable to load config file \".roof-selector\" from home directory");
        Config::default()
    };
    let host_state = SubmissionLog::new();
    let eventloop_handle = HostEventLoop::new(request_rx, host_state).run();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_NAME,
        native_options,
        Box::new(|cc| {
            Ok(Box::new(EguiApp::new(
                cc,
                config,
                request_tx,
                eventloop_handle,
            )))
        }),
    )
}
