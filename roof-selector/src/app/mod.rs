mod components;
pub mod config;

use std::{sync::mpsc::Sender, thread::JoinHandle};

use host_core::host::{register_component, request_stop, ChannelBridge, HostRequest};

use config::Config;

pub use crate::app::components::{RoofSelector, SelectionResult, SelectorProps};

pub type HostRequestSender = Sender<HostRequest<SelectionResult>>;

/// The shell standing in for the notebook runtime: it owns the display
/// region, registers the widget and keeps the host event loop alive.
pub struct EguiApp {
    host_thread_handle: Option<JoinHandle<()>>,
    request_tx: HostRequestSender,
    roof_selector: RoofSelector<ChannelBridge<SelectionResult>>,
}

impl EguiApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: Config,
        request_tx: HostRequestSender,
        host_thread_handle: JoinHandle<()>,
    ) -> Self {
        // One-time registration of the widget instance with the host.
        let bridge = register_component("roof_selector", request_tx.clone());
        let props = SelectorProps::new(config.lat, config.lon);

        Self {
            host_thread_handle: Some(host_thread_handle),
            request_tx,
            roof_selector: RoofSelector::new(props, bridge),
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut should_quit = false;

        // Handle keyboard input.
        ctx.input(|i| {
            // Close app.
            if i.key_pressed(egui::Key::F10) {
                should_quit = true;
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.menu(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.roof_selector.render(ui);
        });

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(handle) = self.host_thread_handle.take() {
            request_stop(&self.request_tx, handle);
        }
    }
}

impl EguiApp {
    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });
    }
}
