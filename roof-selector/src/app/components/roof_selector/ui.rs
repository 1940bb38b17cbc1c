use host_core::host::ComponentBridge;

use super::logic;
use super::SelectionResult;

impl<B> super::RoofSelector<B>
where
    B: ComponentBridge<SelectionResult>,
{
    pub fn render(&mut self, ui: &mut egui::Ui) {
        ui.heading("Roof Selector");
        ui.label(logic::display_text(self.props));
        ui.separator();

        if ui.button("Select Roof").clicked() {
            self.submit_selection();
        }

        // Preview of the square that will be reported. Computed from the
        // same function as the submitted value; longitude is the x axis.
        let preview = logic::selection_result(self.props);
        let corners: Vec<[f64; 2]> = preview
            .coordinates
            .iter()
            .map(|&[lat, lon]| [lon, lat])
            .collect();

        egui_plot::Plot::new("selection_preview")
            .data_aspect(1.0)
            .show(ui, |plot_ui| {
                plot_ui.polygon(egui_plot::Polygon::new(corners));
                plot_ui.points(
                    egui_plot::Points::new(vec![[self.props.lon, self.props.lat]]).radius(4.0),
                );
            });
    }
}
