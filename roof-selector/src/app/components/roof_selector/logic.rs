use host_core::host::ComponentBridge;

use super::{
    SelectionResult, SelectorProps, SELECTION_AREA, SELECTION_HALF_WIDTH, SELECTION_ORIENTATION,
};

/// Builds the placeholder selection for a point: a square of fixed
/// half-width around it, with constant area and orientation.
pub(super) fn selection_result(props: SelectorProps) -> SelectionResult {
    let SelectorProps { lat, lon } = props;
    let h = SELECTION_HALF_WIDTH;
    SelectionResult {
        area: SELECTION_AREA,
        orientation: SELECTION_ORIENTATION,
        coordinates: [
            [lat - h, lon - h],
            [lat - h, lon + h],
            [lat + h, lon + h],
            [lat + h, lon - h],
        ],
    }
}

/// The coordinate line shown in the panel. Plain `{}` float formatting,
/// so `37.0` renders as "37".
pub(super) fn display_text(props: SelectorProps) -> String {
    format!("Latitude: {}, Longitude: {}", props.lat, props.lon)
}

impl<B> super::RoofSelector<B>
where
    B: ComponentBridge<SelectionResult>,
{
    /// Click handler: report the placeholder selection to the host.
    pub(super) fn submit_selection(&self) {
        let result = selection_result(self.props);
        log::debug!("submitting selection for {:?}", self.props);
        if let Err(error) = self.bridge.set_component_value(result) {
            log::warn!("could not report selection: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::app::components::RoofSelector;

    #[derive(Default, Clone)]
    struct RecordingBridge {
        submitted: Rc<RefCell<Vec<SelectionResult>>>,
    }

    impl ComponentBridge<SelectionResult> for RecordingBridge {
        fn set_component_value(&self, value: SelectionResult) -> Result<(), String> {
            self.submitted.borrow_mut().push(value);
            Ok(())
        }
    }

    #[test]
    fn test_selection_square_translates_with_input() {
        let (lat, lon) = (51.33, 6.57);
        let result = selection_result(SelectorProps::new(lat, lon));
        let h = SELECTION_HALF_WIDTH;
        assert_eq!(
            result.coordinates,
            [
                [lat - h, lon - h],
                [lat - h, lon + h],
                [lat + h, lon + h],
                [lat + h, lon - h],
            ]
        );
    }

    #[test]
    fn test_area_and_orientation_are_fixed() {
        for props in [
            SelectorProps::new(0.0, 0.0),
            SelectorProps::new(9.0, 38.0),
            SelectorProps::new(-45.0, 170.0),
        ] {
            let result = selection_result(props);
            assert_eq!(result.area, 100.0);
            assert_eq!(result.orientation, 180.0);
        }
    }

    #[test]
    fn test_known_point_near_santa_cruz() {
        let result = selection_result(SelectorProps::new(37.0, -122.0));
        assert_eq!(
            result.coordinates,
            [
                [36.9995, -122.0005],
                [36.9995, -121.9995],
                [37.0005, -121.9995],
                [37.0005, -122.0005],
            ]
        );
    }

    #[test]
    fn test_null_island() {
        let result = selection_result(SelectorProps::new(0.0, 0.0));
        assert_eq!(
            result.coordinates,
            [
                [-0.0005, -0.0005],
                [-0.0005, 0.0005],
                [0.0005, 0.0005],
                [0.0005, -0.0005],
            ]
        );
    }

    #[test]
    fn test_display_text_uses_plain_float_formatting() {
        let text = display_text(SelectorProps::new(37.0, -122.0));
        assert_eq!(text, "Latitude: 37, Longitude: -122");
    }

    #[test]
    fn test_repeated_clicks_submit_identical_results() {
        let bridge = RecordingBridge::default();
        let selector = RoofSelector::new(SelectorProps::new(37.0, -122.0), bridge.clone());

        for _ in 0..3 {
            selector.submit_selection();
        }

        let submitted = bridge.submitted.borrow();
        assert_eq!(submitted.len(), 3);
        assert!(submitted.iter().all(|result| *result == submitted[0]));
    }
}
