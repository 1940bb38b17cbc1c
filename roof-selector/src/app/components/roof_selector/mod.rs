mod logic;
mod ui;

use derive_new::new;
use serde::{Deserialize, Serialize};

use host_core::host::ComponentBridge;

/// Half the side length of the placeholder selection square, in degrees.
pub(crate) const SELECTION_HALF_WIDTH: f64 = 0.0005;
/// Roof area reported with every selection, in square meters.
pub(crate) const SELECTION_AREA: f64 = 100.0;
/// Roof orientation reported with every selection, in degrees.
pub(crate) const SELECTION_ORIENTATION: f64 = 180.0;

/// Render-time properties, supplied once by the host and immutable for
/// the widget's lifetime. No bounds checking is applied, the values are
/// displayed and used as given.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct SelectorProps {
    pub lat: f64,
    pub lon: f64,
}

/// The value reported back to the host when the user confirms a
/// selection.
///
/// This is a placeholder, not a detected roof outline: the coordinates
/// always form the same square translated to the input point, and area
/// and orientation are constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub area: f64,
    pub orientation: f64,
    /// Four `[latitude, longitude]` corners, in the order south-west,
    /// south-east, north-east, north-west.
    pub coordinates: [[f64; 2]; 4],
}

/// Panel showing the supplied point and a control to confirm the
/// (placeholder) roof selection. Holds no selection state; every click
/// reports through the bridge again.
pub struct RoofSelector<B> {
    props: SelectorProps,
    bridge: B,
}

impl<B> RoofSelector<B>
where
    B: ComponentBridge<SelectionResult>,
{
    pub fn new(props: SelectorProps, bridge: B) -> Self {
        Self { props, bridge }
    }

    pub fn props(&self) -> SelectorProps {
        self.props
    }
}
