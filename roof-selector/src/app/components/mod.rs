mod roof_selector;

pub use roof_selector::{RoofSelector, SelectionResult, SelectorProps};
