pub mod model;
pub mod view;

pub use model::ClockState;
pub use view::{CairoMetrics, draw};

pub const FONT_FAMILY: &str = "Sans";
