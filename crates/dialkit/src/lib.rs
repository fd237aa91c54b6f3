//! Geometry for an analog clock face: a dial, sixty ticks with upright hour
//! numerals, and hour/minute/second hands, laid out in a frame centered on
//! the dial. Rasterizing is left to the caller, which consumes the
//! [`DrawInstruction`] stream in order.

pub mod color;
pub mod geometry;
pub mod hand;
pub mod layout;
pub mod scale;
pub mod style;
pub mod units;

pub use color::Color;
pub use geometry::{DialGeometry, LayoutConstraint, Point, Size};
pub use hand::{HandAngles, HandKind, HandSegment};
pub use layout::{DialCircle, DialLayout, DrawInstruction};
pub use scale::{ApproximateMetrics, Numeral, TextBounds, TextMeasure, TickMark};
pub use style::{AttributeMap, StyleConfig, StyleError, StyleKey, StyleSource, StyledAttributes};
pub use units::{Density, Dimension};
