pub mod commands;
pub mod types;

pub use commands::{StyleCommand, StyleProperty, StyleTarget};
pub use types::{BarOffset, Rect, SectionStyle, Viewport};
