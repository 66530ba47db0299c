//! Browser-independent core of the vitrine page.
//!
//! Everything here is pure computation over plain values. The `vitrine-wasm`
//! crate reads geometry from the DOM, calls into this crate, and applies the
//! resulting [`StyleCommand`](vitrine_protocol::StyleCommand)s.

pub mod archive;
pub mod config;
pub mod contact;
pub mod frame;
pub mod nav;
pub mod parallax;
pub mod sitemap;
pub mod throttle;
pub mod title_bar;

pub use config::{ConfigError, PageConfig, ParallaxMode, ResizePass, ScrollConfig};
pub use frame::ScrollFrame;
pub use throttle::{FrameScheduler, ManualFrames, Throttle};
