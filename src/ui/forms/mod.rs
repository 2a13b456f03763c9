//! Form rendering module
//!
//! - `field_renderer`: draws one wizard field according to its widget

mod field_renderer;

pub use field_renderer::{draw_field, field_height};
