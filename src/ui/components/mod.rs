//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_cta_button, BUTTON_HEIGHT};
pub use dialog::render_toast;
