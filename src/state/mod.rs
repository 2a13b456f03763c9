//! Application state module

mod app_state;
mod draft;
mod forms;
mod hero_state;
mod notification;
mod schema;
mod validator;
mod wizard;

pub use app_state::*;
pub use draft::*;
pub use forms::*;
pub use hero_state::*;
pub use notification::*;
pub use schema::*;
pub use validator::*;
pub use wizard::*;
