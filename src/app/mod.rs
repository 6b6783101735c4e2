pub mod app;
pub mod display;
pub mod timer;
pub mod ui;
pub mod utils;

pub use app::App;
pub use display::{DisplayState, FieldsState};
