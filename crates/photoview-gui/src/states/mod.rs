mod config;
mod ui;
mod viewport;

pub use config::{ViewSettings, DEFAULT_SETTINGS_FILE};
pub use ui::UIState;
pub use viewport::{PinchState, ViewportState};
