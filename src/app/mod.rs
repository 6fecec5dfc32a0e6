pub mod display;
pub mod event;
pub mod state;

pub use display::UuidDisplay;
pub use state::{AppState, HistoryEntry};
