pub mod click;
pub mod companion;
pub mod drag;
pub mod event;
pub mod inline_edit;
pub mod layout;
pub mod menu;
pub mod mode;
pub mod prompt;
pub mod state;

pub use mode::Mode;
pub use state::AppState;
