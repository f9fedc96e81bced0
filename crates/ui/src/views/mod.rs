mod menu;
mod session;
mod state;

pub use menu::MenuView;
pub use session::SessionView;
pub use state::{ViewError, ViewState, view_state_from_resource};
