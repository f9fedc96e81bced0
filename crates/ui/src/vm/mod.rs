mod menu_vm;
mod session_vm;

pub use menu_vm::{LevelRowVm, MenuVm, load_menu};
pub use session_vm::{SessionIntent, SessionVm, start_session};
