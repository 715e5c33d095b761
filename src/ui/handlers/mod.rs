//! Handler modules for managing user input, menus, and match state.

mod game_handler;
mod input_handler;
mod menu_handler;

pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
pub use menu_handler::MenuHandler;
