pub mod command_handler;
pub mod dict_service;

pub use command_handler::{Command, CommandHandler, Control, HELP_TEXT, INVALID_COMMAND, Reply};
pub use dict_service::{DictService, Lookup};
