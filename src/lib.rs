pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repl;
pub mod utils;

pub use application::{CommandHandler, DictService};
pub use error::{DictError, Result};
pub use infrastructure::dict::JsonFileDictRepo;
