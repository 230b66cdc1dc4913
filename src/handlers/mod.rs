pub mod completion;
pub mod config;
pub mod read;

pub use completion::handle_completion;
pub use config::handle_config;
pub use read::ReadCommand;
