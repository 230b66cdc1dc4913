pub mod commands;

pub use commands::{forwarded_read_args, Cli, Commands};
