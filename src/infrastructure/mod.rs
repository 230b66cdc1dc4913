pub mod console;
pub mod environment;
pub mod secret_formatter;
pub mod vault_client;

pub use console::ConsoleUi;
pub use environment::EnvironmentProvider;
pub use secret_formatter::SecretFormatter;
pub use vault_client::VaultClient;
