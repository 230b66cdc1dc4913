pub mod error;
pub mod outcome;
pub mod output;
pub mod path;
pub mod request;
pub mod secret;
pub mod store;

pub use error::{ClientError, ReadError, StoreError};
pub use outcome::ReadOutcome;
pub use output::{Formatter, OutputFormat, Ui};
pub use request::ReadRequest;
pub use secret::Secret;
pub use store::{ClientProvider, SecretStore};
