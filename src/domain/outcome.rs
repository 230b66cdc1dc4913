use super::error::ReadError;
use super::output::{Formatter, Ui};
use super::Secret;

/// What a successful read should print.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    RawField(String),
    FullSecret(Secret),
}

impl ReadOutcome {
    pub fn select(secret: Secret, field: Option<&str>) -> Result<Self, ReadError> {
        match field {
            None => Ok(ReadOutcome::FullSecret(secret)),
            Some(name) => secret
                .field(name)
                .map(ReadOutcome::RawField)
                .ok_or_else(|| ReadError::FieldMissing(name.to_string())),
        }
    }

    pub fn render(&self, ui: &mut dyn Ui, formatter: &dyn Formatter, format: &str) -> i32 {
        match self {
            ReadOutcome::RawField(value) => {
                if ui.supports_raw_output() {
                    ui.output_raw(value);
                } else {
                    ui.output(value);
                }
                0
            }
            ReadOutcome::FullSecret(secret) => formatter.render(ui, format, secret),
        }
    }
}
