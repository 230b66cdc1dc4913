use std::fmt;
use std::io;
use std::str::FromStr;

use super::Secret;

/// Output sink shared by every command.
pub trait Ui {
    /// Writes a complete message followed by a newline.
    fn output(&mut self, message: &str);

    /// Writes a diagnostic to the error stream.
    fn error(&mut self, message: &str);

    /// Whether `output_raw` writes bytes exactly as given.
    fn supports_raw_output(&self) -> bool {
        false
    }

    /// Writes `value` with nothing appended. Sinks without raw support fall
    /// back to `output`.
    fn output_raw(&mut self, value: &str) {
        self.output(value);
    }

    /// First failed write to the output stream since the last call, if any.
    fn take_write_error(&mut self) -> Option<io::Error> {
        None
    }
}

/// Renders a whole secret in a named format and reports the exit code.
pub trait Formatter {
    fn render(&self, ui: &mut dyn Ui, format: &str, secret: &Secret) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}
