use std::io::{self, Write};

use crate::domain::Ui;

/// `Ui` over a pair of writers. Both streams accept raw writes. A failed
/// write to `out` is kept for `take_write_error`.
pub struct WriterUi<O: Write, E: Write> {
    out: O,
    err: E,
    write_error: Option<io::Error>,
}

pub type ConsoleUi = WriterUi<io::Stdout, io::Stderr>;

impl ConsoleUi {
    pub fn console() -> Self {
        WriterUi::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> WriterUi<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            write_error: None,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

fn write_all(stream: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    stream.write_all(bytes)?;
    stream.flush()
}

impl<O: Write, E: Write> WriterUi<O, E> {
    fn write_out(&mut self, bytes: &[u8]) {
        if let Err(e) = write_all(&mut self.out, bytes) {
            tracing::debug!("Failed to write to output stream: {}", e);
            self.write_error.get_or_insert(e);
        }
    }
}

impl<O: Write, E: Write> Ui for WriterUi<O, E> {
    fn output(&mut self, message: &str) {
        self.write_out(format!("{}\n", message).as_bytes());
    }

    fn error(&mut self, message: &str) {
        if let Err(e) = write_all(&mut self.err, format!("{}\n", message).as_bytes()) {
            tracing::debug!("Failed to write to error stream: {}", e);
        }
    }

    fn supports_raw_output(&self) -> bool {
        true
    }

    fn output_raw(&mut self, value: &str) {
        self.write_out(value.as_bytes());
    }

    fn take_write_error(&mut self) -> Option<io::Error> {
        self.write_error.take()
    }
}

#[cfg(test)]
pub mod testing {
    use crate::domain::Ui;
    use std::io;

    /// In-memory sink with switchable raw support.
    #[derive(Default)]
    pub struct RecordingUi {
        pub out: String,
        pub err: String,
        raw: bool,
        closed: bool,
        write_error: Option<io::Error>,
    }

    impl RecordingUi {
        pub fn raw() -> Self {
            Self {
                raw: true,
                ..Self::default()
            }
        }

        pub fn line_only() -> Self {
            Self::default()
        }

        /// Raw-capable sink whose output stream rejects every write.
        pub fn closed() -> Self {
            Self {
                raw: true,
                closed: true,
                ..Self::default()
            }
        }

        fn push_out(&mut self, text: &str) {
            if self.closed {
                self.write_error
                    .get_or_insert_with(|| io::Error::from(io::ErrorKind::BrokenPipe));
            } else {
                self.out.push_str(text);
            }
        }
    }

    impl Ui for RecordingUi {
        fn output(&mut self, message: &str) {
            self.push_out(&format!("{}\n", message));
        }

        fn error(&mut self, message: &str) {
            self.err.push_str(message);
            self.err.push('\n');
        }

        fn supports_raw_output(&self) -> bool {
            self.raw
        }

        fn output_raw(&mut self, value: &str) {
            if self.raw {
                self.push_out(value);
            } else {
                self.output(value);
            }
        }

        fn take_write_error(&mut self) -> Option<io::Error> {
            self.write_error.take()
        }
    }
}
