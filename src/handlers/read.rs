use crate::cli::commands::ReadArgs;
use crate::domain::{ClientProvider, Formatter, ReadError, ReadOutcome, ReadRequest, Ui};

/// `vr read [options] <path>`. Every failure is reported on `ui` and
/// turned into an exit code here.
pub struct ReadCommand<'a> {
    provider: &'a dyn ClientProvider,
    formatter: &'a dyn Formatter,
}

impl<'a> ReadCommand<'a> {
    pub fn new(provider: &'a dyn ClientProvider, formatter: &'a dyn Formatter) -> Self {
        Self {
            provider,
            formatter,
        }
    }

    pub fn run(&self, ui: &mut dyn Ui, args: &[String]) -> i32 {
        let parsed = match ReadArgs::parse_args(args) {
            Ok(parsed) => parsed,
            // Help requests land here too.
            Err(e) => {
                ui.error(e.render().to_string().trim_end());
                return 1;
            }
        };

        let request = match parsed.into_request() {
            Ok(request) => request,
            Err(e) => {
                ui.error(&e.to_string());
                ui.error(&ReadArgs::usage());
                return e.exit_code();
            }
        };

        let code = match self.execute(&request) {
            Ok(outcome) => outcome.render(ui, self.formatter, &request.format),
            Err(e) => {
                tracing::debug!(path = %request.path, "Read failed: {:?}", e);
                ui.error(&e.to_string());
                return e.exit_code();
            }
        };

        if let Some(e) = ui.take_write_error() {
            ui.error(&format!("Error writing output: {}", e));
            return 1;
        }
        code
    }

    fn execute(&self, request: &ReadRequest) -> Result<ReadOutcome, ReadError> {
        let client = self.provider.acquire_client()?;

        let secret = client
            .read(&request.path)
            .map_err(|source| ReadError::Store {
                path: request.path.clone(),
                source,
            })?
            .ok_or_else(|| ReadError::NotFound(request.path.clone()))?;

        ReadOutcome::select(secret, request.field.as_deref())
    }
}
