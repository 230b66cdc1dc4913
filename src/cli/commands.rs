use clap::{CommandFactory, Parser, Subcommand};

use crate::domain::{ReadError, ReadRequest};

#[derive(Parser)]
#[command(name = "vr")]
#[command(about = "Read secrets from a Vault-compatible key-value service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Read data or secrets from Vault",
        disable_help_flag = true,
        override_usage = "vr read [options] <path>"
    )]
    Read {
        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "Read options followed by the secret path"
        )]
        args: Vec<String>,
    },

    #[command(about = "Show the effective client configuration")]
    Config,

    #[command(about = "Generate shell completion script")]
    Completion {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

const READ_LONG_ABOUT: &str = "Read data from Vault.

Reads data at the given path from Vault. This can be used to read secrets and
configuration as well as generate dynamic values from materialized backends.
Please reference the documentation for the backends in use to determine key
structure.";

/// Options accepted by `vr read`, parsed separately from the top-level CLI so
/// the read command owns its exit codes.
#[derive(Parser, Debug)]
#[command(name = "read", no_binary_name = true)]
#[command(about = "Read data or secrets from Vault", long_about = READ_LONG_ABOUT)]
#[command(override_usage = "vr read [options] <path>")]
pub struct ReadArgs {
    #[arg(
        long,
        default_value = "table",
        value_name = "table|json|yaml",
        help = "The format for output. By default it is a whitespace-delimited table"
    )]
    pub format: String,

    #[arg(
        long,
        default_value = "",
        hide_default_value = true,
        value_name = "field",
        help = "If included, the raw value of the specified field will be output raw to stdout"
    )]
    pub field: String,

    #[arg(value_name = "path", help = "Path of the secret to read")]
    pub paths: Vec<String>,
}

impl ReadArgs {
    pub fn parse_args(args: &[String]) -> Result<Self, clap::Error> {
        Self::try_parse_from(normalize_flag_style(args))
    }

    pub fn into_request(self) -> Result<ReadRequest, ReadError> {
        match self.paths.as_slice() {
            [path] => ReadRequest::new(path, self.format, &self.field),
            _ => Err(ReadError::Usage("read expects one argument".to_string())),
        }
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string().trim_end().to_string()
    }
}

/// Arguments following the `read` subcommand exactly as typed. The
/// top-level parser swallows a leading `--`, so `read` works from argv.
pub fn forwarded_read_args(argv: &[String]) -> &[String] {
    argv.iter()
        .skip(1)
        .position(|arg| arg == "read")
        .map(|index| &argv[index + 2..])
        .unwrap_or_default()
}

/// Rewrites single-dash long flags (`-field=bar`, `-format json`) into the
/// double-dash form. Stops at `--`.
fn normalize_flag_style(args: &[String]) -> Vec<String> {
    let mut normalized = Vec::with_capacity(args.len());
    let mut flags_done = false;

    for arg in args {
        if flags_done {
            normalized.push(arg.clone());
            continue;
        }
        if arg == "--" {
            flags_done = true;
            normalized.push(arg.clone());
            continue;
        }

        let is_single_dash_long = arg.starts_with('-')
            && !arg.starts_with("--")
            && arg[1..].split('=').next().map_or(false, |name| name.len() > 1);

        if is_single_dash_long {
            normalized.push(format!("-{}", arg));
        } else {
            normalized.push(arg.clone());
        }
    }

    normalized
}
