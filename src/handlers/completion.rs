use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};
use std::io::{self, Write};

use crate::cli::commands::Cli;

const BIN_NAME: &str = "vr";

pub fn handle_completion(shell: &str) -> Result<()> {
    write_completion(shell, &mut io::stdout())
}

fn write_completion(shell: &str, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();

    match shell.to_lowercase().as_str() {
        "bash" => {
            generate(shells::Bash, &mut cmd, BIN_NAME, out);
            writeln!(out)?;
            writeln!(out, "# To enable completion, add to ~/.bashrc:")?;
            writeln!(out, "#   eval \"$({} completion bash)\"", BIN_NAME)?;
        }
        "zsh" => {
            generate(shells::Zsh, &mut cmd, BIN_NAME, out);
            writeln!(out)?;
            writeln!(out, "# To enable completion, add to ~/.zshrc:")?;
            writeln!(out, "#   eval \"$({} completion zsh)\"", BIN_NAME)?;
        }
        "fish" => {
            generate(shells::Fish, &mut cmd, BIN_NAME, out);
            writeln!(out)?;
            writeln!(out, "# To enable completion:")?;
            writeln!(
                out,
                "#   {} completion fish > ~/.config/fish/completions/{}.fish",
                BIN_NAME, BIN_NAME
            )?;
        }
        _ => {
            return Err(anyhow::anyhow!(
                "Unsupported shell: {}. Supported shells: bash, zsh, fish",
                shell
            ));
        }
    }

    Ok(())
}
