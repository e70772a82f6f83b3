pub mod args;
pub mod payload;
pub mod reference;
pub mod writer;

use {
    anyhow::{Context, Result},
    args::{Command, ManualFormat},
    tracing_subscriber::EnvFilter,
};

fn main() -> Result<()> {
    // stdout carries only the confirmation line; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cmd = crate::args::ClapArgumentLoader::load()?;

    match cmd.command {
        | Command::Write => writer::write_config(),
        | Command::Manual { path, format } => {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            match format {
                | ManualFormat::Manpages => {
                    reference::build_manpages(&path)?;
                },
                | ManualFormat::Markdown => {
                    reference::build_markdown(&path)?;
                },
            }
            Ok(())
        },
        | Command::Autocomplete { path, shell } => {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            reference::build_shell_completion(&path, &shell)?;
            Ok(())
        },
    }
}
