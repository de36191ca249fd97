use std::{
    io,
    path::{Path, PathBuf},
};

mod list;
mod shell;
mod show;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use list::List;
use planner::{Catalog, Config};
use shell::Shell;
use show::Show;
use terminal::Painter;
use tracing::instrument;

/// Configuration file looked up in the working directory when `--config` is
/// not given.
const DEFAULT_CONFIG: &str = "planner.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;

        self.command.unwrap_or(Command::Shell).run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive course planner menu (default)
    Shell,

    /// Print every course in the catalog, sorted by course number
    List(List),

    /// Show one course together with its prerequisites
    Show(Show),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Shell => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                Shell::new(stdin.lock(), stdout.lock(), config).run()?;
            }
            Self::List(command) => command.run(config)?,
            Self::Show(command) => command.run(config)?,
        }
        Ok(())
    }
}

/// Resolves the configuration.
///
/// An explicit path must load. The implicit `planner.toml` is optional and
/// any problem with it falls back to the defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path).context("failed to load configuration");
    }

    Ok(Config::load(Path::new(DEFAULT_CONFIG)).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    }))
}

/// Loads a catalog for a one-shot command, reporting defects as warnings on
/// stderr.
#[instrument(level = "debug", skip(config))]
fn load_catalog(path: &Path, config: &Config) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::default();
    let report = catalog
        .load(path, config)
        .with_context(|| format!("failed to load catalog from {}", path.display()))?;

    if report.is_clean() {
        tracing::info!(count = report.count, "catalog loaded");
        return Ok(catalog);
    }

    let painter = Painter::stderr();
    for defect in &report.defects {
        eprintln!("{} {defect}", painter.warning("Warning:"));
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_catalog_keeps_courses_despite_defects() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"CSCI100,Foundations\nbroken\nCSCI100,Again\n")
            .unwrap();

        let catalog = load_catalog(file.path(), &Config::default()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.title_for("CSCI100"), Some("Again"));
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();

        let error =
            load_catalog(&tmp.path().join("missing.csv"), &Config::default()).unwrap_err();

        assert!(error.to_string().starts_with("failed to load catalog from"));
    }
}
