use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use planner::{Catalog, Config, Course};
use tracing::instrument;

use super::terminal::Painter;

/// Command arguments for `planner list`.
#[derive(Debug, Parser)]
#[command(about = "List every course sorted by course number")]
pub struct List {
    /// Path to the course data file
    file: PathBuf,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress headers and format rows for scripting.
    #[arg(long)]
    quiet: bool,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl List {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let catalog = super::load_catalog(&self.file, config)?;
        let mut stdout = io::stdout().lock();

        match self.output {
            OutputFormat::Table => {
                write_schedule(&mut stdout, &catalog, self.quiet, Painter::stdout())?;
            }
            OutputFormat::Json => {
                let courses = catalog.sorted_courses();
                writeln!(stdout, "{}", serde_json::to_string_pretty(&courses)?)?;
            }
            OutputFormat::Csv => write_delimited(&mut stdout, &catalog, config.delimiter())?,
        }

        Ok(())
    }
}

/// Writes the sorted `ID, Title` schedule.
///
/// Unless `quiet`, the rows are framed by a heading and a trailing blank
/// line.
pub fn write_schedule<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    quiet: bool,
    painter: Painter,
) -> io::Result<()> {
    if !quiet {
        writeln!(out, "{}\n", painter.dim("Here is a sample schedule:"))?;
    }

    for course in catalog.sorted_courses() {
        writeln!(out, "{course}")?;
    }

    if !quiet {
        writeln!(out)?;
    }
    Ok(())
}

/// Writes each course back out as a delimited line, in sorted order.
fn write_delimited<W: Write>(out: &mut W, catalog: &Catalog, delimiter: char) -> io::Result<()> {
    for course in catalog.sorted_courses() {
        writeln!(out, "{}", delimited_row(course, delimiter))?;
    }
    Ok(())
}

fn delimited_row(course: &Course, delimiter: char) -> String {
    let mut row = format!("{}{delimiter}{}", course.id(), course.title());
    for prerequisite in course.prerequisites() {
        row.push(delimiter);
        row.push_str(prerequisite);
    }
    row
}
