use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use planner::{Catalog, Config, Course, CourseId};
use serde_json::json;
use tracing::instrument;

use super::terminal::Painter;

#[derive(Debug, Parser)]
#[command(about = "Display a course and its prerequisites")]
pub struct Show {
    /// Path to the course data file
    file: PathBuf,

    /// The course number to display (case-insensitive)
    course: CourseId,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let catalog = super::load_catalog(&self.file, config)?;

        let Some(course) = catalog.find(&self.course) else {
            anyhow::bail!("Sorry, I don't have a course with ID '{}'", self.course);
        };

        let mut stdout = io::stdout().lock();
        match self.output {
            OutputFormat::Pretty => {
                write_course(&mut stdout, &catalog, course, Painter::stdout())?;
            }
            OutputFormat::Json => write_json(&mut stdout, &catalog, course)?,
        }

        Ok(())
    }
}

/// Writes a course heading followed by its resolved prerequisites.
///
/// ```text
/// CSCI101, Intro to Programming
/// Prerequisites: CSCI100 (Foundations)
/// ```
pub fn write_course<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    course: &Course,
    painter: Painter,
) -> io::Result<()> {
    writeln!(out, "{}", painter.heading(&course.to_string()))?;

    let prerequisites = catalog.prerequisites(course);
    if prerequisites.is_empty() {
        writeln!(out, "{} None", painter.dim("Prerequisites:"))
    } else {
        let listed: Vec<_> = prerequisites.iter().map(ToString::to_string).collect();
        writeln!(out, "{} {}", painter.dim("Prerequisites:"), listed.join(", "))
    }
}

fn write_json<W: Write>(out: &mut W, catalog: &Catalog, course: &Course) -> anyhow::Result<()> {
    let output = json!({
        "id": course.id(),
        "title": course.title(),
        "prerequisites": catalog.prerequisites(course),
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog
            .load_from_reader(
                Cursor::new(
                    "CSCI100,Foundations\nCSCI101,Intro to Programming,CSCI100\n\
                     CSCI300,Algorithms,CSCI101,MATH201\n",
                ),
                &Config::default(),
            )
            .unwrap();
        catalog
    }

    fn render(catalog: &Catalog, id: &str) -> String {
        let course = catalog.find(id).unwrap();
        let mut out = Vec::new();
        write_course(&mut out, catalog, course, Painter::plain()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn course_without_prerequisites() {
        assert_eq!(
            render(&catalog(), "csci100"),
            "CSCI100, Foundations\nPrerequisites: None\n"
        );
    }

    #[test]
    fn course_with_resolved_and_unresolved_prerequisites() {
        assert_eq!(
            render(&catalog(), "CSCI300"),
            "CSCI300, Algorithms\nPrerequisites: CSCI101 (Intro to Programming), MATH201\n"
        );
    }

    #[test]
    fn json_output_includes_resolution() {
        let catalog = catalog();
        let course = catalog.find("CSCI300").unwrap();
        let mut out = Vec::new();

        write_json(&mut out, &catalog, course).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "CSCI300",
                "title": "Algorithms",
                "prerequisites": [
                    { "id": "CSCI101", "title": "Intro to Programming" },
                    { "id": "MATH201", "title": null },
                ],
            })
        );
    }
}
