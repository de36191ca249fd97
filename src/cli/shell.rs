//! Interactive menu-driven course planner
//!
//! The shell reads menu choices line by line and answers them against a
//! single [`Catalog`]. Queries are refused until a load has produced at least
//! one course. End of input exits as if `9` had been chosen, without the
//! farewell.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use planner::{Catalog, Config, CourseId};
use tracing::instrument;

use super::{list::write_schedule, show::write_course, terminal::Painter};

const MENU: &str = concat!(
    "\n1. Load Data Structure.\n",
    "2. Print Course List.\n",
    "3. Print Course.\n",
    "9. Exit\n",
    "\nWhat would you like to do? ",
);

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Load,
    PrintList,
    PrintCourse,
    Exit,
}

impl Choice {
    const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Load),
            2 => Some(Self::PrintList),
            3 => Some(Self::PrintCourse),
            9 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    config: &'a Config,
    catalog: Catalog,
    loaded: bool,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(input: R, output: W, config: &'a Config) -> Self {
        Self {
            input,
            output,
            config,
            catalog: Catalog::default(),
            loaded: false,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Only I/O errors on the terminal itself are returned; problems with the
    /// data file are reported to the user and the loop continues.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the course planner.")?;

        loop {
            self.prompt(MENU)?;
            let Some(raw) = self.read_line()? else {
                break;
            };
            if raw.is_empty() {
                continue;
            }

            if !raw.bytes().all(|b| b.is_ascii_digit()) {
                writeln!(self.output, "{raw} is not a valid option.")?;
                continue;
            }

            let Ok(number) = raw.parse::<u32>() else {
                writeln!(self.output, "{raw} is not a valid option.")?;
                continue;
            };
            let Some(choice) = Choice::from_number(number) else {
                writeln!(self.output, "{number} is not a valid option.")?;
                continue;
            };

            match choice {
                Choice::Load => {
                    if !self.load()? {
                        break;
                    }
                }
                Choice::PrintList => {
                    if self.require_loaded("printing the course list")? {
                        write_schedule(&mut self.output, &self.catalog, false, Painter::plain())?;
                    }
                }
                Choice::PrintCourse => {
                    if self.require_loaded("printing a course")? && !self.print_course()? {
                        break;
                    }
                }
                Choice::Exit => {
                    writeln!(self.output, "Thank you for using the course planner!")?;
                    break;
                }
            }
        }

        self.output.flush()
    }

    /// Prompts for a file name and loads it. Returns `false` on end of input.
    #[instrument(level = "debug", skip(self))]
    fn load(&mut self) -> io::Result<bool> {
        self.prompt("Enter the name of the data file: ")?;
        let Some(filename) = self.read_line()? else {
            return Ok(false);
        };

        match self.catalog.load(Path::new(&filename), self.config) {
            Ok(report) => {
                self.loaded = report.count > 0;
                if self.loaded {
                    writeln!(
                        self.output,
                        "Loaded {} courses from '{filename}'.",
                        report.count
                    )?;
                } else {
                    writeln!(self.output, "No courses were loaded from '{filename}'.")?;
                }
                if !report.is_clean() {
                    tracing::debug!(defects = report.defects.len(), "catalog has defects");
                }
                for defect in &report.defects {
                    writeln!(self.output, "Warning: {defect}")?;
                }
            }
            Err(e) => {
                tracing::debug!("load failed: {e}");
                self.loaded = false;
                writeln!(self.output, "Error: {e}")?;
            }
        }

        Ok(true)
    }

    /// Prompts for a course number and prints it. Returns `false` on end of
    /// input.
    fn print_course(&mut self) -> io::Result<bool> {
        self.prompt("What course do you want to know about? ")?;

        let query = loop {
            match self.read_line()? {
                None => return Ok(false),
                Some(line) if line.is_empty() => {}
                Some(line) => break CourseId::new(&line),
            }
        };

        match self.catalog.find(&query) {
            Some(course) => {
                write_course(&mut self.output, &self.catalog, course, Painter::plain())?;
            }
            None => writeln!(
                self.output,
                "Sorry, I don't have a course with ID '{query}'."
            )?,
        }
        Ok(true)
    }

    fn require_loaded(&mut self, action: &str) -> io::Result<bool> {
        if !self.loaded {
            writeln!(
                self.output,
                "Please load the data first (Option 1) before {action}."
            )?;
        }
        Ok(self.loaded)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
