//! Interactive menu loop
//!
//! States: menu → {loading, listing, lookup, tree} → menu, until exit.
//! Generic over input and output so it can be driven by tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::application::services::{CatalogLoader, LoadReport};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::Catalog;

/// Parsed menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Lookup,
    Tree,
    Exit,
    Invalid(String),
}

impl From<&str> for MenuChoice {
    fn from(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Load,
            "2" => MenuChoice::List,
            "3" => MenuChoice::Lookup,
            "4" => MenuChoice::Tree,
            "9" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

const MENU: [&str; 5] = [
    "1. Load Data Structure",
    "2. Print course list",
    "3. Print course",
    "4. Print catalog tree",
    "9. Exit",
];

pub struct Shell<'a, R, W> {
    loader: &'a CatalogLoader,
    course_file: PathBuf,
    catalog: Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        loader: &'a CatalogLoader,
        course_file: impl Into<PathBuf>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            loader,
            course_file: course_file.into(),
            catalog: Catalog::new(),
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        self.run_loop()
            .map_err(|e| CliError::io("console input/output failed", e))
    }

    fn run_loop(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(token) = self.read_token()? else {
                debug!("input closed, leaving menu");
                return self.goodbye();
            };

            match MenuChoice::from(token.as_str()) {
                MenuChoice::Load => self.load()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Lookup => self.lookup()?,
                MenuChoice::Tree => self.print_tree()?,
                MenuChoice::Exit => return self.goodbye(),
                MenuChoice::Invalid(choice) => output::failure(
                    &mut self.output,
                    &format!("{} is not a valid choice!!", choice),
                )?,
            }
        }
    }

    /// Next whitespace-delimited token, skipping blank lines. `None` at end of input.
    fn read_token(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        output::header(&mut self.output, "Welcome to course planner:")?;
        for entry in MENU {
            output::info(&mut self.output, entry)?;
        }
        output::prompt(&mut self.output, "Enter choice:")
    }

    /// Replaces the catalog with a fresh one loaded from the course file.
    #[instrument(level = "debug", skip(self), fields(file = %self.course_file.display()))]
    fn load(&mut self) -> io::Result<()> {
        self.catalog = Catalog::new();
        match self.loader.load_into(&self.course_file, &mut self.catalog) {
            Ok(report) => self.print_report(&report),
            Err(e) => output::failure(&mut self.output, &e),
        }
    }

    fn print_report(&mut self, report: &LoadReport) -> io::Result<()> {
        for rejected in &report.rejected {
            output::failure(&mut self.output, "INVALID COURSE!!")?;
            output::failure(
                &mut self.output,
                &format!(
                    "Cannot add: {} (unknown prerequisites: {})",
                    rejected.id,
                    rejected.missing.join(", ")
                ),
            )?;
        }
        output::success(
            &mut self.output,
            &format!(
                "Loaded {} courses from {}",
                report.admitted,
                self.course_file.display()
            ),
        )
    }

    fn list(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return output::warning(
                &mut self.output,
                "No courses loaded. Choose 1 to load the data structure.",
            );
        }
        for course in self.catalog.iter() {
            output::info(&mut self.output, course)?;
        }
        Ok(())
    }

    fn lookup(&mut self) -> io::Result<()> {
        output::prompt(&mut self.output, "Which course would you like to know about?")?;
        let Some(id) = self.read_token()? else {
            return Ok(());
        };

        match self.catalog.search(&id) {
            Some(course) => {
                output::info(&mut self.output, course)?;
                if let Some(prerequisites) = course.prerequisite_line() {
                    output::info(&mut self.output, &format!("Prerequisites: {}", prerequisites))?;
                }
                writeln!(self.output)
            }
            None => output::failure(&mut self.output, &format!("CourseID: {} not found.", id)),
        }
    }

    fn print_tree(&mut self) -> io::Result<()> {
        let Some(tree) = self.catalog.to_tree() else {
            return output::warning(&mut self.output, "Catalog is empty.");
        };
        write!(self.output, "{}", tree)?;
        output::action(
            &mut self.output,
            "Depth",
            &format!("{} ({} courses)", self.catalog.depth(), self.catalog.len()),
        )
    }

    fn goodbye(&mut self) -> io::Result<()> {
        output::info(&mut self.output, "Goodbye")?;
        self.output.flush()
    }
}
