//! Interactive menu session.
//!
//! Owns the user's [`Selection`] for the lifetime of the session and borrows
//! the catalog. Reads one line per prompt, so it can be driven by any
//! `BufRead` (stdin in production, a byte slice in tests).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::SymptomCatalog;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::selection::{Selection, SelectionError};
use crate::core::types::SymptomId;
use crate::history::{HistoryLog, DEFAULT_HISTORY_FILE};
use crate::matching::engine::MatchingEngine;
use crate::report;
use crate::utils::validation::{parse_menu_choice, parse_symptom_id, ValidationError};

#[derive(Args)]
pub struct SessionArgs {
    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// File that "save" appends selection snapshots to
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,
}

/// Execute the session subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the terminal fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SessionArgs, _format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let history = HistoryLog::new(args.history);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&catalog, history, stdin.lock(), stdout.lock(), verbose);
    session.run()?;
    Ok(())
}

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Exit,
    ShowSymptoms,
    AddSymptom,
    RemoveSymptom,
    ShowChosen,
    Diagnose,
    Clear,
    Save,
}

impl MenuAction {
    #[must_use]
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            0 => Some(Self::Exit),
            1 => Some(Self::ShowSymptoms),
            2 => Some(Self::AddSymptom),
            3 => Some(Self::RemoveSymptom),
            4 => Some(Self::ShowChosen),
            5 => Some(Self::Diagnose),
            6 => Some(Self::Clear),
            7 => Some(Self::Save),
            _ => None,
        }
    }
}

const MENU: &str = "\n=============================
  SYMPTOM CHECKER
=============================
1) Show symptoms list
2) Add symptom (by number)
3) Remove symptom (by number)
4) Show chosen symptoms
5) Diagnose (show possible conditions)
6) Clear chosen symptoms
7) Save chosen symptoms to file
0) Exit
Choose: ";

/// One interactive session over an input and output stream
pub struct Session<'a, R, W> {
    catalog: &'a SymptomCatalog,
    engine: MatchingEngine<'a>,
    selection: Selection,
    history: HistoryLog,
    input: R,
    out: W,
    verbose: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        catalog: &'a SymptomCatalog,
        history: HistoryLog,
        input: R,
        out: W,
        verbose: bool,
    ) -> Self {
        Self {
            catalog,
            engine: MatchingEngine::new(catalog),
            selection: Selection::new(),
            history,
            input,
            out,
            verbose,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompt(MENU)?;

            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };

            let Ok(choice) = parse_menu_choice(&line) else {
                writeln!(self.out, "Invalid input.")?;
                continue;
            };

            match MenuAction::from_choice(choice) {
                Some(MenuAction::Exit) => break,
                Some(action) => self.dispatch(action)?,
                None => writeln!(self.out, "Unknown option.")?,
            }
        }

        writeln!(self.out, "Bye!")?;
        self.out.flush()
    }

    fn dispatch(&mut self, action: MenuAction) -> io::Result<()> {
        match action {
            MenuAction::ShowSymptoms => report::write_symptom_list(&mut self.out, self.catalog),
            MenuAction::AddSymptom => self.add_symptom(),
            MenuAction::RemoveSymptom => self.remove_symptom(),
            MenuAction::ShowChosen => self.show_chosen(),
            MenuAction::Diagnose => {
                let outcome = self.engine.evaluate(&self.selection);
                report::write_text(&mut self.out, &outcome, self.catalog, self.verbose)
            }
            MenuAction::Clear => {
                self.selection.clear();
                writeln!(self.out, "Cleared.")
            }
            MenuAction::Save => self.save(),
            MenuAction::Exit => Ok(()),
        }
    }

    fn add_symptom(&mut self) -> io::Result<()> {
        let message = match self.prompt_symptom_id("Enter symptom number to add: ")? {
            Some(Ok(id)) => match self.selection.add(self.catalog, id) {
                Ok(()) => "Added.",
                Err(err) => selection_message(err),
            },
            Some(Err(ValidationError::OutOfRange(_))) => "No such symptom.",
            Some(Err(_)) => "Invalid input.",
            None => return Ok(()),
        };
        writeln!(self.out, "{message}")
    }

    fn remove_symptom(&mut self) -> io::Result<()> {
        let message = match self.prompt_symptom_id("Enter symptom number to remove: ")? {
            Some(Ok(id)) => match self.selection.remove(id) {
                Ok(()) => "Removed.",
                Err(err) => selection_message(err),
            },
            // Cannot have been added
            Some(Err(ValidationError::OutOfRange(_))) => {
                "That symptom is not in your chosen list."
            }
            Some(Err(_)) => "Invalid input.",
            None => return Ok(()),
        };
        writeln!(self.out, "{message}")
    }

    fn show_chosen(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- Your chosen symptoms ---")?;
        if self.selection.is_empty() {
            return writeln!(self.out, "(none)");
        }
        for &id in self.selection.list() {
            writeln!(self.out, "{id}) {}", self.catalog.symptom_label(id))?;
        }
        Ok(())
    }

    fn save(&mut self) -> io::Result<()> {
        match self.history.append(&self.selection, self.catalog) {
            Ok(()) if self.selection.is_empty() => writeln!(self.out, "Saved empty selection."),
            Ok(()) => writeln!(self.out, "Saved to {}", self.history.path().display()),
            Err(err) => {
                tracing::warn!(error = %err, "Could not save history");
                writeln!(self.out, "{err}")
            }
        }
    }

    /// Prompt and parse one id; `None` means input ended
    fn prompt_symptom_id(
        &mut self,
        prompt: &str,
    ) -> io::Result<Option<Result<SymptomId, ValidationError>>> {
        self.prompt(prompt)?;
        Ok(self.read_line()?.map(|line| parse_symptom_id(&line)))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// User-facing wording for selection failures
#[must_use]
pub fn selection_message(err: SelectionError) -> &'static str {
    match err {
        SelectionError::UnknownSymptom(_) => "No such symptom.",
        SelectionError::AlreadyPresent(_) => "Already added.",
        SelectionError::NotPresent(_) => "That symptom is not in your chosen list.",
    }
}
