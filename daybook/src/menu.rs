//! Interactive menu loop.
//!
//! Every action returns to the menu prompt. Bad input and storage failures
//! are reported inline and never end the session; only the Exit choice or
//! end of input does.

use std::io::{self, BufRead, Write};

use daybook_core::format::{format_diary_line, format_total_savings};
use daybook_core::{Database, Error, Record};

use crate::scanner::Scanner;

const MENU: &str = "\nDiary and Savings\n\
                    1. Add Diary Entry\n\
                    2. View Diary Entries\n\
                    3. Add Daily Savings\n\
                    4. View Total Savings\n\
                    5. Exit\n\
                    Choose: ";

const INVALID: &str = "Invalid.";

/// Actions offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddDiary,
    ViewDiary,
    AddSavings,
    ViewSavings,
    Exit,
}

impl MenuChoice {
    /// Map a menu number (1-5) to its action
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddDiary),
            2 => Some(MenuChoice::ViewDiary),
            3 => Some(MenuChoice::AddSavings),
            4 => Some(MenuChoice::ViewSavings),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
    EndOfInput,
}

pub struct Menu<'a, R, W> {
    db: &'a Database,
    input: Scanner<R>,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(db: &'a Database, input: R, out: W) -> Self {
        Self {
            db,
            input: Scanner::new(input),
            out,
        }
    }

    /// Run until the user exits or input runs out.
    ///
    /// Only failures writing to the output are returned.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step()? {
                Step::Continue => {}
                Step::Exit => {
                    tracing::info!("User exited");
                    return Ok(());
                }
                Step::EndOfInput => {
                    tracing::info!("Input closed, ending session");
                    self.out.flush()?;
                    return Ok(());
                }
            }
        }
    }

    fn step(&mut self) -> io::Result<Step> {
        self.prompt(MENU)?;

        let Some(token) = self.input.next_token()? else {
            return Ok(Step::EndOfInput);
        };

        let Ok(number) = token.parse::<i32>() else {
            tracing::debug!(%token, "Rejected menu input");
            writeln!(self.out, "{INVALID}")?;
            return Ok(Step::Continue);
        };
        // The rest of the choice line is ignored.
        self.input.next_line()?;

        match MenuChoice::from_number(number) {
            Some(MenuChoice::AddDiary) => self.add_diary(),
            Some(MenuChoice::ViewDiary) => self.view_diary(),
            Some(MenuChoice::AddSavings) => self.add_savings(),
            Some(MenuChoice::ViewSavings) => self.view_savings(),
            Some(MenuChoice::Exit) => {
                writeln!(self.out, "Goodbye!")?;
                self.out.flush()?;
                Ok(Step::Exit)
            }
            None => {
                writeln!(self.out, "{INVALID}")?;
                Ok(Step::Continue)
            }
        }
    }

    fn add_diary(&mut self) -> io::Result<Step> {
        self.prompt("Enter today's diary entry: ")?;
        let Some(text) = self.input.next_line()? else {
            return Ok(Step::EndOfInput);
        };

        match Record::diary(text).save(self.db) {
            Ok(_) => writeln!(self.out, "Diary entry saved!")?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save diary entry");
                writeln!(self.out, "Error saving entry: {e}")?;
            }
        }
        Ok(Step::Continue)
    }

    fn view_diary(&mut self) -> io::Result<Step> {
        let out = &mut self.out;
        let listed = self.db.visit_diary(|date, entry| {
            writeln!(out, "{}", format_diary_line(date, entry))?;
            Ok(())
        });

        match listed {
            Ok(0) => writeln!(self.out, "No diary entries found.")?,
            Ok(count) => tracing::debug!(count, "Listed diary entries"),
            Err(Error::Io(e)) => return Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list diary entries");
                writeln!(self.out, "Error retrieving entries: {e}")?;
            }
        }
        Ok(Step::Continue)
    }

    fn add_savings(&mut self) -> io::Result<Step> {
        self.prompt("Enter amount saved today: ")?;
        let Some(token) = self.input.next_token()? else {
            return Ok(Step::EndOfInput);
        };

        let Ok(amount) = token.parse::<f64>() else {
            tracing::debug!(%token, "Rejected savings amount");
            writeln!(self.out, "{INVALID}")?;
            return Ok(Step::Continue);
        };

        match Record::savings(amount).save(self.db) {
            Ok(_) => writeln!(self.out, "Savings recorded!")?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save savings amount");
                writeln!(self.out, "Error saving amount: {e}")?;
            }
        }
        self.input.next_line()?;
        Ok(Step::Continue)
    }

    fn view_savings(&mut self) -> io::Result<Step> {
        match self.db.total_savings() {
            Ok(total) => writeln!(self.out, "{}", format_total_savings(total))?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to total savings");
                writeln!(self.out, "Error retrieving savings: {e}")?;
            }
        }
        Ok(Step::Continue)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }
}
