//! Interactive menu loop

use crate::application::ContactBook;
use crate::cli::menu::{MenuChoice, MENU};
use crate::cli::output::{format_contact_list, format_search_result};
use crate::domain::Contact;
use crate::error::{ContactBookError, Result};
use crate::infrastructure::{ContactRepository, LoadOutcome, SaveOutcome};
use std::io::{BufRead, Write};
use tracing::debug;

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Stop,
}

/// Line-based text interface over a contact book.
///
/// Prompts and results go to `out`, save failures to `err`. End of input at
/// any prompt ends the session; a half-entered action is dropped.
pub struct Shell<I, O, E> {
    input: I,
    out: O,
    err: E,
}

impl<I: BufRead, O: Write, E: Write> Shell<I, O, E> {
    pub fn new(input: I, out: O, err: E) -> Self {
        Shell { input, out, err }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run<R: ContactRepository>(&mut self, book: &mut ContactBook<R>) -> Result<()> {
        loop {
            let Some(line) = self.prompt(&format!("{}Enter choice: ", MENU))? else {
                debug!("end of input at menu");
                return Ok(());
            };

            let choice = MenuChoice::parse(&line);
            debug!(?choice, "menu choice");
            let step = match choice {
                MenuChoice::Add => self.add(book)?,
                MenuChoice::Display => {
                    write!(self.out, "{}", format_contact_list(book.contacts()))?;
                    Step::Continue
                }
                MenuChoice::Search => self.search(book)?,
                MenuChoice::Delete => self.delete(book)?,
                MenuChoice::Update => self.update(book)?,
                MenuChoice::Exit => {
                    writeln!(self.out, "Exiting...")?;
                    Step::Stop
                }
                MenuChoice::Invalid => {
                    writeln!(self.out, "Invalid choice! Try again.")?;
                    Step::Continue
                }
            };

            if step == Step::Stop {
                return Ok(());
            }
        }
    }

    /// Tell the user how startup loading went
    pub fn report_load(&mut self, outcome: &LoadOutcome) -> Result<()> {
        match outcome {
            LoadOutcome::Loaded { .. } => writeln!(self.out, "Contacts loaded from file.")?,
            LoadOutcome::NoExistingData => {
                writeln!(self.out, "No existing contacts found (first run).")?
            }
        }
        Ok(())
    }

    /// Tell the user how a save went; a failed save is not an error here
    pub fn report_save(&mut self, outcome: &SaveOutcome) -> Result<()> {
        match outcome {
            SaveOutcome::Saved { .. } => writeln!(self.out, "Contacts saved to file.")?,
            SaveOutcome::Unwritable(_) => {
                writeln!(self.err, "Error opening file for writing.")?;
                self.err.flush()?;
            }
        }
        Ok(())
    }

    fn add<R: ContactRepository>(&mut self, book: &mut ContactBook<R>) -> Result<Step> {
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(Step::Stop);
        };
        let Some(phone) = self.prompt("Enter Phone: ")? else {
            return Ok(Step::Stop);
        };
        let Some(email) = self.prompt("Enter Email: ")? else {
            return Ok(Step::Stop);
        };

        let outcome = book.add(Contact::new(name, phone, email));
        writeln!(self.out, "Contact added successfully.")?;
        self.report_save(&outcome)?;
        Ok(Step::Continue)
    }

    fn search<R: ContactRepository>(&mut self, book: &ContactBook<R>) -> Result<Step> {
        let Some(name) = self.prompt("Enter name to search: ")? else {
            return Ok(Step::Stop);
        };

        write!(self.out, "{}", format_search_result(book.search(&name)))?;
        Ok(Step::Continue)
    }

    fn delete<R: ContactRepository>(&mut self, book: &mut ContactBook<R>) -> Result<Step> {
        let Some(name) = self.prompt("Enter name to delete: ")? else {
            return Ok(Step::Stop);
        };

        match book.delete(&name) {
            Ok(outcome) => {
                writeln!(self.out, "Contact deleted successfully.")?;
                self.report_save(&outcome)?;
            }
            Err(ContactBookError::NotFound(_)) => writeln!(self.out, "Contact not found.")?,
            Err(e) => return Err(e),
        }
        Ok(Step::Continue)
    }

    fn update<R: ContactRepository>(&mut self, book: &mut ContactBook<R>) -> Result<Step> {
        let Some(name) = self.prompt("Enter name to update: ")? else {
            return Ok(Step::Stop);
        };

        if book.search(&name).is_none() {
            writeln!(self.out, "Contact not found.")?;
            return Ok(Step::Continue);
        }

        let Some(phone) = self.prompt("Enter new phone: ")? else {
            return Ok(Step::Stop);
        };
        let Some(email) = self.prompt("Enter new email: ")? else {
            return Ok(Step::Stop);
        };

        match book.update(&name, &phone, &email) {
            Ok(outcome) => {
                writeln!(self.out, "Contact updated successfully.")?;
                self.report_save(&outcome)?;
            }
            Err(ContactBookError::NotFound(_)) => writeln!(self.out, "Contact not found.")?,
            Err(e) => return Err(e),
        }
        Ok(Step::Continue)
    }

    /// Print `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
