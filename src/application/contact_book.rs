//! Contact book use cases
//!
//! Couples the ordered store with its backing file: every successful
//! mutation rewrites the whole file, and the book is written once more when
//! it is closed or dropped.

use crate::domain::{Contact, ContactStore};
use crate::error::Result;
use crate::infrastructure::{ContactRepository, LoadOutcome, SaveOutcome};
use tracing::debug;

/// Service owning the contact store and its repository
pub struct ContactBook<R: ContactRepository> {
    store: ContactStore,
    repository: R,
    closed: bool,
}

impl<R: ContactRepository> ContactBook<R> {
    /// Open a book, populating it from the repository
    pub fn open(repository: R) -> (Self, LoadOutcome) {
        let mut store = ContactStore::new();
        let outcome = repository.load_into(&mut store);
        debug!(path = %repository.path().display(), ?outcome, "opened contact book");

        let book = ContactBook {
            store,
            repository,
            closed: false,
        };
        (book, outcome)
    }

    /// All contacts in name order
    pub fn contacts(&self) -> &[Contact] {
        self.store.list_all()
    }

    /// First contact whose name matches exactly
    pub fn search(&self, name: &str) -> Option<&Contact> {
        self.store.get(name)
    }

    /// Insert a contact and persist
    pub fn add(&mut self, contact: Contact) -> SaveOutcome {
        debug!(name = %contact.name, "adding contact");
        self.store.insert(contact);
        self.save()
    }

    /// Delete the first contact named `name` and persist.
    ///
    /// Nothing is written when the name is unknown.
    pub fn delete(&mut self, name: &str) -> Result<SaveOutcome> {
        self.store.delete(name)?;
        Ok(self.save())
    }

    /// Replace phone and email of the first contact named `name` and persist.
    ///
    /// Nothing is written when the name is unknown.
    pub fn update(&mut self, name: &str, phone: &str, email: &str) -> Result<SaveOutcome> {
        self.store.update(name, phone, email)?;
        Ok(self.save())
    }

    /// Write the whole store to the repository
    pub fn save(&self) -> SaveOutcome {
        self.repository.save(&self.store)
    }

    /// Final save before the book is discarded
    pub fn close(mut self) -> SaveOutcome {
        self.closed = true;
        self.save()
    }
}

impl<R: ContactRepository> Drop for ContactBook<R> {
    fn drop(&mut self) {
        if !self.closed {
            debug!("contact book dropped without close, saving");
            if let SaveOutcome::Unwritable(_) = self.repository.save(&self.store) {
                eprintln!("Error opening file for writing.");
            }
        }
    }
}
