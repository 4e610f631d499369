//! Ordered in-memory contact store

use crate::domain::Contact;
use crate::error::{ContactBookError, Result};
use tracing::{debug, trace};

/// Contacts kept in ascending name order.
///
/// Equal names keep their insertion order: a new contact always lands after
/// every existing contact whose name is less than or equal to its own.
/// Lookups return the first match in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        ContactStore::default()
    }

    /// Insert a contact at its sorted position
    pub fn insert(&mut self, contact: Contact) {
        // The vector is always sorted, so the first name strictly greater
        // than the new one is a partition point.
        let index = self
            .contacts
            .partition_point(|existing| existing.name <= contact.name);
        trace!(name = %contact.name, index, "inserting contact");
        self.contacts.insert(index, contact);
    }

    /// Position of the first contact whose name equals `name` exactly
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name == name)
    }

    /// First contact whose name equals `name` exactly
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.find_by_name(name).map(|index| &self.contacts[index])
    }

    /// Replace phone and email of the first contact named `name`.
    ///
    /// The name is never changed, so the contact keeps its position.
    pub fn update(&mut self, name: &str, phone: &str, email: &str) -> Result<()> {
        let index = self
            .find_by_name(name)
            .ok_or_else(|| ContactBookError::NotFound(name.to_string()))?;

        let contact = &mut self.contacts[index];
        contact.phone = phone.to_string();
        contact.email = email.to_string();
        debug!(name, index, "updated contact");
        Ok(())
    }

    /// Remove the first contact named `name` and return it
    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        let index = self
            .find_by_name(name)
            .ok_or_else(|| ContactBookError::NotFound(name.to_string()))?;

        debug!(name, index, "deleted contact");
        Ok(self.contacts.remove(index))
    }

    /// All contacts in sort order
    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl FromIterator<Contact> for ContactStore {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut store = ContactStore::new();
        store.extend(iter);
        store
    }
}

impl Extend<Contact> for ContactStore {
    fn extend<I: IntoIterator<Item = Contact>>(&mut self, iter: I) {
        for contact in iter {
            self.insert(contact);
        }
    }
}
