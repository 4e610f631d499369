//! Backing file repository

use crate::domain::ContactStore;
use crate::error::ContactBookError;
use crate::infrastructure::text_format::{decode_contacts, encode_contacts};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the backing file
pub const DEFAULT_DATA_FILE: &str = "contacts.txt";

/// What happened when the backing file was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File was read; `records` contacts were inserted into the store
    Loaded {
        records: usize,
        discarded_lines: usize,
    },
    /// File is absent or cannot be opened; the store was left untouched
    NoExistingData,
}

/// What happened when the store was written out
#[derive(Debug)]
pub enum SaveOutcome {
    Saved { records: usize },
    /// Always carries `ContactBookError::FileUnwritable`
    Unwritable(ContactBookError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }
}

/// Abstract persistence for the contact store
pub trait ContactRepository {
    /// Location of the backing file
    fn path(&self) -> &Path;

    /// Insert every stored record into `store` through the sorted insert
    fn load_into(&self, store: &mut ContactStore) -> LoadOutcome;

    /// Overwrite the backing file with the store's current contents
    fn save(&self, store: &ContactStore) -> SaveOutcome;
}

/// Plain text file implementation of ContactRepository
#[derive(Debug, Clone)]
pub struct TextFileRepository {
    pub path: PathBuf,
}

impl TextFileRepository {
    /// Create a repository backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextFileRepository { path: path.into() }
    }

    fn try_save(&self, store: &ContactStore) -> std::io::Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(encode_contacts(store.iter()).as_bytes())?;
        writer.flush()
    }
}

impl ContactRepository for TextFileRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load_into(&self, store: &mut ContactStore) -> LoadOutcome {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no contacts file to load");
                return LoadOutcome::NoExistingData;
            }
        };

        // Opening a directory succeeds on unix; reading it does not.
        if file.metadata().map(|m| m.is_dir()).unwrap_or(false) {
            debug!(path = %self.path.display(), "contacts path is a directory");
            return LoadOutcome::NoExistingData;
        }

        let decoded = decode_contacts(BufReader::new(file));
        let records = decoded.contacts.len();
        store.extend(decoded.contacts);

        info!(path = %self.path.display(), records, "loaded contacts");
        LoadOutcome::Loaded {
            records,
            discarded_lines: decoded.discarded_lines,
        }
    }

    fn save(&self, store: &ContactStore) -> SaveOutcome {
        match self.try_save(store) {
            Ok(()) => {
                info!(path = %self.path.display(), records = store.len(), "saved contacts");
                SaveOutcome::Saved {
                    records: store.len(),
                }
            }
            Err(source) => {
                info!(path = %self.path.display(), error = %source, "cannot write contacts file");
                SaveOutcome::Unwritable(ContactBookError::FileUnwritable {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contact;
    use std::fs;
    use tempfile::TempDir;

    fn sample_store() -> ContactStore {
        [
            Contact::new("Zoe", "3", "zoe@x.com"),
            Contact::new("Ann", "1", "ann@x.com"),
            Contact::new("Ben", "2", "ben@x.com"),
            Contact::new("Ann", "4", "ann2@x.com"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_save_writes_records_in_order() {
        let temp = TempDir::new().unwrap();
        let repo = TextFileRepository::new(temp.path().join("contacts.txt"));

        let outcome = repo.save(&sample_store());

        assert!(matches!(outcome, SaveOutcome::Saved { records: 4 }));
        let content = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(
            content,
            "Ann\n1\nann@x.com\nAnn\n4\nann2@x.com\nBen\n2\nben@x.com\nZoe\n3\nzoe@x.com\n"
        );
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.txt");
        fs::write(&path, "Old\nstuff\nhere\nMore\nold\nstuff\n").unwrap();
        let repo = TextFileRepository::new(&path);

        let store: ContactStore = vec![Contact::new("New", "1", "n@x.com")].into_iter().collect();
        assert!(repo.save(&store).is_saved());

        assert_eq!(fs::read_to_string(&path).unwrap(), "New\n1\nn@x.com\n");
    }

    #[test]
    fn test_save_empty_store_truncates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.txt");
        fs::write(&path, "Ann\n1\na@x.com\n").unwrap();

        let outcome = TextFileRepository::new(&path).save(&ContactStore::new());

        assert!(matches!(outcome, SaveOutcome::Saved { records: 0 }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_to_missing_directory_is_unwritable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("contacts.txt");
        let repo = TextFileRepository::new(&path);

        match repo.save(&sample_store()) {
            SaveOutcome::Unwritable(ContactBookError::FileUnwritable { path: p, .. }) => {
                assert_eq!(p, path)
            }
            other => panic!("Expected Unwritable, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_save_to_directory_is_unwritable() {
        let temp = TempDir::new().unwrap();
        let repo = TextFileRepository::new(temp.path());

        assert!(!repo.save(&sample_store()).is_saved());
    }

    #[test]
    fn test_load_missing_file_is_no_existing_data() {
        let temp = TempDir::new().unwrap();
        let repo = TextFileRepository::new(temp.path().join("contacts.txt"));
        let mut store = ContactStore::new();

        assert_eq!(repo.load_into(&mut store), LoadOutcome::NoExistingData);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_directory_is_no_existing_data() {
        let temp = TempDir::new().unwrap();
        let repo = TextFileRepository::new(temp.path());
        let mut store = ContactStore::new();

        assert_eq!(repo.load_into(&mut store), LoadOutcome::NoExistingData);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_sorts_unsorted_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.txt");
        fs::write(&path, "Zoe\n1\nz@x.com\nAnn\n2\na@x.com\nBen\n3\nb@x.com\n").unwrap();
        let mut store = ContactStore::new();

        let outcome = TextFileRepository::new(&path).load_into(&mut store);

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                records: 3,
                discarded_lines: 0
            }
        );
        let names: Vec<&str> = store.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Ben", "Zoe"]);
    }

    #[test]
    fn test_load_discards_trailing_partial_record() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.txt");
        fs::write(&path, "Bob\n555-1234\nbob@x.com\nAnn\n555-5678").unwrap();
        let mut store = ContactStore::new();

        let outcome = TextFileRepository::new(&path).load_into(&mut store);

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                records: 1,
                discarded_lines: 2
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.list_all()[0],
            Contact::new("Bob", "555-1234", "bob@x.com")
        );
    }

    #[test]
    fn test_load_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.txt");
        fs::write(&path, "").unwrap();
        let mut store = ContactStore::new();

        let outcome = TextFileRepository::new(&path).load_into(&mut store);

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                records: 0,
                discarded_lines: 0
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load_reproduces_sequence() {
        let temp = TempDir::new().unwrap();
        let repo = TextFileRepository::new(temp.path().join("contacts.txt"));
        let original = sample_store();

        assert!(repo.save(&original).is_saved());

        let mut reloaded = ContactStore::new();
        repo.load_into(&mut reloaded);
        assert_eq!(reloaded, original);
    }
}
