//! # Storage Layer
//!
//! The [`BookStore`] trait loads and saves a whole [`AddressBook`]. The book
//! is read once when a session starts and written back once when it ends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file on disk, written atomically
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "contacts": [
//!     { "name": "John", "phones": ["1234567890"], "birthday": "01.01.2001" },
//!     { "name": "Jane", "phones": [] }
//!   ]
//! }
//! ```
//!
//! Contacts are written in book order and `birthday` is omitted when unset.
//! Values are validated again on load, so a hand-edited file with a bad phone
//! or date fails to load instead of producing an invalid record.

use crate::book::AddressBook;
use crate::error::Result;
use crate::model::Record;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Load the stored book. A store with nothing saved yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

/// On-disk shape of the book.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct BookFile {
    #[serde(default)]
    pub contacts: Vec<Record>,
}

impl From<&AddressBook> for BookFile {
    fn from(book: &AddressBook) -> Self {
        Self {
            contacts: book.records().cloned().collect(),
        }
    }
}

impl From<BookFile> for AddressBook {
    fn from(file: BookFile) -> Self {
        file.contacts.into_iter().collect()
    }
}
