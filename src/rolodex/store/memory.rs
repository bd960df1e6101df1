use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: AddressBook,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self { book, saves: 0 }
    }

    /// The last saved book.
    pub fn saved(&self) -> &AddressBook {
        &self.book
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Birthday, Name, Phone, Record};

    pub struct StoreFixture {
        book: AddressBook,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            for phone in phones {
                record.add_phone(Phone::new(*phone).unwrap());
            }
            self.book.add_record(record);
            self
        }

        /// Adds a contact with one phone and the given `DD.MM.YYYY` birthday.
        pub fn with_birthday_contact(mut self, name: &str, birthday: &str) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            record.add_phone(Phone::new("0000000000").unwrap());
            record.add_birthday(Birthday::parse(birthday).unwrap());
            self.book.add_record(record);
            self
        }

        pub fn book(&self) -> AddressBook {
            self.book.clone()
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::with_book(self.book)
        }
    }
}
