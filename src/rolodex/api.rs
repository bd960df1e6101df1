//! # API Facade
//!
//! [`RolodexApi`] is the single entry point for address-book operations. It
//! owns the in-memory [`AddressBook`] for the length of a session: the book is
//! loaded from the store when the API is built and written back by
//! [`RolodexApi::save`].
//!
//! The API dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It
//! does no formatting and never touches stdout.
//!
//! `RolodexApi<S: BookStore>` is generic over the storage backend:
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};

pub struct RolodexApi<S: BookStore> {
    store: S,
    book: AddressBook,
    upcoming_days: u32,
}

impl<S: BookStore> RolodexApi<S> {
    /// Loads the book from `store`.
    pub fn new(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            upcoming_days: DEFAULT_WINDOW_DAYS,
        })
    }

    pub fn with_upcoming_days(mut self, days: u32) -> Self {
        self.upcoming_days = days;
        self
    }

    pub fn add_contact<P: AsRef<str>>(
        &mut self,
        name: &str,
        phones: &[P],
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phones)
    }

    pub fn change_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.book, name, phone)
    }

    pub fn show_phone(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<commands::CmdResult> {
        commands::birthday::add(&mut self.book, name, birthday)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    /// Birthdays in the next `days` days (the configured default when `None`),
    /// counted from the local date.
    pub fn upcoming_birthdays(&self, days: Option<u32>) -> Result<commands::CmdResult> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        days: Option<u32>,
    ) -> Result<commands::CmdResult> {
        let days = days.unwrap_or(self.upcoming_days);
        commands::birthday::upcoming(&self.book, today, days)
    }

    /// Writes the current book to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
