use crate::book::AddressBook;
use crate::commands::{existing, CmdResult};
use crate::error::Result;

pub const USAGE: &str = "phone Dave";

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = existing(book, name)?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}
