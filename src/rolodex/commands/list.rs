use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(book.records().cloned().collect()))
}
