use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

pub const USAGE: &str = "delete Bob";

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book
        .delete(name)
        .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))?;

    let mut result = CmdResult::default().with_affected_records(vec![removed]);
    result.add_message(CmdMessage::success(format!("Contact {} deleted.", name)));
    Ok(result)
}
