use crate::book::AddressBook;
use crate::commands::{existing_mut, validated_name, CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use crate::model::{Phone, Record};

pub const USAGE: &str = "add Bob 1234567890";

/// Appends `phones` to the named contact, creating it if needed.
///
/// Every phone is validated before the book is touched, so a bad number
/// never leaves a half-created contact behind.
pub fn run<P: AsRef<str>>(
    book: &mut AddressBook,
    name: &str,
    phones: &[P],
) -> Result<CmdResult> {
    if phones.is_empty() {
        return Err(RolodexError::Usage(USAGE.to_string()));
    }
    let name = validated_name(name)?;
    let phones = phones
        .iter()
        .map(|p| Phone::new(p.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let created = book.find(name.as_str()).is_none();
    if created {
        book.add_record(Record::new(name.clone()));
    }
    let record = existing_mut(book, name.as_str())?;
    for phone in &phones {
        record.add_phone(phone.clone());
    }

    let listed: Vec<&str> = phones.iter().map(Phone::as_str).collect();
    let verb = if created { "added" } else { "updated" };
    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Contact {} {} with phone {}.",
        name,
        verb,
        listed.join(", ")
    )));
    Ok(result)
}
