use crate::book::AddressBook;
use crate::commands::{existing_mut, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Phone;

pub const USAGE: &str = "change Ross 1234567890";

/// Replaces the contact's first phone with `phone`.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let new_phone = Phone::new(phone)?;
    let record = existing_mut(book, name)?;

    let mut result = CmdResult::default();
    let Some(first) = record.phones().first().cloned() else {
        result.add_message(CmdMessage::warning("No phone number to update."));
        return Ok(result);
    };

    record.edit_phone(first.as_str(), new_phone.as_str())?;
    result.affected_records.push(record.clone());
    result.add_message(CmdMessage::success(format!(
        "Contact {} updated with new phone {}.",
        name, new_phone
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RolodexError;
    use crate::store::memory::fixtures::StoreFixture;

    fn phones(book: &AddressBook, name: &str) -> Vec<String> {
        book.find(name)
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn replaces_first_phone() {
        let mut book = StoreFixture::new()
            .with_contact("Ross", &["1111111111", "2222222222"])
            .book();

        let result = run(&mut book, "Ross", "3333333333").unwrap();

        assert_eq!(phones(&book, "Ross"), vec!["2222222222", "3333333333"]);
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(
            result.messages[0].content,
            "Contact Ross updated with new phone 3333333333."
        );
    }

    #[test]
    fn unknown_contact_is_not_found() {
        let mut book = AddressBook::new();
        assert!(matches!(
            run(&mut book, "Ghost", "1234567890"),
            Err(RolodexError::ContactNotFound(ref n)) if n == "Ghost"
        ));
    }

    #[test]
    fn contact_without_phones_warns() {
        let mut book = StoreFixture::new().with_contact("Ross", &[]).book();

        let result = run(&mut book, "Ross", "1234567890").unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(phones(&book, "Ross").is_empty());
    }

    #[test]
    fn invalid_phone_keeps_old_number() {
        let mut book = StoreFixture::new()
            .with_contact("Ross", &["1111111111"])
            .book();

        assert!(matches!(
            run(&mut book, "Ross", "abc"),
            Err(RolodexError::Validation(_))
        ));
        assert_eq!(phones(&book, "Ross"), vec!["1111111111"]);
    }
}
