use crate::birthdays::upcoming_birthdays;
use crate::book::AddressBook;
use crate::commands::{existing, existing_mut, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Birthday;
use chrono::NaiveDate;

pub const ADD_USAGE: &str = "add-birthday Bob 01.01.2001";
pub const SHOW_USAGE: &str = "show-birthday Bob";
pub const UPCOMING_USAGE: &str = "birthdays [days]";

/// Sets or overwrites the contact's birthday.
pub fn add(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    let record = existing_mut(book, name)?;
    record.add_birthday(Birthday::parse(birthday)?);

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!("Birthday added for {}.", name)));
    Ok(result)
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = existing(book, name)?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}

pub fn upcoming(book: &AddressBook, today: NaiveDate, days: u32) -> Result<CmdResult> {
    let upcoming = upcoming_birthdays(book, today, days);
    let mut result = CmdResult::default();
    if upcoming.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days.",
            days
        )));
    }
    Ok(result.with_upcoming(upcoming))
}
