//! Upcoming-birthday window.
//!
//! For every record with a birthday, the next occurrence on or after `today`
//! is found. Occurrences at most `days` away are reported, with Saturday and
//! Sunday moved to the following Monday. The move happens after the window
//! check, so a weekend birthday on the last day of the window is reported on
//! a Monday that lies past it.

use crate::book::AddressBook;
use crate::model::{Birthday, BIRTHDAY_FORMAT};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn congratulation_date_string(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

/// First occurrence of `birthday` on or after `today`, if chrono can
/// represent it.
pub fn next_occurrence(birthday: Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.in_year(today.year())?;
    if this_year < today {
        birthday.in_year(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Saturday and Sunday roll forward to Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    days: u32,
) -> Vec<UpcomingBirthday> {
    book.records()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let occurrence = next_occurrence(birthday, today)?;
            let ahead = (occurrence - today).num_days();
            if !(0..=i64::from(days)).contains(&ahead) {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: adjust_for_weekend(occurrence),
            })
        })
        .collect()
}
