use crate::error::{RolodexError, Result, ValidationError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const PHONE_DIGITS: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Contact name. Fixed once the record is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> std::result::Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number made of exactly ten ASCII digits.
///
/// ```
/// use rolodex::model::Phone;
///
/// assert!(Phone::new("0501234567").is_ok());
/// assert!(Phone::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> std::result::Result<Self, ValidationError> {
        let value = value.into();
        if value.len() != PHONE_DIGITS || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Phone {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

/// A calendar date written as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse `DD.MM.YYYY`. Day and month may drop their leading zero; the
    /// year must have four digits.
    pub fn parse(value: &str) -> std::result::Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(value.to_string());

        // chrono reads `%Y` as any number of digits and skips leading spaces
        let year = value.rsplit('.').next().unwrap_or_default();
        if year.len() != 4 || !value.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`. A Feb 29 birthday lands
    /// on Feb 28 in non-leap years. `None` only for years chrono cannot
    /// represent.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// One contact: a name, its phones in insertion order, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(with = "name_serde")]
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Removes the first matching phone. Returns whether anything was removed.
    pub fn remove_phone(&mut self, phone: &Phone) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces `old` with `new`. The new number goes to the end of the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;

        if !self.remove_phone(&old) {
            return Err(RolodexError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            });
        }
        self.add_phone(new);
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Sets or overwrites the birthday.
    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn birthday_string(&self) -> Option<String> {
        self.birthday.map(|b| b.to_string())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        let birthday = self
            .birthday_string()
            .unwrap_or_else(|| "no birthday to show".to_string());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            phones.join("; "),
            birthday
        )
    }
}

mod name_serde {
    use super::Name;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(name: &Name, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(name.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Name, D::Error> {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}
