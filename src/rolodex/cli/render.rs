use colored::Colorize;
use rolodex::api::{CmdMessage, CmdResult, MessageLevel};
use rolodex::error::RolodexError;
use rolodex::model::Phone;

pub(super) fn render_messages(messages: &[CmdMessage]) -> Vec<String> {
    messages
        .iter()
        .map(|message| match message.level {
            MessageLevel::Info => message.content.dimmed().to_string(),
            MessageLevel::Success => message.content.green().to_string(),
            MessageLevel::Warning => message.content.yellow().to_string(),
            MessageLevel::Error => message.content.red().to_string(),
        })
        .collect()
}

pub(super) fn render_phones(result: &CmdResult) -> Vec<String> {
    result
        .listed_records
        .iter()
        .map(|record| {
            if record.phones().is_empty() {
                format!("{} has no phone numbers.", record.name())
            } else {
                let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
                format!("{}'s phone numbers: {}", record.name(), phones.join(", "))
            }
        })
        .collect()
}

pub(super) fn render_contacts(result: &CmdResult) -> Vec<String> {
    if result.listed_records.is_empty() {
        return vec!["No contacts in the address book.".to_string()];
    }
    result
        .listed_records
        .iter()
        .map(|record| record.to_string())
        .collect()
}

pub(super) fn render_birthday(result: &CmdResult) -> Vec<String> {
    result
        .listed_records
        .iter()
        .map(|record| match record.birthday_string() {
            Some(birthday) => birthday,
            None => format!("{} has no birthday set.", record.name()),
        })
        .collect()
}

pub(super) fn render_upcoming(result: &CmdResult) -> Vec<String> {
    if result.upcoming.is_empty() {
        return render_messages(&result.messages);
    }
    result
        .upcoming
        .iter()
        .map(|entry| {
            format!(
                "{}: {}",
                entry.name,
                entry.congratulation_date_string().yellow()
            )
        })
        .collect()
}

pub(super) fn render_error(err: &RolodexError) -> Vec<String> {
    render_messages(&[CmdMessage::error(error_message(err))])
}

/// The one-line message shown when a command fails.
pub(super) fn error_message(err: &RolodexError) -> String {
    match err {
        RolodexError::Usage(pattern) => format!("Please try pattern '{}'", pattern),
        RolodexError::ContactNotFound(name) => {
            format!("We don't have {} in the address book, try another", name)
        }
        RolodexError::PhoneNotFound { .. } => err.to_string(),
        RolodexError::Validation(detail) => format!("Enter valid input: {}", detail),
        other => format!("Error: {}", other),
    }
}
