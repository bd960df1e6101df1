use rolodex::commands::{add, birthday, change, delete, phone};
use rolodex::error::{Result, RolodexError};

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phones: Vec<String> },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    Delete { name: String },
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays { days: Option<u32> },
    Exit,
    Empty,
    Unknown(String),
}

/// Splits on whitespace and matches the first word, case-insensitively,
/// against the known commands. Arguments keep their case.
pub fn parse_line(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Command::Empty);
    };
    let args: Vec<String> = words.map(str::to_string).collect();

    let command = command.to_lowercase();
    let parsed = match command.as_str() {
        "hello" => Command::Hello,
        "close" | "exit" => Command::Exit,
        "all" => Command::All,
        "add" => match args.split_first() {
            Some((name, phones)) if !phones.is_empty() => Command::Add {
                name: name.clone(),
                phones: phones.to_vec(),
            },
            _ => return Err(usage(add::USAGE)),
        },
        "change" => match args.as_slice() {
            [name, phone] => Command::Change {
                name: name.clone(),
                phone: phone.clone(),
            },
            _ => return Err(usage(change::USAGE)),
        },
        "phone" => Command::Phone {
            name: first(&args, phone::USAGE)?,
        },
        "delete" => match args.as_slice() {
            [name] => Command::Delete { name: name.clone() },
            _ => return Err(usage(delete::USAGE)),
        },
        "add-birthday" => match args.as_slice() {
            [name, birthday] => Command::AddBirthday {
                name: name.clone(),
                birthday: birthday.clone(),
            },
            _ => return Err(usage(birthday::ADD_USAGE)),
        },
        "show-birthday" => Command::ShowBirthday {
            name: first(&args, birthday::SHOW_USAGE)?,
        },
        "birthdays" => match args.as_slice() {
            [] => Command::Birthdays { days: None },
            [days] => Command::Birthdays {
                days: Some(
                    days.parse()
                        .map_err(|_| usage(birthday::UPCOMING_USAGE))?,
                ),
            },
            _ => return Err(usage(birthday::UPCOMING_USAGE)),
        },
        _ => Command::Unknown(command.clone()),
    };
    Ok(parsed)
}

fn first(args: &[String], pattern: &str) -> Result<String> {
    args.first().cloned().ok_or_else(|| usage(pattern))
}

fn usage(pattern: &str) -> RolodexError {
    RolodexError::Usage(pattern.to_string())
}
