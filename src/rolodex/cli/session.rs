use super::parse::{parse_line, Command};
use super::render::{
    render_birthday, render_contacts, render_error, render_messages, render_phones,
    render_upcoming,
};
use rolodex::api::RolodexApi;
use rolodex::error::{Result, RolodexError, ValidationError};
use rolodex::store::BookStore;
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter a command: ";

/// Runs the prompt loop until `close`, `exit` or end of input, then saves.
///
/// Command failures, including lines that are not valid UTF-8, are
/// reported on `out` and the loop carries on. Only I/O failures and the
/// final save end the session with an error.
pub fn run<S, R, W>(api: &mut RolodexApi<S>, mut input: R, out: &mut W) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Welcome to the assistant bot!")?;
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            writeln!(out, "Good bye!")?;
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end(),
            Err(e) => {
                tracing::debug!(error = %e, "Input line is not UTF-8");
                let err = RolodexError::from(ValidationError::InvalidEncoding);
                for line in render_error(&err) {
                    writeln!(out, "{}", line)?;
                }
                continue;
            }
        };

        let command = match parse_line(line) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(error = %e, line = %line, "Could not parse command");
                for line in render_error(&e) {
                    writeln!(out, "{}", line)?;
                }
                continue;
            }
        };

        match command {
            Command::Exit => {
                writeln!(out, "Good bye!")?;
                break;
            }
            Command::Empty => continue,
            command => {
                for line in respond(api, command)? {
                    writeln!(out, "{}", line)?;
                }
            }
        }
    }

    api.save()?;
    tracing::debug!("Session ended");
    Ok(())
}

/// Output lines for one command. Recoverable errors become a message.
fn respond<S: BookStore>(api: &mut RolodexApi<S>, command: Command) -> Result<Vec<String>> {
    tracing::debug!(?command, "Dispatching");
    match dispatch(api, &command) {
        Ok(lines) => Ok(lines),
        Err(e) if e.is_recoverable() => {
            tracing::debug!(error = %e, "Command failed");
            Ok(render_error(&e))
        }
        Err(e) => Err(e),
    }
}

fn dispatch<S: BookStore>(api: &mut RolodexApi<S>, command: &Command) -> Result<Vec<String>> {
    let lines = match command {
        Command::Hello => vec!["How can I help you?".to_string()],
        Command::Add { name, phones } => render_messages(&api.add_contact(name, phones)?.messages),
        Command::Change { name, phone } => {
            render_messages(&api.change_contact(name, phone)?.messages)
        }
        Command::Phone { name } => render_phones(&api.show_phone(name)?),
        Command::All => render_contacts(&api.list_contacts()?),
        Command::Delete { name } => render_messages(&api.delete_contact(name)?.messages),
        Command::AddBirthday { name, birthday } => {
            render_messages(&api.add_birthday(name, birthday)?.messages)
        }
        Command::ShowBirthday { name } => render_birthday(&api.show_birthday(name)?),
        Command::Birthdays { days } => render_upcoming(&api.upcoming_birthdays(*days)?),
        Command::Unknown(_) => vec!["Invalid command.".to_string()],
        Command::Exit | Command::Empty => Vec::new(),
    };
    Ok(lines)
}
