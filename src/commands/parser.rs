//! Turning an input line into a command.

/// A command recognised by the assistant, with its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add(Vec<String>),
    Change(Vec<String>),
    Phone(Vec<String>),
    All,
    AddBirthday(Vec<String>),
    ShowBirthday(Vec<String>),
    Birthdays,
    Delete(Vec<String>),
    Exit,
    Unknown(String),
}

/// Split a line on whitespace into a lower-cased command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.trim().to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

impl Command {
    /// Parse a full input line. Blank lines give `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let (command, args) = parse_input(line)?;
        Some(Self::from_parts(&command, args))
    }

    fn from_parts(command: &str, args: Vec<String>) -> Self {
        match command {
            "hello" => Self::Hello,
            "add" => Self::Add(args),
            "change" => Self::Change(args),
            "phone" => Self::Phone(args),
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday(args),
            "show-birthday" => Self::ShowBirthday(args),
            "birthdays" => Self::Birthdays,
            "delete" => Self::Delete(args),
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}
