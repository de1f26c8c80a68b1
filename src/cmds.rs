use std::error;
use std::fmt;
use std::result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Noop,
    NextDay,
    PrevDay,
    NextWeek,
    PrevWeek,
    FocusToday,
    Select,
    Exit,
}

pub type CmdResult = result::Result<Cmd, CmdError>;

#[derive(Debug, Clone)]
pub struct CmdError {
    message: String,
}

impl CmdError {
    pub fn new(message: String) -> Self {
        CmdError { message }
    }
}

impl fmt::Display for CmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl error::Error for CmdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_displays_message_only() {
        let err = CmdError::new("No command mapped to Char('x')".to_owned());
        assert_eq!(err.to_string(), "No command mapped to Char('x')");
    }
}
