pub mod app;
pub mod booking_window;
pub mod month_pane;

pub use app::App;
pub use booking_window::BookingWindow;
pub use month_pane::{DayCell, MonthPane};

use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub today_char: Option<char>,
    pub focus_char: Option<char>,
    pub selected_char: Option<char>,
    /// Use terminal colors and attributes in interactive mode.
    pub color: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            today_char: Some('*'),
            focus_char: Some('>'),
            selected_char: Some('+'),
            color: true,
        }
    }
}

impl Theme {
    /// Marker characters must be printable ASCII so every day cell keeps
    /// its fixed column width.
    pub fn validate(&self) -> Result<()> {
        for (name, symbol) in [
            ("today_char", self.today_char),
            ("focus_char", self.focus_char),
            ("selected_char", self.selected_char),
        ] {
            if let Some(c) = symbol {
                if !(c.is_ascii_graphic() || c == ' ') {
                    return Err(Error::new(
                        ErrorKind::ConfigParse,
                        &format!("{} must be a printable ASCII character, got {:?}", name, c),
                    ));
                }
            }
        }
        Ok(())
    }
}
