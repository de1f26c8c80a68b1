use chrono::{Datelike, NaiveDate};
use itertools::Itertools;
use std::fmt::{self, Display};
use termion::{color, style};

use crate::calendar::{CalendarCell, WEEK_LEN};
use crate::context::Context;
use crate::format::Formats;

use super::Theme;

pub struct DayCell<'a> {
    day_num: u32,
    focused: bool,
    selected: bool,
    is_today: bool,
    styled: bool,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    pub const CELL_WIDTH: usize = 4;

    pub fn new(date: NaiveDate, theme: &'a Theme) -> Self {
        DayCell {
            day_num: date.day(),
            focused: false,
            selected: false,
            is_today: false,
            styled: false,
            theme,
        }
    }

    pub fn focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn select(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg_today = if self.is_today {
            self.theme.today_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_mark = if self.focused {
            self.theme.focus_char.unwrap_or(' ')
        } else if self.selected {
            self.theme.selected_char.unwrap_or(' ')
        } else {
            ' '
        };

        if !self.styled {
            return write!(f, "{}{}{:>2}", arg_today, arg_mark, self.day_num);
        }

        write!(f, "{}{}", arg_today, arg_mark)?;
        if self.selected {
            write!(f, "{}", style::Invert)?;
        }
        if self.focused {
            write!(f, "{}", style::Underline)?;
        }
        if self.is_today {
            write!(f, "{}", style::Bold)?;
        }
        write!(f, "{:>2}{}", self.day_num, style::Reset)
    }
}

/// Text rendering of the rendered month with today, focus and selection
/// markers.
pub struct MonthPane<'a> {
    context: &'a Context,
    formats: &'a Formats,
    theme: &'a Theme,
    styled: bool,
}

impl<'a> MonthPane<'a> {
    const HEADER: &'static [&'static str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    pub fn new(context: &'a Context, formats: &'a Formats, theme: &'a Theme) -> Self {
        MonthPane {
            context,
            formats,
            theme,
            styled: false,
        }
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn width() -> usize {
        WEEK_LEN * DayCell::CELL_WIDTH
    }

    fn cell(&self, cell: &CalendarCell) -> String {
        match cell {
            CalendarCell::Empty => " ".repeat(DayCell::CELL_WIDTH),
            CalendarCell::Day(date) => DayCell::new(*date, self.theme)
                .today(self.context.is_today(date))
                .focus(self.context.is_focused(date))
                .select(self.context.is_selected(date))
                .styled(self.styled)
                .to_string(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let matrix = self.context.matrix();

        let title = format!(
            "{:^width$}",
            self.formats.month_header(matrix.month()),
            width = Self::width()
        );
        let header = Self::HEADER
            .iter()
            .map(|head| format!("{:>width$}", head, width = DayCell::CELL_WIDTH))
            .join("");

        let (title, header) = if self.styled {
            (
                format!("{}{}{}", color::Fg(color::Yellow), title, style::Reset),
                format!("{}{}{}", style::Faint, header, style::Reset),
            )
        } else {
            (title, header)
        };

        std::iter::once(title)
            .chain(std::iter::once(header))
            .chain(
                matrix
                    .rows()
                    .iter()
                    .map(|week| week.iter().map(|cell| self.cell(cell)).join("")),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn context(year: i32, month: u32, day: u32) -> Context {
        Context::new(
            Local
                .with_ymd_and_hms(year, month, day, 12, 0, 0)
                .earliest()
                .unwrap(),
        )
    }

    #[test]
    fn plain_cell_layout() {
        let theme = Theme::default();
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(DayCell::new(date, &theme).to_string(), "   9");
        assert_eq!(DayCell::new(date, &theme).today(true).to_string(), "*  9");
        assert_eq!(
            DayCell::new(date, &theme).select(true).to_string(),
            " + 9"
        );
        assert_eq!(
            DayCell::new(date, &theme).select(true).focus(true).to_string(),
            " > 9"
        );
    }

    #[test]
    fn renders_february_2021() {
        let mut context = context(2021, 2, 3);
        context.move_focus(7);
        let formats = Formats::default();
        let theme = Theme::default();
        let lines = MonthPane::new(&context, &formats, &theme).lines();

        assert_eq!(lines.len(), 2 + 4);
        assert_eq!(lines[0].trim(), "February 2021");
        assert_eq!(lines[1], " Mon Tue Wed Thu Fri Sat Sun");
        assert_eq!(lines[2], "   1   2*+ 3   4   5   6   7");
        assert_eq!(lines[3], "   8   9 >10  11  12  13  14");
        assert_eq!(lines[5], "  22  23  24  25  26  27  28");
    }

    #[test]
    fn pads_empty_cells() {
        let context = context(2024, 9, 30);
        let formats = Formats::default();
        let theme = Theme::default();
        let lines = MonthPane::new(&context, &formats, &theme).lines();

        assert_eq!(lines.len(), 2 + 6);
        assert_eq!(lines[2], format!("{}   1", " ".repeat(24)));
        assert_eq!(lines[7], format!("*>30{}", " ".repeat(24)));
        assert!(lines
            .iter()
            .skip(1)
            .all(|line| line.chars().count() == MonthPane::width()));
    }

    #[test]
    fn styled_output_resets_attributes() {
        let context = context(2024, 9, 30);
        let formats = Formats::default();
        let theme = Theme::default();
        let lines = MonthPane::new(&context, &formats, &theme)
            .styled(true)
            .lines();
        assert!(lines[7].contains(&style::Invert.to_string()));
        assert!(lines[7].contains(&style::Reset.to_string()));
    }
}
