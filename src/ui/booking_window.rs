use crate::config::Config;
use crate::context::Context;
use crate::format::{build_stamp, utc_label};

use super::MonthPane;

const HELP: &str = "h/j/k/l move  enter select  t today  q quit";

/// The consultation booking widget: live clock line, month grid, selected
/// date and footer.
pub struct BookingWindow<'a> {
    context: &'a Context,
    config: &'a Config,
    styled: bool,
    help: bool,
}

impl<'a> BookingWindow<'a> {
    pub fn new(context: &'a Context, config: &'a Config) -> Self {
        BookingWindow {
            context,
            config,
            styled: false,
            help: false,
        }
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    pub fn lines(&self) -> Vec<String> {
        let formats = &self.config.format;
        let now = self.context.now();

        let mut lines = vec![
            format!(
                "{}  {}  {}",
                utc_label(now),
                formats.date_label(self.context.today()),
                formats.time_label(now)
            ),
            String::new(),
        ];

        lines.extend(
            MonthPane::new(self.context, formats, &self.config.theme)
                .styled(self.styled)
                .lines(),
        );

        lines.push(String::new());
        lines.push(format!(
            "Selected: {}",
            formats.date_label(self.context.selected())
        ));
        lines.push(build_stamp(now));

        if self.help {
            lines.push(HELP.to_owned());
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, TimeZone};

    #[test]
    fn shows_selection_and_footer() {
        let config = Config::default();
        let mut context = Context::new(
            Local
                .with_ymd_and_hms(2024, 2, 14, 12, 0, 0)
                .earliest()
                .unwrap(),
        );
        context.select(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let lines = BookingWindow::new(&context, &config).lines();

        assert!(lines[0].contains("Wednesday, February 14, 2024"));
        assert!(lines[0].ends_with("12:00:00"));
        assert_eq!(lines[2].trim(), "February 2024");
        assert!(lines.contains(&"Selected: Thursday, February 29, 2024".to_owned()));
        assert!(lines.last().unwrap().starts_with("BUILD 2024.02."));

        let with_help = BookingWindow::new(&context, &config).help(true).lines();
        assert_eq!(with_help.len(), lines.len() + 1);
    }
}
