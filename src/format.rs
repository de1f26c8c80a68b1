use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use std::fmt::{Display, Write};

use crate::calendar::MonthIndex;
use crate::error::{Error, ErrorKind, Result};

/// `strftime` patterns for the strings shown around the booking widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Formats {
    pub time: String,
    pub date: String,
    pub month_header: String,
}

impl Default for Formats {
    fn default() -> Self {
        Formats {
            time: "%H:%M:%S".to_owned(),
            date: "%A, %B %-d, %Y".to_owned(),
            month_header: "%B %Y".to_owned(),
        }
    }
}

impl Formats {
    /// Rejects patterns chrono cannot render for the value they are used
    /// with. Formatting with such a pattern would otherwise panic at
    /// display time.
    pub fn validate(&self) -> Result<()> {
        let instant = DateTime::<Utc>::MIN_UTC;
        let date = instant.date_naive();

        check_pattern("time", &self.time, instant.format(&self.time))?;
        check_pattern("date", &self.date, date.format(&self.date))?;
        check_pattern(
            "month_header",
            &self.month_header,
            date.format(&self.month_header),
        )
    }

    pub fn time_label<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        now.format(&self.time).to_string()
    }

    pub fn date_label(&self, date: NaiveDate) -> String {
        date.format(&self.date).to_string()
    }

    pub fn month_header(&self, month: MonthIndex) -> String {
        month.first_day().format(&self.month_header).to_string()
    }
}

fn check_pattern<T: Display>(name: &str, pattern: &str, formatted: T) -> Result<()> {
    let mut rendered = String::new();
    let parses = StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error));

    if parses && write!(rendered, "{}", formatted).is_ok() {
        Ok(())
    } else {
        Err(Error::new(
            ErrorKind::ConfigParse,
            &format!("invalid {} format '{}'", name, pattern),
        ))
    }
}

/// Hours and minutes in UTC, e.g. `UTC 09:41`.
pub fn utc_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("UTC {}", now.with_timezone(&Utc).format("%H:%M"))
}

/// Footer stamp, e.g. `BUILD 2024.02.14`.
pub fn build_stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("BUILD {}", now.with_timezone(&Utc).format("%Y.%m.%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn instant() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 2, 29, 21, 7, 3)
            .unwrap()
    }

    #[test]
    fn default_labels() {
        let formats = Formats::default();
        let now = instant();
        assert_eq!(formats.time_label(&now), "21:07:03");
        assert_eq!(formats.date_label(now.date_naive()), "Thursday, February 29, 2024");
        assert_eq!(
            formats.month_header(MonthIndex::from(now.date_naive())),
            "February 2024"
        );
    }

    #[test]
    fn utc_strings_convert_offset() {
        let now = instant();
        assert_eq!(utc_label(&now), "UTC 02:07");
        assert_eq!(build_stamp(&now), "BUILD 2024.03.01");
    }

    #[test]
    fn validate_catches_broken_patterns() {
        assert!(Formats::default().validate().is_ok());
        let broken = Formats {
            time: "%H:%Q".to_owned(),
            ..Formats::default()
        };
        let err = broken.validate().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn validate_rejects_time_fields_in_date_patterns() {
        for pattern in &["%d %H:%M", "%B %Y %Z", "%S"] {
            let date_only = Formats {
                date: pattern.to_string(),
                ..Formats::default()
            };
            assert!(date_only.validate().is_err(), "date '{}'", pattern);

            let header = Formats {
                month_header: pattern.to_string(),
                ..Formats::default()
            };
            assert!(header.validate().is_err(), "month_header '{}'", pattern);
        }

        let time_with_zone = Formats {
            time: "%H:%M %Z %z".to_owned(),
            ..Formats::default()
        };
        assert!(time_with_zone.validate().is_ok());
    }
}
