use chrono::{DateTime, Datelike, Duration, Month, NaiveDate, TimeZone};
use num_traits::FromPrimitive;
use std::ops::{Add, Sub};

pub const WEEK_LEN: usize = 7;

/// One calendar week, Monday first.
pub type Week = [CalendarCell; WEEK_LEN];

/// Number of days in the month containing `date`.
pub fn days_of_month(date: NaiveDate) -> u32 {
    MonthIndex::from(date).num_days()
}

/// A month of a specific year, anchored at its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthIndex {
    first: NaiveDate,
}

impl MonthIndex {
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn name(&self) -> &'static str {
        Month::from_u32(self.first.month())
            .unwrap_or(Month::January)
            .name()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Day 0 of the following month.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first - Duration::days(1)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.first.month();
        self.first
            .iter_days()
            .take_while(move |date| date.month() == month)
    }

    pub fn num_days(&self) -> u32 {
        self.days().count() as u32
    }

    pub fn contains<T: Datelike>(&self, date: &T) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn next(&self) -> Self {
        MonthIndex {
            first: self.first + Duration::days(self.num_days() as i64),
        }
    }

    pub fn prev(&self) -> Self {
        MonthIndex::from(self.first - Duration::days(1))
    }
}

impl From<NaiveDate> for MonthIndex {
    fn from(date: NaiveDate) -> Self {
        MonthIndex {
            first: date - Duration::days(date.day0() as i64),
        }
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for MonthIndex {
    fn from(instant: &DateTime<Tz>) -> Self {
        MonthIndex::from(instant.date_naive())
    }
}

impl Add<u32> for MonthIndex {
    type Output = MonthIndex;
    fn add(self, rhs: u32) -> Self::Output {
        (0..rhs).fold(self, |month, _| month.next())
    }
}

impl Sub<u32> for MonthIndex {
    type Output = MonthIndex;
    fn sub(self, rhs: u32) -> Self::Output {
        (0..rhs).fold(self, |month, _| month.prev())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the first or after the last day of the month.
    Empty,
    Day(NaiveDate),
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Day(date) => Some(*date),
        }
    }

    pub fn day_num(&self) -> Option<u32> {
        self.date().map(|date| date.day())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }
}

/// Week aligned grid of a single month.
///
/// Rows always hold exactly [`WEEK_LEN`] cells. The first row is padded
/// with `Empty` cells up to the weekday of the first of the month (Monday
/// is column 0) and the last row is padded up to a full week. Depending on
/// month length and offset this yields 4, 5 or 6 rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMatrix {
    month: MonthIndex,
    rows: Vec<Week>,
}

impl CalendarMatrix {
    /// Grid of the month containing `reference`. Any day of the same
    /// month produces the same grid.
    pub fn for_date(reference: NaiveDate) -> Self {
        CalendarMatrix::for_month(MonthIndex::from(reference))
    }

    pub fn for_month(month: MonthIndex) -> Self {
        let offset = month.first_day().weekday().num_days_from_monday() as usize;

        let cells: Vec<CalendarCell> = std::iter::repeat(CalendarCell::Empty)
            .take(offset)
            .chain(month.days().map(CalendarCell::Day))
            .collect();

        let rows = cells
            .chunks(WEEK_LEN)
            .map(|chunk| {
                let mut week = [CalendarCell::Empty; WEEK_LEN];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect();

        CalendarMatrix { month, rows }
    }

    pub fn month(&self) -> MonthIndex {
        self.month
    }

    pub fn rows(&self) -> &[Week] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CalendarCell> {
        self.rows.get(row).and_then(|week| week.get(col))
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> + '_ {
        self.rows.iter().flat_map(|week| week.iter())
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells().filter_map(CalendarCell::date)
    }

    pub fn leading_empty(&self) -> usize {
        self.cells().take_while(|cell| cell.is_empty()).count()
    }

    pub fn trailing_empty(&self) -> usize {
        self.rows
            .last()
            .map(|week| week.iter().rev().take_while(|cell| cell.is_empty()).count())
            .unwrap_or(0)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.position(date).is_some()
    }

    /// Row and column of the cell holding `date`.
    pub fn position(&self, date: NaiveDate) -> Option<(usize, usize)> {
        if !self.month.contains(&date) {
            return None;
        }
        let index = self.leading_empty() + date.day0() as usize;
        Some((index / WEEK_LEN, index % WEEK_LEN))
    }
}
