use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::calendar::{CalendarMatrix, MonthIndex};
use crate::selection::{same_day, SelectionState};

/// State of the booking widget.
///
/// `now` only changes through `update`, which the application calls with
/// every clock tick. The rendered month always follows `now`. The selection
/// changes only through `select`, and only to a day of the rendered month.
pub struct Context {
    now: DateTime<Local>,
    matrix: CalendarMatrix,
    selection: SelectionState,
    focus: NaiveDate,
}

impl Context {
    pub fn new(now: DateTime<Local>) -> Self {
        let today = now.date_naive();
        Context {
            now,
            matrix: CalendarMatrix::for_date(today),
            selection: SelectionState::new(today),
            focus: today,
        }
    }

    pub fn now(&self) -> &DateTime<Local> {
        &self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn update(&mut self, now: DateTime<Local>) {
        self.now = now;

        let month = MonthIndex::from(&now);
        if month != self.matrix.month() {
            log::debug!("month changed to {}-{:02}", month.year(), month.month());
            self.matrix = CalendarMatrix::for_month(month);

            if !self.matrix.contains(self.focus) {
                self.focus = self.today();
            }
        }
    }

    pub fn matrix(&self) -> &CalendarMatrix {
        &self.matrix
    }

    pub fn selected(&self) -> NaiveDate {
        self.selection.selected()
    }

    /// Selects `date` if it is a day cell of the rendered month.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if self.matrix.contains(date) {
            self.selection.select(date);
            true
        } else {
            log::warn!("ignoring selection of {} outside the rendered month", date);
            false
        }
    }

    pub fn select_focused(&mut self) -> bool {
        self.select(self.focus)
    }

    pub fn focus(&self) -> NaiveDate {
        self.focus
    }

    pub fn focus_today(&mut self) {
        self.focus = self.today();
    }

    /// Moves the focus by `days`, staying inside the rendered month.
    pub fn move_focus(&mut self, days: i64) -> bool {
        let target = self.focus + Duration::days(days);
        if self.matrix.contains(target) {
            log::debug!("focus {} -> {}", self.focus, target);
            self.focus = target;
            true
        } else {
            false
        }
    }

    pub fn is_today(&self, date: &NaiveDate) -> bool {
        same_day(date, &self.now)
    }

    pub fn is_selected(&self, date: &NaiveDate) -> bool {
        self.selection.is_selected(date)
    }

    pub fn is_focused(&self, date: &NaiveDate) -> bool {
        same_day(date, &self.focus)
    }
}
