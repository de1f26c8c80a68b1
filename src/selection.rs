use chrono::{Datelike, NaiveDate};

/// Calendar-date equality, ignoring time of day.
pub fn same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// The date currently chosen in the booking widget.
///
/// There is no unselected state: the value starts out as the date the
/// widget was created on and is only ever replaced by `select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    selected: NaiveDate,
}

impl SelectionState {
    pub fn new(now: NaiveDate) -> Self {
        SelectionState { selected: now }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn select(&mut self, date: NaiveDate) {
        log::info!("selected {}", date);
        self.selected = date;
    }

    pub fn is_selected<T: Datelike>(&self, date: &T) -> bool {
        same_day(&self.selected, date)
    }
}
