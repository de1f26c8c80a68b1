pub mod calendar;
pub mod clock;
pub mod cmds;
pub mod config;
pub mod context;
pub mod ctrl;
pub mod error;
pub mod events;
pub mod format;
pub mod selection;
pub mod ui;

pub use calendar::{CalendarCell, CalendarMatrix, MonthIndex};
pub use clock::{Clock, ClockSource, FixedClock, SystemClock};
pub use context::Context;
pub use selection::{same_day, SelectionState};
