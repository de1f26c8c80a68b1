pub mod calctrl;
pub mod select;

pub use calctrl::CalendarController;
pub use select::Selection;

use crate::cmds::{Cmd, CmdResult};
use crate::context::Context;

pub trait Control {
    /// Handles `cmd` and returns `Cmd::Noop`, or hands back commands the
    /// controller does not own.
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult;
}
