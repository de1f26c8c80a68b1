use crate::cmds::{Cmd, CmdResult};
use crate::context::Context;
use crate::ctrl::{Control, Selection};

/// Drives the focus cursor and selection of the month grid.
#[derive(Debug, Default)]
pub struct CalendarController {}

impl Control for CalendarController {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult {
        match cmd {
            Cmd::NextDay => self.move_right(context),
            Cmd::PrevDay => self.move_left(context),
            Cmd::NextWeek => self.move_down(context),
            Cmd::PrevWeek => self.move_up(context),
            Cmd::FocusToday => context.focus_today(),
            Cmd::Select => {
                context.select_focused();
            }
            _ => return Ok(*cmd),
        }
        Ok(Cmd::Noop)
    }
}

impl Selection for CalendarController {
    fn move_left(&mut self, context: &mut Context) {
        self.move_n_left(1, context);
    }

    fn move_right(&mut self, context: &mut Context) {
        self.move_n_right(1, context);
    }

    fn move_up(&mut self, context: &mut Context) {
        self.move_n_up(1, context);
    }

    fn move_down(&mut self, context: &mut Context) {
        self.move_n_down(1, context);
    }

    fn move_n_left(&mut self, n: u32, context: &mut Context) {
        context.move_focus(-(n as i64));
    }

    fn move_n_right(&mut self, n: u32, context: &mut Context) {
        context.move_focus(n as i64);
    }

    fn move_n_up(&mut self, n: u32, context: &mut Context) {
        context.move_focus(-7 * n as i64);
    }

    fn move_n_down(&mut self, n: u32, context: &mut Context) {
        context.move_focus(7 * n as i64);
    }
}
