use chrono::{DateTime, Local};
use std::io::{self, Write};

use termion::{clear, cursor};

use crate::cmds::{Cmd, CmdError, CmdResult};
use crate::config::Config;
use crate::context::Context;
use crate::ctrl::{CalendarController, Control};
use crate::events::{Dispatcher, Event};

use super::BookingWindow;

pub struct App<'a> {
    config: &'a Config,
    context: Context,
    controller: CalendarController,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, now: DateTime<Local>) -> App<'a> {
        App {
            config,
            context: Context::new(now),
            controller: CalendarController::default(),
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn handle(&mut self, event: Event) -> CmdResult {
        match event {
            Event::Tick(now) => {
                self.context.update(now);
                Ok(Cmd::Noop)
            }
            Event::Input(key) => match self.config.key_map.get(&key) {
                Some(cmd) => self.controller.send_cmd(cmd, &mut self.context),
                None => Err(CmdError::new(format!("No command mapped to {:?}", key))),
            },
        }
    }

    /// Prints the widget once, without terminal control sequences.
    pub fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in BookingWindow::new(&self.context, self.config).lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    /// Redraws the whole screen. Expects `out` to be in raw mode.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}{}", clear::All, cursor::Goto(1, 1))?;

        let lines = BookingWindow::new(&self.context, self.config)
            .styled(self.config.theme.color)
            .help(true)
            .lines();

        for line in lines {
            write!(out, "{}\r\n", line)?;
        }
        out.flush()
    }

    pub fn run<W: Write>(
        &mut self,
        dispatcher: Dispatcher,
        mut out: W,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            self.draw(&mut out)?;

            let event = match dispatcher.next() {
                Ok(event) => event,
                Err(_) => break,
            };

            match self.handle(event) {
                Ok(Cmd::Exit) => run = false,
                Ok(_) => {}
                Err(err) => log::debug!("{}", err),
            }
        }

        Ok(())
    }
}
