use chrono::{DateTime, Local};
use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use termion::event::Key;
use termion::input::TermRead;

use crate::clock::{Clock, ClockSource};
use crate::config::Config;

#[derive(Debug)]
pub enum Event {
    Input(Key),
    Tick(DateTime<Local>),
}

/// Merges keyboard input and clock ticks into a single queue that the
/// application drains one event at a time.
pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
    clock: ClockSource,
    _input_handle: Option<thread::JoinHandle<()>>,
}

impl Dispatcher {
    /// Only clock ticks, no terminal input.
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Dispatcher {
        let (tx, rx) = mpsc::channel();
        let clock = ClockSource::start(clock, config.tick_rate, tx.clone());

        Dispatcher {
            rx,
            tx,
            clock,
            _input_handle: None,
        }
    }

    /// Also forward keys read from stdin.
    pub fn with_input(mut self) -> Dispatcher {
        let tx = self.tx.clone();
        self._input_handle = Some(thread::spawn(move || {
            let stdin = io::stdin();
            for key in stdin.lock().keys() {
                match key {
                    Ok(key) => {
                        if tx.send(Event::Input(key)).is_err() {
                            return;
                        }
                    }
                    Err(err) => log::warn!("could not read input: {}", err),
                }
            }
        }));
        self
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }

    pub fn event_sink(&self) -> &mpsc::Sender<Event> {
        &self.tx
    }

    pub fn clock(&self) -> &ClockSource {
        &self.clock
    }
}
