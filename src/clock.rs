use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::events::Event;

/// Source of the current time. Everything that depends on "now" asks a
/// `Clock` instead of reading the system time directly.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Noon local time on `date`.
    pub fn on(date: NaiveDate) -> Option<Self> {
        date.and_hms_opt(12, 0, 0)
            .and_then(|datetime| Local.from_local_datetime(&datetime).earliest())
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Periodically samples a [`Clock`] and sends the value as `Event::Tick`.
///
/// The ticker thread lives exactly as long as the `ClockSource`: dropping it
/// (or calling `stop`) wakes the thread and joins it. The thread also exits
/// when the receiving end of the event channel goes away.
pub struct ClockSource {
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ClockSource {
    pub fn start(clock: Arc<dyn Clock>, tick_rate: Duration, sink: mpsc::Sender<Event>) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if sink.send(Event::Tick(clock.now())).is_err() {
                log::debug!("event sink closed, stopping clock");
                return;
            }

            match stop_rx.recv_timeout(tick_rate) {
                Err(RecvTimeoutError::Timeout) => continue,
                _ => return,
            }
        });

        ClockSource {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn stop(&mut self) {
        // Hanging up the stop channel interrupts the sleep.
        self.stop_tx.take();

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("clock thread panicked");
            }
        }
    }
}

impl Drop for ClockSource {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 2, 14, 12, 0, 0)
            .earliest()
            .unwrap()
    }

    #[test]
    fn fixed_clock_is_constant() {
        let clock = FixedClock(noon());
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), noon());
    }

    #[test]
    fn fixed_clock_on_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let clock = FixedClock::on(date).unwrap();
        assert_eq!(clock.now().date_naive(), date);
        assert_eq!(clock.now(), noon());
    }

    #[test]
    fn emits_ticks_until_stopped() {
        let (tx, rx) = mpsc::channel();
        let mut source =
            ClockSource::start(Arc::new(FixedClock(noon())), Duration::from_millis(5), tx);

        for _ in 0..3 {
            match rx.recv_timeout(Duration::from_secs(5)) {
                Ok(Event::Tick(now)) => assert_eq!(now, noon()),
                _ => panic!("expected a tick"),
            }
        }

        source.stop();
        assert!(!source.is_running());

        // Drain whatever was sent before stopping; afterwards the channel is closed.
        while rx.try_recv().is_ok() {}
        assert!(matches!(
            rx.recv_timeout(Duration::from_millis(100)),
            Err(RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn dropping_releases_the_timer() {
        let (tx, rx) = mpsc::channel();
        {
            let _source =
                ClockSource::start(Arc::new(SystemClock), Duration::from_secs(3600), tx);
            assert!(matches!(
                rx.recv_timeout(Duration::from_secs(5)),
                Ok(Event::Tick(_))
            ));
        }
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(1)),
            Err(RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn stops_when_sink_is_gone() {
        let (tx, rx) = mpsc::channel();
        let mut source =
            ClockSource::start(Arc::new(FixedClock(noon())), Duration::from_millis(1), tx);
        drop(rx);
        // Join returns once the thread notices the closed channel.
        source.stop();
        assert!(!source.is_running());
    }
}
