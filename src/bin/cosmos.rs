extern crate cosmos as lib;

use chrono::NaiveDate;
use flexi_logger::{FileSpec, Logger};
use lib::clock::{Clock, FixedClock, SystemClock};
use lib::error::{Error, ErrorKind};
use lib::events::Dispatcher;
use lib::ui::App;
use nix::sys::termios;
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;
use structopt::StructOpt;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cosmos",
    about = "Cosmos Studio - consultation booking calendar."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(
        long = "date",
        help = "pretend today is DATE (YYYY-MM-DD)",
        parse(try_from_str = parse_date)
    )]
    pub date: Option<NaiveDate>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    // Log lines on stderr would end up in the middle of the interactive screen.
    let mut logger = match (&args.log_file, args.show) {
        (None, false) => Logger::try_with_str("off")?,
        _ => Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?,
    };

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let clock: Arc<dyn Clock> = match args.date {
        Some(date) => Arc::new(FixedClock::on(date).ok_or_else(|| {
            Error::new(ErrorKind::DateParse, &format!("{} has no local noon", date))
        })?),
        None => Arc::new(SystemClock),
    };

    let mut app = App::new(&config, clock.now());

    if args.show {
        let stdout = stdout();
        let mut out = stdout.lock();
        return Ok(app.show(&mut out)?);
    }

    const STDOUT: std::os::unix::io::RawFd = nix::libc::STDOUT_FILENO;
    let orig_attr = std::sync::Mutex::new(termios::tcgetattr(STDOUT)?);

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        if let Ok(attr) = orig_attr.lock() {
            let _ = termios::tcsetattr(STDOUT, termios::SetArg::TCSANOW, &attr);
        }

        println!("Cosmos ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let dispatcher = Dispatcher::from_config(&config, clock).with_input();

    let mut screen = AlternateScreen::from(stdout().into_raw_mode()?);
    write!(screen, "{}", termion::cursor::Hide)?;

    let result = app.run(dispatcher, &mut screen);

    write!(screen, "{}", termion::cursor::Show)?;
    screen.flush()?;

    log::info!("selected date on exit: {}", app.context().selected());

    result
}
