extern crate kalender as lib;

use flexi_logger::{FileSpec, Logger};
use lib::calendar::Calendar;
use lib::provider::feed;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "kal",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "Kalender - month overview of an event feed."
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
        short = "m",
        long = "month",
        help = "month to show, e.g. 2024-3 (default: current month)"
    )]
    pub month: Option<String>,

    #[structopt(
        short = "f",
        long = "feed",
        help = "URL or path of the event feed, overrides the config file"
    )]
    pub feed: Option<String>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    std::panic::set_hook(Box::new(|info| {
        eprintln!("Kalender ran into a fatal error!");
        eprintln!("Consider filing an issue with a log file and the backtrace below.");

        eprintln!("{}", info);
        eprintln!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;
    let tz = config.tz()?;

    let events = feed::load_events(args.feed.as_deref().unwrap_or(&config.feed))?;
    let calendar = Calendar::new(tz, events).with_locale(config.locale);
    log::debug!("{:?}", calendar);

    let month = match args.month.as_deref() {
        Some(identifier) => calendar.month_from_identifier(identifier)?,
        None => calendar.current_month(),
    };

    let stdout = stdout();
    lib::ui::render_month(&mut stdout.lock(), &calendar, &month)?;

    Ok(())
}
