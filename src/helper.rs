use crate::domain::contact::Contact;
use crate::errors::AppError;
use dotenv::dotenv;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Pulls `.env` into the process environment, if there is one.
/// Must run before the command line is parsed so `env = ...` flags see it.
pub fn load_env() {
    dotenv().ok();
}

/// Logs go to stderr so command output on stdout stays clean.
pub fn init_logger(level: &str) -> Result<(), AppError> {
    let loglevel = level.parse::<LevelFilter>()?;

    let mut logconfig = ConfigBuilder::new();
    if loglevel != LevelFilter::Debug && loglevel != LevelFilter::Trace {
        logconfig.add_filter_allow_str("rusty_addressbook");
    }

    TermLogger::init(
        loglevel,
        logconfig.build(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    )?;
    Ok(())
}

pub fn listing_format(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:<20} {:<15}",
        contact.name, contact.last_name, contact.phone
    )
}
