use std::io;
use std::path::PathBuf;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use clap::Parser;
use log::*;
use err_derive::Error;

mod config;
mod console;
mod diary;
mod eval;
mod mood;
mod quotes;
mod senti;
mod tracker;

use self::config::Config;
use self::console::{run_session, Console, SessionOptions};
use self::tracker::MoodTracker;

#[derive(Debug, Error)]
pub enum Error {
    #[error(display = "Model could not be loaded: {}", _0)]
    ModelUnavailable(String),
    #[error(display = "Model returned no sentiment")]
    UnableToScore,
    #[error(display = "Config file invalid")]
    ValidationError(#[error(source)] validator::ValidationErrors),
    #[error(display = "Config syntax invalid")]
    ConfigError(#[error(source)] toml::de::Error),
    #[error(display = "Cannot read or write the console")]
    IoError(#[error(source)] std::io::Error),
    #[error(display = "Cannot listen for Ctrl-C")]
    SignalError(#[error(source)] ctrlc::Error),
}

/// Tells you how you sound and keeps a diary of it.
#[derive(Parser, Debug)]
#[clap(name = "moodring", version)]
struct Opt {
    /// Path to the config file
    #[clap(short, long, default_value = "moodring.toml")]
    config: PathBuf,

    /// Print the model evaluation and exit
    #[clap(long)]
    eval: bool,
}

fn main() -> Result<(), Error> {
    let opt = Opt::parse();
    let config = Config::load(&opt.config)?;

    if config.debug {
        std::env::set_var("RUST_LOG", "moodring=debug");
    } else if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "moodring=info");
    }
    pretty_env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    if opt.eval {
        console.show_evaluations(&config.asset_dir)?;
        return Ok(());
    }

    info!("Loading model {}", config.model_name);
    let classifier = senti::load(&config.model_name)?;
    let mut tracker = MoodTracker::with_limit(classifier, config.max_input_chars);

    debug!("Setting up stop signals");
    let keep_running = Arc::new(AtomicBool::new(true));
    let keep_running_signal = keep_running.clone();
    let mut signal_count = 0;
    ctrlc::set_handler(move || {
        if signal_count > 0 {
            std::process::exit(1);
        } else {
            (*keep_running_signal).store(false, Ordering::Relaxed);
            signal_count += 1;
        }
    })?;

    let options = SessionOptions {
        show_diary: config.show_diary,
        asset_dir: &config.asset_dir,
    };
    run_session(&mut tracker, &mut console, &options, &keep_running)
}
