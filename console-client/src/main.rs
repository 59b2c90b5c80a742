mod config;
mod presenter;
mod runner;
mod score;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::log;
use common::logger::{self, LogTarget};

use config::get_config_manager;
use presenter::ConsolePresenter;
use runner::{SessionSettings, run_session};

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play Tic Tac Toe against an unbeatable AI")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides opponent_think_delay_ms from the config file
    #[arg(long)]
    think_delay_ms: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, LogTarget::Stderr);

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config()?;
    if let Some(delay) = args.think_delay_ms {
        config.opponent_think_delay_ms = delay;
    }
    config.validate()?;
    log!("Loaded config: {:?}", config);

    let settings = SessionSettings::from(&config);
    let stdin = io::stdin();
    let mut presenter = ConsolePresenter::new(stdin.lock(), io::stdout());

    presenter.greet();
    let tally = run_session(&mut presenter, &settings);
    presenter.farewell();

    log!("Final {}", tally);

    Ok(())
}
