//! pomotui - a terminal work/break interval timer.
//!
//! Parses the CLI surface, builds the timer configuration, and hands
//! control to the ratatui event loop. Phase completions raise desktop
//! notifications and/or an alert sound depending on the configured mode.

use clap::Parser;

use pomotui::app::App;
use pomotui::cli::Cli;

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let config = match cli.timer_config() {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(e) => {
            println!("Error starting terminal: {e}");
            std::process::exit(1);
        }
    };

    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    if let Err(e) = result {
        println!("Error running program: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
