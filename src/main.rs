//! Binary entry point: CLI parsing, wiring, event loop, exit codes.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::{error, info};

use auto_hold_click::{AhcError, Config, EnigoMouse, HotkeyListener, ToggleController};

const EXIT_SUCCESS: i32 = 0;
const EXIT_HANDLED_ERROR: i32 = 1;
const EXIT_UNEXPECTED_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "ahc",
    version,
    about = "Hold a mouse button down with a global toggle hotkey"
)]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: PathBuf,

    /// Path to the JSON log settings file; omit for console-only logging
    #[arg(long, value_name = "LOG_SETTINGS_FILE")]
    log_settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            if err.is::<AhcError>() {
                error!("exiting after handled error: {err:#}");
                EXIT_HANDLED_ERROR
            } else {
                error!("exiting after unexpected error: {err:#}");
                EXIT_UNEXPECTED_ERROR
            }
        }
    };
    process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Logging comes up first; a bad settings file is fatal before any work.
    auto_hold_click::logging::init(cli.log_settings.as_deref())?;
    info!("starting auto-hold-click");

    let config = Config::from_file(&cli.config)?;
    info!(
        toggle_key = %config.toggle_key,
        mouse_button = %config.mouse_button,
        "config loaded"
    );

    let mouse = EnigoMouse::new()?;
    let mut controller = ToggleController::new(mouse, config.mouse_button);

    let listener = HotkeyListener::new(config.toggle_key)?;
    let mut presses = listener.presses();

    println!(
        "{} press {} to toggle holding the {} mouse button, Ctrl+C to quit",
        "ready:".green().bold(),
        config.toggle_key.to_string().cyan(),
        config.mouse_button.to_string().cyan()
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                break;
            }
            press = presses.recv() => match press {
                Some(()) => controller.toggle()?,
                None => break,
            },
        }
    }

    // Runs at most once effectively; Drop backstops error paths above.
    controller.release_if_holding()?;
    info!("auto-hold-click stopped");
    Ok(())
}
