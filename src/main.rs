// src/main.rs
//
// Terminal shell for rickdex.
//
// One task owns the controller. Fetches run on spawned tasks and report back
// through a channel; the controller decides whether a completion is current.

use std::time::{Duration, Instant};

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use rickdex::application::{
    build_controller, parse_command, spawn_fetch, CatalogController, FetchCompletion,
    ShellCommand, HELP_TEXT,
};
use rickdex::config::AppConfig;
use rickdex::view::{render_screen, NotificationKind};

/// Upper bound on how long the shell sleeps without redrawing
const IDLE_TICK: Duration = Duration::from_millis(500);

/// Earliest moment something on screen changes without user input
fn next_wake(controller: &CatalogController) -> tokio::time::Instant {
    let idle = Instant::now() + IDLE_TICK;
    let wake = [
        controller.debounce_deadline(),
        controller.next_notification_deadline(),
    ]
    .into_iter()
    .flatten()
    .fold(idle, Instant::min);

    tokio::time::Instant::from_std(wake)
}

fn draw(controller: &CatalogController) {
    println!("{}", render_screen(controller.view()));
    println!("rickdex> (type `help` for commands)");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    log::info!("Starting rickdex with {:?}", config);

    let mut controller = build_controller(&config).context("Failed to start rickdex")?;
    let (completions, mut completed) = mpsc::unbounded_channel::<FetchCompletion>();

    let initial = controller.begin_fetch();
    spawn_fetch(controller.source(), initial, &completions);
    draw(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let wake = next_wake(&controller);

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };

                match parse_command(&line) {
                    Ok(None) => continue,
                    Ok(Some(ShellCommand::Quit)) => break,
                    Ok(Some(ShellCommand::Help)) => {
                        println!("{}", HELP_TEXT);
                        continue;
                    }
                    Ok(Some(ShellCommand::Ui(event))) => {
                        if let Some(ticket) = controller.handle(event) {
                            spawn_fetch(controller.source(), ticket, &completions);
                        }
                    }
                    Err(message) => controller.notify(message, NotificationKind::Warning),
                }
            }
            Some((ticket, result)) = completed.recv() => {
                if !controller.complete_fetch(ticket, result) {
                    continue;
                }
            }
            _ = tokio::time::sleep_until(wake) => {
                let now = Instant::now();
                let ticket = controller.poll_debounce(now);
                let expired = controller.dismiss_expired(now);

                match ticket {
                    Some(ticket) => {
                        spawn_fetch(controller.source(), ticket, &completions);
                    }
                    None if expired == 0 => continue,
                    None => {}
                }
            }
        }

        controller.dismiss_expired(Instant::now());
        draw(&controller);
    }

    log::info!(
        "Exiting with {} favorites saved",
        controller.favorites().len()
    );

    Ok(())
}
