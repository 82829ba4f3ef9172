use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trash_view::application::dtos::trash_dto::{MutationOutcome, TrashViewState};
use trash_view::common::config::AppConfig;
use trash_view::common::di::AppState;
use trash_view::interfaces::cli::{parse_args, Command, USAGE};
use trash_view::interfaces::terminal::render;

/// trash-view - terminal client for the document trash
///
/// Lists soft-deleted documents from the document API and lets the user
/// restore them or purge them for good. Configuration comes from the
/// environment (`TRASH_API_URL`, `TRASH_API_TOKEN`, ...); logs go to stderr
/// and are filtered with `RUST_LOG`.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    let config = AppConfig::from_env();
    tracing::debug!("Using document API at {}", config.api.base_url);

    let assume_yes = matches!(command, Command::Purge { assume_yes: true, .. });
    let state = AppState::from_config(config, assume_yes)?;
    let view = &state.trash_view;

    let mut refresh_token: u64 = 0;
    view.set_refresh(&refresh_token).await;
    view.activate().await;

    let mut mutation_failed = false;
    match command {
        Command::List => {}
        Command::Restore { id } => {
            mutation_failed = !report(&id, "Restored", view.restore(&id).await);
        }
        Command::Purge { id, .. } => {
            print!("{}", render(&view.state().await));
            mutation_failed =
                !report(&id, "Permanently deleted", view.permanently_delete(&id).await);
        }
        Command::Watch => {
            let mut ticker = tokio::time::interval(state.config.display.poll_interval());
            ticker.tick().await;
            print!("{}", render(&view.state().await));

            // Ctrl-C also interrupts a refresh that is still waiting on the API
            let shutdown = tokio::signal::ctrl_c();
            tokio::pin!(shutdown);

            loop {
                tokio::select! {
                    _ = &mut shutdown => {
                        tracing::info!("Stopping watch");
                        break;
                    }
                    _ = async {
                        ticker.tick().await;
                        refresh_token += 1;
                        view.set_refresh(&refresh_token).await;
                        println!();
                        print!("{}", render(&view.state().await));
                    } => {}
                }
            }
            return Ok(ExitCode::SUCCESS);
        }
    }

    let final_state = view.state().await;
    print!("{}", render(&final_state));

    if mutation_failed || matches!(final_state, TrashViewState::Error(_)) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints the outcome line; false when the remote call failed
fn report(id: &str, verb: &str, outcome: MutationOutcome) -> bool {
    match outcome {
        MutationOutcome::Completed => println!("{} {}\n", verb, id),
        MutationOutcome::Cancelled => println!("Cancelled\n"),
        MutationOutcome::Failed(_) => return false,
    }
    true
}
