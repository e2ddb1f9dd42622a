//! Terminal session: prompt, dispatch, redraw.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::Config;
use crate::engine::{GameEngine, HttpEngine};
use crate::ui::dispatcher::{IntentDispatcher, Outcome};
use crate::ui::input::{parse_command, Command, HELP};
use crate::ui::render::render;
use crate::ui::store::GameStore;
use crate::ui::timer::TimerBridge;

/// Connect to the configured engine and play on stdin/stdout until quit or
/// Ctrl-C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let engine = HttpEngine::new(&config.engine).context("failed to set up engine client")?;
    tracing::info!(engine = %engine.base_url(), "starting session");
    let engine: Arc<dyn GameEngine> = Arc::new(engine);

    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    tokio::select! {
        result = run_session(engine, input, output) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted");
            Ok(())
        }
    }
}

/// One game view bound to `engine`, reading commands from `input`.
pub async fn run_session<R, W>(
    engine: Arc<dyn GameEngine>,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let store = GameStore::new();
    let dispatcher = IntentDispatcher::new(Arc::clone(&engine), store.clone());
    let mut timer = TimerBridge::new(store.clone());

    if let Err(err) = timer.mount_engine(engine.as_ref()).await {
        tracing::warn!(error = %err, "duration stream unavailable, timer will not update");
    }

    let mut message = describe(dispatcher.restart().await);
    let mut lines = input.lines();
    loop {
        let mut frame = render(&store.snapshot());
        if let Some(message) = message.take() {
            frame.push_str(&message);
            frame.push('\n');
        }
        frame.push_str("> ");
        output.write_all(frame.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                message = Some(err.to_string());
                continue;
            }
        };

        message = match command {
            Command::Open(pos) | Command::Flag(pos) => {
                if store.overlay().wins_visible() {
                    Some("close the scores first".to_string())
                } else if let Some(index) = store.read(|g| g.board().find(pos).map(|p| p.index)) {
                    let outcome = match command {
                        Command::Open(_) => dispatcher.reveal(index).await,
                        _ => dispatcher.toggle_flag(index).await,
                    };
                    describe(outcome)
                } else {
                    Some(format!("no cell at {} {}", pos.x, pos.y))
                }
            }
            Command::NewGame => describe(dispatcher.restart().await),
            Command::ShowWins => describe(dispatcher.show_wins().await),
            Command::Close => {
                if store.overlay().wins_visible() {
                    describe(dispatcher.hide_wins().await)
                } else {
                    describe(dispatcher.dismiss_end_dialog())
                }
            }
            Command::Redraw => None,
            Command::Help => Some(HELP.to_string()),
            Command::Quit => break,
        };
    }

    timer.unmount();
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

fn describe(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Dispatched => None,
        Outcome::Ignored(reason) => Some(format!("({reason})")),
        Outcome::Failed(err) => Some(format!("engine error: {err}")),
    }
}
