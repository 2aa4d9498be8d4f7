use tokio::sync::mpsc;

use common::games::Direction;
use common::games::snake::{SnakeCommand, SnakeSession, SnakeSessionState};
use common::log;
use common::scores::ScoreStore;

use crate::app_config::AppConfig;
use crate::presenter::TerminalPresenter;

pub async fn run_snake(
    config: &AppConfig,
    scores: ScoreStore,
    seed: u64,
    line_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    let state = SnakeSessionState::create(&config.snake, scores, seed)?;
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();

    let mut game_handle = tokio::spawn(async move {
        SnakeSession::run(state, TerminalPresenter, &mut command_rx).await
    });

    println!("Snake — turns: left/right/up/down (or a/d/w/s), new, quit");

    loop {
        tokio::select! {
            result = &mut game_handle => {
                if let Ok(summary) = result {
                    log!("Snake session ended: {} (score {})", summary.outcome, summary.score);
                }
                break;
            }
            maybe_line = line_rx.recv() => {
                let Some(line) = maybe_line else {
                    let _ = command_tx.send(SnakeCommand::Quit);
                    if let Ok(summary) = (&mut game_handle).await {
                        log!("Snake session ended: {} (score {})", summary.outcome, summary.score);
                    }
                    break;
                };
                match parse_command(&line) {
                    Some(command) => {
                        let _ = command_tx.send(command);
                    }
                    None => log!("Ignoring unknown input: {:?}", line),
                }
            }
        }
    }

    Ok(())
}

fn parse_command(line: &str) -> Option<SnakeCommand> {
    match line.to_lowercase().as_str() {
        "left" | "a" => Some(SnakeCommand::ChangeDirection(Direction::Left)),
        "right" | "d" => Some(SnakeCommand::ChangeDirection(Direction::Right)),
        "up" | "w" => Some(SnakeCommand::ChangeDirection(Direction::Up)),
        "down" | "s" => Some(SnakeCommand::ChangeDirection(Direction::Down)),
        "new" => Some(SnakeCommand::NewGame),
        "quit" | "q" | "exit" => Some(SnakeCommand::Quit),
        _ => None,
    }
}
