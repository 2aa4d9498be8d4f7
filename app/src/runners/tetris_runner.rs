use tokio::sync::mpsc;

use common::games::tetris::{TetrisCommand, TetrisSession, TetrisSessionState};
use common::log;

use crate::app_config::AppConfig;
use crate::presenter::TerminalPresenter;

pub async fn run_tetris(
    config: &AppConfig,
    seed: u64,
    line_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    let state = TetrisSessionState::create(&config.tetris, seed)?;
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();

    let mut game_handle = tokio::spawn(async move {
        TetrisSession::run(state, TerminalPresenter, &mut command_rx).await
    });

    println!("Tetris — a/d shift, w rotate, s soft drop, drop, pause, resume, new, quit");

    loop {
        tokio::select! {
            result = &mut game_handle => {
                if let Ok(summary) = result {
                    log!("Tetris session ended: {} (score {})", summary.outcome, summary.score);
                }
                break;
            }
            maybe_line = line_rx.recv() => {
                let Some(line) = maybe_line else {
                    let _ = command_tx.send(TetrisCommand::Quit);
                    if let Ok(summary) = (&mut game_handle).await {
                        log!("Tetris session ended: {} (score {})", summary.outcome, summary.score);
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

fn parse_command(line: &str) -> Option<TetrisCommand> {
    match line.to_lowercase().as_str() {
        "left" | "a" => Some(TetrisCommand::MoveLeft),
        "right" | "d" => Some(TetrisCommand::MoveRight),
        "rotate" | "w" => Some(TetrisCommand::Rotate),
        "down" | "s" => Some(TetrisCommand::SoftDrop),
        "drop" | "" => Some(TetrisCommand::HardDrop),
        "pause" | "p" => Some(TetrisCommand::Pause),
        "resume" | "r" => Some(TetrisCommand::Resume),
        "new" => Some(TetrisCommand::NewGame),
        "quit" | "q" | "exit" => Some(TetrisCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_piece_controls() {
        assert_eq!(parse_command("a"), Some(TetrisCommand::MoveLeft));
        assert_eq!(parse_command("W"), Some(TetrisCommand::Rotate));
        // An empty line is the quickest hard drop.
        assert_eq!(parse_command(""), Some(TetrisCommand::HardDrop));
        assert_eq!(parse_command("pause"), Some(TetrisCommand::Pause));
        assert_eq!(parse_command("spin"), None);
    }
}
