use tokio::sync::mpsc;

use common::games::Direction;
use common::games::game2048::{Game2048Command, Game2048Session, Game2048SessionState};
use common::log;
use common::scores::ScoreStore;

use crate::app_config::AppConfig;
use crate::presenter::TerminalPresenter;

pub async fn run_game2048(
    config: &AppConfig,
    scores: ScoreStore,
    seed: u64,
    line_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    let state = Game2048SessionState::create(&config.game2048, scores, seed)?;
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();

    let mut game_handle = tokio::spawn(async move {
        Game2048Session::run(state, TerminalPresenter, &mut command_rx).await
    });

    println!("2048 — moves: left/right/up/down (or a/d/w/s), new, quit");

    loop {
        tokio::select! {
            result = &mut game_handle => {
                if let Ok(summary) = result {
                    log!("2048 session ended: {} (score {})", summary.outcome, summary.score);
                }
                break;
            }
            maybe_line = line_rx.recv() => {
                let Some(line) = maybe_line else {
                    let _ = command_tx.send(Game2048Command::Quit);
                    if let Ok(summary) = (&mut game_handle).await {
                        log!("2048 session ended: {} (score {})", summary.outcome, summary.score);
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

fn parse_command(line: &str) -> Option<Game2048Command> {
    match line.to_lowercase().as_str() {
        "left" | "a" => Some(Game2048Command::Move(Direction::Left)),
        "right" | "d" => Some(Game2048Command::Move(Direction::Right)),
        "up" | "w" => Some(Game2048Command::Move(Direction::Up)),
        "down" | "s" => Some(Game2048Command::Move(Direction::Down)),
        "new" => Some(Game2048Command::NewGame),
        "quit" | "q" | "exit" => Some(Game2048Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions_and_aliases() {
        assert_eq!(
            parse_command("LEFT"),
            Some(Game2048Command::Move(Direction::Left))
        );
        assert_eq!(
            parse_command("s"),
            Some(Game2048Command::Move(Direction::Down))
        );
        assert_eq!(parse_command("new"), Some(Game2048Command::NewGame));
        assert_eq!(parse_command("q"), Some(Game2048Command::Quit));
        assert_eq!(parse_command("sideways"), None);
    }
}
