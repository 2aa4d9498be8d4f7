use tokio::sync::mpsc;

use common::games::tictactoe::{TicTacToeCommand, TicTacToeSession, TicTacToeSessionState};
use common::log;

use crate::presenter::TerminalPresenter;

pub async fn run_tictactoe(line_rx: &mut mpsc::UnboundedReceiver<String>) {
    let state = TicTacToeSessionState::create();
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();

    let mut game_handle = tokio::spawn(async move {
        TicTacToeSession::run(state, TerminalPresenter, &mut command_rx).await
    });

    println!("Tic-Tac-Toe — enter a cell number 0-8, new, quit");

    loop {
        tokio::select! {
            result = &mut game_handle => {
                if let Ok(summary) = result {
                    log!("Tic-Tac-Toe session ended: {}", summary.outcome);
                }
                break;
            }
            maybe_line = line_rx.recv() => {
                let Some(line) = maybe_line else {
                    let _ = command_tx.send(TicTacToeCommand::Quit);
                    if let Ok(summary) = (&mut game_handle).await {
                        log!("Tic-Tac-Toe session ended: {}", summary.outcome);
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
}

fn parse_command(line: &str) -> Option<TicTacToeCommand> {
    match line.to_lowercase().as_str() {
        "new" => Some(TicTacToeCommand::NewGame),
        "quit" | "q" | "exit" => Some(TicTacToeCommand::Quit),
        other => other.parse::<usize>().ok().map(TicTacToeCommand::PlaceMark),
    }
}
