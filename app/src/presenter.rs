use common::games::game2048::Game2048View;
use common::games::snake::{SnakeStatus, SnakeView};
use common::games::tetris::TetrisView;
use common::games::tictactoe::{Mark, TicTacToeStatus, TicTacToeView};
use common::games::{GamePresenter, GameSummary, GameView, Point};

/// Renders game snapshots as ASCII to stdout. The games never print
/// themselves; everything visible goes through here.
#[derive(Clone, Default)]
pub struct TerminalPresenter;

impl GamePresenter for TerminalPresenter {
    async fn present(&self, view: GameView) {
        let rendered = match view {
            GameView::Game2048(view) => render_game2048(&view),
            GameView::Snake(view) => render_snake(&view),
            GameView::Tetris(view) => render_tetris(&view),
            GameView::TicTacToe(view) => render_tictactoe(&view),
        };
        println!("{}", rendered);
    }

    async fn present_game_over(&self, summary: GameSummary) {
        let best = match summary.best_score {
            Some(best) => format!(", best {}", best),
            None => String::new(),
        };
        println!(
            "=== {}: {} (score {}{}) ===",
            summary.game.title(),
            summary.outcome,
            summary.score,
            best
        );
        println!("Type 'new' for another game or 'quit' to leave.");
    }
}

fn render_game2048(view: &Game2048View) -> String {
    let mut out = format!(
        "Score: {}  Best: {}  Moves: {}\n",
        view.score, view.best_score, view.moves_made
    );
    for y in 0..view.height {
        for x in 0..view.width {
            let value = view.cells[y * view.width + x];
            if value == 0 {
                out.push_str("     .");
            } else {
                out.push_str(&format!("{:>6}", value));
            }
        }
        out.push('\n');
    }
    out
}

fn render_snake(view: &SnakeView) -> String {
    let mut out = format!("Score: {}  High: {}\n", view.score, view.high_score);
    for y in 0..view.height {
        for x in 0..view.width {
            let point = Point::new(x, y);
            let cell = if view.body.first() == Some(&point) {
                '@'
            } else if view.body.contains(&point) {
                'o'
            } else if view.food == Some(point) {
                '*'
            } else {
                '.'
            };
            out.push(cell);
        }
        out.push('\n');
    }
    if view.status == SnakeStatus::GameOver {
        out.push_str("Game over\n");
    }
    out
}

fn render_tetris(view: &TetrisView) -> String {
    let mut out = format!(
        "Score: {}  Level: {}  Lines: {}{}\n",
        view.score,
        view.level,
        view.lines,
        if view.paused { "  [paused]" } else { "" }
    );
    for y in 0..view.height {
        out.push('|');
        for x in 0..view.width {
            let value = view.cells[y * view.width + x];
            out.push(if value == 0 { '.' } else { '#' });
        }
        out.push_str("|\n");
    }
    out.push_str("Next:\n");
    for row in &view.next_piece {
        if row.iter().all(|&v| v == 0) {
            continue;
        }
        for &value in row {
            out.push(if value == 0 { ' ' } else { '#' });
        }
        out.push('\n');
    }
    out
}

fn render_tictactoe(view: &TicTacToeView) -> String {
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let index = row * 3 + col;
            let cell = match view.cells[index] {
                // Empty cells show their index so the player knows what
                // to type.
                Mark::Empty => char::from_digit(index as u32, 10).unwrap_or(' '),
                mark => mark.symbol(),
            };
            out.push(' ');
            out.push(cell);
            if col < 2 {
                out.push_str(" |");
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    match view.status {
        TicTacToeStatus::InProgress => {
            out.push_str(&format!("{} to move\n", view.current_mark.symbol()));
        }
        TicTacToeStatus::XWon => out.push_str("X won\n"),
        TicTacToeStatus::OWon => out.push_str("O won\n"),
        TicTacToeStatus::Draw => out.push_str("Draw\n"),
    }
    out
}
