use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Forwards trimmed stdin lines into a channel. The channel closes on EOF,
/// which runners treat as a quit.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (line_tx, line_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line_tx.send(line.trim().to_string()).is_err() {
                break;
            }
        }
    });

    line_rx
}
