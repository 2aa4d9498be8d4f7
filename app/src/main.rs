mod app_config;
mod input;
mod presenter;
mod runners;

use clap::{Parser, ValueEnum};

use common::config::ConfigManager;
use common::games::random_seed;
use common::log;
use common::logger;
use common::scores::ScoreStore;

use app_config::AppConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameArg {
    #[value(name = "2048")]
    Game2048,
    Snake,
    Tetris,
    Tictactoe,
}

#[derive(Parser)]
#[command(name = "casual_games")]
struct Args {
    /// Which game to play.
    #[arg(value_enum)]
    game: GameArg,

    /// Fixed RNG seed; a session replays exactly with the same seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file. Defaults apply when it is absent.
    #[arg(long, default_value = "casual-games.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("CasualGames".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, AppConfig> = ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;

    let seed = args.seed.unwrap_or_else(random_seed);
    log!("Starting {:?} with seed {}", args.game, seed);

    let scores = ScoreStore::open(&config.score_file);
    let mut line_rx = input::spawn_stdin_reader();

    match args.game {
        GameArg::Game2048 => {
            runners::run_game2048(&config, scores, seed, &mut line_rx).await?;
        }
        GameArg::Snake => {
            runners::run_snake(&config, scores, seed, &mut line_rx).await?;
        }
        GameArg::Tetris => {
            runners::run_tetris(&config, seed, &mut line_rx).await?;
        }
        GameArg::Tictactoe => {
            runners::run_tictactoe(&mut line_rx).await;
        }
    }

    Ok(())
}
