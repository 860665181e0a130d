#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use tictactoe::{
    init_logging, level_from_env, name_or_default, run_interactive, GameController, GameState,
    MoveResult, NotificationLog, DEFAULT_PLAYER_NAMES,
};

#[derive(Parser)]
#[command(author, version, about = "Two-player tic-tac-toe", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log level (error, warn, info, debug, trace). Overrides TICTACTOE_LOG.
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game in the terminal.
    Play,
    /// Play a fixed list of moves and print the outcome.
    Replay {
        #[arg(long, default_value = DEFAULT_PLAYER_NAMES[0])]
        player1: String,
        #[arg(long, default_value = DEFAULT_PLAYER_NAMES[1])]
        player2: String,
        /// Comma-separated 0-based cell indices, e.g. 0,3,1,4,2
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,
        /// Print the final state and notifications as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct ReplayReport {
    state: GameState,
    result: Option<String>,
    rejected: Vec<usize>,
    notifications: NotificationLog,
}

#[cfg(feature = "std")]
fn replay(player1: &str, player2: &str, moves: &[usize]) -> anyhow::Result<ReplayReport> {
    let mut controller = GameController::new(NotificationLog::new());
    controller.start(name_or_default(player1, 0), name_or_default(player2, 1));
    let mut rejected = Vec::new();
    for &index in moves {
        let res = controller
            .play(index)
            .map_err(|e| anyhow::anyhow!("move {}: {}", index, e))?;
        if let MoveResult::Rejected(reason) = res {
            log::warn!("move {} rejected: {:?}", index, reason);
            rejected.push(index);
        }
    }
    let (engine, notifications) = controller.into_parts();
    Ok(ReplayReport {
        state: engine.state(),
        result: engine.result_message(),
        rejected,
        notifications,
    })
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.unwrap_or_else(|| level_from_env(LevelFilter::Warn)));

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let stdin = std::io::stdin();
            run_interactive(stdin.lock(), std::io::stdout())?;
        }
        Commands::Replay {
            player1,
            player2,
            moves,
            json,
        } => {
            let report = replay(&player1, &player2, &moves)?;
            if json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                print!("{}", report.state.board);
                if !report.rejected.is_empty() {
                    println!("Ignored moves: {:?}", report.rejected);
                }
                match report.result {
                    Some(msg) => println!("{}", msg),
                    None => println!(
                        "Game still in progress ({} moves played)",
                        report.state.moves
                    ),
                }
            }
        }
    }
    Ok(())
}
