use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::{self, BufReader};
use std::path::PathBuf;
use tribes_core::{init_logging, BoardConfig};
use tribes_io::SessionStore;
use tribes_lib::app::{config_file, spawn_input_thread, GameControl, Session};
use tribes_lib::ui::{HeadlessRenderer, Renderer, TerminalRenderer};
use uuid::Uuid;

/// Generations between progress lines in headless mode.
const HEADLESS_LOG_EVERY: u64 = 100;

#[derive(Parser, Debug)]
#[command(author, version, about = "Multi-tribe Game of Life", long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Log generations instead of drawing the board
    #[arg(long, global = true)]
    headless: bool,

    /// Directory holding saved sessions (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Also write the finished session to this file
    #[arg(long, global = true)]
    save_as: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a new session
    New(NewArgs),
    /// Resume a saved session
    Open { id: Uuid },
    /// List saved sessions
    List,
    /// Delete a saved session
    Remove { id: Uuid },
}

#[derive(ClapArgs, Debug, Default)]
struct NewArgs {
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    cols: Option<usize>,
    /// Number of initial tribes (1-3)
    #[arg(long)]
    clusters: Option<usize>,
    /// Probability that a cell starts alive
    #[arg(long)]
    fill: Option<f64>,
    /// Milliseconds each generation stays on screen
    #[arg(long)]
    delay: Option<u64>,
    #[arg(long)]
    seed: Option<u64>,
    /// Save the session when the game ends
    #[arg(long)]
    save: bool,
}

impl NewArgs {
    fn apply(&self, board: &mut BoardConfig) {
        if let Some(rows) = self.rows {
            board.rows = rows;
        }
        if let Some(cols) = self.cols {
            board.cols = cols;
        }
        if let Some(clusters) = self.clusters {
            board.clusters = clusters;
        }
        if let Some(fill) = self.fill {
            board.fill = fill;
        }
        if let Some(delay) = self.delay {
            board.delay_ms = delay;
        }
        if self.seed.is_some() {
            board.seed = self.seed;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = config_file::load(&args.config)?;
    let first_run = loaded.is_none();
    let mut config = loaded.unwrap_or_default();
    init_logging(&config.logging.level);
    if first_run {
        if let Err(e) = config_file::write_defaults(&args.config, &config) {
            tracing::warn!(error = %e, "Continuing with built-in defaults");
        }
    }

    let store = SessionStore::new(
        args.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.session.data_dir)),
    );
    let control = GameControl::new();

    let command = args.command.unwrap_or(Command::New(NewArgs::default()));
    let (mut session, save_at_end) = match command {
        Command::List => {
            let sessions = store.list()?;
            if sessions.is_empty() {
                println!("No saved sessions in {}", store.dir().display());
            }
            for s in sessions {
                println!(
                    "{}  saved {}  generation {}  {}x{}",
                    s.id,
                    s.saved_at.format("%Y-%m-%d %H:%M:%S"),
                    s.generation,
                    s.rows,
                    s.cols
                );
            }
            return Ok(());
        }
        Command::Remove { id } => {
            Session::close(&store, id)?;
            println!("Session: {id} has been closed.");
            return Ok(());
        }
        Command::New(new_args) => {
            new_args.apply(&mut config.board);
            let session = Session::new(config.board.clone(), control.clone())?;
            (session, new_args.save || config.session.save_on_exit)
        }
        Command::Open { id } => (
            Session::open(&store, id, control.clone())?,
            config.session.save_on_exit,
        ),
    };

    let ctrl_c = control.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Ctrl+C received, stopping");
        ctrl_c.request_exit();
    });

    let mut renderer: Box<dyn Renderer> = if args.headless {
        Box::new(HeadlessRenderer::new(HEADLESS_LOG_EVERY))
    } else {
        spawn_input_thread(BufReader::new(io::stdin()), control.clone());
        Box::new(TerminalRenderer::stdout())
    };

    let outcome = session.game_mut().run(renderer.as_mut()).await?;
    tracing::debug!(id = %session.id(), outcome = ?outcome, "Session finished");

    if let Some(path) = &args.save_as {
        session.save_as(path).await?;
        println!(
            "Session: {} has been saved on: {}",
            session.id(),
            path.display()
        );
    }

    if save_at_end {
        let path = session.save(&store).await?;
        println!(
            "Session: {} has been saved on: {}",
            session.id(),
            path.display()
        );
    } else {
        println!("Session: {}", session.id());
    }

    Ok(())
}
