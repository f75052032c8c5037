use std::io;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    ChainConfig, OpponentKind, PlayerStrategy, SessionConfig, SimulationConfig,
    DEFAULT_HISTORY_LENGTH, DEFAULT_SEGMENT_LENGTH,
};
use crate::display;
use crate::error::RoshamboResult;
use crate::interrupt::{self, SharedStats};
use crate::log_init;
use crate::opponent::build_opponent;
use crate::session::Session;
use crate::simulate::{simulate, SimulationReport};

#[derive(Debug, Parser)]
#[command(author, version, about = "Rock Paper Scissors against a pattern-learning AI", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `play` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play interactively against the AI
    Play(PlayArgs),
    /// Pit a scripted player against the AI and report statistics
    Simulate(SimulateArgs),
}

#[derive(Debug, Clone, Copy, Args)]
pub struct ChainArgs {
    /// Number of recent moves matched as the prediction context
    #[arg(long, default_value_t = DEFAULT_SEGMENT_LENGTH)]
    pub segment_length: usize,

    /// Number of recent moves the predictor learns from
    #[arg(long, default_value_t = DEFAULT_HISTORY_LENGTH)]
    pub history_length: usize,
}

impl Default for ChainArgs {
    fn default() -> Self {
        ChainArgs {
            segment_length: DEFAULT_SEGMENT_LENGTH,
            history_length: DEFAULT_HISTORY_LENGTH,
        }
    }
}

impl ChainArgs {
    fn config(&self) -> RoshamboResult<ChainConfig> {
        ChainConfig::new(self.segment_length, self.history_length)
    }
}

#[derive(Debug, Clone, Copy, Default, Args)]
pub struct PlayArgs {
    #[arg(long, value_enum, default_value_t = OpponentKind::Chain)]
    pub opponent: OpponentKind,

    #[command(flatten)]
    pub chain: ChainArgs,

    /// End the session after this many rounds
    #[arg(long)]
    pub rounds: Option<usize>,

    /// Seed for the AI's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    pub fn config(&self) -> RoshamboResult<SessionConfig> {
        let config = SessionConfig {
            opponent: self.opponent,
            chain: self.chain.config()?,
            rounds: self.rounds,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, Args)]
pub struct SimulateArgs {
    #[arg(long, value_enum, default_value_t = PlayerStrategy::ConstantRock)]
    pub player: PlayerStrategy,

    #[arg(long, value_enum, default_value_t = OpponentKind::Chain)]
    pub opponent: OpponentKind,

    #[command(flatten)]
    pub chain: ChainArgs,

    /// Rounds per session
    #[arg(long, default_value_t = 100)]
    pub rounds: usize,

    /// Independent sessions, run in parallel
    #[arg(long, default_value_t = 1)]
    pub sessions: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl SimulateArgs {
    pub fn config(&self) -> RoshamboResult<SimulationConfig> {
        let config = SimulationConfig {
            player: self.player,
            opponent: self.opponent,
            chain: self.chain.config()?,
            rounds: self.rounds,
            sessions: self.sessions,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

pub fn run() {
    let cli = Cli::parse();
    log_init::init(cli.verbose);

    let outcome = match cli.command {
        None => run_play(&PlayArgs::default()),
        Some(Command::Play(args)) => run_play(&args),
        Some(Command::Simulate(args)) => run_simulate(&args),
    };

    if let Err(err) = outcome {
        eprintln!("{}", err.to_string().red());
        process::exit(1);
    }
}

fn run_play(args: &PlayArgs) -> RoshamboResult<()> {
    let config = args.config()?;
    config.log();

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let opponent = build_opponent(config.opponent, config.chain, rng);
    let shared = SharedStats::new();
    interrupt::install(shared.clone())?;
    let mut session = Session::new(opponent, config.rounds).with_shared_stats(shared);

    // stdout is locked per write so the interrupt handler can still print
    // while the session waits on stdin.
    let stdin = io::stdin();
    session.run(&mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}

fn run_simulate(args: &SimulateArgs) -> RoshamboResult<()> {
    let config = args.config()?;
    config.log();

    let stats = simulate(&config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&SimulationReport::new(&config, &stats))?);
    } else {
        print!("{}", display::stats_report(&stats));
    }
    Ok(())
}
