//! Mastermind Solver - CLI
//!
//! Interactive assist/host/autoplay modes for the four-peg, six-color
//! hit-and-blow game, driven by greedy or entropy-maximizing guess
//! selection.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use mastermind_entropy::{
    commands::{run_assist, run_auto, run_benchmark, run_host},
    core::Code,
    output::display::print_benchmark_result,
    solver::StrategyType,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "solve",
    about = "Hit-and-blow (Mastermind) solver using information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy for automatic guessing: entropy (default) or greedy
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Seed for reproducible answer drawing and tie-breaking
    #[arg(long, global = true)]
    seed: Option<u64>,
}

/// Whether a code may repeat a color across positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Variant {
    /// Colors may repeat
    Dup,
    /// All four colors distinct
    #[default]
    Nodup,
}

impl Variant {
    const fn duplicatable(self) -> bool {
        matches!(self, Self::Dup)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Assist a game hosted by an external codemaker (you relay feedback)
    Assist {
        #[arg(value_enum, default_value_t)]
        variant: Variant,
    },

    /// Host a game: guess against a held answer
    Host {
        #[arg(value_enum, default_value_t)]
        variant: Variant,

        /// Answer as 4 letters of BRGYPW; drawn at random if omitted
        answer: Option<String>,
    },

    /// Play one game automatically against a random hidden answer
    Auto {
        #[arg(value_enum, default_value_t)]
        variant: Variant,
    },

    /// Benchmark the solver over many autoplay games
    Bench {
        #[arg(value_enum, default_value_t)]
        variant: Variant,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let strategy = StrategyType::from_name(&cli.strategy);

    match cli.command {
        Commands::Assist { variant } => run_assist(variant.duplicatable(), &mut rng),
        Commands::Host { variant, answer } => {
            let answer = answer.as_deref().map(Code::parse).transpose()?;
            run_host(variant.duplicatable(), answer, &mut rng)
        }
        Commands::Auto { variant } => run_auto(variant.duplicatable(), &strategy, &mut rng),
        Commands::Bench { variant, count } => {
            let seed = cli.seed.unwrap_or_else(|| rand::random());
            let result = run_benchmark(&strategy, variant.duplicatable(), count, seed)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
