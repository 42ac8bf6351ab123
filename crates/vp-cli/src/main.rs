//! CLI frontend for Vibepick, the decision helper.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "vibepick",
    about = "Vibepick: let the vibes decide",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log decision stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide between two or more options
    Pick {
        /// The options to choose from
        options: Vec<String>,

        /// Decision mode: random, ai, logic, sassy, reverse, party
        #[arg(short, long, default_value = "random")]
        mode: String,

        /// Mood: chaotic, chill, productivity, sassy, logical
        #[arg(long)]
        mood: Option<String>,

        /// Chaos level 0-100 (above 75 shuffles the options)
        #[arg(short, long, default_value = "0")]
        chaos: u32,

        /// What the decision is about
        #[arg(long, default_value = "")]
        context: String,

        /// RNG seed for a reproducible pick
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file overriding the flavor tables
        #[arg(long)]
        tables: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive decision session
    Play {
        /// RNG seed for reproducible picks
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting chaos level 0-100
        #[arg(short, long, default_value = "50")]
        chaos: u32,
    },

    /// Take the decision personality quiz
    Quiz {
        /// Answers as letters, e.g. ABCD (prompts if omitted)
        #[arg(short, long)]
        answers: Option<String>,
    },

    /// Deal would-you-rather questions
    Wyr {
        /// RNG seed for the shuffle
        #[arg(short, long)]
        seed: Option<u64>,

        /// How many questions to show
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Answer the shuffled deck in order, e.g. ABBA
        #[arg(short, long)]
        answers: Option<String>,
    },

    /// Show the daily dilemma
    Dilemma {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Let Vibepick decide it too
        #[arg(short, long)]
        pick: bool,

        /// RNG seed for the pick
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "vp_engine=debug,vp_session=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Pick {
            options,
            mode,
            mood,
            chaos,
            context,
            seed,
            tables,
            json,
        } => commands::pick::run(commands::pick::PickArgs {
            options,
            mode,
            mood,
            chaos,
            context,
            seed,
            tables,
            json,
        }),
        Commands::Play { seed, chaos } => commands::play::run(seed, chaos),
        Commands::Quiz { answers } => commands::quiz::run(answers.as_deref()),
        Commands::Wyr {
            seed,
            count,
            answers,
        } => commands::wyr::run(seed, count, answers.as_deref()),
        Commands::Dilemma { date, pick, seed } => {
            commands::dilemma::run(date.as_deref(), pick, seed)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
