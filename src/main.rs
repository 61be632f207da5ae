//! Tileboard: find the best-scoring word placements for a letter pool.
//!
//! ## Usage
//!
//! - `tileboard` - Run the built-in demo puzzle
//! - `tileboard demo` - Same as above
//! - `tileboard solve --letters C:1,A:2,S:1 --word CASA` - Solve a puzzle

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tileboard::backtrack::{Backtracking, CandidateOrder, SearchConfig};
use tileboard::board::Board;
use tileboard::constants::{CENTER, MIN_WORD_LEN, SIZE};
use tileboard::dictionary::Dictionary;
use tileboard::letters::LetterPool;
use tileboard::rules::{RuleConfig, StandardRules};
use tileboard::solver::{Solver, Strategy};

/// Words used by the demo puzzle.
const DEMO_WORDS: &[&str] = &["AUTO", "CASA", "TABLA", "PELO", "LIBRO", "MONITOR", "QUESO"];

/// Letters for the demo puzzle: enough for CASA crossing AUTO.
const DEMO_LETTERS: &str = "C:1,A:2,S:1,U:1,T:1,O:1";

/// Tileboard: exhaustive search for the best-scoring word board
#[derive(Parser)]
#[command(name = "tileboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the best board for a letter pool and word list
    Solve(SolveArgs),
    /// Run a small built-in puzzle
    Demo,
}

#[derive(Args)]
struct SolveArgs {
    /// Letter pool, as counts ("C:1,A:2,S:1") or plain letters ("CASA")
    #[arg(short, long)]
    letters: LetterPool,

    /// Word list file, one word per line
    #[arg(short, long)]
    dict: Option<std::path::PathBuf>,

    /// Extra dictionary word (repeatable)
    #[arg(short, long = "word")]
    words: Vec<String>,

    /// Cell the first word must cover, as X,Y ("center" for the middle)
    #[arg(long, value_parser = parse_anchor)]
    anchor: Option<(usize, usize)>,

    /// Shortest playable word
    #[arg(long, default_value_t = MIN_WORD_LEN)]
    min_len: usize,

    /// Skip branches that cannot beat the best score
    #[arg(long)]
    prune: bool,

    /// Skip boards that were already explored
    #[arg(long)]
    memoize: bool,

    /// Shuffle candidate moves with this seed
    #[arg(long)]
    seed: Option<u64>,

    /// Log the initial and final boards
    #[arg(long)]
    trace: bool,
}

fn parse_anchor(s: &str) -> Result<(usize, usize), String> {
    if s.eq_ignore_ascii_case("center") {
        return Ok(CENTER);
    }
    let (x, y) = s.split_once(',').ok_or("expected X,Y")?;
    let x: usize = x.trim().parse().map_err(|_| format!("invalid column {x:?}"))?;
    let y: usize = y.trim().parse().map_err(|_| format!("invalid row {y:?}"))?;
    if x >= SIZE || y >= SIZE {
        return Err(format!("({x},{y}) is off the {SIZE}x{SIZE} board"));
    }
    Ok((x, y))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "tileboard=info",
        1 => "tileboard=debug",
        _ => "tileboard=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Solve(args)) => run_solve(args),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_solve(args: SolveArgs) -> Result<()> {
    let mut words: Vec<String> = match &args.dict {
        Some(path) => Dictionary::load(path)?.words().map(str::to_owned).collect(),
        None => Vec::new(),
    };
    words.extend(args.words.iter().cloned());
    let dictionary = Dictionary::try_new(words).context("invalid --word")?;
    if dictionary.is_empty() {
        bail!("no words given: use --dict and/or --word");
    }

    let rules = StandardRules::new(RuleConfig {
        min_word_len: args.min_len,
        anchor: args.anchor,
    });
    let config = SearchConfig {
        prune: args.prune,
        memoize: args.memoize,
        order: args
            .seed
            .map_or(CandidateOrder::Dictionary, |seed| CandidateOrder::Shuffled { seed }),
    };

    let board = Board::new(args.letters);
    let mut solver = Solver::new(board, &dictionary, &rules, Backtracking::new(config))
        .with_trace(args.trace);
    let best = solver.solve().context("search failed")?;
    report(&best, &solver.strategy().stats());
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Tileboard: exhaustive word board search\n");

    let dictionary = Dictionary::new(DEMO_WORDS);
    let letters: LetterPool = DEMO_LETTERS.parse()?;
    println!("Dictionary: {}", DEMO_WORDS.join(", "));
    println!("Letters: {letters}\n");

    let rules = StandardRules::new(RuleConfig {
        anchor: Some(CENTER),
        ..RuleConfig::default()
    });
    let config = SearchConfig {
        prune: true,
        ..SearchConfig::default()
    };
    let board = Board::new(letters);
    let mut solver =
        Solver::new(board, &dictionary, &rules, Backtracking::new(config)).with_trace(true);
    let best = solver.solve()?;
    report(&best, &solver.strategy().stats());
    Ok(())
}

fn report(best: &Board, stats: &tileboard::solver::SearchStats) {
    println!("{best}");
    println!("Score: {}", best.score());
    println!("Letters left: {}", best.pool());
    for mv in best.history() {
        println!("  {mv}");
    }
    println!(
        "Explored {} states ({} leaves, {} pruned, {} repeats)",
        stats.nodes, stats.leaves, stats.pruned, stats.memo_hits
    );
}
