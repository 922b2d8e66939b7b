//! flip7-sim: play Flip7 games between random policies and print the rounds.

use clap::Parser;
use rand::Rng;
use tracing::info;

use flip7::sim::{RandomPolicy, SimConfig, Simulator};

#[derive(Parser)]
#[command(name = "flip7-sim")]
#[command(about = "Simulate Flip7 games with a biased random policy")]
struct Args {
    /// Number of players
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Cumulative score that ends the game
    #[arg(short, long, default_value = "100")]
    target: u32,

    /// Probability of Hit when Stay is also legal
    #[arg(long, default_value = "0.9")]
    bias_hit: f64,

    /// Seed for decks and policy; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many rounds
    #[arg(long, default_value = "1000")]
    max_rounds: u32,

    /// Print round summaries as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if !(1..=255).contains(&args.players) {
        return Err(format!("--players must be between 1 and 255, got {}", args.players).into());
    }
    if !(0.0..=1.0).contains(&args.bias_hit) {
        return Err(format!("--bias-hit must be within 0..=1, got {}", args.bias_hit).into());
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let config = SimConfig::default()
        .with_players(args.players)
        .with_target(args.target)
        .with_bias_hit(args.bias_hit)
        .with_seed(seed)
        .with_max_rounds(args.max_rounds);
    info!(?config, "starting simulation");

    let mut sim = Simulator::new(config, RandomPolicy::new(args.bias_hit));
    let json = args.json;
    let summary = sim.run_game_with(|round| {
        if json {
            match serde_json::to_string(round) {
                Ok(line) => println!("{line}"),
                Err(err) => eprintln!("failed to encode round {}: {err}", round.round),
            }
        } else {
            println!("{round}\n");
        }
    })?;

    let scores: Vec<String> = summary
        .final_scores
        .iter()
        .map(|(player, score)| format!("{player}={score}"))
        .collect();
    println!("Game over! Final Scores: {}", scores.join(", "));
    if summary.completed {
        println!("Winner: {}", summary.winner);
    } else {
        println!(
            "No one reached {} within {} rounds; leader: {}",
            args.target, args.max_rounds, summary.winner
        );
    }
    println!("Seed: {seed}");

    Ok(())
}
