use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use tools::{Pacing, autoplay, load_config, write_json};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,
    /// TOML config; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the input journal here for later replay
    #[arg(short, long)]
    record: Option<PathBuf>,
    /// Write the final score record here
    #[arg(long)]
    scores: Option<PathBuf>,
    #[arg(long, default_value = "fuzz")]
    player: String,
    #[arg(long, value_enum, default_value_t = Pacing::Synthetic)]
    pacing: Pacing,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    println!("Starting Fuzz harness on seed {} for max {} ticks...", args.seed, args.ticks);
    let (report, session) = autoplay(args.seed, args.ticks, config, args.pacing)?;
    println!(
        "Stopped in {:?} on level {} after {} ticks (score {}, best {})",
        report.final_state, report.level, report.ticks, report.score, report.best_score
    );
    println!("Snapshot Hash: {}", report.final_snapshot_hash);

    if let Some(path) = &args.record {
        write_json(path, &report.journal)?;
        println!("Journal written to {}", path.display());
    }
    if let Some(path) = &args.scores {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64);
        write_json(path, &vec![session.score_record(&args.player, timestamp)])?;
        println!("Score written to {}", path.display());
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
