use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use squish_core::{ReplayResult, replay_to_end};
use tools::read_journal;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal = read_journal(&args.journal)?;
    let result: ReplayResult = replay_to_end(&journal)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {:?}", e))?;

    println!("Replay complete.");
    println!("Final Tick: {}", result.final_tick);
    println!("State: {:?} (level {}, score {})", result.final_state, result.level, result.score);
    if result.quit {
        println!("Stopped at a recorded quit.");
    }
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
