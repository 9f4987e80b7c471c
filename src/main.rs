use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use script_quiz::config::Cli;
use script_quiz::quiz::session;
use script_quiz::Script;

fn main() -> Result<()> {
    // A missing .env is fine, everything has a default.
    dotenv().ok();
    pretty_env_logger::init();

    let cli = Cli::parse();
    let settings = cli.settings();
    debug!("Settings: {:?}", settings);

    let script = Script::open(&cli.script)
        .with_context(|| format!("Could not read the script {}", cli.script.display()))?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    debug!("Random seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let script_name = cli.script.display().to_string();
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::play(
        &script,
        &script_name,
        &settings,
        &mut rng,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .with_context(|| format!("Could not run a quiz on {}", script_name))?;

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
