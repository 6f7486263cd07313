use anyhow::Result;
use number_guessing::cli::{parse_cli, run_loop};
use number_guessing::generator::RandomGenerator;
use number_guessing::session::GameSession;
use std::io;

fn main() -> Result<()> {
    env_logger::init();
    let cli = parse_cli();
    let generator = match cli.seed {
        Some(seed) => RandomGenerator::seeded(seed),
        None => RandomGenerator::new(),
    };
    let mut session = GameSession::new(generator);
    let stdin = io::stdin();
    run_loop(&mut session, stdin.lock(), io::stdout())?;
    Ok(())
}
