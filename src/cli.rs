use crate::generator::NumberGenerator;
use crate::session::GameSession;
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Number guessing game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the secret number generator (replays the same game)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Console driver: print buffered output, read one line, feed it back in.
///
/// Prompts end without a newline, so the writer is flushed after every print.
/// Ends when the session completes or the reader runs out of input; the last
/// flush is printed either way.
pub fn run_loop<G, R, W>(
    session: &mut GameSession<G>,
    mut reader: R,
    mut writer: W,
) -> io::Result<()>
where
    G: NumberGenerator,
    R: BufRead,
    W: Write,
{
    while !session.is_completed() {
        write!(writer, "{}", session.flush_output())?;
        writer.flush()?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        session.process_input(line.trim_end_matches(['\r', '\n']));
    }
    write!(writer, "{}", session.flush_output())?;
    writer.flush()?;
    Ok(())
}
