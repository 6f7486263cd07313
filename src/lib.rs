// Library interface for the number guessing game
// This allows integration tests to drive a session without a terminal

pub mod cli;
pub mod generator;
pub mod session;

// Re-export commonly used items for easier testing
pub use cli::run_loop;
pub use generator::{NumberGenerator, RandomGenerator};
pub use session::{GameSession, SELECT_MODE_MESSAGE};
