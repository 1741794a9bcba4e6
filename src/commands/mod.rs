//! Command system for unit-test-summary
//!
//! Commands are discovered and executed through the Command trait.

use crate::error::Result;
use crate::ui::UI;

pub mod stats;
pub mod summary;
pub mod utils;

pub use stats::StatsCommand;
pub use summary::SummaryCommand;

/// Trait that all commands must implement
pub trait Command {
    /// Execute the command
    fn execute(&self, ui: &mut dyn UI) -> Result<i32>;

    /// Get the command name
    fn name(&self) -> &str;
}
