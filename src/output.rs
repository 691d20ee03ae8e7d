//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::Pokemon;

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Pokemon {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.name.len().max(20));

        let types = if self.types.is_empty() {
            "(none)".to_string()
        } else {
            self.types.join(", ")
        };

        let lines = [
            format!("Pokemon: {}", self.name),
            divider,
            format!("Id:     {}", self.id),
            format!("Types:  {types}"),
        ];

        lines.join("\n")
    }
}
