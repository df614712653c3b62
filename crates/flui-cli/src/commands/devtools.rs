//! DevTools command for launching the FLUI development tools.
//!
//! This command will launch a visual debugging interface for FLUI applications.
//!
//! # Planned Features
//!
//! - Visual widget inspector
//! - Performance profiling
//! - Network monitoring
//! - State debugging

use crate::error::CliResult;
use console::style;

/// Execute the devtools command.
///
/// # Errors
///
/// Returns an error if cliclack output fails.
pub fn execute(port: u16) -> CliResult<()> {
    cliclack::intro(style(" flui devtools ").on_green().black())?;

    let features = format!(
        "{}\n\n  {} Visual widget inspector\n  {} Performance profiling\n  {} Network monitoring\n  {} State debugging\n\n{}",
        style(format!("Port: {}", port)).cyan(),
        style("○").dim(),
        style("○").dim(),
        style("○").dim(),
        style("○").dim(),
        style("Coming soon...").dim(),
    );

    cliclack::note("Planned Features", features)?;
    cliclack::outro(style("Not yet implemented").dim())?;

    Ok(())
}
