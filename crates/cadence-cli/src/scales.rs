//! # Scales Subcommand
//!
//! Lists the rating scales templates can be built on.

use cadence_template::ScaleKind;

/// Run the subcommand.
pub fn run() -> anyhow::Result<()> {
    for kind in ScaleKind::all() {
        println!("{} — {} points, one label per point", kind, kind.max());
    }
    Ok(())
}
