//! # Roles Subcommand
//!
//! Prints the central authorization table — the same table the API
//! checks, so what this prints is what the server enforces.

use clap::Args;

use cadence_core::{allowed_roles, Operation};

/// Arguments for the roles subcommand.
#[derive(Args, Debug)]
pub struct RolesArgs {
    /// Only show operations whose name contains this substring.
    #[arg(long)]
    pub operation: Option<String>,
}

/// Render the table as lines.
pub fn table(filter: Option<&str>) -> Vec<String> {
    let filter = filter.map(str::to_uppercase);
    Operation::all()
        .iter()
        .filter(|op| match &filter {
            Some(f) => op.as_str().contains(f.as_str()),
            None => true,
        })
        .map(|op| {
            let roles: Vec<&str> = allowed_roles(*op).iter().map(|r| r.as_str()).collect();
            format!("{:<18} {}", op.as_str(), roles.join(", "))
        })
        .collect()
}

/// Run the subcommand.
pub fn run(args: RolesArgs) -> anyhow::Result<()> {
    for line in table(args.operation.as_deref()) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table_covers_every_operation() {
        assert_eq!(table(None).len(), Operation::all().len());
    }

    #[test]
    fn test_filter_narrows() {
        let lines = table(Some("dispute"));
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| l.contains("DISPUTE")));
    }

    #[test]
    fn test_file_dispute_is_employee_only() {
        let lines = table(Some("file_dispute"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("EMPLOYEE"));
        assert!(!lines[0].contains("HR"));
    }
}
