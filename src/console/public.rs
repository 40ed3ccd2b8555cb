//! Read-only views of the election, shared by the main menu and the admin panel.

use std::io::{self, Write};

use crate::model::election::ElectionData;

/// Numbered candidate list. The numbers are the ballot positions voters choose from.
pub fn write_candidates(out: &mut impl Write, data: &ElectionData) -> io::Result<()> {
    if data.candidates().is_empty() {
        return writeln!(out, "No candidates added yet.");
    }
    writeln!(out, "\n--- List of Candidates ---")?;
    for (index, name) in data.candidates().iter().enumerate() {
        writeln!(out, "{}. {name}", index + 1)?;
    }
    writeln!(out, "---------------------------\n")
}

/// Registered voters. Only shown behind the admin password.
pub fn write_voters(out: &mut impl Write, data: &ElectionData) -> io::Result<()> {
    if data.voters().is_empty() {
        return writeln!(out, "No voters registered yet.");
    }
    writeln!(out, "\n--- Registered Voters (Admin Only) ---")?;
    for voter in data.voters() {
        writeln!(out, "ID: {} | Name: {}", voter.id, voter.name)?;
    }
    writeln!(out, "--------------------------------------\n")
}

/// Tallies in ballot order.
pub fn write_results(out: &mut impl Write, data: &ElectionData) -> io::Result<()> {
    if data.results().next().is_none() {
        return writeln!(out, "No votes recorded yet.\n");
    }
    writeln!(out, "\n======= Election Results =======")?;
    for (name, count) in data.results() {
        writeln!(
            out,
            "{name}: {count} vote{}",
            if count != 1 { "s" } else { "" }
        )?;
    }
    writeln!(out, "================================\n")
}
