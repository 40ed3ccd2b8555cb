use std::io::{BufRead, Write};

use crate::{error::Result, model::election::parse_ballot_position};

use super::{public::write_candidates, Console};

impl<R: BufRead, W: Write> Console<R, W> {
    /// Let a registered voter cast their one ballot.
    pub(super) fn vote(&mut self) -> Result<()> {
        if let Err(err) = self.data.ensure_ballot_open() {
            writeln!(self.output, "{err}")?;
            return Ok(());
        }

        let Some(id) = self.prompt("Enter your Voter ID: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter your Name: ")? else {
            return Ok(());
        };
        if let Err(err) = self.data.check_eligibility(&id) {
            writeln!(self.output, "{err}\n")?;
            return Ok(());
        }

        write_candidates(&mut self.output, &self.data)?;
        let Some(choice) = self.prompt("Enter the candidate number you want to vote for: ")?
        else {
            return Ok(());
        };

        let outcome = parse_ballot_position(&choice).and_then(|position| {
            self.data
                .cast_vote(&id, &name, position)
                .map(|record| record.voted_for.clone())
        });
        match outcome {
            Ok(candidate) => {
                self.persist()?;
                writeln!(
                    self.output,
                    "Thank you {}! Your vote for '{candidate}' has been recorded.\n",
                    name.trim()
                )?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }
}
