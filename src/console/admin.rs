use std::io::{BufRead, Write};

use crate::{error::Result, model::voter::MIN_VOTER_ID_LEN};

use super::{
    public::{write_candidates, write_results, write_voters},
    Console,
};

impl<R: BufRead, W: Write> Console<R, W> {
    /// The password-gated admin menu.
    pub(super) fn admin_panel(&mut self) -> Result<()> {
        let Some(attempt) = self.prompt("Enter admin password: ")? else {
            return Ok(());
        };
        if !self.config.check_admin_password(&attempt) {
            warn!("Rejected admin password");
            writeln!(self.output, "Wrong password! Returning to main menu.\n")?;
            return Ok(());
        }
        info!("Admin panel opened");

        loop {
            writeln!(self.output, "\n--- Admin Panel ---")?;
            writeln!(self.output, "1. Add Candidates")?;
            writeln!(self.output, "2. Add Voters")?;
            writeln!(self.output, "3. View Candidate List")?;
            writeln!(self.output, "4. View Voter List (Admin Only)")?;
            writeln!(self.output, "5. View Results")?;
            writeln!(self.output, "6. Clear All Data")?;
            writeln!(self.output, "7. Back to Main Menu")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.trim() {
                "1" => self.add_candidates()?,
                "2" => self.add_voters()?,
                "3" => write_candidates(&mut self.output, &self.data)?,
                "4" => write_voters(&mut self.output, &self.data)?,
                "5" => write_results(&mut self.output, &self.data)?,
                "6" => self.clear_data()?,
                "7" => break,
                _ => writeln!(self.output, "Invalid choice, try again.")?,
            }
        }

        info!("Admin panel closed");
        Ok(())
    }

    /// Register a batch of candidates, skipping duplicates.
    fn add_candidates(&mut self) -> Result<()> {
        let Some(count) = self.prompt_count("Enter number of candidates: ")? else {
            return Ok(());
        };

        for i in 1..=count {
            let Some(name) = self.prompt(&format!("Enter candidate {i} name: "))? else {
                break;
            };
            if let Err(err) = self.data.add_candidate(&name) {
                writeln!(self.output, "{err}")?;
            }
        }

        self.persist()?;
        writeln!(self.output, "\nCandidates added successfully!\n")?;
        Ok(())
    }

    /// Register a batch of voters. Each voter is asked for again until their ID is
    /// well-formed and unused.
    fn add_voters(&mut self) -> Result<()> {
        let Some(count) = self.prompt_count("Enter number of voters to register: ")? else {
            return Ok(());
        };

        'voters: for i in 1..=count {
            loop {
                let id_prompt = format!(
                    "Enter Voter ID for voter {i} (must be at least {MIN_VOTER_ID_LEN} digits): "
                );
                let Some(id) = self.prompt(&id_prompt)? else {
                    break 'voters;
                };
                let Some(name) = self.prompt(&format!("Enter Name for voter {i}: "))? else {
                    break 'voters;
                };

                match self.data.add_voter(&id, &name) {
                    Ok(voter) => {
                        writeln!(
                            self.output,
                            "Voter '{}' (ID: {}) added successfully!\n",
                            voter.name, voter.id
                        )?;
                        break;
                    }
                    Err(err) => writeln!(self.output, "{err}")?,
                }
            }
        }

        self.persist()?;
        writeln!(self.output, "All voters added successfully!\n")?;
        Ok(())
    }

    /// Wipe the election after the admin types the reset token.
    fn clear_data(&mut self) -> Result<()> {
        let message = format!(
            "Type '{}' to delete all data: ",
            self.config.reset_token()
        );
        let Some(confirmation) = self.prompt(&message)? else {
            return Ok(());
        };

        match self.data.reset(&confirmation, self.config.reset_token()) {
            Ok(()) => {
                self.persist()?;
                writeln!(self.output, "All data cleared successfully.")?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    /// Ask how many items to enter. Non-numeric answers are reported and yield `None`.
    fn prompt_count(&mut self, message: &str) -> Result<Option<usize>> {
        let Some(raw) = self.prompt(message)? else {
            return Ok(None);
        };
        match raw.trim().parse() {
            Ok(count) => Ok(Some(count)),
            Err(_) => {
                writeln!(self.output, "Please enter a valid number.")?;
                Ok(None)
            }
        }
    }
}
