use std::io::{BufRead, Write};

use crate::{config::Config, error::Result, model::election::ElectionData, store::Store};

pub use self::public::{write_candidates, write_results, write_voters};

mod admin;
mod public;
mod voting;

const RULE: &str = "===============================";

/// The line-based menus.
///
/// The console owns the election for the whole session and writes it back through its
/// [`Store`] after every successful change. Input errors are reported and re-prompted;
/// only storage and terminal failures are returned.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: Config,
    store: Store,
    data: ElectionData,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: Config, store: Store, data: ElectionData) -> Self {
        Self {
            input,
            output,
            config,
            store,
            data,
        }
    }

    /// Load the configured data file and start a session on it.
    pub fn open(input: R, output: W, config: Config) -> Result<Self> {
        let store = Store::new(config.data_file());
        let data = store.load()?;
        Ok(Self::new(input, output, config, store, data))
    }

    pub fn data(&self) -> &ElectionData {
        &self.data
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the main menu until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{RULE}")?;
            writeln!(self.output, "        POLLING STATION")?;
            writeln!(self.output, "{RULE}")?;
            writeln!(self.output, "1. Admin Panel")?;
            writeln!(self.output, "2. View Candidate List")?;
            writeln!(self.output, "3. Cast Vote")?;
            writeln!(self.output, "4. Show Results")?;
            writeln!(self.output, "5. Exit")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.trim() {
                "1" => self.admin_panel()?,
                "2" => write_candidates(&mut self.output, &self.data)?,
                "3" => self.vote()?,
                "4" => write_results(&mut self.output, &self.data)?,
                "5" => {
                    writeln!(self.output, "Thank you for using the polling station!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice, try again.")?,
            }
        }

        info!("Session ended");
        Ok(())
    }

    /// Print `message` and read one line without its line ending.
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.data)?;
        Ok(())
    }
}
