use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::model::election::ElectionData;

/// Indentation used in the data file.
const INDENT: &[u8] = b"    ";

/// Failures reading or writing the data file. These are not recoverable by re-prompting.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access data file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Data file {} is not valid election data: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The JSON file holding the election.
///
/// Every save rewrites the whole file in place. There is no locking and no atomic
/// replace: two processes sharing a file will overwrite each other, and a crash during a
/// save can leave the file truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the election from disk, or start an empty one if the file does not exist yet.
    pub fn load(&self) -> Result<ElectionData, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "No data file at {}, starting with an empty election",
                    self.path.display()
                );
                return Ok(ElectionData::default());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let data: ElectionData =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        if !data.is_consistent() {
            warn!(
                "Data file {} is internally inconsistent; loading it anyway",
                self.path.display()
            );
        }
        info!(
            "Loaded {} candidates, {} voters and {} ballots from {}",
            data.candidates().len(),
            data.voters().len(),
            data.voted().len(),
            self.path.display()
        );
        Ok(data)
    }

    /// Overwrite the file with the full election, pretty-printed with 4-space indents.
    pub fn save(&self, data: &ElectionData) -> Result<(), StoreError> {
        let file = File::create(&self.path).map_err(|err| self.io_error(err))?;
        let mut writer = BufWriter::new(file);

        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = Serializer::with_formatter(&mut writer, formatter);
        data.serialize(&mut serializer)
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        writer.flush().map_err(|err| self.io_error(err))?;

        debug!("Saved election data to {}", self.path.display());
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
