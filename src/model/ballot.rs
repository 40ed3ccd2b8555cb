use serde::{Deserialize, Serialize};

use crate::model::voter::VoterId;

/// Proof that a voter has cast their ballot, and for whom.
///
/// The presence of a record with a given `id` is the only "has voted" marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotRecord {
    pub id: VoterId,
    /// Name as entered by the voter at the time of voting.
    pub name: String,
    /// Candidate name, not ballot position.
    pub voted_for: String,
}

impl BallotRecord {
    pub fn new(id: VoterId, name: String, voted_for: String) -> Self {
        Self {
            id,
            name,
            voted_for,
        }
    }
}
