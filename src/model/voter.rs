use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::model::election::ElectionError;

/// Shortest voter ID accepted at registration.
pub const MIN_VOTER_ID_LEN: usize = 10;

/// A voter's registration number.
///
/// Construction through [`VoterId::parse`] guarantees the ID is all ASCII digits and at
/// least [`MIN_VOTER_ID_LEN`] long. Deserialization does not re-check this, so documents
/// written by hand are loaded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    /// Validate raw user input as a voter ID. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, ElectionError> {
        let id = raw.trim();
        if id.len() >= MIN_VOTER_ID_LEN && id.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(id.to_string()))
        } else {
            Err(ElectionError::InvalidVoterId)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VoterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered voter. Names need not be unique; the ID is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub id: VoterId,
    pub name: String,
}

impl Voter {
    pub fn new(id: VoterId, name: String) -> Self {
        Self { id, name }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl VoterId {
        pub fn example() -> Self {
            Self("1234567890".to_string())
        }

        pub fn example2() -> Self {
            Self("9876543210123".to_string())
        }
    }

    impl Voter {
        pub fn example() -> Self {
            Self::new(VoterId::example(), "Asha".to_string())
        }

        pub fn example2() -> Self {
            Self::new(VoterId::example2(), "Ravi".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_long_digit_strings() {
        assert_eq!(VoterId::parse("1234567890"), Ok(VoterId::example()));
        assert_eq!(
            VoterId::parse("  9876543210123\n").map(|id| id.to_string()),
            Ok("9876543210123".to_string())
        );
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "123456789", "12345abcde", "12345 67890", "-123456789", "１２３４５６７８９０"] {
            assert_eq!(
                VoterId::parse(raw),
                Err(ElectionError::InvalidVoterId),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_plain_record() {
        let json = serde_json::to_value(Voter::example()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1234567890", "name": "Asha" })
        );

        // Stored documents are trusted as written.
        let voter: Voter = serde_json::from_str(r#"{"id": "42", "name": "Old"}"#).unwrap();
        assert_eq!(voter.id.as_str(), "42");
    }
}
