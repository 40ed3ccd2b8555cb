use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{
    ballot::BallotRecord,
    voter::{Voter, VoterId},
};

use super::ElectionError;

/// The whole election, as persisted in the data file.
///
/// Every mutating operation either succeeds completely or returns an [`ElectionError`]
/// without touching any field. Persisting the result is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionData {
    /// Candidate names in ballot order.
    candidates: Vec<String>,
    /// Tally for each candidate, kept in ballot order.
    votes: IndexMap<String, u64>,
    /// Registered voters.
    voters: Vec<Voter>,
    /// One record per voter who has cast a ballot.
    voted: Vec<BallotRecord>,
}

impl ElectionData {
    /// Register a candidate with a zero tally. Names are trimmed and compared
    /// case-sensitively.
    pub fn add_candidate(&mut self, name: &str) -> Result<(), ElectionError> {
        let name = name.trim();
        if self.candidates.iter().any(|candidate| candidate == name) {
            warn!("Rejected duplicate candidate '{name}'");
            return Err(ElectionError::DuplicateCandidate(name.to_string()));
        }

        self.candidates.push(name.to_string());
        self.votes.insert(name.to_string(), 0);
        info!(
            "Registered candidate '{name}' at ballot position {}",
            self.candidates.len()
        );
        Ok(())
    }

    /// Register a voter. The ID is validated before it is checked for uniqueness.
    pub fn add_voter(&mut self, id: &str, name: &str) -> Result<&Voter, ElectionError> {
        let id = VoterId::parse(id)?;
        if self.voter(id.as_str()).is_some() {
            warn!("Rejected duplicate voter ID {id}");
            return Err(ElectionError::DuplicateVoterId(id));
        }

        info!("Registered voter {id}");
        let index = self.voters.len();
        self.voters.push(Voter::new(id, name.trim().to_string()));
        Ok(&self.voters[index])
    }

    /// Check that voting is possible at all: there must be someone to vote for and
    /// someone allowed to vote.
    pub fn ensure_ballot_open(&self) -> Result<(), ElectionError> {
        if self.candidates.is_empty() {
            return Err(ElectionError::NoCandidates);
        }
        if self.voters.is_empty() {
            return Err(ElectionError::NoVoters);
        }
        Ok(())
    }

    /// Check that the voter with this ID may cast a ballot now, returning their registration.
    pub fn check_eligibility(&self, id: &str) -> Result<&Voter, ElectionError> {
        self.ensure_ballot_open()?;

        let id = id.trim();
        let voter = self.voter(id).ok_or(ElectionError::NotRegistered)?;
        if self.has_voted(id) {
            warn!("Rejected second ballot from voter {id}");
            return Err(ElectionError::AlreadyVoted);
        }
        Ok(voter)
    }

    /// Cast a ballot for the candidate at the 1-based `position`.
    ///
    /// `name` is recorded as given, independently of the registered name.
    pub fn cast_vote(
        &mut self,
        id: &str,
        name: &str,
        position: usize,
    ) -> Result<&BallotRecord, ElectionError> {
        let voter_id = self.check_eligibility(id)?.id.clone();
        let candidate = self
            .candidate(position)
            .ok_or(ElectionError::InvalidCandidateNumber)?
            .to_string();

        *self.votes.entry(candidate.clone()).or_insert(0) += 1;
        info!("Recorded ballot from voter {voter_id}");
        let index = self.voted.len();
        self.voted.push(BallotRecord::new(
            voter_id,
            name.trim().to_string(),
            candidate,
        ));
        Ok(&self.voted[index])
    }

    /// Clear everything, but only if `confirmation` matches `token` exactly.
    pub fn reset(&mut self, confirmation: &str, token: &str) -> Result<(), ElectionError> {
        if confirmation != token {
            warn!("Reset not confirmed, election data left untouched");
            return Err(ElectionError::ResetNotConfirmed);
        }
        self.clear();
        Ok(())
    }

    /// Empty all four collections.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.votes.clear();
        self.voters.clear();
        self.voted.clear();
        info!("Cleared all election data");
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The candidate at a 1-based ballot position.
    pub fn candidate(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.candidates.get(index))
            .map(String::as_str)
    }

    pub fn voters(&self) -> &[Voter] {
        &self.voters
    }

    pub fn voter(&self, id: &str) -> Option<&Voter> {
        self.voters.iter().find(|voter| voter.id.as_str() == id)
    }

    pub fn voted(&self) -> &[BallotRecord] {
        &self.voted
    }

    pub fn has_voted(&self, id: &str) -> bool {
        self.voted.iter().any(|record| record.id.as_str() == id)
    }

    pub fn tally(&self, candidate: &str) -> Option<u64> {
        self.votes.get(candidate).copied()
    }

    /// Candidate tallies in ballot order.
    pub fn results(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.votes.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn total_votes(&self) -> u64 {
        self.votes.values().sum()
    }

    /// Whether the cross-collection invariants hold: one tally per candidate, tallies
    /// summing to the number of ballots, unique voter IDs, and one ballot at most per
    /// registered voter.
    pub fn is_consistent(&self) -> bool {
        let tallies_match = self.votes.len() == self.candidates.len()
            && self.candidates.iter().all(|c| self.votes.contains_key(c));
        let counts_match = self.total_votes() == self.voted.len() as u64;

        let mut registered = HashSet::new();
        let voters_unique = self
            .voters
            .iter()
            .all(|voter| registered.insert(voter.id.as_str()));

        let mut seen = HashSet::new();
        let ballots_valid = self
            .voted
            .iter()
            .all(|record| registered.contains(record.id.as_str()) && seen.insert(record.id.as_str()));

        tallies_match && counts_match && voters_unique && ballots_valid
    }
}

/// Interpret a voter's ballot selection. Anything that is not an integer is
/// [`ElectionError::NotANumber`]; negative integers can never be a ballot position.
pub fn parse_ballot_position(raw: &str) -> Result<usize, ElectionError> {
    let number: i64 = raw.trim().parse().map_err(|_| ElectionError::NotANumber)?;
    usize::try_from(number).map_err(|_| ElectionError::InvalidCandidateNumber)
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl ElectionData {
        /// Two candidates, "Alice" and "Bob", and two registered voters who have not voted.
        pub fn example() -> Self {
            let mut data = Self::default();
            data.add_candidate("Alice").unwrap();
            data.add_candidate("Bob").unwrap();
            data.add_voter(VoterId::example().as_str(), &Voter::example().name)
                .unwrap();
            data.add_voter(VoterId::example2().as_str(), &Voter::example2().name)
                .unwrap();
            data
        }
    }
}
