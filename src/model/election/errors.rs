use thiserror::Error;

use crate::model::voter::{VoterId, MIN_VOTER_ID_LEN};

/// Rejections of user actions. None of these are fatal, and none of them change the
/// election data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElectionError {
    #[error("Candidate '{0}' already exists, skipping.")]
    DuplicateCandidate(String),
    #[error(
        "Invalid ID. Must contain only digits and be at least {} digits long.",
        MIN_VOTER_ID_LEN
    )]
    InvalidVoterId,
    #[error("Voter ID {0} is already registered! Please use a unique ID.")]
    DuplicateVoterId(VoterId),
    #[error("No candidates available. Admin must add candidates first.")]
    NoCandidates,
    #[error("No registered voters. Admin must register voters first.")]
    NoVoters,
    #[error("You are not a registered voter.")]
    NotRegistered,
    #[error("You have already voted! Each voter can vote only once.")]
    AlreadyVoted,
    #[error("Invalid candidate number.")]
    InvalidCandidateNumber,
    #[error("Please enter a valid number.")]
    NotANumber,
    #[error("Confirmation did not match, nothing was cleared.")]
    ResetNotConfirmed,
}
