pub use election_core::{parse_ballot_position, ElectionData};
pub use errors::ElectionError;

mod election_core;
mod errors;
