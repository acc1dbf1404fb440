use shared::ValidationError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Admin-only operation called by another address
    NotAuthorized = 3,
    /// Caller is not a registered voter
    NotRegistered = 4,
    AlreadyRegistered = 5,
    EmptyProposal = 6,
    ProposalTooLong = 7,
    TooManyProposals = 8,
    AlreadyVoted = 9,
    ProposalNotFound = 10,
    /// Operation attempted outside its workflow stage
    InvalidWorkflowState = 11,
    /// Winner requested before the tally
    VotesNotTallied = 12,
}

impl From<ValidationError> for VotingError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Empty => VotingError::EmptyProposal,
            ValidationError::TooLong => VotingError::ProposalTooLong,
            ValidationError::LimitExceeded => VotingError::TooManyProposals,
        }
    }
}
