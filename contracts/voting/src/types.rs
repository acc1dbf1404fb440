use soroban_sdk::{contracttype, Address, String, Vec};

/// Ordered stages of a voting session.
///
/// The session only ever moves one stage forward:
/// - `RegisteringVoters` → `ProposalsRegistrationStarted`
/// - `ProposalsRegistrationStarted` → `ProposalsRegistrationEnded`
/// - `ProposalsRegistrationEnded` → `VotingSessionStarted`
/// - `VotingSessionStarted` → `VotingSessionEnded`
/// - `VotingSessionEnded` → `VotesTallied`
/// - `VotesTallied` → Terminal (no further transitions)
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The single stage reachable from this one, `None` once votes are tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }

    /// Whether `next` is the immediate successor of this stage.
    /// Self-transitions, skips and backward moves are all rejected.
    pub fn can_transition_to(self, next: WorkflowStatus) -> bool {
        self.next() == Some(next)
    }
}

/// Registration and ballot state of a single voter
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set
    pub voted_proposal_id: u32,
}

impl Voter {
    pub fn registered() -> Self {
        Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

/// A proposal submitted by a registered voter, identified by its submission index
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

impl Proposal {
    pub fn new(description: String) -> Self {
        Proposal {
            description,
            vote_count: 0,
        }
    }
}

/// Result of a paginated proposals query.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ProposalPage {
    /// Proposals in the current page, in index order
    pub proposals: Vec<Proposal>,
    /// Total number of proposals (for pagination calculations)
    pub total_count: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Admin,
    Status,
    ProposalCount,
    WinningProposalId,
    // Persistent storage
    Voter(Address),
    Proposal(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WorkflowStatus; 6] = [
        WorkflowStatus::RegisteringVoters,
        WorkflowStatus::ProposalsRegistrationStarted,
        WorkflowStatus::ProposalsRegistrationEnded,
        WorkflowStatus::VotingSessionStarted,
        WorkflowStatus::VotingSessionEnded,
        WorkflowStatus::VotesTallied,
    ];

    #[test]
    fn test_status_discriminants() {
        for (i, status) in ALL.iter().enumerate() {
            assert_eq!(*status as u32, i as u32);
        }
    }

    #[test]
    fn test_only_single_step_forward_transitions() {
        for (i, from) in ALL.iter().enumerate() {
            for (j, to) in ALL.iter().enumerate() {
                assert_eq!(from.can_transition_to(*to), j == i + 1);
            }
        }
        assert_eq!(WorkflowStatus::VotesTallied.next(), None);
    }

    #[test]
    fn test_status_ordering() {
        assert!(WorkflowStatus::RegisteringVoters < WorkflowStatus::VotesTallied);
        assert!(WorkflowStatus::VotingSessionStarted > WorkflowStatus::ProposalsRegistrationEnded);
    }

    #[test]
    fn test_default_voter_is_unregistered() {
        let voter = Voter::default();
        assert!(!voter.is_registered);
        assert!(!voter.has_voted);
        assert!(Voter::registered().is_registered);
    }
}
