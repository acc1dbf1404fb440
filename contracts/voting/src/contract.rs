use shared::constants::MAX_PROPOSALS;
use shared::validation::{effective_page_limit, validate_capacity, validate_description};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::{Proposal, ProposalPage, Voter, WorkflowStatus};

#[contract]
pub struct VotingContract;

fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    let admin = storage::get_admin(env)?;
    if *caller != admin {
        return Err(VotingError::NotAuthorized);
    }
    Ok(())
}

fn require_status(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
    if storage::get_status(env)? != expected {
        return Err(VotingError::InvalidWorkflowState);
    }
    Ok(())
}

fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    match storage::get_voter(env, caller) {
        Some(voter) if voter.is_registered => Ok(voter),
        _ => Err(VotingError::NotRegistered),
    }
}

/// Moves the session from `from` to its successor and publishes the change.
/// The caller must already have been checked as admin.
fn advance(env: &Env, from: WorkflowStatus) -> Result<WorkflowStatus, VotingError> {
    require_status(env, from)?;
    let to = from.next().ok_or(VotingError::InvalidWorkflowState)?;

    storage::set_status(env, to);
    storage::extend_instance(env);

    log!(env, "workflow status change", from as u32, to as u32);
    events::workflow_status_change(env, from, to);
    Ok(to)
}

/// Index of the proposal with the most votes. The scan runs in index order and
/// only replaces the leader on a strictly greater count, so the lowest index
/// wins a tie.
fn find_winner(env: &Env) -> Result<Option<u32>, VotingError> {
    let count = storage::get_proposal_count(env);
    let mut leader: Option<(u32, u32)> = None;

    for proposal_id in 0..count {
        let proposal = storage::get_proposal(env, proposal_id)?;
        match leader {
            Some((_, best)) if proposal.vote_count <= best => {}
            _ => leader = Some((proposal_id, proposal.vote_count)),
        }
    }

    Ok(leader.map(|(proposal_id, _)| proposal_id))
}

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the session with its administrator. Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_proposal_count(&env, 0);
        storage::extend_instance(&env);

        events::initialized(&env, &admin);
        Ok(())
    }

    // ── Voter Registration ───────────────────────────────────────────────────

    /// Register `voter` for this session (admin only, while registering voters).
    pub fn register_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        require_status(&env, WorkflowStatus::RegisteringVoters)?;

        if storage::has_voter(&env, &voter) {
            return Err(VotingError::AlreadyRegistered);
        }

        storage::save_voter(&env, &voter, &Voter::registered());
        storage::extend_instance(&env);

        log!(&env, "voter registered", voter);
        events::voter_registered(&env, &voter);
        Ok(())
    }

    /// Voter record for `voter`, or an unregistered record if unknown.
    pub fn get_voter(env: Env, voter: Address) -> Voter {
        storage::get_voter(&env, &voter).unwrap_or_default()
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Submit a proposal. Returns its index, assigned in submission order from 0.
    ///
    /// # Errors
    /// * `NotRegistered` - caller is not a registered voter
    /// * `EmptyProposal` / `ProposalTooLong` - description rejected, at any stage
    /// * `InvalidWorkflowState` - proposals registration is not open
    /// * `TooManyProposals` - the session already holds `MAX_PROPOSALS`
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        caller.require_auth();
        storage::get_status(&env)?;
        require_voter(&env, &caller)?;
        validate_description(&description)?;
        require_status(&env, WorkflowStatus::ProposalsRegistrationStarted)?;

        let proposal_id = storage::get_proposal_count(&env);
        validate_capacity(proposal_id, MAX_PROPOSALS)?;

        storage::save_proposal(&env, proposal_id, &Proposal::new(description));
        storage::set_proposal_count(&env, proposal_id + 1);
        storage::extend_instance(&env);

        log!(&env, "proposal registered", caller, proposal_id);
        events::proposal_registered(&env, proposal_id);
        Ok(proposal_id)
    }

    pub fn get_one_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        storage::get_proposal(&env, proposal_id)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    /// Returns a page of proposals in index order.
    ///
    /// # Arguments
    /// * `start_index` - Index of the first proposal in the page
    /// * `limit` - Maximum number of proposals to return (0 or anything above
    ///   `MAX_PAGINATION_LIMIT` is capped to it)
    pub fn get_proposals(env: Env, start_index: u32, limit: u32) -> ProposalPage {
        let total_count = storage::get_proposal_count(&env);
        let mut proposals: Vec<Proposal> = Vec::new(&env);

        if start_index < total_count {
            let end_index = total_count.min(start_index.saturating_add(effective_page_limit(limit)));
            for proposal_id in start_index..end_index {
                if let Ok(proposal) = storage::get_proposal(&env, proposal_id) {
                    proposals.push_back(proposal);
                }
            }
        }

        ProposalPage {
            proposals,
            total_count,
        }
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast the caller's single vote for `proposal_id`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        caller.require_auth();
        storage::get_status(&env)?;
        let mut voter = require_voter(&env, &caller)?;
        require_status(&env, WorkflowStatus::VotingSessionStarted)?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }
        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        proposal.vote_count += 1;

        storage::save_voter(&env, &caller, &voter);
        storage::save_proposal(&env, proposal_id, &proposal);
        storage::extend_instance(&env);

        log!(&env, "voted", caller, proposal_id);
        events::voted(&env, &caller, proposal_id);
        Ok(())
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        advance(&env, WorkflowStatus::RegisteringVoters)?;
        Ok(())
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        advance(&env, WorkflowStatus::ProposalsRegistrationStarted)?;
        Ok(())
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        advance(&env, WorkflowStatus::ProposalsRegistrationEnded)?;
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        advance(&env, WorkflowStatus::VotingSessionStarted)?;
        Ok(())
    }

    /// Count the votes and close the session. With no proposals the session
    /// still closes, without a winner.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        require_status(&env, WorkflowStatus::VotingSessionEnded)?;

        if let Some(proposal_id) = find_winner(&env)? {
            storage::set_winning_proposal_id(&env, proposal_id);
            log!(&env, "winning proposal", proposal_id);
        }

        advance(&env, WorkflowStatus::VotingSessionEnded)?;
        Ok(())
    }

    pub fn workflow_status(env: Env) -> Result<WorkflowStatus, VotingError> {
        storage::get_status(&env)
    }

    /// Winning proposal once votes are tallied.
    pub fn get_winner(env: Env) -> Result<Proposal, VotingError> {
        if storage::get_status(&env)? != WorkflowStatus::VotesTallied {
            return Err(VotingError::VotesNotTallied);
        }
        let proposal_id =
            storage::get_winning_proposal_id(&env).ok_or(VotingError::ProposalNotFound)?;
        storage::get_proposal(&env, proposal_id)
    }

    pub fn winning_proposal_id(env: Env) -> Option<u32> {
        storage::get_winning_proposal_id(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env)
    }
}
