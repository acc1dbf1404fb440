//! Notifications published by the voting contract.
//!
//! Every successful mutating call publishes exactly one of these. The topic is
//! the event name; the data carries the fields indexers consume.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::WorkflowStatus;

pub fn initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("init"),), admin.clone());
}

pub fn voter_registered(env: &Env, voter_address: &Address) {
    env.events().publish(
        (Symbol::new(env, "VoterRegistered"),),
        voter_address.clone(),
    );
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events()
        .publish((Symbol::new(env, "ProposalRegistered"),), proposal_id);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events()
        .publish((Symbol::new(env, "Voted"),), (voter.clone(), proposal_id));
}

pub fn workflow_status_change(
    env: &Env,
    previous_status: WorkflowStatus,
    new_status: WorkflowStatus,
) {
    env.events().publish(
        (Symbol::new(env, "WorkflowStatusChange"),),
        (previous_status, new_status),
    );
}
