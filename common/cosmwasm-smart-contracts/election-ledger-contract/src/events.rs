// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::types::{Candidate, CandidateId, Election, ElectionId, RegistrationRequest};
use cosmwasm_std::{Addr, Event, Timestamp};
use std::fmt::{Display, Formatter};

pub enum ElectionLedgerEventType {
    ContractInstantiated,
    VoterIdAdded,
    RegistrationRequested,
    VoterVerified,
    RegistrationRejected,
    CandidateAdded,
    CandidateUpdated,
    CandidateDeactivated,
    CandidateActivated,
    ElectionCreated,
    ElectionStarted,
    ElectionEnded,
    ExpiredElectionClosed,
    VoteCast,
    ContractPaused,
    ContractUnpaused,
}

impl From<ElectionLedgerEventType> for String {
    fn from(typ: ElectionLedgerEventType) -> Self {
        typ.to_string()
    }
}

impl Display for ElectionLedgerEventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let typ = match self {
            ElectionLedgerEventType::ContractInstantiated => "contract_instantiated",
            ElectionLedgerEventType::VoterIdAdded => "voter_id_added",
            ElectionLedgerEventType::RegistrationRequested => "registration_requested",
            ElectionLedgerEventType::VoterVerified => "voter_verified",
            ElectionLedgerEventType::RegistrationRejected => "registration_rejected",
            ElectionLedgerEventType::CandidateAdded => "candidate_added",
            ElectionLedgerEventType::CandidateUpdated => "candidate_updated",
            ElectionLedgerEventType::CandidateDeactivated => "candidate_deactivated",
            ElectionLedgerEventType::CandidateActivated => "candidate_activated",
            ElectionLedgerEventType::ElectionCreated => "election_created",
            ElectionLedgerEventType::ElectionStarted => "election_started",
            ElectionLedgerEventType::ElectionEnded => "election_ended",
            ElectionLedgerEventType::ExpiredElectionClosed => "expired_election_closed",
            ElectionLedgerEventType::VoteCast => "vote_cast",
            ElectionLedgerEventType::ContractPaused => "contract_paused",
            ElectionLedgerEventType::ContractUnpaused => "contract_unpaused",
        };
        write!(f, "{typ}")
    }
}

// attributes that are used in multiple places
pub const SENDER_KEY: &str = "sender";
pub const VOTER_ID_KEY: &str = "voter_id";
pub const WALLET_KEY: &str = "wallet";
pub const CANDIDATE_ID_KEY: &str = "candidate_id";
pub const ELECTION_ID_KEY: &str = "election_id";

// instantiation
pub const ELECTORAL_COMMISSION_KEY: &str = "electoral_commission";
pub const SEEDED_VOTER_IDS_KEY: &str = "seeded_voter_ids";

// identity
pub const NEWLY_ADDED_KEY: &str = "newly_added";

// registration
pub const REQUEST_ID_KEY: &str = "request_id";

// candidates
pub const CANDIDATE_NAME_KEY: &str = "name";
pub const CANDIDATE_PARTY_KEY: &str = "party";

// elections
pub const ELECTION_TITLE_KEY: &str = "title";
pub const CANDIDATE_COUNT_KEY: &str = "candidate_count";
pub const START_TIME_KEY: &str = "start_time";
pub const END_TIME_KEY: &str = "end_time";
pub const ENDED_AT_KEY: &str = "ended_at";
pub const TOTAL_VOTES_KEY: &str = "total_votes";

// voting
pub const VOTER_KEY: &str = "voter";
pub const CANDIDATE_VOTE_COUNT_KEY: &str = "candidate_vote_count";
pub const ELECTION_TOTAL_VOTES_KEY: &str = "election_total_votes";

pub fn new_contract_instantiated_event(commission: &Addr, seeded_voter_ids: u32) -> Event {
    Event::new(ElectionLedgerEventType::ContractInstantiated)
        .add_attribute(ELECTORAL_COMMISSION_KEY, commission)
        .add_attribute(SEEDED_VOTER_IDS_KEY, seeded_voter_ids.to_string())
}

pub fn new_voter_id_added_event(voter_id: &str, newly_added: bool) -> Event {
    Event::new(ElectionLedgerEventType::VoterIdAdded)
        .add_attribute(VOTER_ID_KEY, voter_id)
        .add_attribute(NEWLY_ADDED_KEY, newly_added.to_string())
}

pub fn new_registration_requested_event(request: &RegistrationRequest) -> Event {
    // personal details never leave the contract storage
    Event::new(ElectionLedgerEventType::RegistrationRequested)
        .add_attribute(REQUEST_ID_KEY, request.id.to_string())
        .add_attribute(VOTER_ID_KEY, &request.voter_id)
        .add_attribute(WALLET_KEY, &request.wallet)
}

pub fn new_voter_verified_event(request: &RegistrationRequest) -> Event {
    Event::new(ElectionLedgerEventType::VoterVerified)
        .add_attribute(REQUEST_ID_KEY, request.id.to_string())
        .add_attribute(VOTER_ID_KEY, &request.voter_id)
        .add_attribute(WALLET_KEY, &request.wallet)
}

pub fn new_registration_rejected_event(request: &RegistrationRequest) -> Event {
    Event::new(ElectionLedgerEventType::RegistrationRejected)
        .add_attribute(REQUEST_ID_KEY, request.id.to_string())
        .add_attribute(VOTER_ID_KEY, &request.voter_id)
        .add_attribute(WALLET_KEY, &request.wallet)
}

pub fn new_candidate_added_event(candidate: &Candidate) -> Event {
    Event::new(ElectionLedgerEventType::CandidateAdded)
        .add_attribute(CANDIDATE_ID_KEY, candidate.id.to_string())
        .add_attribute(CANDIDATE_NAME_KEY, &candidate.name)
        .add_attribute(CANDIDATE_PARTY_KEY, &candidate.party)
}

pub fn new_candidate_updated_event(candidate: &Candidate) -> Event {
    Event::new(ElectionLedgerEventType::CandidateUpdated)
        .add_attribute(CANDIDATE_ID_KEY, candidate.id.to_string())
        .add_attribute(CANDIDATE_NAME_KEY, &candidate.name)
        .add_attribute(CANDIDATE_PARTY_KEY, &candidate.party)
}

pub fn new_candidate_deactivated_event(candidate_id: CandidateId) -> Event {
    Event::new(ElectionLedgerEventType::CandidateDeactivated)
        .add_attribute(CANDIDATE_ID_KEY, candidate_id.to_string())
}

pub fn new_candidate_activated_event(candidate_id: CandidateId) -> Event {
    Event::new(ElectionLedgerEventType::CandidateActivated)
        .add_attribute(CANDIDATE_ID_KEY, candidate_id.to_string())
}

pub fn new_election_created_event(election: &Election) -> Event {
    Event::new(ElectionLedgerEventType::ElectionCreated)
        .add_attribute(ELECTION_ID_KEY, election.id.to_string())
        .add_attribute(ELECTION_TITLE_KEY, &election.title)
        .add_attribute(
            CANDIDATE_COUNT_KEY,
            election.candidate_ids.len().to_string(),
        )
}

pub fn new_election_started_event(
    election_id: ElectionId,
    start_time: Timestamp,
    end_time: Timestamp,
) -> Event {
    Event::new(ElectionLedgerEventType::ElectionStarted)
        .add_attribute(ELECTION_ID_KEY, election_id.to_string())
        .add_attribute(START_TIME_KEY, start_time.seconds().to_string())
        .add_attribute(END_TIME_KEY, end_time.seconds().to_string())
}

pub fn new_election_ended_event(election: &Election, ended_at: Timestamp) -> Event {
    Event::new(ElectionLedgerEventType::ElectionEnded)
        .add_attribute(ELECTION_ID_KEY, election.id.to_string())
        .add_attribute(ENDED_AT_KEY, ended_at.seconds().to_string())
        .add_attribute(TOTAL_VOTES_KEY, election.total_votes.to_string())
}

pub fn new_expired_election_closed_event(election: &Election, ended_at: Timestamp) -> Event {
    Event::new(ElectionLedgerEventType::ExpiredElectionClosed)
        .add_attribute(ELECTION_ID_KEY, election.id.to_string())
        .add_attribute(ENDED_AT_KEY, ended_at.seconds().to_string())
        .add_attribute(TOTAL_VOTES_KEY, election.total_votes.to_string())
}

pub fn new_vote_cast_event(
    voter: &Addr,
    election_id: ElectionId,
    candidate: &Candidate,
    election_total_votes: u64,
) -> Event {
    Event::new(ElectionLedgerEventType::VoteCast)
        .add_attribute(VOTER_KEY, voter)
        .add_attribute(ELECTION_ID_KEY, election_id.to_string())
        .add_attribute(CANDIDATE_ID_KEY, candidate.id.to_string())
        .add_attribute(CANDIDATE_VOTE_COUNT_KEY, candidate.vote_count.to_string())
        .add_attribute(ELECTION_TOTAL_VOTES_KEY, election_total_votes.to_string())
}

pub fn new_contract_paused_event(sender: &Addr) -> Event {
    Event::new(ElectionLedgerEventType::ContractPaused).add_attribute(SENDER_KEY, sender)
}

pub fn new_contract_unpaused_event(sender: &Addr) -> Event {
    Event::new(ElectionLedgerEventType::ContractUnpaused).add_attribute(SENDER_KEY, sender)
}
