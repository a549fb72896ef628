// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::types::{
    Ballot, Candidate, CandidateId, EffectivePhase, Election, ElectionId, RegistrationRequest,
    RequestId, Voter, VoterIdEntry,
};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};

#[cw_serde]
pub struct ContractConfig {
    pub instantiated_at: Timestamp,

    /// Number of voter ids issued during instantiation.
    pub seeded_voter_ids: u32,
}

pub type ConfigResponse = ContractConfig;

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct VoterIdValidityResponse {
    pub voter_id: String,
    pub is_valid: bool,
}

#[cw_serde]
pub struct VoterIdUsedResponse {
    pub voter_id: String,
    pub is_used: bool,
}

#[cw_serde]
pub struct VoterIdAvailabilityResponse {
    pub is_valid: bool,
    pub is_available: bool,
    pub message: String,
}

#[cw_serde]
pub struct VoterIdEntryResponse {
    pub voter_id: String,
    pub entry: Option<VoterIdEntry>,
}

#[cw_serde]
pub struct VoterResponse {
    pub wallet: Addr,
    pub voter: Option<Voter>,
}

#[cw_serde]
pub struct HasRegistrationRequestResponse {
    pub wallet: Addr,
    pub has_request: bool,
}

#[cw_serde]
pub struct PendingRegistrationsPagedResponse {
    pub requests: Vec<RegistrationRequest>,
    pub start_next_after: Option<RequestId>,
}

#[cw_serde]
pub struct CandidatesPagedResponse {
    pub candidates: Vec<Candidate>,
    pub start_next_after: Option<CandidateId>,
}

#[cw_serde]
pub struct CounterResponse {
    /// Id of the most recently created entity, `0` if none exists yet.
    pub value: u32,
}

#[cw_serde]
pub struct ElectionDetails {
    pub election: Election,
    pub phase: EffectivePhase,
}

#[cw_serde]
pub struct CurrentElectionResponse {
    pub election: Option<ElectionDetails>,
}

#[cw_serde]
pub struct ElectionsPagedResponse {
    pub elections: Vec<ElectionDetails>,
    pub start_next_after: Option<ElectionId>,
}

#[cw_serde]
pub struct CandidateResult {
    pub candidate: Candidate,

    /// Votes received in this particular election.
    pub election_votes: u64,
}

#[cw_serde]
pub struct ElectionResultsResponse {
    pub election_id: ElectionId,
    pub phase: EffectivePhase,
    pub total_votes: u64,
    pub results: Vec<CandidateResult>,
}

#[cw_serde]
pub struct VoterStatsResponse {
    pub total_voters: u32,
    pub verified_voters: u32,
    pub voted_count: u32,
}

#[cw_serde]
pub struct BallotResponse {
    pub election_id: ElectionId,
    pub wallet: Addr,
    pub ballot: Option<Ballot>,
}
