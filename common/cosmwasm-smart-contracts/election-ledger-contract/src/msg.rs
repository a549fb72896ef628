// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::types::{CandidateId, ElectionId, RequestId};
use cosmwasm_schema::cw_serde;

#[cfg(feature = "schema")]
use crate::response::{
    BallotResponse, CandidatesPagedResponse, ConfigResponse, CounterResponse,
    CurrentElectionResponse, ElectionDetails, ElectionResultsResponse, ElectionsPagedResponse,
    HasRegistrationRequestResponse, PausedResponse, PendingRegistrationsPagedResponse,
    VoterIdAvailabilityResponse, VoterIdEntryResponse, VoterIdUsedResponse,
    VoterIdValidityResponse, VoterResponse, VoterStatsResponse,
};
#[cfg(feature = "schema")]
use crate::types::{Candidate, RegistrationRequest};

#[cw_serde]
#[derive(Default)]
pub struct InstantiateMsg {
    /// Voter ids issued on top of the default `VOTER001` to `VOTER020` range.
    #[serde(default)]
    pub additional_voter_ids: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Issue a new voter id that citizens can register with
    AddValidVoterId { voter_id: String },

    /// Request for the sender's wallet to be registered under the provided voter id
    RequestRegistration {
        voter_id: String,
        name: String,
        national_id: String,
        email: Option<String>,
    },

    /// Approve a pending registration request and bind its voter id to the requesting wallet
    VerifyVoter { request_id: RequestId },

    /// Decline a pending registration request and release its voter id
    RejectRegistration { request_id: RequestId },

    AddCandidate {
        name: String,
        party: String,
        image_url: String,
    },

    UpdateCandidate {
        candidate_id: CandidateId,
        name: String,
        party: String,
        image_url: String,
    },

    DeactivateCandidate { candidate_id: CandidateId },

    ActivateCandidate { candidate_id: CandidateId },

    CreateElection {
        title: String,
        description: String,
        candidate_ids: Vec<CandidateId>,
    },

    /// Open the voting window of a created election for the specified number of seconds
    StartElection {
        election_id: ElectionId,
        duration_secs: u64,
    },

    EndElection { election_id: ElectionId },

    /// Cast the sender's ballot in the current election
    Vote { candidate_id: CandidateId },

    /// Suspend voting and registration
    Pause {},

    Unpause {},
}

#[cw_serde]
#[cfg_attr(feature = "schema", derive(cosmwasm_schema::QueryResponses))]
pub enum QueryMsg {
    #[cfg_attr(feature = "schema", returns(cw_controllers::AdminResponse))]
    ElectoralCommission {},

    #[cfg_attr(feature = "schema", returns(PausedResponse))]
    Paused {},

    #[cfg_attr(feature = "schema", returns(ConfigResponse))]
    Config {},

    /// Returns whether the provided voter id has been issued by the Electoral Commission
    #[cfg_attr(feature = "schema", returns(VoterIdValidityResponse))]
    VoterIdValidity { voter_id: String },

    /// Returns whether the provided voter id has already been bound to a verified wallet
    #[cfg_attr(feature = "schema", returns(VoterIdUsedResponse))]
    VoterIdUsed { voter_id: String },

    #[cfg_attr(feature = "schema", returns(VoterIdAvailabilityResponse))]
    CheckVoterIdAvailability { voter_id: String },

    #[cfg_attr(feature = "schema", returns(VoterIdEntryResponse))]
    VoterIdEntry { voter_id: String },

    #[cfg_attr(feature = "schema", returns(VoterResponse))]
    Voter { wallet: String },

    #[cfg_attr(feature = "schema", returns(RegistrationRequest))]
    RegistrationRequest { request_id: RequestId },

    /// Returns whether the wallet has a pending or an approved registration request
    #[cfg_attr(feature = "schema", returns(HasRegistrationRequestResponse))]
    HasRegistrationRequest { wallet: String },

    /// Returns (paged) registration requests awaiting a decision, in submission order
    #[cfg_attr(feature = "schema", returns(PendingRegistrationsPagedResponse))]
    PendingRegistrations {
        start_after: Option<RequestId>,
        limit: Option<u32>,
    },

    #[cfg_attr(feature = "schema", returns(Candidate))]
    Candidate { candidate_id: CandidateId },

    #[cfg_attr(feature = "schema", returns(CandidatesPagedResponse))]
    CandidatesPaged {
        start_after: Option<CandidateId>,
        limit: Option<u32>,
    },

    /// Returns the id of the most recently added candidate
    #[cfg_attr(feature = "schema", returns(CounterResponse))]
    CandidateCounter {},

    #[cfg_attr(feature = "schema", returns(ElectionDetails))]
    Election { election_id: ElectionId },

    #[cfg_attr(feature = "schema", returns(ElectionsPagedResponse))]
    ElectionsPaged {
        start_after: Option<ElectionId>,
        limit: Option<u32>,
    },

    /// Returns the most recently started election, if any
    #[cfg_attr(feature = "schema", returns(CurrentElectionResponse))]
    CurrentElection {},

    /// Returns the id of the most recently created election
    #[cfg_attr(feature = "schema", returns(CounterResponse))]
    ElectionCounter {},

    #[cfg_attr(feature = "schema", returns(ElectionResultsResponse))]
    ElectionResults { election_id: ElectionId },

    #[cfg_attr(feature = "schema", returns(VoterStatsResponse))]
    VoterStats {},

    /// Returns the ballot cast by the wallet in the specified election
    #[cfg_attr(feature = "schema", returns(BallotResponse))]
    Ballot {
        election_id: ElectionId,
        wallet: String,
    },
}

#[cw_serde]
pub struct MigrateMsg {
    //
}
