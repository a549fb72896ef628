// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::constants::messages;
use crate::types::{CandidateId, EffectivePhase, ElectionId, RequestId};
use cosmwasm_std::{Addr, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ElectionLedgerContractError {
    #[error(transparent)]
    StdErr(#[from] StdError),

    #[error("Only Electoral Commission can perform this action")]
    NotElectoralCommission { sender: Addr },

    #[error("Only verified voters can perform this action")]
    NotVerifiedVoter { sender: Addr },

    #[error("{}", messages::VOTER_ID_NOT_FOUND)]
    UnknownVoterId { voter_id: String },

    #[error("the '{field}' field must not be empty")]
    EmptyField { field: String },

    #[error("an election requires at least one candidate")]
    EmptyCandidateSet,

    #[error("candidate {candidate_id} has been provided more than once")]
    DuplicateElectionCandidate { candidate_id: CandidateId },

    #[error("candidate {candidate_id} does not exist or is not active")]
    IneligibleElectionCandidate { candidate_id: CandidateId },

    #[error("{duration_secs}s is not a valid election duration")]
    InvalidElectionDuration { duration_secs: u64 },

    #[error("Registration request already exists")]
    RegistrationRequestExists { wallet: Addr },

    #[error("Voter ID already linked to another wallet")]
    VoterIdAlreadyLinked { voter_id: String },

    #[error("{}", messages::VOTER_ID_ALREADY_REGISTERED)]
    VoterIdAlreadyRegistered { voter_id: String },

    #[error("registration request {request_id} does not exist")]
    RegistrationRequestNotFound { request_id: RequestId },

    #[error("there is no pending registration request with id {request_id}")]
    PendingRegistrationNotFound { request_id: RequestId },

    #[error("candidate {candidate_id} does not exist")]
    CandidateNotFound { candidate_id: CandidateId },

    #[error("election {election_id} does not exist")]
    ElectionNotFound { election_id: ElectionId },

    #[error("Already voted in this election")]
    AlreadyVoted { election_id: ElectionId },

    #[error("there is no current election")]
    NoCurrentElection,

    #[error("election {election_id} is not open for voting (phase: {phase})")]
    ElectionNotOpen {
        election_id: ElectionId,
        phase: EffectivePhase,
    },

    #[error("election {election_id} can't be started while in the '{phase}' phase")]
    ElectionNotStartable {
        election_id: ElectionId,
        phase: EffectivePhase,
    },

    #[error("election {election_id} can't be ended while in the '{phase}' phase")]
    ElectionNotEndable {
        election_id: ElectionId,
        phase: EffectivePhase,
    },

    #[error("election {active_election_id} is still active")]
    ActiveElectionConflict { active_election_id: ElectionId },

    #[error("candidate {candidate_id} is not running in election {election_id}")]
    CandidateNotInElection {
        candidate_id: CandidateId,
        election_id: ElectionId,
    },

    #[error("Candidate is not active")]
    CandidateNotActive { candidate_id: CandidateId },

    #[error("Pausable: paused")]
    Paused,

    #[error("Pausable: not paused")]
    NotPaused,
}

impl ElectionLedgerContractError {
    /// Stable, machine-readable reason of the failure.
    /// Clients should branch on this value rather than on the display message.
    pub fn reason(&self) -> &'static str {
        use ElectionLedgerContractError::*;

        match self {
            StdErr(_) => "std_error",
            NotElectoralCommission { .. } | NotVerifiedVoter { .. } => "access_denied",
            UnknownVoterId { .. }
            | EmptyField { .. }
            | EmptyCandidateSet
            | DuplicateElectionCandidate { .. }
            | IneligibleElectionCandidate { .. }
            | InvalidElectionDuration { .. } => "invalid_input",
            RegistrationRequestExists { .. } => "already_exists",
            VoterIdAlreadyLinked { .. } => "already_bound",
            VoterIdAlreadyRegistered { .. } => "already_registered",
            RegistrationRequestNotFound { .. }
            | PendingRegistrationNotFound { .. }
            | CandidateNotFound { .. }
            | ElectionNotFound { .. } => "not_found",
            AlreadyVoted { .. } => "already_voted",
            NoCurrentElection
            | ElectionNotOpen { .. }
            | ElectionNotStartable { .. }
            | ElectionNotEndable { .. }
            | NotPaused => "invalid_state",
            ActiveElectionConflict { .. } => "conflict",
            CandidateNotInElection { .. } | CandidateNotActive { .. } => "invalid_target",
            Paused => "paused",
        }
    }

    pub fn empty_field(field: impl Into<String>) -> Self {
        ElectionLedgerContractError::EmptyField {
            field: field.into(),
        }
    }
}
