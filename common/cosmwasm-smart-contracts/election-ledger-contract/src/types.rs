// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::ElectionLedgerContractError;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use std::fmt::{Display, Formatter};

pub type CandidateId = u32;
pub type ElectionId = u32;
pub type RequestId = u32;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

#[cw_serde]
pub enum VoterIdBinding {
    /// The id has been issued by the Electoral Commission but nobody claimed it yet.
    Available,

    /// The id has been claimed by a pending registration request.
    Reserved { wallet: Addr, request_id: RequestId },

    /// The id belongs to a verified voter. This is terminal.
    Bound { wallet: Addr },
}

#[cw_serde]
pub struct VoterIdEntry {
    pub voter_id: String,
    pub binding: VoterIdBinding,
}

impl VoterIdEntry {
    pub fn new(voter_id: impl Into<String>) -> Self {
        VoterIdEntry {
            voter_id: voter_id.into(),
            binding: VoterIdBinding::Available,
        }
    }

    pub fn is_used(&self) -> bool {
        matches!(self.binding, VoterIdBinding::Bound { .. })
    }

    pub fn bound_wallet(&self) -> Option<&Addr> {
        match &self.binding {
            VoterIdBinding::Available => None,
            VoterIdBinding::Reserved { wallet, .. } | VoterIdBinding::Bound { wallet } => {
                Some(wallet)
            }
        }
    }
}

#[cw_serde]
pub enum RegistrationStatus {
    Pending,
    Verified { verified_at: Timestamp },
    Rejected { rejected_at: Timestamp },
}

impl RegistrationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RegistrationStatus::Pending)
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, RegistrationStatus::Verified { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, RegistrationStatus::Rejected { .. })
    }
}

impl Display for RegistrationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationStatus::Pending => write!(f, "pending"),
            RegistrationStatus::Verified { .. } => write!(f, "verified"),
            RegistrationStatus::Rejected { .. } => write!(f, "rejected"),
        }
    }
}

#[cw_serde]
pub struct RegistrationRequest {
    pub id: RequestId,
    pub voter_id: String,
    pub name: String,
    pub national_id: String,
    pub email: Option<String>,
    pub wallet: Addr,
    pub submitted_at: Timestamp,
    pub status: RegistrationStatus,
}

impl RegistrationRequest {
    /// Moves the request from `Pending` to `Verified`.
    pub fn verify(&mut self, now: Timestamp) -> Result<(), ElectionLedgerContractError> {
        self.ensure_pending()?;
        self.status = RegistrationStatus::Verified { verified_at: now };
        Ok(())
    }

    /// Moves the request from `Pending` to `Rejected`.
    pub fn reject(&mut self, now: Timestamp) -> Result<(), ElectionLedgerContractError> {
        self.ensure_pending()?;
        self.status = RegistrationStatus::Rejected { rejected_at: now };
        Ok(())
    }

    fn ensure_pending(&self) -> Result<(), ElectionLedgerContractError> {
        if !self.status.is_pending() {
            return Err(ElectionLedgerContractError::PendingRegistrationNotFound {
                request_id: self.id,
            });
        }
        Ok(())
    }
}

#[cw_serde]
pub struct Voter {
    pub wallet: Addr,
    pub voter_id: String,
    pub name: String,
    pub national_id: String,
    pub email: Option<String>,
    pub is_verified: bool,

    /// Whether this wallet has ever cast a ballot. Never reverts to `false`.
    pub has_voted: bool,

    /// The election of the most recent ballot cast by this wallet.
    pub voted_election_id: Option<ElectionId>,
}

impl Voter {
    pub fn from_verified_request(request: &RegistrationRequest) -> Self {
        Voter {
            wallet: request.wallet.clone(),
            voter_id: request.voter_id.clone(),
            name: request.name.clone(),
            national_id: request.national_id.clone(),
            email: request.email.clone(),
            is_verified: true,
            has_voted: false,
            voted_election_id: None,
        }
    }

    pub fn record_vote(&mut self, election_id: ElectionId) {
        self.has_voted = true;
        self.voted_election_id = Some(election_id);
    }
}

#[cw_serde]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub image_url: String,

    /// Number of ballots cast for this candidate across all elections.
    pub vote_count: u64,
    pub is_active: bool,
}

#[cw_serde]
pub enum ElectionState {
    Created,
    Active {
        start_time: Timestamp,
        end_time: Timestamp,
    },
    Ended {
        start_time: Timestamp,
        end_time: Timestamp,
        ended_at: Timestamp,
    },
}

/// Phase of an election as observed at a particular point in time.
#[cw_serde]
#[derive(Copy)]
pub enum EffectivePhase {
    Created,
    NotYetOpen,
    Open,
    /// The voting window has elapsed, but the election has not been explicitly ended.
    Expired,
    Ended,
}

impl EffectivePhase {
    pub fn is_open(&self) -> bool {
        matches!(self, EffectivePhase::Open)
    }
}

impl Display for EffectivePhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectivePhase::Created => write!(f, "created"),
            EffectivePhase::NotYetOpen => write!(f, "not yet open"),
            EffectivePhase::Open => write!(f, "open"),
            EffectivePhase::Expired => write!(f, "expired"),
            EffectivePhase::Ended => write!(f, "ended"),
        }
    }
}

#[cw_serde]
pub struct Election {
    pub id: ElectionId,
    pub title: String,
    pub description: String,
    pub candidate_ids: Vec<CandidateId>,
    pub state: ElectionState,
    pub total_votes: u64,
}

impl Election {
    pub fn new(
        id: ElectionId,
        title: String,
        description: String,
        candidate_ids: Vec<CandidateId>,
    ) -> Self {
        Election {
            id,
            title,
            description,
            candidate_ids,
            state: ElectionState::Created,
            total_votes: 0,
        }
    }

    /// The single source of truth for deciding what phase the election is in.
    pub fn effective_phase(&self, now: Timestamp) -> EffectivePhase {
        match self.state {
            ElectionState::Created => EffectivePhase::Created,
            ElectionState::Active {
                start_time,
                end_time,
            } => {
                if now < start_time {
                    EffectivePhase::NotYetOpen
                } else if now <= end_time {
                    EffectivePhase::Open
                } else {
                    EffectivePhase::Expired
                }
            }
            ElectionState::Ended { .. } => EffectivePhase::Ended,
        }
    }

    pub fn contains_candidate(&self, candidate_id: CandidateId) -> bool {
        self.candidate_ids.contains(&candidate_id)
    }

    /// Opens the voting window `[now, now + duration_secs]`.
    pub fn start(
        &mut self,
        now: Timestamp,
        duration_secs: u64,
    ) -> Result<(), ElectionLedgerContractError> {
        let phase = self.effective_phase(now);
        if phase != EffectivePhase::Created {
            return Err(ElectionLedgerContractError::ElectionNotStartable {
                election_id: self.id,
                phase,
            });
        }

        if duration_secs == 0 {
            return Err(ElectionLedgerContractError::InvalidElectionDuration { duration_secs });
        }

        let end_nanos = duration_secs
            .checked_mul(NANOS_PER_SECOND)
            .and_then(|duration| now.nanos().checked_add(duration))
            .ok_or(ElectionLedgerContractError::InvalidElectionDuration { duration_secs })?;

        self.state = ElectionState::Active {
            start_time: now,
            end_time: Timestamp::from_nanos(end_nanos),
        };
        Ok(())
    }

    /// Explicitly closes an election that is either still open or already expired.
    pub fn end(&mut self, now: Timestamp) -> Result<(), ElectionLedgerContractError> {
        match self.state {
            ElectionState::Active {
                start_time,
                end_time,
            } => {
                self.state = ElectionState::Ended {
                    start_time,
                    end_time,
                    ended_at: now,
                };
                Ok(())
            }
            _ => Err(ElectionLedgerContractError::ElectionNotEndable {
                election_id: self.id,
                phase: self.effective_phase(now),
            }),
        }
    }

    /// Flips an expired election into `Ended`, recording the scheduled end as the closing time.
    /// Returns whether anything has changed.
    pub fn close_expired(&mut self, now: Timestamp) -> bool {
        if self.effective_phase(now) != EffectivePhase::Expired {
            return false;
        }
        if let ElectionState::Active {
            start_time,
            end_time,
        } = self.state
        {
            self.state = ElectionState::Ended {
                start_time,
                end_time,
                ended_at: end_time,
            };
            return true;
        }
        false
    }
}

#[cw_serde]
pub struct Ballot {
    pub voter: Addr,
    pub election_id: ElectionId,
    pub candidate_id: CandidateId,
    pub cast_at: Timestamp,
}
