// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::ensure_not_paused;
use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};
use election_ledger_contract_common::events::new_vote_cast_event;
use election_ledger_contract_common::{Ballot, CandidateId, ElectionLedgerContractError};

pub fn try_vote(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    candidate_id: CandidateId,
) -> Result<Response, ElectionLedgerContractError> {
    ensure_not_paused(deps.storage)?;

    let storage = &ELECTION_LEDGER_STORAGE;
    let now = env.block.time;

    let mut voter = storage
        .registrations
        .load_verified_voter(deps.storage, &info.sender)?;

    let current = storage.elections.may_load_current(deps.storage)?;
    if let Some(election) = &current {
        if storage
            .voting
            .has_voted(deps.storage, election.id, &info.sender)
        {
            return Err(ElectionLedgerContractError::AlreadyVoted {
                election_id: election.id,
            });
        }
    }

    let election = current.ok_or(ElectionLedgerContractError::NoCurrentElection)?;
    let phase = election.effective_phase(now);
    if !phase.is_open() {
        return Err(ElectionLedgerContractError::ElectionNotOpen {
            election_id: election.id,
            phase,
        });
    }

    if !election.contains_candidate(candidate_id) {
        return Err(ElectionLedgerContractError::CandidateNotInElection {
            candidate_id,
            election_id: election.id,
        });
    }
    let candidate = storage.candidates.load(deps.storage, candidate_id)?;
    if !candidate.is_active {
        return Err(ElectionLedgerContractError::CandidateNotActive { candidate_id });
    }

    // all checks passed, apply every effect of the vote
    let ballot = Ballot {
        voter: info.sender.clone(),
        election_id: election.id,
        candidate_id,
        cast_at: now,
    };
    let candidate = storage.candidates.record_vote(deps.storage, candidate)?;
    storage.voting.record_ballot(deps.storage, &ballot)?;
    let election = storage.elections.record_vote(deps.storage, election)?;
    voter.record_vote(election.id);
    storage.registrations.save_voter(deps.storage, &voter)?;

    Ok(Response::new().add_event(new_vote_cast_event(
        &info.sender,
        election.id,
        &candidate,
        election.total_votes,
    )))
}
