// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::ensure_electoral_commission;
use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, Storage};
use election_ledger_contract_common::events::{
    new_election_created_event, new_election_ended_event, new_election_started_event,
    new_expired_election_closed_event,
};
use election_ledger_contract_common::{
    CandidateId, EffectivePhase, ElectionId, ElectionLedgerContractError, ElectionState,
};
use std::collections::HashSet;

fn ensure_valid_candidate_set(
    storage: &dyn Storage,
    candidate_ids: &[CandidateId],
) -> Result<(), ElectionLedgerContractError> {
    if candidate_ids.is_empty() {
        return Err(ElectionLedgerContractError::EmptyCandidateSet);
    }

    let mut seen = HashSet::with_capacity(candidate_ids.len());
    for &candidate_id in candidate_ids {
        if !seen.insert(candidate_id) {
            return Err(ElectionLedgerContractError::DuplicateElectionCandidate { candidate_id });
        }

        let eligible = ELECTION_LEDGER_STORAGE
            .candidates
            .candidates
            .may_load(storage, candidate_id)?
            .map(|candidate| candidate.is_active)
            .unwrap_or_default();
        if !eligible {
            return Err(ElectionLedgerContractError::IneligibleElectionCandidate { candidate_id });
        }
    }
    Ok(())
}

pub fn try_create_election(
    deps: DepsMut<'_>,
    info: MessageInfo,
    title: String,
    description: String,
    candidate_ids: Vec<CandidateId>,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;

    let title = title.trim();
    if title.is_empty() {
        return Err(ElectionLedgerContractError::empty_field("title"));
    }
    ensure_valid_candidate_set(deps.storage, &candidate_ids)?;

    let election = ELECTION_LEDGER_STORAGE.elections.insert_new(
        deps.storage,
        &commission,
        title.to_string(),
        description.trim().to_string(),
        candidate_ids,
    )?;

    Ok(Response::new()
        .add_event(new_election_created_event(&election))
        .set_data(to_json_binary(&election.id)?))
}

pub fn try_start_election(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    election_id: ElectionId,
    duration_secs: u64,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;
    let now = env.block.time;

    let elections = &ELECTION_LEDGER_STORAGE.elections;
    let mut election = elections.load(deps.storage, election_id)?;
    election.start(now, duration_secs)?;

    // at most a single election is allowed to be active at any given time
    let mut closed_election = None;
    if let Some(mut current) = elections.may_load_current(deps.storage)? {
        match current.effective_phase(now) {
            EffectivePhase::Open | EffectivePhase::NotYetOpen => {
                return Err(ElectionLedgerContractError::ActiveElectionConflict {
                    active_election_id: current.id,
                })
            }
            EffectivePhase::Expired => {
                current.close_expired(now);
                closed_election = Some(current);
            }
            EffectivePhase::Created | EffectivePhase::Ended => {}
        }
    }

    let mut response = Response::new();
    if let Some(closed) = closed_election {
        elections.save_with_commission(deps.storage, &commission, &closed)?;
        if let ElectionState::Ended { ended_at, .. } = closed.state {
            response = response.add_event(new_expired_election_closed_event(&closed, ended_at));
        }
    }

    elections.save_with_commission(deps.storage, &commission, &election)?;
    elections.set_current(deps.storage, &commission, election.id)?;

    if let ElectionState::Active {
        start_time,
        end_time,
    } = election.state
    {
        response = response.add_event(new_election_started_event(
            election.id,
            start_time,
            end_time,
        ));
    }

    Ok(response)
}

pub fn try_end_election(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    election_id: ElectionId,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;
    let now = env.block.time;

    let elections = &ELECTION_LEDGER_STORAGE.elections;
    let mut election = elections.load(deps.storage, election_id)?;
    election.end(now)?;
    elections.save_with_commission(deps.storage, &commission, &election)?;

    Ok(Response::new().add_event(new_election_ended_event(&election, now)))
}
