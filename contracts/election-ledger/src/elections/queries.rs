// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::{Deps, Env};
use election_ledger_contract_common::{
    CounterResponse, CurrentElectionResponse, Election, ElectionDetails, ElectionId,
    ElectionLedgerContractError, ElectionsPagedResponse,
};

fn with_phase(election: Election, env: &Env) -> ElectionDetails {
    ElectionDetails {
        phase: election.effective_phase(env.block.time),
        election,
    }
}

pub fn query_election(
    deps: Deps,
    env: Env,
    election_id: ElectionId,
) -> Result<ElectionDetails, ElectionLedgerContractError> {
    let election = ELECTION_LEDGER_STORAGE
        .elections
        .load(deps.storage, election_id)?;
    Ok(with_phase(election, &env))
}

pub fn query_current_election(
    deps: Deps,
    env: Env,
) -> Result<CurrentElectionResponse, ElectionLedgerContractError> {
    let election = ELECTION_LEDGER_STORAGE
        .elections
        .may_load_current(deps.storage)?
        .map(|election| with_phase(election, &env));
    Ok(CurrentElectionResponse { election })
}

pub fn query_election_counter(deps: Deps) -> Result<CounterResponse, ElectionLedgerContractError> {
    Ok(CounterResponse {
        value: ELECTION_LEDGER_STORAGE.elections.counter(deps.storage)?,
    })
}

pub fn query_elections_paged(
    deps: Deps,
    env: Env,
    start_after: Option<ElectionId>,
    limit: Option<u32>,
) -> Result<ElectionsPagedResponse, ElectionLedgerContractError> {
    let elections = ELECTION_LEDGER_STORAGE
        .elections
        .elections_paged(deps.storage, start_after, limit)?
        .into_iter()
        .map(|election| with_phase(election, &env))
        .collect::<Vec<_>>();

    let start_next_after = elections.last().map(|details| details.election.id);

    Ok(ElectionsPagedResponse {
        elections,
        start_next_after,
    })
}
