// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::Deps;
use election_ledger_contract_common::{
    Candidate, CandidateId, CandidatesPagedResponse, CounterResponse, ElectionLedgerContractError,
};

pub fn query_candidate(
    deps: Deps,
    candidate_id: CandidateId,
) -> Result<Candidate, ElectionLedgerContractError> {
    ELECTION_LEDGER_STORAGE
        .candidates
        .load(deps.storage, candidate_id)
}

pub fn query_candidates_paged(
    deps: Deps,
    start_after: Option<CandidateId>,
    limit: Option<u32>,
) -> Result<CandidatesPagedResponse, ElectionLedgerContractError> {
    let candidates = ELECTION_LEDGER_STORAGE
        .candidates
        .candidates_paged(deps.storage, start_after, limit)?;

    let start_next_after = candidates.last().map(|candidate| candidate.id);

    Ok(CandidatesPagedResponse {
        candidates,
        start_next_after,
    })
}

pub fn query_candidate_counter(deps: Deps) -> Result<CounterResponse, ElectionLedgerContractError> {
    Ok(CounterResponse {
        value: ELECTION_LEDGER_STORAGE.candidates.counter(deps.storage)?,
    })
}
