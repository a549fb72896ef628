// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::{Deps, Env};
use election_ledger_contract_common::{
    BallotResponse, CandidateResult, ElectionId, ElectionLedgerContractError,
    ElectionResultsResponse, VoterStatsResponse,
};

pub fn query_election_results(
    deps: Deps,
    env: Env,
    election_id: ElectionId,
) -> Result<ElectionResultsResponse, ElectionLedgerContractError> {
    let storage = &ELECTION_LEDGER_STORAGE;
    let election = storage.elections.load(deps.storage, election_id)?;

    let results = election
        .candidate_ids
        .iter()
        .map(|&candidate_id| {
            Ok(CandidateResult {
                candidate: storage.candidates.load(deps.storage, candidate_id)?,
                election_votes: storage.voting.tally(deps.storage, election_id, candidate_id)?,
            })
        })
        .collect::<Result<Vec<_>, ElectionLedgerContractError>>()?;

    Ok(ElectionResultsResponse {
        election_id,
        phase: election.effective_phase(env.block.time),
        total_votes: election.total_votes,
        results,
    })
}

pub fn query_voter_stats(deps: Deps) -> Result<VoterStatsResponse, ElectionLedgerContractError> {
    let mut stats = VoterStatsResponse {
        total_voters: 0,
        verified_voters: 0,
        voted_count: 0,
    };

    for voter in ELECTION_LEDGER_STORAGE
        .registrations
        .all_voters(deps.storage)
    {
        let voter = voter?;
        stats.total_voters += 1;
        if voter.is_verified {
            stats.verified_voters += 1;
        }
        if voter.has_voted {
            stats.voted_count += 1;
        }
    }

    Ok(stats)
}

pub fn query_ballot(
    deps: Deps,
    election_id: ElectionId,
    wallet: String,
) -> Result<BallotResponse, ElectionLedgerContractError> {
    let wallet = deps.api.addr_validate(&wallet)?;
    let ballot = ELECTION_LEDGER_STORAGE
        .voting
        .may_load_ballot(deps.storage, election_id, &wallet)?;

    Ok(BallotResponse {
        election_id,
        wallet,
        ballot,
    })
}
