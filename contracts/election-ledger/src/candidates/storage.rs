// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::ElectoralCommission;
use crate::storage::retrieval_limits;
use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};
use election_ledger_contract_common::constants::storage_keys;
use election_ledger_contract_common::{Candidate, CandidateId, ElectionLedgerContractError};

pub struct CandidateStorage {
    pub(crate) candidate_counter: Item<CandidateId>,
    pub(crate) candidates: Map<CandidateId, Candidate>,
}

impl CandidateStorage {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        CandidateStorage {
            candidate_counter: Item::new(storage_keys::CANDIDATE_COUNTER),
            candidates: Map::new(storage_keys::CANDIDATES),
        }
    }

    pub fn counter(&self, storage: &dyn Storage) -> StdResult<CandidateId> {
        Ok(self.candidate_counter.may_load(storage)?.unwrap_or_default())
    }

    fn next_candidate_id(&self, storage: &mut dyn Storage) -> StdResult<CandidateId> {
        let id = self.counter(storage)? + 1;
        self.candidate_counter.save(storage, &id)?;
        Ok(id)
    }

    pub fn load(
        &self,
        storage: &dyn Storage,
        candidate_id: CandidateId,
    ) -> Result<Candidate, ElectionLedgerContractError> {
        self.candidates
            .may_load(storage, candidate_id)?
            .ok_or(ElectionLedgerContractError::CandidateNotFound { candidate_id })
    }

    pub(crate) fn insert_new(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        name: String,
        party: String,
        image_url: String,
    ) -> StdResult<Candidate> {
        let candidate = Candidate {
            id: self.next_candidate_id(storage)?,
            name,
            party,
            image_url,
            vote_count: 0,
            is_active: true,
        };
        self.candidates.save(storage, candidate.id, &candidate)?;
        Ok(candidate)
    }

    pub(crate) fn save_with_commission(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        candidate: &Candidate,
    ) -> StdResult<()> {
        self.candidates.save(storage, candidate.id, candidate)
    }

    /// Adds a single vote to the lifetime tally of the candidate.
    pub(crate) fn record_vote(
        &self,
        storage: &mut dyn Storage,
        mut candidate: Candidate,
    ) -> StdResult<Candidate> {
        candidate.vote_count += 1;
        self.candidates.save(storage, candidate.id, &candidate)?;
        Ok(candidate)
    }

    pub fn candidates_paged(
        &self,
        storage: &dyn Storage,
        start_after: Option<CandidateId>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Candidate>> {
        let limit = limit
            .unwrap_or(retrieval_limits::CANDIDATES_DEFAULT_LIMIT)
            .min(retrieval_limits::CANDIDATES_MAX_LIMIT) as usize;

        let start = start_after.map(Bound::exclusive);

        self.candidates
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|record| record.map(|(_, candidate)| candidate))
            .collect()
    }
}
