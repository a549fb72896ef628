// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::ElectoralCommission;
use crate::storage::retrieval_limits;
use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};
use election_ledger_contract_common::constants::storage_keys;
use election_ledger_contract_common::{
    CandidateId, Election, ElectionId, ElectionLedgerContractError,
};

pub struct ElectionStorage {
    pub(crate) election_counter: Item<ElectionId>,
    pub(crate) elections: Map<ElectionId, Election>,

    /// The most recently started election. It is kept after the election ends so that its
    /// results remain the default read.
    pub(crate) current_election: Item<ElectionId>,
}

impl ElectionStorage {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        ElectionStorage {
            election_counter: Item::new(storage_keys::ELECTION_COUNTER),
            elections: Map::new(storage_keys::ELECTIONS),
            current_election: Item::new(storage_keys::CURRENT_ELECTION),
        }
    }

    pub fn counter(&self, storage: &dyn Storage) -> StdResult<ElectionId> {
        Ok(self.election_counter.may_load(storage)?.unwrap_or_default())
    }

    fn next_election_id(&self, storage: &mut dyn Storage) -> StdResult<ElectionId> {
        let id = self.counter(storage)? + 1;
        self.election_counter.save(storage, &id)?;
        Ok(id)
    }

    pub fn load(
        &self,
        storage: &dyn Storage,
        election_id: ElectionId,
    ) -> Result<Election, ElectionLedgerContractError> {
        self.elections
            .may_load(storage, election_id)?
            .ok_or(ElectionLedgerContractError::ElectionNotFound { election_id })
    }

    pub fn may_load_current(&self, storage: &dyn Storage) -> StdResult<Option<Election>> {
        let Some(election_id) = self.current_election.may_load(storage)? else {
            return Ok(None);
        };
        self.elections.may_load(storage, election_id)
    }

    pub(crate) fn insert_new(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        title: String,
        description: String,
        candidate_ids: Vec<CandidateId>,
    ) -> StdResult<Election> {
        let id = self.next_election_id(storage)?;
        let election = Election::new(id, title, description, candidate_ids);
        self.elections.save(storage, id, &election)?;
        Ok(election)
    }

    pub(crate) fn save_with_commission(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        election: &Election,
    ) -> StdResult<()> {
        self.elections.save(storage, election.id, election)
    }

    pub(crate) fn set_current(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        election_id: ElectionId,
    ) -> StdResult<()> {
        self.current_election.save(storage, &election_id)
    }

    /// Adds a single vote to the total of the election.
    pub(crate) fn record_vote(
        &self,
        storage: &mut dyn Storage,
        mut election: Election,
    ) -> StdResult<Election> {
        election.total_votes += 1;
        self.elections.save(storage, election.id, &election)?;
        Ok(election)
    }

    pub fn elections_paged(
        &self,
        storage: &dyn Storage,
        start_after: Option<ElectionId>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Election>> {
        let limit = limit
            .unwrap_or(retrieval_limits::ELECTIONS_DEFAULT_LIMIT)
            .min(retrieval_limits::ELECTIONS_MAX_LIMIT) as usize;

        let start = start_after.map(Bound::exclusive);

        self.elections
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|record| record.map(|(_, election)| election))
            .collect()
    }
}
