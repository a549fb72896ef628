// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;
use election_ledger_contract_common::constants::storage_keys;
use election_ledger_contract_common::{Ballot, CandidateId, ElectionId};

pub struct VotingStorage {
    /// Audit record of every vote, keyed by `(election, voter)`.
    pub(crate) ballots: Map<(ElectionId, Addr), Ballot>,

    /// Per-election tallies, keyed by `(election, candidate)`.
    pub(crate) tallies: Map<(ElectionId, CandidateId), u64>,
}

impl VotingStorage {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        VotingStorage {
            ballots: Map::new(storage_keys::BALLOTS),
            tallies: Map::new(storage_keys::ELECTION_TALLIES),
        }
    }

    pub fn has_voted(
        &self,
        storage: &dyn Storage,
        election_id: ElectionId,
        voter: &Addr,
    ) -> bool {
        self.ballots.has(storage, (election_id, voter.clone()))
    }

    pub fn may_load_ballot(
        &self,
        storage: &dyn Storage,
        election_id: ElectionId,
        voter: &Addr,
    ) -> StdResult<Option<Ballot>> {
        self.ballots.may_load(storage, (election_id, voter.clone()))
    }

    pub fn tally(
        &self,
        storage: &dyn Storage,
        election_id: ElectionId,
        candidate_id: CandidateId,
    ) -> StdResult<u64> {
        Ok(self
            .tallies
            .may_load(storage, (election_id, candidate_id))?
            .unwrap_or_default())
    }

    /// Records the ballot and adds it to the election tally. Returns the updated tally.
    pub(crate) fn record_ballot(&self, storage: &mut dyn Storage, ballot: &Ballot) -> StdResult<u64> {
        let tally = self.tally(storage, ballot.election_id, ballot.candidate_id)? + 1;
        self.tallies
            .save(storage, (ballot.election_id, ballot.candidate_id), &tally)?;
        self.ballots
            .save(storage, (ballot.election_id, ballot.voter.clone()), ballot)?;
        Ok(tally)
    }
}
