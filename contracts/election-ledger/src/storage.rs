// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::candidates::storage::CandidateStorage;
use crate::elections::storage::ElectionStorage;
use crate::guard::ElectoralCommission;
use crate::identity::storage::VoterIdRegistry;
use crate::registration::storage::RegistrationStorage;
use crate::voting::storage::VotingStorage;
use cosmwasm_std::{Addr, DepsMut, Env, StdResult, Storage};
use cw_controllers::Admin;
use cw_storage_plus::Item;
use election_ledger_contract_common::constants::{default_voter_ids, storage_keys};
use election_ledger_contract_common::{ContractConfig, ElectionLedgerContractError};

pub const ELECTION_LEDGER_STORAGE: ElectionLedgerStorage = ElectionLedgerStorage::new();

pub mod retrieval_limits {
    pub const PENDING_REGISTRATIONS_DEFAULT_LIMIT: u32 = 50;
    pub const PENDING_REGISTRATIONS_MAX_LIMIT: u32 = 100;

    pub const CANDIDATES_DEFAULT_LIMIT: u32 = 50;
    pub const CANDIDATES_MAX_LIMIT: u32 = 100;

    pub const ELECTIONS_DEFAULT_LIMIT: u32 = 25;
    pub const ELECTIONS_MAX_LIMIT: u32 = 50;
}

pub struct ElectionLedgerStorage {
    /// The Electoral Commission. Set once during instantiation and never changed.
    pub(crate) electoral_commission: Admin,
    pub(crate) paused: Item<bool>,
    pub(crate) config: Item<ContractConfig>,

    pub(crate) identity: VoterIdRegistry,
    pub(crate) registrations: RegistrationStorage,
    pub(crate) candidates: CandidateStorage,
    pub(crate) elections: ElectionStorage,
    pub(crate) voting: VotingStorage,
}

impl ElectionLedgerStorage {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        ElectionLedgerStorage {
            electoral_commission: Admin::new(storage_keys::ELECTORAL_COMMISSION),
            paused: Item::new(storage_keys::PAUSED),
            config: Item::new(storage_keys::CONTRACT_CONFIG),
            identity: VoterIdRegistry::new(),
            registrations: RegistrationStorage::new(),
            candidates: CandidateStorage::new(),
            elections: ElectionStorage::new(),
            voting: VotingStorage::new(),
        }
    }

    /// Sets up a fresh contract: the commission, the pause flag and the initial voter ids.
    /// Returns the number of issued voter ids.
    pub fn initialise(
        &self,
        mut deps: DepsMut,
        env: Env,
        electoral_commission: Addr,
        additional_voter_ids: Vec<String>,
    ) -> Result<u32, ElectionLedgerContractError> {
        self.electoral_commission
            .set(deps.branch(), Some(electoral_commission))?;
        self.paused.save(deps.storage, &false)?;

        let seeded_voter_ids = self.identity.seed(
            deps.storage,
            default_voter_ids().chain(additional_voter_ids),
        )?;

        self.config.save(
            deps.storage,
            &ContractConfig {
                instantiated_at: env.block.time,
                seeded_voter_ids,
            },
        )?;

        Ok(seeded_voter_ids)
    }

    pub(crate) fn set_paused(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        paused: bool,
    ) -> StdResult<()> {
        self.paused.save(storage, &paused)
    }
}
