// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::ElectoralCommission;
use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;
use election_ledger_contract_common::constants::storage_keys;
use election_ledger_contract_common::{
    ElectionLedgerContractError, RequestId, VoterIdBinding, VoterIdEntry,
};

/// Voter ids issued by the Electoral Commission together with their wallet bindings.
/// Entries are never removed.
pub struct VoterIdRegistry {
    pub(crate) entries: Map<String, VoterIdEntry>,
}

impl VoterIdRegistry {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        VoterIdRegistry {
            entries: Map::new(storage_keys::VOTER_IDS),
        }
    }

    // ids are stored trimmed, lookups are normalised the same way
    fn key(voter_id: &str) -> String {
        voter_id.trim().to_string()
    }

    pub fn is_valid(&self, storage: &dyn Storage, voter_id: &str) -> StdResult<bool> {
        Ok(self.entries.has(storage, Self::key(voter_id)))
    }

    pub fn is_used(&self, storage: &dyn Storage, voter_id: &str) -> StdResult<bool> {
        Ok(self
            .entries
            .may_load(storage, Self::key(voter_id))?
            .map(|entry| entry.is_used())
            .unwrap_or_default())
    }

    pub fn may_load(&self, storage: &dyn Storage, voter_id: &str) -> StdResult<Option<VoterIdEntry>> {
        self.entries.may_load(storage, Self::key(voter_id))
    }

    /// Loads the entry, failing if the id has never been issued.
    pub fn load_valid(
        &self,
        storage: &dyn Storage,
        voter_id: &str,
    ) -> Result<VoterIdEntry, ElectionLedgerContractError> {
        self.may_load(storage, voter_id)?
            .ok_or_else(|| ElectionLedgerContractError::UnknownVoterId {
                voter_id: voter_id.to_string(),
            })
    }

    /// Inserts the id unless it already exists. Returns whether a new entry got created.
    fn insert_if_absent(&self, storage: &mut dyn Storage, voter_id: &str) -> StdResult<bool> {
        if self.entries.has(storage, voter_id.to_string()) {
            return Ok(false);
        }
        self.entries
            .save(storage, voter_id.to_string(), &VoterIdEntry::new(voter_id))?;
        Ok(true)
    }

    /// Issues the initial set of voter ids. Only ever called during instantiation.
    pub(crate) fn seed(
        &self,
        storage: &mut dyn Storage,
        voter_ids: impl IntoIterator<Item = String>,
    ) -> Result<u32, ElectionLedgerContractError> {
        let mut added = 0;
        for voter_id in voter_ids {
            let voter_id = voter_id.trim();
            if voter_id.is_empty() {
                return Err(ElectionLedgerContractError::empty_field("voter_id"));
            }
            if self.insert_if_absent(storage, voter_id)? {
                added += 1;
            }
        }
        Ok(added)
    }

    pub(crate) fn add(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        voter_id: &str,
    ) -> StdResult<bool> {
        self.insert_if_absent(storage, voter_id)
    }

    /// Checks whether the id could be claimed by the provided wallet.
    pub fn ensure_claimable(
        &self,
        entry: &VoterIdEntry,
        wallet: &Addr,
    ) -> Result<(), ElectionLedgerContractError> {
        match &entry.binding {
            VoterIdBinding::Available => Ok(()),
            VoterIdBinding::Bound { .. } => {
                Err(ElectionLedgerContractError::VoterIdAlreadyRegistered {
                    voter_id: entry.voter_id.clone(),
                })
            }
            VoterIdBinding::Reserved { wallet: holder, .. } if holder == wallet => Ok(()),
            VoterIdBinding::Reserved { .. } => Err(ElectionLedgerContractError::VoterIdAlreadyLinked {
                voter_id: entry.voter_id.clone(),
            }),
        }
    }

    /// First phase of the binding: the id is held for the wallet until the request is resolved.
    pub(crate) fn reserve(
        &self,
        storage: &mut dyn Storage,
        mut entry: VoterIdEntry,
        wallet: Addr,
        request_id: RequestId,
    ) -> StdResult<()> {
        entry.binding = VoterIdBinding::Reserved { wallet, request_id };
        self.entries.save(storage, entry.voter_id.clone(), &entry)
    }

    /// Second phase of the binding: the id permanently belongs to the wallet.
    pub(crate) fn commit(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        voter_id: &str,
        wallet: Addr,
    ) -> Result<(), ElectionLedgerContractError> {
        let mut entry = self.load_valid(storage, voter_id)?;
        if let VoterIdBinding::Reserved { wallet: holder, .. } = &entry.binding {
            if holder != wallet {
                return Err(ElectionLedgerContractError::VoterIdAlreadyLinked {
                    voter_id: voter_id.to_string(),
                });
            }
        }
        if entry.is_used() {
            return Err(ElectionLedgerContractError::VoterIdAlreadyRegistered {
                voter_id: voter_id.to_string(),
            });
        }

        entry.binding = VoterIdBinding::Bound { wallet };
        Ok(self.entries.save(storage, entry.voter_id.clone(), &entry)?)
    }

    /// Drops a reservation so that the id can be claimed again. Bound ids are left untouched.
    pub(crate) fn release(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        voter_id: &str,
    ) -> StdResult<()> {
        let Some(mut entry) = self.may_load(storage, voter_id)? else {
            return Ok(());
        };
        if matches!(entry.binding, VoterIdBinding::Reserved { .. }) {
            entry.binding = VoterIdBinding::Available;
            self.entries.save(storage, entry.voter_id.clone(), &entry)?;
        }
        Ok(())
    }
}
