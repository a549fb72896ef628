// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::{Addr, Deps, Storage};
use election_ledger_contract_common::ElectionLedgerContractError;

pub(crate) mod queries;
pub(crate) mod transactions;

/// Proof that the current sender has been authenticated as the Electoral Commission.
///
/// It can only be obtained through [`ensure_electoral_commission`] and every privileged
/// storage mutation requires a reference to it.
#[derive(Debug)]
pub(crate) struct ElectoralCommission {
    address: Addr,
}

impl ElectoralCommission {
    pub(crate) fn address(&self) -> &Addr {
        &self.address
    }
}

pub(crate) fn ensure_electoral_commission(
    deps: Deps,
    sender: &Addr,
) -> Result<ElectoralCommission, ElectionLedgerContractError> {
    if !ELECTION_LEDGER_STORAGE
        .electoral_commission
        .is_admin(deps, sender)?
    {
        return Err(ElectionLedgerContractError::NotElectoralCommission {
            sender: sender.clone(),
        });
    }

    Ok(ElectoralCommission {
        address: sender.clone(),
    })
}

pub(crate) fn is_paused(storage: &dyn Storage) -> Result<bool, ElectionLedgerContractError> {
    Ok(ELECTION_LEDGER_STORAGE
        .paused
        .may_load(storage)?
        .unwrap_or_default())
}

pub(crate) fn ensure_not_paused(storage: &dyn Storage) -> Result<(), ElectionLedgerContractError> {
    if is_paused(storage)? {
        return Err(ElectionLedgerContractError::Paused);
    }
    Ok(())
}
