// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::is_paused;
use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::Deps;
use cw_controllers::AdminResponse;
use election_ledger_contract_common::{ConfigResponse, ElectionLedgerContractError, PausedResponse};

pub fn query_electoral_commission(
    deps: Deps,
) -> Result<AdminResponse, ElectionLedgerContractError> {
    ELECTION_LEDGER_STORAGE
        .electoral_commission
        .query_admin(deps)
        .map_err(Into::into)
}

pub fn query_paused(deps: Deps) -> Result<PausedResponse, ElectionLedgerContractError> {
    Ok(PausedResponse {
        paused: is_paused(deps.storage)?,
    })
}

pub fn query_config(deps: Deps) -> Result<ConfigResponse, ElectionLedgerContractError> {
    Ok(ELECTION_LEDGER_STORAGE.config.load(deps.storage)?)
}
