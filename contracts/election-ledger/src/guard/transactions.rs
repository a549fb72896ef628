// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::{ensure_electoral_commission, is_paused};
use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::{DepsMut, MessageInfo, Response};
use election_ledger_contract_common::events::{
    new_contract_paused_event, new_contract_unpaused_event,
};
use election_ledger_contract_common::ElectionLedgerContractError;

pub fn try_pause(
    deps: DepsMut<'_>,
    info: MessageInfo,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;
    if is_paused(deps.storage)? {
        return Err(ElectionLedgerContractError::Paused);
    }

    ELECTION_LEDGER_STORAGE.set_paused(deps.storage, &commission, true)?;

    Ok(Response::new().add_event(new_contract_paused_event(commission.address())))
}

pub fn try_unpause(
    deps: DepsMut<'_>,
    info: MessageInfo,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;
    if !is_paused(deps.storage)? {
        return Err(ElectionLedgerContractError::NotPaused);
    }

    ELECTION_LEDGER_STORAGE.set_paused(deps.storage, &commission, false)?;

    Ok(Response::new().add_event(new_contract_unpaused_event(commission.address())))
}
