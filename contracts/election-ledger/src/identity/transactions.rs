// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::ensure_electoral_commission;
use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::{DepsMut, MessageInfo, Response};
use election_ledger_contract_common::events::new_voter_id_added_event;
use election_ledger_contract_common::ElectionLedgerContractError;

pub fn try_add_valid_voter_id(
    deps: DepsMut<'_>,
    info: MessageInfo,
    voter_id: String,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;

    let voter_id = voter_id.trim();
    if voter_id.is_empty() {
        return Err(ElectionLedgerContractError::empty_field("voter_id"));
    }

    let newly_added = ELECTION_LEDGER_STORAGE
        .identity
        .add(deps.storage, &commission, voter_id)?;

    Ok(Response::new().add_event(new_voter_id_added_event(voter_id, newly_added)))
}
