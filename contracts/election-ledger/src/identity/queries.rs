// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::Deps;
use election_ledger_contract_common::constants::messages;
use election_ledger_contract_common::{
    ElectionLedgerContractError, VoterIdAvailabilityResponse, VoterIdEntryResponse,
    VoterIdUsedResponse, VoterIdValidityResponse,
};

pub fn query_voter_id_validity(
    deps: Deps,
    voter_id: String,
) -> Result<VoterIdValidityResponse, ElectionLedgerContractError> {
    let is_valid = ELECTION_LEDGER_STORAGE
        .identity
        .is_valid(deps.storage, &voter_id)?;
    Ok(VoterIdValidityResponse { voter_id, is_valid })
}

pub fn query_voter_id_used(
    deps: Deps,
    voter_id: String,
) -> Result<VoterIdUsedResponse, ElectionLedgerContractError> {
    let is_used = ELECTION_LEDGER_STORAGE
        .identity
        .is_used(deps.storage, &voter_id)?;
    Ok(VoterIdUsedResponse { voter_id, is_used })
}

pub fn query_voter_id_availability(
    deps: Deps,
    voter_id: String,
) -> Result<VoterIdAvailabilityResponse, ElectionLedgerContractError> {
    let Some(entry) = ELECTION_LEDGER_STORAGE
        .identity
        .may_load(deps.storage, &voter_id)?
    else {
        return Ok(VoterIdAvailabilityResponse {
            is_valid: false,
            is_available: false,
            message: messages::VOTER_ID_NOT_FOUND.to_string(),
        });
    };

    // reservations do not make an id unavailable, only a completed verification does
    if entry.is_used() {
        Ok(VoterIdAvailabilityResponse {
            is_valid: true,
            is_available: false,
            message: messages::VOTER_ID_ALREADY_REGISTERED.to_string(),
        })
    } else {
        Ok(VoterIdAvailabilityResponse {
            is_valid: true,
            is_available: true,
            message: messages::VOTER_ID_AVAILABLE.to_string(),
        })
    }
}

pub fn query_voter_id_entry(
    deps: Deps,
    voter_id: String,
) -> Result<VoterIdEntryResponse, ElectionLedgerContractError> {
    let entry = ELECTION_LEDGER_STORAGE
        .identity
        .may_load(deps.storage, &voter_id)?;
    Ok(VoterIdEntryResponse { voter_id, entry })
}
