// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::Deps;
use election_ledger_contract_common::{
    ElectionLedgerContractError, HasRegistrationRequestResponse,
    PendingRegistrationsPagedResponse, RegistrationRequest, RequestId, VoterResponse,
};

pub fn query_voter(
    deps: Deps,
    wallet: String,
) -> Result<VoterResponse, ElectionLedgerContractError> {
    let wallet = deps.api.addr_validate(&wallet)?;
    let voter = ELECTION_LEDGER_STORAGE
        .registrations
        .may_load_voter(deps.storage, &wallet)?;

    Ok(VoterResponse { wallet, voter })
}

pub fn query_registration_request(
    deps: Deps,
    request_id: RequestId,
) -> Result<RegistrationRequest, ElectionLedgerContractError> {
    ELECTION_LEDGER_STORAGE
        .registrations
        .load_request(deps.storage, request_id)
}

pub fn query_has_registration_request(
    deps: Deps,
    wallet: String,
) -> Result<HasRegistrationRequestResponse, ElectionLedgerContractError> {
    let wallet = deps.api.addr_validate(&wallet)?;
    let has_request = ELECTION_LEDGER_STORAGE
        .registrations
        .has_open_request(deps.storage, &wallet)?;

    Ok(HasRegistrationRequestResponse {
        wallet,
        has_request,
    })
}

pub fn query_pending_registrations_paged(
    deps: Deps,
    start_after: Option<RequestId>,
    limit: Option<u32>,
) -> Result<PendingRegistrationsPagedResponse, ElectionLedgerContractError> {
    let requests = ELECTION_LEDGER_STORAGE
        .registrations
        .pending_requests_paged(deps.storage, start_after, limit)?;

    let start_next_after = requests.last().map(|request| request.id);

    Ok(PendingRegistrationsPagedResponse {
        requests,
        start_next_after,
    })
}
