// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::{ensure_electoral_commission, ensure_not_paused};
use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response};
use election_ledger_contract_common::events::{
    new_registration_rejected_event, new_registration_requested_event, new_voter_verified_event,
};
use election_ledger_contract_common::{
    ElectionLedgerContractError, RegistrationRequest, RegistrationStatus, RequestId, Voter,
};

fn non_empty(value: String, field: &str) -> Result<String, ElectionLedgerContractError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ElectionLedgerContractError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

pub fn try_request_registration(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    voter_id: String,
    name: String,
    national_id: String,
    email: Option<String>,
) -> Result<Response, ElectionLedgerContractError> {
    ensure_not_paused(deps.storage)?;

    let identity = &ELECTION_LEDGER_STORAGE.identity;
    let registrations = &ELECTION_LEDGER_STORAGE.registrations;

    let entry = identity.load_valid(deps.storage, &voter_id)?;
    let name = non_empty(name, "name")?;
    let national_id = non_empty(national_id, "national_id")?;
    let email = email
        .map(|email| email.trim().to_string())
        .filter(|email| !email.is_empty());

    if registrations.has_open_request(deps.storage, &info.sender)? {
        return Err(ElectionLedgerContractError::RegistrationRequestExists {
            wallet: info.sender,
        });
    }
    identity.ensure_claimable(&entry, &info.sender)?;

    let request = RegistrationRequest {
        id: registrations.next_request_id(deps.storage)?,
        voter_id: entry.voter_id.clone(),
        name,
        national_id,
        email,
        wallet: info.sender.clone(),
        submitted_at: env.block.time,
        status: RegistrationStatus::Pending,
    };

    identity.reserve(deps.storage, entry, info.sender, request.id)?;
    registrations.insert_pending_request(deps.storage, &request)?;

    Ok(Response::new()
        .add_event(new_registration_requested_event(&request))
        .set_data(to_json_binary(&request.id)?))
}

pub fn try_verify_voter(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    request_id: RequestId,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;

    let registrations = &ELECTION_LEDGER_STORAGE.registrations;

    let mut request = registrations.load_pending_request(deps.storage, request_id)?;
    request.verify(env.block.time)?;

    // a wallet can't have more than a single verified request, but if a voter record were
    // to exist already, its voting history must survive the re-verification
    let voter = match registrations.may_load_voter(deps.storage, &request.wallet)? {
        Some(existing) => Voter {
            has_voted: existing.has_voted,
            voted_election_id: existing.voted_election_id,
            ..Voter::from_verified_request(&request)
        },
        None => Voter::from_verified_request(&request),
    };

    ELECTION_LEDGER_STORAGE.identity.commit(
        deps.storage,
        &commission,
        &request.voter_id,
        request.wallet.clone(),
    )?;
    registrations.save_voter(deps.storage, &voter)?;
    registrations.resolve_request(deps.storage, &commission, &request)?;

    Ok(Response::new().add_event(new_voter_verified_event(&request)))
}

pub fn try_reject_registration(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    request_id: RequestId,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;

    let registrations = &ELECTION_LEDGER_STORAGE.registrations;

    let mut request = registrations.load_pending_request(deps.storage, request_id)?;
    request.reject(env.block.time)?;

    ELECTION_LEDGER_STORAGE
        .identity
        .release(deps.storage, &commission, &request.voter_id)?;
    registrations.resolve_request(deps.storage, &commission, &request)?;

    Ok(Response::new().add_event(new_registration_rejected_event(&request)))
}
