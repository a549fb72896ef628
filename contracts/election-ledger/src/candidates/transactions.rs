// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::ensure_electoral_commission;
use crate::storage::ELECTION_LEDGER_STORAGE;
use cosmwasm_std::{to_json_binary, DepsMut, MessageInfo, Response};
use election_ledger_contract_common::events::{
    new_candidate_activated_event, new_candidate_added_event, new_candidate_deactivated_event,
    new_candidate_updated_event,
};
use election_ledger_contract_common::{CandidateId, ElectionLedgerContractError};

struct CandidateDetails {
    name: String,
    party: String,
    image_url: String,
}

impl CandidateDetails {
    fn validate(
        name: String,
        party: String,
        image_url: String,
    ) -> Result<Self, ElectionLedgerContractError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ElectionLedgerContractError::empty_field("name"));
        }
        let party = party.trim();
        if party.is_empty() {
            return Err(ElectionLedgerContractError::empty_field("party"));
        }

        Ok(CandidateDetails {
            name: name.to_string(),
            party: party.to_string(),
            image_url: image_url.trim().to_string(),
        })
    }
}

pub fn try_add_candidate(
    deps: DepsMut<'_>,
    info: MessageInfo,
    name: String,
    party: String,
    image_url: String,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;
    let details = CandidateDetails::validate(name, party, image_url)?;

    let candidate = ELECTION_LEDGER_STORAGE.candidates.insert_new(
        deps.storage,
        &commission,
        details.name,
        details.party,
        details.image_url,
    )?;

    Ok(Response::new()
        .add_event(new_candidate_added_event(&candidate))
        .set_data(to_json_binary(&candidate.id)?))
}

pub fn try_update_candidate(
    deps: DepsMut<'_>,
    info: MessageInfo,
    candidate_id: CandidateId,
    name: String,
    party: String,
    image_url: String,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;

    let candidates = &ELECTION_LEDGER_STORAGE.candidates;
    let mut candidate = candidates.load(deps.storage, candidate_id)?;
    let details = CandidateDetails::validate(name, party, image_url)?;

    candidate.name = details.name;
    candidate.party = details.party;
    candidate.image_url = details.image_url;
    candidates.save_with_commission(deps.storage, &commission, &candidate)?;

    Ok(Response::new().add_event(new_candidate_updated_event(&candidate)))
}

pub fn try_deactivate_candidate(
    deps: DepsMut<'_>,
    info: MessageInfo,
    candidate_id: CandidateId,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;

    let candidates = &ELECTION_LEDGER_STORAGE.candidates;
    let mut candidate = candidates.load(deps.storage, candidate_id)?;
    candidate.is_active = false;
    candidates.save_with_commission(deps.storage, &commission, &candidate)?;

    Ok(Response::new().add_event(new_candidate_deactivated_event(candidate_id)))
}

pub fn try_activate_candidate(
    deps: DepsMut<'_>,
    info: MessageInfo,
    candidate_id: CandidateId,
) -> Result<Response, ElectionLedgerContractError> {
    let commission = ensure_electoral_commission(deps.as_ref(), &info.sender)?;

    let candidates = &ELECTION_LEDGER_STORAGE.candidates;
    let mut candidate = candidates.load(deps.storage, candidate_id)?;
    candidate.is_active = true;
    candidates.save_with_commission(deps.storage, &commission, &candidate)?;

    Ok(Response::new().add_event(new_candidate_activated_event(candidate_id)))
}
