// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::candidates::queries::{
    query_candidate, query_candidate_counter, query_candidates_paged,
};
use crate::candidates::transactions::{
    try_activate_candidate, try_add_candidate, try_deactivate_candidate, try_update_candidate,
};
use crate::elections::queries::{
    query_current_election, query_election, query_election_counter, query_elections_paged,
};
use crate::elections::transactions::{try_create_election, try_end_election, try_start_election};
use crate::guard::queries::{query_config, query_electoral_commission, query_paused};
use crate::guard::transactions::{try_pause, try_unpause};
use crate::identity::queries::{
    query_voter_id_availability, query_voter_id_entry, query_voter_id_used,
    query_voter_id_validity,
};
use crate::identity::transactions::try_add_valid_voter_id;
use crate::registration::queries::{
    query_has_registration_request, query_pending_registrations_paged,
    query_registration_request, query_voter,
};
use crate::registration::transactions::{
    try_reject_registration, try_request_registration, try_verify_voter,
};
use crate::storage::ELECTION_LEDGER_STORAGE;
use crate::voting::queries::{query_ballot, query_election_results, query_voter_stats};
use crate::voting::transactions::try_vote;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};
use election_ledger_contract_common::events::new_contract_instantiated_event;
use election_ledger_contract_common::{
    ElectionLedgerContractError, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg,
};

const CONTRACT_NAME: &str = "crate:election-ledger-contract";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ElectionLedgerContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let seeded = ELECTION_LEDGER_STORAGE.initialise(
        deps,
        env,
        info.sender.clone(),
        msg.additional_voter_ids,
    )?;

    Ok(Response::new().add_event(new_contract_instantiated_event(&info.sender, seeded)))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ElectionLedgerContractError> {
    match msg {
        ExecuteMsg::AddValidVoterId { voter_id } => try_add_valid_voter_id(deps, info, voter_id),
        ExecuteMsg::RequestRegistration {
            voter_id,
            name,
            national_id,
            email,
        } => try_request_registration(deps, env, info, voter_id, name, national_id, email),
        ExecuteMsg::VerifyVoter { request_id } => try_verify_voter(deps, env, info, request_id),
        ExecuteMsg::RejectRegistration { request_id } => {
            try_reject_registration(deps, env, info, request_id)
        }
        ExecuteMsg::AddCandidate {
            name,
            party,
            image_url,
        } => try_add_candidate(deps, info, name, party, image_url),
        ExecuteMsg::UpdateCandidate {
            candidate_id,
            name,
            party,
            image_url,
        } => try_update_candidate(deps, info, candidate_id, name, party, image_url),
        ExecuteMsg::DeactivateCandidate { candidate_id } => {
            try_deactivate_candidate(deps, info, candidate_id)
        }
        ExecuteMsg::ActivateCandidate { candidate_id } => {
            try_activate_candidate(deps, info, candidate_id)
        }
        ExecuteMsg::CreateElection {
            title,
            description,
            candidate_ids,
        } => try_create_election(deps, info, title, description, candidate_ids),
        ExecuteMsg::StartElection {
            election_id,
            duration_secs,
        } => try_start_election(deps, env, info, election_id, duration_secs),
        ExecuteMsg::EndElection { election_id } => try_end_election(deps, env, info, election_id),
        ExecuteMsg::Vote { candidate_id } => try_vote(deps, env, info, candidate_id),
        ExecuteMsg::Pause {} => try_pause(deps, info),
        ExecuteMsg::Unpause {} => try_unpause(deps, info),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ElectionLedgerContractError> {
    match msg {
        QueryMsg::ElectoralCommission {} => Ok(to_json_binary(&query_electoral_commission(deps)?)?),
        QueryMsg::Paused {} => Ok(to_json_binary(&query_paused(deps)?)?),
        QueryMsg::Config {} => Ok(to_json_binary(&query_config(deps)?)?),
        QueryMsg::VoterIdValidity { voter_id } => {
            Ok(to_json_binary(&query_voter_id_validity(deps, voter_id)?)?)
        }
        QueryMsg::VoterIdUsed { voter_id } => {
            Ok(to_json_binary(&query_voter_id_used(deps, voter_id)?)?)
        }
        QueryMsg::CheckVoterIdAvailability { voter_id } => Ok(to_json_binary(
            &query_voter_id_availability(deps, voter_id)?,
        )?),
        QueryMsg::VoterIdEntry { voter_id } => {
            Ok(to_json_binary(&query_voter_id_entry(deps, voter_id)?)?)
        }
        QueryMsg::Voter { wallet } => Ok(to_json_binary(&query_voter(deps, wallet)?)?),
        QueryMsg::RegistrationRequest { request_id } => Ok(to_json_binary(
            &query_registration_request(deps, request_id)?,
        )?),
        QueryMsg::HasRegistrationRequest { wallet } => Ok(to_json_binary(
            &query_has_registration_request(deps, wallet)?,
        )?),
        QueryMsg::PendingRegistrations { start_after, limit } => Ok(to_json_binary(
            &query_pending_registrations_paged(deps, start_after, limit)?,
        )?),
        QueryMsg::Candidate { candidate_id } => {
            Ok(to_json_binary(&query_candidate(deps, candidate_id)?)?)
        }
        QueryMsg::CandidatesPaged { start_after, limit } => Ok(to_json_binary(
            &query_candidates_paged(deps, start_after, limit)?,
        )?),
        QueryMsg::CandidateCounter {} => Ok(to_json_binary(&query_candidate_counter(deps)?)?),
        QueryMsg::Election { election_id } => {
            Ok(to_json_binary(&query_election(deps, env, election_id)?)?)
        }
        QueryMsg::ElectionsPaged { start_after, limit } => Ok(to_json_binary(
            &query_elections_paged(deps, env, start_after, limit)?,
        )?),
        QueryMsg::CurrentElection {} => Ok(to_json_binary(&query_current_election(deps, env)?)?),
        QueryMsg::ElectionCounter {} => Ok(to_json_binary(&query_election_counter(deps)?)?),
        QueryMsg::ElectionResults { election_id } => Ok(to_json_binary(
            &query_election_results(deps, env, election_id)?,
        )?),
        QueryMsg::VoterStats {} => Ok(to_json_binary(&query_voter_stats(deps)?)?),
        QueryMsg::Ballot {
            election_id,
            wallet,
        } => Ok(to_json_binary(&query_ballot(deps, election_id, wallet)?)?),
    }
}

#[entry_point]
pub fn migrate(
    deps: DepsMut,
    _env: Env,
    _msg: MigrateMsg,
) -> Result<Response, ElectionLedgerContractError> {
    cw2::ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Default::default())
}
