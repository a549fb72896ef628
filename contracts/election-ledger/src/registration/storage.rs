// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::guard::ElectoralCommission;
use crate::storage::retrieval_limits;
use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};
use election_ledger_contract_common::constants::storage_keys;
use election_ledger_contract_common::{
    ElectionLedgerContractError, RegistrationRequest, RequestId, Voter,
};

pub struct RegistrationStorage {
    pub(crate) request_counter: Item<RequestId>,
    pub(crate) requests: Map<RequestId, RegistrationRequest>,

    /// Ids of requests awaiting a decision, mapped to the requesting wallet.
    pub(crate) pending: Map<RequestId, Addr>,

    /// The most recent request submitted by each wallet.
    pub(crate) latest_wallet_request: Map<Addr, RequestId>,
    pub(crate) voters: Map<Addr, Voter>,
}

impl RegistrationStorage {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        RegistrationStorage {
            request_counter: Item::new(storage_keys::REGISTRATION_COUNTER),
            requests: Map::new(storage_keys::REGISTRATION_REQUESTS),
            pending: Map::new(storage_keys::PENDING_REGISTRATIONS),
            latest_wallet_request: Map::new(storage_keys::LATEST_WALLET_REQUEST),
            voters: Map::new(storage_keys::VOTERS),
        }
    }

    pub(crate) fn next_request_id(&self, storage: &mut dyn Storage) -> StdResult<RequestId> {
        let id = self
            .request_counter
            .may_load(storage)?
            .unwrap_or_default()
            + 1;
        self.request_counter.save(storage, &id)?;
        Ok(id)
    }

    pub fn load_request(
        &self,
        storage: &dyn Storage,
        request_id: RequestId,
    ) -> Result<RegistrationRequest, ElectionLedgerContractError> {
        self.requests
            .may_load(storage, request_id)?
            .ok_or(ElectionLedgerContractError::RegistrationRequestNotFound { request_id })
    }

    /// Loads the request, making sure it is still awaiting a decision.
    pub fn load_pending_request(
        &self,
        storage: &dyn Storage,
        request_id: RequestId,
    ) -> Result<RegistrationRequest, ElectionLedgerContractError> {
        match self.requests.may_load(storage, request_id)? {
            Some(request) if request.status.is_pending() => Ok(request),
            _ => Err(ElectionLedgerContractError::PendingRegistrationNotFound { request_id }),
        }
    }

    pub fn latest_request_of(
        &self,
        storage: &dyn Storage,
        wallet: &Addr,
    ) -> StdResult<Option<RegistrationRequest>> {
        let Some(request_id) = self.latest_wallet_request.may_load(storage, wallet.clone())? else {
            return Ok(None);
        };
        self.requests.may_load(storage, request_id)
    }

    /// A wallet has an open request if its latest one is either pending or already verified.
    pub fn has_open_request(&self, storage: &dyn Storage, wallet: &Addr) -> StdResult<bool> {
        Ok(self
            .latest_request_of(storage, wallet)?
            .map(|request| !request.status.is_rejected())
            .unwrap_or_default())
    }

    pub(crate) fn insert_pending_request(
        &self,
        storage: &mut dyn Storage,
        request: &RegistrationRequest,
    ) -> StdResult<()> {
        self.requests.save(storage, request.id, request)?;
        self.pending.save(storage, request.id, &request.wallet)?;
        self.latest_wallet_request
            .save(storage, request.wallet.clone(), &request.id)
    }

    /// Persists the resolved request and drops it from the pending index.
    pub(crate) fn resolve_request(
        &self,
        storage: &mut dyn Storage,
        _commission: &ElectoralCommission,
        request: &RegistrationRequest,
    ) -> StdResult<()> {
        self.requests.save(storage, request.id, request)?;
        self.pending.remove(storage, request.id);
        Ok(())
    }

    pub fn may_load_voter(&self, storage: &dyn Storage, wallet: &Addr) -> StdResult<Option<Voter>> {
        self.voters.may_load(storage, wallet.clone())
    }

    /// Loads the voter associated with the wallet, making sure it has been verified.
    pub fn load_verified_voter(
        &self,
        storage: &dyn Storage,
        wallet: &Addr,
    ) -> Result<Voter, ElectionLedgerContractError> {
        match self.may_load_voter(storage, wallet)? {
            Some(voter) if voter.is_verified => Ok(voter),
            _ => Err(ElectionLedgerContractError::NotVerifiedVoter {
                sender: wallet.clone(),
            }),
        }
    }

    pub(crate) fn save_voter(&self, storage: &mut dyn Storage, voter: &Voter) -> StdResult<()> {
        self.voters.save(storage, voter.wallet.clone(), voter)
    }

    pub fn pending_requests_paged(
        &self,
        storage: &dyn Storage,
        start_after: Option<RequestId>,
        limit: Option<u32>,
    ) -> StdResult<Vec<RegistrationRequest>> {
        let limit = limit
            .unwrap_or(retrieval_limits::PENDING_REGISTRATIONS_DEFAULT_LIMIT)
            .min(retrieval_limits::PENDING_REGISTRATIONS_MAX_LIMIT) as usize;

        let start = start_after.map(Bound::exclusive);

        self.pending
            .keys(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|request_id| self.requests.load(storage, request_id?))
            .collect()
    }

    pub fn all_voters<'a>(
        &self,
        storage: &'a dyn Storage,
    ) -> impl Iterator<Item = StdResult<Voter>> + 'a {
        self.voters
            .range(storage, None, None, Order::Ascending)
            .map(|record| record.map(|(_, voter)| voter))
    }
}
