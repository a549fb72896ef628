// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::contract::{execute, instantiate};
use cosmwasm_std::testing::{
    message_info, mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{from_json, Addr, Deps, DepsMut, Env, MessageInfo, OwnedDeps, Response};
use election_ledger_contract_common::{
    CandidateId, ElectionId, ElectionLedgerContractError, ExecuteMsg, InstantiateMsg, RequestId,
};

pub fn init_contract_tester() -> ElectionLedgerTester {
    ElectionLedgerTester::new(InstantiateMsg::default())
}

/// Wrapper around mock dependencies of an instantiated contract with helpers for the common flows.
pub struct ElectionLedgerTester {
    deps: OwnedDeps<MockStorage, MockApi, MockQuerier>,
    env: Env,
    commission: Addr,
}

#[allow(dead_code)]
impl ElectionLedgerTester {
    pub fn new(init_msg: InstantiateMsg) -> Self {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let commission = deps.api.addr_make("electoral-commission");

        let res = instantiate(
            deps.as_mut(),
            env.clone(),
            message_info(&commission, &[]),
            init_msg,
        );
        assert!(res.is_ok(), "failed to instantiate the contract: {res:?}");

        ElectionLedgerTester {
            deps,
            env,
            commission,
        }
    }

    pub fn deps(&self) -> Deps<'_> {
        self.deps.as_ref()
    }

    pub fn deps_mut(&mut self) -> DepsMut<'_> {
        self.deps.as_mut()
    }

    pub fn env(&self) -> Env {
        self.env.clone()
    }

    pub fn advance_time(&mut self, secs: u64) {
        self.env.block.time = self.env.block.time.plus_seconds(secs);
        self.env.block.height += 1;
    }

    pub fn commission(&self) -> Addr {
        self.commission.clone()
    }

    pub fn addr_make(&self, input: &str) -> Addr {
        self.deps.api.addr_make(input)
    }

    pub fn message_info(&self, sender: &Addr) -> MessageInfo {
        message_info(sender, &[])
    }

    pub fn commission_info(&self) -> MessageInfo {
        message_info(&self.commission, &[])
    }

    pub fn execute_msg(
        &mut self,
        sender: Addr,
        msg: &ExecuteMsg,
    ) -> Result<Response, ElectionLedgerContractError> {
        let env = self.env.clone();
        execute(
            self.deps.as_mut(),
            env,
            message_info(&sender, &[]),
            msg.clone(),
        )
    }

    fn execute_as_commission(
        &mut self,
        msg: &ExecuteMsg,
    ) -> Result<Response, ElectionLedgerContractError> {
        self.execute_msg(self.commission.clone(), msg)
    }

    pub fn request_registration(
        &mut self,
        wallet: &Addr,
        voter_id: &str,
    ) -> Result<RequestId, ElectionLedgerContractError> {
        let res = self.execute_msg(
            wallet.clone(),
            &ExecuteMsg::RequestRegistration {
                voter_id: voter_id.to_string(),
                name: format!("citizen {wallet}"),
                national_id: format!("NAT-{voter_id}"),
                email: None,
            },
        )?;
        Ok(from_json(res.data.unwrap_or_default())?)
    }

    pub fn verify_voter(
        &mut self,
        request_id: RequestId,
    ) -> Result<Response, ElectionLedgerContractError> {
        self.execute_as_commission(&ExecuteMsg::VerifyVoter { request_id })
    }

    pub fn reject_registration(
        &mut self,
        request_id: RequestId,
    ) -> Result<Response, ElectionLedgerContractError> {
        self.execute_as_commission(&ExecuteMsg::RejectRegistration { request_id })
    }

    /// Creates a wallet out of the provided seed and takes it through the full registration flow.
    pub fn register_voter(
        &mut self,
        seed: &str,
        voter_id: &str,
    ) -> Result<Addr, ElectionLedgerContractError> {
        let wallet = self.addr_make(seed);
        let request_id = self.request_registration(&wallet, voter_id)?;
        self.verify_voter(request_id)?;
        Ok(wallet)
    }

    pub fn add_candidate(&mut self, name: &str) -> Result<CandidateId, ElectionLedgerContractError> {
        let res = self.execute_as_commission(&ExecuteMsg::AddCandidate {
            name: name.to_string(),
            party: format!("{name}'s party"),
            image_url: "".to_string(),
        })?;
        Ok(from_json(res.data.unwrap_or_default())?)
    }

    pub fn create_election(
        &mut self,
        candidate_ids: Vec<CandidateId>,
    ) -> Result<ElectionId, ElectionLedgerContractError> {
        let res = self.execute_as_commission(&ExecuteMsg::CreateElection {
            title: "test election".to_string(),
            description: "".to_string(),
            candidate_ids,
        })?;
        Ok(from_json(res.data.unwrap_or_default())?)
    }

    pub fn start_election(
        &mut self,
        election_id: ElectionId,
        duration_secs: u64,
    ) -> Result<Response, ElectionLedgerContractError> {
        self.execute_as_commission(&ExecuteMsg::StartElection {
            election_id,
            duration_secs,
        })
    }

    pub fn end_election(
        &mut self,
        election_id: ElectionId,
    ) -> Result<Response, ElectionLedgerContractError> {
        self.execute_as_commission(&ExecuteMsg::EndElection { election_id })
    }

    pub fn vote(
        &mut self,
        voter: &Addr,
        candidate_id: CandidateId,
    ) -> Result<Response, ElectionLedgerContractError> {
        self.execute_msg(voter.clone(), &ExecuteMsg::Vote { candidate_id })
    }
}
