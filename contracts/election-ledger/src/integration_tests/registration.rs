// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use super::test_setup::{get_event_attribute, TestSetup};
use election_ledger_contract_common::{
    ElectionLedgerContractError, ExecuteMsg, HasRegistrationRequestResponse,
    PendingRegistrationsPagedResponse, QueryMsg, RegistrationRequest, VoterIdValidityResponse,
};
use rstest::rstest;

#[rstest::fixture]
fn setup() -> TestSetup {
    TestSetup::new()
}

#[rstest]
#[case("VOTER001", true)]
#[case("VOTER020", true)]
#[case("VOTER021", false)]
#[case("VOTER000", false)]
#[case("voter001", false)]
fn default_voter_ids_are_issued_on_instantiation(
    setup: TestSetup,
    #[case] voter_id: &str,
    #[case] expected: bool,
) {
    let res: VoterIdValidityResponse = setup.query(&QueryMsg::VoterIdValidity {
        voter_id: voter_id.to_string(),
    });
    assert_eq!(res.is_valid, expected);
}

#[rstest]
fn registration_request_is_visible_until_resolved(mut setup: TestSetup) {
    let wallet = setup.addr_make("citizen");
    let request_id = setup.request_registration(&wallet, "VOTER002");

    let has_request: HasRegistrationRequestResponse =
        setup.query(&QueryMsg::HasRegistrationRequest {
            wallet: wallet.to_string(),
        });
    assert!(has_request.has_request);

    let pending: PendingRegistrationsPagedResponse =
        setup.query(&QueryMsg::PendingRegistrations {
            start_after: None,
            limit: None,
        });
    assert_eq!(pending.requests.len(), 1);
    assert_eq!(pending.requests[0].id, request_id);

    // a pending request is not yet a voter
    assert!(setup.query_voter(&wallet).voter.is_none());

    setup.verify_voter(request_id);

    let pending: PendingRegistrationsPagedResponse =
        setup.query(&QueryMsg::PendingRegistrations {
            start_after: None,
            limit: None,
        });
    assert!(pending.requests.is_empty());

    let request: RegistrationRequest =
        setup.query(&QueryMsg::RegistrationRequest { request_id });
    assert!(request.status.is_verified());

    let voter = setup.query_voter(&wallet).voter.unwrap();
    assert_eq!(voter.voter_id, "VOTER002");
    assert!(voter.is_verified);
    assert!(!voter.has_voted);
}

#[rstest]
fn rejected_request_frees_the_voter_id(mut setup: TestSetup) {
    let first = setup.addr_make("first");
    let request_id = setup.request_registration(&first, "VOTER003");

    let second = setup.addr_make("second");
    let err = setup.execute_err(
        &second,
        &ExecuteMsg::RequestRegistration {
            voter_id: "VOTER003".to_string(),
            name: "Second".to_string(),
            national_id: "NAT-2".to_string(),
            email: None,
        },
    );
    assert_eq!(
        err,
        ElectionLedgerContractError::VoterIdAlreadyLinked {
            voter_id: "VOTER003".to_string()
        }
    );

    let res = setup.execute_as_commission(&ExecuteMsg::RejectRegistration { request_id });
    assert_eq!(
        get_event_attribute(&res, "wasm-registration_rejected", "request_id"),
        request_id.to_string()
    );

    // the rejected wallet may try again just like anybody else
    let has_request: HasRegistrationRequestResponse =
        setup.query(&QueryMsg::HasRegistrationRequest {
            wallet: first.to_string(),
        });
    assert!(!has_request.has_request);

    let second_request = setup.request_registration(&second, "VOTER003");
    assert_eq!(second_request, request_id + 1);
    setup.verify_voter(second_request);

    assert!(setup.query_voter(&first).voter.is_none());
    assert_eq!(
        setup.query_voter(&second).voter.unwrap().voter_id,
        "VOTER003"
    );
}

#[rstest]
fn duplicate_requests_from_the_same_wallet_are_rejected(mut setup: TestSetup) {
    let wallet = setup.addr_make("citizen");
    setup.request_registration(&wallet, "VOTER004");

    let err = setup.execute_err(
        &wallet,
        &ExecuteMsg::RequestRegistration {
            voter_id: "VOTER005".to_string(),
            name: "Citizen".to_string(),
            national_id: "NAT-5".to_string(),
            email: None,
        },
    );
    assert_eq!(
        err,
        ElectionLedgerContractError::RegistrationRequestExists {
            wallet: wallet.clone()
        }
    );
    assert_eq!(err.reason(), "already_exists");
}

#[rstest]
fn commission_can_issue_new_voter_ids(mut setup: TestSetup) {
    assert!(!setup.query_availability("SPECIAL-42").is_valid);

    let res = setup.execute_as_commission(&ExecuteMsg::AddValidVoterId {
        voter_id: "SPECIAL-42".to_string(),
    });
    assert_eq!(
        get_event_attribute(&res, "wasm-voter_id_added", "newly_added"),
        "true"
    );

    let availability = setup.query_availability("SPECIAL-42");
    assert!(availability.is_valid);
    assert!(availability.is_available);

    let wallet = setup.register_voter("special", "SPECIAL-42");
    assert!(setup.query_voter(&wallet).voter.is_some());
    assert!(!setup.query_availability("SPECIAL-42").is_available);

    let outsider = setup.addr_make("outsider");
    let err = setup.execute_err(
        &outsider,
        &ExecuteMsg::AddValidVoterId {
            voter_id: "SPECIAL-43".to_string(),
        },
    );
    assert_eq!(
        err,
        ElectionLedgerContractError::NotElectoralCommission { sender: outsider }
    );
}

#[rstest]
fn padded_voter_id_resolves_to_the_issued_one(mut setup: TestSetup) {
    setup.execute_as_commission(&ExecuteMsg::AddValidVoterId {
        voter_id: " X1 ".to_string(),
    });

    let validity: VoterIdValidityResponse = setup.query(&QueryMsg::VoterIdValidity {
        voter_id: " X1 ".to_string(),
    });
    assert!(validity.is_valid);
    let availability = setup.query_availability(" X1 ");
    assert!(availability.is_valid);
    assert!(availability.is_available);

    let wallet = setup.addr_make("citizen");
    let request_id = setup.request_registration(&wallet, " X1 ");
    let request: RegistrationRequest =
        setup.query(&QueryMsg::RegistrationRequest { request_id });
    assert_eq!(request.voter_id, "X1");

    setup.verify_voter(request_id);
    assert_eq!(setup.query_voter(&wallet).voter.unwrap().voter_id, "X1");
    assert!(!setup.query_availability("X1").is_available);
}
