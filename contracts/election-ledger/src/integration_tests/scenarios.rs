// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use super::test_setup::{get_event_attribute, TestSetup};
use election_ledger_contract_common::{
    EffectivePhase, ElectionLedgerContractError, ExecuteMsg, PausedResponse, QueryMsg,
    VoterIdAvailabilityResponse, VoterIdUsedResponse,
};
use rstest::rstest;

#[rstest::fixture]
fn setup() -> TestSetup {
    TestSetup::new()
}

#[rstest]
fn voter_id_availability_of_seeded_and_unknown_ids(setup: TestSetup) {
    assert_eq!(
        setup.query_availability("VOTER001"),
        VoterIdAvailabilityResponse {
            is_valid: true,
            is_available: true,
            message: "Voter ID is valid and available".to_string(),
        }
    );
    assert_eq!(
        setup.query_availability("VOTER999"),
        VoterIdAvailabilityResponse {
            is_valid: false,
            is_available: false,
            message: "Voter ID not found in Electoral Commission database".to_string(),
        }
    );
}

#[rstest]
fn verified_voter_id_can_not_be_claimed_again(mut setup: TestSetup) {
    let alice = setup.addr_make("alice");
    let request_id = setup.request_registration(&alice, "VOTER001");
    assert_eq!(request_id, 1);

    let res = setup.verify_voter(request_id);
    assert_eq!(
        get_event_attribute(&res, "wasm-voter_verified", "voter_id"),
        "VOTER001"
    );

    let used: VoterIdUsedResponse = setup.query(&QueryMsg::VoterIdUsed {
        voter_id: "VOTER001".to_string(),
    });
    assert!(used.is_used);

    let bob = setup.addr_make("bob");
    let err = setup.execute_err(
        &bob,
        &ExecuteMsg::RequestRegistration {
            voter_id: "VOTER001".to_string(),
            name: "Bob".to_string(),
            national_id: "NAT-BOB".to_string(),
            email: None,
        },
    );
    assert_eq!(
        err,
        ElectionLedgerContractError::VoterIdAlreadyRegistered {
            voter_id: "VOTER001".to_string()
        }
    );
}

#[rstest]
fn single_vote_per_election(mut setup: TestSetup) {
    let first = setup.add_candidate("Alice", "Party A");
    let second = setup.add_candidate("Bob", "Party B");
    assert_eq!((first, second), (1, 2));

    let election_id = setup.create_election("General", vec![first, second]);
    setup.start_election(election_id, 3600);

    let voter = setup.register_voter("voter", "VOTER001");
    let res = setup.vote(&voter, first);
    assert_eq!(
        get_event_attribute(&res, "wasm-vote_cast", "candidate_vote_count"),
        "1"
    );

    assert_eq!(setup.query_candidate(first).vote_count, 1);
    assert_eq!(setup.query_election(election_id).election.total_votes, 1);

    let err = setup.vote_err(&voter, second);
    assert_eq!(err, ElectionLedgerContractError::AlreadyVoted { election_id });
    assert_eq!(setup.query_candidate(second).vote_count, 0);
    assert_eq!(setup.query_election(election_id).election.total_votes, 1);
}

#[rstest]
fn deactivated_candidate_can_not_receive_votes(mut setup: TestSetup) {
    let first = setup.add_candidate("Alice", "Party A");
    let second = setup.add_candidate("Bob", "Party B");
    let election_id = setup.create_election("General", vec![first, second]);
    setup.start_election(election_id, 3600);
    let voter = setup.register_voter("voter", "VOTER001");

    setup.execute_as_commission(&ExecuteMsg::DeactivateCandidate {
        candidate_id: first,
    });

    let err = setup.vote_err(&voter, first);
    assert_eq!(
        err,
        ElectionLedgerContractError::CandidateNotActive {
            candidate_id: first
        }
    );
    assert_eq!(err.reason(), "invalid_target");
    assert_eq!(setup.query_candidate(first).vote_count, 0);
}

#[rstest]
fn pausing_blocks_votes_until_unpaused(mut setup: TestSetup) {
    let candidate = setup.add_candidate("Alice", "Party A");
    let election_id = setup.create_election("General", vec![candidate]);
    setup.start_election(election_id, 3600);
    let voter = setup.register_voter("voter", "VOTER001");

    setup.execute_as_commission(&ExecuteMsg::Pause {});
    let paused: PausedResponse = setup.query(&QueryMsg::Paused {});
    assert!(paused.paused);

    let err = setup.vote_err(&voter, candidate);
    assert_eq!(err, ElectionLedgerContractError::Paused);

    setup.execute_as_commission(&ExecuteMsg::Unpause {});
    setup.vote(&voter, candidate);
    assert_eq!(setup.query_candidate(candidate).vote_count, 1);
}

#[rstest]
fn failed_transactions_leave_no_trace(mut setup: TestSetup) {
    let candidate = setup.add_candidate("Alice", "Party A");
    let election_id = setup.create_election("General", vec![candidate]);
    setup.start_election(election_id, 3600);

    let stranger = setup.addr_make("stranger");
    let err = setup.vote_err(&stranger, candidate);
    assert_eq!(
        err,
        ElectionLedgerContractError::NotVerifiedVoter {
            sender: stranger.clone()
        }
    );

    let err = setup.execute_err(
        &stranger,
        &ExecuteMsg::AddCandidate {
            name: "Mallory".to_string(),
            party: "Shady".to_string(),
            image_url: "".to_string(),
        },
    );
    assert_eq!(err.reason(), "access_denied");

    let results = setup.query_results(election_id);
    assert_eq!(results.total_votes, 0);
    assert_eq!(results.results.len(), 1);
    assert_eq!(setup.query_voter_stats().total_voters, 0);
}

#[rstest]
fn full_election_lifecycle(mut setup: TestSetup) {
    let alice = setup.add_candidate("Alice", "Party A");
    let bob = setup.add_candidate("Bob", "Party B");
    let carol = setup.add_candidate("Carol", "Party C");

    let voters = (1..=5)
        .map(|i| setup.register_voter(&format!("voter{i}"), &format!("VOTER00{i}")))
        .collect::<Vec<_>>();

    let first = setup.create_election("First", vec![alice, bob, carol]);
    assert!(setup.query_current_election().election.is_none());
    setup.start_election(first, 600);

    setup.vote(&voters[0], alice);
    setup.vote(&voters[1], alice);
    setup.vote(&voters[2], bob);

    // the window closes before the remaining voters get to vote
    setup.advance_time(601);
    let current = setup.query_current_election().election.unwrap();
    assert_eq!(current.election.id, first);
    assert_eq!(current.phase, EffectivePhase::Expired);

    let err = setup.vote_err(&voters[3], carol);
    assert_eq!(
        err,
        ElectionLedgerContractError::ElectionNotOpen {
            election_id: first,
            phase: EffectivePhase::Expired,
        }
    );

    // a second election can be started without explicitly ending the first one
    let second = setup.create_election("Second", vec![bob, carol]);
    let res = setup.start_election(second, 600);
    assert_eq!(
        get_event_attribute(&res, "wasm-expired_election_closed", "election_id"),
        first.to_string()
    );
    assert_eq!(setup.query_election(first).phase, EffectivePhase::Ended);

    // everybody can vote again in the new election
    setup.vote(&voters[0], carol);
    setup.vote(&voters[3], carol);
    setup.vote(&voters[4], bob);
    setup.end_election(second);

    let first_results = setup.query_results(first);
    let summary = first_results
        .results
        .iter()
        .map(|result| (result.candidate.id, result.election_votes))
        .collect::<Vec<_>>();
    assert_eq!(summary, vec![(alice, 2), (bob, 1), (carol, 0)]);
    assert_eq!(first_results.total_votes, 3);

    let second_results = setup.query_results(second);
    let summary = second_results
        .results
        .iter()
        .map(|result| (result.candidate.id, result.election_votes))
        .collect::<Vec<_>>();
    assert_eq!(summary, vec![(bob, 1), (carol, 2)]);
    assert_eq!(second_results.phase, EffectivePhase::Ended);

    // lifetime tallies add up across both elections
    assert_eq!(setup.query_candidate(alice).vote_count, 2);
    assert_eq!(setup.query_candidate(bob).vote_count, 2);
    assert_eq!(setup.query_candidate(carol).vote_count, 2);

    let stats = setup.query_voter_stats();
    assert_eq!(stats.total_voters, 5);
    assert_eq!(stats.verified_voters, 5);
    assert_eq!(stats.voted_count, 5);

    let first_voter = setup.query_voter(&voters[0]).voter.unwrap();
    assert!(first_voter.has_voted);
    assert_eq!(first_voter.voted_election_id, Some(second));
}

#[rstest]
fn open_election_blocks_starting_another_one(mut setup: TestSetup) {
    let candidate = setup.add_candidate("Alice", "Party A");
    let first = setup.create_election("First", vec![candidate]);
    let second = setup.create_election("Second", vec![candidate]);
    setup.start_election(first, 600);

    let commission = setup.commission();
    let err = setup.execute_err(
        &commission,
        &ExecuteMsg::StartElection {
            election_id: second,
            duration_secs: 600,
        },
    );
    assert_eq!(
        err,
        ElectionLedgerContractError::ActiveElectionConflict {
            active_election_id: first
        }
    );

    setup.end_election(first);
    setup.start_election(second, 600);
    assert_eq!(
        setup.query_current_election().election.map(|e| e.election.id),
        Some(second)
    );
}
