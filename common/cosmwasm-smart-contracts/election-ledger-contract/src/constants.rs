// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

/// Prefix of the voter ids seeded at instantiation.
pub const DEFAULT_VOTER_ID_PREFIX: &str = "VOTER";

/// Number of voter ids seeded at instantiation, i.e. `VOTER001` up to and including `VOTER020`.
pub const DEFAULT_VOTER_ID_COUNT: u32 = 20;

/// Returns the deterministic set of voter ids every fresh contract starts with.
pub fn default_voter_ids() -> impl Iterator<Item = String> {
    (1..=DEFAULT_VOTER_ID_COUNT).map(|index| format!("{DEFAULT_VOTER_ID_PREFIX}{index:03}"))
}

pub mod messages {
    pub const VOTER_ID_NOT_FOUND: &str = "Voter ID not found in Electoral Commission database";
    pub const VOTER_ID_ALREADY_REGISTERED: &str = "Voter ID already registered";
    pub const VOTER_ID_AVAILABLE: &str = "Voter ID is valid and available";
}

pub mod storage_keys {
    pub const CONTRACT_CONFIG: &str = "config";
    pub const ELECTORAL_COMMISSION: &str = "electoral-commission";
    pub const PAUSED: &str = "paused";

    pub const VOTER_IDS: &str = "voter-ids";

    pub const REGISTRATION_COUNTER: &str = "registration-counter";
    pub const REGISTRATION_REQUESTS: &str = "registration-requests";
    pub const PENDING_REGISTRATIONS: &str = "pending-registrations";
    pub const LATEST_WALLET_REQUEST: &str = "latest-wallet-request";
    pub const VOTERS: &str = "voters";

    pub const CANDIDATE_COUNTER: &str = "candidate-counter";
    pub const CANDIDATES: &str = "candidates";

    pub const ELECTION_COUNTER: &str = "election-counter";
    pub const ELECTIONS: &str = "elections";
    pub const CURRENT_ELECTION: &str = "current-election";

    pub const BALLOTS: &str = "ballots";
    pub const ELECTION_TALLIES: &str = "election-tallies";
}
