// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod contract;
pub mod storage;

mod candidates;
mod elections;
mod guard;
mod identity;
mod registration;
mod voting;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod testing;
