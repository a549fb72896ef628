// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod queries;
pub(crate) mod storage;
pub(crate) mod transactions;
