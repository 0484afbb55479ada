// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dyninv-core: inventory data model for the dyninv inventory generator

pub mod group;
pub mod host;
pub mod inventory;
pub mod vars;

pub use group::{Group, ALL_GROUP, META_KEY, UNGROUPED_GROUP};
pub use host::Host;
pub use inventory::{CycleError, Inventory};
pub use vars::{merge_vars, Vars};
