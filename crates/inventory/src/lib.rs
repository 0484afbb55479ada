// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! INI inventory parsing and queries

mod builder;
mod cache;
mod entry;
mod line;
mod load;
mod query;
mod range;
mod render;
mod vars_dir;
mod warning;

pub use builder::{parse_inventory, parse_inventory_with, InventoryBuilder, ParseContext, Parsed};
pub use cache::InventoryCache;
pub use entry::{parse_assignment_line, parse_entry, Entry};
pub use line::{classify_line, Line, SectionKind};
pub use load::{load_inventory, vars_base, LoadError, LoadOptions, DEFAULT_INVENTORY};
pub use query::{host_vars, list, GroupListing, Listing, Meta};
pub use range::{
    HostExpander, HostPattern, HostPatternIter, LiteralExpander, RangeError, RangeExpander,
    MAX_EXPANDED_HOSTS,
};
pub use render::{render_host, render_list, to_json};
pub use vars_dir::{
    apply_vars_dirs, collect_vars_files, read_vars_file, VarsFile, VarsFileError, GROUP_VARS_DIR,
    HOST_VARS_DIR,
};
pub use warning::Warning;
