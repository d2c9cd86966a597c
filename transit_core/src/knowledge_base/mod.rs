//! Location Knowledge Base - static tables the collector, filter, and
//! rewrite operations are defined in terms of.
//!
//! The knowledge base holds:
//! - **Sub-locations**: names and the slot overrides that identify them
//! - **Depth tiers**: how far each location is from the world map
//! - **Intra pairs**: transitions between sections of one area
//! - **Post-sewers flags**: locations gated behind the sewers
//! - **Exception lists**: per-pair selector whitelists and blacklists
//!
//! The standard tables are built once per process and never mutated.

mod sub_location;
mod tables;

pub use sub_location::*;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::debug;
use world_data::{
    parse_regular_location, parse_regular_location_no_case, regular_location_name, LocPair,
    LocationCode,
};

/// Which side of a copy an exception list applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XListRole {
    /// Entries content is copied from.
    Read,
    /// Entries content is copied into.
    Write,
}

/// Selector blacklist and whitelist for one pair and role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransXList {
    pub black: Vec<usize>,
    pub white: Vec<usize>,
}

impl TransXList {
    /// A list that only blacklists `selectors`.
    pub fn black(selectors: Vec<usize>) -> Self {
        Self {
            black: selectors,
            white: Vec::new(),
        }
    }

    /// A list that only allows `selectors`.
    pub fn white(selectors: Vec<usize>) -> Self {
        Self {
            black: Vec::new(),
            white: selectors,
        }
    }

    /// Whether a selector survives this list. A non-empty whitelist is the
    /// exclusive allowed set; the blacklist then removes from what remains.
    pub fn allows(&self, selector: usize) -> bool {
        if !self.white.is_empty() && !self.white.contains(&selector) {
            return false;
        }
        !self.black.contains(&selector)
    }
}

/// Read and write exception lists for one ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransXListPair {
    pub read: TransXList,
    pub write: TransXList,
}

impl TransXListPair {
    /// The list for one side of a copy.
    pub fn get(&self, role: XListRole) -> &TransXList {
        match role {
            XListRole::Read => &self.read,
            XListRole::Write => &self.write,
        }
    }

    fn get_mut(&mut self, role: XListRole) -> &mut TransXList {
        match role {
            XListRole::Read => &mut self.read,
            XListRole::Write => &mut self.write,
        }
    }
}

/// The static location tables.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    sub_location_names: Vec<(LocationCode, String)>,
    overrides: HashMap<SubLocDesc, SubLocOverride>,
    intra_pairs: HashSet<LocPair>,
    depths: HashMap<LocationCode, u8>,
    post_sewers: HashSet<LocationCode>,
    xlists: HashMap<LocPair, TransXListPair>,
}

impl KnowledgeBase {
    /// An empty knowledge base, for callers supplying their own tables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The process-wide tables for the standard game data.
    pub fn standard() -> &'static KnowledgeBase {
        static STANDARD: OnceLock<KnowledgeBase> = OnceLock::new();
        STANDARD.get_or_init(Self::build_standard)
    }

    fn build_standard() -> Self {
        let mut kb = Self::empty();

        for (code, name) in sub_location::SUB_LOCATION_NAMES {
            kb = kb.with_sub_location(code, name);
        }
        for (desc, ovr) in sub_location::standard_overrides() {
            kb = kb.with_override(desc, ovr);
        }
        for (from, to) in tables::INTRA_TRANSITIONS {
            kb = kb.with_intra_pair(LocPair::new(from, to));
        }
        for (loc, depth) in tables::LOCATION_DEPTHS {
            kb = kb.with_depth(loc, depth);
        }
        for loc in tables::POST_SEWERS_LOCATIONS {
            kb = kb.with_post_sewers(loc);
        }
        for (pair, role, xlist) in tables::standard_xlists() {
            kb = kb.with_xlist(pair, role, xlist);
        }

        kb
    }

    /// Register a sub-location name.
    pub fn with_sub_location(mut self, code: LocationCode, name: impl Into<String>) -> Self {
        self.sub_location_names.push((code, name.into()));
        self
    }

    /// Register a sub-location override for one transition slot.
    pub fn with_override(mut self, desc: SubLocDesc, ovr: SubLocOverride) -> Self {
        self.overrides.insert(desc, ovr);
        self
    }

    /// Mark a pair as an intra-area transition.
    pub fn with_intra_pair(mut self, pair: LocPair) -> Self {
        self.intra_pairs.insert(pair);
        self
    }

    /// Set the depth tier of a location.
    pub fn with_depth(mut self, loc: LocationCode, depth: u8) -> Self {
        self.depths.insert(loc, depth);
        self
    }

    /// Mark a location as reachable only after the sewers.
    pub fn with_post_sewers(mut self, loc: LocationCode) -> Self {
        self.post_sewers.insert(loc);
        self
    }

    /// Set the exception list for a pair and role, replacing any previous one.
    pub fn with_xlist(mut self, pair: LocPair, role: XListRole, xlist: TransXList) -> Self {
        *self.xlists.entry(pair).or_default().get_mut(role) = xlist;
        self
    }

    /// The sub-location override for a transition slot, if any.
    pub fn sub_location_override(&self, desc: SubLocDesc) -> Option<SubLocOverride> {
        let ovr = self.overrides.get(&desc).copied();
        if let Some(ovr) = ovr {
            debug!(?desc, ?ovr, "translated selector to sub-location pair");
        }
        ovr
    }

    /// Whether a pair is listed as an intra-area transition.
    pub fn is_intra(&self, pair: LocPair) -> bool {
        self.intra_pairs.contains(&pair)
    }

    /// Depth tier of a location. Unlisted locations are treated as depth 0.
    pub fn depth(&self, loc: LocationCode) -> u8 {
        self.depths.get(&loc).copied().unwrap_or(0)
    }

    /// Whether a location is reachable only after the sewers.
    pub fn is_post_sewers(&self, loc: LocationCode) -> bool {
        self.post_sewers.contains(&loc)
    }

    /// The exception list for a pair and role, if one is defined.
    pub fn xlist(&self, pair: LocPair, role: XListRole) -> Option<&TransXList> {
        self.xlists.get(&pair).map(|x| x.get(role))
    }

    /// Name of a sub-location or regular location.
    pub fn location_name(&self, loc: LocationCode) -> Option<&str> {
        self.sub_location_names
            .iter()
            .find(|(code, _)| *code == loc)
            .map(|(_, name)| name.as_str())
            .or_else(|| regular_location_name(loc))
    }

    /// User-friendly name for an exact location; unknown codes render as `"?"`.
    pub fn location_string(&self, loc: LocationCode) -> String {
        self.location_name(loc).unwrap_or("?").to_string()
    }

    /// Embellished form of [`Self::location_string`]: `"12 (Needles)"`.
    pub fn location_full_string(&self, loc: LocationCode) -> String {
        format!("{} ({})", loc, self.location_string(loc))
    }

    /// Convert a name to an exact location code. Sub-locations are checked
    /// first.
    pub fn parse_location(&self, s: &str) -> world_data::Result<LocationCode> {
        match self.sub_location_names.iter().find(|(_, name)| name == s) {
            Some((code, _)) => Ok(*code),
            None => parse_regular_location(s),
        }
    }

    /// Like [`Self::parse_location`], ignoring ASCII case.
    pub fn parse_location_no_case(&self, s: &str) -> world_data::Result<LocationCode> {
        match self
            .sub_location_names
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
        {
            Some((code, _)) => Ok(*code),
            None => parse_regular_location_no_case(s),
        }
    }
}
