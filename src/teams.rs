// src/teams.rs
//
// Raw team name → persistent team identity.
//
// Over the league's history the same franchise has appeared under typos,
// abbreviations and entirely new names. Resolution order matters and runs
// against teams already created in this parse, so seasons must be fed in
// ascending year order:
//
//   1. a known team matching the raw name (case-insensitive) wins outright;
//   2. otherwise a spelling correction is applied, then matched;
//   3. the (corrected) name is then followed through the rename table to
//      the current franchise name, then matched;
//   4. otherwise a new team is created under that final name, with its
//      owner when one is on file.

use std::collections::{BTreeMap, HashSet};

use crate::config::reference::ReferenceData;
use crate::data::{League, TeamId};

#[derive(Clone, Debug, Default)]
pub struct TeamResolver {
    corrections: BTreeMap<String, String>,
    renames: BTreeMap<String, String>,
    owners: BTreeMap<String, String>,
    /// How often each raw spelling was seen; diagnostics only
    counts: BTreeMap<String, usize>,
}

impl TeamResolver {
    pub fn new(
        corrections: BTreeMap<String, String>,
        renames: BTreeMap<String, String>,
        owners: BTreeMap<String, String>,
    ) -> Self {
        Self { corrections, renames, owners, counts: BTreeMap::new() }
    }

    pub fn from_reference(data: &ReferenceData) -> Self {
        Self::new(data.corrections.clone(), data.renames.clone(), data.owners.clone())
    }

    pub fn resolve(&mut self, league: &mut League, raw: &str) -> TeamId {
        *self.counts.entry(s!(raw)).or_insert(0) += 1;

        if let Some(id) = league.find_team(raw) {
            return id;
        }

        let mut name = raw;
        if let Some(corrected) = self.corrections.get(raw) {
            logd!("Corrected team name {raw:?} → {corrected:?}");
            name = corrected;
            if let Some(id) = league.find_team(name) {
                return id;
            }
        }

        let current = self.current_name(name);
        if current != name {
            logd!("Renamed team {name:?} → {current:?}");
            if let Some(id) = league.find_team(current) {
                return id;
            }
        }

        let owner = self.owners.get(current).map(String::as_str);
        logf!("New team {current:?}{}", owner.map(|o| format!(" (owner {o})")).unwrap_or_default());
        league.add_team(current, owner)
    }

    /// Follow the rename chain to its end. A cycle stops where a name would repeat.
    fn current_name<'a>(&'a self, name: &'a str) -> &'a str {
        let mut seen = HashSet::new();
        let mut current = name;
        while let Some(next) = self.renames.get(current) {
            if !seen.insert(current) {
                loge!("Rename cycle through {current:?}");
                break;
            }
            current = next;
        }
        current
    }

    /// Every raw spelling seen so far with its count, sorted by spelling.
    pub fn spellings(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
