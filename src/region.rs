use std::collections::{BTreeSet, HashMap, HashSet};

use crate::registry::{CountryRegistry, fold_name};

/// The implicit region containing every country.
pub const WORLD: &str = "World";

/// Offered when no region data exists at all.
pub const DEFAULT_REGIONS: [&str; 5] = [WORLD, "Europe", "America", "Asia", "Africa"];

/// A named grouping. Member names keep the casing they were authored with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub members: Vec<String>,
    keys: HashSet<String>,
}

impl Region {
    fn new(name: &str, members: Vec<String>) -> Self {
        let keys = members.iter().map(|m| fold_name(m)).collect();
        Self {
            name: name.to_string(),
            members,
            keys,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&fold_name(name))
    }
}

/// Regions plus the Name Them All session: which region is active and which of
/// its countries have been named so far.
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    regions: Vec<Region>,
    /// Lower-cased region name -> position.
    by_name: HashMap<String, usize>,
    /// Folded member name -> first authored spelling, across every region.
    members: HashMap<String, String>,
    /// Master list, used for World membership and on-demand World creation.
    all_countries: Vec<String>,
    all_keys: HashSet<String>,
    current: Option<usize>,
    named: BTreeSet<String>,
}

impl RegionIndex {
    /// Build from authored region data. Members unknown to the registry are
    /// dropped. A supplied "World" is used as-is; otherwise it is synthesized
    /// from every registry country.
    pub fn build(
        data: impl IntoIterator<Item = (String, Vec<String>)>,
        registry: &CountryRegistry,
    ) -> Self {
        let mut index = Self::with_countries(registry);
        for (name, members) in data {
            let kept: Vec<String> = members
                .into_iter()
                .filter(|m| {
                    let known = registry.contains(m.trim());
                    if !known {
                        tracing::debug!("region {name}: dropping unknown member {m:?}");
                    }
                    known
                })
                .collect();
            index.insert_region(&name, kept);
        }
        if index.lookup(WORLD).is_none() {
            index.insert_region(WORLD, index.all_countries.clone());
        }
        index
    }

    /// Synthesize regions from classification keywords when region data is
    /// unavailable.
    pub fn build_fallback(registry: &CountryRegistry) -> Self {
        let mut index = Self::with_countries(registry);
        index.insert_region(WORLD, index.all_countries.clone());

        let mut buckets: Vec<(&str, Vec<String>)> = DEFAULT_REGIONS[1..]
            .iter()
            .map(|&name| (name, Vec::new()))
            .collect();
        for country in registry.iter() {
            for bucket in fallback_buckets(&country.classification) {
                if let Some((_, list)) = buckets.iter_mut().find(|(name, _)| *name == bucket) {
                    list.push(country.name.clone());
                }
            }
        }
        for (name, members) in buckets {
            if !members.is_empty() {
                index.insert_region(name, members);
            }
        }
        tracing::info!(
            "synthesized {} fallback regions from classifications",
            index.regions.len()
        );
        index
    }

    fn with_countries(registry: &CountryRegistry) -> Self {
        let all_countries: Vec<String> = registry.all_names().map(String::from).collect();
        let all_keys = all_countries.iter().map(|n| fold_name(n)).collect();
        Self {
            all_countries,
            all_keys,
            ..Self::default()
        }
    }

    fn insert_region(&mut self, name: &str, members: Vec<String>) {
        for member in &members {
            self.members
                .entry(fold_name(member))
                .or_insert_with(|| member.clone());
        }
        let region = Region::new(name, members);
        match self.lookup(name) {
            // Duplicate keys (differing only in case) keep the later list.
            Some(idx) => self.regions[idx] = region,
            None => {
                self.by_name.insert(name.to_lowercase(), self.regions.len());
                self.regions.push(region);
            }
        }
    }

    fn lookup(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name.trim().to_lowercase()).copied()
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.lookup(name).map(|idx| &self.regions[idx])
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Authored spelling of a region member matching `input`, searching every
    /// region including World.
    pub fn find_member(&self, input: &str) -> Option<&str> {
        self.members.get(&fold_name(input)).map(String::as_str)
    }

    /// Switch the active region. Unknown names fail and leave the session as it
    /// was; success clears the named set. World is created on demand.
    pub fn set_current_region(&mut self, name: &str) -> bool {
        let idx = match self.lookup(name) {
            Some(idx) => idx,
            None if name.trim().eq_ignore_ascii_case(WORLD) => {
                self.insert_region(WORLD, self.all_countries.clone());
                self.regions.len() - 1
            }
            None => {
                tracing::debug!("unknown region {name:?}");
                return false;
            }
        };
        self.current = Some(idx);
        self.named.clear();
        true
    }

    pub fn current_region(&self) -> Option<&Region> {
        self.current.map(|idx| &self.regions[idx])
    }

    pub fn is_in_current_region(&self, name: &str) -> bool {
        let Some(region) = self.current_region() else {
            return false;
        };
        if region.name.eq_ignore_ascii_case(WORLD) {
            // World may not enumerate every fragment-derived name.
            let key = fold_name(name);
            return self.all_keys.contains(&key) || self.members.contains_key(&key);
        }
        region.contains(name)
    }

    pub fn members_of_current(&self) -> &[String] {
        self.current_region()
            .map(|r| r.members.as_slice())
            .unwrap_or(&[])
    }

    pub fn available_regions(&self) -> Vec<String> {
        if self.regions.is_empty() {
            return DEFAULT_REGIONS.iter().map(|s| s.to_string()).collect();
        }
        self.regions.iter().map(|r| r.name.clone()).collect()
    }

    /// Record a country as named. Returns false if it already was.
    pub fn mark_named(&mut self, canonical: &str) -> bool {
        self.named.insert(canonical.to_string())
    }

    pub fn is_named(&self, canonical: &str) -> bool {
        self.named.contains(canonical)
    }

    pub fn named(&self) -> &BTreeSet<String> {
        &self.named
    }

    pub fn clear_named(&mut self) {
        self.named.clear();
    }
}

/// Fallback region names a classification tag falls into. "north"/"south" only
/// count toward America when no other continent keyword matched.
fn fallback_buckets(classification: &str) -> Vec<&'static str> {
    let tag = classification.to_lowercase();
    let mut buckets = Vec::new();
    if tag.contains("europe") {
        buckets.push("Europe");
    }
    if tag.contains("asia") || tag.contains("middle east") {
        buckets.push("Asia");
    }
    if tag.contains("africa") {
        buckets.push("Africa");
    }
    if tag.contains("america") || tag.contains("caribbean") {
        buckets.push("America");
    } else if buckets.is_empty() && (tag.contains("north") || tag.contains("south")) {
        buckets.push("America");
    }
    buckets
}
