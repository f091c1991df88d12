use crate::atlas::Atlas;
use crate::region::WORLD;

/// Result of one Name Them All guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingOutcome {
    NotFound,
    NotInRegion(String),
    AlreadyNamed(String),
    Named { country: String, remaining: usize },
    /// The last unnamed country of the region.
    Completed(String),
    Finished,
}

/// Name every country in a region. The named set itself lives on the
/// `RegionIndex` so switching region always starts clean.
#[derive(Debug, Clone)]
pub struct NameThemAllGame {
    region: String,
    members: Vec<String>,
    complete: bool,
}

impl NameThemAllGame {
    /// `None` for an unknown region; the current session is then untouched.
    pub fn start(region: &str, atlas: &mut Atlas) -> Option<Self> {
        if !atlas.regions.set_current_region(region) {
            return None;
        }
        atlas.registry.reset_all();
        let region = atlas.regions.current_region()?.name.clone();
        let members = canonical_members(atlas, &region);
        tracing::debug!("name them all: {region} with {} countries", members.len());
        Some(Self {
            complete: members.is_empty(),
            region,
            members,
        })
    }

    pub fn guess(&mut self, input: &str, atlas: &mut Atlas) -> NamingOutcome {
        if self.complete {
            return NamingOutcome::Finished;
        }
        let Some(name) = atlas.resolve_name(input).map(String::from) else {
            return NamingOutcome::NotFound;
        };
        if !atlas.regions.is_in_current_region(&name) {
            return NamingOutcome::NotInRegion(name);
        }
        if !atlas.regions.mark_named(&name) {
            return NamingOutcome::AlreadyNamed(name);
        }
        atlas.registry.set_highlight(&name, true);

        let remaining = self.remaining(atlas);
        if remaining == 0 {
            self.complete = true;
            return NamingOutcome::Completed(name);
        }
        NamingOutcome::Named {
            country: name,
            remaining,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn total(&self) -> usize {
        self.members.len()
    }

    pub fn named_count(&self, atlas: &Atlas) -> usize {
        atlas.regions.named().len()
    }

    pub fn remaining(&self, atlas: &Atlas) -> usize {
        self.members
            .iter()
            .filter(|m| !atlas.regions.is_named(m))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// End the game and list what was missed, in region order.
    pub fn give_up(&mut self, atlas: &Atlas) -> Vec<String> {
        self.complete = true;
        self.members
            .iter()
            .filter(|m| !atlas.regions.is_named(m))
            .cloned()
            .collect()
    }
}

/// Distinct registry names making up a region. World is always the whole
/// registry, whatever the authored World list says.
fn canonical_members(atlas: &Atlas, region: &str) -> Vec<String> {
    if region.eq_ignore_ascii_case(WORLD) {
        return atlas.registry.all_names().map(String::from).collect();
    }
    let mut out: Vec<String> = Vec::new();
    for member in atlas.regions.members_of_current() {
        if let Some(name) = atlas.registry.canonical_name(member.trim()) {
            if !out.iter().any(|n| n == name) {
                out.push(name.to_string());
            }
        }
    }
    out
}
