use std::collections::HashMap;

use crate::model::Country;
use crate::region::RegionIndex;
use crate::registry::CountryRegistry;

/// Built-in alias table: lower-cased alias -> canonical country name.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("usa", "United States"),
    ("us", "United States"),
    ("united states of america", "United States"),
    ("america", "United States"),
    ("uk", "United Kingdom"),
    ("great britain", "United Kingdom"),
    ("britain", "United Kingdom"),
    ("england", "United Kingdom"),
    ("holland", "Netherlands"),
    ("the netherlands", "Netherlands"),
    ("macedonia", "North Macedonia"),
    ("czechia", "Czech Republic"),
    ("uae", "United Arab Emirates"),
    ("drc", "Democratic Republic of the Congo"),
    ("ivory coast", "Côte d'Ivoire"),
    ("burma", "Myanmar"),
    ("swaziland", "Eswatini"),
];

/// Maps free text to a canonical country.
///
/// Resolution order, first hit wins:
/// 1. trimmed, case-insensitive registry match
/// 2. alias table
/// 3. region member scan (whitespace-insensitive), re-resolved against the registry
#[derive(Debug, Clone)]
pub struct NameResolver {
    aliases: HashMap<String, String>,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver {
    pub fn new() -> Self {
        let mut resolver = Self::empty();
        for &(alias, target) in DEFAULT_ALIASES {
            resolver.add_alias(alias, target);
        }
        resolver
    }

    /// Resolver with no aliases at all.
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Register an alias. Later registrations of the same alias replace earlier ones.
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        self.aliases
            .insert(alias.trim().to_lowercase(), target.to_string());
    }

    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases
            .get(&alias.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn resolve<'r>(
        &self,
        input: &str,
        registry: &'r CountryRegistry,
        regions: &RegionIndex,
    ) -> Option<&'r Country> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(country) = registry.get_by_name(trimmed) {
            return Some(country);
        }

        if let Some(country) = self
            .alias_target(trimmed)
            .and_then(|target| registry.get_by_name(target))
        {
            tracing::debug!("resolved {:?} via alias to {}", input, country.name);
            return Some(country);
        }

        let found = regions
            .find_member(trimmed)
            .and_then(|member| registry.get_by_name(member.trim()));
        if let Some(country) = found {
            tracing::debug!("resolved {:?} via region scan to {}", input, country.name);
        }
        found
    }

    /// Convenience wrapper returning the canonical name.
    pub fn resolve_name<'r>(
        &self,
        input: &str,
        registry: &'r CountryRegistry,
        regions: &RegionIndex,
    ) -> Option<&'r str> {
        self.resolve(input, registry, regions)
            .map(|c| c.name.as_str())
    }
}

/// Cosmetic echo formatting: trim, then capitalize the first letter of each
/// space-separated token. The rest of each token is left as typed. Resolution
/// never depends on this.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
