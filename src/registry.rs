use std::collections::HashMap;

use crate::error::DataError;
use crate::model::{Country, CountryFragment, Endpoint, RenderCountry};

/// Lower-cased, whitespace-collapsed comparison key. Looser than the registry's
/// own index, which only folds case.
pub(crate) fn fold_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}

/// Canonical store of countries, in load order, with a single lower-cased
/// name index for case-insensitive lookup.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    countries: Vec<Country>,
    /// Exact authored name -> position. Fragments merge on this key.
    exact: HashMap<String, usize>,
    /// Lower-cased name -> position. First authored spelling wins.
    folded: HashMap<String, usize>,
}

impl CountryRegistry {
    /// Group fragments by exact name. Each new name becomes a country; repeated
    /// names append their path to the existing country's `boundary_paths`.
    pub fn load(fragments: Vec<CountryFragment>) -> Result<Self, DataError> {
        let mut registry = Self::default();
        let fragment_count = fragments.len();

        for fragment in fragments {
            if fragment.name.trim().is_empty() {
                tracing::debug!("skipping unnamed geometry fragment {:?}", fragment.id);
                continue;
            }
            match registry.exact.get(&fragment.name) {
                Some(&idx) => registry.countries[idx].boundary_paths.push(fragment.path_data),
                None => {
                    let idx = registry.countries.len();
                    registry.exact.insert(fragment.name.clone(), idx);
                    registry
                        .folded
                        .entry(fragment.name.to_lowercase())
                        .or_insert(idx);
                    registry.countries.push(Country::from_fragment(fragment));
                }
            }
        }

        if registry.countries.is_empty() {
            return Err(DataError::NoCountries);
        }
        tracing::info!(
            "loaded {} countries from {} geometry fragments",
            registry.countries.len(),
            fragment_count
        );
        Ok(registry)
    }

    /// Case-insensitive exact match. No trimming or aliasing here.
    pub fn get_by_name(&self, name: &str) -> Option<&Country> {
        self.index_of(name).map(|idx| &self.countries[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Canonical spelling for a case-insensitive name.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.get_by_name(name).map(|c| c.name.as_str())
    }

    /// Names in load order.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Classification tag of a country, if known.
    pub fn classification_of(&self, name: &str) -> Option<&str> {
        self.get_by_name(name).map(|c| c.classification.as_str())
    }

    pub fn set_highlight(&mut self, name: &str, selected: bool) {
        if let Some(country) = self.get_mut(name) {
            country.selected = selected;
        }
    }

    pub fn set_endpoint(&mut self, name: &str, kind: Endpoint) {
        if let Some(country) = self.get_mut(name) {
            match kind {
                Endpoint::Start => country.is_start = true,
                Endpoint::End => country.is_end = true,
            }
        }
    }

    /// Clear every per-session flag. Called at the start of each round.
    pub fn reset_all(&mut self) {
        for country in &mut self.countries {
            country.reset_flags();
        }
    }

    /// Fresh render view reflecting flag state at call time.
    pub fn snapshot_for_render(&self) -> Vec<RenderCountry> {
        self.countries.iter().map(Country::to_render).collect()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.exact
            .get(name)
            .or_else(|| self.folded.get(&name.to_lowercase()))
            .copied()
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Country> {
        let idx = self.index_of(name)?;
        Some(&mut self.countries[idx])
    }
}
