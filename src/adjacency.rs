use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use rand::Rng;
use rand::RngCore;

use crate::registry::{CountryRegistry, fold_name};

/// Undirected view over possibly one-directional adjacency data.
///
/// Edges are stored as recorded; queries OR both directions. Keys are folded
/// names so data authored in a different case still lines up with the registry.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    /// Recorded edges, folded name -> folded neighbors.
    recorded: BTreeMap<String, BTreeSet<String>>,
    /// Reverse of `recorded`.
    incoming: BTreeMap<String, BTreeSet<String>>,
    /// Folded name -> first authored spelling.
    display: HashMap<String, String>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from authored data. Every neighbor mentioned gets an entry of its
    /// own (possibly empty) so one-directional records stay queryable.
    pub fn build(data: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let mut graph = Self::new();
        for (country, neighbors) in data {
            let key = graph.ensure_entry(&country);
            for neighbor in neighbors {
                let other = graph.ensure_entry(&neighbor);
                if other != key {
                    graph.record(&key, &other);
                }
            }
        }
        tracing::info!("adjacency graph built with {} entries", graph.len());
        graph
    }

    /// Degraded-mode substitute: link countries sharing a non-empty
    /// classification with probability `link_probability`, then join any
    /// disconnected pieces within each classification. Every country gets an
    /// entry, linked or not.
    pub fn build_fallback(
        registry: &CountryRegistry,
        link_probability: f64,
        rng: &mut dyn RngCore,
    ) -> Self {
        let p = if link_probability.is_nan() {
            0.0
        } else {
            link_probability.clamp(0.0, 1.0)
        };
        let mut graph = Self::new();

        // Group by classification, preserving registry order inside each group.
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for country in registry.iter() {
            let key = graph.ensure_entry(&country.name);
            let tag = fold_name(&country.classification);
            if !tag.is_empty() {
                groups.entry(tag).or_default().push(key);
            }
        }

        for members in groups.values() {
            for i in 0..members.len() {
                for j in (i + 1)..members.len() {
                    if rng.random_bool(p) {
                        graph.link(&members[i], &members[j]);
                    }
                }
            }
            graph.connect_components(members, rng);
        }

        tracing::warn!(
            "using synthetic adjacency: {} countries in {} classification groups",
            graph.len(),
            groups.len()
        );
        graph
    }

    /// Report names in the registry's spelling wherever the registry knows them.
    pub fn canonicalize(&mut self, registry: &CountryRegistry) {
        for name in self.display.values_mut() {
            if let Some(canonical) = registry.canonical_name(name.as_str()) {
                if canonical != name.as_str() {
                    *name = canonical.to_string();
                }
            }
        }
    }

    fn ensure_entry(&mut self, name: &str) -> String {
        let key = fold_name(name);
        self.recorded.entry(key.clone()).or_default();
        self.display
            .entry(key.clone())
            .or_insert_with(|| name.trim().to_string());
        key
    }

    fn record(&mut self, from: &str, to: &str) {
        self.recorded
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
        self.incoming
            .entry(to.to_string())
            .or_default()
            .insert(from.to_string());
    }

    fn link(&mut self, a: &str, b: &str) {
        self.record(a, b);
        self.record(b, a);
    }

    /// BFS components over `members`; link a random node of each component to
    /// a random node of the one before it.
    fn connect_components(&mut self, members: &[String], rng: &mut dyn RngCore) {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut components: Vec<Vec<String>> = Vec::new();

        for start in members {
            if seen.contains(start.as_str()) {
                continue;
            }
            let mut component = Vec::new();
            let mut queue = VecDeque::new();
            queue.push_back(start.clone());
            seen.insert(start);
            while let Some(node) = queue.pop_front() {
                for next in self.neighbor_keys(&node) {
                    if let Some(member) = members.iter().find(|m| **m == next) {
                        if seen.insert(member) {
                            queue.push_back(next);
                        }
                    }
                }
                component.push(node);
            }
            components.push(component);
        }

        for i in 1..components.len() {
            let a = &components[i - 1][rng.random_range(0..components[i - 1].len())];
            let b = &components[i][rng.random_range(0..components[i].len())];
            let (a, b) = (a.clone(), b.clone());
            self.link(&a, &b);
        }
    }

    fn neighbor_keys(&self, key: &str) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        if let Some(set) = self.recorded.get(key) {
            out.extend(set.iter().cloned());
        }
        if let Some(set) = self.incoming.get(key) {
            out.extend(set.iter().cloned());
        }
        out
    }

    pub fn has_entry(&self, name: &str) -> bool {
        self.recorded.contains_key(&fold_name(name))
    }

    /// False if either side has no entry; otherwise true when either direction
    /// was recorded.
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        let (a, b) = (fold_name(a), fold_name(b));
        match (self.recorded.get(&a), self.recorded.get(&b)) {
            (Some(from_a), Some(from_b)) => from_a.contains(&b) || from_b.contains(&a),
            _ => false,
        }
    }

    /// Neighbors in either direction, sorted, in authored spelling.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        self.neighbor_keys(&fold_name(name))
            .iter()
            .filter_map(|k| self.display.get(k).map(String::as_str))
            .collect()
    }

    /// Fewest-hop route from `a` to `b`, both ends included.
    pub fn shortest_path(&self, a: &str, b: &str) -> Option<Vec<String>> {
        let (start, goal) = (fold_name(a), fold_name(b));
        if !self.recorded.contains_key(&start) || !self.recorded.contains_key(&goal) {
            return None;
        }

        let mut parent: HashMap<String, String> = HashMap::new();
        let mut queue = VecDeque::new();
        parent.insert(start.clone(), start.clone());
        queue.push_back(start.clone());

        while let Some(node) = queue.pop_front() {
            if node == goal {
                let mut path = vec![node.clone()];
                let mut cur = node;
                while cur != start {
                    cur = parent[&cur].clone();
                    path.push(cur.clone());
                }
                path.reverse();
                return Some(path.into_iter().map(|k| self.display[&k].clone()).collect());
            }
            for next in self.neighbor_keys(&node) {
                if !parent.contains_key(&next) {
                    parent.insert(next.clone(), node.clone());
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Number of countries with an entry.
    pub fn len(&self) -> usize {
        self.recorded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CountryFragment;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn data(entries: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    fn fallback_registry() -> CountryRegistry {
        let mut fragments = Vec::new();
        for name in ["A1", "A2", "A3", "A4", "A5", "A6"] {
            fragments.push(CountryFragment::new(name, "M0Z", "Alpha"));
        }
        for name in ["B1", "B2", "B3"] {
            fragments.push(CountryFragment::new(name, "M0Z", "Beta"));
        }
        fragments.push(CountryFragment::new("Lonely", "M0Z", ""));
        CountryRegistry::load(fragments).unwrap()
    }

    #[test]
    fn one_directional_record_is_symmetric() {
        let graph = AdjacencyGraph::build(data(&[("France", &["Germany", "Spain"])]));
        assert!(graph.is_adjacent("France", "Germany"));
        assert!(graph.is_adjacent("Germany", "France"));
        assert!(graph.is_adjacent("spain", "FRANCE"));
        assert!(!graph.is_adjacent("Germany", "Spain"));
    }

    #[test]
    fn missing_entry_is_not_adjacent() {
        let graph = AdjacencyGraph::build(data(&[("France", &["Germany"])]));
        assert!(!graph.is_adjacent("France", "Italy"));
        assert!(!graph.is_adjacent("Italy", "Italy"));
    }

    #[test]
    fn neighbors_union_both_directions() {
        let graph = AdjacencyGraph::build(data(&[
            ("France", &["Germany"]),
            ("Belgium", &["France"]),
        ]));
        assert_eq!(graph.neighbors("france"), vec!["Belgium", "Germany"]);
    }

    #[test]
    fn shortest_path_uses_reverse_edges() {
        let graph = AdjacencyGraph::build(data(&[
            ("Portugal", &["Spain"]),
            ("France", &["Spain", "Germany"]),
            ("Poland", &["Germany"]),
        ]));
        assert_eq!(
            graph.shortest_path("Portugal", "Poland").unwrap(),
            vec!["Portugal", "Spain", "France", "Germany", "Poland"]
        );
        assert_eq!(graph.shortest_path("Spain", "spain").unwrap(), vec!["Spain"]);
        assert!(graph.shortest_path("Portugal", "Japan").is_none());
    }

    #[test]
    fn canonicalize_adopts_registry_spelling() {
        let registry = CountryRegistry::load(vec![
            CountryFragment::new("France", "M0Z", "Europe"),
            CountryFragment::new("Germany", "M1Z", "Europe"),
        ])
        .unwrap();
        let mut graph = AdjacencyGraph::build(data(&[("france", &["GERMANY", "Andorra"])]));
        graph.canonicalize(&registry);

        assert_eq!(graph.neighbors("France"), vec!["Andorra", "Germany"]);
        assert_eq!(
            graph.shortest_path("germany", "FRANCE").unwrap(),
            vec!["Germany", "France"]
        );
    }

    #[test]
    fn fallback_gives_every_country_an_entry() {
        let registry = fallback_registry();
        let mut rng = SmallRng::seed_from_u64(7);
        let graph = AdjacencyGraph::build_fallback(&registry, 0.0, &mut rng);
        for name in registry.all_names() {
            assert!(graph.has_entry(name), "{name} has no entry");
        }
        assert!(graph.neighbors("Lonely").is_empty());
    }

    #[test]
    fn fallback_only_links_within_classification() {
        let registry = fallback_registry();
        let mut rng = SmallRng::seed_from_u64(7);
        let graph = AdjacencyGraph::build_fallback(&registry, 1.0, &mut rng);
        assert!(graph.is_adjacent("A1", "A6"));
        assert!(graph.is_adjacent("B1", "B3"));
        assert!(!graph.is_adjacent("A1", "B1"));
    }

    #[test]
    fn fallback_groups_are_connected() {
        let registry = fallback_registry();
        let mut rng = SmallRng::seed_from_u64(99);
        let graph = AdjacencyGraph::build_fallback(&registry, 0.0, &mut rng);
        for target in ["A2", "A3", "A4", "A5", "A6"] {
            assert!(graph.shortest_path("A1", target).is_some());
        }
        assert!(graph.shortest_path("A1", "B1").is_none());
    }

    #[test]
    fn fallback_deterministic_with_same_seed() {
        let registry = fallback_registry();
        let mut rng1 = SmallRng::seed_from_u64(12345);
        let mut rng2 = SmallRng::seed_from_u64(12345);
        let g1 = AdjacencyGraph::build_fallback(&registry, 0.4, &mut rng1);
        let g2 = AdjacencyGraph::build_fallback(&registry, 0.4, &mut rng2);
        for name in registry.all_names() {
            assert_eq!(g1.neighbors(name), g2.neighbors(name));
        }
    }
}
