//! Unit tests for roam-index.

#[cfg(test)]
mod helpers {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use roam_core::{GeoPoint, NodeId};

    use crate::KdTree;

    pub fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    pub fn entry(id: i64, lon: f64, lat: f64) -> (NodeId, GeoPoint) {
        (NodeId(id), GeoPoint::new(lon, lat))
    }

    /// A 3×3-ish scatter of points; ids 1..=9.
    pub fn grid_entries() -> Vec<(NodeId, GeoPoint)> {
        vec![
            entry(1, 0.01, 0.01),
            entry(2, 0.05, 0.01),
            entry(3, 0.09, 0.03),
            entry(4, 0.03, 0.04),
            entry(5, 0.07, 0.04),
            entry(6, 0.03, 0.07),
            entry(7, 0.01, 0.07),
            entry(8, 0.05, 0.08),
            entry(9, 0.09, 0.08),
        ]
    }

    pub fn grid_tree() -> KdTree {
        KdTree::build(grid_entries(), &mut rng())
    }

    /// Linear-scan reference answer, with the same smaller-id tie-break the
    /// tree promises.
    pub fn brute_force(entries: &[(NodeId, GeoPoint)], query: GeoPoint) -> NodeId {
        entries
            .iter()
            .map(|&(id, p)| (query.distance_m(p), id))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, id)| id)
            .expect("non-empty entries")
    }
}

// ── KdTree ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kd {
    use roam_core::{GeoPoint, NodeId};

    use super::helpers::{brute_force, entry, grid_entries, grid_tree, rng};
    use crate::KdTree;

    #[test]
    fn empty_index_returns_none() {
        let tree = KdTree::build(Vec::new(), &mut rng());
        assert!(tree.is_empty());
        assert_eq!(tree.nearest(GeoPoint::new(0.0, 0.0)), None);
    }

    #[test]
    fn single_point_always_wins() {
        let tree = KdTree::build(vec![entry(7, 0.05, 0.05)], &mut rng());
        for (lon, lat) in [(0.0, 0.0), (1.0, -1.0), (0.05, 0.05), (-10.0, 40.0)] {
            assert_eq!(tree.nearest(GeoPoint::new(lon, lat)), Some(NodeId(7)));
        }
    }

    #[test]
    fn two_points_strictly_nearer_wins() {
        let tree = KdTree::build(vec![entry(1, 0.0, 0.0), entry(2, 0.1, 0.0)], &mut rng());
        assert_eq!(tree.nearest(GeoPoint::new(0.04, 0.0)), Some(NodeId(1)));
        assert_eq!(tree.nearest(GeoPoint::new(0.06, 0.0)), Some(NodeId(2)));
    }

    #[test]
    fn coincident_points_tie_break_to_smaller_id() {
        let tree = KdTree::build(
            vec![entry(5, 0.02, 0.02), entry(2, 0.02, 0.02), entry(9, 0.02, 0.02)],
            &mut rng(),
        );
        assert_eq!(tree.nearest(GeoPoint::new(0.02, 0.02)), Some(NodeId(2)));
    }

    #[test]
    fn grid_nearest_matches_known_cells() {
        let tree = grid_tree();
        assert_eq!(tree.nearest(GeoPoint::new(0.02, 0.02)), Some(NodeId(1)));
        assert_eq!(tree.nearest(GeoPoint::new(0.03, 0.05)), Some(NodeId(4)));
        assert_eq!(tree.nearest(GeoPoint::new(0.08, 0.05)), Some(NodeId(5)));
        assert_eq!(tree.nearest(GeoPoint::new(0.06, 0.09)), Some(NodeId(8)));
    }

    #[test]
    fn agrees_with_brute_force_everywhere() {
        let entries = grid_entries();
        let tree = grid_tree();
        // Sweep a query lattice across and beyond the point cloud.  The
        // lattice pitch is offset from the point spacing so no query lands
        // exactly midway between two candidates.
        let mut lon = -0.0173;
        while lon <= 0.12 {
            let mut lat = -0.0191;
            while lat <= 0.12 {
                let q = GeoPoint::new(lon, lat);
                assert_eq!(
                    tree.nearest(q),
                    Some(brute_force(&entries, q)),
                    "disagreement at {q}"
                );
                lat += 0.0093;
            }
            lon += 0.0087;
        }
        // And the exact point positions themselves.
        for &(id, p) in &entries {
            assert_eq!(tree.nearest(p), Some(id));
        }
    }

    #[test]
    fn sorted_input_still_searches_correctly() {
        // A coordinate-sorted pool: the shuffle must keep the tree usable
        // (and correct) rather than a linear chain of same-side children.
        let entries: Vec<_> = (0..64).map(|i| entry(i, i as f64 * 0.001, 0.0)).collect();
        let tree = KdTree::build(entries.clone(), &mut rng());
        assert_eq!(tree.len(), 64);
        for &(id, p) in &entries {
            assert_eq!(tree.nearest(p), Some(id));
        }
    }

    #[test]
    fn fixed_seed_reproduces_results() {
        let a = KdTree::build(grid_entries(), &mut rng());
        let b = KdTree::build(grid_entries(), &mut rng());
        for (lon, lat) in [(0.0, 0.0), (0.04, 0.06), (0.09, 0.01)] {
            let q = GeoPoint::new(lon, lat);
            assert_eq!(a.nearest(q), b.nearest(q));
        }
    }
}

// ── PrefixTrie ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trie {
    use crate::PrefixTrie;

    fn sample() -> PrefixTrie {
        let mut t = PrefixTrie::new();
        t.add("Top Dog");
        t.add("top dog!");
        t.add("Toss Noodle Bar");
        t.add("Peet's Coffee & Tea");
        t.add("Museum");
        t
    }

    #[test]
    fn contains_is_normalization_insensitive() {
        let t = sample();
        assert!(t.contains("Peet's Coffee & Tea"));
        assert!(t.contains("peets coffee  tea"));
        assert!(t.contains("TOP DOG"));
        assert!(!t.contains("peet"));
        assert!(!t.contains("dog"));
    }

    #[test]
    fn prefix_walk_failure_is_empty() {
        let t = sample();
        assert!(t.keys_with_prefix("zzz").is_empty());
        assert!(t.keys_with_prefix("topx").is_empty());
    }

    #[test]
    fn prefix_returns_all_variants() {
        let t = sample();
        let mut hits = t.keys_with_prefix("top");
        hits.sort();
        assert_eq!(hits, vec!["Top Dog", "top dog!"]);
    }

    #[test]
    fn shared_prefix_spans_keys() {
        let t = sample();
        let hits = t.keys_with_prefix("to");
        assert_eq!(hits.len(), 3); // both Top Dog variants + Toss Noodle Bar
        assert!(hits.iter().any(|n| n == "Toss Noodle Bar"));
    }

    #[test]
    fn empty_prefix_enumerates_everything_once() {
        let mut t = sample();
        // Re-adding an identical name must not duplicate it.
        t.add("Museum");
        let mut all = t.keys_with_prefix("");
        all.sort();
        assert_eq!(
            all,
            vec![
                "Museum",
                "Peet's Coffee & Tea",
                "Top Dog",
                "Toss Noodle Bar",
                "top dog!"
            ]
        );
    }

    #[test]
    fn interior_node_is_not_terminal() {
        let mut t = PrefixTrie::new();
        t.add("market");
        assert!(!t.contains("mark"));
        assert!(t.contains("market"));
        assert_eq!(t.keys_with_prefix("mark"), vec!["market"]);
        assert_eq!(t.len(), 1);
    }
}
