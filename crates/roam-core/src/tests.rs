//! Unit tests for roam-core.

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(-122.27, 37.87);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        // One degree of arc on a 6 371 km sphere ≈ 111 195 m.
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn distance_symmetric() {
        let a = GeoPoint::new(-122.30, 37.88);
        let b = GeoPoint::new(-122.22, 37.83);
        let ab = a.distance_m(b);
        let ba = b.distance_m(a);
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 0.0);
    }

    #[test]
    fn cardinal_bearings() {
        let origin = GeoPoint::new(0.0, 0.0);
        assert!((origin.bearing_deg(GeoPoint::new(0.0, 1.0)) - 0.0).abs() < 1e-9); // north
        assert!((origin.bearing_deg(GeoPoint::new(1.0, 0.0)) - 90.0).abs() < 1e-9); // east
        assert!((origin.bearing_deg(GeoPoint::new(0.0, -1.0)) - 180.0).abs() < 1e-9); // south
        assert!((origin.bearing_deg(GeoPoint::new(-1.0, 0.0)) - 270.0).abs() < 1e-9); // west
    }

    #[test]
    fn bearing_always_in_range() {
        let origin = GeoPoint::new(-122.27, 37.87);
        for (lon, lat) in [(-122.3, 37.9), (-122.2, 37.8), (-122.3, 37.8), (-122.2, 37.9)] {
            let b = origin.bearing_deg(GeoPoint::new(lon, lat));
            assert!((0.0..360.0).contains(&b), "bearing {b} out of range");
        }
    }
}

// ── Identifiers ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod ids {
    use std::collections::BTreeSet;

    use crate::{NodeId, WayId};

    #[test]
    fn display_and_raw() {
        let n = NodeId(35719234);
        assert_eq!(n.to_string(), "NodeId(35719234)");
        assert_eq!(n.raw(), 35719234);
        assert_eq!(WayId::from(7).raw(), 7);
    }

    #[test]
    fn ordered_set_member() {
        let set: BTreeSet<NodeId> = [NodeId(3), NodeId(1), NodeId(2)].into_iter().collect();
        let ordered: Vec<i64> = set.iter().map(|n| n.raw()).collect();
        assert_eq!(ordered, vec![1, 2, 3]);
    }
}

// ── Name normalization ────────────────────────────────────────────────────────

#[cfg(test)]
mod name {
    use crate::normalize;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Peet's Coffee & Tea"), "peets coffee  tea");
        assert_eq!(normalize("Shattuck Ave."), "shattuck ave");
    }

    #[test]
    fn digits_are_dropped() {
        assert_eq!(normalize("Highway 24"), "highway ");
    }

    #[test]
    fn empty_and_all_punctuation() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("#!?"), "");
    }

    #[test]
    fn idempotent() {
        let once = normalize("Top Dog (Durant)");
        assert_eq!(normalize(&once), once);
    }
}
