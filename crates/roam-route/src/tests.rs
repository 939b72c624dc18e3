//! Unit tests for roam-route.
//!
//! All graphs are hand-built event streams so tests run without any extract.

#[cfg(test)]
mod helpers {
    use roam_core::{NodeId, WayId};
    use roam_graph::{GraphBuilder, OsmEvent, RoadGraph};

    fn node(events: &mut Vec<OsmEvent>, id: i64, lon: f64, lat: f64) {
        events.push(OsmEvent::NodeOpen { id: NodeId(id), lon, lat });
        events.push(OsmEvent::NodeClose);
    }

    fn road(events: &mut Vec<OsmEvent>, id: i64, refs: &[i64]) {
        events.push(OsmEvent::WayOpen { id: WayId(id) });
        events.extend(refs.iter().map(|&r| OsmEvent::NodeRef(NodeId(r))));
        events.push(OsmEvent::Tag { key: "highway".into(), value: "residential".into() });
        events.push(OsmEvent::WayClose);
    }

    /// Two alternative paths from 1 to 5 plus a disconnected pair 6–7:
    ///
    ///   1 — 2 — 3          short arm: 1-2-3-5  (~334 m)
    ///   |       |
    ///   4 ————— 5          long arm:  1-4-5    (~648 m)
    ///
    ///   6 — 7              separate component, far away
    pub fn forked_map() -> RoadGraph {
        let mut events = Vec::new();
        node(&mut events, 1, 0.000, 0.0);
        node(&mut events, 2, 0.001, 0.0);
        node(&mut events, 3, 0.002, 0.0);
        node(&mut events, 4, 0.000, 0.003);
        node(&mut events, 5, 0.002, 0.001);
        node(&mut events, 6, 0.500, 0.5);
        node(&mut events, 7, 0.501, 0.5);
        road(&mut events, 10, &[1, 2, 3]);
        road(&mut events, 11, &[3, 5]);
        road(&mut events, 12, &[1, 4]);
        road(&mut events, 13, &[4, 5]);
        road(&mut events, 14, &[6, 7]);
        GraphBuilder::from_events(events).expect("forked map must build")
    }
}

// ── A* routing ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use roam_core::NodeId;
    use roam_graph::GraphError;

    use super::helpers::forked_map;
    use crate::{AStarRouter, RouteError, Router};

    #[test]
    fn trivial_same_node() {
        let graph = forked_map();
        let route = AStarRouter.route(&graph, NodeId(3), NodeId(3)).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.nodes, vec![NodeId(3)]);
        assert_eq!(route.distance_m, 0.0);
    }

    #[test]
    fn picks_the_short_arm() {
        let graph = forked_map();
        let route = AStarRouter.route(&graph, NodeId(1), NodeId(5)).unwrap();
        assert_eq!(
            route.nodes,
            vec![NodeId(1), NodeId(2), NodeId(3), NodeId(5)]
        );
    }

    #[test]
    fn reported_cost_matches_edge_sum_and_bounds() {
        let graph = forked_map();
        let route = AStarRouter.route(&graph, NodeId(1), NodeId(5)).unwrap();

        let edge_sum: f64 = route
            .nodes
            .windows(2)
            .map(|pair| graph.distance_m(pair[0], pair[1]).unwrap())
            .sum();
        assert!((route.distance_m - edge_sum).abs() < 1e-9);

        // Never shorter than the straight line between the endpoints.
        let crow = graph.distance_m(NodeId(1), NodeId(5)).unwrap();
        assert!(route.distance_m >= crow);
    }

    #[test]
    fn cost_is_symmetric_on_undirected_edges() {
        let graph = forked_map();
        let there = AStarRouter.route(&graph, NodeId(1), NodeId(5)).unwrap();
        let back = AStarRouter.route(&graph, NodeId(5), NodeId(1)).unwrap();
        assert!((there.distance_m - back.distance_m).abs() < 1e-9);
        // Node order reverses, cost does not.
        let mut reversed = back.nodes.clone();
        reversed.reverse();
        assert_eq!(reversed, there.nodes);
    }

    #[test]
    fn disconnected_components_report_no_route() {
        let graph = forked_map();
        let result = AStarRouter.route(&graph, NodeId(1), NodeId(6));
        assert!(matches!(result, Err(RouteError::NoRoute { .. })));
    }

    #[test]
    fn unknown_endpoint_is_a_graph_error() {
        let graph = forked_map();
        let result = AStarRouter.route(&graph, NodeId(1), NodeId(99));
        assert!(matches!(
            result,
            Err(RouteError::Graph(GraphError::NodeNotFound(_)))
        ));
    }

    #[test]
    fn every_hop_is_a_real_edge() {
        let graph = forked_map();
        let route = AStarRouter.route(&graph, NodeId(4), NodeId(3)).unwrap();
        for pair in route.nodes.windows(2) {
            let hops: Vec<NodeId> = graph.neighbors(pair[0]).unwrap().collect();
            assert!(hops.contains(&pair[1]), "{} -> {} is not an edge", pair[0], pair[1]);
        }
    }
}
