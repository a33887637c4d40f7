//! The capacity-split flow network behind route discovery.
//!
//! Every room becomes two flow nodes, an entry and an exit, joined by an edge
//! whose capacity enforces the single-occupancy rule (1 for ordinary rooms,
//! the whole population for start and end). Corridors become directed edges
//! of corridor capacity between exits and entries. Each edge is stored next
//! to its reverse in one arena, so edge `e` and `e ^ 1` are always a pair and
//! residual bookkeeping never touches a pointer.

use std::collections::VecDeque;

use itertools::Itertools;
use log::trace;

use crate::colony::Colony;
use crate::room::{RoomId, RoomRole};
use crate::route::Route;

/// Index of a flow node: `2 * room` for the entry half, `2 * room + 1` for
/// the exit half.
pub(crate) type FlowNodeId = usize;
/// Index into the edge arena. The paired reverse edge is always `id ^ 1`.
pub(crate) type FlowEdgeId = usize;

/// Ceiling on pushed flow units. Independent of the population: extra
/// vertex-disjoint routes stop helping the schedule long before this, and the
/// bound keeps pathological descriptions from ballooning the search.
pub(crate) const MAX_ROUTES: usize = 32;

const fn entry_node(room: RoomId) -> FlowNodeId {
    room * 2
}

const fn exit_node(room: RoomId) -> FlowNodeId {
    room * 2 + 1
}

#[derive(Clone, Debug)]
struct FlowEdge {
    to: FlowNodeId,
    /// Remaining pushable units. Only this field mutates after construction.
    capacity: usize,
    /// 1 on room-entry edges, 0 on corridor edges; reverse edges negate it,
    /// so shortest-cost augmenting paths favor fewer rooms.
    cost: i64,
}

/// Residual flow network over a [`Colony`], with the room set split into
/// entry/exit node pairs.
pub(crate) struct FlowNetwork {
    edges: Vec<FlowEdge>,
    /// Outgoing edge ids per node, forward and reverse alike.
    adjacency: Vec<Vec<FlowEdgeId>>,
    source: FlowNodeId,
    sink: FlowNodeId,
}

impl FlowNetwork {
    /// Build the network for `colony`. Deterministic given the colony's room
    /// and link ordering; capacities are all in `1..=ants`.
    pub(crate) fn new(colony: &Colony) -> Self {
        let ants = colony.ants();
        let mut network = Self {
            edges: Vec::with_capacity(2 * (colony.rooms().len() + 2 * colony.graph.edge_count())),
            adjacency: vec![Vec::new(); colony.rooms().len() * 2],
            source: entry_node(colony.start()),
            sink: exit_node(colony.end()),
        };

        for (id, room) in colony.rooms().iter().enumerate() {
            let capacity = match room.role() {
                RoomRole::Normal => 1,
                RoomRole::Start | RoomRole::End => ants,
            };
            network.add_edge(entry_node(id), exit_node(id), capacity, 1);
        }
        for (a, b, ()) in colony.graph.all_edges() {
            network.add_edge(exit_node(a), entry_node(b), ants, 0);
            network.add_edge(exit_node(b), entry_node(a), ants, 0);
        }

        network
    }

    pub(crate) fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Append a forward edge and its zero-capacity reverse as an arena pair.
    fn add_edge(&mut self, from: FlowNodeId, to: FlowNodeId, capacity: usize, cost: i64) {
        self.adjacency[from].push(self.edges.len());
        self.edges.push(FlowEdge { to, capacity, cost });
        self.adjacency[to].push(self.edges.len());
        self.edges.push(FlowEdge {
            to: from,
            capacity: 0,
            cost: -cost,
        });
    }

    /// Label-correcting shortest-path search (queue-relaxed Bellman-Ford) over
    /// positive residual capacities. Tolerates the negative-cost reverse edges
    /// introduced by earlier augmentations. Returns the parent-edge table if
    /// the sink was reached.
    fn shortest_augmenting_path(&self) -> Option<Vec<FlowEdgeId>> {
        let nodes = self.adjacency.len();
        let mut dist = vec![i64::MAX; nodes];
        let mut parent = vec![FlowEdgeId::MAX; nodes];
        let mut in_queue = vec![false; nodes];
        let mut queue = VecDeque::with_capacity(nodes);

        dist[self.source] = 0;
        in_queue[self.source] = true;
        queue.push_back(self.source);

        while let Some(node) = queue.pop_front() {
            in_queue[node] = false;
            let here = dist[node];
            for &id in &self.adjacency[node] {
                let edge = &self.edges[id];
                if edge.capacity == 0 {
                    continue;
                }
                let there = here + edge.cost;
                if there < dist[edge.to] {
                    dist[edge.to] = there;
                    parent[edge.to] = id;
                    if !in_queue[edge.to] {
                        in_queue[edge.to] = true;
                        queue.push_back(edge.to);
                    }
                }
            }
        }

        (dist[self.sink] < i64::MAX).then_some(parent)
    }

    /// Push exactly one unit of flow along the parent chain ending at the sink.
    fn push_unit(&mut self, parent: &[FlowEdgeId]) {
        let mut node = self.sink;
        while node != self.source {
            let id = parent[node];
            self.edges[id].capacity -= 1;
            self.edges[id ^ 1].capacity += 1;
            node = self.edges[id ^ 1].to;
        }
    }

    /// Repeatedly find a shortest-cost augmenting path and push one unit along
    /// it, until no path remains or [`MAX_ROUTES`] units were pushed. Returns
    /// the number of units pushed.
    pub(crate) fn saturate(&mut self) -> usize {
        let mut pushed = 0;
        while pushed < MAX_ROUTES {
            let Some(parent) = self.shortest_augmenting_path() else {
                break;
            };
            self.push_unit(&parent);
            pushed += 1;
            trace!("augmenting path {} pushed", pushed);
        }
        pushed
    }

    /// BFS from the source following only forward edges that carried flow
    /// (positive residual on the paired reverse edge). Returns the edge path
    /// to the sink, if one is still consumed.
    fn consumed_path(&self) -> Option<Vec<FlowEdgeId>> {
        let nodes = self.adjacency.len();
        let mut parent = vec![FlowEdgeId::MAX; nodes];
        let mut visited = vec![false; nodes];
        let mut queue = VecDeque::from([self.source]);
        visited[self.source] = true;

        while let Some(node) = queue.pop_front() {
            for &id in &self.adjacency[node] {
                // forward arena slots are even; reverse edges never carry
                // extractable flow of their own
                if id % 2 != 0 {
                    continue;
                }
                let to = self.edges[id].to;
                if visited[to] || self.edges[id ^ 1].capacity == 0 {
                    continue;
                }
                visited[to] = true;
                parent[to] = id;
                queue.push_back(to);
            }
        }

        if !visited[self.sink] {
            return None;
        }
        let mut path = Vec::new();
        let mut node = self.sink;
        while node != self.source {
            let id = parent[node];
            path.push(id);
            node = self.edges[id ^ 1].to;
        }
        path.reverse();
        Some(path)
    }

    /// Recover up to `units` concrete room sequences from the consumed
    /// residuals, un-consuming each recovered unit so the next walk finds a
    /// different route.
    ///
    /// If fewer than `units` routes can be recovered the shorter list is
    /// returned as-is; a partial route is never fabricated. Repeated room
    /// sequences collapse to one route: interior rooms admit a single unit, so
    /// only the direct start-end corridor can repeat, and one route carries
    /// its whole multiplicity.
    pub(crate) fn extract_routes(&mut self, units: usize) -> Vec<Route> {
        let mut routes = Vec::with_capacity(units);
        for _ in 0..units {
            let Some(path) = self.consumed_path() else {
                break;
            };
            let mut rooms: Vec<RoomId> = vec![self.source / 2];
            for &id in &path {
                // restore this unit so the next extraction takes another route
                self.edges[id].capacity += 1;
                self.edges[id ^ 1].capacity -= 1;

                // entry and exit halves collapse back into one room
                let room = self.edges[id].to / 2;
                if rooms.last() != Some(&room) {
                    rooms.push(room);
                }
            }
            routes.push(Route::new(rooms));
        }
        routes.into_iter().unique().collect()
    }
}
