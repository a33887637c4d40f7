use log::{debug, info};
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;

use crate::error::Error;
use crate::flow::FlowNetwork;
use crate::room::{Room, RoomId};
use crate::schedule::Schedule;
use crate::sim;
use crate::solution::Solution;

/// A validated colony description: rooms, corridors, the ant population, and
/// the designated start and end rooms.
///
/// [`Colony`]s are produced by a [`ColonyBuilder`](crate::ColonyBuilder) (or by
/// [`parse`](crate::parse) for the textual format), so every instance already
/// satisfies the structural rules: at least one room, a positive population,
/// exactly one start and one end, and no link to an unknown room.
#[derive(Debug)]
pub struct Colony {
    pub(crate) rooms: Vec<Room>,
    pub(crate) graph: UnGraphMap<RoomId, ()>,
    pub(crate) ants: usize,
    pub(crate) start: RoomId,
    pub(crate) end: RoomId,
}

impl Colony {
    /// The ant population to route.
    pub fn ants(&self) -> usize {
        self.ants
    }

    /// All rooms, indexed by [`RoomId`](crate::RoomId).
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The room every ant starts in.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// The room every ant must reach.
    pub fn end(&self) -> RoomId {
        self.end
    }

    /// Rooms adjacent to `room`, in insertion order of the underlying graph.
    pub fn neighbors(&self, room: RoomId) -> impl Iterator<Item = RoomId> + '_ {
        self.graph.neighbors(room)
    }

    /// Cheap reachability pre-check: can the end room be reached from the
    /// start at all, ignoring capacities?
    fn end_reachable(&self) -> bool {
        let mut bfs = Bfs::new(&self.graph, self.start);
        while let Some(room) = bfs.next(&self.graph) {
            if room == self.end {
                return true;
            }
        }
        false
    }

    /// Solves this colony, consuming `self` and returning the turn-by-turn
    /// move list routing every ant from start to end.
    ///
    /// # Pipeline
    /// 1. Reachability pre-check over the plain room graph; a disconnected
    ///    start/end pair fails with [`Error::NoRoute`] before any flow work.
    /// 2. Build the capacity-split flow network (one entry and one exit node
    ///    per room) and saturate it with unit augmentations along
    ///    shortest-cost residual paths.
    /// 3. Extract one concrete room sequence per flow unit.
    /// 4. Pick the route subset and per-route ant counts minimizing the turn
    ///    count.
    /// 5. Simulate that schedule one turn at a time under the
    ///    single-occupancy rule.
    pub fn solve(self) -> Result<Solution, Error> {
        if !self.end_reachable() {
            return Err(Error::NoRoute);
        }

        let mut network = FlowNetwork::new(&self);
        debug!(
            "flow network built: {} nodes, {} edges",
            network.node_count(),
            network.edge_count()
        );

        let pushed = network.saturate();
        if pushed == 0 {
            // the pre-check passed, so this indicates a defect rather than bad input
            return Err(Error::NoRoute);
        }
        let routes = network.extract_routes(pushed);
        debug!("pushed {} flow units, extracted {} routes", pushed, routes.len());

        let schedule = Schedule::plan(&routes, self.ants);
        info!(
            "routing {} ants over {} of {} routes in {} turns",
            self.ants,
            schedule.ants_per_route.iter().filter(|&&n| n > 0).count(),
            routes.len(),
            schedule.turns
        );

        let turns = sim::run(&self, &routes, &schedule);
        Ok(Solution::new(self, routes, schedule, turns))
    }
}
