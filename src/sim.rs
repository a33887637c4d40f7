//! Turn-by-turn simulation of a chosen schedule.

use crate::colony::Colony;
use crate::route::Route;
use crate::schedule::Schedule;
use crate::solution::Turn;

/// One ant of the population.
struct Ant {
    id: usize,
    /// Index of the assigned route.
    route: usize,
    /// Index of the ant's current room within its route; 0 means still at the
    /// start.
    progress: usize,
    finished: bool,
}

/// Advance the whole population one room per turn until the schedule's turn
/// count elapses, enforcing single occupancy of every intermediate room.
///
/// Ants are numbered `1..=ants` in route order (route 0's ants first) and
/// processed in ascending id order each turn, so a room vacated earlier in a
/// turn is immediately available to a later ant; this fixed order is what
/// makes contention for a room deterministic. Moving into the end room is
/// never blocked. A correct schedule finishes every ant within its own turn
/// count, but an empty turn is tolerated: the counter still advances.
pub(crate) fn run(colony: &Colony, routes: &[Route], schedule: &Schedule) -> Vec<Turn> {
    let mut ants = Vec::with_capacity(colony.ants());
    for (route, &count) in schedule.ants_per_route.iter().enumerate() {
        for _ in 0..count {
            ants.push(Ant {
                id: ants.len() + 1,
                route,
                progress: 0,
                finished: false,
            });
        }
    }

    // start and end never appear here; their occupancy is unbounded
    let mut occupied = vec![false; colony.rooms().len()];
    let mut turns = Vec::with_capacity(schedule.turns);

    for _ in 0..schedule.turns {
        let mut moves = Vec::new();
        for ant in ants.iter_mut() {
            if ant.finished {
                continue;
            }
            let rooms = routes[ant.route].rooms();
            let next = rooms[ant.progress + 1];
            if next != colony.end() && occupied[next] {
                continue;
            }

            if ant.progress > 0 {
                occupied[rooms[ant.progress]] = false;
            }
            ant.progress += 1;
            if next == colony.end() {
                ant.finished = true;
            } else {
                occupied[next] = true;
            }
            moves.push((ant.id, next));
        }
        turns.push(Turn::new(moves));
    }

    turns
}
