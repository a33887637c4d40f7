use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::colony::Colony;
use crate::room::RoomId;
use crate::route::Route;
use crate::schedule::Schedule;

/// One discrete tick of the simulation: which ants moved, and where to.
pub struct Turn {
    moves: Vec<(usize, RoomId)>,
}

impl Turn {
    pub(crate) fn new(moves: Vec<(usize, RoomId)>) -> Self {
        Self { moves }
    }

    /// The moves performed this turn as `(ant id, destination)` pairs, in
    /// ascending ant id order.
    pub fn moves(&self) -> &[(usize, RoomId)] {
        &self.moves
    }

    /// Whether no ant moved this turn.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// The outcome of solving a [`Colony`]: the routes used, the per-route ant
/// counts, and the full turn-by-turn move list.
///
/// The [`Display`] impl renders the moves in the classic format, one line per
/// non-empty turn of space-separated `L<id>-<room>` pairs.
pub struct Solution {
    colony: Colony,
    routes: Vec<Route>,
    ants_per_route: Vec<usize>,
    turns: Vec<Turn>,
}

impl Solution {
    pub(crate) fn new(
        colony: Colony,
        routes: Vec<Route>,
        schedule: Schedule,
        turns: Vec<Turn>,
    ) -> Self {
        Self {
            colony,
            routes,
            ants_per_route: schedule.ants_per_route,
            turns,
        }
    }

    /// The colony this solution was computed for.
    pub fn colony(&self) -> &Colony {
        &self.colony
    }

    /// Every route recovered from the flow network, used or not.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Ants sent down each route, aligned with [`routes`](Solution::routes).
    pub fn ants_per_route(&self) -> &[usize] {
        &self.ants_per_route
    }

    /// The simulated turns, including any trailing empty ones.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Total number of scheduled turns.
    pub fn total_turns(&self) -> usize {
        self.turns.len()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for turn in &self.turns {
            if turn.is_empty() {
                continue;
            }
            let line = turn
                .moves()
                .iter()
                .map(|&(ant, room)| format!("L{}-{}", ant, self.colony.rooms()[room].name()))
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
