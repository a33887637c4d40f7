#![warn(missing_docs)]

//! # `formicarium`
//!
//! A solver for the classic ant colony routing puzzle: move a population of
//! ants from a start room to an end room through a network of corridors in as
//! few turns as possible, where every intermediate room holds at most one ant
//! at a time.
//!
//! Begin by describing the colony with a [`ColonyBuilder`] (or by parsing the
//! textual format via [`parse`]), build it into a validated [`Colony`], then
//! call [`solve()`](Colony::solve), consuming the colony and yielding a
//! [`Solution`] with the turn-by-turn move list.
//!
//! # Internals
//! The solver expresses the puzzle as a minimum-cost flow problem. Every room
//! is split into an entry and an exit node joined by a capacity-1 edge (the
//! population for start and end), so a unit of flow through a room *is* an
//! ant's exclusive claim on it; corridors become directed edge pairs between
//! the splits. Unit augmentations along shortest-cost residual paths (a
//! label-correcting search that tolerates the negative reverse edges of flow
//! cancellation) saturate a set of vertex-disjoint routes, which are then
//! read back out of the consumed residuals one unit at a time.
//!
//! Scheduling is a separate concern: a route of `L` hops carrying `k` ants
//! completes in `L + k - 1` turns, except the direct start-end corridor,
//! which moves any number of ants in a single turn. The solver picks the
//! subset of routes (exhaustively when there are few, by length-ascending
//! prefixes otherwise) and the per-route counts minimizing the worst
//! completion time, then simulates the result turn by turn to produce the
//! move list.

pub use builder::{ColonyBuilder, MAX_LINKS, MAX_ROOMS};
pub use colony::Colony;
pub use error::Error;
pub use room::{Room, RoomId, RoomRole};
pub use route::Route;
pub use solution::{Solution, Turn};

pub(crate) mod builder;
pub(crate) mod colony;
pub(crate) mod error;
pub(crate) mod flow;
pub mod parse;
pub(crate) mod room;
pub(crate) mod route;
pub(crate) mod schedule;
pub(crate) mod sim;
pub(crate) mod solution;
mod tests;
