use std::collections::HashMap;

use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::colony::Colony;
use crate::error::Error;
use crate::room::{Room, RoomId, RoomRole};

/// Ceiling on declared rooms; descriptions beyond this are rejected outright.
pub const MAX_ROOMS: usize = 20_000;
/// Ceiling on declared links.
pub const MAX_LINKS: usize = 200_000;

/// Incremental, validating constructor for a [`Colony`].
///
/// Rooms and links are added by name; the first rule violation is recorded and
/// every later call becomes a no-op, so call sites may chain freely and check
/// the outcome once at [`build`](ColonyBuilder::build).
pub struct ColonyBuilder {
    ants: usize,
    rooms: Vec<Room>,
    ids_by_name: HashMap<String, RoomId>,
    links: Vec<UnorderedPair<RoomId>>,
    start: Option<RoomId>,
    end: Option<RoomId>,
    invalid: Option<Error>,
}

impl ColonyBuilder {
    /// Start a description for a population of `ants`.
    pub fn new(ants: usize) -> Self {
        Self {
            ants,
            rooms: Vec::new(),
            ids_by_name: HashMap::new(),
            links: Vec::new(),
            start: None,
            end: None,
            invalid: None,
        }
    }

    fn fail(&mut self, error: Error) -> &mut Self {
        if self.invalid.is_none() {
            self.invalid = Some(error);
        }
        self
    }

    /// Declare a room. Names must be unique; at most one room may carry each of
    /// [`RoomRole::Start`] and [`RoomRole::End`].
    pub fn add_room(&mut self, name: &str, x: i64, y: i64, role: RoomRole) -> &mut Self {
        if self.invalid.is_some() {
            return self;
        }
        if self.ids_by_name.contains_key(name) {
            return self.fail(Error::DuplicateRoom(name.to_owned()));
        }
        match role {
            RoomRole::Start if self.start.is_some() => return self.fail(Error::MultipleStart),
            RoomRole::End if self.end.is_some() => return self.fail(Error::MultipleEnd),
            _ => {}
        }

        let id = self.rooms.len();
        self.ids_by_name.insert(name.to_owned(), id);
        self.rooms.push(Room {
            name: name.to_owned(),
            x,
            y,
            role,
        });
        match role {
            RoomRole::Start => self.start = Some(id),
            RoomRole::End => self.end = Some(id),
            RoomRole::Normal => {}
        }
        self
    }

    /// Declare an undirected corridor between two previously declared rooms.
    ///
    /// Self links are rejected. Duplicate links are tolerated but collapse to a
    /// single corridor: corridor capacity is bounded by the ant population, not
    /// by multiplicity.
    pub fn add_link(&mut self, a: &str, b: &str) -> &mut Self {
        if self.invalid.is_some() {
            return self;
        }
        let Some(&id_a) = self.ids_by_name.get(a) else {
            return self.fail(Error::UnknownRoom(a.to_owned()));
        };
        let Some(&id_b) = self.ids_by_name.get(b) else {
            return self.fail(Error::UnknownRoom(b.to_owned()));
        };
        if id_a == id_b {
            return self.fail(Error::SelfLink(a.to_owned()));
        }

        self.links.push(UnorderedPair(id_a, id_b));
        self
    }

    /// Validate the accumulated description and freeze it into a [`Colony`].
    pub fn build(&self) -> Result<Colony, Error> {
        if let Some(error) = &self.invalid {
            return Err(error.clone());
        }
        if self.rooms.is_empty() {
            return Err(Error::NoRooms);
        }
        if self.ants == 0 {
            return Err(Error::ZeroAnts);
        }
        if self.rooms.len() > MAX_ROOMS {
            return Err(Error::TooManyRooms(self.rooms.len()));
        }
        if self.links.len() > MAX_LINKS {
            return Err(Error::TooManyLinks(self.links.len()));
        }
        let start = self.start.ok_or(Error::NoStart)?;
        let end = self.end.ok_or(Error::NoEnd)?;

        let mut graph: UnGraphMap<RoomId, ()> =
            UnGraphMap::with_capacity(self.rooms.len(), self.links.len());
        for id in 0..self.rooms.len() {
            graph.add_node(id);
        }
        for link in &self.links {
            // parallel corridors collapse here
            graph.add_edge(link.0, link.1, ());
        }

        Ok(Colony {
            rooms: self.rooms.clone(),
            graph,
            ants: self.ants,
            start,
            end,
        })
    }
}
