use std::fmt::{Display, Formatter};

/// Dense index of a room within its colony, assigned in declaration order.
pub type RoomId = usize;

/// Role a room plays in the colony.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RoomRole {
    /// An ordinary room; holds at most one ant at a time.
    #[default]
    Normal,
    /// The room every ant starts in. Occupancy is unbounded.
    Start,
    /// The room every ant must reach. Occupancy is unbounded.
    End,
}

/// One room of the colony.
///
/// The coordinates are display metadata carried through from the description;
/// they play no role in routing.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Room {
    pub(crate) name: String,
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) role: RoomRole,
}

impl Room {
    /// The unique display name of this room.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `(x, y)` coordinates given in the description.
    pub fn coordinates(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Whether this room is the start, the end, or an ordinary room.
    pub fn role(&self) -> RoomRole {
        self.role
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.x, self.y)
    }
}
