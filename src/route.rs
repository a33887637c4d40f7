use crate::room::RoomId;

/// A concrete start-to-end room sequence recovered from the saturated flow
/// network. Immutable once extracted.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Route {
    rooms: Vec<RoomId>,
}

impl Route {
    pub(crate) fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms }
    }

    /// The full room sequence, start and end inclusive.
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of moves an ant needs to walk this route end to end.
    pub fn hops(&self) -> usize {
        self.rooms.len() - 1
    }
}
