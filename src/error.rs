use thiserror::Error;

use crate::builder::{MAX_LINKS, MAX_ROOMS};

/// Everything that can go wrong while describing, parsing, or solving a colony.
///
/// Structural variants are produced by [`ColonyBuilder`](crate::ColonyBuilder),
/// the parse variants by [`parse`](crate::parse), and [`Error::NoRoute`] by
/// [`Colony::solve`](crate::Colony::solve). No stage ever runs on the output of
/// a failed earlier stage.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The description declares no rooms at all.
    #[error("the description contains no rooms")]
    NoRooms,
    /// No room was marked as the start.
    #[error("no start room was declared")]
    NoStart,
    /// No room was marked as the end.
    #[error("no end room was declared")]
    NoEnd,
    /// More than one room was marked as the start.
    #[error("more than one start room was declared")]
    MultipleStart,
    /// More than one room was marked as the end.
    #[error("more than one end room was declared")]
    MultipleEnd,
    /// Two rooms share a name.
    #[error("duplicate room name `{0}`")]
    DuplicateRoom(String),
    /// A link names a room that was never declared.
    #[error("link references unknown room `{0}`")]
    UnknownRoom(String),
    /// A link connects a room to itself.
    #[error("room `{0}` is linked to itself")]
    SelfLink(String),
    /// The ant population is zero.
    #[error("ant count must be positive")]
    ZeroAnts,
    /// The description exceeds the room ceiling.
    #[error("too many rooms ({0}; the limit is {MAX_ROOMS})")]
    TooManyRooms(usize),
    /// The description exceeds the link ceiling.
    #[error("too many links ({0}; the limit is {MAX_LINKS})")]
    TooManyLinks(usize),
    /// The start and end rooms are not connected.
    #[error("no route from start to end")]
    NoRoute,
    /// The textual description is empty.
    #[error("empty input")]
    EmptyInput,
    /// The first significant line is not a positive integer.
    #[error("invalid ant count line `{0}`")]
    InvalidAntCount(String),
    /// A room name breaks the naming rules of the format.
    #[error("invalid room name `{0}`")]
    BadRoomName(String),
    /// A line in the room section fits neither the room grammar nor the
    /// marker rules.
    #[error("cannot parse room line `{0}`")]
    InvalidRoomLine(String),
    /// A line in the link section is not a link.
    #[error("cannot parse link line `{0}`")]
    InvalidLinkLine(String),
}
