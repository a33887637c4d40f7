//! Text front-end for the classic colony description format.
//!
//! The grammar is line oriented:
//!
//! ```text
//! 3               number of ants, first significant line
//! ##start         marks the next room as the start
//! tunnel 1 2      a room: name, x, y
//! ##end
//! exit 3 2
//! tunnel-exit     a link between two declared rooms
//! # anything      comment, ignored anywhere
//! ```
//!
//! Room names may not begin with `L` or `#` and may not contain `-` or
//! whitespace. All rooms must be declared before the first link; a room line
//! after a link is an error, as is a start/end marker not followed by a room.

use crate::builder::ColonyBuilder;
use crate::colony::Colony;
use crate::error::Error;
use crate::room::RoomRole;

enum Section {
    Rooms,
    Links,
}

/// Parse a full textual description into a validated [`Colony`].
pub fn parse_description(input: &str) -> Result<Colony, Error> {
    let mut lines = input.lines();

    let ants = loop {
        let Some(line) = lines.next() else {
            return Err(Error::EmptyInput);
        };
        if line.starts_with('#') {
            continue;
        }
        break line
            .parse::<usize>()
            .map_err(|_| Error::InvalidAntCount(line.to_owned()))?;
    };

    let mut builder = ColonyBuilder::new(ants);
    let mut section = Section::Rooms;
    let mut pending: Option<(RoomRole, &str)> = None;

    for line in lines {
        if line == "##start" || line == "##end" {
            // a marker must directly precede a room, and rooms precede links
            if pending.is_some() || matches!(section, Section::Links) {
                return Err(Error::InvalidRoomLine(line.to_owned()));
            }
            let role = if line == "##start" {
                RoomRole::Start
            } else {
                RoomRole::End
            };
            pending = Some((role, line));
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if let Some((a, b)) = split_link(line) {
            if let Some((_, marker)) = pending {
                return Err(Error::InvalidRoomLine(marker.to_owned()));
            }
            section = Section::Links;
            builder.add_link(a, b);
            continue;
        }

        match section {
            Section::Rooms => {
                let (name, x, y) = parse_room(line)?;
                let role = pending.take().map_or(RoomRole::Normal, |(role, _)| role);
                builder.add_room(name, x, y, role);
            }
            Section::Links => return Err(Error::InvalidLinkLine(line.to_owned())),
        }
    }
    if let Some((_, marker)) = pending {
        return Err(Error::InvalidRoomLine(marker.to_owned()));
    }

    builder.build()
}

/// A link line is exactly `name-name`. Anything else (extra dashes, spaces,
/// empty halves) is left for the room grammar or rejected there.
fn split_link(line: &str) -> Option<(&str, &str)> {
    let (a, b) = line.split_once('-')?;
    (!a.is_empty()
        && !b.is_empty()
        && !b.contains('-')
        && !a.contains(char::is_whitespace)
        && !b.contains(char::is_whitespace))
    .then_some((a, b))
}

fn parse_room(line: &str) -> Result<(&str, i64, i64), Error> {
    let mut parts = line.split_whitespace();
    let (Some(name), Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::InvalidRoomLine(line.to_owned()));
    };

    if name.starts_with('L') || name.starts_with('#') || name.contains('-') {
        return Err(Error::BadRoomName(name.to_owned()));
    }
    let x = x.parse().map_err(|_| Error::InvalidRoomLine(line.to_owned()))?;
    let y = y.parse().map_err(|_| Error::InvalidRoomLine(line.to_owned()))?;
    Ok((name, x, y))
}
