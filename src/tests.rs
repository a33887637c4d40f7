#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use crate::builder::{ColonyBuilder, MAX_LINKS, MAX_ROOMS};
    use crate::error::Error;
    use crate::parse::parse_description;
    use crate::room::{RoomId, RoomRole};
    use crate::solution::Solution;

    fn colony(
        ants: usize,
        rooms: &[(&str, RoomRole)],
        links: &[(&str, &str)],
    ) -> ColonyBuilder {
        let mut builder = ColonyBuilder::new(ants);
        for (i, (name, role)) in rooms.iter().enumerate() {
            builder.add_room(name, i as i64, 0, *role);
        }
        for (a, b) in links {
            builder.add_link(a, b);
        }
        builder
    }

    /// Replays the move list and asserts the core guarantees: every move is a
    /// single hop along a corridor, moves come in ascending ant id order, no
    /// two unfinished ants ever share an intermediate room, and every ant is
    /// in the end room once the turns run out.
    fn assert_well_formed(solution: &Solution) {
        let colony = solution.colony();
        let (start, end, ants) = (colony.start(), colony.end(), colony.ants());

        let mut position: Vec<Option<RoomId>> = vec![None; ants + 1];
        let mut arrived = vec![false; ants + 1];

        for turn in solution.turns() {
            let ids = turn.moves().iter().map(|&(ant, _)| ant).collect_vec();
            assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not ascending");

            for &(ant, room) in turn.moves() {
                assert!((1..=ants).contains(&ant));
                assert!(!arrived[ant], "ant {} moved after arriving", ant);

                let from = position[ant].unwrap_or(start);
                assert!(
                    colony.graph.contains_edge(from, room),
                    "ant {} teleported from {} to {}",
                    ant,
                    from,
                    room
                );

                if room == end {
                    arrived[ant] = true;
                    position[ant] = None;
                } else {
                    assert_ne!(room, start);
                    position[ant] = Some(room);
                }
            }

            let occupied = position.iter().flatten().copied().collect_vec();
            let distinct: HashSet<RoomId> = occupied.iter().copied().collect();
            assert_eq!(occupied.len(), distinct.len(), "two ants share a room");
        }

        assert!(
            (1..=ants).all(|ant| arrived[ant]),
            "not every ant reached the end within {} turns",
            solution.total_turns()
        );
    }

    #[test]
    fn start_linked_to_end_single_ant() {
        let solution = colony(
            1,
            &[("start", RoomRole::Start), ("end", RoomRole::End)],
            &[("start", "end")],
        )
        .build()
        .unwrap()
        .solve()
        .unwrap();

        assert_eq!(solution.total_turns(), 1);
        assert_eq!(solution.turns()[0].moves(), &[(1, 1)]);
        assert_eq!(solution.to_string(), "L1-end\n");
        assert_well_formed(&solution);
    }

    #[test]
    fn linear_chain_pipelines_three_ants() {
        let solution = colony(
            3,
            &[
                ("start", RoomRole::Start),
                ("a", RoomRole::Normal),
                ("b", RoomRole::Normal),
                ("end", RoomRole::End),
            ],
            &[("start", "a"), ("a", "b"), ("b", "end")],
        )
        .build()
        .unwrap()
        .solve()
        .unwrap();

        // one route of 3 hops carrying 3 ants: 3 + 3 - 1 turns
        assert_eq!(solution.total_turns(), 5);
        // the pipeline fills one ant per turn
        assert_eq!(solution.turns()[0].moves(), &[(1, 1)]);
        assert_eq!(solution.turns()[1].moves(), &[(1, 2), (2, 1)]);
        assert_well_formed(&solution);
    }

    #[test]
    fn disjoint_routes_split_the_population() {
        let solution = colony(
            4,
            &[
                ("start", RoomRole::Start),
                ("x", RoomRole::Normal),
                ("y", RoomRole::Normal),
                ("end", RoomRole::End),
            ],
            &[
                ("start", "x"),
                ("x", "end"),
                ("start", "y"),
                ("y", "end"),
            ],
        )
        .build()
        .unwrap()
        .solve()
        .unwrap();

        // two ants per 2-hop route: 2 + 2 - 1 turns
        assert_eq!(solution.total_turns(), 3);
        assert_eq!(solution.ants_per_route(), &[2, 2]);
        assert_well_formed(&solution);
    }

    #[test]
    fn disconnected_end_fails_before_simulation() {
        let result = colony(
            2,
            &[
                ("start", RoomRole::Start),
                ("a", RoomRole::Normal),
                ("island", RoomRole::Normal),
                ("end", RoomRole::End),
            ],
            &[("start", "a"), ("island", "end")],
        )
        .build()
        .unwrap()
        .solve();

        assert!(matches!(result, Err(Error::NoRoute)));
    }

    #[test]
    fn direct_corridor_absorbs_everyone_at_once() {
        // the direct corridor has population capacity, so every ant walks it
        // in parallel and the whole population arrives on turn one
        let solution = colony(
            10,
            &[
                ("start", RoomRole::Start),
                ("a1", RoomRole::Normal),
                ("a2", RoomRole::Normal),
                ("end", RoomRole::End),
            ],
            &[
                ("start", "end"),
                ("start", "a1"),
                ("a1", "a2"),
                ("a2", "end"),
            ],
        )
        .build()
        .unwrap()
        .solve()
        .unwrap();

        assert_eq!(solution.total_turns(), 1);
        assert_eq!(solution.turns()[0].moves().len(), 10);
        assert_well_formed(&solution);
    }

    #[test]
    fn direct_corridor_handles_large_populations() {
        // well beyond the flow unit ceiling; the corridor still takes every
        // ant in one turn, with no trailing empty turns
        let solution = colony(
            100,
            &[("start", RoomRole::Start), ("end", RoomRole::End)],
            &[("start", "end")],
        )
        .build()
        .unwrap()
        .solve()
        .unwrap();

        assert_eq!(solution.total_turns(), 1);
        assert_eq!(solution.routes().len(), 1);
        assert_eq!(solution.turns()[0].moves().len(), 100);
        assert_well_formed(&solution);
    }

    #[test]
    fn large_population_uses_the_detour_too() {
        // 12 ants, a 2-hop route and a 4-hop route; the short route alone
        // needs 2 + 12 - 1 = 13 turns, both together need 8
        let solution = colony(
            12,
            &[
                ("start", RoomRole::Start),
                ("s1", RoomRole::Normal),
                ("l1", RoomRole::Normal),
                ("l2", RoomRole::Normal),
                ("l3", RoomRole::Normal),
                ("end", RoomRole::End),
            ],
            &[
                ("start", "s1"),
                ("s1", "end"),
                ("start", "l1"),
                ("l1", "l2"),
                ("l2", "l3"),
                ("l3", "end"),
            ],
        )
        .build()
        .unwrap()
        .solve()
        .unwrap();

        assert_eq!(solution.total_turns(), 8);
        assert_eq!(solution.ants_per_route().iter().sum::<usize>(), 12);
        assert!(solution.ants_per_route().iter().all(|&n| n > 0));
        assert_well_formed(&solution);
    }

    #[test]
    fn extracted_routes_are_sound() {
        let solution = colony(
            6,
            &[
                ("start", RoomRole::Start),
                ("a", RoomRole::Normal),
                ("b", RoomRole::Normal),
                ("c", RoomRole::Normal),
                ("d", RoomRole::Normal),
                ("end", RoomRole::End),
            ],
            &[
                ("start", "a"),
                ("a", "end"),
                ("start", "b"),
                ("b", "c"),
                ("c", "end"),
                ("start", "d"),
                ("d", "c"),
                ("a", "b"),
            ],
        )
        .build()
        .unwrap()
        .solve()
        .unwrap();

        let colony = solution.colony();
        for route in solution.routes() {
            assert_eq!(route.rooms().first(), Some(&colony.start()));
            assert_eq!(route.rooms().last(), Some(&colony.end()));
            let distinct: HashSet<RoomId> = route.rooms().iter().copied().collect();
            assert_eq!(distinct.len(), route.rooms().len(), "route revisits a room");
        }
        assert_well_formed(&solution);
    }

    #[test]
    fn builder_rejects_structural_errors() {
        assert_eq!(
            ColonyBuilder::new(1).build().unwrap_err(),
            Error::NoRooms
        );
        assert_eq!(
            colony(0, &[("start", RoomRole::Start), ("end", RoomRole::End)], &[])
                .build()
                .unwrap_err(),
            Error::ZeroAnts
        );
        assert_eq!(
            colony(1, &[("start", RoomRole::Start)], &[])
                .build()
                .unwrap_err(),
            Error::NoEnd
        );
        assert_eq!(
            colony(1, &[("end", RoomRole::End)], &[])
                .build()
                .unwrap_err(),
            Error::NoStart
        );
        assert_eq!(
            colony(
                1,
                &[("a", RoomRole::Start), ("a", RoomRole::End)],
                &[]
            )
            .build()
            .unwrap_err(),
            Error::DuplicateRoom("a".to_owned())
        );
        assert_eq!(
            colony(
                1,
                &[("a", RoomRole::Start), ("b", RoomRole::Start)],
                &[]
            )
            .build()
            .unwrap_err(),
            Error::MultipleStart
        );
        assert_eq!(
            colony(
                1,
                &[("a", RoomRole::End), ("b", RoomRole::End)],
                &[]
            )
            .build()
            .unwrap_err(),
            Error::MultipleEnd
        );
        assert_eq!(
            colony(
                1,
                &[("a", RoomRole::Start), ("b", RoomRole::End)],
                &[("a", "c")]
            )
            .build()
            .unwrap_err(),
            Error::UnknownRoom("c".to_owned())
        );
        assert_eq!(
            colony(
                1,
                &[("a", RoomRole::Start), ("b", RoomRole::End)],
                &[("a", "a")]
            )
            .build()
            .unwrap_err(),
            Error::SelfLink("a".to_owned())
        );
    }

    #[test]
    fn builder_enforces_description_ceilings() {
        let mut builder = ColonyBuilder::new(1);
        builder.add_room("start", 0, 0, RoomRole::Start);
        builder.add_room("end", 1, 0, RoomRole::End);
        // one room over the ceiling in total
        for i in 0..MAX_ROOMS - 1 {
            builder.add_room(&format!("r{}", i), i as i64, 2, RoomRole::Normal);
        }
        assert_eq!(
            builder.build().unwrap_err(),
            Error::TooManyRooms(MAX_ROOMS + 1)
        );

        let mut builder = ColonyBuilder::new(1);
        builder.add_room("start", 0, 0, RoomRole::Start);
        builder.add_room("end", 1, 0, RoomRole::End);
        for _ in 0..=MAX_LINKS {
            builder.add_link("start", "end");
        }
        assert_eq!(
            builder.build().unwrap_err(),
            Error::TooManyLinks(MAX_LINKS + 1)
        );
    }

    #[test]
    fn duplicate_links_do_not_add_capacity() {
        // the corridor through m is declared three times over; m still only
        // admits one ant at a time
        let solution = colony(
            3,
            &[
                ("start", RoomRole::Start),
                ("m", RoomRole::Normal),
                ("end", RoomRole::End),
            ],
            &[
                ("start", "m"),
                ("start", "m"),
                ("m", "end"),
                ("m", "end"),
                ("m", "end"),
            ],
        )
        .build()
        .unwrap()
        .solve()
        .unwrap();

        // one 2-hop route, three ants: 2 + 3 - 1
        assert_eq!(solution.total_turns(), 4);
        assert_well_formed(&solution);
    }

    #[test]
    fn parses_and_solves_a_textual_description() {
        let input = "\
3
##start
start 0 3
# a comment between rooms
a 3 5
b 7 5
##end
end 10 3
start-a
a-b
# comments survive in the link section too
b-end
";
        let colony = parse_description(input).unwrap();
        assert_eq!(colony.ants(), 3);
        assert_eq!(colony.rooms().len(), 4);
        assert_eq!(colony.rooms()[colony.start()].name(), "start");
        assert_eq!(colony.rooms()[colony.end()].name(), "end");

        let solution = colony.solve().unwrap();
        assert_eq!(solution.total_turns(), 5);
        assert_eq!(solution.to_string().lines().next(), Some("L1-a"));
        assert_well_formed(&solution);
    }

    #[test]
    fn parser_rejects_malformed_descriptions() {
        assert_eq!(parse_description("").unwrap_err(), Error::EmptyInput);
        assert_eq!(
            parse_description("many\n").unwrap_err(),
            Error::InvalidAntCount("many".to_owned())
        );
        assert_eq!(
            parse_description("1\nLroom 0 0\n").unwrap_err(),
            Error::BadRoomName("Lroom".to_owned())
        );
        assert_eq!(
            parse_description("1\nroom 0 zero\n").unwrap_err(),
            Error::InvalidRoomLine("room 0 zero".to_owned())
        );
        // rooms may not follow links
        assert_eq!(
            parse_description("1\n##start\na 0 0\n##end\nb 1 0\na-b\nc 2 0\n").unwrap_err(),
            Error::InvalidLinkLine("c 2 0".to_owned())
        );
        // a marker must be followed by a room
        assert_eq!(
            parse_description("1\na 0 0\n##start\n").unwrap_err(),
            Error::InvalidRoomLine("##start".to_owned())
        );
        assert_eq!(
            parse_description("1\n##start\na 0 0\n##end\nb 1 0\na-zzz\n").unwrap_err(),
            Error::UnknownRoom("zzz".to_owned())
        );
        assert_eq!(
            parse_description("0\n##start\na 0 0\n##end\nb 1 0\na-b\n").unwrap_err(),
            Error::ZeroAnts
        );
    }

    #[test]
    fn every_ant_arrives_on_a_dense_colony() {
        // a 3x3 mesh between start and end with several crossing corridors
        let names = ["r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9"];
        let mut builder = ColonyBuilder::new(9);
        builder.add_room("start", 0, 0, RoomRole::Start);
        for (i, name) in names.iter().enumerate() {
            builder.add_room(name, 1 + i as i64 % 3, i as i64 / 3, RoomRole::Normal);
        }
        builder.add_room("end", 4, 1, RoomRole::End);
        for name in ["r1", "r4", "r7"] {
            builder.add_link("start", name);
        }
        for name in ["r3", "r6", "r9"] {
            builder.add_link(name, "end");
        }
        for row in [["r1", "r2", "r3"], ["r4", "r5", "r6"], ["r7", "r8", "r9"]] {
            builder.add_link(row[0], row[1]);
            builder.add_link(row[1], row[2]);
        }
        builder.add_link("r2", "r5");
        builder.add_link("r5", "r8");
        builder.add_link("r2", "r6");

        let solution = builder.build().unwrap().solve().unwrap();
        assert_well_formed(&solution);
        // three fully disjoint 4-hop rows exist, so 9 ants need 4 + 3 - 1 turns
        assert_eq!(solution.total_turns(), 6);
    }
}
