use anyhow::Context;
use nom::{
    branch::alt,
    character::complete::{line_ending, multispace0, space0},
    combinator::eof,
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{self, final_parser},
    multi::parse_separated_terminated,
    parser_ext::ParserExt,
    tag::complete::tag,
};

use crate::{
    library::automaton::{
        CellSet, Coordinate, Generation, Hex, HexDirection, Neighborhood, HEX_TILES,
    },
    options::SimulationOptions,
};

use HexDirection::*;

const EXHIBIT_DAYS: usize = 100;

#[inline]
fn parse_nothing(input: &str) -> IResult<&str, (), ErrorTree<&str>> {
    Ok((input, ()))
}

/// Parse a single direction. The diagonals are tried first, so that "se"
/// isn't read as a stray "s" followed by "e".
fn parse_hex_direction(input: &str) -> IResult<&str, HexDirection, ErrorTree<&str>> {
    alt((
        tag("se").value(Southeast),
        tag("sw").value(Southwest),
        tag("ne").value(Northeast),
        tag("nw").value(Northwest),
        tag("e").value(East),
        tag("w").value(West),
    ))
    .context("direction")
    .parse(input)
}

/// Parse a line of directions, with no separators between them, into the
/// tile at the end of the walk from the reference tile. Only trailing spaces
/// may come between the last direction and the end of the line.
fn parse_direction_list(input: &str) -> IResult<&str, Hex, ErrorTree<&str>> {
    parse_separated_terminated(
        parse_hex_direction,
        parse_nothing,
        space0.terminated(alt((line_ending, eof))),
        || Hex::ORIGIN,
        |tile, direction| tile.offset(direction),
    )
    .context("direction list")
    .parse(input)
}

/// Parse every direction list and flip the tile each one lands on. The
/// result is the set of tiles that have been flipped to black; with no
/// lines at all, nothing is flipped.
fn parse_tile_set(input: &str) -> Result<CellSet<Hex>, ErrorTree<final_parser::Location>> {
    if input.trim().is_empty() {
        return Ok(CellSet::new());
    }

    final_parser(
        parse_separated_terminated(
            parse_direction_list,
            multispace0,
            multispace0.all_consuming(),
            CellSet::new,
            |mut tiles, tile| {
                tiles.toggle(tile);
                tiles
            },
        )
        .preceded_by(multispace0)
        .context("all instructions"),
    )(input)
}

pub fn part1(input: &str, _options: &SimulationOptions) -> anyhow::Result<usize> {
    let tiles = parse_tile_set(input).context("Failed to parse tile set")?;
    Ok(tiles.count_active())
}

pub fn part2(input: &str, options: &SimulationOptions) -> anyhow::Result<usize> {
    let tiles = parse_tile_set(input).context("Failed to parse tile set")?;
    let neighborhood = Neighborhood::hex();

    let exhibit = options.driver().run_for(
        tiles,
        options.steps_or(EXHIBIT_DAYS),
        |tiles| tiles.step(&neighborhood, &HEX_TILES),
    );

    Ok(exhibit.count_active())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const EXAMPLE: &str = "\
        sesenwnenenewseeswwswswwnenewsewsw\n\
        neeenesenwnwwswnenewnwwsewnenwseswesw\n\
        seswneswswsenwwnwse\n\
        nwnwneseeswswnenewneswwnewseswneseene\n\
        swweswneswnenwsewnwneneseenw\n\
        eesenwseswswnenwswnwnwsewwnwsene\n\
        sewnenenenesenwsewnenwwwse\n\
        wenwwweseeeweswwwnwwe\n\
        wsweesenenewnwwnwsenewsenwwsesesenwne\n\
        neeswseenwwswnwswswnw\n\
        nenwswwsewswnenenewsenwsenwnesesenew\n\
        enewnwewneswsewnwswenweswnenwsenwsw\n\
        sweneswneswneneenwnewenewwneswswnese\n\
        swwesenesewenwneswnwwneseswwne\n\
        enesenwswwswneneswsenwnewswseenwsese\n\
        wnwnesenesenenwwnenwsewesewsesesew\n\
        nenewswnwewswnenesenwnesewesw\n\
        eneswnwswnwsenenwnwnwwseeswneewsenese\n\
        neswnwewnwnwseenwseesewsenwsweewe\n\
        wseweeenwnesenwwwswnew\n\
    ";

    fn days(steps: usize) -> SimulationOptions {
        SimulationOptions {
            steps: Some(steps),
            ..SimulationOptions::default()
        }
    }

    #[test_case("esenee" => Hex { q: 3, r: 0 })]
    #[test_case("nwwswee" => Hex::ORIGIN)]
    #[test_case("esew" => Hex { q: 0, r: 1 })]
    fn direction_list(input: &str) -> Hex {
        let (tail, tile) = parse_direction_list(input).unwrap();
        assert_eq!(tail, "");
        tile
    }

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE, &SimulationOptions::default()).unwrap(), 10);
    }

    #[test]
    fn no_trailing_newline() {
        assert_eq!(part1("esew\nesew\nee", &SimulationOptions::default()).unwrap(), 1);
    }

    #[test]
    fn zero_days_is_the_initial_layout() {
        let initial = parse_tile_set(EXAMPLE).unwrap();
        let options = days(0);
        let after = options
            .driver()
            .run_for(initial.clone(), 0, |tiles| {
                tiles.step(&Neighborhood::hex(), &HEX_TILES)
            });

        assert_eq!(after, initial);
        assert_eq!(part2(EXAMPLE, &options).unwrap(), 10);
    }

    #[test_case(1 => 15)]
    #[test_case(2 => 12)]
    #[test_case(3 => 25)]
    #[test_case(10 => 37)]
    #[test_case(20 => 132)]
    fn exhibit_days(count: usize) -> usize {
        part2(EXAMPLE, &days(count)).unwrap()
    }

    #[test]
    fn test_part2() {
        assert_eq!(part2(EXAMPLE, &SimulationOptions::default()).unwrap(), 2208);
    }

    #[test]
    fn bad_direction() {
        assert!(part1("esenee\nnsew\n", &SimulationOptions::default()).is_err());
    }

    #[test_case("e w\n"; "space")]
    #[test_case("ne\tsw\n"; "tab")]
    fn separator_inside_a_line(input: &str) {
        assert!(part1(input, &SimulationOptions::default()).is_err());
    }

    #[test]
    fn trailing_spaces_and_crlf() {
        assert_eq!(
            part1("e  \r\nee\r\n\r\n", &SimulationOptions::default()).unwrap(),
            2
        );
    }

    #[test_case(""; "empty")]
    #[test_case("  \n\n"; "blank lines")]
    fn no_instructions_flips_nothing(input: &str) {
        let options = SimulationOptions::default();

        assert_eq!(part1(input, &options).unwrap(), 0);
        assert_eq!(part2(input, &options).unwrap(), 0);
    }
}
