use clap::{Parser, ValueEnum};
use itertools::Itertools;
use nom::bytes::complete::tag;
use nom::character::complete;
use nom::combinator::map;
use nom::multi::separated_list1;
use nom::sequence::separated_pair;
use nom::IResult;

use aoclib::{DenseGrid, HasEmpty, Point};

const SOURCE: Point = Point { x: 500, y: 0 };

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Cell {
    Air,
    Rock,
    Sand,
}

impl HasEmpty for Cell {
    fn empty_value() -> Self {
        Self::Air
    }
}

impl Cell {
    fn glyph(&self) -> char {
        match self {
            Cell::Air => '.',
            Cell::Rock => '#',
            Cell::Sand => 'o',
        }
    }
}

#[derive(Debug)]
struct Cave {
    grid: DenseGrid<Cell>,
    resting: usize,
}

impl Cave {
    /// Trace one unit of sand from the source. Returns false once sand
    /// stops accumulating, either because this unit fell past the rocks or
    /// because the source itself is plugged.
    fn pour_one(&mut self) -> bool {
        if self.grid.get(SOURCE) != Some(Cell::Air) {
            return false;
        }
        let mut sand = SOURCE;
        loop {
            let mut moved = false;
            for candidate in [
                sand + Point { x: 0, y: 1 },
                sand + Point { x: -1, y: 1 },
                sand + Point { x: 1, y: 1 },
            ] {
                match self.grid.get(candidate) {
                    None => return false,
                    Some(Cell::Air) => {
                        sand = candidate;
                        moved = true;
                        break;
                    }
                    Some(_) => {}
                }
            }
            if !moved {
                self.grid[sand] = Cell::Sand;
                self.resting += 1;
                return true;
            }
        }
    }

    fn pour(&mut self) -> usize {
        while self.pour_one() {}
        self.resting
    }

    fn dump(&self) {
        self.grid.dump_with(|c| c.glyph())
    }
}

fn parse_path(s: &str) -> IResult<&str, Vec<Point>> {
    separated_list1(
        tag(" -> "),
        map(
            separated_pair(complete::i64, tag(","), complete::i64),
            |(x, y)| Point { x, y },
        ),
    )(s)
}

fn parse_cave(s: &str, mode: Mode) -> anyhow::Result<Cave> {
    let mut paths = Vec::new();
    for (i, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        let (remaining, path) =
            parse_path(line).map_err(|e| anyhow::anyhow!("error parsing line {}: {:?}", i + 1, e))?;
        if !remaining.trim().is_empty() {
            anyhow::bail!("unhandled input in line {}: {:?}", i + 1, remaining);
        }
        paths.push(path);
    }
    let mut min_x = SOURCE.x;
    let mut max_x = SOURCE.x;
    let mut max_y = SOURCE.y;
    for point in paths.iter().flatten() {
        min_x = std::cmp::min(min_x, point.x);
        max_x = std::cmp::max(max_x, point.x);
        max_y = std::cmp::max(max_y, point.y);
    }
    let floor_y = max_y + 2;
    // with a floor, the pile can spread at most floor_y cells either side
    // of the source before it plugs
    let (top_left, bottom_right) = match mode {
        Mode::Part1 => (Point::new(min_x, 0), Point::new(max_x, max_y)),
        Mode::Part2 => (
            Point::new(std::cmp::min(min_x, SOURCE.x - floor_y - 1), 0),
            Point::new(std::cmp::max(max_x, SOURCE.x + floor_y + 1), floor_y),
        ),
    };
    let mut grid = DenseGrid::new(top_left, bottom_right);
    for path in &paths {
        for (from, to) in path.iter().tuple_windows() {
            if from.x != to.x && from.y != to.y {
                anyhow::bail!("rock segment {} -> {} is not axis-aligned", from, to);
            }
            for point in from.line_to(*to) {
                grid.set(point, Cell::Rock);
            }
        }
    }
    if mode == Mode::Part2 {
        for point in Point::new(top_left.x, floor_y).line_to(Point::new(bottom_right.x, floor_y)) {
            grid.set(point, Cell::Rock);
        }
    }
    Ok(Cave { grid, resting: 0 })
}

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, value_enum)]
    mode: Mode,
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let stdin = std::io::stdin();
    let input = std::io::read_to_string(stdin)?;
    let mut cave = parse_cave(&input, args.mode)?;
    if args.verbose {
        println!("Before:");
        cave.dump();
    }
    let resting = cave.pour();
    println!("{}", resting);
    if args.verbose {
        println!("After:");
        cave.dump();
    }
    Ok(())
}
