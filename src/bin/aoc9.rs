use std::collections::HashSet;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

use aoclib::Point;

#[derive(Debug, Clone, Copy)]
enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    fn delta(&self) -> Point {
        match self {
            Heading::Up => Point::new(0, 1),
            Heading::Down => Point::new(0, -1),
            Heading::Left => Point::new(-1, 0),
            Heading::Right => Point::new(1, 0),
        }
    }
}

#[derive(Debug)]
struct Motion {
    heading: Heading,
    steps: u32,
}

impl FromStr for Motion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (heading, steps) = s
            .split_once(' ')
            .ok_or_else(|| anyhow::anyhow!("motion {:?} is missing a space", s))?;
        let heading = match heading {
            "U" => Heading::Up,
            "D" => Heading::Down,
            "L" => Heading::Left,
            "R" => Heading::Right,
            other => anyhow::bail!("unknown heading {:?}", other),
        };
        Ok(Motion {
            heading,
            steps: steps.trim().parse()?,
        })
    }
}

/// Walk the head through every motion and count the positions the tail knot
/// rests on at least once. Each knot after the head stays put while it still
/// touches the knot ahead of it, and otherwise takes one diagonal-or-straight
/// step toward it.
fn tail_visit_count(input: &str, knots: usize) -> anyhow::Result<usize> {
    let mut rope = vec![Point::new(0, 0); knots];
    let mut visited = HashSet::new();
    if let Some(tail) = rope.last() {
        visited.insert(*tail);
    }
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let motion: Motion = line.parse()?;
        for _ in 0..motion.steps {
            rope[0] = rope[0] + motion.heading.delta();
            for i in 1..rope.len() {
                let leader = rope[i - 1];
                if !rope[i].is_adjacent(leader) {
                    rope[i] = rope[i].step_toward(leader);
                }
            }
            if let Some(tail) = rope.last() {
                visited.insert(*tail);
            }
        }
    }
    Ok(visited.len())
}

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_enum)]
    mode: Mode,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let stdin = std::io::stdin();
    let input = std::io::read_to_string(stdin)?;
    let knots = match args.mode {
        Mode::Part1 => 2,
        Mode::Part2 => 10,
    };
    println!("{}", tail_visit_count(&input, knots)?);
    Ok(())
}
