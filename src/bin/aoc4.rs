use std::ops::RangeInclusive;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, PartialEq, Eq)]
struct AssignmentPair {
    first: RangeInclusive<u32>,
    second: RangeInclusive<u32>,
}

fn parse_section_range(s: &str) -> anyhow::Result<RangeInclusive<u32>> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| anyhow::anyhow!("section range {:?} is missing a -", s))?;
    Ok(start.parse()?..=end.parse()?)
}

impl FromStr for AssignmentPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s
            .split_once(',')
            .ok_or_else(|| anyhow::anyhow!("assignment pair {:?} is missing a ,", s))?;
        Ok(Self {
            first: parse_section_range(first)?,
            second: parse_section_range(second)?,
        })
    }
}

impl AssignmentPair {
    fn one_contains_the_other(&self) -> bool {
        let contains = |outer: &RangeInclusive<u32>, inner: &RangeInclusive<u32>| {
            outer.start() <= inner.start() && inner.end() <= outer.end()
        };
        contains(&self.first, &self.second) || contains(&self.second, &self.first)
    }

    fn overlaps(&self) -> bool {
        self.first.start() <= self.second.end() && self.second.start() <= self.first.end()
    }
}

fn count_pairs(input: &str, mode: Mode) -> anyhow::Result<usize> {
    let mut count = 0;
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let pair: AssignmentPair = line.parse()?;
        let keep = match mode {
            Mode::Part1 => pair.one_contains_the_other(),
            Mode::Part2 => pair.overlaps(),
        };
        if keep {
            count += 1;
        }
    }
    Ok(count)
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
    println!("{}", count_pairs(&input, args.mode)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{count_pairs, AssignmentPair, Mode};

    const EXAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

    #[test]
    fn test_containment() {
        let pair: AssignmentPair = "2-8,3-7".parse().unwrap();
        assert!(pair.one_contains_the_other());
        let pair: AssignmentPair = "6-6,4-6".parse().unwrap();
        assert!(pair.one_contains_the_other());
        let pair: AssignmentPair = "2-4,6-8".parse().unwrap();
        assert!(!pair.one_contains_the_other());
    }

    #[test]
    fn test_overlap() {
        let pair: AssignmentPair = "5-7,7-9".parse().unwrap();
        assert!(pair.overlaps());
        let pair: AssignmentPair = "2-3,4-5".parse().unwrap();
        assert!(!pair.overlaps());
    }

    #[test]
    fn test_bad_line() {
        assert!("2-4 6-8".parse::<AssignmentPair>().is_err());
        assert!("2,4,6,8".parse::<AssignmentPair>().is_err());
    }

    #[test]
    fn test_worked_example() {
        assert_eq!(count_pairs(EXAMPLE, Mode::Part1).unwrap(), 2);
        assert_eq!(count_pairs(EXAMPLE, Mode::Part2).unwrap(), 4);
    }
}
