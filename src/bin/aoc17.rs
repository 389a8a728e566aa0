use std::collections::HashMap;

use clap::{Parser, ValueEnum};

const ROCKS_PART1: u64 = 2022;
const ROCKS_PART2: u64 = 1_000_000_000_000;
// settled rows the cycle fingerprint samples from the top of the pile
const PROFILE_ROWS: usize = 40;

// Shape rows bottom to top in a seven-column chamber; bit i is the cell i
// columns from the left wall. Every rock spawns with its left edge two
// columns in.
const SHAPES: &[&[u8]] = &[
    &[0b0111100],
    &[0b0001000, 0b0011100, 0b0001000],
    &[0b0011100, 0b0010000, 0b0010000],
    &[0b0000100, 0b0000100, 0b0000100, 0b0000100],
    &[0b0001100, 0b0001100],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jet {
    Left,
    Right,
}

fn parse_jets(input: &str) -> anyhow::Result<Vec<Jet>> {
    let jets = input
        .trim()
        .chars()
        .map(|c| match c {
            '<' => Ok(Jet::Left),
            '>' => Ok(Jet::Right),
            other => anyhow::bail!("unrecognized jet {:?}", other),
        })
        .collect::<anyhow::Result<Vec<Jet>>>()?;
    if jets.is_empty() {
        anyhow::bail!("the jet pattern is empty");
    }
    Ok(jets)
}

#[derive(Debug)]
struct Chamber {
    // one row of settled rock per entry, bottom row first
    rows: Vec<u8>,
    jets: Vec<Jet>,
    next_jet: usize,
    next_shape: usize,
}

impl Chamber {
    fn new(jets: Vec<Jet>) -> Self {
        Self {
            rows: Vec::new(),
            jets,
            next_jet: 0,
            next_shape: 0,
        }
    }

    fn height(&self) -> u64 {
        self.rows.len() as u64
    }

    fn collides(&self, shape: &[u8], bottom: usize) -> bool {
        shape
            .iter()
            .enumerate()
            .any(|(i, mask)| match self.rows.get(bottom + i) {
                Some(row) => row & mask != 0,
                None => false,
            })
    }

    /// Let the next rock fall, pushed by the jets, until it settles.
    fn drop_rock(&mut self) {
        let mut shape = SHAPES[self.next_shape].to_vec();
        self.next_shape = (self.next_shape + 1) % SHAPES.len();
        let mut bottom = self.rows.len() + 3;
        loop {
            let jet = self.jets[self.next_jet];
            self.next_jet = (self.next_jet + 1) % self.jets.len();
            // moving left is a right shift; bit 0 sits against the left wall
            let pushed = match jet {
                Jet::Left if shape.iter().all(|mask| mask & 0b0000001 == 0) => {
                    Some(shape.iter().map(|mask| mask >> 1).collect::<Vec<_>>())
                }
                Jet::Right if shape.iter().all(|mask| mask & 0b1000000 == 0) => {
                    Some(shape.iter().map(|mask| mask << 1).collect::<Vec<_>>())
                }
                _ => None,
            };
            if let Some(pushed) = pushed {
                if !self.collides(&pushed, bottom) {
                    shape = pushed;
                }
            }
            if bottom == 0 || self.collides(&shape, bottom - 1) {
                break;
            }
            bottom -= 1;
        }
        for (i, mask) in shape.iter().enumerate() {
            if self.rows.len() <= bottom + i {
                self.rows.push(0);
            }
            self.rows[bottom + i] |= *mask;
        }
    }

    fn top_profile(&self) -> Vec<u8> {
        let take = self.rows.len().min(PROFILE_ROWS);
        self.rows[self.rows.len() - take..].to_vec()
    }
}

/// Height of the pile after `rocks` rocks have settled.
///
/// The same next shape, next jet, and top of the pile always evolve the
/// same way, so the first repeated state gives a period, and whole periods
/// are skipped arithmetically.
fn tower_height(jets: Vec<Jet>, rocks: u64) -> u64 {
    let mut chamber = Chamber::new(jets);
    let mut states: HashMap<(usize, usize, Vec<u8>), (u64, u64)> = HashMap::new();
    let mut skipped_height = 0;
    let mut jumped = false;
    let mut dropped: u64 = 0;
    while dropped < rocks {
        chamber.drop_rock();
        dropped += 1;
        if !jumped {
            let key = (chamber.next_shape, chamber.next_jet, chamber.top_profile());
            if let Some(&(earlier_drops, earlier_height)) = states.get(&key) {
                let period = dropped - earlier_drops;
                let gain = chamber.height() - earlier_height;
                let whole_periods = (rocks - dropped) / period;
                log::debug!(
                    "pile repeats every {} rocks gaining {} rows, skipping {} repeats",
                    period,
                    gain,
                    whole_periods
                );
                dropped += whole_periods * period;
                skipped_height = whole_periods * gain;
                jumped = true;
            } else {
                states.insert(key, (dropped, chamber.height()));
            }
        }
    }
    chamber.height() + skipped_height
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
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let stdin = std::io::stdin();
    let input = std::io::read_to_string(stdin)?;
    let jets = parse_jets(&input)?;
    log::debug!("{} jets in the pattern", jets.len());
    let rocks = match args.mode {
        Mode::Part1 => ROCKS_PART1,
        Mode::Part2 => ROCKS_PART2,
    };
    println!("{}", tower_height(jets, rocks));
    Ok(())
}
