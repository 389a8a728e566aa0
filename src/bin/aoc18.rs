use std::collections::{HashSet, VecDeque};
use std::str::FromStr;

use clap::{Parser, ValueEnum};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
struct Cube {
    x: i32,
    y: i32,
    z: i32,
}

impl FromStr for Cube {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.trim().split(',').collect::<Vec<_>>();
        match fields.as_slice() {
            [x, y, z] => Ok(Cube {
                x: x.parse()?,
                y: y.parse()?,
                z: z.parse()?,
            }),
            _ => anyhow::bail!("cube {:?} needs exactly three coordinates", s),
        }
    }
}

impl Cube {
    fn neighbors(&self) -> [Cube; 6] {
        let Cube { x, y, z } = *self;
        [
            Cube { x: x + 1, y, z },
            Cube { x: x - 1, y, z },
            Cube { x, y: y + 1, z },
            Cube { x, y: y - 1, z },
            Cube { x, y, z: z + 1 },
            Cube { x, y, z: z - 1 },
        ]
    }
}

fn parse_droplet(input: &str) -> anyhow::Result<HashSet<Cube>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Every face not shared with another cube, air pockets included.
fn total_surface(droplet: &HashSet<Cube>) -> usize {
    droplet
        .iter()
        .map(|cube| {
            cube.neighbors()
                .iter()
                .filter(|n| !droplet.contains(n))
                .count()
        })
        .sum()
}

/// Faces reachable by steam expanding from outside the droplet. The steam
/// floods a bounding box one cell wider than the droplet on every side, so
/// it can wrap around corners but never enter a sealed pocket.
fn exterior_surface(droplet: &HashSet<Cube>) -> anyhow::Result<usize> {
    let first = droplet
        .iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("the droplet has no cubes"))?;
    let mut min = *first;
    let mut max = *first;
    for cube in droplet {
        min.x = min.x.min(cube.x);
        min.y = min.y.min(cube.y);
        min.z = min.z.min(cube.z);
        max.x = max.x.max(cube.x);
        max.y = max.y.max(cube.y);
        max.z = max.z.max(cube.z);
    }
    min = Cube {
        x: min.x - 1,
        y: min.y - 1,
        z: min.z - 1,
    };
    max = Cube {
        x: max.x + 1,
        y: max.y + 1,
        z: max.z + 1,
    };
    log::debug!("steam fills {:?} through {:?}", min, max);
    let in_bounds = |c: &Cube| {
        (min.x..=max.x).contains(&c.x)
            && (min.y..=max.y).contains(&c.y)
            && (min.z..=max.z).contains(&c.z)
    };
    let mut seen = HashSet::from([min]);
    let mut queue = VecDeque::from([min]);
    let mut faces = 0;
    while let Some(steam) = queue.pop_front() {
        for neighbor in steam.neighbors() {
            if droplet.contains(&neighbor) {
                faces += 1;
            } else if in_bounds(&neighbor) && seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    Ok(faces)
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
    let droplet = parse_droplet(&input)?;
    log::debug!("the droplet has {} cubes", droplet.len());
    let area = match args.mode {
        Mode::Part1 => total_surface(&droplet),
        Mode::Part2 => exterior_surface(&droplet)?,
    };
    println!("{}", area);
    Ok(())
}
