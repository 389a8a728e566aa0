use std::str::FromStr;

use clap::{Parser, ValueEnum};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Instruction {
    Noop,
    Addx(i64),
}

impl Instruction {
    fn cycles(&self) -> u32 {
        match self {
            Instruction::Noop => 1,
            Instruction::Addx(_) => 2,
        }
    }
}

impl FromStr for Instruction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(' ') {
            None if s == "noop" => Ok(Instruction::Noop),
            Some(("addx", value)) => Ok(Instruction::Addx(value.parse()?)),
            _ => Err(anyhow::anyhow!("unknown instruction {:?}", s)),
        }
    }
}

/// The value of X during each cycle, indexed from cycle 1.
fn x_per_cycle(input: &str) -> anyhow::Result<Vec<i64>> {
    let mut values = Vec::new();
    let mut x = 1;
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let instruction: Instruction = line.parse()?;
        for _ in 0..instruction.cycles() {
            values.push(x);
        }
        if let Instruction::Addx(value) = instruction {
            x += value;
        }
    }
    Ok(values)
}

/// Signal strength sampled at cycles 20, 60, 100, 140, 180, and 220.
fn signal_strength_sum(values: &[i64]) -> i64 {
    values
        .iter()
        .take(220)
        .enumerate()
        .filter(|(index, _)| index % 40 == 19)
        .map(|(index, x)| {
            let cycle = index as i64 + 1;
            log::debug!("cycle {}: x = {}, strength = {}", cycle, x, cycle * x);
            cycle * x
        })
        .sum()
}

/// Draw the CRT: one pixel per cycle, 40 to a row, lit when the sprite
/// centered on X covers the pixel being drawn.
fn render(values: &[i64]) -> String {
    values
        .chunks(40)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(column, x)| {
                    if (column as i64 - x).abs() <= 1 {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
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
    let values = x_per_cycle(&input)?;
    match args.mode {
        Mode::Part1 => println!("{}", signal_strength_sum(&values)),
        Mode::Part2 => println!("{}", render(&values)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render, signal_strength_sum, x_per_cycle, Instruction};

    const EXAMPLE: &str = "\
addx 15\naddx -11\naddx 6\naddx -3\naddx 5\naddx -1\naddx -8\naddx 13\n\
addx 4\nnoop\naddx -1\naddx 5\naddx -1\naddx 5\naddx -1\naddx 5\naddx -1\n\
addx 5\naddx -1\naddx -35\naddx 1\naddx 24\naddx -19\naddx 1\naddx 16\n\
addx -11\nnoop\nnoop\naddx 21\naddx -15\nnoop\nnoop\naddx -3\naddx 9\n\
addx 1\naddx -3\naddx 8\naddx 1\naddx 5\nnoop\nnoop\nnoop\nnoop\nnoop\n\
addx -36\nnoop\naddx 1\naddx 7\nnoop\nnoop\nnoop\naddx 2\naddx 6\nnoop\n\
noop\nnoop\nnoop\nnoop\naddx 1\nnoop\nnoop\naddx 7\naddx 1\nnoop\n\
addx -13\naddx 13\naddx 7\nnoop\naddx 1\naddx -33\nnoop\nnoop\nnoop\n\
addx 2\nnoop\nnoop\nnoop\naddx 8\nnoop\naddx -1\naddx 2\naddx 1\nnoop\n\
addx 17\naddx -9\naddx 1\naddx 1\naddx -3\naddx 11\nnoop\nnoop\naddx 1\n\
noop\naddx 1\nnoop\nnoop\naddx -13\naddx -19\naddx 1\naddx 3\naddx 26\n\
addx -30\naddx 12\naddx -1\naddx 3\naddx 1\nnoop\nnoop\nnoop\naddx -9\n\
addx 18\naddx 1\naddx 2\nnoop\nnoop\naddx 9\nnoop\nnoop\nnoop\naddx -1\n\
addx 2\naddx -37\naddx 1\naddx 3\nnoop\naddx 15\naddx -21\naddx 22\n\
addx -6\naddx 1\nnoop\naddx 2\naddx 1\nnoop\naddx -10\nnoop\nnoop\n\
addx 20\naddx 1\naddx 2\naddx 2\naddx -6\naddx -11\nnoop\nnoop\nnoop\n";

    #[test]
    fn test_parse() {
        assert_eq!("noop".parse::<Instruction>().unwrap(), Instruction::Noop);
        assert_eq!(
            "addx -11".parse::<Instruction>().unwrap(),
            Instruction::Addx(-11)
        );
        assert!("nop".parse::<Instruction>().is_err());
    }

    #[test]
    fn test_small_program() {
        let values = x_per_cycle("noop\naddx 3\naddx -5\n").unwrap();
        assert_eq!(values, vec![1, 1, 1, 4, 4]);
    }

    #[test]
    fn test_sample_cycles() {
        // x stuck at 1: strengths are just the sampled cycle numbers
        let values = vec![1; 240];
        assert_eq!(
            signal_strength_sum(&values),
            20 + 60 + 100 + 140 + 180 + 220
        );
        // a long program still only samples through cycle 220
        let values = vec![1; 1000];
        assert_eq!(
            signal_strength_sum(&values),
            20 + 60 + 100 + 140 + 180 + 220
        );
    }

    #[test]
    fn test_render_tracks_sprite() {
        // sprite parked at the left edge lights the first three pixels
        let mut values = vec![1; 40];
        values.extend([38; 40]);
        assert_eq!(
            render(&values),
            "###.....................................\n\
             .....................................###"
        );
    }

    #[test]
    fn test_render_partial_row() {
        assert_eq!(render(&[1, 1, 5]), "##.");
    }

    #[test]
    fn test_worked_example_signal() {
        let values = x_per_cycle(EXAMPLE).unwrap();
        assert_eq!(values.len(), 240);
        assert_eq!(signal_strength_sum(&values), 13140);
    }

    #[test]
    fn test_worked_example_render() {
        let values = x_per_cycle(EXAMPLE).unwrap();
        assert_eq!(
            render(&values),
            "\
##..##..##..##..##..##..##..##..##..##..\n\
###...###...###...###...###...###...###.\n\
####....####....####....####....####....\n\
#####.....#####.....#####.....#####.....\n\
######......######......######......####\n\
#######.......#######.......#######....."
        );
    }
}
