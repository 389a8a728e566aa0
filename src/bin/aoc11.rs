use std::collections::VecDeque;

use clap::{Parser, ValueEnum};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete;
use nom::combinator::map;
use nom::multi::separated_list1;
use nom::sequence::{delimited, preceded, tuple};
use nom::IResult;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Operation {
    Add(u64),
    Multiply(u64),
    Square,
}

impl Operation {
    fn apply(&self, old: u64) -> u64 {
        match self {
            Operation::Add(value) => old + value,
            Operation::Multiply(value) => old * value,
            Operation::Square => old * old,
        }
    }
}

#[derive(Debug, Clone)]
struct Monkey {
    items: VecDeque<u64>,
    operation: Operation,
    divisor: u64,
    on_true: usize,
    on_false: usize,
}

fn parse_operation(s: &str) -> IResult<&str, Operation> {
    preceded(
        tag("new = old "),
        alt((
            map(tag("* old"), |_| Operation::Square),
            map(preceded(tag("* "), complete::u64), Operation::Multiply),
            map(preceded(tag("+ "), complete::u64), Operation::Add),
        )),
    )(s)
}

fn parse_monkey(s: &str) -> IResult<&str, Monkey> {
    map(
        tuple((
            delimited(tag("Monkey "), complete::u64, tag(":\n")),
            delimited(
                tag("  Starting items: "),
                separated_list1(tag(", "), complete::u64),
                tag("\n"),
            ),
            delimited(tag("  Operation: "), parse_operation, tag("\n")),
            delimited(tag("  Test: divisible by "), complete::u64, tag("\n")),
            delimited(
                tag("    If true: throw to monkey "),
                complete::u64,
                tag("\n"),
            ),
            preceded(tag("    If false: throw to monkey "), complete::u64),
        )),
        |(_, items, operation, divisor, on_true, on_false)| Monkey {
            items: items.into(),
            operation,
            divisor,
            on_true: on_true as usize,
            on_false: on_false as usize,
        },
    )(s)
}

fn parse_monkeys(s: &str) -> anyhow::Result<Vec<Monkey>> {
    let (remainder, monkeys) = separated_list1(tag("\n\n"), parse_monkey)(s)
        .map_err(|e| anyhow::anyhow!("invalid monkey: {:?}", e))?;
    if !remainder.trim().is_empty() {
        anyhow::bail!("unhandled input {:?}", remainder);
    }
    for (index, monkey) in monkeys.iter().enumerate() {
        for target in [monkey.on_true, monkey.on_false] {
            if target >= monkeys.len() {
                anyhow::bail!("monkey {} throws to nonexistent monkey {}", index, target);
            }
            if target == index {
                anyhow::bail!("monkey {} throws to itself", index);
            }
        }
    }
    Ok(monkeys)
}

/// Run the keep-away rounds and multiply the two highest inspection counts.
///
/// Without the worry division every value is reduced modulo the product of
/// all the divisibility tests, which never changes any throw decision.
fn monkey_business(mut monkeys: Vec<Monkey>, rounds: u32, worry_decays: bool) -> u64 {
    let modulus: u64 = monkeys.iter().map(|m| m.divisor).product();
    let mut inspections = vec![0u64; monkeys.len()];
    for round in 0..rounds {
        for i in 0..monkeys.len() {
            while let Some(item) = monkeys[i].items.pop_front() {
                inspections[i] += 1;
                let mut worry = monkeys[i].operation.apply(item);
                if worry_decays {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }
                let target = if worry % monkeys[i].divisor == 0 {
                    monkeys[i].on_true
                } else {
                    monkeys[i].on_false
                };
                monkeys[target].items.push_back(worry);
            }
        }
        log::debug!("inspections after round {}: {:?}", round + 1, inspections);
    }
    inspections.sort_unstable();
    inspections.iter().rev().take(2).product()
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
    let monkeys = parse_monkeys(&input)?;
    let business = match args.mode {
        Mode::Part1 => monkey_business(monkeys, 20, true),
        Mode::Part2 => monkey_business(monkeys, 10_000, false),
    };
    println!("{}", business);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{monkey_business, parse_monkeys, parse_operation, Operation};

    const EXAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    #[test]
    fn test_parse_operation() {
        assert_eq!(
            parse_operation("new = old * old").unwrap().1,
            Operation::Square
        );
        assert_eq!(
            parse_operation("new = old + 6").unwrap().1,
            Operation::Add(6)
        );
    }

    #[test]
    fn test_parse_monkeys() {
        let monkeys = parse_monkeys(EXAMPLE).unwrap();
        assert_eq!(monkeys.len(), 4);
        assert_eq!(monkeys[0].items, std::collections::VecDeque::from([79, 98]));
        assert_eq!(monkeys[2].divisor, 13);
        assert_eq!(monkeys[3].on_true, 0);
    }

    #[test]
    fn test_bad_target_fails() {
        let input = EXAMPLE.replace("throw to monkey 2", "throw to monkey 9");
        assert!(parse_monkeys(&input).is_err());
    }

    #[test]
    fn test_twenty_rounds_with_decay() {
        let monkeys = parse_monkeys(EXAMPLE).unwrap();
        assert_eq!(monkey_business(monkeys, 20, true), 10605);
    }

    #[test]
    fn test_ten_thousand_rounds() {
        let monkeys = parse_monkeys(EXAMPLE).unwrap();
        assert_eq!(monkey_business(monkeys, 10_000, false), 2713310158);
    }
}
