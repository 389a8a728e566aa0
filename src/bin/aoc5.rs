use clap::{Parser, ValueEnum};
use nom::bytes::complete::tag;
use nom::character::complete;
use nom::combinator::map;
use nom::sequence::{preceded, tuple};
use nom::IResult;

#[derive(Debug, PartialEq, Eq)]
struct Step {
    count: usize,
    source: usize,
    dest: usize,
}

fn parse_step(s: &str) -> IResult<&str, Step> {
    map(
        tuple((
            preceded(tag("move "), complete::u32),
            preceded(tag(" from "), complete::u32),
            preceded(tag(" to "), complete::u32),
        )),
        |(count, source, dest)| Step {
            count: count as usize,
            source: source as usize,
            dest: dest as usize,
        },
    )(s)
}

#[derive(Debug, PartialEq, Eq)]
struct Stacks(Vec<Vec<char>>);

impl Stacks {
    /// Read the crate diagram. Crate letters sit at character offsets 1, 5,
    /// 9, ... and the label row pins down stacks that start out empty.
    fn parse(diagram: &str) -> Self {
        let mut stacks: Vec<Vec<char>> = Vec::new();
        for line in diagram.lines() {
            for (offset, ch) in line.chars().enumerate() {
                if offset % 4 != 1 {
                    continue;
                }
                let column = offset / 4;
                if (ch.is_ascii_alphabetic() || ch.is_ascii_digit()) && stacks.len() <= column {
                    stacks.resize_with(column + 1, Vec::new);
                }
                if ch.is_ascii_alphabetic() {
                    stacks[column].push(ch);
                }
            }
        }
        // the diagram lists each stack top first
        for stack in stacks.iter_mut() {
            stack.reverse();
        }
        Self(stacks)
    }

    fn stack_mut(&mut self, id: usize) -> anyhow::Result<&mut Vec<char>> {
        let index = id
            .checked_sub(1)
            .ok_or_else(|| anyhow::anyhow!("stack ids are 1-based"))?;
        self.0
            .get_mut(index)
            .ok_or_else(|| anyhow::anyhow!("no stack {}", id))
    }

    fn apply(&mut self, step: &Step, preserve_order: bool) -> anyhow::Result<()> {
        let source = self.stack_mut(step.source)?;
        if source.len() < step.count {
            anyhow::bail!(
                "stack {} has {} crates, cannot lift {}",
                step.source,
                source.len(),
                step.count
            );
        }
        let mut lifted = source.split_off(source.len() - step.count);
        if !preserve_order {
            lifted.reverse();
        }
        self.stack_mut(step.dest)?.append(&mut lifted);
        Ok(())
    }

    /// Top crate of every stack, a space where a stack is empty.
    fn tops(&self) -> String {
        self.0
            .iter()
            .map(|stack| stack.last().copied().unwrap_or(' '))
            .collect()
    }
}

fn parse_input(input: &str) -> anyhow::Result<(Stacks, Vec<Step>)> {
    let (diagram, instructions) = input
        .split_once("\n\n")
        .ok_or_else(|| anyhow::anyhow!("no blank line between diagram and steps"))?;
    let stacks = Stacks::parse(diagram);
    let mut steps = Vec::new();
    for line in instructions.lines().filter(|l| !l.trim().is_empty()) {
        let (remainder, step) =
            parse_step(line).map_err(|e| anyhow::anyhow!("bad step {:?}: {:?}", line, e))?;
        if !remainder.trim().is_empty() {
            anyhow::bail!("trailing junk in step {:?}", line);
        }
        steps.push(step);
    }
    Ok((stacks, steps))
}

fn rearrange(input: &str, mode: Mode) -> anyhow::Result<String> {
    let (mut stacks, steps) = parse_input(input)?;
    for step in &steps {
        stacks.apply(step, mode == Mode::Part2)?;
    }
    Ok(stacks.tops())
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
    println!("{}", rearrange(&input, args.mode)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_step, rearrange, Mode, Stacks, Step};

    const EXAMPLE: &str = concat!(
        "    [D]    \n",
        "[N] [C]    \n",
        "[Z] [M] [P]\n",
        " 1   2   3 \n",
        "\n",
        "move 1 from 2 to 1\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 1 from 1 to 2\n",
    );

    #[test]
    fn test_parse_step() {
        assert_eq!(
            parse_step("move 13 from 2 to 9").unwrap().1,
            Step {
                count: 13,
                source: 2,
                dest: 9
            }
        );
        assert!(parse_step("shift 1 from 2 to 3").is_err());
    }

    #[test]
    fn test_parse_diagram() {
        let stacks = Stacks::parse("    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 ");
        assert_eq!(
            stacks,
            Stacks(vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']])
        );
    }

    #[test]
    fn test_one_at_a_time() {
        assert_eq!(rearrange(EXAMPLE, Mode::Part1).unwrap(), "CMZ");
    }

    #[test]
    fn test_in_one_lift() {
        assert_eq!(rearrange(EXAMPLE, Mode::Part2).unwrap(), "MCD");
    }

    #[test]
    fn test_lifting_too_many_fails() {
        let input = "[A]\n 1 \n\nmove 2 from 1 to 1\n";
        assert!(rearrange(input, Mode::Part1).is_err());
    }

    #[test]
    fn test_emptied_stack_keeps_its_column() {
        let input = "[A]    \n[B] [C]\n 1   2 \n\nmove 2 from 1 to 2\n";
        assert_eq!(rearrange(input, Mode::Part1).unwrap(), " B");
        assert_eq!(rearrange(input, Mode::Part2).unwrap(), " A");
    }
}
