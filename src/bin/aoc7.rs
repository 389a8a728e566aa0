use clap::{Parser, ValueEnum};
use nonempty::{nonempty, NonEmpty};

const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;

/// Total size of every directory in the transcript, root last.
///
/// The transcript visits each directory exactly once, so a stack of running
/// totals is enough: entering a directory pushes a fresh total, leaving it
/// folds the finished total into its parent. Directories still open at EOF
/// are unwound the same way.
fn directory_totals(input: &str) -> anyhow::Result<Vec<u64>> {
    let mut totals = Vec::new();
    let mut open: NonEmpty<u64> = nonempty![0];
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        if line == "$ ls" || line.starts_with("dir ") {
            continue;
        } else if line == "$ cd /" {
            // jumping back to the root closes every directory opened since
            while let Some(finished) = open.pop() {
                totals.push(finished);
                *open.last_mut() += finished;
            }
        } else if line == "$ cd .." {
            let finished = open
                .pop()
                .ok_or_else(|| anyhow::anyhow!("cd .. above the root"))?;
            totals.push(finished);
            *open.last_mut() += finished;
        } else if line.starts_with("$ cd ") {
            open.push(0);
        } else {
            let (size, _name) = line
                .split_once(' ')
                .ok_or_else(|| anyhow::anyhow!("unrecognized transcript line {:?}", line))?;
            let size: u64 = size
                .parse()
                .map_err(|_| anyhow::anyhow!("unrecognized transcript line {:?}", line))?;
            *open.last_mut() += size;
        }
    }
    while let Some(finished) = open.pop() {
        totals.push(finished);
        *open.last_mut() += finished;
    }
    totals.push(*open.last());
    Ok(totals)
}

fn small_directory_sum(totals: &[u64]) -> u64 {
    totals.iter().filter(|total| **total <= 100_000).sum()
}

fn smallest_freeing_deletion(totals: &[u64]) -> anyhow::Result<u64> {
    let used = totals
        .last()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("empty transcript"))?;
    let free = DISK_SIZE.saturating_sub(used);
    let shortfall = UPDATE_SIZE.saturating_sub(free);
    totals
        .iter()
        .copied()
        .filter(|total| *total >= shortfall)
        .min()
        .ok_or_else(|| anyhow::anyhow!("no directory is big enough to free {} bytes", shortfall))
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
    let totals = directory_totals(&input)?;
    match args.mode {
        Mode::Part1 => println!("{}", small_directory_sum(&totals)),
        Mode::Part2 => println!("{}", smallest_freeing_deletion(&totals)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{directory_totals, small_directory_sum, smallest_freeing_deletion};

    const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn test_directory_totals() {
        let totals = directory_totals(EXAMPLE).unwrap();
        assert_eq!(totals, vec![584, 94853, 24933642, 48381165]);
    }

    #[test]
    fn test_unbalanced_transcript_fails() {
        assert!(directory_totals("$ cd ..\n").is_err());
    }

    #[test]
    fn test_cd_root_mid_transcript() {
        let input = "\
$ cd /
$ ls
dir a
dir b
$ cd a
$ ls
100 x
$ cd /
$ cd b
$ ls
200 y
";
        let totals = directory_totals(input).unwrap();
        assert_eq!(totals, vec![100, 200, 300]);
    }

    #[test]
    fn test_small_directory_sum() {
        let totals = directory_totals(EXAMPLE).unwrap();
        assert_eq!(small_directory_sum(&totals), 95437);
    }

    #[test]
    fn test_smallest_freeing_deletion() {
        let totals = directory_totals(EXAMPLE).unwrap();
        assert_eq!(smallest_freeing_deletion(&totals).unwrap(), 24933642);
    }
}
