use clap::{Parser, ValueEnum};

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

/// Number of characters that have to be read before the first run of
/// `window` distinct bytes is complete.
fn find_marker(signal: &[u8], window: usize) -> Option<usize> {
    let mut seen = bit_set::BitSet::with_capacity(256);
    signal
        .windows(window)
        .position(|candidate| {
            seen.clear();
            candidate.iter().all(|b| seen.insert(*b as usize))
        })
        .map(|start| start + window)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let stdin = std::io::stdin();
    let input = std::io::read_to_string(stdin)?;
    let window = match args.mode {
        Mode::Part1 => 4,
        Mode::Part2 => 14,
    };
    let found = find_marker(input.trim().as_bytes(), window)
        .ok_or_else(|| anyhow::anyhow!("no run of {} distinct characters", window))?;
    println!("{}", found);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::find_marker;

    #[test]
    fn test_packet_markers() {
        assert_eq!(find_marker(b"mjqjpqmgbljsphdztnvjfqwrcgsmlb", 4), Some(7));
        assert_eq!(find_marker(b"bvwbjplbgvbhsrlpgdmjqwftvncz", 4), Some(5));
        assert_eq!(find_marker(b"nppdvjthqldpwncqszvftbrmjlhg", 4), Some(6));
        assert_eq!(find_marker(b"nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 4), Some(10));
        assert_eq!(find_marker(b"zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 4), Some(11));
    }

    #[test]
    fn test_message_markers() {
        assert_eq!(find_marker(b"mjqjpqmgbljsphdztnvjfqwrcgsmlb", 14), Some(19));
        assert_eq!(find_marker(b"bvwbjplbgvbhsrlpgdmjqwftvncz", 14), Some(23));
        assert_eq!(find_marker(b"nppdvjthqldpwncqszvftbrmjlhg", 14), Some(23));
        assert_eq!(
            find_marker(b"nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 14),
            Some(29)
        );
        assert_eq!(
            find_marker(b"zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 14),
            Some(26)
        );
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(find_marker(b"aaaaaaaa", 4), None);
        assert_eq!(find_marker(b"abc", 4), None);
    }
}
