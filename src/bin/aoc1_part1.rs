use std::cmp::max;

use aoclib::read_input;

fn best_group_total(input: &str) -> u64 {
    let mut best = 0;
    let mut current = 0;
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            best = max(best, current);
            current = 0;
        } else {
            current += line.parse::<u64>().unwrap();
        }
    }
    // the last group may end at EOF instead of a blank line
    max(best, current)
}

fn main() -> anyhow::Result<()> {
    let input = read_input()?;
    println!("{}", best_group_total(&input));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::best_group_total;

    #[test]
    fn test_two_groups() {
        assert_eq!(best_group_total("3\n1\n2\n\n4\n5\n"), 9);
    }

    #[test]
    fn test_trailing_group_counts() {
        assert_eq!(best_group_total("10\n\n1\n1\n\n30"), 30);
    }

    #[test]
    fn test_worked_example() {
        let input = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";
        assert_eq!(best_group_total(input), 24000);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(best_group_total(""), 0);
    }
}
