use std::collections::HashSet;

use itertools::Itertools;

use aoclib::read_input;

fn priority(item: char) -> anyhow::Result<u32> {
    match item {
        'a'..='z' => Ok(item as u32 - 'a' as u32 + 1),
        'A'..='Z' => Ok(item as u32 - 'A' as u32 + 27),
        other => Err(anyhow::anyhow!("item {:?} has no priority", other)),
    }
}

fn badge_item(first: &str, second: &str, third: &str) -> anyhow::Result<char> {
    let second = second.chars().collect::<HashSet<_>>();
    let third = third.chars().collect::<HashSet<_>>();
    first
        .chars()
        .find(|item| second.contains(item) && third.contains(item))
        .ok_or_else(|| anyhow::anyhow!("no badge shared by {:?} and its group", first))
}

fn badge_priority_sum(input: &str) -> anyhow::Result<u32> {
    let mut total = 0;
    for (a, b, c) in input.lines().filter(|l| !l.trim().is_empty()).tuples() {
        total += priority(badge_item(a, b, c)?)?;
    }
    Ok(total)
}

fn main() -> anyhow::Result<()> {
    let input = read_input()?;
    println!("{}", badge_priority_sum(&input)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{badge_item, badge_priority_sum};

    #[test]
    fn test_badge_item() {
        assert_eq!(
            badge_item(
                "vJrwpWtwJgWrhcsFMMfFFhFp",
                "jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL",
                "PmmdzqPrVvPwwTWBwg"
            )
            .unwrap(),
            'r'
        );
    }

    #[test]
    fn test_worked_example() {
        let input = "vJrwpWtwJgWrhcsFMMfFFhFp\n\
                     jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL\n\
                     PmmdzqPrVvPwwTWBwg\n\
                     wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn\n\
                     ttgJtRGJQctTZtZT\n\
                     CrZsJsPPZsGzwwsLwLmpwMDw\n";
        assert_eq!(badge_priority_sum(input).unwrap(), 70);
    }
}
