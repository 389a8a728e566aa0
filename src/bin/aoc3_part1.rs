use std::collections::HashSet;

use aoclib::read_input;

fn priority(item: char) -> anyhow::Result<u32> {
    match item {
        'a'..='z' => Ok(item as u32 - 'a' as u32 + 1),
        'A'..='Z' => Ok(item as u32 - 'A' as u32 + 27),
        other => Err(anyhow::anyhow!("item {:?} has no priority", other)),
    }
}

fn shared_item(rucksack: &str) -> anyhow::Result<char> {
    let (front, back) = rucksack.split_at(rucksack.len() / 2);
    let front = front.chars().collect::<HashSet<_>>();
    back.chars()
        .find(|item| front.contains(item))
        .ok_or_else(|| anyhow::anyhow!("no item in both compartments of {:?}", rucksack))
}

fn priority_sum(input: &str) -> anyhow::Result<u32> {
    let mut total = 0;
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        total += priority(shared_item(line)?)?;
    }
    Ok(total)
}

fn main() -> anyhow::Result<()> {
    let input = read_input()?;
    println!("{}", priority_sum(&input)?);
    Ok(())
}
