use aoclib::read_input;

fn group_totals(input: &str) -> Vec<u64> {
    let mut totals = Vec::new();
    let mut current: Option<u64> = None;
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            if let Some(total) = current.take() {
                totals.push(total);
            }
        } else {
            let value = line.parse::<u64>().unwrap();
            *current.get_or_insert(0) += value;
        }
    }
    if let Some(total) = current {
        totals.push(total);
    }
    totals
}

fn top_three_total(input: &str) -> u64 {
    let mut totals = group_totals(input);
    totals.sort_unstable();
    totals.iter().rev().take(3).sum()
}

fn main() -> anyhow::Result<()> {
    let input = read_input()?;
    println!("{}", top_three_total(&input));
    Ok(())
}
