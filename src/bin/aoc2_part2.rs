use derive_more::Display;

use aoclib::read_input;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
enum Goal {
    Lose,
    Draw,
    Win,
}

impl Goal {
    fn from_token(token: &str) -> Self {
        match token {
            "X" => Goal::Lose,
            "Y" => Goal::Draw,
            "Z" => Goal::Win,
            other => panic!("unexpected goal token {:?}", other),
        }
    }

    fn outcome_score(&self) -> u32 {
        match self {
            Goal::Lose => 0,
            Goal::Draw => 3,
            Goal::Win => 6,
        }
    }
}

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
enum Throw {
    Rock,
    Paper,
    Scissors,
}

impl Throw {
    fn from_opponent(token: &str) -> Self {
        match token {
            "A" => Throw::Rock,
            "B" => Throw::Paper,
            "C" => Throw::Scissors,
            other => panic!("unexpected opponent token {:?}", other),
        }
    }

    fn shape_score(&self) -> u32 {
        match self {
            Throw::Rock => 1,
            Throw::Paper => 2,
            Throw::Scissors => 3,
        }
    }

    fn defeats(&self) -> Throw {
        match self {
            Throw::Rock => Throw::Scissors,
            Throw::Paper => Throw::Rock,
            Throw::Scissors => Throw::Paper,
        }
    }

    fn defeated_by(&self) -> Throw {
        match self {
            Throw::Rock => Throw::Paper,
            Throw::Paper => Throw::Scissors,
            Throw::Scissors => Throw::Rock,
        }
    }
}

fn round_score(line: &str) -> u32 {
    let mut tokens = line.split_whitespace();
    let opponent = Throw::from_opponent(tokens.next().unwrap());
    let goal = Goal::from_token(tokens.next().unwrap());
    let response = match goal {
        Goal::Lose => opponent.defeats(),
        Goal::Draw => opponent,
        Goal::Win => opponent.defeated_by(),
    };
    response.shape_score() + goal.outcome_score()
}

fn total_score(input: &str) -> u32 {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(round_score)
        .sum()
}

fn main() -> anyhow::Result<()> {
    let input = read_input()?;
    println!("{}", total_score(&input));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{round_score, total_score};

    #[test]
    fn test_all_rounds() {
        assert_eq!(round_score("A X"), 3);
        assert_eq!(round_score("A Y"), 4);
        assert_eq!(round_score("A Z"), 8);
        assert_eq!(round_score("B X"), 1);
        assert_eq!(round_score("B Y"), 5);
        assert_eq!(round_score("B Z"), 9);
        assert_eq!(round_score("C X"), 2);
        assert_eq!(round_score("C Y"), 6);
        assert_eq!(round_score("C Z"), 7);
    }

    #[test]
    fn test_worked_example() {
        assert_eq!(total_score("A Y\nB X\nC Z\n"), 12);
    }
}
