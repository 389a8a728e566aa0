use derive_more::Display;

use aoclib::read_input;

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

    fn from_response(token: &str) -> Self {
        match token {
            "X" => Throw::Rock,
            "Y" => Throw::Paper,
            "Z" => Throw::Scissors,
            other => panic!("unexpected response token {:?}", other),
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

    fn outcome_score(&self, opponent: Throw) -> u32 {
        if *self == opponent {
            3
        } else if self.defeats() == opponent {
            6
        } else {
            0
        }
    }
}

fn round_score(line: &str) -> u32 {
    let mut tokens = line.split_whitespace();
    let opponent = Throw::from_opponent(tokens.next().unwrap());
    let response = Throw::from_response(tokens.next().unwrap());
    response.shape_score() + response.outcome_score(opponent)
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
