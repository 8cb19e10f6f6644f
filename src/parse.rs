use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::duel;
use crate::hand::Hand;
use crate::outcome::Outcome;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown hand token {0:?}")]
    UnknownHandToken(char),
    #[error("unknown outcome token {0:?}")]
    UnknownOutcomeToken(char),
    #[error("malformed round line {0:?}")]
    MalformedRound(String),
}

// The two token alphabets are closed: A/B/C for the opponent column,
// X/Y/Z for ours (hands in part one, wanted outcomes in part two).
static HAND_TOKENS: Lazy<HashMap<char, Hand>> = Lazy::new(|| {
    HashMap::from([
        ('A', Hand::Rock),
        ('B', Hand::Paper),
        ('C', Hand::Scissors),
        ('X', Hand::Rock),
        ('Y', Hand::Paper),
        ('Z', Hand::Scissors),
    ])
});

static OUTCOME_TOKENS: Lazy<HashMap<char, Outcome>> = Lazy::new(|| {
    HashMap::from([
        ('X', Outcome::Loss),
        ('Y', Outcome::Draw),
        ('Z', Outcome::Win),
    ])
});

pub fn hand_token(token: char) -> Result<Hand, ParseError> {
    HAND_TOKENS
        .get(&token)
        .copied()
        .ok_or(ParseError::UnknownHandToken(token))
}

pub fn outcome_token(token: char) -> Result<Outcome, ParseError> {
    OUTCOME_TOKENS
        .get(&token)
        .copied()
        .ok_or(ParseError::UnknownOutcomeToken(token))
}

// A round line is exactly two single-character tokens split by one space.
fn split_round(line: &str) -> Result<(char, char), ParseError> {
    let mut chars = line.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(' '), Some(second), None) => Ok((first, second)),
        _ => Err(ParseError::MalformedRound(line.to_string())),
    }
}

/// A round read as two hands: the opponent's and ours (part one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRound {
    pub theirs: Hand,
    pub ours: Hand,
}

impl MoveRound {
    pub fn points(self) -> u64 {
        duel::score(self.theirs, self.ours)
    }
}

impl FromStr for MoveRound {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = split_round(s)?;
        Ok(MoveRound {
            theirs: hand_token(first)?,
            ours: hand_token(second)?,
        })
    }
}

/// A round read as the opponent's hand plus the outcome we must reach
/// (part two). The hand to play is resolved, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeRound {
    pub theirs: Hand,
    pub target: Outcome,
}

impl OutcomeRound {
    pub fn points(self) -> u64 {
        let ours = duel::resolve(self.theirs, self.target);
        duel::score(self.theirs, ours)
    }
}

impl FromStr for OutcomeRound {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = split_round(s)?;
        Ok(OutcomeRound {
            theirs: hand_token(first)?,
            target: outcome_token(second)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_alphabets_map_onto_hands() {
        assert_eq!(hand_token('A'), Ok(Hand::Rock));
        assert_eq!(hand_token('Z'), Ok(Hand::Scissors));
        assert_eq!(hand_token('Q'), Err(ParseError::UnknownHandToken('Q')));
        assert_eq!(outcome_token('X'), Ok(Outcome::Loss));
        assert_eq!(outcome_token('A'), Err(ParseError::UnknownOutcomeToken('A')));
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in ["", "A", "A  Y", "A Y Z", "AY"] {
            assert_eq!(
                line.parse::<MoveRound>(),
                Err(ParseError::MalformedRound(line.to_string())),
                "line {line:?} should not parse",
            );
        }
    }

    #[test]
    fn example_strategy_guide_totals() {
        let lines = ["A Y", "B X", "C Z"];

        let part_one: u64 = lines
            .iter()
            .map(|line| line.parse::<MoveRound>().unwrap().points())
            .sum();
        assert_eq!(part_one, 15);

        let part_two: u64 = lines
            .iter()
            .map(|line| line.parse::<OutcomeRound>().unwrap().points())
            .sum();
        assert_eq!(part_two, 12);
    }
}
