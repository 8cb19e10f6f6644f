use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::hand::Hand;
use crate::outcome::Outcome;

/// How `candidate` fares against `reference`.
pub fn classify(reference: Hand, candidate: Hand) -> Outcome {
    if candidate == reference {
        Outcome::Draw
    } else if candidate == reference.beaten_by() {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

// (reference, wanted outcome) -> hand to play, derived once from classify
// over the full 3x3 product. Building it this way checks up front that
// every (hand, outcome) pair resolves to exactly one hand.
static RESOLUTION: Lazy<HashMap<(Hand, Outcome), Hand>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for reference in Hand::ALL {
        for candidate in Hand::ALL {
            let key = (reference, classify(reference, candidate));
            let prev = m.insert(key, candidate);
            assert!(prev.is_none(), "dominance cycle is not a permutation");
        }
    }
    assert_eq!(m.len(), Hand::ALL.len() * Outcome::ALL.len());
    m
});

/// The unique hand that stands in `outcome` to `reference`: the hand to
/// play so that the round against `reference` ends in `outcome`.
pub fn resolve(reference: Hand, outcome: Outcome) -> Hand {
    RESOLUTION[&(reference, outcome)]
}

/// Score for playing `candidate` against `reference`: outcome points
/// plus the points of the hand played.
pub fn score(reference: Hand, candidate: Hand) -> u64 {
    classify(reference, candidate).points() + candidate.points()
}
