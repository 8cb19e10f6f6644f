use itertools::Itertools;

/// Largest group total (part one).
pub fn largest_total(groups: &[Vec<u64>]) -> u64 {
    groups
        .iter()
        .map(|group| group.iter().sum())
        .max()
        .unwrap_or(0)
}

/// Sum of the three largest group totals (part two). With fewer than
/// three groups, every group counts.
pub fn top_three_total(groups: &[Vec<u64>]) -> u64 {
    groups
        .iter()
        .map(|group| group.iter().sum::<u64>())
        .sorted_unstable()
        .rev()
        .take(3)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The worked example from the puzzle statement.
    fn example() -> Vec<Vec<u64>> {
        vec![
            vec![1000, 2000, 3000],
            vec![4000],
            vec![5000, 6000],
            vec![7000, 8000, 9000],
            vec![10000],
        ]
    }

    #[test]
    fn largest_total_picks_the_best_group() {
        assert_eq!(largest_total(&example()), 24000);
        assert_eq!(largest_total(&[]), 0);
    }

    #[test]
    fn top_three_total_sums_the_best_three() {
        assert_eq!(top_three_total(&example()), 45000);
        assert_eq!(top_three_total(&[vec![5], vec![7]]), 12);
    }
}
