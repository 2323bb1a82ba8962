//! 1-D merging of neighbouring line hits.

/// Merge sorted positions into groups whose consecutive members are at most
/// `max_gap` apart, and return the (floored) mean of each group.
///
/// A thick rule line lights up several adjacent rows or columns; this
/// collapses each run into one position.
pub fn merge_adjacent(sorted: &[usize], max_gap: usize) -> Vec<usize> {
    let mut merged = Vec::new();
    let mut iter = sorted.iter().copied();
    let Some(first) = iter.next() else {
        return merged;
    };
    let (mut sum, mut count, mut last) = (first, 1usize, first);
    for pos in iter {
        debug_assert!(pos >= last, "positions must be sorted");
        if pos - last <= max_gap {
            sum += pos;
            count += 1;
        } else {
            merged.push(sum / count);
            sum = pos;
            count = 1;
        }
        last = pos;
    }
    merged.push(sum / count);
    merged
}

#[cfg(test)]
mod tests {
    use super::merge_adjacent;

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(merge_adjacent(&[], 3).is_empty());
    }

    #[test]
    fn runs_collapse_to_floored_mean() {
        assert_eq!(merge_adjacent(&[10, 11, 12], 3), vec![11]);
        assert_eq!(merge_adjacent(&[10, 11], 3), vec![10]);
    }

    #[test]
    fn gap_is_measured_between_consecutive_members() {
        // 10 -> 13 -> 16 chains into one group even though 16 - 10 > 3.
        assert_eq!(merge_adjacent(&[10, 13, 16], 3), vec![13]);
        assert_eq!(merge_adjacent(&[10, 14, 30, 31], 3), vec![10, 14, 30]);
    }

    #[test]
    fn output_is_strictly_increasing() {
        let hits = [0, 1, 2, 7, 8, 40, 41, 42, 43, 99];
        let lines = merge_adjacent(&hits, 4);
        assert!(lines.windows(2).all(|w| w[0] < w[1]), "{lines:?}");
    }
}
