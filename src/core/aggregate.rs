use crate::core::{Record, RunStats};

/// Walks the records in order, tracking the running position and the furthest
/// excursion on each side of the origin. Both extrema start at zero.
///
/// Accumulates in `i128`, so sums of `i64` values stay exact.
pub fn aggregate(records: &[Record]) -> RunStats {
    let mut position: i128 = 0;
    let mut max_right: i128 = 0;
    let mut max_left: i128 = 0;

    for record in records {
        position += i128::from(record.value);
        max_right = max_right.max(position);
        max_left = max_left.min(position);
    }

    RunStats {
        final_position: position,
        max_right,
        max_left,
        count: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    fn records(values: &[i64]) -> Vec<Record> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Record {
                index: i + 1,
                letter: if v < 0 { Direction::L } else { Direction::R },
                value: v,
            })
            .collect()
    }

    #[test]
    fn test_empty_input_is_all_zeros() {
        assert_eq!(aggregate(&[]), RunStats::default());
    }

    #[test]
    fn test_left_then_right() {
        let stats = aggregate(&records(&[-10, 5]));
        assert_eq!(
            stats,
            RunStats {
                final_position: -5,
                max_right: 0,
                max_left: -10,
                count: 2
            }
        );
    }

    #[test]
    fn test_return_to_origin() {
        let stats = aggregate(&records(&[3, -3]));
        assert_eq!(
            stats,
            RunStats {
                final_position: 0,
                max_right: 3,
                max_left: 0,
                count: 2
            }
        );
    }

    #[test]
    fn test_extrema_never_cross_zero() {
        let right_only = aggregate(&records(&[1, 2, 3]));
        assert_eq!(right_only.max_left, 0);
        assert_eq!(right_only.max_right, 6);

        let left_only = aggregate(&records(&[-1, -2, -3]));
        assert_eq!(left_only.max_right, 0);
        assert_eq!(left_only.max_left, -6);
    }

    #[test]
    fn test_order_matters_for_extrema() {
        let a = aggregate(&records(&[5, -8, 4]));
        let b = aggregate(&records(&[-8, 4, 5]));
        assert_eq!(a.final_position, b.final_position);
        assert_eq!((a.max_right, a.max_left), (5, -3));
        assert_eq!((b.max_right, b.max_left), (1, -8));
    }

    #[test]
    fn test_sum_past_i64_range_is_exact() {
        let stats = aggregate(&records(&[i64::MAX, 1, -1]));
        assert_eq!(stats.final_position, i128::from(i64::MAX));
        assert_eq!(stats.max_right, i128::from(i64::MAX) + 1);

        let stats = aggregate(&records(&[i64::MAX, i64::MAX]));
        assert_eq!(stats.final_position, 2 * i128::from(i64::MAX));

        let stats = aggregate(&records(&[-i64::MAX, -i64::MAX, 5]));
        assert_eq!(stats.max_left, -2 * i128::from(i64::MAX));
        assert_eq!(stats.final_position, -2 * i128::from(i64::MAX) + 5);
    }

    #[test]
    fn test_final_position_is_sum_of_values() {
        let values = [12, -7, 300, -45, 0, 9, -1000];
        let stats = aggregate(&records(&values));
        assert_eq!(
            stats.final_position,
            values.iter().map(|&v| i128::from(v)).sum::<i128>()
        );
    }
}
