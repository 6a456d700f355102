use super::Recorder;

/// Shift larger elements right, then drop the key into the gap.
///
/// A compare step is only recorded when a shift follows it. The placement
/// of the key is always recorded, even when it lands where it started.
pub(crate) fn record(rec: &mut Recorder) {
    for i in 1..rec.len() {
        let key = rec.arr[i];
        let mut j = i;
        while j > 0 && rec.arr[j - 1] > key {
            rec.compare(j - 1, j);
            rec.arr[j] = rec.arr[j - 1];
            rec.mutate(j - 1, Some(j));
            j -= 1;
        }
        rec.arr[j] = key;
        rec.mutate(j, Some(i));
    }
}

#[cfg(test)]
mod tests {
    use crate::sort::test_support::shape;
    use crate::{generate, AlgorithmKind};

    #[test]
    fn equal_pair_only_gets_placement() {
        let trace = generate(&[2, 2], AlgorithmKind::Insertion);
        assert_eq!(
            shape(trace.steps()),
            vec![('S', None, None), ('M', Some(1), Some(1)), ('S', None, None)]
        );
        assert_eq!(trace.final_array(), &[2, 2]);
    }

    #[test]
    fn shift_pairs_then_placement() {
        let trace = generate(&[3, 1], AlgorithmKind::Insertion);
        assert_eq!(
            shape(trace.steps()),
            vec![
                ('S', None, None),
                ('C', Some(0), Some(1)),
                ('M', Some(0), Some(1)),
                ('M', Some(0), Some(1)),
                ('S', None, None),
            ]
        );
        // mid-shift snapshot duplicates the moved value
        assert_eq!(trace.steps()[2].arr, vec![3, 3]);
        assert_eq!(trace.steps()[3].arr, vec![1, 3]);
    }

    #[test]
    fn placement_count_is_n_minus_one() {
        let trace = generate(&[1, 2, 3, 4, 5], AlgorithmKind::Insertion);
        assert_eq!(trace.totals().swaps, 4);
        assert_eq!(trace.totals().compares, 0);
    }
}
