use super::Recorder;

/// Lomuto quicksort, pivot = last element of the range.
///
/// Ranges are kept on an explicit stack so adversarial inputs cannot blow
/// the call stack. Pushing the right half before the left keeps the
/// left-then-right visiting order of the recursive formulation.
pub(crate) fn record(rec: &mut Recorder) {
    let mut pending = vec![(0, rec.len() - 1)];
    while let Some((lo, hi)) = pending.pop() {
        if lo >= hi {
            continue;
        }
        let p = partition(rec, lo, hi);
        pending.push((p + 1, hi));
        if p > lo {
            pending.push((lo, p - 1));
        }
    }
}

fn partition(rec: &mut Recorder, lo: usize, hi: usize) -> usize {
    let pivot = rec.arr[hi];
    let mut store = lo;
    for j in lo..hi {
        rec.compare(j, hi);
        if rec.arr[j] < pivot {
            if store != j {
                rec.swap(store, j);
            }
            store += 1;
        }
    }
    if store != hi {
        rec.swap(store, hi);
    }
    store
}
