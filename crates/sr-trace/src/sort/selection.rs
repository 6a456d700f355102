use super::Recorder;

/// For each position, scan the rest for the minimum, then swap it in.
///
/// The running minimum moves without a step of its own; only the
/// comparisons and the final swap are recorded.
pub(crate) fn record(rec: &mut Recorder) {
    let n = rec.len();
    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            rec.compare(min_idx, j);
            if rec.arr[j] < rec.arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            rec.swap(i, min_idx);
        }
    }
}
