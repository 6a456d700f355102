use super::Recorder;

/// Adjacent-pair passes; stops after the first pass without a swap.
pub(crate) fn record(rec: &mut Recorder) {
    let n = rec.len();
    for pass in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            rec.compare(j, j + 1);
            if rec.arr[j] > rec.arr[j + 1] {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
