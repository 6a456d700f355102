use super::Recorder;

/// Top-down merge sort splitting at `(l + r) / 2`.
///
/// Merged values are staged in a scratch buffer and then written back one
/// position at a time, each write recorded with no second index.
pub(crate) fn record(rec: &mut Recorder) {
    let mut aux = vec![0; rec.len()];
    sort(rec, &mut aux, 0, rec.len() - 1);
}

fn sort(rec: &mut Recorder, aux: &mut [i32], l: usize, r: usize) {
    if l >= r {
        return;
    }
    let m = l + (r - l) / 2;
    sort(rec, aux, l, m);
    sort(rec, aux, m + 1, r);
    merge(rec, aux, l, m, r);
}

fn merge(rec: &mut Recorder, aux: &mut [i32], l: usize, m: usize, r: usize) {
    let (mut i, mut j, mut k) = (l, m + 1, l);

    while i <= m && j <= r {
        rec.compare(i, j);
        if rec.arr[i] <= rec.arr[j] {
            aux[k] = rec.arr[i];
            i += 1;
        } else {
            aux[k] = rec.arr[j];
            j += 1;
        }
        k += 1;
    }
    while i <= m {
        aux[k] = rec.arr[i];
        i += 1;
        k += 1;
    }
    while j <= r {
        aux[k] = rec.arr[j];
        j += 1;
        k += 1;
    }

    for t in l..=r {
        rec.arr[t] = aux[t];
        rec.mutate(t, None);
    }
}
