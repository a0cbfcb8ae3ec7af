//! Closed 1-D interval sets, used to merge wall and door spans.

/// `(start, end)` with `start <= end`.
pub type Interval<T> = (T, T);

/// Sort by start and merge overlapping or touching intervals in place.
pub fn intervals_union<T: PartialOrd + Copy>(intvs: &mut Vec<Interval<T>>) {
    intvs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    let mut merged: Vec<Interval<T>> = Vec::with_capacity(intvs.len());
    for &(l, r) in intvs.iter() {
        match merged.last_mut() {
            Some(last) if !(last.1 < l) => {
                if last.1 < r {
                    last.1 = r;
                }
            }
            _ => merged.push((l, r)),
        }
    }
    *intvs = merged;
}

/// Remove every `priority` span from `inferior`. Pieces of zero length are
/// dropped; the relative order of the remaining pieces is kept.
pub fn intervals_exclude<T: PartialOrd + Copy>(
    priority: &[Interval<T>],
    inferior: &[Interval<T>],
) -> Vec<Interval<T>> {
    let mut out = inferior.to_vec();
    for &(pl, pr) in priority {
        let mut next = Vec::with_capacity(out.len() + 1);
        for &(l, r) in &out {
            let left_end = if pl <= r { pl } else { r };
            let right_start = if l >= pr { l } else { pr };
            if l < left_end {
                next.push((l, left_end));
            }
            if right_start < r {
                next.push((right_start, r));
            }
        }
        out = next;
    }
    out
}
