//! Index of the smallest candidate objective value

/// Index of the minimum of `values`, or `None` if it is empty.
///
/// Comparison is strict, so among equal values the lowest index wins.
/// NaN never compares less than anything and is therefore never selected
/// unless it sits at index 0.
pub fn argmin_index<S>(values: &[S]) -> Option<usize>
where
    S: PartialOrd + Copy,
{
    let mut iter = values.iter().enumerate();
    let (mut idx, mut min) = match iter.next() {
        Some((i, &v)) => (i, v),
        None => return None,
    };

    for (i, &v) in iter {
        if v < min {
            min = v;
            idx = i;
        }
    }

    Some(idx)
}

/// `argmin_index` over exactly three candidates, as used by the
/// LSP and SCAD kernels.
#[inline]
pub(crate) fn argmin3<S: PartialOrd + Copy>(values: [S; 3]) -> usize {
    let mut idx = 0;
    if values[1] < values[idx] {
        idx = 1;
    }
    if values[2] < values[idx] {
        idx = 2;
    }
    idx
}
