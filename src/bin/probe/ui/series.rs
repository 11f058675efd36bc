//! Reduce grid-sized series to something a terminal chart can draw.

/// Points per chart. Braille cells are 2 dots wide, so this covers ~400 columns.
pub const CHART_POINTS: usize = 800;

/// Min/max decimation of an index-aligned `(x, y)` series.
///
/// Each bucket contributes its minimum and maximum in x order, so a kernel
/// only a few hundred samples wide still shows up at full height instead of
/// being stepped over by plain striding.
pub fn decimate(xs: &[f64], ys: &[f64], max_points: usize) -> Vec<(f64, f64)> {
    let len = xs.len().min(ys.len());
    if len <= max_points || max_points < 2 {
        return xs.iter().zip(ys).map(|(&x, &y)| (x, y)).collect();
    }

    let buckets = max_points / 2;
    let bucket_len = len.div_ceil(buckets);
    let mut out = Vec::with_capacity(buckets * 2);

    for start in (0..len).step_by(bucket_len) {
        let end = (start + bucket_len).min(len);
        let (mut lo, mut hi) = (start, start);
        for i in start..end {
            if ys[i] < ys[lo] {
                lo = i;
            }
            if ys[i] > ys[hi] {
                hi = i;
            }
        }
        let (first, second) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        out.push((xs[first], ys[first]));
        if second != first {
            out.push((xs[second], ys[second]));
        }
    }

    out
}
