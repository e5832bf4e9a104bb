//! Derivation of the sampled block heights from a range and step.

/// Derive the list of heights to sample
///
/// **Public** - called by the gini command before dispatch
///
/// The iteration count is `ceil((end - start) / step)` and the heights
/// are `start, start + step, start + 2*step, ...` for that many
/// iterations. Depending on alignment the last height may fall short
/// of, equal, or exceed `end - step`; `end` itself is not guaranteed to
/// be sampled.
///
/// # Arguments
/// * `start` - first sampled height, below `end` (validated upstream)
/// * `end` - upper bound of the range
/// * `step` - height increment, at least 1 (validated upstream)
pub fn sample_heights(start: u64, end: u64, step: u64) -> Vec<u64> {
    let iterations = (end - start).div_ceil(step);

    (0..iterations).map(|i| start + i * step).collect()
}
