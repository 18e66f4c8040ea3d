use crate::foundation::core::{Size, is_unbounded};

/// Size the panel asks for given the host's offer.
///
/// Unbounded offers resolve to `fallback` so infinity never reaches the arrangement pass.
pub fn resolve_measure(available: Size, fallback: Size) -> Size {
    if is_unbounded(available) {
        fallback
    } else {
        available
    }
}

/// Largest scale in `(0, 1]` that fits every child inside `fit_fraction` of the region's
/// smaller side.
///
/// Children without area, and any contribution that is not finite and positive, are
/// skipped rather than collapsing the factor.
pub fn scale_factor<I>(region: Size, sizes: I, fit_fraction: f64) -> f64
where
    I: IntoIterator<Item = Size>,
{
    let budget = region.width.min(region.height) * fit_fraction;
    sizes
        .into_iter()
        .filter_map(|s| {
            let extent = s.width.max(s.height);
            if extent <= 0.0 {
                return None;
            }
            let sf = budget / extent;
            (sf.is_finite() && sf > 0.0).then_some(sf)
        })
        .fold(1.0, f64::min)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
