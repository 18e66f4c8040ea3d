use crate::{
    foundation::core::{Size, Vec2},
    foundation::rng::RandomSource,
};

/// Rotation angles for a stacked fan of `count` children.
///
/// The angle starts at 0 and moves by `step` each child. Once its magnitude exceeds
/// `max`, the angle restarts at 0 and the direction flips.
pub fn stacked_rotations(count: usize, step: f64, max: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(count);
    let mut r = 0.0;
    let mut sign = 1.0;
    for _ in 0..count {
        out.push(r);
        r += sign * step;
        if r.abs() > max {
            r = 0.0;
            sign = -sign;
        }
    }
    out
}

/// Random stacking order and offset for one child of an exploded fan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scatter {
    pub z_order: i32,
    pub offset: Vec2,
}

/// Scatter `count` children across `region`.
///
/// Per child the source is drawn three times, in order: z-order in `[0, count)`, then the
/// x bucket, then the y bucket. Buckets are centered on 0 and span half the region.
pub fn exploded_scatter(
    count: usize,
    region: Size,
    buckets: u32,
    rng: &mut dyn RandomSource,
) -> Vec<Scatter> {
    let z_bound = u32::try_from(count).unwrap_or(u32::MAX);
    (0..count)
        .map(|_| {
            let z_order = i32::try_from(rng.next_below(z_bound)).unwrap_or(i32::MAX);
            let x = bucket_offset(rng, buckets, region.width);
            let y = bucket_offset(rng, buckets, region.height);
            Scatter {
                z_order,
                offset: Vec2::new(x, y),
            }
        })
        .collect()
}

fn bucket_offset(rng: &mut dyn RandomSource, buckets: u32, extent: f64) -> f64 {
    let b = i64::from(rng.next_below(buckets)) - i64::from(buckets / 2);
    b as f64 * extent / (2.0 * f64::from(buckets.max(1)))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fan.rs"]
mod tests;
