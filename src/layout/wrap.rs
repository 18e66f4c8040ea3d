use crate::foundation::core::{Size, Vec2};

/// Flow-layout slot for one child in wrap mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapPlacement {
    pub offset: Vec2,
    pub visible: bool,
}

/// Place children left to right, breaking rows at `region.width`.
///
/// The row height is the tallest child seen so far, including the child being placed,
/// and is not reset between rows. A child is hidden when its row starts below
/// `region.height - row_height`; landing exactly on that line is still visible.
pub fn wrap_placements(region: Size, sizes: &[Size]) -> Vec<WrapPlacement> {
    let mut max_h = 0.0f64;
    let mut x = 0.0;
    let mut y = 0.0;

    sizes
        .iter()
        .map(|s| {
            max_h = max_h.max(s.height);
            if x + s.width > region.width {
                x = 0.0;
                y += max_h;
            }
            let visible = y <= region.height - max_h;
            let placed = WrapPlacement {
                offset: Vec2::new(x, y),
                visible,
            };
            x += s.width;
            placed
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
