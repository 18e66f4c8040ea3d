use super::*;

fn offsets(p: &[WrapPlacement]) -> Vec<(f64, f64)> {
    p.iter().map(|w| (w.offset.x, w.offset.y)).collect()
}

#[test]
fn rows_break_at_region_width() {
    let sizes = [Size::new(40.0, 10.0); 5];
    let p = wrap_placements(Size::new(100.0, 100.0), &sizes);
    assert_eq!(
        offsets(&p),
        vec![(0.0, 0.0), (40.0, 0.0), (0.0, 10.0), (40.0, 10.0), (0.0, 20.0)]
    );
    assert!(p.iter().all(|w| w.visible));
}

#[test]
fn exact_fit_does_not_wrap() {
    let sizes = [Size::new(50.0, 10.0), Size::new(50.0, 10.0)];
    let p = wrap_placements(Size::new(100.0, 100.0), &sizes);
    assert_eq!(offsets(&p), vec![(0.0, 0.0), (50.0, 0.0)]);
}

#[test]
fn row_height_includes_the_wrapping_child() {
    let sizes = [Size::new(60.0, 10.0), Size::new(60.0, 30.0)];
    let p = wrap_placements(Size::new(100.0, 100.0), &sizes);
    assert_eq!(p[1].offset, Vec2::new(0.0, 30.0));
}

#[test]
fn row_height_is_never_reset() {
    let sizes = [
        Size::new(60.0, 50.0),
        Size::new(60.0, 10.0),
        Size::new(60.0, 10.0),
    ];
    let p = wrap_placements(Size::new(100.0, 500.0), &sizes);
    assert_eq!(offsets(&p), vec![(0.0, 0.0), (0.0, 50.0), (0.0, 100.0)]);
}

#[test]
fn boundary_row_is_visible_and_next_is_hidden() {
    // rows at y = 0, 20, 40; threshold is 60 - 20 = 40
    let sizes = [Size::new(100.0, 20.0); 4];
    let p = wrap_placements(Size::new(100.0, 60.0), &sizes);
    assert!(p[2].visible);
    assert_eq!(p[2].offset.y, 40.0);
    assert!(!p[3].visible);
    assert_eq!(p[3].offset.y, 60.0);
}

#[test]
fn oversized_first_child_wraps_to_its_own_row() {
    // An over-wide child still breaks the row, even when it comes first.
    let sizes = [Size::new(150.0, 20.0)];
    let p = wrap_placements(Size::new(100.0, 100.0), &sizes);
    assert_eq!(p[0].offset, Vec2::new(0.0, 20.0));
}

#[test]
fn placement_is_idempotent() {
    let sizes: Vec<Size> = (0..20)
        .map(|i| Size::new(10.0 + f64::from(i) * 3.0, 5.0 + f64::from(i % 4) * 7.0))
        .collect();
    let region = Size::new(120.0, 90.0);
    assert_eq!(
        wrap_placements(region, &sizes),
        wrap_placements(region, &sizes)
    );
}
