use super::*;
use crate::foundation::rng::Rng64;

/// Replays a fixed list of draws, cycling when exhausted.
struct Scripted {
    draws: Vec<u32>,
    at: usize,
}

impl RandomSource for Scripted {
    fn next_below(&mut self, bound: u32) -> u32 {
        let v = self.draws[self.at % self.draws.len()];
        self.at += 1;
        v.min(bound.saturating_sub(1))
    }
}

#[test]
fn thirteen_children_zig_zag() {
    let r = stacked_rotations(13, 15.0, 90.0);
    assert_eq!(
        r,
        vec![
            0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0, 0.0, -15.0, -30.0, -45.0, -60.0, -75.0
        ]
    );
}

#[test]
fn zig_zag_flips_back_to_positive() {
    let r = stacked_rotations(16, 15.0, 90.0);
    assert_eq!(r[13], -90.0);
    assert_eq!(r[14], 0.0);
    assert_eq!(r[15], 15.0);
}

#[test]
fn ninety_itself_stays_positive() {
    let r = stacked_rotations(7, 15.0, 90.0);
    assert_eq!(r.last().copied(), Some(90.0));
}

#[test]
fn empty_fan_has_no_angles() {
    assert!(stacked_rotations(0, 15.0, 90.0).is_empty());
}

#[test]
fn scatter_draw_order_is_z_then_x_then_y() {
    let mut rng = Scripted {
        draws: vec![2, 0, 15],
        at: 0,
    };
    let s = exploded_scatter(3, Size::new(320.0, 640.0), 16, &mut rng);
    assert_eq!(s[0].z_order, 2);
    // (0 - 8) * 320 / 32 and (15 - 8) * 640 / 32
    assert_eq!(s[0].offset, Vec2::new(-80.0, 140.0));
}

#[test]
fn scatter_stays_within_quarter_region() {
    let region = Size::new(800.0, 600.0);
    let mut rng = Rng64::new(99);
    let s = exploded_scatter(50, region, 16, &mut rng);
    assert_eq!(s.len(), 50);
    for sc in s {
        assert!((0..50).contains(&sc.z_order));
        assert!(sc.offset.x >= -200.0 && sc.offset.x <= 175.0);
        assert!(sc.offset.y >= -150.0 && sc.offset.y <= 131.25);
    }
}

#[test]
fn same_seed_same_scatter() {
    let region = Size::new(400.0, 400.0);
    let a = exploded_scatter(8, region, 16, &mut Rng64::new(5));
    let b = exploded_scatter(8, region, 16, &mut Rng64::new(5));
    assert_eq!(a, b);
}
