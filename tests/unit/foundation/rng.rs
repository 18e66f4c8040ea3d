use super::*;

#[test]
fn same_seed_same_sequence() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..32 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_below_stays_in_range() {
    let mut rng = Rng64::new(7);
    for bound in [1u32, 2, 3, 16, 1000] {
        for _ in 0..200 {
            assert!(rng.next_below(bound) < bound);
        }
    }
}

#[test]
fn zero_bound_yields_zero() {
    let mut rng = Rng64::new(1);
    assert_eq!(rng.next_below(0), 0);
}

#[test]
fn buckets_are_all_reachable() {
    let mut rng = Rng64::new(3);
    let mut seen = [false; 16];
    for _ in 0..2000 {
        seen[rng.next_below(16) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}
