use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::InOutQuad,
    Ease::InOutCubic,
    Ease::AccelDecel {
        accel: 0.2,
        decel: 0.7,
    },
    Ease::AccelDecel {
        accel: 0.5,
        decel: 0.5,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn accel_decel_is_continuous_at_phase_edges() {
    let ease = Ease::default();
    for edge in [0.2, 0.3] {
        let before = ease.apply(edge - 1e-9);
        let after = ease.apply(edge + 1e-9);
        assert!((before - after).abs() < 1e-6);
    }
}

#[test]
fn accel_decel_cruise_is_linear() {
    // accel 0.2, decel 0.7: peak velocity 1 / (1 - 0.1 - 0.35) = 1 / 0.55
    let ease = Ease::default();
    let v = 1.0 / 0.55;
    assert!((ease.apply(0.25) - v * (0.25 - 0.1)).abs() < 1e-12);
}

#[test]
fn zero_ratios_degrade_to_linear() {
    let ease = Ease::AccelDecel {
        accel: 0.0,
        decel: 0.0,
    };
    assert_eq!(ease.apply(0.3), 0.3);
}

#[test]
fn validate_rejects_bad_ratios() {
    assert!(Ease::default().validate().is_ok());
    assert!(
        Ease::AccelDecel {
            accel: 0.6,
            decel: 0.6
        }
        .validate()
        .is_err()
    );
    assert!(
        Ease::AccelDecel {
            accel: -0.1,
            decel: 0.0
        }
        .validate()
        .is_err()
    );
}
