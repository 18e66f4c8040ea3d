use super::*;

#[test]
fn starts_stacked() {
    let s = PanelState::new(LayoutMode::Fan);
    assert_eq!(s.state(), FanState::Stacked);
    assert!(!s.is_hovered());
}

#[test]
fn hover_toggles_between_stacked_and_exploded() {
    let mut s = PanelState::new(LayoutMode::Fan);
    for _ in 0..3 {
        assert!(s.pointer_enter().needs_arrange());
        assert_eq!(s.state(), FanState::Exploded);
        assert!(s.pointer_leave().needs_arrange());
        assert_eq!(s.state(), FanState::Stacked);
    }
}

#[test]
fn hover_is_recorded_but_inert_while_wrapped() {
    let mut s = PanelState::new(LayoutMode::Wrap);
    assert_eq!(s.pointer_enter(), Invalidation::None);
    assert_eq!(s.state(), FanState::Wrapped);
    assert!(s.is_hovered());

    assert!(s.set_mode(LayoutMode::Fan).needs_arrange());
    assert_eq!(s.state(), FanState::Exploded);
}

#[test]
fn setting_the_same_mode_is_a_no_op() {
    let mut s = PanelState::new(LayoutMode::Fan);
    assert_eq!(s.set_mode(LayoutMode::Fan), Invalidation::None);
    assert!(s.set_mode(LayoutMode::Wrap).needs_arrange());
    assert_eq!(s.set_mode(LayoutMode::Wrap), Invalidation::None);
}

#[test]
fn invalidation_or_prefers_arrange() {
    assert_eq!(
        Invalidation::None.or(Invalidation::Arrange),
        Invalidation::Arrange
    );
    assert_eq!(
        Invalidation::Arrange.or(Invalidation::None),
        Invalidation::Arrange
    );
    assert_eq!(Invalidation::None.or(Invalidation::None), Invalidation::None);
}
