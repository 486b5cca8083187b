//! Behavioural tests for the switch driven through the harness.

use proptest::prelude::*;
use switchkit_core::{Color, DrawCommand, Size, Widget};
use switchkit_test::{CallRecorder, Harness};
use switchkit_widgets::{Switch, SwitchChanged, SwitchGeometry, SwitchStyle};

const GREEN: u32 = 0xff4c_af50;
const DARK_GREEN: u32 = 0xff1b_5e20;
const GREY: u32 = 0xff77_7777;

fn colorful() -> Switch {
    Switch::new()
        .unchecked_color(Color::WHITE)
        .checked_color(Color::from_argb(GREEN))
        .background_color(Color::from_argb(GREY))
        .checked_background_color(Color::from_argb(DARK_GREEN))
}

fn harness_with_calls(switch: Switch) -> (Harness<Switch>, CallRecorder<bool>) {
    let calls = CallRecorder::new();
    let mut harness = Harness::new(switch.on_checked(calls.sink()));
    harness.layout();
    (harness, calls)
}

fn geometry(harness: &Harness<Switch>) -> SwitchGeometry {
    *harness.widget().geometry()
}

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn default_switch_measures_intrinsic_size() {
    let mut harness = Harness::new(Switch::new());
    harness.layout();
    assert_eq!(harness.bounds().size(), Size::new(32.0, 20.0));
}

#[test]
fn exact_host_size_wins_over_intrinsic() {
    let mut harness = Harness::new(Switch::new());
    harness.layout_tight(Size::new(60.0, 30.0));
    let track = harness.widget().track_surface().cloned().unwrap();
    assert_eq!((track.width(), track.height()), (60, 30));
}

proptest! {
    #[test]
    fn travel_is_ordered_for_positive_radius(radius in 0.5f32..64.0, padding in 0.0f32..16.0) {
        let mut harness = Harness::new(Switch::new().radius(radius).inner_padding(padding));
        harness.layout();
        let g = geometry(&harness);
        prop_assert!(g.unchecked_x < g.middle_x);
        prop_assert!(g.middle_x < g.checked_x);
        prop_assert_eq!(harness.widget().knob_position(), g.unchecked_x);
    }

    #[test]
    fn drag_release_always_settles_at_an_end(radius in 2.0f32..40.0, fraction in -0.5f32..1.5) {
        let mut harness = Harness::new(Switch::new().radius(radius));
        harness.layout();
        let g = geometry(&harness);
        let x = g.unchecked_x + (g.checked_x - g.unchecked_x) * fraction;
        harness.drag_to(x).release().settle();
        let knob = harness.widget().knob_position();
        prop_assert!(knob == g.unchecked_x || knob == g.checked_x);
        prop_assert_eq!(knob == g.checked_x, harness.widget().is_checked());
    }
}

// =============================================================================
// Tapping
// =============================================================================

#[test]
fn tap_flips_and_notifies_once_each_way() {
    let (mut harness, calls) = harness_with_calls(Switch::new());

    harness.tap();
    assert!(harness.widget().is_checked());
    assert_eq!(calls.calls(), vec![true]);
    harness.settle();
    assert_eq!(harness.widget().knob_position(), geometry(&harness).checked_x);

    harness.tap().settle();
    assert!(!harness.widget().is_checked());
    assert_eq!(calls.calls(), vec![true, false]);
    assert_eq!(
        harness.take_messages::<SwitchChanged>(),
        vec![SwitchChanged { checked: true }, SwitchChanged { checked: false }]
    );
}

#[test]
fn full_travel_takes_configured_duration() {
    let (mut harness, _) = harness_with_calls(Switch::new().animation_duration(200));
    harness.tap().settle();
    // 13 frames of 16ms cover 200ms; allow for truncation of the travel time.
    assert!(harness.elapsed_ms() >= 192 && harness.elapsed_ms() <= 208);
}

// =============================================================================
// Dragging
// =============================================================================

#[test]
fn drag_follows_pointer_without_changing_state() {
    let (mut harness, calls) = harness_with_calls(Switch::new());
    let g = geometry(&harness);
    harness.drag_to(g.middle_x + 1.0);
    assert!(harness.widget().is_dragging());
    assert_eq!(harness.widget().knob_position(), g.middle_x + 1.0);
    assert!(!harness.widget().is_checked());
    assert_eq!(calls.count(), 0);
}

#[test]
fn release_exactly_at_middle_checks() {
    let (mut harness, calls) = harness_with_calls(Switch::new());
    let g = geometry(&harness);
    harness.drag_to(g.middle_x).release();
    assert!(harness.widget().is_checked());
    harness.assert_animating();
    harness.settle();
    assert_eq!(harness.widget().knob_position(), g.checked_x);
    assert_eq!(calls.calls(), vec![true]);
}

#[test]
fn release_in_dead_zone_snaps_without_animation_or_callback() {
    let (mut harness, calls) = harness_with_calls(colorful());
    let g = geometry(&harness);
    harness.drag_to(g.unchecked_x + 0.08).release();
    harness.assert_idle();
    assert!(!harness.widget().is_checked());
    assert_eq!(harness.widget().knob_position(), g.unchecked_x);
    assert_eq!(harness.widget().knob_color(), Color::WHITE);
    assert_eq!(calls.count(), 0);
    assert_eq!(harness.elapsed_ms(), 0);
}

#[test]
fn release_past_checked_end_snaps_checked() {
    let (mut harness, calls) = harness_with_calls(colorful());
    harness.drag_to(500.0).release();
    harness.assert_idle();
    assert!(harness.widget().is_checked());
    assert_eq!(harness.widget().knob_color(), Color::from_argb(GREEN));
    assert_eq!(harness.widget().track_color(), Color::from_argb(DARK_GREEN));
    assert_eq!(calls.calls(), vec![true]);
}

#[test]
fn cancelled_drag_returns_to_logical_state() {
    let (mut harness, calls) = harness_with_calls(Switch::new());
    let g = geometry(&harness);
    harness.drag_to(g.checked_x - 1.0).cancel();
    harness.assert_animating();
    harness.settle();
    assert!(!harness.widget().is_checked());
    assert_eq!(harness.widget().knob_position(), g.unchecked_x);
    assert_eq!(calls.count(), 0);
}

// =============================================================================
// Programmatic state
// =============================================================================

#[test]
fn set_checked_animates_silently() {
    let (mut harness, calls) = harness_with_calls(Switch::new());
    harness.widget_mut().set_checked(true);
    harness.assert_animating();
    harness.settle();
    assert!(harness.widget().is_checked());
    assert_eq!(harness.widget().knob_position(), geometry(&harness).checked_x);
    assert_eq!(calls.count(), 0);
    assert_eq!(harness.message_count(), 0);
}

#[test]
fn set_checked_round_trip_is_bit_identical() {
    let (mut harness, _) = harness_with_calls(colorful());
    let knob = harness.widget().knob_position();
    let knob_color = harness.widget().knob_color();
    let track = harness.widget().track_surface().cloned().unwrap();
    let pixels = harness.render_pixels();

    harness.widget_mut().set_checked(true);
    harness.settle();
    assert_ne!(harness.render_pixels(), pixels);
    harness.widget_mut().set_checked(false);
    harness.settle();

    assert_eq!(harness.widget().knob_position().to_bits(), knob.to_bits());
    assert_eq!(harness.widget().knob_color(), knob_color);
    assert_eq!(
        harness.widget().track_surface().unwrap().pixels(),
        track.pixels()
    );
    assert_eq!(harness.render_pixels(), pixels);
}

// =============================================================================
// Color animation
// =============================================================================

fn channels(c: Color) -> [f32; 4] {
    [c.r, c.g, c.b, c.a]
}

#[test]
fn knob_color_interpolates_monotonically() {
    let (mut harness, _) = harness_with_calls(colorful());
    let from = Color::WHITE;
    let to = Color::from_argb(GREEN);

    harness.tap();
    assert_eq!(harness.widget().knob_color(), from);

    let mut previous = channels(harness.widget().knob_color());
    while harness.frame(5) {
        let current = channels(harness.widget().knob_color());
        for i in 0..4 {
            let direction = channels(to)[i] - channels(from)[i];
            assert!((current[i] - previous[i]) * direction >= 0.0, "channel {i} reversed");
        }
        previous = current;
    }
    assert_eq!(harness.widget().knob_color(), to);
}

#[test]
fn colors_hold_until_knob_reaches_second_half() {
    let (mut harness, _) = harness_with_calls(colorful());
    let g = geometry(&harness);
    harness.tap().advance(g.color_delay_ms().saturating_sub(16));
    assert_eq!(harness.widget().knob_color(), Color::WHITE);
    assert_eq!(harness.widget().track_color(), Color::from_argb(GREY));
    assert!(harness.widget().knob_position() < g.middle_x + 1.0);
}

#[test]
fn track_surface_tracks_interpolated_color_every_frame() {
    let (mut harness, _) = harness_with_calls(colorful());
    harness.tap();
    while harness.frame(7) {
        let switch = harness.widget();
        let track = switch.track_surface().unwrap();
        assert_eq!(track.pixel(4, 10), Some(switch.track_color().to_argb()));
    }
    assert_eq!(harness.widget().track_color(), Color::from_argb(DARK_GREEN));
}

#[test]
fn equal_colors_skip_color_animation() {
    let (mut harness, _) = harness_with_calls(Switch::new());
    harness.tap().settle();
    let stats = harness.widget().track_cache_stats();
    assert_eq!(stats.misses, 1);
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn superseded_transition_never_writes_again() {
    let (mut harness, _) = harness_with_calls(colorful());
    let g = geometry(&harness);
    harness.widget_mut().set_checked(true);
    harness.advance(200);
    harness.widget_mut().set_checked(false);
    harness.settle();
    assert_eq!(harness.widget().knob_position(), g.unchecked_x);
    assert_eq!(harness.widget().knob_color(), Color::WHITE);
    assert_eq!(harness.widget().track_color(), Color::from_argb(GREY));
}

#[test]
fn drag_freezes_running_transition() {
    let (mut harness, _) = harness_with_calls(Switch::new());
    harness.tap().advance(32);
    harness.drag_to(12.0);
    harness.assert_idle();
    harness.advance(500);
    assert_eq!(harness.widget().knob_position(), 12.0);
}

// =============================================================================
// Degenerate geometry
// =============================================================================

#[test]
fn zero_radius_settles_on_first_frame() {
    let (mut harness, calls) = harness_with_calls(colorful().radius(0.0));
    harness.tap();
    assert!(!harness.frame(16));
    harness.assert_idle();
    assert!(harness.widget().knob_position().is_finite());
    assert_eq!(harness.widget().knob_color(), Color::from_argb(GREEN));
    assert_eq!(calls.calls(), vec![true]);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn paint_emits_track_then_knob() {
    let (harness, _) = harness_with_calls(colorful());
    let commands = harness.render();
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], DrawCommand::Surface { .. }));
    assert_eq!(commands[1].color(), Some(Color::WHITE));
}

#[test]
fn rendered_pixels_show_checked_state() {
    let (mut harness, _) = harness_with_calls(colorful());
    harness.tap().settle();
    let pixels = harness.render_pixels();
    // Knob center, then a track pixel clear of the knob.
    assert_eq!(pixels.pixel(22, 10), Some(GREEN));
    assert_eq!(pixels.pixel(3, 10), Some(DARK_GREEN));
}

#[test]
fn animation_requests_redraws() {
    let (mut harness, _) = harness_with_calls(Switch::new());
    let before = harness.redraw_count();
    harness.tap().settle();
    assert!(harness.redraw_count() > before + 5);
}

// =============================================================================
// Styling
// =============================================================================

#[test]
fn switch_from_yaml_style() {
    let style = SwitchStyle::from_yaml(
        r##"
radius: 10dp
innerPadding: 2dp
checkedColor: "#4caf50"
isChecked: true
"##,
    )
    .unwrap();
    let mut harness = Harness::new(Switch::from_style(&style, 2.0).unwrap());
    harness.layout();
    assert_eq!(harness.bounds().size(), Size::new(80.0, 48.0));
    assert!(harness.widget().is_checked());
    assert_eq!(harness.widget().knob_color(), Color::from_argb(GREEN));
    assert_eq!(harness.widget().accessible_role(), switchkit_core::AccessibleRole::Switch);
}
