use led_orbit::pattern::{arm_points, PatternConfig, PatternEditor, StateGrid};
use led_orbit::pattern::project::{division_angle, rotate_about};

const CENTER: [f32; 2] = [320.0, 240.0];

fn canvas_pos(editor: &PatternEditor, division: usize, index: usize) -> [f32; 2] {
    let config = editor.config();
    let point = arm_points(&config)[index];
    let rotated = rotate_about(point, [0.0, 0.0], division_angle(division, config.divisions));
    editor.view().to_canvas(rotated, CENTER)
}

#[test]
fn a_full_editing_session_behaves_end_to_end() {
    let mut editor = PatternEditor::default();

    // Shrink the pattern to something small to work with.
    editor
        .reconfigure(PatternConfig {
            leds_per_arm: 2,
            divisions: 4,
            arm_offset: 30.0,
        })
        .expect("valid config");

    // Click two LEDs on.
    assert!(editor.click(canvas_pos(&editor, 1, 0), CENTER));
    assert!(editor.click(canvas_pos(&editor, 3, 1), CENTER));
    assert!(editor.grid().get(1, 0));
    assert!(editor.grid().get(3, 1));

    // Drag along the division-0 arm; both LEDs toggle, and lingering over
    // the last one does not toggle it back.
    editor.pointer_down();
    assert!(editor.drag_to(canvas_pos(&editor, 0, 0), CENTER));
    assert!(editor.drag_to(canvas_pos(&editor, 0, 1), CENTER));
    let resting = canvas_pos(&editor, 0, 1);
    assert!(!editor.drag_to([resting[0] + 1.0, resting[1]], CENTER));
    editor.pointer_up();
    assert!(editor.grid().get(0, 0));
    assert!(editor.grid().get(0, 1));

    // Zoom changes the on-screen layout but not which cell a click on a
    // LED's current position resolves to.
    editor.zoom_in();
    editor.zoom_in();
    assert!(editor.click(canvas_pos(&editor, 1, 0), CENTER));
    assert!(!editor.grid().get(1, 0));

    // Export, then import into a fresh editor: identical pattern.
    let document = editor.export_document();
    let mut other = PatternEditor::default();
    other.apply_document(document).expect("round trip");
    assert_eq!(other.config(), editor.config());
    assert_eq!(other.grid(), editor.grid());

    // Reconfiguring is destructive: everything resets to off.
    let config = editor.config();
    editor.reconfigure(config).expect("same config is valid");
    assert_eq!(editor.grid(), &StateGrid::new(4, 2));
}

#[test]
fn rendering_is_deterministic_for_a_fixed_pattern() {
    let mut editor = PatternEditor::new(PatternConfig {
        leds_per_arm: 3,
        divisions: 8,
        arm_offset: 40.0,
    })
    .expect("valid config");
    editor.click(canvas_pos(&editor, 5, 2), CENTER);
    editor.zoom_out();

    assert_eq!(editor.screen_leds(CENTER), editor.screen_leds(CENTER));
}

#[test]
fn an_armless_pattern_renders_nothing_and_swallows_clicks() {
    let mut editor = PatternEditor::new(PatternConfig {
        leds_per_arm: 0,
        divisions: 4,
        arm_offset: 30.0,
    })
    .expect("zero LEDs are allowed");

    assert!(editor.screen_leds(CENTER).is_empty());
    assert!(!editor.click(CENTER, CENTER));
    editor.pointer_down();
    assert!(!editor.drag_to(CENTER, CENTER));
}
