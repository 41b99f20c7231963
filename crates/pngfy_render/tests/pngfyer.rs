use image::Rgba;
use pngfy_render::{
    ColorRgba, ColorUpdate, EmptyTextHint, Pngfyer, PngfyError, RenderMode, SettingCall,
};

#[test]
fn render_bundles_canvas_dimensions_and_frozen_settings() {
    let mut pngfyer = Pngfyer::new();
    pngfyer.set_text("Hi", None).unwrap();
    pngfyer.set_horizontal_spacing(0).unwrap();
    pngfyer.set_vertical_spacing(0).unwrap();
    assert_eq!(pngfyer.set_font_height(18).unwrap(), 18);

    let output = pngfyer.render();
    assert_eq!((output.canvas().width(), output.canvas().height()), (10, 9));
    assert_eq!((output.render_width(), output.render_height()), (20, 18));
    assert_eq!(output.settings().text(), "Hi");
    assert_eq!(output.settings().font_height(), 18);
}

#[test]
fn outputs_are_unaffected_by_later_setter_calls() {
    let mut pngfyer = Pngfyer::new();
    pngfyer.set_text("first", None).unwrap();
    let output = pngfyer.render();

    pngfyer.set_text("second run", None).unwrap();
    pngfyer.set_font_color(ColorUpdate::rgb(1, 2, 3)).unwrap();

    assert_eq!(output.settings().text(), "first");
    assert_eq!(output.settings().font_color(), ColorRgba::new(255, 255, 255, 255));
}

#[test]
fn setters_report_normalized_values() {
    let mut pngfyer = Pngfyer::new();
    // Remainder 4 snaps down, remainder 5 snaps up.
    assert_eq!(pngfyer.set_font_height(22).unwrap(), 18);
    assert_eq!(pngfyer.set_font_height(23).unwrap(), 27);
    assert_eq!(pngfyer.set_horizontal_spacing(3).unwrap(), 3);
    assert_eq!(
        pngfyer.set_font_color(ColorUpdate::alpha(200)).unwrap(),
        ColorRgba::new(255, 255, 255, 200)
    );
}

#[test]
fn empty_text_and_replacement_report_the_both_empty_hint() {
    let mut pngfyer = Pngfyer::new();
    let error = pngfyer.set_text("", Some("")).unwrap_err();
    assert_eq!(error, PngfyError::EmptyText { hint: EmptyTextHint::BothEmpty });
}

#[test]
fn unsupported_characters_are_substituted_with_the_replacement_text() {
    let mut pngfyer = Pngfyer::new();
    assert_eq!(pngfyer.set_text("A\t", Some("_")).unwrap(), "A_");
}

#[test]
fn a_single_unsupported_character_is_named_in_the_error() {
    let mut pngfyer = Pngfyer::new();
    let error = pngfyer.set_text("A\u{0}B", None).unwrap_err();
    assert_eq!(error, PngfyError::InvalidCharacter { characters: "'\\0'".to_owned() });
    assert!(error.to_string().contains("'\\0'"));
}

#[test]
fn snapshots_taken_through_the_facade_reject_setters() {
    let pngfyer = Pngfyer::new();
    let snapshot = pngfyer.snapshot();
    let error = snapshot.apply(SettingCall::SetFontHeight(18)).unwrap_err();
    assert!(matches!(error, PngfyError::UnsupportedOperation { .. }));
}

#[test]
fn solid_mode_renders_uniform_glyph_regions() {
    let mut pngfyer = Pngfyer::new();
    pngfyer.set_text("x", None).unwrap();
    pngfyer.set_font_color(ColorUpdate::rgba(200, 100, 50, 255)).unwrap();

    let output = pngfyer.render_with_mode(RenderMode::Solid);
    for pixel in output.canvas().pixels() {
        assert_eq!(pixel, &Rgba([200, 100, 50, 255]));
    }
}

#[test]
fn default_settings_render_without_any_setter_call() {
    let output = Pngfyer::new().render();
    // The default text is non-empty, so the canvas has real dimensions.
    assert!(output.canvas().width() > 0);
    assert!(output.canvas().height() > 0);
    assert_eq!(output.settings().font_height(), 9);
}
