use framed_core::app::context::AppContext;
use framed_core::app::update::UpdateManager;
use framed_core::config::DisplayMetrics;
use framed_core::text_render::{FixedAdvanceMetrics, TextMetrics};
use framed_theme::palette::Palette;
use framed_widgets::button::Button;
use framed_widgets::inflate::{InflateError, Inflater};
use framed_widgets::text_box::TextBox;
use nalgebra::Vector2;

const LAYOUT: &str = r##"
[[widgets]]
kind = "TextBox"
id = "mycustomview"
width = "wrap_content"
height = 120
[widgets.attributes]
text = "Marco"
borderColor = "#ff0000"

[[widgets]]
kind = "Button"
id = "buttonSize"
width = "match_parent"
height = 48
[widgets.attributes]
text = "Size"

[[menu]]
id = "menu_settings"
title = "Settings"
"##;

fn fixed_metrics() -> Box<dyn TextMetrics> {
    Box::new(FixedAdvanceMetrics::new(0.5, 0.25))
}

fn context(density: f32) -> AppContext {
    AppContext::new(UpdateManager::new(), Palette::default(), DisplayMetrics::new(density))
}

#[test]
fn test_inflate_resolves_widgets_by_id() {
    let context = context(1.0);
    let inflated = Inflater::new(&context)
        .with_text_metrics(fixed_metrics)
        .inflate_str(LAYOUT)
        .unwrap();

    let ids: Vec<&str> = inflated.tree.ids().collect();
    assert_eq!(ids, vec!["mycustomview", "buttonSize"]);

    let text_box = inflated.tree.find::<TextBox>("mycustomview").unwrap();
    assert_eq!(text_box.text(), "Marco");
    assert_eq!(text_box.text_size(), 24.0);
    assert_eq!(text_box.border_color().to_rgba8().r, 255);

    let button = inflated.tree.find::<Button>("buttonSize").unwrap();
    assert_eq!(button.label(), "Size");
    assert!(inflated.tree.find::<Button>("mycustomview").is_none());

    assert_eq!(inflated.menu.len(), 1);
    assert_eq!(inflated.menu[0].id, "menu_settings");
    assert_eq!(inflated.menu[0].title, "Settings");
}

#[test]
fn test_inflated_sizes_scale_with_density() {
    let context = context(2.0);
    let inflated = Inflater::new(&context)
        .with_text_metrics(fixed_metrics)
        .inflate_str(LAYOUT)
        .unwrap();

    let layout = inflated.tree.compute_layout(Vector2::new(360.0, 640.0)).unwrap();
    let text_box = &layout.children[0].layout;
    let button = &layout.children[1].layout;

    // "Marco" at 48px: 5 * 24
    assert_eq!(text_box.size.width, 120.0);
    assert_eq!(text_box.size.height, 240.0);
    assert_eq!(button.location.y, 240.0);
    assert_eq!(button.size.width, 360.0);
    assert_eq!(button.size.height, 96.0);
}

#[test]
fn test_wrap_content_wraps_text_on_both_axes() {
    let context = context(1.0);
    let inflated = Inflater::new(&context)
        .with_text_metrics(fixed_metrics)
        .inflate_str(
            r#"
            [[widgets]]
            kind = "TextBox"
            id = "wrapped"
            width = "wrap_content"
            height = "wrap_content"
            "#,
        )
        .unwrap();

    let layout = inflated.tree.compute_layout(Vector2::new(360.0, 640.0)).unwrap();
    let size = layout.children[0].layout.size;

    // "Hello Big World!" at 24px: 16 * 12 wide, ceil(24) tall
    assert_eq!(size.width, 192.0);
    assert_eq!(size.height, 24.0);
}

#[test]
fn test_unknown_widget_kind() {
    let context = context(1.0);
    let result = Inflater::new(&context).with_text_metrics(fixed_metrics).inflate_str(
        r#"
        [[widgets]]
        kind = "Spinner"
        id = "spinner"
        "#,
    );

    match result {
        Err(InflateError::UnknownWidget { kind, id }) => {
            assert_eq!(kind, "Spinner");
            assert_eq!(id, "spinner");
        },
        _ => panic!("expected an unknown widget error"),
    }
}

#[test]
fn test_duplicate_id() {
    let context = context(1.0);
    let result = Inflater::new(&context).with_text_metrics(fixed_metrics).inflate_str(
        r#"
        [[widgets]]
        kind = "TextBox"
        id = "same"

        [[widgets]]
        kind = "Button"
        id = "same"
        "#,
    );

    assert!(matches!(result, Err(InflateError::DuplicateId { id }) if id == "same"));
}

#[test]
fn test_malformed_layout() {
    let context = context(1.0);
    let result = Inflater::new(&context).inflate_str("[[widgets]]\nkind = 3");
    assert!(matches!(result, Err(InflateError::Parse(_))));
}
