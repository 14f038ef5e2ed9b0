use view_xray::testing::FakeNode;
use view_xray::{layout_text_renderer, ConfigError, TextRendererConfig, LAYOUT_RENDERER};

use super::render;

#[test]
fn given_a_bare_layout_element_should_render_only_dimensions() {
    let node = FakeNode::layout("Box").size(64, 32);

    assert_eq!(render(&node, &LAYOUT_RENDERER), ["64x32px"]);
}

#[test]
fn given_every_layout_property_should_render_in_fixed_order() {
    let node = FakeNode::layout("Button")
        .layout_id("submit")
        .size(120, 48)
        .test_tag("submit-button")
        .role("Button")
        .focused()
        .disabled();

    assert_eq!(
        render(&node, &LAYOUT_RENDERER),
        [
            "layout-id:\"submit\"",
            "120x48px",
            "test-tag:\"submit-button\"",
            "role:Button",
            "focused",
            "disabled",
        ]
    );
}

#[test]
fn given_a_widget_view_should_render_nothing() {
    let node = FakeNode::view("View").size(10, 10);

    assert!(render(&node, &LAYOUT_RENDERER).is_empty());
}

#[test]
fn given_layout_text_with_a_limit_should_ellipsize() {
    let config = TextRendererConfig::default().include_text(true).max_length(4);
    let renderer = layout_text_renderer(config).unwrap();
    let node = FakeNode::layout("Text").text("abcdef");

    assert_eq!(render(&node, &renderer), ["text-length:6", "text:\"abc…\""]);
}

#[test]
fn given_layout_text_excluded_should_render_only_length() {
    let renderer = layout_text_renderer(TextRendererConfig::default()).unwrap();
    let node = FakeNode::layout("Text").text("abcdef");

    assert_eq!(render(&node, &renderer), ["text-length:6"]);
}

#[test]
fn given_layout_text_with_negative_limit_should_fail_to_build() {
    let config = TextRendererConfig::default().include_text(true).max_length(-5);

    assert_eq!(
        layout_text_renderer(config).unwrap_err(),
        ConfigError::NegativeMaxLength { max_length: -5 }
    );
}
