use view_xray::testing::FakeNode;
use view_xray::{
    describe, layout, render_attributes, ResourceId, StateRenderer, Visibility, DEFAULTS_INCLUDING_PII,
    DEFAULTS_NO_PII,
};

#[test]
fn given_no_pii_defaults_should_render_text_length_without_text() {
    let node = FakeNode::view("TextView").size(200, 30).text("hello world");

    let attributes = render_attributes(&node, &DEFAULTS_NO_PII);

    assert_eq!(attributes.as_slice(), ["200x30px", "text-length:11"]);
    assert!(!attributes.iter().any(|a| a.starts_with("text:")));
}

#[test]
fn given_pii_defaults_should_render_full_text() {
    let node = FakeNode::view("TextView").size(200, 30).text("hello world");

    let attributes = render_attributes(&node, &DEFAULTS_INCLUDING_PII);

    assert_eq!(
        attributes.as_slice(),
        ["200x30px", "text-length:11", "text:\"hello world\""]
    );
}

#[test]
fn given_a_checked_text_view_should_render_view_then_text_then_checked() {
    let node = FakeNode::view("CheckBox")
        .resource_entry(ResourceId(9), "remember_me")
        .size(48, 48)
        .text("Remember me")
        .checked(true);

    assert_eq!(
        describe(&node, &DEFAULTS_NO_PII),
        "CheckBox { id:remember_me, 48x48px, text-length:11, checked }"
    );
}

#[test]
fn given_a_gone_view_should_describe_it_as_gone() {
    let node = FakeNode::view("FrameLayout").visibility(Visibility::Gone);

    assert_eq!(describe(&node, &DEFAULTS_NO_PII), "FrameLayout { GONE, 0x0px }");
}

fn labels(renderers: &[StateRenderer]) -> Vec<&'static str> {
    renderers.iter().map(StateRenderer::label).collect()
}

#[test]
fn given_layout_defaults_should_follow_the_view_defaults() {
    let no_pii = &DEFAULTS_NO_PII[DEFAULTS_NO_PII.len() - layout::DEFAULTS_NO_PII.len()..];
    let including_pii =
        &DEFAULTS_INCLUDING_PII[DEFAULTS_INCLUDING_PII.len() - layout::DEFAULTS_INCLUDING_PII.len()..];

    assert_eq!(DEFAULTS_NO_PII.len(), 3 + layout::DEFAULTS_NO_PII.len());
    assert_eq!(labels(no_pii), labels(&layout::DEFAULTS_NO_PII[..]));
    assert_eq!(labels(including_pii), labels(&layout::DEFAULTS_INCLUDING_PII[..]));
}

#[test]
fn given_a_layout_text_element_should_respect_pii_defaults() {
    let node = FakeNode::layout("Text").size(80, 20).text("secret");

    assert_eq!(
        describe(&node, &DEFAULTS_NO_PII),
        "Text { 80x20px, text-length:6 }"
    );
    assert_eq!(
        describe(&node, &DEFAULTS_INCLUDING_PII),
        "Text { 80x20px, text-length:6, text:\"secret\" }"
    );
}

#[test]
fn given_defaults_accessed_repeatedly_should_share_the_same_list() {
    let first: *const _ = &*DEFAULTS_NO_PII;
    let second: *const _ = &*DEFAULTS_NO_PII;

    assert_eq!(first, second);
}
