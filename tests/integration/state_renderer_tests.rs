use core::any::Any;

use view_xray::testing::FakeNode;
use view_xray::{
    describe, render_attributes, AttributeList, ScannableNode, StateRenderer,
    TextViewCapability, ViewCapability, VIEW_RENDERER,
};

use super::{constant_renderer, render};

#[test]
fn given_renderers_in_order_should_append_in_the_same_order() {
    let node = FakeNode::view("View");
    let renderers = [
        constant_renderer("a"),
        constant_renderer("b"),
        constant_renderer("c"),
    ];

    assert_eq!(render_attributes(&node, &renderers).as_slice(), ["a", "b", "c"]);
}

#[test]
fn given_a_renderer_appending_several_attributes_should_keep_call_order() {
    let renderer = StateRenderer::new("pair", |out, _node| {
        out.append("first");
        out.append("");
        out.append("second");
    });

    assert_eq!(render(&FakeNode::view("View"), &renderer), ["first", "", "second"]);
}

#[test]
fn given_a_capability_the_node_lacks_should_not_invoke_the_render_fn() {
    let renderer = StateRenderer::for_capability::<TextViewCapability>(|_out, _text_view| {
        panic!("render fn must not run for non-matching nodes");
    });
    let mut attributes = AttributeList::new();

    renderer.render(&mut attributes, &FakeNode::layout("Box"));

    assert!(attributes.is_empty());
}

#[test]
fn given_a_matching_capability_should_pass_the_underlying_object() {
    let renderer = StateRenderer::for_capability::<ViewCapability>(|out, view| {
        out.append(&format!("area:{}", view.width() * view.height()));
    });

    assert_eq!(render(&FakeNode::view("View").size(4, 5), &renderer), ["area:20"]);
}

#[test]
fn given_a_plain_vec_as_appendable_should_collect_attributes() {
    let mut attributes: Vec<String> = Vec::new();

    VIEW_RENDERER.render(&mut attributes, &FakeNode::view("View").focused());

    assert_eq!(attributes, ["0x0px", "focused"]);
}

struct Slider {
    value: u8,
}

struct SliderNode(Slider);

impl ScannableNode for SliderNode {
    fn display_name(&self) -> &str {
        "Slider"
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(&self.0)
    }
}

struct OpaqueNode;

impl ScannableNode for OpaqueNode {
    fn display_name(&self) -> &str {
        "Opaque"
    }
}

fn slider_renderer() -> StateRenderer {
    StateRenderer::for_type::<Slider>(|out, slider| out.append(&format!("value:{}", slider.value)))
}

#[test]
fn given_a_concrete_type_renderer_should_render_matching_objects() {
    let node = SliderNode(Slider { value: 30 });

    assert_eq!(describe(&node, &[slider_renderer()]), "Slider { value:30 }");
}

#[test]
fn given_a_concrete_type_renderer_should_skip_other_objects() {
    assert_eq!(describe(&OpaqueNode, &[slider_renderer()]), "Opaque { }");
    assert_eq!(
        describe(&FakeNode::view("View"), &[slider_renderer()]),
        "View { }"
    );
}

#[test]
fn given_builtins_mixed_with_custom_renderers_should_keep_caller_order() {
    let renderers = [
        constant_renderer("before"),
        (*VIEW_RENDERER).clone(),
        constant_renderer("after"),
    ];

    assert_eq!(
        describe(&FakeNode::view("View").size(1, 2), &renderers),
        "View { before, 1x2px, after }"
    );
}

#[test]
fn given_a_panicking_renderer_should_still_run_the_rest() {
    let renderers = [
        constant_renderer("a"),
        StateRenderer::new("broken", |out, _node| {
            out.append("partial");
            panic!("broken renderer");
        }),
        constant_renderer("c"),
    ];

    assert_eq!(
        render_attributes(&FakeNode::view("View"), &renderers).as_slice(),
        ["a", "partial", "c"]
    );
}

#[test]
fn given_a_capability_renderer_should_be_labelled_by_capability() {
    let renderer = StateRenderer::for_capability::<ViewCapability>(|_out, _view| {});

    assert!(renderer.label().ends_with("ViewCapability"));
    assert!(format!("{renderer:?}").contains("ViewCapability"));
}

#[test]
fn given_renderers_shared_across_threads_should_render_independently() {
    let handles: Vec<_> = (0..4u32)
        .map(|width| {
            std::thread::spawn(move || {
                let node = FakeNode::view("View").size(width, 1);
                render(&node, &VIEW_RENDERER)
            })
        })
        .collect();

    for (width, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), [format!("{width}x1px")]);
    }
}
