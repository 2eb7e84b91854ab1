//! Mapping view nodes onto render instructions.
//!
//! Rendering is a pure function of the node, the [`RenderConfig`], and the current state of any
//! remote subtrees. It never fails: unknown kinds render as [`RenderInstruction::Empty`] and
//! malformed properties were already dropped when the document was decoded.

use crate::alignment::{Axis, FrameAlignment, HAlign, VAlign};
use crate::config::RenderConfig;
use crate::insets::EdgeInsets;
use crate::properties::{Font, Properties};
use crate::remote::{LoadState, RemoteNode};
use crate::view::{ImageSourceKind, Kind, ViewNode};

/// Abstract, toolkit-neutral output of the renderer.
///
/// A backend turns these into native views.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    /// Renders nothing.
    Empty,
    VStack {
        alignment: HAlign,
        spacing: Option<f64>,
        children: Vec<RenderInstruction>,
    },
    HStack {
        alignment: VAlign,
        spacing: Option<f64>,
        children: Vec<RenderInstruction>,
    },
    ZStack {
        alignment: FrameAlignment,
        children: Vec<RenderInstruction>,
    },
    ScrollView {
        axis: Axis,
        shows_indicators: bool,
        /// A VStack or HStack, depending on the axis.
        content: Box<RenderInstruction>,
    },
    List {
        rows: Vec<RenderInstruction>,
    },
    Text {
        content: String,
        font: Option<Font>,
        /// Numeric weight, 100-900.
        weight: Option<u16>,
    },
    Image {
        source: ImageSource,
    },
    Spacer {
        min_length: Option<f64>,
    },
    Rectangle,
    Circle,
    Divider,
    NavigationView {
        content: Box<RenderInstruction>,
    },
    /// A link without a destination is disabled.
    NavigationLink {
        destination: Option<Box<RenderInstruction>>,
        label: Box<RenderInstruction>,
    },
    /// A remotely loaded subtree; `content` is replaced when the load settles.
    ///
    /// The same reference may appear more than once in a tree; every occurrence shows the same
    /// content.
    Remote {
        node: RemoteNode,
        content: Box<RenderInstruction>,
    },
    /// The host's in-progress indicator.
    Progress,
    /// Content with a modifier applied.
    Modified {
        modifier: Modifier,
        content: Box<RenderInstruction>,
    },
}

/// Image sources, as handed to an image resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// A system icon, by name.
    System(String),
    /// A bundled asset, by name.
    Asset(String),
    /// A remote image.
    Url(String),
}

/// Modifiers applied on top of a node's own instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    /// Hex color string.
    ForegroundColor(String),
    /// Hex color string.
    BackgroundColor(String),
    /// Fixed size.
    Frame {
        width: Option<f64>,
        height: Option<f64>,
        alignment: FrameAlignment,
    },
    /// Flexible size. Maximums may be infinite.
    FlexFrame {
        min_width: Option<f64>,
        ideal_width: Option<f64>,
        max_width: Option<f64>,
        min_height: Option<f64>,
        ideal_height: Option<f64>,
        max_height: Option<f64>,
        alignment: FrameAlignment,
    },
    Border {
        color: String,
        width: f64,
    },
    Padding(EdgeInsets),
}

impl RenderInstruction {
    /// Wraps this instruction in a modifier.
    pub fn modified(self, modifier: Modifier) -> RenderInstruction {
        RenderInstruction::Modified {
            modifier,
            content: Box::new(self),
        }
    }

    /// Returns the direct children, in order.
    pub fn children(&self) -> Vec<&RenderInstruction> {
        use RenderInstruction::*;

        match self {
            VStack { children, .. } | HStack { children, .. } | ZStack { children, .. } => {
                children.iter().collect()
            }
            List { rows } => rows.iter().collect(),
            ScrollView { content, .. }
            | NavigationView { content }
            | Remote { content, .. }
            | Modified { content, .. } => vec![&**content],
            NavigationLink { destination, label } => {
                destination.iter().map(|d| &**d).chain(Some(&**label)).collect()
            }
            Empty | Text { .. } | Image { .. } | Spacer { .. } | Rectangle | Circle | Divider
            | Progress => Vec::new(),
        }
    }

    fn children_mut(&mut self) -> Vec<&mut RenderInstruction> {
        use RenderInstruction::*;

        match self {
            VStack { children, .. } | HStack { children, .. } | ZStack { children, .. } => {
                children.iter_mut().collect()
            }
            List { rows } => rows.iter_mut().collect(),
            ScrollView { content, .. }
            | NavigationView { content }
            | Remote { content, .. }
            | Modified { content, .. } => vec![&mut **content],
            NavigationLink { destination, label } => destination
                .iter_mut()
                .map(|d| &mut **d)
                .chain(Some(&mut **label))
                .collect(),
            Empty | Text { .. } | Image { .. } | Spacer { .. } | Rectangle | Circle | Divider
            | Progress => Vec::new(),
        }
    }

    /// Finds the content of the first remote subtree referencing `node`.
    pub fn remote(&self, node: &RemoteNode) -> Option<&RenderInstruction> {
        if let RenderInstruction::Remote {
            node: remote,
            content,
        } = self
        {
            if remote == node {
                return Some(&**content);
            }
        }
        self.children().into_iter().find_map(|child| child.remote(node))
    }

    /// Replaces the content of every remote subtree referencing `node`.
    ///
    /// Returns the number of subtrees replaced.
    pub fn replace_remote(&mut self, node: &RemoteNode, content: &RenderInstruction) -> usize {
        if let RenderInstruction::Remote {
            node: remote,
            content: current,
        } = self
        {
            if remote == node {
                **current = content.clone();
                return 1;
            }
        }
        self.children_mut()
            .into_iter()
            .map(|child| child.replace_remote(node, content))
            .sum()
    }
}

/// Supplies the current state of remote subtrees.
///
/// Asking for the state may start a load; it must not block.
pub trait RemoteSource {
    fn state(&self, node: &RemoteNode) -> LoadState;
}

/// Nothing is ever loaded: remote subtrees stay in progress.
impl RemoteSource for () {
    fn state(&self, _node: &RemoteNode) -> LoadState {
        LoadState::Loading
    }
}

/// Renders view nodes.
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    remote: &'a dyn RemoteSource,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig, remote: &'a dyn RemoteSource) -> Renderer<'a> {
        Renderer { config, remote }
    }

    /// Renders a node and its subtree.
    pub fn render(&self, node: &ViewNode) -> RenderInstruction {
        let no_properties = Properties::default();
        let properties = node.properties.as_ref().unwrap_or(&no_properties);

        match self.body(node, properties) {
            RenderInstruction::Empty => RenderInstruction::Empty,
            body => self.decorate(body, properties),
        }
    }

    /// Renders a remote subtree in its current state.
    pub fn render_remote(&self, node: &RemoteNode) -> RenderInstruction {
        RenderInstruction::Remote {
            node: node.clone(),
            content: Box::new(self.render_state(&self.remote.state(node))),
        }
    }

    /// Renders the content for a load state.
    pub fn render_state(&self, state: &LoadState) -> RenderInstruction {
        match state {
            LoadState::Loading => RenderInstruction::Progress,
            LoadState::Loaded(node) => self.render(node),
            LoadState::Failed { fallback, .. } => self.render(fallback),
        }
    }

    fn render_all(&self, nodes: &[ViewNode]) -> Vec<RenderInstruction> {
        nodes.iter().map(|node| self.render(node)).collect()
    }

    fn render_first(&self, nodes: &[ViewNode]) -> RenderInstruction {
        nodes
            .first()
            .map_or(RenderInstruction::Empty, |node| self.render(node))
    }

    fn body(&self, node: &ViewNode, properties: &Properties) -> RenderInstruction {
        let kind = match node.kind {
            Some(kind) => kind,
            None => return RenderInstruction::Empty,
        };
        let spacing = properties.spacing.map(f64::from).or(self.config.spacing);

        match kind {
            Kind::VStack => self.vstack(properties, spacing, &node.subviews),
            Kind::HStack => self.hstack(properties, spacing, &node.subviews),
            Kind::ZStack => RenderInstruction::ZStack {
                alignment: properties
                    .alignment
                    .unwrap_or(self.config.alignment)
                    .resolve(),
                children: self.render_all(&node.subviews),
            },
            Kind::ScrollView => {
                let axis = properties.axis.unwrap_or(self.config.axis);
                let content = match axis {
                    Axis::Vertical => self.vstack(properties, spacing, &node.subviews),
                    Axis::Horizontal => self.hstack(properties, spacing, &node.subviews),
                };
                RenderInstruction::ScrollView {
                    axis,
                    shows_indicators: properties
                        .shows_indicators
                        .unwrap_or(self.config.shows_indicators),
                    content: Box::new(content),
                }
            }
            Kind::List => RenderInstruction::List {
                rows: self.render_all(&node.subviews),
            },
            Kind::Text => RenderInstruction::Text {
                content: node
                    .value
                    .as_ref()
                    .and_then(|value| value.text.clone())
                    .unwrap_or_default(),
                font: properties.font,
                weight: properties.font_weight.map(|weight| weight.weight()),
            },
            Kind::Image => self.image(node),
            Kind::Spacer => RenderInstruction::Spacer {
                min_length: properties.min_length,
            },
            Kind::Rectangle => RenderInstruction::Rectangle,
            Kind::Circle => RenderInstruction::Circle,
            Kind::Divider => RenderInstruction::Divider,
            Kind::NavigationView => RenderInstruction::NavigationView {
                content: Box::new(self.render_first(&node.content)),
            },
            Kind::NavigationLink => {
                let destination = match (node.destination_url.first(), node.destination.first()) {
                    (Some(remote), _) => Some(self.render_remote(remote)),
                    (None, Some(inline)) => Some(self.render(inline)),
                    (None, None) => None,
                };
                RenderInstruction::NavigationLink {
                    destination: destination.map(Box::new),
                    label: Box::new(self.render_first(&node.label)),
                }
            }
        }
    }

    fn vstack(
        &self,
        properties: &Properties,
        spacing: Option<f64>,
        subviews: &[ViewNode],
    ) -> RenderInstruction {
        RenderInstruction::VStack {
            alignment: properties
                .horizontal_alignment
                .unwrap_or(self.config.horizontal_alignment)
                .resolve(),
            spacing,
            children: self.render_all(subviews),
        }
    }

    fn hstack(
        &self,
        properties: &Properties,
        spacing: Option<f64>,
        subviews: &[ViewNode],
    ) -> RenderInstruction {
        RenderInstruction::HStack {
            alignment: properties
                .vertical_alignment
                .unwrap_or(self.config.vertical_alignment)
                .resolve(),
            spacing,
            children: self.render_all(subviews),
        }
    }

    fn image(&self, node: &ViewNode) -> RenderInstruction {
        let value = node.value.as_ref();
        let name = value
            .and_then(|value| value.image_source.clone())
            .unwrap_or_default();

        let source = match value.and_then(|value| value.image_source_kind) {
            Some(ImageSourceKind::System) => ImageSource::System(name),
            Some(ImageSourceKind::Local) => ImageSource::Asset(name),
            Some(ImageSourceKind::Url) => ImageSource::Url(name),
            None => {
                return RenderInstruction::Text {
                    content: self.config.parsing_error_text.clone(),
                    font: None,
                    weight: None,
                }
            }
        };
        RenderInstruction::Image { source }
    }

    /// Applies modifiers, innermost first: foreground color, background color, frame, border,
    /// padding.
    fn decorate(&self, body: RenderInstruction, properties: &Properties) -> RenderInstruction {
        let mut instruction = body;
        let default_alignment = self.config.alignment;

        if let Some(color) = &properties.foreground_color {
            instruction = instruction.modified(Modifier::ForegroundColor(color.clone()));
        }
        if let Some(color) = &properties.background_color {
            instruction = instruction.modified(Modifier::BackgroundColor(color.clone()));
        }

        // a fixed frame wins over a flexible one
        if let Some(frame) = &properties.frame {
            instruction = instruction.modified(Modifier::Frame {
                width: frame.width,
                height: frame.height,
                alignment: frame.alignment.unwrap_or(default_alignment).resolve(),
            });
        } else if let Some(frame) = &properties.position_frame {
            instruction = instruction.modified(Modifier::FlexFrame {
                min_width: frame.min_width,
                ideal_width: frame.ideal_width,
                max_width: frame.resolved_max_width(),
                min_height: frame.min_height,
                ideal_height: frame.ideal_height,
                max_height: frame.resolved_max_height(),
                alignment: frame.alignment.unwrap_or(default_alignment).resolve(),
            });
        }

        if let Some(border) = &properties.border {
            // a border without a color draws nothing
            if let Some(color) = &border.color {
                instruction = instruction.modified(Modifier::Border {
                    color: color.clone(),
                    width: border.width.unwrap_or(0.),
                });
            }
        }
        if let Some(padding) = &properties.padding {
            instruction = instruction.modified(Modifier::Padding(padding.insets()));
        }

        instruction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Alignment;
    use crate::error::{LoadError, TransportError};
    use crate::properties::{Border, Frame, Padding, PositionFrame};
    use crate::view::NodeValue;
    use serde_json::json;
    use std::sync::Arc;
    use url::Url;

    fn render(node: &ViewNode) -> RenderInstruction {
        Renderer::new(&RenderConfig::default(), &()).render(node)
    }

    fn render_json(source: serde_json::Value) -> RenderInstruction {
        render(&ViewNode::from_value(source).unwrap())
    }

    fn text(content: &str) -> RenderInstruction {
        RenderInstruction::Text {
            content: content.to_string(),
            font: None,
            weight: None,
        }
    }

    fn remote_node(path: &str) -> RemoteNode {
        RemoteNode::new(Url::parse("https://views.example.com/").unwrap().join(path).unwrap())
    }

    /// Answers with a fixed state for every remote node.
    struct FixedState(LoadState);

    impl RemoteSource for FixedState {
        fn state(&self, _node: &RemoteNode) -> LoadState {
            self.0.clone()
        }
    }

    #[test]
    fn vstack_with_spacing_and_text() {
        let instruction = render_json(json!({
            "type": "VStack",
            "properties": { "spacing": 8 },
            "subviews": [{ "type": "Text", "value": { "text": "Hi" } }]
        }));
        assert_eq!(
            instruction,
            RenderInstruction::VStack {
                alignment: HAlign::Center,
                spacing: Some(8.),
                children: vec![text("Hi")],
            }
        );
    }

    #[test]
    fn system_image() {
        let instruction = render_json(json!({
            "type": "Image",
            "value": { "imageUrl": "gear", "imageType": "system" }
        }));
        assert_eq!(
            instruction,
            RenderInstruction::Image {
                source: ImageSource::System("gear".to_string())
            }
        );
    }

    #[test]
    fn image_sources_by_kind() {
        let asset = render(&ViewNode::image("logo", ImageSourceKind::Local));
        assert_eq!(
            asset,
            RenderInstruction::Image {
                source: ImageSource::Asset("logo".to_string())
            }
        );

        let remote = render(&ViewNode::image(
            "https://img.example.com/a.png",
            ImageSourceKind::Url,
        ));
        assert_eq!(
            remote,
            RenderInstruction::Image {
                source: ImageSource::Url("https://img.example.com/a.png".to_string())
            }
        );
    }

    #[test]
    fn image_without_source_kind_is_a_parsing_error() {
        let instruction = render_json(json!({ "type": "Image", "value": { "imageUrl": "gear" } }));
        assert_eq!(instruction, text("Parsing error."));
    }

    #[test]
    fn unknown_and_missing_kinds_render_nothing() {
        assert_eq!(
            render_json(json!({ "type": "Marquee", "properties": { "padding": { "top": 4 } } })),
            RenderInstruction::Empty
        );
        assert_eq!(render(&ViewNode::empty()), RenderInstruction::Empty);
    }

    #[test]
    fn stack_defaults_and_overrides() {
        let hstack = render_json(json!({ "type": "HStack", "subviews": [{ "type": "Spacer" }] }));
        assert_eq!(
            hstack,
            RenderInstruction::HStack {
                alignment: VAlign::Center,
                spacing: None,
                children: vec![RenderInstruction::Spacer { min_length: None }],
            }
        );

        let zstack = render_json(json!({
            "type": "ZStack",
            "properties": { "alignment": "topRight" },
            "subviews": [{ "type": "Rectangle" }, { "type": "Circle" }]
        }));
        assert_eq!(
            zstack,
            RenderInstruction::ZStack {
                alignment: FrameAlignment::new(HAlign::Trailing, VAlign::Top),
                children: vec![RenderInstruction::Rectangle, RenderInstruction::Circle],
            }
        );

        let config = RenderConfig {
            spacing: Some(3.),
            ..RenderConfig::default()
        };
        let vstack = Renderer::new(&config, &()).render(&ViewNode::new(Kind::VStack));
        assert_eq!(
            vstack,
            RenderInstruction::VStack {
                alignment: HAlign::Center,
                spacing: Some(3.),
                children: Vec::new(),
            }
        );
    }

    #[test]
    fn scroll_view_wraps_a_stack_by_axis() {
        let vertical = render_json(json!({
            "type": "ScrollView",
            "subviews": [{ "type": "Divider" }]
        }));
        assert_eq!(
            vertical,
            RenderInstruction::ScrollView {
                axis: Axis::Vertical,
                shows_indicators: true,
                content: Box::new(RenderInstruction::VStack {
                    alignment: HAlign::Center,
                    spacing: None,
                    children: vec![RenderInstruction::Divider],
                }),
            }
        );

        let horizontal = render_json(json!({
            "type": "ScrollView",
            "properties": {
                "axis": "horizontal",
                "showsIndicators": false,
                "verticalAlignment": "bottom",
                "spacing": 2
            }
        }));
        assert_eq!(
            horizontal,
            RenderInstruction::ScrollView {
                axis: Axis::Horizontal,
                shows_indicators: false,
                content: Box::new(RenderInstruction::HStack {
                    alignment: VAlign::Bottom,
                    spacing: Some(2.),
                    children: Vec::new(),
                }),
            }
        );
    }

    #[test]
    fn list_keeps_row_order() {
        let list = ViewNode::new(Kind::List).with_subviews(vec![
            ViewNode::text("one"),
            ViewNode::text("two"),
            ViewNode::text("three"),
        ]);
        assert_eq!(
            render(&list),
            RenderInstruction::List {
                rows: vec![text("one"), text("two"), text("three")],
            }
        );
    }

    #[test]
    fn text_font_and_weight() {
        let instruction = render_json(json!({
            "type": "Text",
            "properties": { "font": "caption", "fontWeight": "bold" }
        }));
        assert_eq!(
            instruction,
            RenderInstruction::Text {
                content: String::new(),
                font: Some(Font::Caption),
                weight: Some(700),
            }
        );
    }

    #[test]
    fn navigation_view_uses_first_content_only() {
        let node = ViewNode::new(Kind::NavigationView);
        let node = ViewNode {
            content: vec![ViewNode::text("first"), ViewNode::text("second")],
            ..node
        };
        assert_eq!(
            render(&node),
            RenderInstruction::NavigationView {
                content: Box::new(text("first"))
            }
        );
    }

    #[test]
    fn navigation_link_prefers_remote_destination() {
        let remote = remote_node("detail.json");
        let link = ViewNode::new(Kind::NavigationLink)
            .with_destination(ViewNode::text("inline"))
            .with_destination_url(remote.clone())
            .with_label(ViewNode::text("Open"));

        assert_eq!(
            render(&link),
            RenderInstruction::NavigationLink {
                destination: Some(Box::new(RenderInstruction::Remote {
                    node: remote.clone(),
                    content: Box::new(RenderInstruction::Progress),
                })),
                label: Box::new(text("Open")),
            }
        );
    }

    #[test]
    fn navigation_link_inline_and_disabled() {
        let inline = ViewNode::new(Kind::NavigationLink)
            .with_destination(ViewNode::text("inline"))
            .with_label(ViewNode::text("Open"));
        assert_eq!(
            render(&inline),
            RenderInstruction::NavigationLink {
                destination: Some(Box::new(text("inline"))),
                label: Box::new(text("Open")),
            }
        );

        let disabled = ViewNode::new(Kind::NavigationLink).with_label(ViewNode::text("Open"));
        assert_eq!(
            render(&disabled),
            RenderInstruction::NavigationLink {
                destination: None,
                label: Box::new(text("Open")),
            }
        );
    }

    #[test]
    fn remote_content_follows_load_state() {
        let remote = remote_node("detail.json");
        let config = RenderConfig::default();

        let loaded = FixedState(LoadState::Loaded(Arc::new(ViewNode::text("Detail"))));
        assert_eq!(
            Renderer::new(&config, &loaded).render_remote(&remote),
            RenderInstruction::Remote {
                node: remote.clone(),
                content: Box::new(text("Detail")),
            }
        );

        let failed = FixedState(LoadState::Failed {
            fallback: Arc::new(ViewNode::fallback()),
            error: LoadError::Transport(TransportError::Status(404)),
        });
        assert_eq!(
            Renderer::new(&config, &failed).render_remote(&remote),
            RenderInstruction::Remote {
                node: remote.clone(),
                content: Box::new(RenderInstruction::VStack {
                    alignment: HAlign::Center,
                    spacing: None,
                    children: vec![text("Error")],
                }),
            }
        );
    }

    #[test]
    fn modifiers_apply_in_fixed_order() {
        let node = ViewNode::new(Kind::Rectangle).with_properties(Properties {
            foreground_color: Some("#111111".to_string()),
            background_color: Some("#222222".to_string()),
            frame: Some(Frame {
                width: Some(10.),
                height: None,
                alignment: None,
            }),
            border: Some(Border {
                color: Some("#333333".to_string()),
                width: Some(1.),
            }),
            padding: Some(Padding {
                top: Some(4.),
                ..Padding::default()
            }),
            ..Properties::default()
        });

        let expected = RenderInstruction::Rectangle
            .modified(Modifier::ForegroundColor("#111111".to_string()))
            .modified(Modifier::BackgroundColor("#222222".to_string()))
            .modified(Modifier::Frame {
                width: Some(10.),
                height: None,
                alignment: FrameAlignment::CENTER,
            })
            .modified(Modifier::Border {
                color: "#333333".to_string(),
                width: 1.,
            })
            .modified(Modifier::Padding(EdgeInsets::new(4., 0., 0., 0.)));
        assert_eq!(render(&node), expected);
    }

    #[test]
    fn flexible_frame_with_infinite_width() {
        let node = ViewNode::new(Kind::Circle).with_properties(Properties {
            position_frame: Some(PositionFrame {
                min_height: Some(20.),
                alignment: Some(Alignment::Bottom),
                is_width_infinite: true,
                ..PositionFrame::default()
            }),
            ..Properties::default()
        });
        assert_eq!(
            render(&node),
            RenderInstruction::Circle.modified(Modifier::FlexFrame {
                min_width: None,
                ideal_width: None,
                max_width: Some(f64::INFINITY),
                min_height: Some(20.),
                ideal_height: None,
                max_height: None,
                alignment: FrameAlignment::new(HAlign::Center, VAlign::Bottom),
            })
        );
    }

    #[test]
    fn border_without_color_is_skipped() {
        let node = ViewNode::new(Kind::Divider).with_properties(Properties {
            border: Some(Border {
                color: None,
                width: Some(3.),
            }),
            ..Properties::default()
        });
        assert_eq!(render(&node), RenderInstruction::Divider);
    }

    #[test]
    fn rendering_is_idempotent() {
        let node = ViewNode::from_value(json!({
            "type": "NavigationView",
            "content": [{
                "type": "List",
                "properties": { "backgroundColor": "#fff", "positionFrame": { "maxWidth": "infinity" } },
                "subviews": [
                    { "type": "Text", "value": { "text": "a" }, "properties": { "font": "title" } },
                    { "type": "NavigationLink",
                      "destinationUrl": [{ "id": "5b9f5c4e-6a0e-4d7a-9c8e-2f1f0c3b7d11", "url": "https://example.com/x.json" }],
                      "label": [{ "type": "Image", "value": { "imageUrl": "star", "imageType": "system" } }] }
                ]
            }]
        }))
        .unwrap();
        assert_eq!(render(&node), render(&node));
    }

    #[test]
    fn replace_remote_patches_every_matching_subtree() {
        let remote = remote_node("detail.json");
        let link = ViewNode::new(Kind::NavigationLink)
            .with_destination_url(remote.clone())
            .with_label(ViewNode::text("Open"));
        let page = ViewNode::new(Kind::VStack).with_subviews(vec![
            ViewNode::text("header"),
            link.clone(),
            ViewNode::new(Kind::ScrollView).with_content(link),
        ]);
        let mut instruction = render(&page);
        assert_eq!(
            instruction.remote(&remote),
            Some(&RenderInstruction::Progress)
        );

        assert_eq!(instruction.replace_remote(&remote, &text("Detail")), 2);
        let children = instruction.children();
        let [_, first, scroll] = children[..] else {
            panic!("expected three children, got {:?}", children);
        };
        assert_eq!(first.remote(&remote), Some(&text("Detail")));
        assert_eq!(scroll.remote(&remote), Some(&text("Detail")));

        assert_eq!(instruction.replace_remote(&remote_node("elsewhere.json"), &text("x")), 0);
    }

    #[test]
    fn remote_subtrees_are_matched_by_id_and_url() {
        let first = remote_node("a.json");
        let second = RemoteNode {
            url: Url::parse("https://example.com/b.json").unwrap(),
            ..first.clone()
        };
        let page = ViewNode::new(Kind::List).with_subviews(vec![
            ViewNode::new(Kind::NavigationLink)
                .with_destination_url(first.clone())
                .with_label(ViewNode::text("a")),
            ViewNode::new(Kind::NavigationLink)
                .with_destination_url(second.clone())
                .with_label(ViewNode::text("b")),
        ]);
        let mut instruction = render(&page);

        assert_eq!(instruction.replace_remote(&second, &RenderInstruction::Rectangle), 1);
        assert_eq!(instruction.remote(&first), Some(&RenderInstruction::Progress));
        assert_eq!(instruction.remote(&second), Some(&RenderInstruction::Rectangle));
    }

    #[test]
    fn value_is_ignored_for_non_text_kinds() {
        let node = ViewNode::new(Kind::Spacer).with_value(NodeValue {
            text: Some("ignored".to_string()),
            ..NodeValue::default()
        });
        assert_eq!(render(&node), RenderInstruction::Spacer { min_length: None });
    }
}
