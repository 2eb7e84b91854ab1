use crate::error::{DecodeError, RenderSkip};
use crate::properties::Properties;
use crate::remote::RemoteNode;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A unique identifier for a view.
///
/// (this is just a UUID)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(Uuid);

impl ViewId {
    /// Generates a fresh, random id.
    pub fn new() -> ViewId {
        ViewId(Uuid::new_v4())
    }
}

impl Default for ViewId {
    fn default() -> Self {
        ViewId::new()
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ViewId({})", self.0)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Kinds of views.
///
/// This is a closed set; anything else on the wire decodes to no kind at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Image,
    Text,
    HStack,
    VStack,
    ZStack,
    Rectangle,
    Circle,
    Spacer,
    Divider,
    List,
    ScrollView,
    NavigationView,
    NavigationLink,
}

/// Where an image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSourceKind {
    /// Loaded from a remote URL.
    Url,
    /// A bundled asset, by name.
    Local,
    /// A system icon, by name.
    System,
}

/// The payload of a text or image view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_source: Option<String>,
    #[serde(
        rename = "imageType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_source_kind: Option<ImageSourceKind>,
}

/// A node in a view document.
///
/// A node carries several child collections; which one is read depends on its kind, and the
/// others are ignored. Only the first element of `content`, `destination`, `destination_url`,
/// and `label` is ever used.
///
/// Equality compares content only: the `id` is a rendering key and is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewNode {
    /// Generated on decode and never encoded; a wire `id` is ignored.
    #[serde(skip)]
    pub id: ViewId,

    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_kind",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<Kind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<NodeValue>,

    #[serde(
        default,
        deserialize_with = "lenient_properties",
        skip_serializing_if = "Option::is_none"
    )]
    pub properties: Option<Properties>,

    #[serde(default, deserialize_with = "nullable_seq", skip_serializing_if = "Vec::is_empty")]
    pub subviews: Vec<ViewNode>,

    #[serde(default, deserialize_with = "nullable_seq", skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ViewNode>,

    #[serde(default, deserialize_with = "nullable_seq", skip_serializing_if = "Vec::is_empty")]
    pub destination: Vec<ViewNode>,

    #[serde(default, deserialize_with = "nullable_seq", skip_serializing_if = "Vec::is_empty")]
    pub destination_url: Vec<RemoteNode>,

    #[serde(default, deserialize_with = "nullable_seq", skip_serializing_if = "Vec::is_empty")]
    pub label: Vec<ViewNode>,
}

impl ViewNode {
    /// Creates a node of the given kind with nothing else set.
    pub fn new(kind: Kind) -> ViewNode {
        ViewNode {
            kind: Some(kind),
            ..ViewNode::empty()
        }
    }

    /// Creates a node without a kind. It renders as nothing.
    pub fn empty() -> ViewNode {
        ViewNode {
            id: ViewId::new(),
            kind: None,
            value: None,
            properties: None,
            subviews: Vec::new(),
            content: Vec::new(),
            destination: Vec::new(),
            destination_url: Vec::new(),
            label: Vec::new(),
        }
    }

    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> ViewNode {
        ViewNode::new(Kind::Text).with_value(NodeValue {
            text: Some(text.into()),
            ..NodeValue::default()
        })
    }

    /// Creates an image node.
    pub fn image(source: impl Into<String>, kind: ImageSourceKind) -> ViewNode {
        ViewNode::new(Kind::Image).with_value(NodeValue {
            text: None,
            image_source: Some(source.into()),
            image_source_kind: Some(kind),
        })
    }

    /// The tree shown in place of a remote subtree that could not be loaded.
    pub fn fallback() -> ViewNode {
        ViewNode::new(Kind::VStack).with_subviews(vec![ViewNode::text("Error")])
    }

    pub fn with_value(mut self, value: NodeValue) -> ViewNode {
        self.value = Some(value);
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> ViewNode {
        self.properties = Some(properties);
        self
    }

    pub fn with_subviews(mut self, subviews: Vec<ViewNode>) -> ViewNode {
        self.subviews = subviews;
        self
    }

    pub fn with_content(mut self, content: ViewNode) -> ViewNode {
        self.content = vec![content];
        self
    }

    pub fn with_destination(mut self, destination: ViewNode) -> ViewNode {
        self.destination = vec![destination];
        self
    }

    pub fn with_destination_url(mut self, destination: RemoteNode) -> ViewNode {
        self.destination_url = vec![destination];
        self
    }

    pub fn with_label(mut self, label: ViewNode) -> ViewNode {
        self.label = vec![label];
        self
    }

    /// Decodes a document from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<ViewNode, DecodeError> {
        let value: Value = serde_json::from_slice(bytes)?;
        ViewNode::from_value(value)
    }

    /// Decodes a document from a JSON value. The value must be an object.
    pub fn from_value(value: Value) -> Result<ViewNode, DecodeError> {
        if !value.is_object() {
            return Err(DecodeError::malformed(format!(
                "expected a view object, found {}",
                json_type_name(&value)
            )));
        }
        check_remote_references(&value)?;
        Ok(ViewNode::deserialize(value)?)
    }

    /// Encodes the node. The id is not part of the encoded form.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Encodes the node as JSON bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}

impl FromStr for ViewNode {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<ViewNode, DecodeError> {
        ViewNode::from_slice(s.as_bytes())
    }
}

impl PartialEq for ViewNode {
    fn eq(&self, other: &ViewNode) -> bool {
        self.kind == other.kind
            && self.value == other.value
            && self.properties == other.properties
            && self.subviews == other.subviews
            && self.content == other.content
            && self.destination == other.destination
            && self.destination_url == other.destination_url
            && self.label == other.label
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Remote references must name both an id and a URL.
fn check_remote_references(value: &Value) -> Result<(), DecodeError> {
    let node = match value.as_object() {
        Some(node) => node,
        None => return Ok(()),
    };

    let references = node.get("destinationUrl").and_then(Value::as_array);
    for reference in references.into_iter().flatten().filter_map(Value::as_object) {
        for field in ["id", "url"] {
            if !reference.contains_key(field) {
                return Err(DecodeError::MissingField {
                    field: field.to_string(),
                });
            }
        }
    }

    for key in ["subviews", "content", "destination", "label"] {
        let children = node.get(key).and_then(Value::as_array);
        for child in children.into_iter().flatten() {
            check_remote_references(child)?;
        }
    }
    Ok(())
}

/// Decodes the view type, treating unknown or non-string tags as no kind at all.
fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Kind>, D::Error> {
    let tag = match Option::<Value>::deserialize(deserializer)? {
        Some(tag) => tag,
        None => return Ok(None),
    };

    match serde_json::from_value::<Kind>(tag.clone()) {
        Ok(kind) => Ok(Some(kind)),
        Err(_) => {
            let tag = match tag {
                Value::String(tag) => tag,
                other => other.to_string(),
            };
            tracing::debug!("{}", RenderSkip::UnknownKind(tag));
            Ok(None)
        }
    }
}

fn lenient_properties<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Properties>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(Properties::from_value_lenient(value))
}

/// Absent and `null` collections are both empty.
fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
