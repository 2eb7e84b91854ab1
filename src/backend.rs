//! Traits for backends.
//!
//! The core never talks to a UI toolkit directly. A backend receives render instructions (a
//! whole tree once, then replacements for remote subtrees as they settle) and turns them into
//! native views; an image resolver loads the images those instructions refer to.

use crate::remote::RemoteNode;
use crate::render::{ImageSource, RenderInstruction};

/// A backend implementation.
pub trait Backend {
    /// Error type.
    type Error;

    /// Replaces the whole view hierarchy.
    fn set_root(&mut self, root: &RenderInstruction) -> Result<(), Self::Error>;

    /// Replaces the content of every remote subtree referencing `node`.
    fn replace(&mut self, node: &RemoteNode, content: &RenderInstruction)
        -> Result<(), Self::Error>;
}

/// Result of resolving an image source.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageResolution<D> {
    /// The image is ready to draw.
    Ready(D),
    /// The image is still loading; the backend should ask again later.
    Pending,
    /// The image could not be loaded.
    Failed(String),
}

/// Host image loading.
pub trait ImageResolver {
    /// Whatever the backend draws.
    type Drawable;

    fn resolve(&mut self, source: &ImageSource) -> ImageResolution<Self::Drawable>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::render::Renderer;
    use crate::view::{ImageSourceKind, Kind, ViewNode};

    /// Knows a few system icons, loads URLs slowly, and has no assets.
    struct IconResolver;

    impl ImageResolver for IconResolver {
        type Drawable = &'static str;

        fn resolve(&mut self, source: &ImageSource) -> ImageResolution<&'static str> {
            match source {
                ImageSource::System(name) if name == "gear" => {
                    ImageResolution::Ready("gear-glyph")
                }
                ImageSource::System(name) => ImageResolution::Failed(format!("no icon {}", name)),
                ImageSource::Url(_) => ImageResolution::Pending,
                ImageSource::Asset(name) => ImageResolution::Failed(format!("no asset {}", name)),
            }
        }
    }

    fn resolve_all<R: ImageResolver>(
        resolver: &mut R,
        instruction: &RenderInstruction,
        out: &mut Vec<ImageResolution<R::Drawable>>,
    ) {
        if let RenderInstruction::Image { source } = instruction {
            out.push(resolver.resolve(source));
        }
        for child in instruction.children() {
            resolve_all(resolver, child, out);
        }
    }

    #[test]
    fn images_are_resolved_in_tree_order() {
        let page = ViewNode::new(Kind::HStack).with_subviews(vec![
            ViewNode::image("gear", ImageSourceKind::System),
            ViewNode::new(Kind::ZStack).with_subviews(vec![
                ViewNode::image("https://img.example.com/a.png", ImageSourceKind::Url),
                ViewNode::image("logo", ImageSourceKind::Local),
            ]),
        ]);
        let instruction = Renderer::new(&RenderConfig::default(), &()).render(&page);

        let mut resolved = Vec::new();
        resolve_all(&mut IconResolver, &instruction, &mut resolved);
        assert_eq!(
            resolved,
            vec![
                ImageResolution::Ready("gear-glyph"),
                ImageResolution::Pending,
                ImageResolution::Failed("no asset logo".to_string()),
            ]
        );
    }
}
