//! SVG document type and loading

use std::fs;
use std::path::Path as FilePath;

use inkpath_core::Path;
use usvg::{Options, Tree};

use crate::error::SvgError;
use crate::fit::FitTransform;
use crate::path::append_contours;

/// A loaded and parsed SVG document
///
/// Parsing is delegated to `usvg`, which lowers the full SVG feature set
/// (shapes, arcs, text, transforms) into plain path geometry.
#[derive(Clone)]
pub struct SvgDocument {
    /// The underlying usvg tree
    tree: Tree,
    /// Original viewBox/size of the SVG
    pub width: f32,
    pub height: f32,
}

impl SvgDocument {
    /// Load an SVG document from a file
    pub fn from_file(path: impl AsRef<FilePath>) -> Result<Self, SvgError> {
        let data = fs::read(path)?;
        Self::from_data(&data)
    }

    /// Load an SVG document from raw bytes
    pub fn from_data(data: &[u8]) -> Result<Self, SvgError> {
        let options = Options::default();
        let tree = Tree::from_data(data, &options).map_err(|e| SvgError::Parse(e.to_string()))?;

        let size = tree.size();

        Ok(Self {
            tree,
            width: size.width(),
            height: size.height(),
        })
    }

    /// Load an SVG document from a string
    pub fn from_str(svg_str: &str) -> Result<Self, SvgError> {
        Self::from_data(svg_str.as_bytes())
    }

    /// Get the original size of the SVG
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Extract every contour of the document, in document order
    ///
    /// Later contours draw on top of earlier ones, so the order is part of
    /// the contract. Coordinates are in document space with each node's
    /// absolute transform already applied.
    pub fn contours(&self) -> Vec<Path> {
        let mut contours = Vec::new();
        self.collect_contours(self.tree.root(), &mut contours);
        contours
    }

    /// Extract every contour, fitted into a `width x height` viewport
    ///
    /// The whole document is uniformly scaled to fit and centered; see
    /// [`FitTransform`].
    pub fn contours_for_viewport(&self, width: f32, height: f32) -> Result<Vec<Path>, SvgError> {
        let fit = FitTransform::fit(self.width, self.height, width, height)?;
        tracing::debug!(
            "fitting {}x{} document into {}x{} viewport (scale {})",
            self.width,
            self.height,
            width,
            height,
            fit.scale
        );
        Ok(self.contours().iter().map(|c| fit.apply(c)).collect())
    }

    /// Recursively collect contours from the node tree
    fn collect_contours(&self, group: &usvg::Group, contours: &mut Vec<Path>) {
        for child in group.children() {
            match child {
                usvg::Node::Group(g) => {
                    // Recurse into groups (transforms are handled per-path via abs_transform)
                    self.collect_contours(g, contours);
                }
                usvg::Node::Path(p) => {
                    append_contours(p.data(), &p.abs_transform(), contours);
                }
                usvg::Node::Image(_) => {
                    // Embedded raster images have no stroke geometry
                }
                usvg::Node::Text(_) => {
                    // Text is converted to paths by usvg
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpath_core::{PathCommand, Point};

    #[test]
    fn test_parse_simple_svg() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
                <rect x="10" y="10" width="80" height="80" fill="red"/>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        assert_eq!(doc.width, 100.0);
        assert_eq!(doc.height, 100.0);

        let contours = doc.contours();
        assert_eq!(contours.len(), 1);
        let bounds = contours[0].bounds();
        assert_eq!(bounds.x(), 10.0);
        assert_eq!(bounds.width(), 80.0);
    }

    #[test]
    fn test_parse_failure_is_an_error() {
        assert!(matches!(
            SvgDocument::from_str("this is not svg"),
            Err(SvgError::Parse(_))
        ));
    }

    #[test]
    fn test_multi_subpath_element_splits_into_contours() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
                <path d="M0 10 L40 10 M0 30 L40 30" stroke="black" fill="none"/>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        let contours = doc.contours();
        assert_eq!(contours.len(), 2);
        for contour in &contours {
            assert!(matches!(contour.commands()[0], PathCommand::MoveTo(_)));
        }
        // Document order is preserved
        assert!(contours[0].bounds().y() < contours[1].bounds().y());
    }

    #[test]
    fn test_document_order_across_elements() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
                <path d="M0 0 L10 0" stroke="black" fill="none"/>
                <path d="M0 50 L10 50" stroke="black" fill="none"/>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        let contours = doc.contours();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].bounds().y(), 0.0);
        assert_eq!(contours[1].bounds().y(), 50.0);
    }

    #[test]
    fn test_contours_for_viewport_applies_the_fit() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
                <path d="M0 0 L100 0" stroke="black" fill="none"/>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        let contours = doc.contours_for_viewport(50.0, 50.0).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(
            contours[0].commands()[0],
            PathCommand::MoveTo(Point::new(0.0, 0.0))
        );
        assert_eq!(
            contours[0].commands()[1],
            PathCommand::LineTo(Point::new(50.0, 0.0))
        );
    }

    #[test]
    fn test_zero_viewport_is_rejected() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
                <rect x="0" y="0" width="10" height="10" fill="red"/>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        assert!(matches!(
            doc.contours_for_viewport(0.0, 50.0),
            Err(SvgError::EmptyViewport { .. })
        ));
    }
}
