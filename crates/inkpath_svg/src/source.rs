//! Permissive SVG holder yielding measurable paths per viewport
//!
//! `SvgSource` is the surface an animated view talks to: load once, then
//! ask for measured paths whenever the viewport size is known or changes.
//! A document that fails to load is logged and treated as absent — a
//! missing image simply animates nothing, it never panics the animation
//! loop.

use std::path::Path as FilePath;

use inkpath_measure::{MeasureOptions, MeasuredPath};

use crate::document::SvgDocument;
use crate::error::SvgError;

/// Loads a vector document once and produces measurable paths fitted to a
/// viewport
pub struct SvgSource {
    document: Option<SvgDocument>,
    paths: Vec<MeasuredPath>,
    options: MeasureOptions,
}

impl SvgSource {
    pub fn new() -> Self {
        Self::with_options(MeasureOptions::default())
    }

    /// Create a source with an explicit flattening tolerance for all of
    /// its paths
    pub fn with_options(options: MeasureOptions) -> Self {
        Self {
            document: None,
            paths: Vec::new(),
            options,
        }
    }

    /// Load the document from raw bytes
    ///
    /// The first successful load wins; further calls are ignored. A parse
    /// failure is logged and leaves the source unloaded.
    pub fn load_data(&mut self, data: &[u8]) {
        if self.document.is_some() {
            return;
        }
        match SvgDocument::from_data(data) {
            Ok(document) => self.document = Some(document),
            Err(e) => tracing::error!("could not load SVG document: {}", e),
        }
    }

    /// Load the document from a string
    pub fn load_str(&mut self, svg_str: &str) {
        self.load_data(svg_str.as_bytes());
    }

    /// Load the document from a file
    pub fn load_file(&mut self, path: impl AsRef<FilePath>) {
        if self.document.is_some() {
            return;
        }
        match SvgDocument::from_file(path) {
            Ok(document) => self.document = Some(document),
            Err(e) => tracing::error!("could not load SVG document: {}", e),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn document(&self) -> Option<&SvgDocument> {
        self.document.as_ref()
    }

    /// Fit the document into a viewport and rebuild the measured path set
    ///
    /// Returns one `MeasuredPath` per contour, in document order; the set
    /// is cached on the source and stays available through
    /// [`paths`](SvgSource::paths) / [`paths_mut`](SvgSource::paths_mut)
    /// until the next fit. An unloaded source yields an empty set. A
    /// degenerate viewport is an error whether or not a document is
    /// loaded.
    pub fn paths_for_viewport(
        &mut self,
        width: f32,
        height: f32,
    ) -> Result<&mut [MeasuredPath], SvgError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SvgError::EmptyViewport { width, height });
        }

        let Some(document) = &self.document else {
            self.paths.clear();
            return Ok(&mut self.paths);
        };

        let contours = document.contours_for_viewport(width, height)?;
        let mut paths = Vec::with_capacity(contours.len());
        for contour in contours {
            paths.push(MeasuredPath::with_options(contour, self.options)?);
        }
        self.paths = paths;
        Ok(&mut self.paths)
    }

    /// The measured paths from the most recent fit
    pub fn paths(&self) -> &[MeasuredPath] {
        &self.paths
    }

    /// Mutable access to the measured paths, for the animation driver
    pub fn paths_mut(&mut self) -> &mut [MeasuredPath] {
        &mut self.paths
    }
}

impl Default for SvgSource {
    fn default() -> Self {
        Self::new()
    }
}
