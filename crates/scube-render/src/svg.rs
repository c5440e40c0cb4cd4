//! Minimal SVG writer for line diagrams.
//!
//! A document is a list of stroked groups, each holding one `<path>` per
//! polygon. Open polylines keep their full-precision coordinates; closed
//! loops are truncated to whole pixels.

use std::fmt::Write;
use std::path::Path;

use glam::DVec2;
use tracing::info;

use crate::{Polygon, RenderError};

/// A group of unfilled paths sharing a stroke color.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgGroup {
    stroke: String,
    paths: Vec<String>,
}

impl SvgGroup {
    fn new(stroke: &str) -> Self {
        Self {
            stroke: stroke.to_string(),
            paths: Vec::new(),
        }
    }

    /// Append `polygon` as a path. Empty polygons are skipped.
    pub fn push(&mut self, polygon: &Polygon) -> &mut Self {
        if let Some(d) = path_data(polygon) {
            self.paths.push(d);
        }
        self
    }

    /// Append every polygon in order.
    pub fn extend<'a>(&mut self, polygons: impl IntoIterator<Item = &'a Polygon>) -> &mut Self {
        for polygon in polygons {
            self.push(polygon);
        }
        self
    }

    #[must_use]
    pub fn stroke(&self) -> &str {
        &self.stroke
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// An SVG 1.2 Tiny document of the given pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    groups: Vec<SvgGroup>,
}

impl SvgDocument {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            groups: Vec::new(),
        }
    }

    /// Start a new `fill="none"` group stroked with `stroke`.
    pub fn group(&mut self, stroke: &str) -> &mut SvgGroup {
        let index = self.groups.len();
        self.groups.push(SvgGroup::new(stroke));
        &mut self.groups[index]
    }

    #[must_use]
    pub fn groups(&self) -> &[SvgGroup] {
        &self.groups
    }

    /// Total number of paths across all groups.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.groups.iter().map(SvgGroup::len).sum()
    }

    /// Render the document.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.2" baseProfile="tiny" width="{w}px" height="{h}px" viewBox="0 0 {w} {h}">"#
        );
        svg.push('\n');

        for group in &self.groups {
            let _ = writeln!(
                svg,
                r#"  <g fill="none" stroke="{}">"#,
                escape_attribute(&group.stroke)
            );
            for d in &group.paths {
                let _ = writeln!(svg, r#"    <path d="{d}"/>"#);
            }
            svg.push_str("  </g>\n");
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the rendered document to `path`.
    ///
    /// # Errors
    /// [`RenderError::Write`] if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, self.to_svg_string()).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            groups = self.groups.len(),
            paths = self.path_count(),
            "wrote diagram"
        );
        Ok(())
    }
}

/// `M x y L x y …`, closed with `z` for loops.
fn path_data(polygon: &Polygon) -> Option<String> {
    let (first, rest) = polygon.points.split_first()?;
    let mut d = String::new();
    if polygon.closed {
        let pixel = |p: &DVec2| (p.x as i64, p.y as i64);
        let (x, y) = pixel(first);
        let _ = write!(d, "M{x} {y}");
        for p in rest {
            let (x, y) = pixel(p);
            let _ = write!(d, "L{x} {y}");
        }
        d.push('z');
    } else {
        let _ = write!(d, "M{} {}", first.x, first.y);
        for p in rest {
            let _ = write!(d, "L{} {}", p.x, p.y);
        }
    }
    Some(d)
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
