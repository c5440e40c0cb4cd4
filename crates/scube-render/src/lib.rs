//! Line-drawing pipeline for cube map diagrams: the camera transform, the
//! adaptive face tessellator with back-face culling, face grid polylines,
//! and the SVG emitter.

mod error;
pub mod grid;
mod polygon;
pub mod svg;
pub mod tessellate;
mod view;

pub use error::RenderError;
pub use grid::face_grid;
pub use polygon::Polygon;
pub use svg::{SvgDocument, SvgGroup};
pub use tessellate::{ParamRect, is_front_facing, tessellate_cube, tessellate_face};
pub use view::ViewTransform;
