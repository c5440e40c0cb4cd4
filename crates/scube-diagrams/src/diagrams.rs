//! The diagram set: face grids of both cube maps, the tessellated cube at
//! every depth, and the printed distortion report.

use std::path::{Path, PathBuf};

use scube_config::{CameraConfig, Config};
use scube_cubesphere::CubeMap;
use scube_cubesphere::metrics::DistortionReport;
use scube_render::{RenderError, SvgDocument, ViewTransform, face_grid, tessellate_cube};
use tracing::info;

/// File names of the face grid diagrams.
pub const LINEAR_FACE_FILE: &str = "cube.svg";
pub const SPHERICAL_FACE_FILE: &str = "scube.svg";
pub const BOTH_FACES_FILE: &str = "both.svg";

/// `cube{depth}.svg`.
#[must_use]
pub fn cube_file_name(depth: u32) -> String {
    format!("cube{depth}.svg")
}

fn document(camera: &CameraConfig) -> SvgDocument {
    SvgDocument::new(camera.viewport.width, camera.viewport.height)
}

/// Write the linear, spherical, and overlaid face grids into `out_dir`.
pub fn write_face_diagrams(config: &Config, out_dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
    let camera = &config.face_camera;
    let view = ViewTransform::from_camera(camera)?;
    let n = config.diagrams.grid_resolution;
    let linear = face_grid(&view, CubeMap::Linear, n)?;
    let spherical = face_grid(&view, CubeMap::Spherical, n)?;
    let linear_stroke = config.diagrams.linear_stroke.as_str();
    let spherical_stroke = config.diagrams.spherical_stroke.as_str();

    let mut written = Vec::with_capacity(3);

    let mut doc = document(camera);
    doc.group(linear_stroke).extend(&linear);
    written.push(write(&doc, out_dir, LINEAR_FACE_FILE)?);

    let mut doc = document(camera);
    doc.group(spherical_stroke).extend(&spherical);
    written.push(write(&doc, out_dir, SPHERICAL_FACE_FILE)?);

    let mut doc = document(camera);
    doc.group(linear_stroke).extend(&linear);
    doc.group(spherical_stroke).extend(&spherical);
    written.push(write(&doc, out_dir, BOTH_FACES_FILE)?);

    Ok(written)
}

/// Write `cube0.svg` through `cube{max_depth}.svg` into `out_dir`.
pub fn write_cube_diagrams(config: &Config, out_dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
    let camera = &config.cube_camera;
    let view = ViewTransform::from_camera(camera)?;

    (0..=config.diagrams.max_depth)
        .map(|depth| {
            let polygons = tessellate_cube(&view, depth)?;
            info!(depth, visible = polygons.len(), "tessellated cube");
            let mut doc = document(camera);
            doc.group(&config.diagrams.cube_stroke).extend(&polygons);
            write(&doc, out_dir, &cube_file_name(depth))
        })
        .collect()
}

fn write(doc: &SvgDocument, out_dir: &Path, name: &str) -> Result<PathBuf, RenderError> {
    let path = out_dir.join(name);
    doc.write(&path)?;
    Ok(path)
}

/// Measure both cube maps at `n`.
pub fn measure_both(n: u32) -> Result<[DistortionReport; 2], RenderError> {
    Ok([
        DistortionReport::measure(CubeMap::Linear, n)?,
        DistortionReport::measure(CubeMap::Spherical, n)?,
    ])
}

/// Report lines: per map, three `min max ratio` lines for the boundary row,
/// the middle row, and across both, then the three edge probes.
#[must_use]
pub fn report_lines(reports: &[DistortionReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for report in reports {
        lines.push(format!(
            "# {} cube map, {n}×{n}",
            report.map,
            n = report.resolution
        ));
        lines.push(report.boundary_row.to_string());
        lines.push(report.middle_row.to_string());
        lines.push(report.across_rows.to_string());
        lines.push(report.probes.corner.to_string());
        lines.push(report.probes.edge_middle.to_string());
        lines.push(report.probes.center.to_string());
    }
    lines
}
