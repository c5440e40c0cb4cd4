//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use scube_math::Frustum;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Deepest subdivision accepted for the tessellated cube (`4^8` quads per face).
pub const MAX_SUBDIVISION_DEPTH: u32 = 8;

/// Top-level diagram configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Camera for the single-face grid diagrams. Unset fields come from
    /// [`CameraConfig::face_view`].
    #[serde(deserialize_with = "face_camera")]
    pub face_camera: CameraConfig,
    /// Camera for the tessellated cube diagrams. Unset fields come from
    /// [`CameraConfig::cube_overview`].
    #[serde(deserialize_with = "cube_camera")]
    pub cube_camera: CameraConfig,
    /// Output settings.
    pub diagrams: DiagramConfig,
    /// Distortion report settings.
    pub report: ReportConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Which projection matrix the camera uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectionKind {
    Perspective,
    Orthogonal,
}

/// A fixed camera: viewport, projection volume, and optional orbit.
///
/// Each camera section in `config.ron` is read on top of its own preset,
/// so a partial section keeps the rest of that preset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CameraConfig {
    pub projection: ProjectionKind,
    pub frustum: FrustumConfig,
    /// Model placement in front of the camera; `None` leaves the model at the origin.
    pub orbit: Option<OrbitConfig>,
    pub viewport: ViewportConfig,
}

/// Clipping-plane distances.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrustumConfig {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

/// Pushes the model away from the camera and turns it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Distance along −Z.
    pub distance: f64,
    /// Rotation about X in degrees.
    pub pitch_deg: f64,
    /// Rotation about Y in degrees, applied before the pitch.
    pub yaw_deg: f64,
}

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

/// Which diagrams to write and where.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiagramConfig {
    /// Directory the SVG files are written to.
    pub output_dir: PathBuf,
    /// Cells per side of the face grid diagrams.
    pub grid_resolution: u32,
    /// Cube diagrams are written for every depth in `0..=max_depth`.
    pub max_depth: u32,
    /// Stroke color of the linear cube map grid.
    pub linear_stroke: String,
    /// Stroke color of the spherical cube map grid.
    pub spherical_stroke: String,
    /// Stroke color of the tessellated cube.
    pub cube_stroke: String,
}

/// Distortion report configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the report after writing diagrams.
    pub enabled: bool,
    /// Cells per side of the measured face.
    pub resolution: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl CameraConfig {
    /// Orthogonal view straight down the +Z face, framing `[-0.75, 0.75]²`.
    #[must_use]
    pub fn face_view() -> Self {
        Self {
            projection: ProjectionKind::Orthogonal,
            frustum: FrustumConfig::symmetric(0.75, 1.0, 10.0),
            orbit: None,
            viewport: ViewportConfig::default(),
        }
    }

    /// Perspective view of the unit cube from five units away, turned so three faces show.
    #[must_use]
    pub fn cube_overview() -> Self {
        Self {
            projection: ProjectionKind::Perspective,
            frustum: FrustumConfig::default(),
            orbit: Some(OrbitConfig::default()),
            viewport: ViewportConfig::default(),
        }
    }
}

impl FrustumConfig {
    #[must_use]
    pub fn symmetric(s: f64, near: f64, far: f64) -> Self {
        Self {
            left: -s,
            right: s,
            bottom: -s,
            top: s,
            near,
            far,
        }
    }

    #[must_use]
    pub fn to_frustum(&self) -> Frustum {
        Frustum::new(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

// --- Default implementations ---

impl Default for Config {
    fn default() -> Self {
        Self {
            face_camera: CameraConfig::face_view(),
            cube_camera: CameraConfig::cube_overview(),
            diagrams: DiagramConfig::default(),
            report: ReportConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl Default for FrustumConfig {
    fn default() -> Self {
        Self::symmetric(0.25, 1.0, 10.0)
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            pitch_deg: -10.0,
            yaw_deg: 25.0,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            grid_resolution: 16,
            max_depth: 4,
            linear_stroke: "red".to_string(),
            spherical_stroke: "blue".to_string(),
            cube_stroke: "black".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            resolution: 1024,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Partial camera sections ---

/// A camera section as written; absent fields are `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CameraOverrides {
    #[serde(deserialize_with = "present")]
    projection: Option<ProjectionKind>,
    frustum: FrustumOverrides,
    /// `Some(None)` when the section says `orbit: None`.
    #[serde(deserialize_with = "present")]
    orbit: Option<Option<OrbitOverrides>>,
    #[serde(deserialize_with = "present")]
    viewport: Option<ViewportConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrustumOverrides {
    #[serde(deserialize_with = "present")]
    left: Option<f64>,
    #[serde(deserialize_with = "present")]
    right: Option<f64>,
    #[serde(deserialize_with = "present")]
    bottom: Option<f64>,
    #[serde(deserialize_with = "present")]
    top: Option<f64>,
    #[serde(deserialize_with = "present")]
    near: Option<f64>,
    #[serde(deserialize_with = "present")]
    far: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OrbitOverrides {
    #[serde(deserialize_with = "present")]
    distance: Option<f64>,
    #[serde(deserialize_with = "present")]
    pitch_deg: Option<f64>,
    #[serde(deserialize_with = "present")]
    yaw_deg: Option<f64>,
}

/// Marks a field as written without requiring `Some(..)` in the file.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn face_camera<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CameraConfig, D::Error> {
    CameraOverrides::deserialize(deserializer).map(|o| o.over(CameraConfig::face_view()))
}

fn cube_camera<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CameraConfig, D::Error> {
    CameraOverrides::deserialize(deserializer).map(|o| o.over(CameraConfig::cube_overview()))
}

impl CameraOverrides {
    fn over(self, base: CameraConfig) -> CameraConfig {
        let orbit = match self.orbit {
            None => base.orbit,
            Some(None) => None,
            Some(Some(orbit)) => Some(orbit.over(base.orbit.unwrap_or_default())),
        };
        CameraConfig {
            projection: self.projection.unwrap_or(base.projection),
            frustum: self.frustum.over(base.frustum),
            orbit,
            viewport: self.viewport.unwrap_or(base.viewport),
        }
    }
}

impl FrustumOverrides {
    fn over(self, base: FrustumConfig) -> FrustumConfig {
        FrustumConfig {
            left: self.left.unwrap_or(base.left),
            right: self.right.unwrap_or(base.right),
            bottom: self.bottom.unwrap_or(base.bottom),
            top: self.top.unwrap_or(base.top),
            near: self.near.unwrap_or(base.near),
            far: self.far.unwrap_or(base.far),
        }
    }
}

impl OrbitOverrides {
    fn over(self, base: OrbitConfig) -> OrbitConfig {
        OrbitConfig {
            distance: self.distance.unwrap_or(base.distance),
            pitch_deg: self.pitch_deg.unwrap_or(base.pitch_deg),
            yaw_deg: self.yaw_deg.unwrap_or(base.yaw_deg),
        }
    }
}

// --- Validation ---

impl CameraConfig {
    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid(format!("{name}: viewport is empty")));
        }
        self.frustum
            .to_frustum()
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("{name}: {e}")))?;
        if self.projection == ProjectionKind::Perspective && self.frustum.near <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{name}: perspective near plane must be positive"
            )));
        }
        if let Some(orbit) = &self.orbit
            && ![orbit.distance, orbit.pitch_deg, orbit.yaw_deg]
                .iter()
                .all(|x| x.is_finite())
        {
            return Err(ConfigError::Invalid(format!("{name}: orbit must be finite")));
        }
        Ok(())
    }
}

impl Config {
    /// Reject settings that would divide by zero or recurse without bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.face_camera.validate("face_camera")?;
        self.cube_camera.validate("cube_camera")?;
        if self.diagrams.grid_resolution == 0 {
            return Err(ConfigError::Invalid(
                "diagrams.grid_resolution must be positive".to_string(),
            ));
        }
        if self.diagrams.max_depth > MAX_SUBDIVISION_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "diagrams.max_depth {} exceeds {MAX_SUBDIVISION_DEPTH}",
                self.diagrams.max_depth
            )));
        }
        if self.report.resolution == 0 {
            return Err(ConfigError::Invalid(
                "report.resolution must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
