//! The six faces of the cube and the table that places the canonical face on each.

use std::fmt;

use scube_math::Vec3;

/// The six faces of the cube.
///
/// Every face shares one canonical parameterization on the `+Z` face; the
/// orientation table permutes and negates its coordinates into place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

type Orientation = fn(Vec3) -> Vec3;

/// Canonical `+Z` point → point on each face, indexed by `CubeFace as usize`.
const ORIENTATION: [Orientation; 6] = [
    |v| Vec3::new(v.z, v.y, -v.x),
    |v| Vec3::new(-v.z, v.y, v.x),
    |v| Vec3::new(v.x, v.z, -v.y),
    |v| Vec3::new(v.x, -v.z, v.y),
    |v| Vec3::new(v.x, v.y, v.z),
    |v| Vec3::new(-v.x, v.y, -v.z),
];

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// The face with the given table index, if `index < 6`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<CubeFace> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Place a canonical `+Z` surface point on this face.
    #[inline]
    #[must_use]
    pub fn orient(self, v: Vec3) -> Vec3 {
        ORIENTATION[self as usize](v)
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Outward-pointing unit normal: the image of the canonical face centre.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        self.orient(Vec3::Z)
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CubeFace::PosX => "+X",
            CubeFace::NegX => "-X",
            CubeFace::PosY => "+Y",
            CubeFace::NegY => "-Y",
            CubeFace::PosZ => "+Z",
            CubeFace::NegZ => "-Z",
        };
        f.write_str(name)
    }
}
