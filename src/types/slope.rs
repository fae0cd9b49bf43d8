//! Flow direction (slope) handling.
//!
//! The slope tag names which edge(s) of the block the fluid surface dips
//! towards. Every direction-dependent quantity (surface interpolation factor,
//! permutation rotation override) is an explicit enumerated mapping here so
//! the interpolation stays auditable.

use serde::{Deserialize, Serialize};

/// Flow direction of a fluid block surface.
///
/// `None` is a still surface; the four cardinals dip towards the named edge
/// and the four diagonals dip towards the named corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slope {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "n")]
    North,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "sw")]
    SouthWest,
}

impl Slope {
    /// All nine slopes in output order.
    pub const ALL: [Slope; 9] = [
        Slope::None,
        Slope::North,
        Slope::East,
        Slope::South,
        Slope::West,
        Slope::NorthEast,
        Slope::NorthWest,
        Slope::SouthEast,
        Slope::SouthWest,
    ];

    /// The wire name used in identifiers and block-state conditions.
    pub fn name(self) -> &'static str {
        match self {
            Slope::None => "none",
            Slope::North => "n",
            Slope::East => "e",
            Slope::South => "s",
            Slope::West => "w",
            Slope::NorthEast => "ne",
            Slope::NorthWest => "nw",
            Slope::SouthEast => "se",
            Slope::SouthWest => "sw",
        }
    }

    /// Parse from a wire name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Slope::None),
            "n" => Some(Slope::North),
            "e" => Some(Slope::East),
            "s" => Some(Slope::South),
            "w" => Some(Slope::West),
            "ne" => Some(Slope::NorthEast),
            "nw" => Some(Slope::NorthWest),
            "se" => Some(Slope::SouthEast),
            "sw" => Some(Slope::SouthWest),
            _ => None,
        }
    }

    pub fn is_none(self) -> bool {
        self == Slope::None
    }

    /// Cardinal slopes slice along a single axis.
    pub fn is_cardinal(self) -> bool {
        matches!(self, Slope::North | Slope::East | Slope::South | Slope::West)
    }

    /// Diagonal slopes slice along both axes.
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Slope::NorthEast | Slope::NorthWest | Slope::SouthEast | Slope::SouthWest
        )
    }

    /// Surface interpolation factor at a slice center `(cx, cz)` in the 0-16
    /// local space: 0 at the low edge(s), 1 at the opposite edge(s).
    ///
    /// Diagonals average the two cardinal factors rather than multiplying
    /// them. This is a deliberate approximation of bilinear shading and must
    /// not be "corrected"; slice heights downstream depend on it.
    pub fn surface_factor(self, cx: f32, cz: f32) -> f32 {
        match self {
            Slope::None => 1.0,
            Slope::North => cz / 16.0,
            Slope::South => 1.0 - cz / 16.0,
            Slope::West => cx / 16.0,
            Slope::East => 1.0 - cx / 16.0,
            Slope::NorthEast => ((1.0 - cx / 16.0) + cz / 16.0) / 2.0,
            Slope::NorthWest => (cx / 16.0 + cz / 16.0) / 2.0,
            Slope::SouthEast => ((1.0 - cx / 16.0) + (1.0 - cz / 16.0)) / 2.0,
            Slope::SouthWest => (cx / 16.0 + (1.0 - cz / 16.0)) / 2.0,
        }
    }

    /// Rotation override for the client permutation, in degrees per axis.
    ///
    /// South-facing meshes are the unrotated baseline; `s`, `sw` and `none`
    /// need no transform.
    pub fn rotation(self) -> Option<[i32; 3]> {
        match self {
            Slope::North | Slope::NorthEast => Some([0, 180, 0]),
            Slope::East | Slope::SouthEast => Some([0, 90, 0]),
            Slope::West | Slope::NorthWest => Some([0, -90, 0]),
            Slope::None | Slope::South | Slope::SouthWest => None,
        }
    }
}

impl std::fmt::Display for Slope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for slope in Slope::ALL {
            assert_eq!(Slope::from_name(slope.name()), Some(slope));
        }
        assert_eq!(Slope::from_name("up"), None);
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&Slope::NorthEast).unwrap(), "\"ne\"");
        let parsed: Slope = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, Slope::None);
    }

    #[test]
    fn test_cardinal_factor_low_edge() {
        // North dips towards z=0: factor 0 at the north edge, 1 at the south.
        assert_eq!(Slope::North.surface_factor(8.0, 0.0), 0.0);
        assert_eq!(Slope::North.surface_factor(8.0, 16.0), 1.0);
        assert_eq!(Slope::South.surface_factor(8.0, 16.0), 0.0);
        assert_eq!(Slope::East.surface_factor(16.0, 8.0), 0.0);
        assert_eq!(Slope::West.surface_factor(0.0, 8.0), 0.0);
    }

    #[test]
    fn test_diagonal_factor_averages() {
        // The low corner of nw is (0, 0); the high corner is (16, 16).
        assert_eq!(Slope::NorthWest.surface_factor(0.0, 0.0), 0.0);
        assert_eq!(Slope::NorthWest.surface_factor(16.0, 16.0), 1.0);
        // Halfway between the two cardinal factors, not their product.
        assert_eq!(Slope::NorthWest.surface_factor(16.0, 0.0), 0.5);
        assert_eq!(Slope::NorthEast.surface_factor(16.0, 0.0), 0.0);
        assert_eq!(Slope::SouthEast.surface_factor(16.0, 16.0), 0.0);
        assert_eq!(Slope::SouthWest.surface_factor(0.0, 16.0), 0.0);
    }

    #[test]
    fn test_rotation_table() {
        assert_eq!(Slope::North.rotation(), Some([0, 180, 0]));
        assert_eq!(Slope::East.rotation(), Some([0, 90, 0]));
        assert_eq!(Slope::West.rotation(), Some([0, -90, 0]));
        assert_eq!(Slope::NorthEast.rotation(), Some([0, 180, 0]));
        assert_eq!(Slope::South.rotation(), None);
        assert_eq!(Slope::SouthWest.rotation(), None);
        assert_eq!(Slope::None.rotation(), None);
    }
}
