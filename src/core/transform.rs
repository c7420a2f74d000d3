//! 3D-Transformation platzierter Objekte (Position, Rotation, Skalierung).

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Position, Rotation und Skalierung eines platzierten Objekts.
///
/// Rotation als Euler-Winkel um X/Y/Z in Radiant. Die Geometrie selbst
/// bleibt für das Szenen-Modell opak; die Transformation ist der einzige
/// räumliche Anteil, den der Store versteht.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in Weltkoordinaten (Meter)
    pub position: Vec3,
    /// Rotation um X/Y/Z in Radiant
    pub rotation: Vec3,
    /// Skalierungsfaktoren je Achse (1.0 = Originalgröße)
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Erstellt eine Transformation an einer Position (keine Rotation, Skalierung 1).
    pub fn at_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Übernimmt nur die im Patch gesetzten Komponenten; der Rest bleibt erhalten.
    pub fn apply(&mut self, patch: &TransformPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
    }
}

/// Teil-Update einer Transformation; `None`-Komponenten bleiben unverändert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformPatch {
    /// Neue Position (optional)
    pub position: Option<Vec3>,
    /// Neue Rotation (optional)
    pub rotation: Option<Vec3>,
    /// Neue Skalierung (optional)
    pub scale: Option<Vec3>,
}

impl TransformPatch {
    /// Patch, der nur die Position setzt.
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_transform_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Vec3::ZERO);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn test_apply_partial_patch_keeps_other_components() {
        let mut t = Transform::at_position(Vec3::new(1.0, 2.0, 3.0));
        t.apply(&TransformPatch {
            rotation: Some(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0)),
            ..TransformPatch::default()
        });

        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(t.rotation.y, std::f32::consts::FRAC_PI_2);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn test_apply_full_patch_replaces_everything() {
        let mut t = Transform::default();
        t.apply(&TransformPatch {
            position: Some(Vec3::new(5.0, 0.0, -2.0)),
            rotation: Some(Vec3::new(0.1, 0.2, 0.3)),
            scale: Some(Vec3::splat(2.0)),
        });

        assert_eq!(t.position, Vec3::new(5.0, 0.0, -2.0));
        assert_eq!(t.scale, Vec3::splat(2.0));
    }
}
