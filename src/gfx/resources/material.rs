//! Appearance descriptors for scene nodes
//!
//! Every scene node owns zero or more [`Appearance`]s, one per material slot.
//! An appearance carries a mutable base color; the inspector recolors it to
//! mark a node as selected and later puts the original color back.
//!
//! Only the RGB part of a color takes part in highlighting. Alpha belongs to
//! the material and is left untouched.

/// RGBA color with components in the 0.0-1.0 range
pub type Color = [f32; 4];

/// RGB triple used for highlight comparisons
pub type Rgb = [f32; 3];

/// Default highlight color (gold)
pub const HIGHLIGHT_RGB: Rgb = [1.0, 0.84, 0.0];

/// Color used when an MTL material has no diffuse term
const FALLBACK_DIFFUSE: Rgb = [0.8, 0.8, 0.8];

/// Material slot of a scene node
///
/// `base_color` is `None` for materials without a color channel (for example
/// purely textured or depth-only materials). Such slots are skipped by every
/// highlight operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub name: String,
    pub base_color: Option<Color>,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            base_color: Some([0.8, 0.8, 0.8, 1.0]),
        }
    }
}

impl Appearance {
    /// Creates a new appearance with an RGBA base color
    ///
    /// # Arguments
    /// * `name` - Material name, as found in the asset
    /// * `base_color` - RGBA base color
    pub fn new(name: &str, base_color: Color) -> Self {
        Self {
            name: name.to_string(),
            base_color: Some(base_color),
        }
    }

    /// Creates an appearance that has no color channel
    pub fn uncolored(name: &str) -> Self {
        Self {
            name: name.to_string(),
            base_color: None,
        }
    }

    /// Builder pattern: Set base color from RGB values
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        let alpha = self.base_color.map_or(1.0, |c| c[3]);
        self.base_color = Some([r, g, b, alpha]);
        self
    }

    /// Builder pattern: Set alpha transparency
    ///
    /// Has no effect on an appearance without a color channel.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        if let Some(color) = self.base_color.as_mut() {
            color[3] = alpha.clamp(0.0, 1.0);
        }
        self
    }

    /// Returns the RGB part of the base color
    pub fn rgb(&self) -> Option<Rgb> {
        self.base_color.map(|c| [c[0], c[1], c[2]])
    }

    /// Replaces the RGB part of the base color, keeping alpha
    ///
    /// Returns `false` when the appearance has no color channel.
    pub fn set_rgb(&mut self, rgb: Rgb) -> bool {
        match self.base_color.as_mut() {
            Some(color) => {
                color[..3].copy_from_slice(&rgb);
                true
            }
            None => false,
        }
    }

    /// Returns true when the RGB part equals `rgb` exactly
    pub fn has_rgb(&self, rgb: Rgb) -> bool {
        self.rgb() == Some(rgb)
    }
}

impl From<&tobj::Material> for Appearance {
    fn from(mtl: &tobj::Material) -> Self {
        let diffuse = mtl.diffuse.unwrap_or(FALLBACK_DIFFUSE);
        Self {
            name: mtl.name.clone(),
            base_color: Some([
                diffuse[0],
                diffuse[1],
                diffuse[2],
                mtl.dissolve.unwrap_or(1.0), // Alpha from dissolve
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rgb_keeps_alpha() {
        let mut appearance = Appearance::new("glass", [0.2, 0.4, 0.6, 0.5]);

        assert!(appearance.set_rgb(HIGHLIGHT_RGB));
        assert_eq!(appearance.base_color, Some([1.0, 0.84, 0.0, 0.5]));
        assert!(appearance.has_rgb(HIGHLIGHT_RGB));
    }

    #[test]
    fn test_uncolored_appearance_rejects_color() {
        let mut appearance = Appearance::uncolored("depth_only").with_alpha(0.3);

        assert!(!appearance.set_rgb(HIGHLIGHT_RGB));
        assert_eq!(appearance.rgb(), None);
        assert!(!appearance.has_rgb(HIGHLIGHT_RGB));
    }

    #[test]
    fn test_from_mtl_material() {
        let mtl = tobj::Material {
            name: "brick".to_string(),
            diffuse: Some([0.7, 0.3, 0.2]),
            dissolve: Some(0.9),
            ..Default::default()
        };

        let appearance = Appearance::from(&mtl);
        assert_eq!(appearance.name, "brick");
        assert_eq!(appearance.base_color, Some([0.7, 0.3, 0.2, 0.9]));

        let bare = tobj::Material {
            name: "bare".to_string(),
            ..Default::default()
        };
        assert_eq!(
            Appearance::from(&bare).base_color,
            Some([0.8, 0.8, 0.8, 1.0])
        );
    }
}
