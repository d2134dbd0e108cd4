//! Container configuration.

use serde::{Deserialize, Serialize};

use crate::page::{LayoutError, PageBounds, ShadowKind};

/// Default shadow thickness along the layout axis.
pub const DEFAULT_SHADOW_THICKNESS: i32 = 12;

/// Default resizer hit-area thickness.
pub const DEFAULT_RESIZER_THICKNESS: i32 = 2;

/// Tunables shared by every page of a container.
///
/// Missing fields take their defaults when deserialized, so a host can keep
/// a partial JSON/TOML section for its panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayoutConfig {
    /// Bounds given to pages added with `add_flexible_page`.
    pub default_bounds: PageBounds,
    pub shadow_kind: ShadowKind,
    pub shadow_thickness: i32,
    pub resizer_thickness: i32,
}

impl Default for PageLayoutConfig {
    fn default() -> Self {
        Self {
            default_bounds: PageBounds::default(),
            shadow_kind: ShadowKind::Normal,
            shadow_thickness: DEFAULT_SHADOW_THICKNESS,
            resizer_thickness: DEFAULT_RESIZER_THICKNESS,
        }
    }
}

impl PageLayoutConfig {
    /// Set the bounds for new flexible pages.
    pub fn default_bounds(mut self, bounds: PageBounds) -> Self {
        self.default_bounds = bounds;
        self
    }

    pub fn shadow_kind(mut self, kind: ShadowKind) -> Self {
        self.shadow_kind = kind;
        self
    }

    pub fn shadow_thickness(mut self, thickness: i32) -> Self {
        self.shadow_thickness = thickness;
        self
    }

    pub fn resizer_thickness(mut self, thickness: i32) -> Self {
        self.resizer_thickness = thickness;
        self
    }

    /// Reject negative thicknesses.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.shadow_thickness < 0 {
            return Err(LayoutError::NegativeThickness {
                field: "shadow_thickness",
                value: self.shadow_thickness,
            });
        }
        if self.resizer_thickness < 0 {
            return Err(LayoutError::NegativeThickness {
                field: "resizer_thickness",
                value: self.resizer_thickness,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PageLayoutConfig::default();
        assert_eq!(config.default_bounds, PageBounds::default());
        assert_eq!(config.shadow_thickness, 12);
        assert_eq!(config.resizer_thickness, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let config = PageLayoutConfig::default()
            .default_bounds(PageBounds::sanitized(50, 500))
            .shadow_kind(ShadowKind::Light)
            .shadow_thickness(10)
            .resizer_thickness(4);
        assert_eq!(config.default_bounds.max(), 500);
        assert_eq!(config.shadow_kind, ShadowKind::Light);
        assert_eq!(config.shadow_thickness, 10);
        assert_eq!(config.resizer_thickness, 4);
    }

    #[test]
    fn validate_rejects_negative_thickness() {
        let err = PageLayoutConfig::default()
            .shadow_thickness(-1)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::NegativeThickness {
                field: "shadow_thickness",
                value: -1
            }
        );
        assert!(
            PageLayoutConfig::default()
                .resizer_thickness(-2)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: PageLayoutConfig =
            serde_json::from_str(r#"{"shadow_kind":"light","default_bounds":{"min":50,"max":500}}"#)
                .unwrap();
        assert_eq!(config.shadow_kind, ShadowKind::Light);
        assert_eq!(config.default_bounds, PageBounds::sanitized(50, 500));
        assert_eq!(config.shadow_thickness, DEFAULT_SHADOW_THICKNESS);
    }

    #[test]
    fn json_roundtrip() {
        let config = PageLayoutConfig::default().resizer_thickness(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: PageLayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
