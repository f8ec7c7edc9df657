//! Modeler settings

use serde::{Deserialize, Serialize};

use crate::error::{ModelerError, Result};

/// Which of the three selected points is the vertex of the reported angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleVertex {
    /// Angle s1-s0-s2.
    First,
    /// Angle s0-s1-s2.
    #[default]
    Middle,
    /// Angle s0-s2-s1.
    Last,
}

impl AngleVertex {
    /// Reorders a selection triple into `(ray end, vertex, ray end)`.
    #[must_use]
    pub fn arrange<T: Copy>(self, [s0, s1, s2]: [T; 3]) -> [T; 3] {
        match self {
            AngleVertex::First => [s1, s0, s2],
            AngleVertex::Middle => [s0, s1, s2],
            AngleVertex::Last => [s0, s2, s1],
        }
    }
}

/// All modeler settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelerSettings {
    /// Per-axis distance under which a scene click hits an existing point
    pub snap_tolerance: f64,
    /// Prefix for auto-named points (`P1`, `P2`, ...)
    pub point_name_prefix: String,
    /// Prefix for triangle names (`Tri 1 (...)`)
    pub triangle_name_prefix: String,
    /// Whether scene clicks create points initially
    pub click_to_add: bool,
    /// Vertex convention for the three-point angle
    pub angle_vertex: AngleVertex,
}

impl Default for ModelerSettings {
    fn default() -> Self {
        Self {
            snap_tolerance: 0.01,
            point_name_prefix: "P".into(),
            triangle_name_prefix: "Tri".into(),
            click_to_add: true,
            angle_vertex: AngleVertex::Middle,
        }
    }
}

impl ModelerSettings {
    /// Parses settings from JSON. Missing fields take their default value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::Settings`] if the JSON is malformed or the
    /// values fail [`ModelerSettings::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| ModelerError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::Settings`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ModelerError::Settings(e.to_string()))
    }

    /// Checks that the snap tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ModelerError::Settings`] describing the offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.snap_tolerance.is_finite() || self.snap_tolerance < 0.0 {
            return Err(ModelerError::Settings(format!(
                "snap_tolerance must be finite and >= 0, got {}",
                self.snap_tolerance
            )));
        }
        Ok(())
    }
}
