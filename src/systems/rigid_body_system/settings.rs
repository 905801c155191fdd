use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};
use crate::rigid_body::DEFAULT_BODY_COLOR;

/// Tuning knobs for body physics and assembly
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RigidBodySettings {
    /// Speed kept after each collision (1 = fully bouncy, 0 = sticky)
    pub damping: f32,
    /// Multiplier on rotational inertia when turning torque into spin
    pub inertia_scale: f32,
    /// Vertices closer than this to any world edge destroy their body
    pub boundary_margin: f32,
    /// Half-size of the square searched for a center when binding a vertex
    pub bind_radius: u32,
    /// Max single-cell pushes per tick before giving up on an overlap
    pub max_resolve_steps: u32,
    /// ABGR fill for new bodies
    pub default_body_color: u32,
}

impl Default for RigidBodySettings {
    fn default() -> Self {
        Self {
            damping: 0.99,
            inertia_scale: 10.0,
            boundary_margin: 5.0,
            bind_radius: 50,
            max_resolve_steps: 10_000,
            default_body_color: DEFAULT_BODY_COLOR,
        }
    }
}

impl RigidBodySettings {
    pub fn from_json(json: &str) -> KernelResult<Self> {
        let settings: RigidBodySettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> KernelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> KernelResult<()> {
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(KernelError::invalid_settings(format!(
                "damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        if !self.inertia_scale.is_finite() || self.inertia_scale < 0.0 {
            return Err(KernelError::invalid_settings(format!(
                "inertiaScale must be a non-negative number, got {}",
                self.inertia_scale
            )));
        }
        if !self.boundary_margin.is_finite() || self.boundary_margin < 0.0 {
            return Err(KernelError::invalid_settings(format!(
                "boundaryMargin must be a non-negative number, got {}",
                self.boundary_margin
            )));
        }
        if self.max_resolve_steps == 0 {
            return Err(KernelError::invalid_settings("maxResolveSteps must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let s = RigidBodySettings::from_json(r#"{"damping":0.5,"bindRadius":10}"#).unwrap();
        assert_eq!(s.damping, 0.5);
        assert_eq!(s.bind_radius, 10);
        assert_eq!(s.inertia_scale, 10.0);
        assert_eq!(s.max_resolve_steps, 10_000);
    }

    #[test]
    fn json_export_reloads() {
        let s = RigidBodySettings { boundary_margin: 2.0, ..Default::default() };
        let json = s.to_json().unwrap();
        assert!(json.contains("\"boundaryMargin\":2.0"));
        assert_eq!(RigidBodySettings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = RigidBodySettings::from_json(r#"{"damping":1.5}"#).unwrap_err();
        assert!(matches!(err, KernelError::InvalidSettings(_)));

        let err = RigidBodySettings::from_json(r#"{"maxResolveSteps":0}"#).unwrap_err();
        assert!(matches!(err, KernelError::InvalidSettings(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = RigidBodySettings::from_json("{damping").unwrap_err();
        assert!(matches!(err, KernelError::Json(_)));
        let err = RigidBodySettings::from_json(r#"{"gravity":1}"#).unwrap_err();
        assert!(matches!(err, KernelError::Json(_)));
    }
}
