use crate::shadowcast::Radius;

/// Radius the viewer scans when nothing else is configured.
pub const DEFAULT_RADIUS: u32 = 35;

/// Caller-facing field of view settings.
///
/// With `enabled` unset, opacity is never populated and everything within
/// the radius is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct FovConfig {
    pub enabled: bool,
    /// 0 means unlimited.
    pub radius: u32,
}

impl Default for FovConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl FovConfig {
    pub fn radius(&self) -> Radius {
        Radius::from(self.radius)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default() {
        let config = FovConfig::default();
        assert!(config.enabled);
        assert_eq!(config.radius(), Radius::Limited(DEFAULT_RADIUS));
    }

    #[test]
    fn zero_radius_is_unlimited() {
        let config = FovConfig {
            radius: 0,
            ..Default::default()
        };
        assert_eq!(config.radius(), Radius::Unlimited);
    }
}
