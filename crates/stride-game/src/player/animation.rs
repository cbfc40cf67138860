//! Animation blend output

use std::collections::HashMap;

use stride_core::exp_smooth;

/// Receives named blend parameters from gameplay code
pub trait AnimationSink {
    /// Move parameter `name` toward `value`, damped over `smooth_time`
    fn set_blend_parameter(&mut self, name: &str, value: f32, smooth_time: f32, dt: f32);
}

/// In-memory blend parameter store.
///
/// Parameters start at zero the first time they are written and then follow
/// their targets through an exponential filter.
#[derive(Debug, Clone, Default)]
pub struct BlendParameters {
    values: HashMap<String, f32>,
}

impl BlendParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a parameter, zero if never written
    pub fn get(&self, name: &str) -> f32 {
        self.values.get(name).copied().unwrap_or(0.0)
    }
}

impl AnimationSink for BlendParameters {
    fn set_blend_parameter(&mut self, name: &str, value: f32, smooth_time: f32, dt: f32) {
        match self.values.get_mut(name) {
            Some(current) => *current = exp_smooth(*current, value, smooth_time, dt),
            None => {
                let first = exp_smooth(0.0, value, smooth_time, dt);
                self.values.insert(name.to_owned(), first);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_parameter_reads_zero() {
        assert_eq!(BlendParameters::new().get("speed_percent"), 0.0);
    }

    #[test]
    fn test_parameter_approaches_target() {
        let mut params = BlendParameters::new();
        let mut previous = 0.0;
        for _ in 0..120 {
            params.set_blend_parameter("speed_percent", 1.0, 0.1, 1.0 / 60.0);
            let value = params.get("speed_percent");
            assert!(value >= previous && value <= 1.0);
            previous = value;
        }
        assert!((previous - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_smooth_time_snaps() {
        let mut params = BlendParameters::new();
        params.set_blend_parameter("speed_percent", 0.5, 0.0, 1.0 / 60.0);
        assert_eq!(params.get("speed_percent"), 0.5);
    }
}
