/// Default capacity used by [`Config::default`]
pub const DEFAULT_CAPACITY: usize = 16;

/// Construction parameters for a [`RingBuffer`](crate::RingBuffer).
///
/// With the `serde` feature enabled the struct can be embedded in an
/// application's own configuration file; missing fields fall back to
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of elements the buffer holds, excluding the guard slot
    pub capacity: usize,
}

impl Config {
    /// Replace the capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(Config::default().capacity, DEFAULT_CAPACITY);
        assert_eq!(Config::default().with_capacity(3).capacity, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"capacity": 64}"#).unwrap();
        assert_eq!(config.capacity, 64);
    }
}
