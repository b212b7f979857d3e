//! Engine configuration.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Configuration handed to the pricing engine.
///
/// The only knob today is the timezone used when a court's configured
/// identifier does not resolve. It is injected explicitly so the fallback is
/// visible to callers and deterministic in tests, instead of living in a
/// hidden global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Timezone applied when a court's own identifier is absent or invalid.
    pub default_timezone: Tz,
}

impl PricingConfig {
    /// Creates a config with the given fallback timezone.
    pub fn new(default_timezone: Tz) -> Self {
        Self { default_timezone }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_timezone: chrono_tz::UTC,
        }
    }
}
