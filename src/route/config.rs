//! Configuration for the wire router

/// Configuration options for routing wires
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Spacing between fan-out attachment sites on a multiport, in pixels
    pub site_spacing: f64,

    /// Length of the straight stub leaving a port before the first bend
    pub stub_length: f64,

    /// Corner radius for filleted bends on hinted routes
    pub fillet_radius: f64,

    /// Below this distance two coordinates count as aligned
    pub alignment_tolerance: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            site_spacing: 5.0,
            stub_length: 10.0,
            fillet_radius: 10.0,
            alignment_tolerance: 1.0,
        }
    }
}

impl RouteConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the multiport site spacing
    pub fn with_site_spacing(mut self, spacing: f64) -> Self {
        self.site_spacing = spacing;
        self
    }

    /// Set the port stub length
    pub fn with_stub_length(mut self, length: f64) -> Self {
        self.stub_length = length;
        self
    }

    /// Set the fillet corner radius
    pub fn with_fillet_radius(mut self, radius: f64) -> Self {
        self.fillet_radius = radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouteConfig::default();
        assert_eq!(config.site_spacing, 5.0);
        assert_eq!(config.stub_length, 10.0);
        assert_eq!(config.fillet_radius, 10.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RouteConfig::new()
            .with_site_spacing(8.0)
            .with_fillet_radius(4.0);
        assert_eq!(config.site_spacing, 8.0);
        assert_eq!(config.fillet_radius, 4.0);
    }
}
