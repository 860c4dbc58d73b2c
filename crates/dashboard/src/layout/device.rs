//! Viewport classification

/// Layout class derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Sidebar is a transient overlay drawer
    Mobile,
    /// Sidebar is a persistent column
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width; widths below `breakpoint` are mobile
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert_eq!(DeviceClass::from_width(1199.5, 1200.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(1200.0, 1200.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_width(375.0, 1200.0), DeviceClass::Mobile);
        assert!(!DeviceClass::from_width(1920.0, 1200.0).is_mobile());
    }
}
