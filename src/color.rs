// Simple color struct, created from an unsigned 32 representing RRGGBBAA
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // Violet used for the particle dots
    pub const PARTICLE: Color = Color::from_u32(0x7c3aedff);
    // Lighter lavender used for connection lines
    pub const CONNECTION: Color = Color::from_u32(0xa78bfaff);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS rgba() string for canvas fill/stroke styles. The color's own alpha
    // channel scales the requested opacity.
    pub fn to_css(&self, alpha: f64) -> String {
        let alpha = (alpha * self.a as f64 / 255.0).max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_login_theme() {
        assert_eq!(Color::PARTICLE, Color { r: 124, g: 58, b: 237, a: 255 });
        assert_eq!(Color::CONNECTION, Color { r: 167, g: 139, b: 250, a: 255 });
    }

    #[test]
    fn css_string_uses_requested_alpha() {
        assert_eq!(Color::PARTICLE.to_css(0.5), "rgba(124, 58, 237, 0.5)");
    }

    #[test]
    fn css_alpha_is_scaled_by_channel_and_clamped() {
        let half = Color::from_u32(0xffffff00);
        assert_eq!(half.to_css(1.0), "rgba(255, 255, 255, 0)");
        assert_eq!(Color::CONNECTION.to_css(3.0), "rgba(167, 139, 250, 1)");
    }
}
