// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    // CSS fill style string for a 2d canvas context, with the alpha
    // channel replaced by the given opacity
    pub fn to_css_rgba(&self, opacity: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let color = Color::from_u32(0x60a5faff);
        assert_eq!(color.r, 96);
        assert_eq!(color.g, 165);
        assert_eq!(color.b, 250);
        assert_eq!(color.a, 255);
    }

    #[test]
    fn formats_css_rgba_with_given_opacity() {
        let color = Color::from_rgb(96, 165, 250);
        assert_eq!(color.to_css_rgba(0.3), "rgba(96, 165, 250, 0.3)");
    }
}
