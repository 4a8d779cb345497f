/// An RGB color with each channel in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color3 {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color3 { r, g, b }
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// `0xRRGGBB`, or `None` if a channel is not a finite value within `0.0..=1.0`
    pub fn to_hex(self) -> Option<u32> {
        fn channel(value: f32) -> Option<u32> {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return None;
            }

            Some((value * 255.0).round() as u32)
        }

        Some((channel(self.r)? << 16) | (channel(self.g)? << 8) | channel(self.b)?)
    }
}

/// Parse any CSS color (`#rgb`, `rgb(...)`, `hsl(...)`, named colors) into `0xRRGGBB`, ignoring alpha
pub fn parse_css_color(color: &str) -> Option<u32> {
    match csscolorparser::parse(color) {
        Err(_) => None,
        Ok(color) => {
            let [r, g, b, _] = color.to_rgba8();

            Some(u32::from_be_bytes([0, r, g, b]))
        }
    }
}
