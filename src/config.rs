// Configuration for a particle field, with the defaults the dark theme's
// hero decoration uses. Validated once, before any particle is allocated.

use wasm_bindgen::prelude::*;

use crate::color::Color;

#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub particle_count: u32,
    pub speed_range: f64,
    size_range: [f64; 2],
    opacity_range: [f64; 2],
    color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 50,
            speed_range: 0.5,
            size_range: [1.0, 3.0],
            opacity_range: [0.2, 0.7],
            // The dark theme's primary color, #60a5fa
            color: Color::from_u32(0x60a5faff),
        }
    }
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }

    pub fn set_size_range(&mut self, min: f64, max: f64) {
        self.size_range = [min, max];
    }

    pub fn set_opacity_range(&mut self, min: f64, max: f64) {
        self.opacity_range = [min, max];
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color = Color::from_rgb(r, g, b);
    }

    // Packed RRGGBBAA, the way themes write their hex colors
    pub fn set_color_u32(&mut self, rgba: u32) {
        self.color = Color::from_u32(rgba);
    }
}

impl FieldConfig {
    pub fn size_range(&self) -> [f64; 2] {
        self.size_range
    }

    pub fn opacity_range(&self) -> [f64; 2] {
        self.opacity_range
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.particle_count == 0 {
            return Err(InvalidConfiguration::new("particle_count must be positive"));
        }
        if self.speed_range < 0.0 {
            return Err(InvalidConfiguration::new("speed_range must not be negative"));
        }
        if self.size_range[0] > self.size_range[1] {
            return Err(InvalidConfiguration::new("size_range min exceeds max"));
        }
        if self.opacity_range[0] > self.opacity_range[1] {
            return Err(InvalidConfiguration::new("opacity_range min exceeds max"));
        }
        Ok(())
    }
}

// The only error this crate raises itself. Construction either succeeds
// completely or fails with this before any particle exists.
#[derive(Debug)]
pub struct InvalidConfiguration {
    message: String,
}

impl InvalidConfiguration {
    fn new(message: &str) -> Self {
        InvalidConfiguration {
            message: message.to_owned(),
        }
    }
}

impl std::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid particle configuration: {}", self.message)
    }
}

impl std::error::Error for InvalidConfiguration {}

impl From<InvalidConfiguration> for JsValue {
    fn from(e: InvalidConfiguration) -> JsValue {
        JsValue::from_str(&e.to_string())
    }
}
