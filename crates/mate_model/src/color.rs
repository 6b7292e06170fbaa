//! Packed RGBA color used by the color picker.
//!
//! Form fields store red/green/blue in `[0, 255]` and alpha in `[0, 1]`; the
//! picker works on a single packed value with all four channels as bytes.

use crate::property::{Field, FieldValue};

/// Color channels as stored in the form: r/g/b in `[0, 255]`, a in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorChannels {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorChannels {
    pub fn pack(self) -> PackedColor {
        PackedColor::from_channels(self.r, self.g, self.b, self.a)
    }

    /// Field writes that store these channels back into a property.
    pub fn field_values(self) -> [(Field, FieldValue); 4] {
        [
            (Field::ColorR, FieldValue::Number(Some(self.r))),
            (Field::ColorG, FieldValue::Number(Some(self.g))),
            (Field::ColorB, FieldValue::Number(Some(self.b))),
            (Field::ColorA, FieldValue::Number(Some(self.a))),
        ]
    }
}

/// RGBA color packed as `0xRRGGBBAA`, unmultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// Quantize form channels: each channel is rounded to the nearest byte,
    /// alpha is scaled from `[0, 1]` first.
    pub fn from_channels(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_rgba([
            quantize(r),
            quantize(g),
            quantize(b),
            quantize(a * 255.0),
        ])
    }

    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(rgba))
    }

    pub fn to_rgba(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn channels(self) -> ColorChannels {
        let [r, g, b, a] = self.to_rgba();
        ColorChannels {
            r: f32::from(r),
            g: f32::from(g),
            b: f32::from(b),
            a: f32::from(a) / 255.0,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:08x}", self.0)
    }

    /// Parse `#rrggbb` (opaque) or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16)
                .ok()
                .map(|rgb| Self((rgb << 8) | 0xff)),
            8 => u32::from_str_radix(digits, 16).ok().map(Self),
            _ => None,
        }
    }
}

fn quantize(value: f32) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
