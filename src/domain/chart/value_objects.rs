use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::market_data::Price;

/// Value Object - direction of one candle body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleTone {
    Rising,
    Falling,
    Neutral,
}

impl CandleTone {
    /// `open > close` falls, `close > open` rises, anything else
    /// (including non-comparable inputs) is neutral.
    pub fn from_prices(open: Price, close: Price) -> Self {
        if open > close {
            CandleTone::Falling
        } else if close > open {
            CandleTone::Rising
        } else {
            CandleTone::Neutral
        }
    }
}

/// Value Object - RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r * 255.0).round() as u32;
        let g = (self.g * 255.0).round() as u32;
        let b = (self.b * 255.0).round() as u32;
        (r << 16) | (g << 8) | b
    }

    /// CSS form consumed by the canvas context.
    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let hex = text.strip_prefix('#').unwrap_or(&text);
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| D::Error::custom(format!("invalid color {text:?}")))?;
        Ok(Color::from_hex(value))
    }
}

/// Canvas bounding box and axis margins. Configuration supplied by the
/// host, never computed by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            margin_top: 20.0,
            margin_right: 30.0,
            margin_bottom: 30.0,
            margin_left: 40.0,
        }
    }
}

impl ChartLayout {
    /// Horizontal pixel range of the plot area, left to right.
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin_left, self.width - self.margin_right)
    }

    /// Vertical pixel range for the price scale, bottom to top.
    /// Inverted because canvas y grows downward.
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.margin_bottom, self.margin_top)
    }

    /// Vertical pixel box of the plot area in ascending order, for
    /// translation clamping.
    pub fn y_box(&self) -> (f64, f64) {
        (self.margin_top, self.height - self.margin_bottom)
    }

    pub fn chart_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn chart_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// Style tokens for the drawing surface. Defaults: red for falling,
/// green for rising, gray for flat candles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub rising: Color,
    pub falling: Color,
    pub neutral: Color,
    pub wick: Color,
    pub axis: Color,
    pub background: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            rising: Color::from_hex(0x4daf4a),
            falling: Color::from_hex(0xe41a1c),
            neutral: Color::from_hex(0x999999),
            wick: Color::from_hex(0x333333),
            axis: Color::from_hex(0x666666),
            background: Color::from_hex(0xffffff),
        }
    }
}

impl ChartTheme {
    pub fn tone_color(&self, tone: CandleTone) -> Color {
        match tone {
            CandleTone::Rising => self.rising,
            CandleTone::Falling => self.falling,
            CandleTone::Neutral => self.neutral,
        }
    }
}
