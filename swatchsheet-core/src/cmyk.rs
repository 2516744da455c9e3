//! Percent-based CMYK ink values.

use crate::error::{Result, SwatchError};
use crate::graphics::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest ink coverage of a single channel, in percent.
pub const MAX_CHANNEL: f64 = 100.0;

/// A CMYK color with every channel in `[0, 100]` percent.
///
/// Construction clamps each channel, so a `CmykColor` never holds an
/// out-of-range value. NaN becomes 0 and infinities saturate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCmyk")]
pub struct CmykColor {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

#[derive(Deserialize)]
struct RawCmyk {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

impl From<RawCmyk> for CmykColor {
    fn from(raw: RawCmyk) -> Self {
        CmykColor::new(raw.c, raw.m, raw.y, raw.k)
    }
}

impl CmykColor {
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self {
            c: clamp_channel(c),
            m: clamp_channel(m),
            y: clamp_channel(y),
            k: clamp_channel(k),
        }
    }

    /// Paper white, no ink.
    pub fn white() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// Channels in `[c, m, y, k]` order.
    pub fn channels(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Adds signed offsets to each channel, saturating at 0 and 100.
    pub fn offset(&self, dc: i32, dm: i32, dy: i32, dk: i32) -> Self {
        Self::new(
            self.c + f64::from(dc),
            self.m + f64::from(dm),
            self.y + f64::from(dy),
            self.k + f64::from(dk),
        )
    }

    /// Device color for the content stream (fractions of 1).
    pub fn to_color(&self) -> Color {
        Color::cmyk(
            self.c / MAX_CHANNEL,
            self.m / MAX_CHANNEL,
            self.y / MAX_CHANNEL,
            self.k / MAX_CHANNEL,
        )
    }

    /// `CMYK c,m,y,k`, the single-line sheet title.
    pub fn plain_title(&self) -> String {
        let [c, m, y, k] = self.channels().map(format_channel);
        format!("CMYK {c},{m},{y},{k}")
    }
}

impl Default for CmykColor {
    fn default() -> Self {
        Self::white()
    }
}

/// `C:<c> M:<m> Y:<y> K:<k>`
impl fmt::Display for CmykColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c, m, y, k] = self.channels().map(format_channel);
        write!(f, "C:{c} M:{m} Y:{y} K:{k}")
    }
}

/// Parses `C,M,Y,K`, e.g. `100,10,2,32`.
impl FromStr for CmykColor {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(SwatchError::InvalidColor(format!(
                "expected four comma-separated channels, got '{s}'"
            )));
        }

        let mut channels = [0.0; 4];
        for (channel, part) in channels.iter_mut().zip(&parts) {
            *channel = part
                .parse::<f64>()
                .map_err(|_| SwatchError::InvalidColor(format!("'{part}' is not a number")))?;
        }

        let [c, m, y, k] = channels;
        Ok(Self::new(c, m, y, k))
    }
}

fn clamp_channel(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_CHANNEL)
    }
}

/// Formats a channel value: integers without a fraction, anything else with
/// at most two decimals and no trailing zeros.
pub fn format_channel(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }

    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
