//! The 3×3×3×3 grid of CMYK variants around a base color.
//!
//! Every channel takes one of three steps, `[-d, 0, +d]`. Yellow and black
//! select one of nine groups; cyan and magenta select one of nine variants
//! inside a group.
//!
//! ```rust
//! use swatchsheet::{generate_variants, CmykColor, Deviation};
//!
//! let base = CmykColor::new(100.0, 10.0, 2.0, 32.0);
//! let grid = generate_variants(base, Deviation::new(5)?);
//!
//! assert_eq!(grid.iter().count(), 81);
//! assert_eq!(grid.base_variant().color(), base);
//! # Ok::<(), swatchsheet::SwatchError>(())
//! ```

use crate::cmyk::CmykColor;
use crate::error::{Result, SwatchError};
use std::fmt;

/// Number of steps per channel.
pub const STEPS: usize = 3;
/// Variants in a group, and groups in a grid.
pub const GROUP_SIZE: usize = STEPS * STEPS;

/// Magnitude of the per-channel step, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Deviation(u32);

impl Deviation {
    /// Lower bound of the conventional range offered to users.
    pub const MIN: u32 = 1;
    /// Upper bound of the conventional range offered to users.
    pub const MAX: u32 = 10;

    /// Any positive value is accepted; callers facing users check
    /// [`Deviation::is_conventional`] as well.
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 || i32::try_from(value).is_err() {
            return Err(SwatchError::InvalidDeviation(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_conventional(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }

    /// `[-d, 0, +d]`
    pub fn steps(&self) -> [i32; STEPS] {
        let d = self.0 as i32;
        [-d, 0, d]
    }
}

impl Default for Deviation {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u32> for Deviation {
    type Error = SwatchError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Deviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed per-channel offsets of a variant from the base color.
///
/// These are the requested steps, kept even when clamping made the actual
/// channel move less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelDeltas {
    pub dc: i32,
    pub dm: i32,
    pub dy: i32,
    pub dk: i32,
}

impl ChannelDeltas {
    pub fn new(dc: i32, dm: i32, dy: i32, dk: i32) -> Self {
        Self { dc, dm, dy, dk }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// `C:<dc>   M:<dm>`
    pub fn cyan_magenta_label(&self) -> String {
        format!("C:{}   M:{}", format_delta(self.dc), format_delta(self.dm))
    }

    /// `Y:<dy>   K:<dk>`
    pub fn yellow_black_label(&self) -> String {
        format!("Y:{}   K:{}", format_delta(self.dy), format_delta(self.dk))
    }
}

/// `0` for no change, otherwise the value with an explicit sign.
pub fn format_delta(delta: i32) -> String {
    if delta == 0 {
        "0".to_string()
    } else {
        format!("{delta:+}")
    }
}

/// One swatch: a clamped color and the steps that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    color: CmykColor,
    deltas: ChannelDeltas,
}

impl Variant {
    pub fn new(color: CmykColor, deltas: ChannelDeltas) -> Self {
        Self { color, deltas }
    }

    pub fn color(&self) -> CmykColor {
        self.color
    }

    pub fn deltas(&self) -> ChannelDeltas {
        self.deltas
    }
}

/// Nine variants sharing the same yellow and black steps, ordered by
/// cyan step then magenta step.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantGroup {
    variants: [Variant; GROUP_SIZE],
}

impl VariantGroup {
    pub fn variants(&self) -> &[Variant; GROUP_SIZE] {
        &self.variants
    }

    /// Variant at cyan step `c_index` and magenta step `m_index` (0..3 each).
    pub fn variant(&self, c_index: usize, m_index: usize) -> Option<&Variant> {
        if c_index >= STEPS || m_index >= STEPS {
            return None;
        }
        self.variants.get(c_index * STEPS + m_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    pub fn dy(&self) -> i32 {
        self.variants[0].deltas.dy
    }

    pub fn dk(&self) -> i32 {
        self.variants[0].deltas.dk
    }
}

/// All 81 variants, as nine groups ordered by yellow step then black step.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantGrid {
    base: CmykColor,
    deviation: Deviation,
    groups: [VariantGroup; GROUP_SIZE],
}

impl VariantGrid {
    pub fn base(&self) -> CmykColor {
        self.base
    }

    pub fn deviation(&self) -> Deviation {
        self.deviation
    }

    pub fn groups(&self) -> &[VariantGroup; GROUP_SIZE] {
        &self.groups
    }

    /// Group at yellow step `y_index` and black step `k_index` (0..3 each).
    pub fn group(&self, y_index: usize, k_index: usize) -> Option<&VariantGroup> {
        if y_index >= STEPS || k_index >= STEPS {
            return None;
        }
        self.groups.get(y_index * STEPS + k_index)
    }

    /// Every variant, group by group.
    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.groups.iter().flat_map(VariantGroup::iter)
    }

    /// The variant with all deltas zero; equal to the base color.
    pub fn base_variant(&self) -> &Variant {
        let center = GROUP_SIZE / 2;
        &self.groups[center].variants[center]
    }
}

/// Builds the variant grid for `base`.
///
/// Each channel is `clamp(base + step, 0, 100)`. Pure and deterministic.
pub fn generate_variants(base: CmykColor, deviation: Deviation) -> VariantGrid {
    let steps = deviation.steps();

    let groups = std::array::from_fn(|group_index| {
        let dy = steps[group_index / STEPS];
        let dk = steps[group_index % STEPS];

        VariantGroup {
            variants: std::array::from_fn(|variant_index| {
                let dc = steps[variant_index / STEPS];
                let dm = steps[variant_index % STEPS];
                Variant::new(
                    base.offset(dc, dm, dy, dk),
                    ChannelDeltas::new(dc, dm, dy, dk),
                )
            }),
        }
    });

    tracing::debug!(base = %base, deviation = deviation.value(), "generated variant grid");

    VariantGrid {
        base,
        deviation,
        groups,
    }
}
