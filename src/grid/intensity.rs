use serde::{Deserialize, Serialize};

/// Scalar element type a [`Grid`](super::Grid) can wrap.
///
/// Intensities are mapped onto a dense `0..=MAX_LEVEL` integer domain; the
/// detector never looks at the raw value otherwise.
pub trait Intensity: Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Largest level produced by [`Intensity::to_level`].
    const MAX_LEVEL: u32;

    fn to_level(self) -> u32;
}

impl Intensity for u8 {
    const MAX_LEVEL: u32 = u8::MAX as u32;

    #[inline]
    fn to_level(self) -> u32 {
        self as u32
    }
}

impl Intensity for u16 {
    const MAX_LEVEL: u32 = u16::MAX as u32;

    #[inline]
    fn to_level(self) -> u32 {
        self as u32
    }
}

/// Which blobs the detector looks for.
///
/// Extremal regions are always components of `{level <= t}`; the polarity
/// decides how raw intensities map to levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Bright regions on a darker surround (`level = MAX - value`).
    #[default]
    BrightOnDark,
    /// Dark regions on a brighter surround (`level = value`).
    DarkOnBright,
}

impl Polarity {
    #[inline]
    pub fn level<T: Intensity>(self, value: T) -> u32 {
        match self {
            Polarity::BrightOnDark => T::MAX_LEVEL - value.to_level(),
            Polarity::DarkOnBright => value.to_level(),
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            Polarity::BrightOnDark => Polarity::DarkOnBright,
            Polarity::DarkOnBright => Polarity::BrightOnDark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Polarity::BrightOnDark => "bright_on_dark",
            Polarity::DarkOnBright => "dark_on_bright",
        }
    }
}
