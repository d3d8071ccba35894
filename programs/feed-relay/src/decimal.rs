//! Fixed-point display of oracle answers

use core::fmt;

/// Fractional digits used when displaying a relayed answer
pub const DECIMALS: u32 = 9;

/// Largest supported `decimals`, 10^39 does not fit in u128
pub const MAX_DECIMALS: u32 = 38;

/// Integer answer paired with the number of fractional digits it carries
///
/// Only used for display. Stored answers are never rescaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decimal {
    pub value: i128,
    pub decimals: u32,
}

impl Decimal {
    /// `decimals` above [`MAX_DECIMALS`] is clamped to it
    pub fn new(value: i128, decimals: u32) -> Self {
        Self {
            value,
            decimals: decimals.min(MAX_DECIMALS),
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value < 0 { "-" } else { "" };
        let abs = self.value.unsigned_abs();

        if self.decimals == 0 {
            return write!(f, "{}{}", sign, abs);
        }

        // Fields are public, so clamp here as well
        let decimals = self.decimals.min(MAX_DECIMALS);
        let scale = 10u128.pow(decimals);
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            abs / scale,
            abs % scale,
            width = decimals as usize
        )
    }
}
