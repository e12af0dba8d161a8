//! Pulse symbols and WS2812 bit timings.

use crate::error::Error;

/// WS2812 "0" bit high time
pub const T0H_NS: u32 = 300;
/// WS2812 "0" bit low time
pub const T0L_NS: u32 = 900;
/// WS2812 "1" bit high time
pub const T1H_NS: u32 = 900;
/// WS2812 "1" bit low time
pub const T1L_NS: u32 = 300;
/// Latch duration, split over both halves of one symbol
pub const RESET_NS: u32 = 50_000;

const NS_PER_SECOND: u64 = 1_000_000_000;

/// One two-level pulse, packed the way the RMT peripheral stores it:
/// `[level1:1][duration1:15][level0:1][duration0:15]`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PulseSymbol(u32);

impl PulseSymbol {
    /// Longest representable half-pulse, in ticks
    pub const MAX_DURATION: u16 = 0x7FFF;

    /// Pack two levels and their durations
    ///
    /// Durations above [`Self::MAX_DURATION`] are truncated to 15 bits.
    pub const fn new(level0: bool, duration0: u16, level1: bool, duration1: u16) -> Self {
        let low = (duration0 & Self::MAX_DURATION) as u32 | ((level0 as u32) << 15);
        let high = (duration1 & Self::MAX_DURATION) as u32 | ((level1 as u32) << 15);
        Self(low | (high << 16))
    }

    pub const fn level0(self) -> bool {
        self.0 & 0x8000 != 0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn duration0(self) -> u16 {
        (self.0 & 0x7FFF) as u16
    }

    pub const fn level1(self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn duration1(self) -> u16 {
        ((self.0 >> 16) & 0x7FFF) as u16
    }

    /// Raw register word
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Total length of both halves, in ticks
    pub const fn ticks(self) -> u32 {
        self.duration0() as u32 + self.duration1() as u32
    }
}

impl core::fmt::Debug for PulseSymbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PulseSymbol({}:{}, {}:{})",
            u8::from(self.level0()),
            self.duration0(),
            u8::from(self.level1()),
            self.duration1()
        )
    }
}

/// Symbols for both bit values plus the latch code at a given resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTimings {
    pub bit0: PulseSymbol,
    pub bit1: PulseSymbol,
    pub reset: PulseSymbol,
}

impl BitTimings {
    /// Derive WS2812 timings for a channel ticking at `resolution_hz`
    ///
    /// Fails if the resolution is too coarse to express a bit, or so fine
    /// that the latch code no longer fits one symbol.
    pub fn ws2812(resolution_hz: u32) -> Result<Self, Error> {
        let t0h = ticks(T0H_NS, resolution_hz)?;
        let t0l = ticks(T0L_NS, resolution_hz)?;
        let t1h = ticks(T1H_NS, resolution_hz)?;
        let t1l = ticks(T1L_NS, resolution_hz)?;
        let reset_half = ticks(RESET_NS / 2, resolution_hz)?;

        Ok(Self {
            bit0: PulseSymbol::new(true, t0h, false, t0l),
            bit1: PulseSymbol::new(true, t1h, false, t1l),
            reset: PulseSymbol::new(false, reset_half, false, reset_half),
        })
    }

    /// Symbol for a single bit
    #[inline]
    pub const fn bit(&self, set: bool) -> PulseSymbol {
        if set { self.bit1 } else { self.bit0 }
    }
}

fn ticks(duration_ns: u32, resolution_hz: u32) -> Result<u16, Error> {
    let ticks = u64::from(duration_ns) * u64::from(resolution_hz) / NS_PER_SECOND;
    match u16::try_from(ticks) {
        Ok(0) | Err(_) => Err(Error::InvalidArgument),
        Ok(t) if t > PulseSymbol::MAX_DURATION => Err(Error::InvalidArgument),
        Ok(t) => Ok(t),
    }
}
