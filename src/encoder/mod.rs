//! Resumable WS2812 waveform encoder
//!
//! Turns a GRB byte stream into pulse symbols, one symbol per bit, most
//! significant bit first, and closes every frame with a latch code. The
//! staging buffer is far smaller than one frame, so encoding stops with
//! [`EncodeState::MEM_FULL`] whenever it fills and picks up at the same
//! bit on the next call with the same payload.

mod staging;
mod symbol;

use core::ops::BitOr;

pub use staging::StagingBuffer;
pub use symbol::{BitTimings, PulseSymbol, RESET_NS, T0H_NS, T0L_NS, T1H_NS, T1L_NS};

use crate::error::Error;

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Channel tick rate
    pub resolution_hz: u32,
}

/// Bitset describing how an `encode` call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeState(u8);

impl EncodeState {
    /// Nothing to report
    pub const EMPTY: Self = Self(0);
    /// Staging buffer filled before the frame was fully encoded
    pub const MEM_FULL: Self = Self(1 << 0);
    /// The frame and its latch code have been staged
    pub const COMPLETE: Self = Self(1 << 1);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_mem_full(self) -> bool {
        self.contains(Self::MEM_FULL)
    }

    pub const fn is_complete(self) -> bool {
        self.contains(Self::COMPLETE)
    }
}

impl BitOr for EncodeState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Outcome of a single `encode` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeResult {
    /// Symbols staged during this call
    pub symbols_written: usize,
    pub state: EncodeState,
}

/// Encoding phase of the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderPhase {
    /// Streaming payload bits; cursor points at the next bit
    Pixels { byte: usize, bit: u8 },
    /// Payload done, latch code still pending
    Reset,
}

impl EncoderPhase {
    const START: Self = Self::Pixels { byte: 0, bit: 0 };
}

/// Stateful WS2812 encoder session
///
/// Created once per driver and reused for every frame.
#[derive(Debug, Clone)]
pub struct WaveformEncoder {
    timings: BitTimings,
    phase: EncoderPhase,
}

impl WaveformEncoder {
    /// Create an encoder for the given channel resolution
    pub fn new(config: &EncoderConfig) -> Result<Self, Error> {
        let timings = BitTimings::ws2812(config.resolution_hz)?;
        Ok(Self {
            timings,
            phase: EncoderPhase::START,
        })
    }

    pub const fn timings(&self) -> &BitTimings {
        &self.timings
    }

    pub const fn phase(&self) -> EncoderPhase {
        self.phase
    }

    /// Stage as much of `payload` as fits into `staging`
    ///
    /// Must be called again with the same payload after a
    /// [`EncodeState::MEM_FULL`] result until [`EncodeState::COMPLETE`]
    /// is reported. After completion the session is ready for the next
    /// frame.
    pub fn encode(&mut self, staging: &mut StagingBuffer, payload: &[u8]) -> EncodeResult {
        let mut written = 0;

        if let EncoderPhase::Pixels { mut byte, mut bit } = self.phase {
            while byte < payload.len() {
                let set = payload[byte] & (0x80 >> bit) != 0;
                if staging.push(self.timings.bit(set)).is_err() {
                    self.phase = EncoderPhase::Pixels { byte, bit };
                    return EncodeResult {
                        symbols_written: written,
                        state: EncodeState::MEM_FULL,
                    };
                }
                written += 1;
                bit += 1;
                if bit == 8 {
                    bit = 0;
                    byte += 1;
                }
            }
            self.phase = EncoderPhase::Reset;
        }

        if staging.push(self.timings.reset).is_err() {
            return EncodeResult {
                symbols_written: written,
                state: EncodeState::MEM_FULL,
            };
        }
        written += 1;
        self.phase = EncoderPhase::START;

        EncodeResult {
            symbols_written: written,
            state: EncodeState::COMPLETE,
        }
    }

    /// Drop any partially encoded frame
    pub fn reset(&mut self) {
        self.phase = EncoderPhase::START;
    }
}
