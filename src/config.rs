//! Build-time strip constants and runtime driver configuration.

use embassy_time::Duration;

/// Number of LEDs on the strip
pub const NUM_LEDS: usize = 5;

/// Default RMT resolution, 1 tick = 0.1us
pub const DEFAULT_RESOLUTION_HZ: u32 = 10_000_000;
/// Default data line GPIO
pub const DEFAULT_GPIO: u8 = 17;
/// Default staging buffer size in symbols
pub const DEFAULT_MEM_BLOCK_SYMBOLS: usize = 64;
/// Default number of queued transactions
pub const DEFAULT_TRANS_QUEUE_DEPTH: usize = 4;

/// Largest staging buffer the driver can back
pub const MAX_MEM_BLOCK_SYMBOLS: usize = 512;

/// Default pause after every transmitted frame
pub const DEFAULT_FRAME_GAP: Duration = Duration::from_millis(10);
/// Default bound on the hardware completion wait
pub const DEFAULT_DONE_TIMEOUT: Duration = Duration::from_millis(100);

/// Hardware channel configuration
///
/// Immutable once the driver is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareChannelConfig {
    /// Channel tick rate
    pub resolution_hz: u32,
    /// Output pin
    pub gpio: u8,
    /// Staging buffer capacity in symbols
    pub mem_block_symbols: usize,
    /// Transmission queue depth
    pub trans_queue_depth: usize,
}

impl HardwareChannelConfig {
    pub const DEFAULT: Self = Self {
        resolution_hz: DEFAULT_RESOLUTION_HZ,
        gpio: DEFAULT_GPIO,
        mem_block_symbols: DEFAULT_MEM_BLOCK_SYMBOLS,
        trans_queue_depth: DEFAULT_TRANS_QUEUE_DEPTH,
    };

    /// Set the channel tick rate
    #[must_use]
    pub const fn with_resolution(mut self, resolution_hz: u32) -> Self {
        self.resolution_hz = resolution_hz;
        self
    }

    /// Set the output pin
    #[must_use]
    pub const fn with_gpio(mut self, gpio: u8) -> Self {
        self.gpio = gpio;
        self
    }

    /// Set the staging buffer capacity
    #[must_use]
    pub const fn with_mem_block_symbols(mut self, symbols: usize) -> Self {
        self.mem_block_symbols = symbols;
        self
    }

    /// Set the transmission queue depth
    #[must_use]
    pub const fn with_trans_queue_depth(mut self, depth: usize) -> Self {
        self.trans_queue_depth = depth;
        self
    }

    /// Check that every field can be backed by the driver
    pub const fn is_valid(&self) -> bool {
        self.resolution_hz != 0
            && self.mem_block_symbols != 0
            && self.mem_block_symbols <= MAX_MEM_BLOCK_SYMBOLS
            && self.trans_queue_depth != 0
    }
}

impl Default for HardwareChannelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Driver pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverTimings {
    /// Pause applied after every completed frame
    pub frame_gap: Duration,
    /// Longest wait for the hardware to finish a frame
    pub done_timeout: Duration,
}

impl Default for DriverTimings {
    fn default() -> Self {
        Self {
            frame_gap: DEFAULT_FRAME_GAP,
            done_timeout: DEFAULT_DONE_TIMEOUT,
        }
    }
}
