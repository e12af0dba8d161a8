use embassy_time::Duration;

use crate::config::HardwareChannelConfig;
use crate::encoder::StagingBuffer;
use crate::error::Error;

/// Hardware transmit channel
///
/// Implement this trait to back the strip driver with a concrete
/// peripheral (RMT on ESP32, a PIO state machine, a test recorder).
pub trait TxChannel {
    /// Allocate the channel
    fn create(&mut self, config: &HardwareChannelConfig) -> Result<(), Error>;

    /// Start accepting symbols
    fn enable(&mut self) -> Result<(), Error>;

    /// Move staged symbols into the peripheral
    ///
    /// Implementations drain as many symbols from `staged` as the hardware
    /// accepts, oldest first.
    fn submit(&mut self, staged: &mut StagingBuffer) -> Result<(), Error>;

    /// Block until every submitted symbol has been clocked out
    fn wait_all_done(&mut self, timeout: Duration) -> Result<(), Error>;

    /// Give the channel back; called on teardown and failed initialization
    fn release(&mut self);
}
