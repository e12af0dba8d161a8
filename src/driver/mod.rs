//! Strip driver
//!
//! Owns the transmit channel and the single encoder session. Frames are
//! sent one at a time: encode into the staging buffer, hand it to the
//! hardware, repeat until the latch code has left the staging buffer,
//! then wait for the hardware to finish. The inter-frame gap is enforced
//! at the start of the next transmit, so a caller that already sleeps
//! longer than the gap never busy-waits.

mod channel;

use embassy_time::{Duration, Instant, block_for};
#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use channel::TxChannel;

use crate::config::{DriverTimings, HardwareChannelConfig};
use crate::encoder::{EncoderConfig, StagingBuffer, WaveformEncoder};
use crate::error::{Error, HardwareFault};
use crate::frame::Frame;

#[derive(Debug)]
struct Session {
    config: HardwareChannelConfig,
    encoder: WaveformEncoder,
    staging: StagingBuffer,
}

/// Single-writer driver for one LED strip
pub struct StripDriver<C: TxChannel> {
    channel: C,
    timings: DriverTimings,
    session: Option<Session>,
    /// Earliest start of the next frame
    ready_at: Option<Instant>,
}

impl<C: TxChannel> StripDriver<C> {
    /// Wrap a channel; [`Self::initialize`] must run before transmitting
    pub fn new(channel: C) -> Self {
        Self::with_timings(channel, DriverTimings::default())
    }

    /// Wrap a channel with custom pacing
    pub fn with_timings(channel: C, timings: DriverTimings) -> Self {
        Self {
            channel,
            timings,
            session: None,
            ready_at: None,
        }
    }

    /// Create the channel and the encoder session
    ///
    /// On failure every partially acquired resource is released and the
    /// driver stays uninitialized.
    pub fn initialize(&mut self, config: &HardwareChannelConfig) -> Result<(), Error> {
        if self.session.is_some() {
            return Err(Error::InvalidState);
        }
        if !config.is_valid() {
            return Err(Error::InvalidArgument);
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[StripDriver.initialize] creating channel on gpio {} at {} Hz",
            config.gpio, config.resolution_hz
        );
        self.channel.create(config)?;

        #[cfg(feature = "esp32-log")]
        println!("[StripDriver.initialize] installing encoder");
        let session = match Self::open_session(config) {
            Ok(session) => session,
            Err(err) => {
                self.channel.release();
                return Err(err);
            }
        };

        #[cfg(feature = "esp32-log")]
        println!("[StripDriver.initialize] enabling channel");
        if let Err(err) = self.channel.enable() {
            self.channel.release();
            return Err(err);
        }

        self.session = Some(session);
        Ok(())
    }

    fn open_session(config: &HardwareChannelConfig) -> Result<Session, Error> {
        let encoder = WaveformEncoder::new(&EncoderConfig {
            resolution_hz: config.resolution_hz,
        })?;
        let staging = StagingBuffer::with_capacity(config.mem_block_symbols)?;
        Ok(Session {
            config: *config,
            encoder,
            staging,
        })
    }

    /// Release the channel; later transmits fail with `InvalidState`
    pub fn deinitialize(&mut self) {
        if self.session.take().is_some() {
            self.channel.release();
        }
        self.ready_at = None;
    }

    pub const fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Configuration the channel was created with
    pub fn config(&self) -> Option<&HardwareChannelConfig> {
        self.session.as_ref().map(|session| &session.config)
    }

    pub const fn timings(&self) -> &DriverTimings {
        &self.timings
    }

    /// The wrapped channel
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Channel access for fault injection and recovery
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Time left until the frame gap after the last frame has passed
    pub fn ready_in(&self, now: Instant) -> Duration {
        match self.ready_at {
            Some(ready_at) if ready_at > now => ready_at - now,
            _ => Duration::from_ticks(0),
        }
    }

    /// Send one frame and wait for it to be latched
    ///
    /// Waits out whatever is left of the frame gap, streams the frame,
    /// then blocks until the hardware reports completion (bounded by
    /// [`DriverTimings::done_timeout`]). Any failure aborts the frame and
    /// resets the encoder session.
    pub fn transmit<const N: usize>(&mut self, frame: &Frame<N>) -> Result<(), Error> {
        let Some(session) = self.session.as_mut() else {
            return Err(Error::InvalidState);
        };

        if let Some(ready_at) = self.ready_at.take() {
            let now = Instant::now();
            if ready_at > now {
                block_for(ready_at - now);
            }
        }

        let result = Self::stream(&mut self.channel, session, frame.as_bytes()).and_then(|()| {
            self.channel.wait_all_done(self.timings.done_timeout)
        });
        if let Err(err) = result {
            #[cfg(feature = "esp32-log")]
            println!("[StripDriver.transmit] frame aborted: {}", err);
            session.encoder.reset();
            session.staging.clear();
            return Err(err);
        }

        if self.timings.frame_gap.as_ticks() != 0 {
            self.ready_at = Some(Instant::now() + self.timings.frame_gap);
        }
        Ok(())
    }

    fn stream(channel: &mut C, session: &mut Session, payload: &[u8]) -> Result<(), Error> {
        loop {
            let result = session.encoder.encode(&mut session.staging, payload);
            let complete = result.state.is_complete();
            Self::submit(channel, &mut session.staging, complete)?;
            if complete {
                return Ok(());
            }
        }
    }

    /// Hand staged symbols to the channel
    ///
    /// With `until_empty` the whole buffer must be accepted, otherwise any
    /// progress is enough to resume encoding. A submit that accepts
    /// nothing is a stall.
    fn submit(channel: &mut C, staging: &mut StagingBuffer, until_empty: bool) -> Result<(), Error> {
        loop {
            let before = staging.len();
            channel.submit(staging)?;
            let after = staging.len();
            if after == 0 || (!until_empty && after < before) {
                return Ok(());
            }
            if after >= before {
                return Err(HardwareFault::Stalled.into());
            }
        }
    }
}
