#![allow(dead_code)]

use myrtio_strip_animator::{
    AnimationScheduler, Duration, DriverTimings, Error, HardwareChannelConfig, HardwareFault,
    NUM_LEDS, PulseSymbol, RandomSource, SplitMix64, StagingBuffer, StripDriver, TxChannel,
};

/// Faults the fake channel should report
#[derive(Debug, Default, Clone, Copy)]
pub struct Faults {
    pub create: bool,
    pub enable: bool,
    pub submit: bool,
    pub stall: bool,
    pub timeout: bool,
}

/// Fake transmit channel that decodes symbols back into frame bytes
#[derive(Debug, Default)]
pub struct RecordingChannel {
    pub config: Option<HardwareChannelConfig>,
    pub enabled: bool,
    pub released: bool,
    pub faults: Faults,
    /// Most symbols accepted per submit; `None` takes everything
    pub burst: Option<usize>,
    pub submits: usize,
    pub in_flight: Vec<PulseSymbol>,
    pub frames: Vec<Vec<u8>>,
    pub reset_symbols: Vec<PulseSymbol>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faults(faults: Faults) -> Self {
        Self {
            faults,
            ..Self::default()
        }
    }

    /// Channel that accepts at most `burst` symbols per submit
    pub fn with_burst(burst: usize) -> Self {
        Self {
            burst: Some(burst),
            ..Self::default()
        }
    }

    /// Every symbol clocked out so far, including latch codes
    pub fn symbols_sent(&self) -> usize {
        self.frames.iter().map(|frame| frame.len() * 8).sum::<usize>() + self.reset_symbols.len()
    }

    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl TxChannel for RecordingChannel {
    fn create(&mut self, config: &HardwareChannelConfig) -> Result<(), Error> {
        if self.faults.create {
            return Err(HardwareFault::Create.into());
        }
        self.config = Some(*config);
        Ok(())
    }

    fn enable(&mut self) -> Result<(), Error> {
        if self.faults.enable {
            return Err(HardwareFault::Enable.into());
        }
        self.enabled = true;
        Ok(())
    }

    fn submit(&mut self, staged: &mut StagingBuffer) -> Result<(), Error> {
        if self.faults.submit {
            return Err(HardwareFault::Submit.into());
        }
        if self.faults.stall {
            return Ok(());
        }
        self.submits += 1;
        let accepted = self.burst.unwrap_or(usize::MAX);
        self.in_flight.extend(staged.drain().take(accepted));
        Ok(())
    }

    fn wait_all_done(&mut self, _timeout: Duration) -> Result<(), Error> {
        if self.faults.timeout {
            self.in_flight.clear();
            return Err(HardwareFault::Timeout.into());
        }

        let mut bytes = Vec::new();
        let mut current = 0u8;
        let mut bits = 0;
        for symbol in self.in_flight.drain(..) {
            if !symbol.level0() {
                self.reset_symbols.push(symbol);
                self.frames.push(core::mem::take(&mut bytes));
                continue;
            }
            current = (current << 1) | u8::from(symbol.duration0() > symbol.duration1());
            bits += 1;
            if bits == 8 {
                bytes.push(current);
                current = 0;
                bits = 0;
            }
        }
        Ok(())
    }

    fn release(&mut self) {
        self.enabled = false;
        self.released = true;
    }
}

/// Random source replaying a fixed sequence
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Driver timings without the inter-frame gap
pub fn fast_timings() -> DriverTimings {
    DriverTimings {
        frame_gap: Duration::from_millis(0),
        done_timeout: Duration::from_millis(100),
    }
}

/// Initialized driver over a recording channel
pub fn driver() -> StripDriver<RecordingChannel> {
    driver_over(RecordingChannel::new())
}

/// Initialized driver over the given channel
pub fn driver_over(channel: RecordingChannel) -> StripDriver<RecordingChannel> {
    let mut driver = StripDriver::with_timings(channel, fast_timings());
    driver
        .initialize(&HardwareChannelConfig::default())
        .expect("driver init");
    driver
}

pub type TestScheduler = AnimationScheduler<RecordingChannel, SplitMix64, NUM_LEDS>;

/// Stopped scheduler with a seeded random source
pub fn scheduler(seed: u64) -> TestScheduler {
    AnimationScheduler::new(driver(), SplitMix64::new(seed))
}

/// Stopped scheduler replaying a fixed random sequence
pub fn scripted_scheduler(
    values: &[u32],
) -> AnimationScheduler<RecordingChannel, SequenceRandom, NUM_LEDS> {
    AnimationScheduler::new(driver(), SequenceRandom::new(values))
}
