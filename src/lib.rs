#![no_std]

pub mod animation;
pub mod color;
pub mod config;
pub mod control;
pub mod driver;
pub mod encoder;
pub mod error;
pub mod filter;
pub mod frame;
pub mod math8;
pub mod random;
pub mod scheduler;

pub use animation::{AnimationConfig, AnimationKind, AnimationRequest, AnimationSlot};
pub use config::{DriverTimings, HardwareChannelConfig, NUM_LEDS};
pub use control::{Command, ControlHandle, Controls, PixelRequest};
pub use driver::{StripDriver, TxChannel};
pub use encoder::{EncodeResult, EncodeState, PulseSymbol, StagingBuffer, WaveformEncoder};
pub use error::{Error, HardwareFault};
pub use frame::Frame;
pub use random::{RandomSource, SplitMix64};
pub use scheduler::{AnimationScheduler, FrameResult, SchedulerState};

pub use color::{Rgb, hsv_to_rgb};
pub use embassy_time::{Duration, Instant};

/// Frame for the build-time strip length
pub type StripFrame = Frame<NUM_LEDS>;
