//! Animation system with a closed set of variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait and owns its own phase
//! state, so switching animations always starts from a clean phase.

mod aurora;
mod breathing;
mod chase;
mod fire;
mod lightning;
mod ocean;
mod rainbow;
mod solid;

pub use aurora::AuroraAnimation;
pub use breathing::BreathingAnimation;
pub use chase::ChaseAnimation;
pub use fire::FireAnimation;
pub use lightning::{LIGHTNING_HOLD, LightningAnimation};
pub use ocean::OceanAnimation;
pub use rainbow::RainbowAnimation;
pub use solid::SolidAnimation;

use embassy_time::Duration;

use crate::color::{Rgb, WHITE};
use crate::error::Error;
use crate::random::RandomSource;

const ANIMATION_NAME_NONE: &str = "none";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_BREATHING: &str = "breathing";
const ANIMATION_NAME_CHASE: &str = "chase";
const ANIMATION_NAME_FIRE: &str = "fire";
const ANIMATION_NAME_LIGHTNING: &str = "lightning";
const ANIMATION_NAME_OCEAN: &str = "ocean";
const ANIMATION_NAME_AURORA: &str = "aurora";
const ANIMATION_NAME_SOLID_COLOR: &str = "solid_color";

const ANIMATION_ID_NONE: u8 = 0;
const ANIMATION_ID_RAINBOW: u8 = 1;
const ANIMATION_ID_BREATHING: u8 = 2;
const ANIMATION_ID_CHASE: u8 = 3;
const ANIMATION_ID_FIRE: u8 = 4;
const ANIMATION_ID_LIGHTNING: u8 = 5;
const ANIMATION_ID_OCEAN: u8 = 6;
const ANIMATION_ID_AURORA: u8 = 7;
const ANIMATION_ID_SOLID_COLOR: u8 = 8;

/// Default frame interval for requests that omit it
pub const DEFAULT_SPEED_MS: u32 = 50;
/// Default brightness for requests that omit it
pub const DEFAULT_REQUEST_BRIGHTNESS: u8 = 100;

pub trait Animation {
    /// Render one frame and advance the phase by one tick
    fn render<R: RandomSource>(&mut self, config: &AnimationConfig, rng: &mut R, leds: &mut [Rgb]);

    /// Extra time the last rendered frame stays up before the next tick
    fn hold(&self) -> Duration {
        Duration::from_ticks(0)
    }

    /// Reset phase state
    fn reset(&mut self) {}
}

/// Known animation kinds that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AnimationKind {
    #[default]
    None = ANIMATION_ID_NONE,
    Rainbow = ANIMATION_ID_RAINBOW,
    Breathing = ANIMATION_ID_BREATHING,
    Chase = ANIMATION_ID_CHASE,
    Fire = ANIMATION_ID_FIRE,
    Lightning = ANIMATION_ID_LIGHTNING,
    Ocean = ANIMATION_ID_OCEAN,
    Aurora = ANIMATION_ID_AURORA,
    SolidColor = ANIMATION_ID_SOLID_COLOR,
}

impl AnimationKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_NONE => Self::None,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_BREATHING => Self::Breathing,
            ANIMATION_ID_CHASE => Self::Chase,
            ANIMATION_ID_FIRE => Self::Fire,
            ANIMATION_ID_LIGHTNING => Self::Lightning,
            ANIMATION_ID_OCEAN => Self::Ocean,
            ANIMATION_ID_AURORA => Self::Aurora,
            ANIMATION_ID_SOLID_COLOR => Self::SolidColor,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => ANIMATION_NAME_NONE,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::Breathing => ANIMATION_NAME_BREATHING,
            Self::Chase => ANIMATION_NAME_CHASE,
            Self::Fire => ANIMATION_NAME_FIRE,
            Self::Lightning => ANIMATION_NAME_LIGHTNING,
            Self::Ocean => ANIMATION_NAME_OCEAN,
            Self::Aurora => ANIMATION_NAME_AURORA,
            Self::SolidColor => ANIMATION_NAME_SOLID_COLOR,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_NONE => Some(Self::None),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_BREATHING => Some(Self::Breathing),
            ANIMATION_NAME_CHASE => Some(Self::Chase),
            ANIMATION_NAME_FIRE => Some(Self::Fire),
            ANIMATION_NAME_LIGHTNING => Some(Self::Lightning),
            ANIMATION_NAME_OCEAN => Some(Self::Ocean),
            ANIMATION_NAME_AURORA => Some(Self::Aurora),
            ANIMATION_NAME_SOLID_COLOR => Some(Self::SolidColor),
            _ => None,
        }
    }

    /// Fresh animation with default phase state
    pub fn to_slot(self) -> AnimationSlot {
        match self {
            Self::None => AnimationSlot::Off(SolidAnimation::off()),
            Self::Rainbow => AnimationSlot::Rainbow(RainbowAnimation::new()),
            Self::Breathing => AnimationSlot::Breathing(BreathingAnimation::new()),
            Self::Chase => AnimationSlot::Chase(ChaseAnimation::new()),
            Self::Fire => AnimationSlot::Fire(FireAnimation),
            Self::Lightning => AnimationSlot::Lightning(LightningAnimation::new()),
            Self::Ocean => AnimationSlot::Ocean(OceanAnimation::new()),
            Self::Aurora => AnimationSlot::Aurora(AuroraAnimation::new()),
            Self::SolidColor => AnimationSlot::Solid(SolidAnimation::configured()),
        }
    }
}

/// Animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub kind: AnimationKind,
    /// Pause between frames, in milliseconds
    pub speed_ms: u32,
    /// Global brightness applied to every frame
    pub brightness: u8,
    /// Base color for animations that use one
    pub color: Rgb,
}

impl AnimationConfig {
    /// Power-on configuration: nothing running, half brightness, white
    pub const DEFAULT: Self = Self {
        kind: AnimationKind::None,
        speed_ms: DEFAULT_SPEED_MS,
        brightness: 128,
        color: WHITE,
    };

    /// Frame interval as a duration
    #[allow(clippy::cast_lossless)]
    pub const fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms as u64)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Unvalidated "start animation" request from the control surface
///
/// Omitted fields take the request defaults: 50 ms, brightness 100, white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRequest {
    /// Raw animation id
    pub kind: u8,
    pub speed_ms: Option<u32>,
    pub brightness: Option<u8>,
    pub color: Option<Rgb>,
}

impl AnimationRequest {
    pub const fn new(kind: u8) -> Self {
        Self {
            kind,
            speed_ms: None,
            brightness: None,
            color: None,
        }
    }
}

impl TryFrom<AnimationRequest> for AnimationConfig {
    type Error = Error;

    fn try_from(request: AnimationRequest) -> Result<Self, Error> {
        let kind = AnimationKind::from_raw(request.kind).ok_or(Error::InvalidArgument)?;
        Ok(Self {
            kind,
            speed_ms: request.speed_ms.unwrap_or(DEFAULT_SPEED_MS),
            brightness: request.brightness.unwrap_or(DEFAULT_REQUEST_BRIGHTNESS),
            color: request.color.unwrap_or(WHITE),
        })
    }
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// All LEDs off
    Off(SolidAnimation),
    /// Configured color on every LED
    Solid(SolidAnimation),
    Rainbow(RainbowAnimation),
    Breathing(BreathingAnimation),
    Chase(ChaseAnimation),
    Fire(FireAnimation),
    Lightning(LightningAnimation),
    Ocean(OceanAnimation),
    Aurora(AuroraAnimation),
}

impl Default for AnimationSlot {
    fn default() -> Self {
        Self::Off(SolidAnimation::off())
    }
}

impl AnimationSlot {
    /// Render the current animation
    pub fn render<R: RandomSource>(
        &mut self,
        config: &AnimationConfig,
        rng: &mut R,
        leds: &mut [Rgb],
    ) {
        match self {
            Self::Off(animation) | Self::Solid(animation) => animation.render(config, rng, leds),
            Self::Rainbow(animation) => animation.render(config, rng, leds),
            Self::Breathing(animation) => animation.render(config, rng, leds),
            Self::Chase(animation) => animation.render(config, rng, leds),
            Self::Fire(animation) => animation.render(config, rng, leds),
            Self::Lightning(animation) => animation.render(config, rng, leds),
            Self::Ocean(animation) => animation.render(config, rng, leds),
            Self::Aurora(animation) => animation.render(config, rng, leds),
        }
    }

    /// Hold requested by the last rendered frame
    pub fn hold(&self) -> Duration {
        match self {
            Self::Lightning(animation) => animation.hold(),
            _ => Duration::from_ticks(0),
        }
    }

    /// Reset the animation phase
    pub fn reset(&mut self) {
        match self {
            Self::Off(animation) | Self::Solid(animation) => Animation::reset(animation),
            Self::Rainbow(animation) => Animation::reset(animation),
            Self::Breathing(animation) => Animation::reset(animation),
            Self::Chase(animation) => Animation::reset(animation),
            Self::Fire(animation) => Animation::reset(animation),
            Self::Lightning(animation) => Animation::reset(animation),
            Self::Ocean(animation) => Animation::reset(animation),
            Self::Aurora(animation) => Animation::reset(animation),
        }
    }

    /// Get the animation kind for external observation
    pub fn kind(&self) -> AnimationKind {
        match self {
            Self::Off(_) => AnimationKind::None,
            Self::Solid(_) => AnimationKind::SolidColor,
            Self::Rainbow(_) => AnimationKind::Rainbow,
            Self::Breathing(_) => AnimationKind::Breathing,
            Self::Chase(_) => AnimationKind::Chase,
            Self::Fire(_) => AnimationKind::Fire,
            Self::Lightning(_) => AnimationKind::Lightning,
            Self::Ocean(_) => AnimationKind::Ocean,
            Self::Aurora(_) => AnimationKind::Aurora,
        }
    }
}
