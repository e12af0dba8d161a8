//! Animation scheduling
//!
//! The scheduler owns the strip driver, the active configuration and the
//! animation phase state. Each tick renders one frame, applies the global
//! brightness, sends it and reports how long to sleep before the next
//! tick. Commands from the control surface are applied between ticks,
//! so an in-flight frame always completes before an animation switch.
//! Failures are published back through the control surface.

use embassy_time::{Duration, Instant, Timer};
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{AnimationConfig, AnimationKind, AnimationRequest, AnimationSlot};
use crate::color::{OFF, Rgb};
use crate::control::{Command, Controls, PIXEL_BRIGHTNESS_MAX, PixelRequest};
use crate::driver::{StripDriver, TxChannel};
use crate::error::Error;
use crate::filter::{BrightnessFilter, Filter};
use crate::frame::Frame;
use crate::math8::scale_percent;
use crate::random::RandomSource;

/// How often a stopped scheduler polls for commands
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Lifecycle of the animation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

/// Pacing for the tick after the one just run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// When the next tick is due: the tick's `now` plus `sleep_duration`
    pub next_deadline: Instant,
    /// Frame interval, plus the flash hold for Lightning, or the idle poll
    /// interval while stopped
    pub sleep_duration: Duration,
}

/// Animation scheduler for an `N` LED strip
pub struct AnimationScheduler<C: TxChannel, R: RandomSource, const N: usize> {
    driver: StripDriver<C>,
    rng: R,

    state: SchedulerState,
    config: AnimationConfig,
    animation: AnimationSlot,
    brightness: BrightnessFilter,

    /// Buffer written by per-pixel requests
    manual: Frame<N>,
    /// Last frame handed to the driver
    last_frame: Frame<N>,
}

impl<C: TxChannel, R: RandomSource, const N: usize> AnimationScheduler<C, R, N> {
    /// Create a stopped scheduler around an initialized driver
    pub fn new(driver: StripDriver<C>, rng: R) -> Self {
        let config = AnimationConfig::DEFAULT;
        Self {
            driver,
            rng,
            state: SchedulerState::Stopped,
            animation: config.kind.to_slot(),
            brightness: BrightnessFilter::new(config.brightness),
            config,
            manual: Frame::off(),
            last_frame: Frame::off(),
        }
    }

    /// Replace the running animation
    ///
    /// Phase state always starts from defaults, even when the same
    /// animation is restarted.
    pub fn start(&mut self, config: AnimationConfig) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[AnimationScheduler.start] {} rgb=({}, {}, {}) brightness={} speed={}ms",
            config.kind.as_str(),
            config.color.r,
            config.color.g,
            config.color.b,
            config.brightness,
            config.speed_ms
        );
        self.config = config;
        self.animation = config.kind.to_slot();
        self.brightness.set(config.brightness);
        self.state = SchedulerState::Running;
    }

    /// Validate a raw request and start it
    ///
    /// An invalid request leaves the running animation untouched.
    pub fn start_request(&mut self, request: AnimationRequest) -> Result<(), Error> {
        let config = AnimationConfig::try_from(request)?;
        self.start(config);
        Ok(())
    }

    /// Stop the animation and blank the strip
    pub fn stop(&mut self) -> Result<(), Error> {
        #[cfg(feature = "esp32-log")]
        println!("[AnimationScheduler.stop] stopping {}", self.config.kind.as_str());
        self.state = SchedulerState::Stopped;
        self.config.kind = AnimationKind::None;
        self.animation = AnimationKind::None.to_slot();

        self.last_frame = Frame::off();
        self.driver.transmit(&self.last_frame)
    }

    /// Current configuration
    pub const fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    /// Active animation and its phase state
    pub const fn animation(&self) -> &AnimationSlot {
        &self.animation
    }

    /// Interval the loop waits after every frame
    pub const fn frame_interval(&self) -> Duration {
        match self.state {
            SchedulerState::Running => self.config.speed(),
            SchedulerState::Stopped => IDLE_POLL_INTERVAL,
        }
    }

    /// Set one pixel of the manual buffer and send the whole buffer
    ///
    /// `brightness` is a percentage (0-100), unlike the 0-255 animation
    /// brightness.
    pub fn set_pixel(&mut self, request: PixelRequest) -> Result<(), Error> {
        if request.brightness > PIXEL_BRIGHTNESS_MAX {
            return Err(Error::InvalidArgument);
        }
        let color = Rgb {
            r: scale_percent(request.color.r, request.brightness),
            g: scale_percent(request.color.g, request.brightness),
            b: scale_percent(request.color.b, request.brightness),
        };
        self.manual.set(request.index, color)?;

        self.last_frame = self.manual;
        self.driver.transmit(&self.manual)
    }

    /// Manual per-pixel buffer
    pub fn pixels(&self) -> [Rgb; N] {
        self.manual.colors()
    }

    /// Last frame handed to the driver
    pub const fn last_frame(&self) -> &Frame<N> {
        &self.last_frame
    }

    /// Render the next frame of the active animation
    ///
    /// Advances the phase state by one tick.
    pub fn render_frame(&mut self) -> Frame<N> {
        let mut leds = [OFF; N];
        self.animation.render(&self.config, &mut self.rng, &mut leds);
        self.brightness.apply(&mut leds);
        Frame::from_colors(&leds)
    }

    /// Render and send one frame, then report when the next one is due
    ///
    /// A stopped scheduler sends nothing and asks to be polled again after
    /// [`IDLE_POLL_INTERVAL`]. A Lightning flash extends the sleep by its
    /// hold instead of blocking here. A failed transmit is returned as is;
    /// the caller should still wait [`Self::frame_interval`] before the
    /// next tick.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, Error> {
        let mut sleep_duration = self.frame_interval();

        if self.state == SchedulerState::Running {
            let frame = self.render_frame();
            sleep_duration += self.animation.hold();

            self.last_frame = frame;
            self.driver.transmit(&frame)?;
        }

        let sleep_duration = sleep_duration.max(self.driver.ready_in(now));
        Ok(FrameResult {
            next_deadline: now + sleep_duration,
            sleep_duration,
        })
    }

    /// Apply every queued command
    ///
    /// All commands are applied even if some fail; the first failure is
    /// returned.
    pub fn process_commands<const Q: usize>(
        &mut self,
        controls: &Controls<N, Q>,
    ) -> Result<(), Error> {
        let mut result = Ok(());

        while let Some(command) = controls.next_command() {
            let applied = match command {
                Command::Start(config) => {
                    self.start(config);
                    Ok(())
                }
                Command::Stop => self.stop(),
                Command::SetPixel(request) => {
                    let applied = self.set_pixel(request);
                    controls.publish_pixels(self.pixels());
                    applied
                }
            };

            if let Err(err) = applied {
                #[cfg(feature = "esp32-log")]
                println!("[AnimationScheduler.process_commands] {:?} failed: {}", command, err);
                if result.is_ok() {
                    result = Err(err);
                }
            }
        }

        result
    }

    /// One loop iteration: apply commands, run a tick, publish failures
    ///
    /// Returns how long to sleep before the next iteration.
    pub fn poll<const Q: usize>(&mut self, controls: &Controls<N, Q>, now: Instant) -> Duration {
        if let Err(err) = self.process_commands(controls) {
            controls.report_error(err);
        }

        match self.tick(now) {
            Ok(result) => result.sleep_duration,
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("[AnimationScheduler.poll] frame failed: {}", err);
                controls.report_error(err);
                self.frame_interval()
            }
        }
    }

    /// Run the animation loop forever
    pub async fn run<const Q: usize>(&mut self, controls: &Controls<N, Q>) -> ! {
        loop {
            let sleep = self.poll(controls, Instant::now());
            Timer::after(sleep).await;
        }
    }

    pub const fn driver(&self) -> &StripDriver<C> {
        &self.driver
    }

    /// Driver access for fault recovery and teardown
    pub fn driver_mut(&mut self) -> &mut StripDriver<C> {
        &mut self.driver
    }
}
