//! Control surface shared with the request-handling context
//!
//! Requests are validated on the caller's side, queued, and applied by
//! the scheduler at its next frame boundary, which makes the scheduler
//! the only writer to the strip. The active configuration, the
//! per-pixel buffer and the scheduler's failures are published under a
//! critical section so readers never observe a half-written value.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::animation::{AnimationConfig, AnimationKind, AnimationRequest};
use crate::color::{OFF, Rgb};
use crate::error::Error;

/// Largest brightness accepted by [`PixelRequest`], in percent
pub const PIXEL_BRIGHTNESS_MAX: u8 = 100;

/// "Set one pixel" request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRequest {
    pub index: usize,
    pub color: Rgb,
    /// Brightness in percent (0-100)
    pub brightness: u8,
}

/// Work queued for the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the running animation
    Start(AnimationConfig),
    /// Stop the animation and blank the strip
    Stop,
    /// Update one pixel of the manual buffer and send it
    SetPixel(PixelRequest),
}

#[derive(Debug)]
struct Shared<const N: usize, const Q: usize> {
    commands: Deque<Command, Q>,
    config: AnimationConfig,
    pixels: [Rgb; N],
    last_error: Option<Error>,
    failures: u32,
}

/// Commands and published state for an `N` LED strip with a `Q` deep queue
pub struct Controls<const N: usize, const Q: usize> {
    inner: Mutex<RefCell<Shared<N, Q>>>,
}

impl<const N: usize, const Q: usize> Controls<N, Q> {
    /// Create controls with the power-on configuration
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Shared {
                commands: Deque::new(),
                config: AnimationConfig::DEFAULT,
                pixels: [OFF; N],
                last_error: None,
                failures: 0,
            })),
        }
    }

    /// Get a handle for the request-handling context
    pub const fn handle(&self) -> ControlHandle<'_, N, Q> {
        ControlHandle { controls: self }
    }

    /// Most recently requested configuration
    pub fn config(&self) -> AnimationConfig {
        critical_section::with(|cs| self.inner.borrow_ref(cs).config)
    }

    /// Manual per-pixel buffer as last applied
    pub fn pixels(&self) -> [Rgb; N] {
        critical_section::with(|cs| self.inner.borrow_ref(cs).pixels)
    }

    /// Number of commands waiting for the scheduler
    pub fn pending(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow_ref(cs).commands.len())
    }

    /// Take the oldest queued command
    pub fn next_command(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).commands.pop_front())
    }

    /// Publish the manual pixel buffer after the scheduler applied it
    pub fn publish_pixels(&self, pixels: [Rgb; N]) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).pixels = pixels);
    }

    /// Most recent failure reported by the scheduler loop
    pub fn last_error(&self) -> Option<Error> {
        critical_section::with(|cs| self.inner.borrow_ref(cs).last_error)
    }

    /// Failures reported since power-on
    pub fn failure_count(&self) -> u32 {
        critical_section::with(|cs| self.inner.borrow_ref(cs).failures)
    }

    /// Record a failed command or frame
    pub fn report_error(&self, err: Error) {
        critical_section::with(|cs| {
            let mut shared = self.inner.borrow_ref_mut(cs);
            shared.last_error = Some(err);
            shared.failures = shared.failures.saturating_add(1);
        });
    }

    /// Queue a command and update the published configuration together
    fn enqueue(
        &self,
        command: Command,
        update: impl FnOnce(&mut AnimationConfig),
    ) -> Result<(), Error> {
        critical_section::with(|cs| {
            let mut shared = self.inner.borrow_ref_mut(cs);
            shared
                .commands
                .push_back(command)
                .map_err(|_| Error::NoMemory)?;
            update(&mut shared.config);
            Ok(())
        })
    }
}

impl<const N: usize, const Q: usize> Default for Controls<N, Q> {
    fn default() -> Self {
        Self::new()
    }
}

/// Request-side view of [`Controls`]
///
/// Validates requests before they reach the queue. `Copy`, so every
/// request handler can hold its own.
#[derive(Clone, Copy)]
pub struct ControlHandle<'a, const N: usize, const Q: usize> {
    controls: &'a Controls<N, Q>,
}

impl<const N: usize, const Q: usize> ControlHandle<'_, N, Q> {
    /// Validate and queue a "start animation" request
    ///
    /// The new configuration is visible through [`Self::config`] as soon
    /// as this returns.
    pub fn start(&self, request: AnimationRequest) -> Result<(), Error> {
        let config = AnimationConfig::try_from(request)?;
        self.start_config(config)
    }

    /// Queue an already validated configuration
    pub fn start_config(&self, config: AnimationConfig) -> Result<(), Error> {
        self.controls
            .enqueue(Command::Start(config), |current| *current = config)
    }

    /// Queue a stop; the configuration reads as `None` right away
    pub fn stop(&self) -> Result<(), Error> {
        self.controls
            .enqueue(Command::Stop, |current| current.kind = AnimationKind::None)
    }

    /// Validate and queue a "set one pixel" request
    pub fn set_pixel(&self, request: PixelRequest) -> Result<(), Error> {
        if request.index >= N || request.brightness > PIXEL_BRIGHTNESS_MAX {
            return Err(Error::InvalidArgument);
        }
        self.controls.enqueue(Command::SetPixel(request), |_| {})
    }

    /// Current animation configuration
    pub fn config(&self) -> AnimationConfig {
        self.controls.config()
    }

    /// Current per-pixel state
    pub fn pixels(&self) -> [Rgb; N] {
        self.controls.pixels()
    }

    /// Most recent scheduler failure, if any
    pub fn last_error(&self) -> Option<Error> {
        self.controls.last_error()
    }

    pub fn failure_count(&self) -> u32 {
        self.controls.failure_count()
    }
}
