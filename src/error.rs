use core::fmt;

/// Reason a hardware channel operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareFault {
    /// The channel could not be created
    Create,
    /// The channel could not be enabled
    Enable,
    /// Staged symbols were rejected by the peripheral
    Submit,
    /// The peripheral stopped draining the staging buffer
    Stalled,
    /// The peripheral reported a failed transmission
    Completion,
    /// The transmission did not finish within the configured bound
    Timeout,
}

/// Errors reported by the encoder, driver and scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Argument is out of range or not a recognized variant
    InvalidArgument,
    /// No room left to accept the request
    NoMemory,
    /// Operation is not allowed in the current lifecycle state
    InvalidState,
    /// The hardware channel failed
    Hardware(HardwareFault),
}

impl fmt::Display for HardwareFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Create => "channel creation failed",
            Self::Enable => "channel enable failed",
            Self::Submit => "symbol submission failed",
            Self::Stalled => "staging buffer stalled",
            Self::Completion => "transmission failed",
            Self::Timeout => "transmission timed out",
        };
        f.write_str(reason)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::NoMemory => f.write_str("no memory"),
            Self::InvalidState => f.write_str("invalid state"),
            Self::Hardware(fault) => write!(f, "hardware failure: {fault}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<HardwareFault> for Error {
    fn from(fault: HardwareFault) -> Self {
        Self::Hardware(fault)
    }
}
