//! Fixed-capacity ring buffer holding symbols awaiting transmission.

use heapless::Deque;

use super::PulseSymbol;
use crate::config::MAX_MEM_BLOCK_SYMBOLS;
use crate::error::Error;

/// Staging buffer between the encoder and the peripheral
///
/// Backing storage is sized for [`MAX_MEM_BLOCK_SYMBOLS`]; the usable
/// capacity is the configured channel memory block size.
#[derive(Debug)]
pub struct StagingBuffer {
    symbols: Deque<PulseSymbol, MAX_MEM_BLOCK_SYMBOLS>,
    capacity: usize,
}

impl StagingBuffer {
    /// Create an empty buffer holding at most `capacity` symbols
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 || capacity > MAX_MEM_BLOCK_SYMBOLS {
            return Err(Error::InvalidArgument);
        }
        Ok(Self {
            symbols: Deque::new(),
            capacity,
        })
    }

    /// Usable capacity in symbols
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() >= self.capacity
    }

    /// Number of symbols that can still be staged
    pub fn free(&self) -> usize {
        self.capacity.saturating_sub(self.symbols.len())
    }

    /// Stage a symbol
    ///
    /// Returns the symbol back if the buffer is full.
    pub fn push(&mut self, symbol: PulseSymbol) -> Result<(), PulseSymbol> {
        if self.is_full() {
            return Err(symbol);
        }
        self.symbols.push_back(symbol)
    }

    /// Take the oldest staged symbol
    pub fn pop(&mut self) -> Option<PulseSymbol> {
        self.symbols.pop_front()
    }

    /// Take every staged symbol, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = PulseSymbol> + '_ {
        core::iter::from_fn(move || self.symbols.pop_front())
    }

    /// Drop every staged symbol
    pub fn clear(&mut self) {
        self.symbols.clear();
    }
}
