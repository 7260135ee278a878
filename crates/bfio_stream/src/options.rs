use crate::INITIAL_RESERVED;

/// Options for creating a [`DynamicBuffer`](crate::DynamicBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOptions {
    /// Bytes allocated up front. Rounded up to a power of two; zero allocates nothing.
    pub initial_reserved: usize,
}

impl BufferOptions {
    pub fn new(initial_reserved: usize) -> Self {
        Self { initial_reserved }
    }

    pub fn with_initial_reserved(mut self, initial_reserved: usize) -> Self {
        self.initial_reserved = initial_reserved;
        self
    }
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self::new(INITIAL_RESERVED)
    }
}

impl From<usize> for BufferOptions {
    fn from(initial_reserved: usize) -> Self {
        Self::new(initial_reserved)
    }
}
