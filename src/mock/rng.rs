//! Seeded xorshift generator for reproducible mock data.

/// Advance a 32-bit xorshift state and map it into `[0, 1)` with six
/// decimal digits of resolution.
pub fn step(state: u32) -> (f64, u32) {
    let mut s = state;
    s ^= s << 13;
    s ^= s >> 17;
    s ^= s << 5;
    (f64::from(s % 1_000_000) / 1_000_000.0, s)
}

/// Explicitly threaded generator state.
#[derive(Debug, Clone)]
pub struct SeedRng {
    state: u32,
}

impl SeedRng {
    /// A zero seed is a fixed point and produces only zeros.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_f64(&mut self) -> f64 {
        let (value, state) = step(self.state);
        self.state = state;
        value
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let i = (self.next_f64() * items.len() as f64).floor() as usize;
        &items[i.min(items.len() - 1)]
    }

    /// True when the next draw exceeds `threshold`.
    pub fn chance(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }
}
