use std::fmt;

/// A fixed-width machine word as operated on by the compression engines.
///
/// The SHA family works over unsigned 32-bit words (SHA-1, SHA-224, SHA-256)
/// or 64-bit words (SHA-384, SHA-512 and its truncated variants). Shifts and
/// rotations come for free from the native integer types; the only operation
/// the shared plumbing needs to abstract over is addition modulo the word
/// size.
pub trait Word: 'static + Copy + Eq + fmt::Debug {
    /// Addition modulo the word size, i.e. wrapping on overflow.
    fn add_mod(self, rhs: Self) -> Self;
}

impl Word for u32 {
    fn add_mod(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Word for u64 {
    fn add_mod(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}
