//! Linear time sorting of `f32` slices.
//!
//! Floats are mapped to unsigned keys whose integer order matches the float order,
//! then sorted with three LSB radix passes over 11 bit digits.
//! Values are ordered as by [`f32::total_cmp`].

pub mod bench;
mod flip;
pub mod inputs;
mod sort;
pub mod verify;

pub use flip::*;
pub use sort::*;

// 8 -> 4 passes per u32, 1k memory per histogram
// 11 -> 3 passes per u32, 8k memory per histogram, all three fit into L1 cache
// 16 -> 2 passes per u32, 256k memory per histogram, no longer fits into L1 or L2
pub(crate) const RADIX_BITS: usize = 11;
pub(crate) const RADIX_HIST_LEN: usize = 1 << RADIX_BITS;
pub(crate) const RADIX_HIST_MASK: u32 = (RADIX_HIST_LEN - 1) as u32;
pub(crate) const DIGITS: usize = 32_usize.div_ceil(RADIX_BITS);
