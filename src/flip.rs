/// Map the bit pattern of a float to a key whose unsigned order matches the float order.
///
/// Negative values (sign bit set) get all bits flipped, everything else only the sign bit.
/// The result orders like [`f32::total_cmp`], including NaNs and signed zeros.
#[inline(always)]
pub fn flip(bits: u32) -> u32 {
    let mask = ((bits as i32 >> 31) as u32) | 0x8000_0000;
    bits ^ mask
}

/// Inverse of [`flip`].
///
/// A set sign bit in the key means the value was positive and only the sign is flipped back,
/// otherwise the value was negative and all bits are flipped back.
#[inline(always)]
pub fn unflip(key: u32) -> u32 {
    let mask = (key >> 31).wrapping_sub(1) | 0x8000_0000;
    key ^ mask
}

pub trait FloatFlip: Copy {
    fn to_key(&self) -> u32;
    fn from_key(key: u32) -> Self;
}

impl FloatFlip for f32 {
    #[inline(always)]
    fn to_key(&self) -> u32 {
        flip(self.to_bits())
    }

    #[inline(always)]
    fn from_key(key: u32) -> Self {
        f32::from_bits(unflip(key))
    }
}
