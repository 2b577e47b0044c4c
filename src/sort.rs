// LSB radix sort for f32, based on
// http://stereopsis.com/radix.html
// http://codercorner.com/RadixSortRevisited.htm
// See https://travisdowns.github.io/blog/2019/05/22/sorting.html

use crate::{flip, unflip, DIGITS, RADIX_BITS, RADIX_HIST_LEN, RADIX_HIST_MASK};

pub(crate) type Histogram = [u32; RADIX_HIST_LEN];

const LOW_SHIFT: usize = 0;
const MID_SHIFT: usize = RADIX_BITS;
const HIGH_SHIFT: usize = 2 * RADIX_BITS;

// distance in elements, ahead of the read cursor
const HISTOGRAM_PREFETCH: usize = 64;
const SCATTER_PREFETCH: usize = 128;

#[inline(always)]
fn digit(key: u32, shift: usize) -> usize {
    ((key >> shift) & RADIX_HIST_MASK) as usize
}

#[inline(always)]
fn prefetch(values: &[u32], i: usize) {
    #[cfg(all(feature = "prefetch", target_arch = "x86_64"))]
    unsafe {
        use std::arch::x86_64::{_mm_prefetch, _MM_HINT_T0};
        // prefetching an address past the end does not fault
        _mm_prefetch::<_MM_HINT_T0>(values.as_ptr().wrapping_add(i) as *const i8);
    }
    #[cfg(not(all(feature = "prefetch", target_arch = "x86_64")))]
    {
        let _ = (values, i);
    }
}

/// Fill one histogram per digit of the flipped keys in a single pass over the raw float bits.
#[inline(never)]
pub(crate) fn fill_histograms(bits: &[u32], histograms: &mut [Histogram; DIGITS]) {
    for h in histograms.iter_mut() {
        h.fill(0);
    }

    let [low, mid, high] = histograms;
    for (i, &b) in bits.iter().enumerate() {
        prefetch(bits, i + HISTOGRAM_PREFETCH);
        let key = flip(b);
        low[digit(key, LOW_SHIFT)] += 1;
        mid[digit(key, MID_SHIFT)] += 1;
        high[digit(key, HIGH_SHIFT)] += 1;
    }
}

/// Calculate the prefix sum of the histogram, biased by one.
///
/// Each entry ends up one before the first output index of its bucket, so the scatter passes
/// increment the entry and then write to the incremented index. The first non-empty bucket
/// wraps around to `u32::MAX`.
#[inline(never)]
pub(crate) fn cumulative_histogram<const N: usize>(histogram: &mut [u32; N]) {
    let mut sum = 0_u32;
    histogram.iter_mut().for_each(|count| {
        let tmp = *count;
        *count = sum.wrapping_sub(1);
        sum += tmp;
    });
}

#[inline(always)]
fn scatter(
    src: &[u32],
    dst: &mut [u32],
    offsets: &mut Histogram,
    shift: usize,
    pre: impl Fn(u32) -> u32,
    post: impl Fn(u32) -> u32,
) {
    debug_assert_eq!(src.len(), dst.len());
    for (i, &value) in src.iter().enumerate() {
        prefetch(src, i + SCATTER_PREFETCH);
        let key = pre(value);
        let slot = &mut offsets[digit(key, shift)];
        *slot = slot.wrapping_add(1);
        dst[*slot as usize] = post(key);
    }
}

/// Flip the raw float bits and distribute the keys by their low digit.
#[inline(never)]
fn scatter_low(bits: &[u32], keys: &mut [u32], offsets: &mut Histogram) {
    scatter(bits, keys, offsets, LOW_SHIFT, flip, |key| key);
}

#[inline(never)]
fn scatter_mid(keys: &[u32], output: &mut [u32], offsets: &mut Histogram) {
    scatter(keys, output, offsets, MID_SHIFT, |key| key, |key| key);
}

/// Distribute keys by their high digit, writing the unflipped float bits.
#[inline(never)]
fn scatter_high(keys: &[u32], bits: &mut [u32], offsets: &mut Histogram) {
    scatter(keys, bits, offsets, HIGH_SHIFT, |key| key, unflip);
}

/// Reusable scratch storage for sorting many slices of similar length.
pub struct RadixSorter {
    scratch: Vec<u32>,
    histograms: Box<[Histogram; DIGITS]>,
}

impl Default for RadixSorter {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixSorter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(capacity),
            histograms: Box::new([[0; RADIX_HIST_LEN]; DIGITS]),
        }
    }

    /// Sort `input` into `output` in ascending [`f32::total_cmp`] order.
    ///
    /// `input` is used as scratch space and holds unspecified values afterwards.
    /// An empty `input` leaves `output` untouched.
    ///
    /// # Panics
    ///
    /// If the slices differ in length or the length does not fit into `u32`.
    #[inline(never)]
    pub fn sort(&mut self, input: &mut [f32], output: &mut [f32]) {
        let len = input.len();
        assert_eq!(len, output.len(), "input and output length must be equal");
        assert!(u32::try_from(len).is_ok(), "length {len} exceeds u32 range");
        if len == 0 {
            return;
        }

        let array: &mut [u32] = bytemuck::cast_slice_mut(input);
        let sorted: &mut [u32] = bytemuck::cast_slice_mut(output);
        self.scratch.resize(len, 0);

        fill_histograms(array, &mut self.histograms);
        for h in self.histograms.iter_mut() {
            cumulative_histogram(h);
        }

        let [low, mid, high] = &mut *self.histograms;
        scatter_low(array, &mut self.scratch, low);
        scatter_mid(&self.scratch, array, mid);
        scatter_high(array, sorted, high);
    }
}

/// Sort `input` into `output`, see [`RadixSorter::sort`].
pub fn sort(input: &mut [f32], output: &mut [f32]) {
    RadixSorter::with_capacity(input.len()).sort(input, output)
}

/// Returns a sorted copy of `values`.
#[inline(never)]
pub fn sort_slice_radix(values: &[f32]) -> Vec<f32> {
    let mut input = values.to_vec();
    let mut output = vec![0.0_f32; values.len()];
    sort(&mut input, &mut output);
    output
}
