use std::{
    iter::successors,
    ops::{Add, Mul, Neg, Sub},
};

use bn254::{ff::Field, group::Group, G1Projective, Scalar};
use maybe_rayon::prelude::*;

/// Anything that can be the payload of an FFT butterfly: scalars, or group
/// elements being combined with scalar twiddle factors.
pub trait FFTElement:
    Sized
    + Send
    + Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Scalar, Output = Self>
    + Neg<Output = Self>
{
    fn fft_zero() -> Self;
}

impl FFTElement for Scalar {
    fn fft_zero() -> Self {
        Self::ZERO
    }
}

impl FFTElement for G1Projective {
    fn fft_zero() -> Self {
        Self::identity()
    }
}

/// In-place bit-reversed-input radix-2 Cooley-Tukey FFT.
///
/// Adapted from the two-phase decimation-in-time layout used by
/// Plonky3's `radix_2_dit_parallel`: the first `mid` layers run with
/// un-reversed twiddles on bit-reversed input, the remaining layers run on
/// bit-reversed twiddles, which lets each half parallelize over independent
/// chunks.
pub fn fft_inplace<T: FFTElement>(
    omegas: &[Scalar],
    twiddle_factors_bo: &[Scalar],
    values: &mut [T],
) {
    let log_n = log2_pow2(values.len());
    let mid = log_n.div_ceil(2);

    reverse_bit_order(values);
    first_half(values, mid, omegas);

    reverse_bit_order(values);
    second_half(values, mid, twiddle_factors_bo);

    reverse_bit_order(values);
}

fn first_half<T: FFTElement>(values: &mut [T], mid: usize, omegas: &[Scalar]) {
    values.maybe_par_chunks_mut(1 << mid).for_each(|chunk| {
        let mut backwards = false;
        for layer in 0..mid {
            let half_block_size = 1 << layer;
            let omega = omegas[layer];
            dit_layer(chunk, half_block_size, omega, backwards);
            backwards = !backwards;
        }
    });
}

#[inline]
fn dit_layer<T: FFTElement>(blocks: &mut [T], half_block_size: usize, omega: Scalar, backwards: bool) {
    let process_block = |block: &mut [T]| {
        let (a, b) = block.split_at_mut(half_block_size);
        let mut twiddle = Scalar::ONE;
        for (a, b) in a.iter_mut().zip(b) {
            dit(a, b, twiddle);
            twiddle *= omega;
        }
    };

    let blocks = blocks.chunks_mut(2 * half_block_size);
    if backwards {
        blocks.rev().for_each(process_block);
    } else {
        blocks.for_each(process_block);
    }
}

fn second_half<T: FFTElement>(values: &mut [T], mid: usize, twiddles_bo: &[Scalar]) {
    let log_n = log2_pow2(values.len());
    values
        .maybe_par_chunks_mut(1 << (log_n - mid))
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            let mut backwards = false;
            for layer in mid..log_n {
                let half_block_size = 1 << (log_n - 1 - layer);
                let twiddles_bo = &twiddles_bo[chunk_idx << (layer - mid)..];
                dit_layer_bo(chunk, half_block_size, twiddles_bo, backwards);
                backwards = !backwards;
            }
        });
}

#[inline]
fn dit_layer_bo<T: FFTElement>(
    blocks: &mut [T],
    half_block_size: usize,
    twiddles_bo: &[Scalar],
    backwards: bool,
) {
    let process_block = |block: &mut [T], twiddle: Scalar| {
        let (a, b) = block.split_at_mut(half_block_size);
        for (a, b) in a.iter_mut().zip(b) {
            dit(a, b, twiddle);
        }
    };

    let blocks_and_twiddles = blocks.chunks_mut(2 * half_block_size).zip(twiddles_bo);
    if backwards {
        blocks_and_twiddles
            .rev()
            .for_each(|(block, twiddle)| process_block(block, *twiddle));
    } else {
        blocks_and_twiddles.for_each(|(block, twiddle)| process_block(block, *twiddle));
    }
}

#[inline]
fn dit<T: FFTElement>(a: &mut T, b: &mut T, twiddle: Scalar) {
    let t = if twiddle == Scalar::ONE {
        *b
    } else if twiddle == -Scalar::ONE {
        -*b
    } else if *b == FFTElement::fft_zero() {
        FFTElement::fft_zero()
    } else {
        *b * twiddle
    };
    *b = *a;
    *a = *a + t;
    *b = *b - t;
}

/// Reverses the least significant `bits` bits of `n`.
pub const fn reverse_bits(n: usize, bits: u32) -> usize {
    // Plain `>>` would panic on a full-width shift when `bits == 0`.
    n.reverse_bits().overflowing_shr(usize::BITS - bits).0
}

/// In-place bit-reversal permutation. Its own inverse.
pub fn reverse_bit_order<T>(a: &mut [T]) {
    if a.is_empty() {
        return;
    }

    let n = a.len();
    assert!(n.is_power_of_two(), "n must be a power of two");
    let log_n = log2_pow2(n);

    for k in 0..n {
        let rk = reverse_bits(k, log_n as u32);
        if k < rk {
            a.swap(rk, k);
        }
    }
}

/// `n` is assumed to be a power of two.
const fn log2_pow2(n: usize) -> usize {
    n.trailing_zeros() as usize
}

/// Returns `[omega^(n/2), omega^(n/4), ..., omega^1]` given `omega = omega_n`.
pub fn precompute_omegas(omega: &Scalar, n: usize) -> Vec<Scalar> {
    let log_n = log2_pow2(n) as u32;
    (0..log_n)
        .map(|s| omega.pow_vartime([(n / (1 << (s + 1))) as u64]))
        .collect()
}

/// Returns `[omega^0, omega^1, ..., omega^(n/2-1)]` in bit-reversed order.
pub fn precompute_twiddle_factors_bo(omega: &Scalar, n: usize) -> Vec<Scalar> {
    let mut twiddle_factors = successors(Some(Scalar::ONE), |twiddle| Some(*twiddle * omega))
        .take(n / 2)
        .collect::<Vec<_>>();
    reverse_bit_order(&mut twiddle_factors);
    twiddle_factors
}

#[cfg(test)]
mod tests {
    use rand::{prelude::SliceRandom, thread_rng};

    use super::*;

    #[test]
    fn test_reverse_bits_small() {
        assert_eq!(reverse_bits(0b001, 3), 0b100);
        assert_eq!(reverse_bits(0b011, 3), 0b110);
        assert_eq!(reverse_bits(0b101, 3), 0b101);
    }

    #[test]
    fn test_reverse_bit_order_len_4() {
        let mut arr = [10, 20, 30, 40];
        reverse_bit_order(&mut arr);
        assert_eq!(arr, [10, 30, 20, 40]);
    }

    #[test]
    fn test_reverse_bit_order_roundtrip() {
        for log_n in 1..=8 {
            let n = 1 << log_n;
            let mut rng = thread_rng();
            let mut original: Vec<u32> = (0..n).collect();
            original.shuffle(&mut rng);

            let mut reversed = original.clone();
            reverse_bit_order(&mut reversed);
            reverse_bit_order(&mut reversed);
            assert_eq!(reversed, original);
        }
    }
}
