//! Division kernels over nonnegative magnitudes.
//!
//! Single-word divisors take a fast top-down path. Everything else goes
//! through normalized long division: both operands are shifted so the
//! divisor's top word has its high bit set, quotient words are estimated
//! two at a time from the leading dividend words, and each estimate is
//! corrected by multiply-back and bounded re-subtraction. Callers are
//! responsible for signs and for rejecting a zero divisor.

use std::cmp::Ordering;

use crate::mul::asymmetric_multiply;
use crate::words::{compare, count_words, increment, shl_bits, shr_bits, sub_assign_words};

/// Remainder of a magnitude divided by a single nonzero word.
pub(crate) fn fast_remainder(a: &[u16], divisor: u16) -> u16 {
    debug_assert_ne!(divisor, 0);
    let d = divisor as u32;
    let mut rem = 0u32;
    for &w in a.iter().rev() {
        rem = ((rem << 16) | w as u32) % d;
    }
    rem as u16
}

/// Divides a magnitude by a single nonzero word in place, most
/// significant word first; returns the remainder.
pub(crate) fn fast_divide(q: &mut [u16], divisor: u16) -> u16 {
    debug_assert_ne!(divisor, 0);
    let d = divisor as u32;
    let mut rem = 0u32;
    for w in q.iter_mut().rev() {
        let cur = (rem << 16) | *w as u32;
        *w = (cur / d) as u16;
        rem = cur % d;
    }
    rem as u16
}

/// Trial quotient for the top four dividend words against the 2-word
/// divisor estimate `bt` (top divisor words plus one; zero means 2^32).
/// Dividing by one-more-than-the-divisor-head can only underestimate,
/// which the correction loop then repairs; the result is clamped into
/// two words for the same reason.
fn estimate_quotient(window: &[u16], bt: u32) -> u32 {
    debug_assert_eq!(window.len(), 4);
    let a = window[0] as u64
        | (window[1] as u64) << 16
        | (window[2] as u64) << 32
        | (window[3] as u64) << 48;
    let q = if bt == 0 { a >> 32 } else { a / bt as u64 };
    q.min(u32::MAX as u64) as u32
}

/// Multiplies the 2-word quotient estimate back against the divisor,
/// subtracts it from the working window, and bumps the estimate while
/// the window still holds at least one more divisor.
fn correct_quotient_estimate(window: &mut [u16], tp: &mut [u16], q: &mut [u16], b: &[u16]) {
    let nb = b.len();
    debug_assert_eq!(window.len(), nb + 2);
    debug_assert_eq!(q.len(), 2);
    debug_assert_eq!(tp.len(), 2 * (nb + 2));
    {
        let (prod, scratch) = tp.split_at_mut(nb + 2);
        asymmetric_multiply(prod, scratch, q, b);
        sub_assign_words(window, prod);
    }
    while window[nb] != 0 || compare(&window[..nb], b) != Ordering::Less {
        let borrow = sub_assign_words(&mut window[..nb], b);
        window[nb] = window[nb].wrapping_sub(borrow);
        increment(q, 1);
    }
}

/// Remainder only; a single-word divisor skips building the quotient.
/// The divisor must be nonzero.
pub(crate) fn rem_magnitudes(a: &[u16], b: &[u16]) -> Vec<u16> {
    let la = count_words(a);
    let lb = count_words(b);
    debug_assert!(lb > 0);
    if lb == 1 {
        let r = fast_remainder(&a[..la], b[0]);
        return if r == 0 { Vec::new() } else { vec![r] };
    }
    div_rem_magnitudes(a, b).1
}

/// Quotient and remainder of two magnitudes, both trimmed on return.
/// The divisor must be nonzero.
pub(crate) fn div_rem_magnitudes(a: &[u16], b: &[u16]) -> (Vec<u16>, Vec<u16>) {
    let la = count_words(a);
    let lb = count_words(b);
    debug_assert!(lb > 0);
    if la == 0 {
        return (Vec::new(), Vec::new());
    }
    if la < lb {
        // dividend is smaller than the divisor
        return (Vec::new(), a[..la].to_vec());
    }
    if lb == 1 {
        let mut q = a[..la].to_vec();
        let rem = fast_divide(&mut q, b[0]);
        q.truncate(count_words(&q));
        let r = if rem == 0 { Vec::new() } else { vec![rem] };
        return (q, r);
    }

    // round both lengths up to even for the two-words-per-step loop
    let na = la + (la & 1);
    let nb = lb + (lb & 1);
    let shift_words = nb - lb; // 0 or 1

    // normalized divisor: word-aligned, then top bit of the top word set
    let mut tb = vec![0u16; nb];
    tb[shift_words..shift_words + lb].copy_from_slice(&b[..lb]);
    let shift_bits = tb[nb - 1].leading_zeros();
    shl_bits(&mut tb, shift_bits);

    // normalized dividend with two words of headroom
    let mut ta = vec![0u16; na + 2];
    ta[shift_words..shift_words + la].copy_from_slice(&a[..la]);
    shl_bits(&mut ta, shift_bits);

    let mut quot = vec![0u16; na - nb + 2];
    let mut effective_na = na;
    if ta[na + 1] == 0 && ta[na] <= 1 {
        // the top chunk is short of a full estimation window; settle it
        // by repeated subtraction (runs a small constant number of times
        // thanks to normalization)
        loop {
            let over = ta[na] != 0 || compare(&ta[na - nb..na], &tb) != Ordering::Less;
            if !over {
                break;
            }
            let borrow = sub_assign_words(&mut ta[na - nb..na], &tb);
            ta[na] = ta[na].wrapping_sub(borrow);
            quot[na - nb] += 1;
        }
    } else {
        effective_na = na + 2;
    }

    // two-word divisor head, plus one so estimates never overshoot
    let bt = (tb[nb - 2] as u32 | (tb[nb - 1] as u32) << 16).wrapping_add(1);

    let mut tp = vec![0u16; 2 * (nb + 2)];
    let mut i = effective_na;
    while i > nb {
        i -= 2;
        let q_est = estimate_quotient(&ta[i - 2..i + 2], bt);
        quot[i - nb] = q_est as u16;
        quot[i - nb + 1] = (q_est >> 16) as u16;
        correct_quotient_estimate(
            &mut ta[i - nb..i + 2],
            &mut tp,
            &mut quot[i - nb..i - nb + 2],
            &tb,
        );
    }

    // undo the normalization on what is left of the dividend
    let mut rem = ta[shift_words..shift_words + nb].to_vec();
    shr_bits(&mut rem, shift_bits);
    rem.truncate(count_words(&rem));
    quot.truncate(count_words(&quot));
    (quot, rem)
}
