//! Multiplication and squaring kernels over nonnegative magnitudes.
//!
//! Three layers: a schoolbook kernel for operands at or below the
//! recursion floor, a recursive divide-and-conquer multiplier/squarer
//! built on it, and an asymmetric entry point that chunks a long
//! operand into pieces sized to the short one. Sign is entirely the
//! caller's concern.

use std::cmp::Ordering;

use crate::words::{
    adc, add_assign_words, add_into, compare, count_words, decrement, increment, linear_mul, mac,
    shl_bits, sub_assign_words, sub_into,
};

/// Word count at or below which the recursive algorithms switch to the
/// schoolbook kernel.
pub(crate) const RECURSION_FLOOR: usize = 16;

/// r = a * b by schoolbook accumulation. Operands have equal length n,
/// r has length 2n and is overwritten.
pub(crate) fn baseline_multiply(r: &mut [u16], a: &[u16], b: &[u16]) {
    let n = a.len();
    debug_assert_eq!(b.len(), n);
    debug_assert_eq!(r.len(), 2 * n);
    r.fill(0);
    for i in 0..n {
        let mut carry = 0;
        for j in 0..n {
            let (lo, hi) = mac(a[i], b[j], r[i + j], carry);
            r[i + j] = lo;
            carry = hi;
        }
        r[i + n] = carry;
    }
}

/// r = a * a. Only the upper-triangular cross products are computed,
/// then doubled, then the diagonal squares are folded in.
pub(crate) fn baseline_square(r: &mut [u16], a: &[u16]) {
    let n = a.len();
    debug_assert_eq!(r.len(), 2 * n);
    r.fill(0);
    for i in 0..n {
        let mut carry = 0;
        for j in i + 1..n {
            let (lo, hi) = mac(a[i], a[j], r[i + j], carry);
            r[i + j] = lo;
            carry = hi;
        }
        r[i + n] = carry;
    }
    // 2 * cross < 2^(32n), so no bit falls off the top here
    shl_bits(r, 1);
    let mut carry = 0;
    for i in 0..n {
        let (lo, hi) = mac(a[i], a[i], r[2 * i], carry);
        r[2 * i] = lo;
        let (hi2, cy) = adc(r[2 * i + 1], hi, 0);
        r[2 * i + 1] = hi2;
        carry = cy;
    }
    debug_assert_eq!(carry, 0);
}

/// Adds a small signed correction to a word range, rippling the
/// carry or borrow through it.
fn apply_carry(words: &mut [u16], c: i32) {
    if c > 0 {
        increment(words, c as u16);
    } else if c < 0 {
        decrement(words, (-c) as u16);
    }
}

/// r[..2n] = a * b for equal even lengths n, recursing by halves down
/// to the floor. `t[..2n]` is scratch.
///
/// Instead of the three classic half-products this computes the high
/// product, the low product, and the product of |lo - hi| of each
/// operand, so every recursive call sees same-size nonnegative
/// operands; whether the middle term is added or subtracted depends on
/// which halves were larger.
pub(crate) fn recursive_multiply(r: &mut [u16], t: &mut [u16], a: &[u16], b: &[u16]) {
    let n = a.len();
    debug_assert!(n >= 2 && n % 2 == 0);
    debug_assert_eq!(b.len(), n);
    if n <= RECURSION_FLOOR {
        baseline_multiply(&mut r[..2 * n], a, b);
        return;
    }
    let r = &mut r[..2 * n];
    let t = &mut t[..2 * n];
    let half = n / 2;
    let (a_lo, a_hi) = a.split_at(half);
    let (b_lo, b_hi) = b.split_at(half);

    // balanced differences into r: r[..half] = |a_lo - a_hi|,
    // r[half..n] = |b_lo - b_hi|, remembering which half was larger
    let a_flip = compare(a_lo, a_hi) != Ordering::Greater;
    {
        let (x, y) = if a_flip { (a_hi, a_lo) } else { (a_lo, a_hi) };
        sub_into(&mut r[..half], x, y);
    }
    let b_flip = compare(b_lo, b_hi) != Ordering::Greater;
    {
        let (x, y) = if b_flip { (b_hi, b_lo) } else { (b_lo, b_hi) };
        sub_into(&mut r[half..n], x, y);
    }

    // high product into r[n..], balanced product into t[..n] (consuming
    // the differences), low product into r[..n]
    {
        let (_, r_hi) = r.split_at_mut(n);
        let (_, t_hi) = t.split_at_mut(n);
        recursive_multiply(r_hi, t_hi, a_hi, b_hi);
    }
    {
        let (t_lo, t_hi) = t.split_at_mut(n);
        let (d_a, d_rest) = r.split_at(half);
        recursive_multiply(t_lo, t_hi, d_a, &d_rest[..half]);
    }
    {
        let (r_lo, _) = r.split_at_mut(n);
        let (_, t_hi) = t.split_at_mut(n);
        recursive_multiply(r_lo, t_hi, a_lo, b_lo);
    }

    // splice the cross term between the low and high products
    let mut c2;
    let mut c3;
    {
        let (left, right) = r.split_at_mut(n);
        c2 = add_assign_words(&mut right[..half], &left[half..]) as i32;
        c3 = c2;
    }
    {
        let (left, right) = r.split_at_mut(n);
        let (low, mid) = left.split_at_mut(half);
        c2 += add_into(mid, &right[..half], low) as i32;
    }
    {
        let (_, right) = r.split_at_mut(n);
        let (rh_lo, rh_hi) = right.split_at_mut(half);
        c3 += add_assign_words(rh_lo, &rh_hi[..half]) as i32;
    }
    if a_flip == b_flip {
        c3 -= sub_assign_words(&mut r[half..half + n], &t[..n]) as i32;
    } else {
        c3 += add_assign_words(&mut r[half..half + n], &t[..n]) as i32;
    }
    c3 += increment(&mut r[n..n + half], c2 as u16) as i32;
    apply_carry(&mut r[n + half..], c3);
}

/// r[..2n] = a * a; half the cross products of the general multiplier.
/// Falls back to one recursive general multiply for the lo*hi term.
pub(crate) fn recursive_square(r: &mut [u16], t: &mut [u16], a: &[u16]) {
    let n = a.len();
    debug_assert!(n >= 2 && n % 2 == 0);
    if n <= RECURSION_FLOOR {
        baseline_square(&mut r[..2 * n], a);
        return;
    }
    let r = &mut r[..2 * n];
    let t = &mut t[..2 * n];
    let half = n / 2;
    let (a_lo, a_hi) = a.split_at(half);

    {
        let (r_lo, r_hi) = r.split_at_mut(n);
        let (_, t_hi) = t.split_at_mut(n);
        recursive_square(r_lo, t_hi, a_lo);
        recursive_square(r_hi, t_hi, a_hi);
    }
    {
        let (t_lo, t_hi) = t.split_at_mut(n);
        recursive_multiply(t_lo, t_hi, a_lo, a_hi);
    }

    // the cross product counts twice
    let mut carry = add_assign_words(&mut r[half..half + n], &t[..n]) as i32;
    carry += add_assign_words(&mut r[half..half + n], &t[..n]) as i32;
    apply_carry(&mut r[n + half..], carry);
}

/// r[..na+nb] = a * b for operands of possibly different lengths.
///
/// Same-length operands go straight to the recursive multiplier (or the
/// squarer, when both refer to the same words). A short operand that is
/// really a single word short-circuits to zero / copy / linear
/// multiply. Otherwise the longer operand is cut into short-length
/// chunks, products of alternating chunks landing directly in r or in
/// the scratch area of t, and the scratch half is folded back with one
/// overlapped add. Requires the short length to divide the long one.
pub(crate) fn asymmetric_multiply(r: &mut [u16], t: &mut [u16], a: &[u16], b: &[u16]) {
    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };
    let (na, nb) = (a.len(), b.len());
    debug_assert!(r.len() >= na + nb && t.len() >= na + nb);

    if na == nb {
        if std::ptr::eq(a.as_ptr(), b.as_ptr()) {
            recursive_square(r, t, a);
        } else {
            recursive_multiply(r, t, a, b);
        }
        return;
    }
    debug_assert!(nb % na == 0);

    if count_words(a) <= 1 {
        let r = &mut r[..na + nb];
        match a.first().copied().unwrap_or(0) {
            0 => r.fill(0),
            1 => {
                r[..nb].copy_from_slice(b);
                r[nb..].fill(0);
            }
            w => {
                let overflow = linear_mul(&mut r[..nb], b, w);
                r[nb..].fill(0);
                r[nb] = overflow;
            }
        }
        return;
    }

    let r = &mut r[..na + nb];
    let t = &mut t[..na + nb];
    if (nb / na) % 2 == 0 {
        // first chunk lands in r; its high half is parked in scratch so
        // the overlapping second chunk can be written over it
        {
            let (t_sc, _) = t.split_at_mut(2 * na);
            recursive_multiply(r, t_sc, a, &b[..na]);
        }
        t[2 * na..3 * na].copy_from_slice(&r[na..2 * na]);
        let mut i = 2 * na;
        while i < nb {
            let (t_sc, t_out) = t.split_at_mut(2 * na);
            recursive_multiply(&mut t_out[i - na..i + na], t_sc, a, &b[i..i + na]);
            i += 2 * na;
        }
        let mut i = na;
        while i < nb {
            let (t_sc, _) = t.split_at_mut(2 * na);
            recursive_multiply(&mut r[i..i + 2 * na], t_sc, a, &b[i..i + na]);
            i += 2 * na;
        }
    } else {
        let mut i = 0;
        while i < nb {
            let (t_sc, _) = t.split_at_mut(2 * na);
            recursive_multiply(&mut r[i..i + 2 * na], t_sc, a, &b[i..i + na]);
            i += 2 * na;
        }
        let mut i = na;
        while i < nb {
            let (t_sc, t_out) = t.split_at_mut(2 * na);
            recursive_multiply(&mut t_out[i - na..i + na], t_sc, a, &b[i..i + na]);
            i += 2 * na;
        }
    }

    // fold the scratch-resident halves back in
    if add_assign_words(&mut r[na..nb], &t[2 * na..na + nb]) != 0 {
        increment(&mut r[nb..], 1);
    }
}
