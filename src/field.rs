//! Prime Field Arithmetic
//!
//! Modular inverse, square root and Legendre symbol over a prime field, plus
//! the integer helpers used by curve validation.
//!
//! Every value is a 576-bit unsigned integer. That is wide enough for the
//! largest SEC 2 curve (secp521r1) and for the `1 + δ + p` sums computed
//! while validating parameters; products are reduced by `ruint` without
//! ever overflowing the representation.

use ruint::{uint, Uint};

use crate::error::EcError;

/// 576-bit unsigned integer used for field elements, scalars and coordinates
pub type U576 = Uint<576, 9>;

uint! {
    pub(crate) const ZERO: U576 = 0_U576;
    pub(crate) const ONE: U576 = 1_U576;
    pub(crate) const TWO: U576 = 2_U576;
    pub(crate) const THREE: U576 = 3_U576;
    pub(crate) const FOUR: U576 = 4_U576;
}

/// Arithmetic modulo a fixed odd prime.
///
/// Inputs need not be reduced; outputs always lie in `[0, modulus)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: U576,
}

impl PrimeField {
    /// Field of integers modulo `modulus`
    pub fn new(modulus: U576) -> Self {
        PrimeField { modulus }
    }

    /// The field modulus
    pub fn modulus(&self) -> U576 {
        self.modulus
    }

    /// `a mod m`
    pub fn reduce(&self, a: U576) -> U576 {
        a.reduce_mod(self.modulus)
    }

    /// `a + b`
    pub fn add(&self, a: U576, b: U576) -> U576 {
        a.add_mod(b, self.modulus)
    }

    /// `a - b`
    pub fn sub(&self, a: U576, b: U576) -> U576 {
        a.add_mod(self.neg(b), self.modulus)
    }

    /// `-a`
    pub fn neg(&self, a: U576) -> U576 {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            self.modulus - a
        }
    }

    /// `a · b`
    pub fn mul(&self, a: U576, b: U576) -> U576 {
        a.mul_mod(b, self.modulus)
    }

    /// `a²`
    pub fn square(&self, a: U576) -> U576 {
        a.mul_mod(a, self.modulus)
    }

    /// `a^e`
    pub fn pow(&self, a: U576, e: U576) -> U576 {
        a.pow_mod(e, self.modulus)
    }

    /// `a⁻¹`
    pub fn inv(&self, a: U576) -> Result<U576, EcError> {
        mod_inv(a, self.modulus)
    }

    /// A square root of `a`
    pub fn sqrt(&self, a: U576) -> Result<U576, EcError> {
        mod_sqrt(a, self.modulus)
    }

    /// Legendre symbol `(a | m)`
    pub fn legendre(&self, a: U576) -> i8 {
        legendre_symbol(a, self.modulus)
    }

    /// Whether `m ≡ 3 (mod 4)`
    pub fn is_three_mod_four(&self) -> bool {
        self.modulus.reduce_mod(FOUR) == THREE
    }
}

/// Return the inverse of `a` modulo `m`.
///
/// `m` does not have to be prime; fails when `gcd(a, m) ≠ 1`.
pub fn mod_inv(a: U576, m: U576) -> Result<U576, EcError> {
    let not_invertible = EcError::NotInvertible { value: a, modulus: m };
    if m.is_zero() {
        return Err(not_invertible);
    }
    let a = a.reduce_mod(m);
    if a.is_zero() {
        return Err(not_invertible);
    }
    a.inv_mod(m).ok_or(not_invertible)
}

/// Return a square root of `a` modulo the odd prime `p`.
///
/// `p - root` is the other one. Uses `a^((p+1)/4)` when `p ≡ 3 (mod 4)`
/// and Tonelli-Shanks otherwise; fails when `a` is a non-residue.
pub fn mod_sqrt(a: U576, p: U576) -> Result<U576, EcError> {
    let a = a.reduce_mod(p);
    let non_residue = EcError::NonResidue { value: a, modulus: p };

    if p.reduce_mod(FOUR) == THREE {
        let x = a.pow_mod((p + ONE) >> 2_usize, p);
        return if x.mul_mod(x, p) == a {
            Ok(x)
        } else {
            Err(non_residue)
        };
    }
    if a.is_zero() || p == TWO {
        return Ok(a);
    }
    if legendre_symbol(a, p) != 1 {
        return Err(non_residue);
    }

    // p - 1 = s · 2^e with s odd
    let mut s = p - ONE;
    let mut e = 0usize;
    while !s.bit(0) {
        s = s >> 1_usize;
        e += 1;
    }

    // any non-residue works as the generator of the 2-Sylow subgroup
    let mut z = TWO;
    while legendre_symbol(z, p) != -1 {
        z += ONE;
        if z >= p {
            return Err(EcError::Arithmetic("no quadratic non-residue, modulus is not prime"));
        }
    }

    // invariant: x² = a·b (mod p)
    let mut x = a.pow_mod((s + ONE) >> 1_usize, p);
    let mut b = a.pow_mod(s, p);
    let mut g = z.pow_mod(s, p);
    let mut r = e;

    loop {
        let mut t = b;
        let mut m = 0usize;
        while m < r && t != ONE {
            t = t.mul_mod(t, p);
            m += 1;
        }
        if m == 0 {
            return Ok(x);
        }
        if m == r {
            // b has no square root in the 2-Sylow subgroup
            return Err(non_residue);
        }

        let mut gs = g;
        for _ in 0..(r - m - 1) {
            gs = gs.mul_mod(gs, p);
        }
        g = gs.mul_mod(gs, p);
        x = x.mul_mod(gs, p);
        b = b.mul_mod(g, p);
        r = m;
    }
}

/// Legendre symbol `(a | p)` by Euler's criterion: 1, -1, or 0 when `p | a`.
pub fn legendre_symbol(a: U576, p: U576) -> i8 {
    let ls = a.reduce_mod(p).pow_mod((p - ONE) >> 1_usize, p);
    if ls.is_zero() {
        0
    } else if ls == ONE {
        1
    } else {
        -1
    }
}

/// `floor(√n)` by Newton iteration.
pub fn isqrt(n: U576) -> U576 {
    if n.is_zero() {
        return n;
    }
    let mut x = n;
    let mut y = (x + ONE) >> 1_usize;
    while y < x {
        x = y;
        y = (x + n / x) >> 1_usize;
    }
    x
}

/// Fermat base-2 test: `2^(n-1) ≡ 1 (mod n)`, with `n = 2` accepted.
///
/// Probabilistic: Fermat pseudoprimes pass. Good enough for parameter sanity
/// checks, not a primality proof.
pub fn is_probable_prime(n: U576) -> bool {
    if n < TWO {
        return false;
    }
    if n == TWO {
        return true;
    }
    TWO.pow_mod(n - ONE, n) == ONE
}
