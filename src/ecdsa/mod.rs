//! ECDSA (SEC 1 v2 §4.1)
//!
//! Sign, verify and public-key recovery over any validated [`Curve`].
//!
//! Signing and recovery fail with an [`EcError`] on malformed input; a
//! signature is never produced for invalid inputs. Verification returns a
//! plain `bool` and turns every internal failure into `false`.

pub mod rfc6979;

use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::Digest;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::curve::{Curve, Point};
use crate::error::EcError;
use crate::field::U576;

pub use rfc6979::rfc6979;

/// Abscissas `r + j·n` tried beyond `j = 0` during recovery
const MAX_EXTRA_ABSCISSAS: u64 = 3;

/// ECDSA signature (r, s)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// r component (x-coordinate of R, mod n)
    pub r: U576,
    /// s component
    pub s: U576,
}

impl Signature {
    /// Create from r and s
    pub fn new(r: U576, s: U576) -> Self {
        Signature { r, s }
    }

    /// Fail unless both r and s are in `[1, n-1]`.
    pub fn check(&self, curve: &Curve) -> Result<(), EcError> {
        let n = curve.n();
        for (name, value) in [("r", self.r), ("s", self.s)] {
            if value.is_zero() || value >= n {
                return Err(EcError::OutOfRange {
                    name,
                    value,
                    range: "[1, n-1]",
                });
            }
        }
        Ok(())
    }

    /// Whether `s ≤ n/2`
    pub fn is_low_s(&self, curve: &Curve) -> bool {
        self.s <= curve.n() >> 1_usize
    }

    /// The equivalent signature with `s ≤ n/2`
    pub fn normalize_low_s(&self, curve: &Curve) -> Self {
        if self.is_low_s(curve) {
            *self
        } else {
            Signature {
                r: self.r,
                s: curve.scalars().neg(self.s),
            }
        }
    }
}

/// Where the signing nonce comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nonce {
    /// Caller-supplied k, reduced mod n
    Explicit(U576),
    /// RFC 6979 nonce from the private key and digest
    Deterministic,
}

/// Digest as an integer: its leftmost `bit_length(n)` bits (SEC 1 §4.1.3 step 5).
///
/// Not reduced mod n.
pub fn int_from_bits(curve: &Curve, digest: &[u8]) -> U576 {
    let octets = &digest[..digest.len().min(curve.n_size())];
    let value = U576::from_be_slice(octets);
    let bits = 8 * octets.len();
    if bits > curve.n_bits() {
        value >> (bits - curve.n_bits())
    } else {
        value
    }
}

/// Sign `digest` with `privkey`.
///
/// `D` is the hash behind the digest; it keys the RFC 6979 HMAC when the
/// nonce is [`Nonce::Deterministic`], and the digest must then be exactly
/// one `D` output wide. With [`Nonce::Explicit`] `D` is unused. The returned `s` is not normalized,
/// see [`Signature::normalize_low_s`].
pub fn sign<D>(curve: &Curve, digest: &[u8], privkey: U576, nonce: Nonce) -> Result<Signature, EcError>
where
    D: Digest + BlockSizeUser,
{
    if privkey.is_zero() || privkey >= curve.n() {
        return Err(EcError::OutOfRange {
            name: "private key",
            value: privkey,
            range: "[1, n-1]",
        });
    }

    let k = match nonce {
        Nonce::Explicit(k) => curve.scalars().reduce(k),
        Nonce::Deterministic => rfc6979::<D>(curve, privkey, digest)?,
    };
    let e = curve.scalars().reduce(int_from_bits(curve, digest));

    sign_with_scalar(curve, e, privkey, k)
}

/// `(r, s)` for the reduced digest `e`, private key `d` and nonce `k`
pub(crate) fn sign_with_scalar(curve: &Curve, e: U576, d: U576, k: U576) -> Result<Signature, EcError> {
    let scalars = curve.scalars();

    let r = match curve.mult_generator(k)? {
        Point::Affine { x, .. } => scalars.reduce(x),
        Point::Infinity => return Err(EcError::DegenerateSignature("R is infinity")),
    };
    if r.is_zero() {
        return Err(EcError::DegenerateSignature("r = 0"));
    }

    let k_inv = scalars.inv(k)?;
    let s = scalars.mul(k_inv, scalars.add(e, scalars.mul(r, d)));
    if s.is_zero() {
        return Err(EcError::DegenerateSignature("s = 0"));
    }

    Ok(Signature { r, s })
}

/// Verify `sig` over `digest` against `pubkey`.
///
/// Never fails: malformed signatures, off-curve keys and arithmetic errors
/// all verify as `false`.
pub fn verify(curve: &Curve, sig: &Signature, digest: &[u8], pubkey: &Point) -> bool {
    match verify_digest(curve, sig, digest, pubkey) {
        Ok(valid) => valid,
        Err(err) => {
            debug!(%err, "signature rejected");
            false
        }
    }
}

/// Verification proper (SEC 1 §4.1.4), errors included.
///
/// Given signature (r, s), public key Q, and reduced digest e:
/// 1. w = s⁻¹ mod n
/// 2. u1 = e·w mod n
/// 3. u2 = r·w mod n
/// 4. R = u1·G + u2·Q
/// 5. Accept iff R ≠ ∞ and R.x mod n = r
pub(crate) fn verify_digest(
    curve: &Curve,
    sig: &Signature,
    digest: &[u8],
    pubkey: &Point,
) -> Result<bool, EcError> {
    curve.require_on_curve(pubkey)?;
    if pubkey.is_infinity() {
        return Err(EcError::Arithmetic("public key is the point at infinity"));
    }
    sig.check(curve)?;

    let scalars = curve.scalars();
    let e = scalars.reduce(int_from_bits(curve, digest));
    let w = scalars.inv(sig.s)?;
    let u1 = scalars.mul(e, w);
    let u2 = scalars.mul(sig.r, w);

    match curve.double_mult(u1, curve.g(), u2, pubkey)? {
        Point::Infinity => Ok(false),
        Point::Affine { x, .. } => Ok(scalars.reduce(x) == sig.r),
    }
}

/// Public keys for which `sig` is a valid signature of `digest`
/// (SEC 1 §4.1.6).
///
/// The abscissas `x = r + j·n < p` are tried for `j ≤ min(h, 3)`, so at
/// most four regardless of the cofactor; abscissas without a curve point
/// are skipped. Each R and -R yields one candidate `r⁻¹·(s·R - e·G)`, kept
/// if it is finite, new, and verifies.
pub fn recover_pubkeys(curve: &Curve, sig: &Signature, digest: &[u8]) -> Result<Vec<Point>, EcError> {
    sig.check(curve)?;

    let scalars = curve.scalars();
    let e = scalars.reduce(int_from_bits(curve, digest));
    let r_inv = scalars.inv(sig.r)?;
    let u1 = scalars.mul(r_inv, sig.s);
    let u2 = scalars.neg(scalars.mul(r_inv, e));

    let max_j: u64 = curve.h().min(U576::from(MAX_EXTRA_ABSCISSAS)).to();
    let mut keys: Vec<Point> = Vec::new();
    for j in 0..=max_j {
        let x = sig.r + U576::from(j) * curve.n();
        if x >= curve.p() {
            break;
        }
        match curve.y_odd(x, true) {
            Ok(y) => {
                let r_point = Point::new(x, y);
                let r_opposite = curve.opposite(&r_point)?;
                for candidate in [r_point, r_opposite] {
                    let q = curve.double_mult(u1, &candidate, u2, curve.g())?;
                    if q.is_infinity() || keys.contains(&q) {
                        continue;
                    }
                    if matches!(verify_digest(curve, sig, digest, &q), Ok(true)) {
                        keys.push(q);
                    }
                }
            }
            Err(EcError::NotFound { .. }) => {
                trace!(x = %x, "no curve point for candidate abscissa");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(keys)
}
