//! Error Types
//!
//! Construction and signing fail fast with one of these; verification never
//! surfaces them (see [`crate::ecdsa::verify`]).

use thiserror::Error;

use crate::field::U576;

/// A curve parameter violated one of the construction checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// p is even
    #[error("p (0x{p:x}) is not odd")]
    FieldPrimeNotOdd {
        /// field modulus
        p: U576,
    },
    /// p fails the Fermat test
    #[error("p (0x{p:x}) is not prime")]
    FieldPrimeNotPrime {
        /// field modulus
        p: U576,
    },
    /// sec_bits is not one of the standard levels
    #[error("required security bits ({sec_bits}) not in the allowed range {allowed:?}")]
    SecurityBitsNotAllowed {
        /// requested level
        sec_bits: u32,
        /// accepted levels
        allowed: &'static [u32],
    },
    /// p is too small for the claimed security level
    #[error("not enough bits in the field prime ({p_bits}) for required security bits {sec_bits}")]
    NotEnoughFieldBits {
        /// bit length of p
        p_bits: usize,
        /// requested level
        sec_bits: u32,
    },
    /// a or b is not in [0, p-1]
    #[error("invalid {name} (0x{value:x}) for given p")]
    CoefficientOutOfRange {
        /// "a" or "b"
        name: &'static str,
        /// offending coefficient
        value: U576,
    },
    /// 4a³ + 27b² ≡ 0 (mod p)
    #[error("zero discriminant")]
    ZeroDiscriminant,
    /// G is infinity or fails the curve equation
    #[error("generator is not on the 'x^3 + a*x + b' curve")]
    GeneratorNotOnCurve,
    /// n fails the primality test
    #[error("n (0x{n:x}) is not prime")]
    OrderNotPrime {
        /// claimed order
        n: U576,
    },
    /// n is outside [p + 1 - δ, p + 1 + δ]
    #[error("n (0x{n:x}) not in [p + 1 - delta, p + 1 + delta]")]
    OrderOutsideHasseInterval {
        /// claimed order
        n: U576,
    },
    /// h differs from (1 + δ + p) / n
    #[error("h (0x{h:x}) not as expected (0x{expected:x})")]
    CofactorMismatch {
        /// claimed cofactor
        h: U576,
        /// cofactor implied by p and n
        expected: U576,
    },
    /// h > 2^(sec_bits/8)
    #[error("h (0x{h:x}) too big for security bits ({sec_bits})")]
    CofactorTooLarge {
        /// claimed cofactor
        h: U576,
        /// requested level
        sec_bits: u32,
    },
    /// (n-1)·G + G is not infinity
    #[error("n (0x{n:x}) is not the group order")]
    NotGroupOrder {
        /// claimed order
        n: U576,
    },
    /// n = p (anomalous curve)
    #[error("n = p (0x{n:x}): weak curve")]
    OrderEqualsFieldPrime {
        /// claimed order
        n: U576,
    },
}

/// Errors raised by curve arithmetic and ECDSA.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcError {
    /// Malformed or insecure curve parameters
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Small embedding degree: p^k ≡ 1 (mod n) for some k < 100
    #[error("weak curve: p^{embedding_degree} = 1 (mod n)")]
    WeakCurve {
        /// smallest k with p^k ≡ 1 (mod n)
        embedding_degree: u32,
    },

    /// A point failed the curve equation
    #[error("point not on curve")]
    PointNotOnCurve,

    /// gcd(value, modulus) ≠ 1
    #[error("0x{value:x} has no inverse modulo 0x{modulus:x}")]
    NotInvertible {
        /// element to invert
        value: U576,
        /// modulus
        modulus: U576,
    },

    /// value has no square root modulo a prime
    #[error("no root (mod 0x{modulus:x}) exists for 0x{value:x}")]
    NonResidue {
        /// element without a root
        value: U576,
        /// modulus
        modulus: U576,
    },

    /// Any other arithmetic precondition failure
    #[error("{0}")]
    Arithmetic(&'static str),

    /// A scalar or coordinate is outside its interval
    #[error("{name} (0x{value:x}) not in {range}")]
    OutOfRange {
        /// what was checked
        name: &'static str,
        /// offending value
        value: U576,
        /// accepted interval
        range: &'static str,
    },

    /// No curve point has the requested x-coordinate
    #[error("no curve point has x-coordinate 0x{x:x}")]
    NotFound {
        /// requested abscissa
        x: U576,
    },

    /// Digest width differs from the output size of the nonce hash
    #[error("digest is {actual} bytes, expected {expected}")]
    DigestLength {
        /// output size of the hash
        expected: usize,
        /// length of the digest given
        actual: usize,
    },

    /// k, r or s collapsed to zero while signing
    #[error("{0}, failed to sign")]
    DegenerateSignature(&'static str),

    /// The deterministic nonce could not be derived
    #[error("nonce derivation failed: {0}")]
    Nonce(&'static str),
}
