//! Weierstrass ECDSA: Elliptic Curve Group Engine and SEC 1 Signatures
//!
//! This library implements arithmetic on short-Weierstrass curves
//!
//! ```text
//! y² = x³ + a·x + b  (mod p)
//! ```
//!
//! over arbitrary prime fields up to 521 bits, and the ECDSA sign / verify /
//! public-key recovery operations of SEC 1 on top of it.
//!
//! ## Architecture
//!
//! 1. **Field**: modular inverse, square root, Legendre symbol
//! 2. **Curve**: validated domain parameters, affine and Jacobian point
//!    arithmetic, scalar multiplication, y-coordinate recovery
//! 3. **ECDSA**: sign, verify, recover, with RFC 6979 deterministic nonces
//!
//! A [`Curve`] is validated once at construction and never changes; every
//! operation takes it explicitly.
//!
//! ## Usage
//!
//! ```no_run
//! use sha2::{Digest, Sha256};
//! use weierstrass_ecdsa::{ecdsa, secp256k1, Nonce, U576};
//!
//! let ec = secp256k1();
//! let privkey = U576::from(0xc0ffee_u64);
//! let pubkey = ec.mult_generator(privkey).unwrap();
//!
//! let digest = Sha256::digest(b"hello");
//! let sig = ecdsa::sign::<Sha256>(ec, &digest, privkey, Nonce::Deterministic).unwrap();
//! assert!(ecdsa::verify(ec, &sig, &digest, &pubkey));
//! assert!(ecdsa::recover_pubkeys(ec, &sig, &digest).unwrap().contains(&pubkey));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod curve;
pub mod ecdsa;
pub mod error;
pub mod field;


// Re-exports for convenience
pub use curve::params::{self, CurveParams, NAMED_CURVES};
pub use curve::{secp256k1, Curve, Point};
pub use ecdsa::{recover_pubkeys, sign, verify, Nonce, Signature};
pub use error::{EcError, ValidationError};
pub use field::{legendre_symbol, mod_inv, mod_sqrt, PrimeField, U576};
