//! Deterministic Nonces (RFC 6979)
//!
//! k is derived from the private key and the message digest with
//! HMAC-DRBG, so signing needs no randomness and the same inputs always
//! give the same signature.

use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::Digest;
use hmac::{Mac, SimpleHmac};
use tracing::trace;

use super::int_from_bits;
use crate::curve::Curve;
use crate::error::EcError;
use crate::field::U576;

/// Candidates tried before giving up; each fails with probability < 2^-32
/// on the SEC 2 curves.
const MAX_ATTEMPTS: usize = 256;

/// Deterministic nonce in `[1, n-1]` for `privkey` and the message `digest`
/// (RFC 6979 §3.2), with `D` as the HMAC hash function.
///
/// `digest` must be one `D` output long.
pub fn rfc6979<D>(curve: &Curve, privkey: U576, digest: &[u8]) -> Result<U576, EcError>
where
    D: Digest + BlockSizeUser,
{
    let n = curve.n();
    if privkey.is_zero() || privkey >= n {
        return Err(EcError::OutOfRange {
            name: "private key",
            value: privkey,
            range: "[1, n-1]",
        });
    }

    let hlen = <D as Digest>::output_size();
    if digest.len() != hlen {
        return Err(EcError::DigestLength {
            expected: hlen,
            actual: digest.len(),
        });
    }

    let rlen = curve.n_size();
    let x = int_to_octets(privkey, rlen);
    let h1 = int_to_octets(curve.scalars().reduce(int_from_bits(curve, digest)), rlen);

    let mut v = vec![0x01u8; hlen];
    let mut k = vec![0x00u8; hlen];

    k = hmac::<D>(&k, &[&v, &[0x00], &x, &h1])?;
    v = hmac::<D>(&k, &[&v])?;
    k = hmac::<D>(&k, &[&v, &[0x01], &x, &h1])?;
    v = hmac::<D>(&k, &[&v])?;

    for attempt in 0..MAX_ATTEMPTS {
        let mut t = Vec::with_capacity(rlen + hlen);
        while t.len() < rlen {
            v = hmac::<D>(&k, &[&v])?;
            t.extend_from_slice(&v);
        }

        let nonce = int_from_bits(curve, &t);
        if !nonce.is_zero() && nonce < n {
            return Ok(nonce);
        }

        trace!(attempt, "nonce candidate out of range, retrying");
        k = hmac::<D>(&k, &[&v, &[0x00]])?;
        v = hmac::<D>(&k, &[&v])?;
    }

    Err(EcError::Nonce("no nonce in [1, n-1] after 256 attempts"))
}

fn hmac<D>(key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>, EcError>
where
    D: Digest + BlockSizeUser,
{
    let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key)
        .map_err(|_| EcError::Nonce("invalid HMAC key length"))?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Big-endian encoding of `value` in exactly `len` bytes
fn int_to_octets(value: U576, len: usize) -> Vec<u8> {
    let bytes = value.to_be_bytes_vec();
    bytes[bytes.len() - len..].to_vec()
}
