//! Short-Weierstrass Curves
//!
//! Elliptic curve y² = x³ + a·x + b over GF(p), with a prime-order subgroup
//! generated by G.
//!
//! A [`Curve`] is validated exhaustively when it is built and is immutable
//! afterwards, so one instance can be shared read-only by any number of
//! callers. Points carry no reference to the curve they belong to; every
//! operation takes the curve explicitly.

mod arith;
pub mod params;
pub mod point;
mod scalar_mul;

use std::fmt;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::error::{EcError, ValidationError};
use crate::field::{is_probable_prime, isqrt, PrimeField, FOUR, ONE, TWO, U576};

pub use params::CurveParams;
pub use point::Point;

/// Security levels accepted for `sec_bits` (0 disables the check)
pub const ALLOWED_SEC_BITS: &[u32] = &[56, 64, 80, 96, 112, 128, 160, 192, 256];

/// Upper bound (exclusive) of the embedding degrees rejected by the weak-curve screen
const WEAKNESS_DEGREE_BOUND: u32 = 100;

/// Validated elliptic curve domain parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    /// arithmetic mod p
    field: PrimeField,
    /// arithmetic mod n
    scalars: PrimeField,
    a: U576,
    b: U576,
    g: Point,
    h: U576,
    sec_bits: u32,
    p_size: usize,
    n_bits: usize,
    n_size: usize,
}

impl Curve {
    /// Build a curve, checking the parameters as in SEC 1 v2 §3.1.1.2.1.
    ///
    /// Fails with [`EcError::Validation`] naming the first violated property,
    /// or with [`EcError::WeakCurve`] when `weakness_check` is set and the
    /// embedding degree is below 100.
    pub fn new(params: &CurveParams) -> Result<Self, EcError> {
        let CurveParams {
            p,
            a,
            b,
            g: (gx, gy),
            n,
            h,
            sec_bits,
            weakness_check,
        } = *params;

        // p is an odd prime
        if !p.bit(0) {
            return Err(ValidationError::FieldPrimeNotOdd { p }.into());
        }
        if !is_probable_prime(p) {
            return Err(ValidationError::FieldPrimeNotPrime { p }.into());
        }

        // p has enough bits for the claimed security level
        let p_bits = p.bit_len();
        if sec_bits != 0 {
            if !ALLOWED_SEC_BITS.contains(&sec_bits) {
                return Err(ValidationError::SecurityBitsNotAllowed {
                    sec_bits,
                    allowed: ALLOWED_SEC_BITS,
                }
                .into());
            }
            if p_bits < 2 * sec_bits as usize {
                return Err(ValidationError::NotEnoughFieldBits { p_bits, sec_bits }.into());
            }
        }

        // a, b in [0, p-1] and 4a³ + 27b² ≠ 0
        if a >= p {
            return Err(ValidationError::CoefficientOutOfRange { name: "a", value: a }.into());
        }
        if b >= p {
            return Err(ValidationError::CoefficientOutOfRange { name: "b", value: b }.into());
        }
        let field = PrimeField::new(p);
        let a3 = field.mul(field.square(a), a);
        let discriminant = field.add(
            field.mul(FOUR, a3),
            field.mul(U576::from(27u64), field.square(b)),
        );
        if discriminant.is_zero() {
            return Err(ValidationError::ZeroDiscriminant.into());
        }

        let curve = Curve {
            field,
            scalars: PrimeField::new(n),
            a,
            b,
            g: Point::new(gx, gy),
            h,
            sec_bits,
            p_size: (p_bits + 7) / 8,
            n_bits: n.bit_len(),
            n_size: (n.bit_len() + 7) / 8,
        };

        // G satisfies the curve equation
        if !curve.is_on_curve(&curve.g) {
            return Err(ValidationError::GeneratorNotOnCurve.into());
        }

        // n is prime and, without a cofactor, inside the Hasse interval
        if !is_probable_prime(n) {
            return Err(ValidationError::OrderNotPrime { n }.into());
        }
        let four_p = p
            .checked_mul(FOUR)
            .ok_or(EcError::Arithmetic("field prime too large"))?;
        let delta = isqrt(four_p);
        if h < TWO && (n < p + ONE - delta || n > p + ONE + delta) {
            return Err(ValidationError::OrderOutsideHasseInterval { n }.into());
        }

        // h = #E / n, bounded for the security level
        let expected = (ONE + delta + p) / n;
        if h != expected {
            return Err(ValidationError::CofactorMismatch { h, expected }.into());
        }
        if sec_bits != 0 && h > ONE << (sec_bits / 8) as usize {
            return Err(ValidationError::CofactorTooLarge { h, sec_bits }.into());
        }

        // n·G = Infinity; mult(n, G) would reduce n to zero, so add G to (n-1)·G
        let inf_minus_g = curve.mult(n - ONE, &curve.g)?;
        if !curve.add(&inf_minus_g, &curve.g)?.is_infinity() {
            return Err(ValidationError::NotGroupOrder { n }.into());
        }

        if n == p {
            return Err(ValidationError::OrderEqualsFieldPrime { n }.into());
        }

        // p^i ≢ 1 (mod n) for 1 ≤ i < 100
        if weakness_check {
            let mut power = ONE;
            for i in 1..WEAKNESS_DEGREE_BOUND {
                power = power.mul_mod(p, n);
                if power == ONE {
                    warn!(embedding_degree = i, "rejecting weak curve");
                    return Err(EcError::WeakCurve { embedding_degree: i });
                }
            }
        }

        debug!(
            p_bits,
            n_bits = curve.n_bits,
            h = %h,
            sec_bits,
            "validated curve parameters"
        );
        Ok(curve)
    }

    /// Field prime p
    pub fn p(&self) -> U576 {
        self.field.modulus()
    }

    /// Coefficient a
    pub fn a(&self) -> U576 {
        self.a
    }

    /// Coefficient b
    pub fn b(&self) -> U576 {
        self.b
    }

    /// Generator G
    pub fn g(&self) -> &Point {
        &self.g
    }

    /// Order n of G
    pub fn n(&self) -> U576 {
        self.scalars.modulus()
    }

    /// Cofactor h
    pub fn h(&self) -> U576 {
        self.h
    }

    /// Claimed security level in bits, 0 if unchecked
    pub fn sec_bits(&self) -> u32 {
        self.sec_bits
    }

    /// Byte length of p
    pub fn p_size(&self) -> usize {
        self.p_size
    }

    /// Bit length of n
    pub fn n_bits(&self) -> usize {
        self.n_bits
    }

    /// Byte length of n
    pub fn n_size(&self) -> usize {
        self.n_size
    }

    /// Whether p ≡ 3 (mod 4)
    pub fn p_is_three_mod_four(&self) -> bool {
        self.field.is_three_mod_four()
    }

    /// Arithmetic mod p
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Arithmetic mod n
    pub fn scalars(&self) -> &PrimeField {
        &self.scalars
    }

    /// The parameters this curve was built from, with the weak-curve screen on.
    pub fn params(&self) -> CurveParams {
        let (gx, gy) = self.generator_coords();
        CurveParams {
            p: self.p(),
            a: self.a,
            b: self.b,
            g: (gx, gy),
            n: self.n(),
            h: self.h,
            sec_bits: self.sec_bits,
            weakness_check: true,
        }
    }

    fn generator_coords(&self) -> (U576, U576) {
        match self.g {
            Point::Affine { x, y } => (x, y),
            // construction rejects an infinite generator
            Point::Infinity => (U576::ZERO, U576::ZERO),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (gx, gy) = self.generator_coords();
        writeln!(f, "Curve")?;
        writeln!(f, " p   = 0x{:X}", self.p())?;
        writeln!(f, " a   = 0x{:X}", self.a)?;
        writeln!(f, " b   = 0x{:X}", self.b)?;
        writeln!(f, " x_G = 0x{:X}", gx)?;
        writeln!(f, " y_G = 0x{:X}", gy)?;
        writeln!(f, " n   = 0x{:X}", self.n())?;
        writeln!(f, " h = {}", self.h)?;
        write!(f, " sec_bits = {}", self.sec_bits)
    }
}

static SECP256K1_CURVE: LazyLock<Curve> = LazyLock::new(|| {
    Curve::new(&params::SECP256K1).expect("secp256k1 parameters are valid")
});

/// The validated secp256k1 curve, built on first use.
pub fn secp256k1() -> &'static Curve {
    &SECP256K1_CURVE
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruint::uint;

    fn u(v: u64) -> U576 {
        U576::from(v)
    }

    fn small(p: u64, a: u64, b: u64, g: (u64, u64), n: u64, h: u64) -> CurveParams {
        CurveParams {
            p: u(p),
            a: u(a),
            b: u(b),
            g: (u(g.0), u(g.1)),
            n: u(n),
            h: u(h),
            sec_bits: 0,
            weakness_check: false,
        }
    }

    fn validation_err(params: &CurveParams) -> ValidationError {
        match Curve::new(params) {
            Err(EcError::Validation(err)) => err,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_small_curve_accepted() {
        let ec = Curve::new(&small(11, 2, 7, (6, 9), 7, 2)).unwrap();
        assert_eq!(ec.p(), u(11));
        assert_eq!(ec.n(), u(7));
        assert_eq!(ec.h(), u(2));
        assert_eq!(ec.p_size(), 1);
        assert_eq!(ec.n_size(), 1);
        assert_eq!(ec.n_bits(), 3);
        assert!(ec.p_is_three_mod_four());
    }

    #[test]
    fn test_field_prime_checks() {
        let mut params = small(11, 2, 7, (6, 9), 7, 2);
        params.p = u(10);
        assert!(matches!(validation_err(&params), ValidationError::FieldPrimeNotOdd { .. }));
        params.p = u(15);
        assert!(matches!(validation_err(&params), ValidationError::FieldPrimeNotPrime { .. }));
    }

    #[test]
    fn test_security_bits_checks() {
        let mut params = params::SECP112R1;
        params.sec_bits = 273;
        assert!(matches!(
            validation_err(&params),
            ValidationError::SecurityBitsNotAllowed { sec_bits: 273, .. }
        ));

        let mut params = params::SECP160R1;
        params.sec_bits = 160;
        assert_eq!(
            validation_err(&params),
            ValidationError::NotEnoughFieldBits {
                p_bits: 160,
                sec_bits: 160
            }
        );
    }

    #[test]
    fn test_coefficient_checks() {
        let mut params = small(11, 12, 7, (6, 9), 7, 2);
        assert!(matches!(
            validation_err(&params),
            ValidationError::CoefficientOutOfRange { name: "a", .. }
        ));
        params.a = u(2);
        params.b = u(12);
        assert!(matches!(
            validation_err(&params),
            ValidationError::CoefficientOutOfRange { name: "b", .. }
        ));
        // 4·7³ + 27·7² = 2695 = 245 · 11
        assert_eq!(
            validation_err(&small(11, 7, 7, (6, 9), 7, 2)),
            ValidationError::ZeroDiscriminant
        );
    }

    #[test]
    fn test_generator_check() {
        assert_eq!(
            validation_err(&small(11, 2, 7, (7, 9), 7, 2)),
            ValidationError::GeneratorNotOnCurve
        );
    }

    #[test]
    fn test_order_checks() {
        assert!(matches!(
            validation_err(&small(11, 2, 7, (6, 9), 8, 2)),
            ValidationError::OrderNotPrime { .. }
        ));
        assert!(matches!(
            validation_err(&small(11, 2, 7, (6, 9), 71, 1)),
            ValidationError::OrderOutsideHasseInterval { .. }
        ));
        assert_eq!(
            validation_err(&small(11, 2, 7, (6, 9), 7, 1)),
            ValidationError::CofactorMismatch { h: u(1), expected: u(2) }
        );
        assert!(matches!(
            validation_err(&small(11, 2, 7, (6, 9), 13, 1)),
            ValidationError::NotGroupOrder { .. }
        ));
    }

    #[test]
    fn test_anomalous_curve_rejected() {
        // #E = 11 = p
        let mut params = small(11, 1, 5, (0, 4), 11, 1);
        params.weakness_check = true;
        assert_eq!(
            validation_err(&params),
            ValidationError::OrderEqualsFieldPrime { n: u(11) }
        );
    }

    #[test]
    fn test_cofactor_bound() {
        // y² = x³ + 7 over p ≡ 11 (mod 12) is supersingular: #E = p + 1 = 768·n
        let mut params = CurveParams {
            p: uint!(0xa7377aabe3108c90b8cb5853e7c4ff_U576),
            a: U576::ZERO,
            b: u(7),
            g: (
                uint!(0x928770c3cb44c27ad7494e90a01f32_U576),
                uint!(0x77d7bf56c4be3a8529ccf288703dcd_U576),
            ),
            n: uint!(0x37bd28e3f65ad98592ee72c6a297_U576),
            h: u(768),
            sec_bits: 0,
            weakness_check: false,
        };
        Curve::new(&params).unwrap();

        // 768 > 2^(56/8)
        params.sec_bits = 56;
        assert_eq!(
            validation_err(&params),
            ValidationError::CofactorTooLarge { h: u(768), sec_bits: 56 }
        );
    }

    #[test]
    fn test_weak_curve_rejected() {
        let mut params = small(11, 2, 7, (6, 9), 7, 2);
        params.weakness_check = true;
        // 11 ≡ 4 (mod 7) has order 3
        assert_eq!(
            Curve::new(&params),
            Err(EcError::WeakCurve { embedding_degree: 3 })
        );
    }

    #[test]
    fn test_non_weak_small_curves() {
        for (p, a, b, g, n) in [(263, 5, 3, (0, 23), 283), (271, 5, 2, (0, 175), 269)] {
            let mut params = small(p, a, b, g, n, 1);
            params.weakness_check = true;
            Curve::new(&params).unwrap();
        }
    }

    #[test]
    fn test_secp256k1_perturbed() {
        let ec = secp256k1();
        assert_eq!(ec.params(), params::SECP256K1);

        let mut params = params::SECP256K1;
        params.a += ONE;
        assert_eq!(validation_err(&params), ValidationError::GeneratorNotOnCurve);

        // a prime just below p + 1 - δ
        let mut params = params::SECP256K1;
        params.n = uint!(
            0xfffffffffffffffffffffffffffffffdfffffffffffffffffffffffefffffb71_U576
        );
        assert!(is_probable_prime(params.n));
        assert!(matches!(
            validation_err(&params),
            ValidationError::OrderOutsideHasseInterval { .. }
        ));
    }

    #[test]
    fn test_display() {
        let ec = Curve::new(&small(11, 2, 7, (6, 9), 7, 2)).unwrap();
        let expected = "Curve\n p   = 0xB\n a   = 0x2\n b   = 0x7\n x_G = 0x6\n y_G = 0x9\n n   = 0x7\n h = 2\n sec_bits = 0";
        assert_eq!(ec.to_string(), expected);
    }
}
