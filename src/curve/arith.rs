//! Point Arithmetic
//!
//! Affine group law, the Jacobian formulas used by scalar multiplication,
//! and recovery of y from x with the three root-selection policies.

use super::point::{JacobianPoint, Point};
use super::Curve;
use crate::error::EcError;
use crate::field::{THREE, U576};

impl Curve {
    /// `x³ + a·x + b mod p`
    fn y2(&self, x: U576) -> U576 {
        let f = &self.field;
        f.add(f.mul(f.add(f.square(x), self.a), x), self.b)
    }

    /// Check the curve equation. Infinity is always on the curve.
    ///
    /// Coordinates must be reduced, i.e. in `[0, p-1]`.
    pub fn is_on_curve(&self, q: &Point) -> bool {
        match q {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let p = self.p();
                *x < p && *y < p && self.y2(*x) == self.field.square(*y)
            }
        }
    }

    /// Fail with [`EcError::PointNotOnCurve`] unless `q` is on the curve.
    pub fn require_on_curve(&self, q: &Point) -> Result<(), EcError> {
        if self.is_on_curve(q) {
            Ok(())
        } else {
            Err(EcError::PointNotOnCurve)
        }
    }

    /// `-Q`
    pub fn opposite(&self, q: &Point) -> Result<Point, EcError> {
        self.require_on_curve(q)?;
        Ok(self.negate(q))
    }

    fn negate(&self, q: &Point) -> Point {
        match q {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::new(*x, self.field.neg(*y)),
        }
    }

    /// `Q + R` in affine coordinates
    pub fn add(&self, q: &Point, r: &Point) -> Result<Point, EcError> {
        self.require_on_curve(q)?;
        self.require_on_curve(r)?;
        self.add_affine(q, r)
    }

    /// `2·Q`
    pub fn double(&self, q: &Point) -> Result<Point, EcError> {
        self.require_on_curve(q)?;
        self.add_affine(q, q)
    }

    pub(crate) fn add_affine(&self, q: &Point, r: &Point) -> Result<Point, EcError> {
        let (xq, yq, xr, yr) = match (q, r) {
            (Point::Infinity, _) => return Ok(r.clone()),
            (_, Point::Infinity) => return Ok(q.clone()),
            (Point::Affine { x: xq, y: yq }, Point::Affine { x: xr, y: yr }) => (*xq, *yq, *xr, *yr),
        };
        let f = &self.field;

        let lambda = if xq == xr {
            // also catches doubling a point with y = 0
            if yq == f.neg(yr) {
                return Ok(Point::Infinity);
            }
            let num = f.add(f.mul(THREE, f.square(xq)), self.a);
            f.mul(num, f.inv(f.add(yq, yq))?)
        } else {
            f.mul(f.sub(yr, yq), f.inv(f.sub(xr, xq))?)
        };

        let x = f.sub(f.sub(f.square(lambda), xq), xr);
        let y = f.sub(f.mul(lambda, f.sub(xq, x)), yq);
        Ok(Point::new(x, y))
    }

    /// Jacobian doubling
    ///
    /// W = 3X² + aZ⁴, V = 4XY²,
    /// X' = W² - 2V, Y' = W(V - X') - 8Y⁴, Z' = 2YZ
    pub(crate) fn double_jac(&self, q: &JacobianPoint) -> JacobianPoint {
        if q.is_infinity() || q.y.is_zero() {
            return JacobianPoint::infinity();
        }
        let f = &self.field;

        let y2 = f.square(q.y);
        let z2 = f.square(q.z);
        let w = f.add(f.mul(THREE, f.square(q.x)), f.mul(self.a, f.square(z2)));
        let v = f.mul(f.add(f.add(q.x, q.x), f.add(q.x, q.x)), y2);

        let x = f.sub(f.square(w), f.add(v, v));
        let y4 = f.square(y2);
        let eight_y4 = f.mul(U576::from(8u64), y4);
        let y = f.sub(f.mul(w, f.sub(v, x)), eight_y4);
        let z = f.mul(f.add(q.y, q.y), q.z);

        JacobianPoint { x, y, z }
    }

    /// Jacobian addition
    pub(crate) fn add_jac(&self, q: &JacobianPoint, r: &JacobianPoint) -> JacobianPoint {
        if q.is_infinity() {
            return r.clone();
        }
        if r.is_infinity() {
            return q.clone();
        }
        let f = &self.field;

        let qz2 = f.square(q.z);
        let qz3 = f.mul(qz2, q.z);
        let rz2 = f.square(r.z);
        let rz3 = f.mul(rz2, r.z);

        let m = f.mul(q.x, rz2);
        let n = f.mul(r.x, qz2);
        let t = f.mul(q.y, rz3);
        let u = f.mul(r.y, qz3);

        if m == n {
            return if t == u {
                self.double_jac(q)
            } else {
                JacobianPoint::infinity()
            };
        }

        let w = f.sub(u, t);
        let v = f.sub(n, m);
        let v2 = f.square(v);
        let v3 = f.mul(v2, v);
        let mv2 = f.mul(m, v2);

        let x = f.sub(f.sub(f.square(w), v3), f.add(mv2, mv2));
        let y = f.sub(f.mul(w, f.sub(mv2, x)), f.mul(t, v3));
        let z = f.mul(f.mul(v, q.z), r.z);

        JacobianPoint { x, y, z }
    }

    /// Map `(X, Y, Z)` to `(X/Z², Y/Z³)`; one inversion.
    pub(crate) fn aff_from_jac(&self, q: &JacobianPoint) -> Result<Point, EcError> {
        if q.is_infinity() {
            return Ok(Point::Infinity);
        }
        let f = &self.field;
        let z_inv = f.inv(q.z)?;
        let z_inv2 = f.square(z_inv);
        let x = f.mul(q.x, z_inv2);
        let y = f.mul(q.y, f.mul(z_inv2, z_inv));
        Ok(Point::new(x, y))
    }

    /// A y-coordinate for `x`; the other one is `p - y`.
    ///
    /// Fails with [`EcError::NotFound`] when no curve point has this
    /// x-coordinate.
    pub fn y(&self, x: U576) -> Result<U576, EcError> {
        if x >= self.p() {
            return Err(EcError::OutOfRange {
                name: "x-coordinate",
                value: x,
                range: "[0, p-1]",
            });
        }
        match self.field.sqrt(self.y2(x)) {
            Err(EcError::NonResidue { .. }) => Err(EcError::NotFound { x }),
            other => other,
        }
    }

    /// The odd (`odd = true`) or even y-coordinate for `x`
    pub fn y_odd(&self, x: U576, odd: bool) -> Result<U576, EcError> {
        let root = self.y(x)?;
        Ok(if root.bit(0) == odd {
            root
        } else {
            self.field.neg(root)
        })
    }

    /// The low (`y ≤ p/2`, `low = true`) or high y-coordinate for `x`
    pub fn y_low(&self, x: U576, low: bool) -> Result<U576, EcError> {
        let root = self.y(x)?;
        let half = self.p() >> 1_usize;
        Ok(if (root <= half) == low {
            root
        } else {
            self.field.neg(root)
        })
    }

    /// The y-coordinate for `x` that is (`quad_res = true`) or is not a
    /// quadratic residue. Needs p ≡ 3 (mod 4), where exactly one of `y`,
    /// `p - y` is a residue.
    pub fn y_quadratic_residue(&self, x: U576, quad_res: bool) -> Result<U576, EcError> {
        self.require_p_three_mod_four()?;
        let root = self.y(x)?;
        let is_residue = self.field.legendre(root) == 1;
        Ok(if is_residue == quad_res {
            root
        } else {
            self.field.neg(root)
        })
    }

    /// Fail unless p ≡ 3 (mod 4).
    pub fn require_p_three_mod_four(&self) -> Result<(), EcError> {
        if self.p_is_three_mod_four() {
            Ok(())
        } else {
            Err(EcError::Arithmetic("field prime p is not equal to 3 (mod 4)"))
        }
    }

    /// Whether the affine y-coordinate is a nonzero square. False for Infinity.
    pub fn has_square_y(&self, q: &Point) -> bool {
        match q {
            Point::Infinity => false,
            Point::Affine { y, .. } => self.field.legendre(*y) == 1,
        }
    }

    /// Same test on a Jacobian point, without leaving Jacobian coordinates.
    ///
    /// y = Y/Z³ is a square iff Y·Z = y·Z⁴ is.
    pub fn has_square_y_jac(&self, q: &JacobianPoint) -> bool {
        !q.is_infinity() && self.field.legendre(self.field.mul(q.y, q.z)) == 1
    }

    /// Fail unless the affine y-coordinate is a square.
    pub fn require_square_y(&self, q: &Point) -> Result<(), EcError> {
        if self.has_square_y(q) {
            Ok(())
        } else {
            Err(EcError::Arithmetic("y-coordinate is not a quadratic residue"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{params, secp256k1, CurveParams};
    use crate::field::ONE;
    use ruint::uint;

    fn u(v: u64) -> U576 {
        U576::from(v)
    }

    fn toy_curve(a: u64, b: u64, g: (u64, u64)) -> Curve {
        Curve::new(&CurveParams {
            p: u(11),
            a: u(a),
            b: u(b),
            g: (u(g.0), u(g.1)),
            n: u(7),
            h: u(2),
            sec_bits: 0,
            weakness_check: false,
        })
        .unwrap()
    }

    /// y² = x³ + 2x + 7 over GF(11): 7 points, no 2-torsion
    fn small_curve() -> Curve {
        toy_curve(2, 7, (6, 9))
    }

    /// y² = x³ + x + 1 over GF(11): 14 points, (2, 0) has order 2
    fn even_order_curve() -> Curve {
        toy_curve(1, 1, (0, 1))
    }

    /// Every finite point of the curve, by brute force
    fn all_points(ec: &Curve) -> Vec<Point> {
        let p: u64 = ec.p().to();
        let mut points = Vec::new();
        for x in 0..p {
            for y in 0..p {
                let q = Point::new(u(x), u(y));
                if ec.is_on_curve(&q) {
                    points.push(q);
                }
            }
        }
        points
    }

    #[test]
    fn test_is_on_curve() {
        let ec = small_curve();
        assert!(ec.is_on_curve(&Point::Infinity));
        assert!(ec.is_on_curve(ec.g()));
        assert!(!ec.is_on_curve(&Point::new(u(6), u(8))));
        // unreduced coordinates
        assert!(!ec.is_on_curve(&Point::new(u(17), u(9))));
        assert!(!ec.is_on_curve(&Point::new(u(6), u(20))));
        assert_eq!(
            ec.require_on_curve(&Point::new(u(1), u(1))),
            Err(EcError::PointNotOnCurve)
        );
    }

    #[test]
    fn test_even_order_curve_has_finite_zero_y_point() {
        let ec = even_order_curve();
        let two_torsion: Vec<_> = all_points(&ec)
            .into_iter()
            .filter(|q| q.y() == Some(U576::ZERO))
            .collect();
        assert_eq!(two_torsion, vec![Point::new(u(2), U576::ZERO)]);
        let t = &two_torsion[0];
        assert!(!t.is_infinity());
        assert_eq!(ec.opposite(t).unwrap(), *t);
        assert_eq!(ec.double(t).unwrap(), Point::Infinity);
        assert!(ec.double_jac(&t.to_jacobian()).is_infinity());
    }

    #[test]
    fn test_group_laws() {
        let ec = even_order_curve();
        let points = all_points(&ec);
        assert_eq!(points.len(), 13);
        for q in &points {
            assert_eq!(ec.add(q, &Point::Infinity).unwrap(), *q);
            assert_eq!(ec.add(&Point::Infinity, q).unwrap(), *q);
            let neg = ec.opposite(q).unwrap();
            assert_eq!(ec.add(q, &neg).unwrap(), Point::Infinity);
            for r in &points {
                let sum = ec.add(q, r).unwrap();
                assert!(ec.is_on_curve(&sum));
                assert_eq!(sum, ec.add(r, q).unwrap());
            }
        }
    }

    #[test]
    fn test_jacobian_matches_affine() {
        let ec = even_order_curve();
        let points = all_points(&ec);
        for q in &points {
            let doubled = ec.double_jac(&q.to_jacobian());
            assert_eq!(ec.aff_from_jac(&doubled).unwrap(), ec.double(q).unwrap());
            for r in &points {
                let sum = ec.add_jac(&q.to_jacobian(), &r.to_jacobian());
                assert_eq!(ec.aff_from_jac(&sum).unwrap(), ec.add(q, r).unwrap());
            }
        }
    }

    #[test]
    fn test_jacobian_with_non_unit_z() {
        let ec = secp256k1();
        let g = ec.g().to_jacobian();
        let g2 = ec.double_jac(&g);
        let g3 = ec.add_jac(&g2, &g);
        let g4 = ec.double_jac(&g2);
        let g7 = ec.add_jac(&g4, &g3);
        assert!(!g7.z.is_zero() && g7.z != ONE);

        let mut acc = ec.g().clone();
        for _ in 1..7 {
            acc = ec.add(&acc, ec.g()).unwrap();
        }
        assert_eq!(ec.aff_from_jac(&g7).unwrap(), acc);
        let neg7 = ec.negate(&acc).to_jacobian();
        assert!(ec.add_jac(&g7, &neg7).is_infinity());
    }

    #[test]
    fn test_arithmetic_rejects_off_curve_points() {
        let ec = small_curve();
        let bad = Point::new(u(1), u(1));
        assert_eq!(ec.add(&bad, ec.g()), Err(EcError::PointNotOnCurve));
        assert_eq!(ec.add(ec.g(), &bad), Err(EcError::PointNotOnCurve));
        assert_eq!(ec.double(&bad), Err(EcError::PointNotOnCurve));
        assert_eq!(ec.opposite(&bad), Err(EcError::PointNotOnCurve));
    }

    #[test]
    fn test_y_recovery() {
        let ec = small_curve();
        let points = all_points(&ec);
        for x in 0..11u64 {
            let has_point = points.iter().any(|q| q.x() == Some(u(x)));
            match ec.y(u(x)) {
                Ok(y) => {
                    assert!(has_point);
                    assert!(ec.is_on_curve(&Point::new(u(x), y)));
                }
                Err(err) => {
                    assert!(!has_point);
                    assert_eq!(err, EcError::NotFound { x: u(x) });
                }
            }
        }
        assert!(matches!(ec.y(u(11)), Err(EcError::OutOfRange { .. })));
    }

    #[test]
    fn test_y_selectors() {
        let ec = secp256k1();
        let gx = ec.g().x().unwrap();
        let gy = ec.g().y().unwrap();
        let p = ec.p();

        let odd = ec.y_odd(gx, true).unwrap();
        let even = ec.y_odd(gx, false).unwrap();
        assert!(odd.bit(0));
        assert!(!even.bit(0));
        assert_eq!(odd + even, p);
        // G's y is even
        assert_eq!(even, gy);
        assert_eq!(ec.field().square(odd), ec.y2(gx));

        let low = ec.y_low(gx, true).unwrap();
        let high = ec.y_low(gx, false).unwrap();
        assert!(low <= p >> 1_usize);
        assert!(high > p >> 1_usize);
        assert_eq!(low + high, p);

        let qr = ec.y_quadratic_residue(gx, true).unwrap();
        let non_qr = ec.y_quadratic_residue(gx, false).unwrap();
        assert_eq!(ec.field().legendre(qr), 1);
        assert_eq!(ec.field().legendre(non_qr), -1);
        assert_eq!(qr + non_qr, p);
    }

    #[test]
    fn test_y_invalid_abscissa() {
        let ec = secp256k1();
        let x = uint!(0xEEFDEA4CDB677750A420FEE807EACF21EB9898AE79B9768766E4FAA04A2D4A34_U576);
        assert_eq!(ec.y(x), Err(EcError::NotFound { x }));
        assert_eq!(ec.y_odd(x, true), Err(EcError::NotFound { x }));
    }

    #[test]
    fn test_quadratic_residue_needs_three_mod_four() {
        let ec = Curve::new(&params::SECP224K1).unwrap();
        assert!(!ec.p_is_three_mod_four());
        assert!(ec.require_p_three_mod_four().is_err());
        let gx = ec.g().x().unwrap();
        assert!(matches!(
            ec.y_quadratic_residue(gx, true),
            Err(EcError::Arithmetic(_))
        ));
        // the other selectors still work through Tonelli-Shanks
        let y = ec.y_odd(gx, ec.g().y().unwrap().bit(0)).unwrap();
        assert_eq!(Some(y), ec.g().y());
    }

    #[test]
    fn test_square_y() {
        let ec = secp256k1();
        assert!(!ec.has_square_y(&Point::Infinity));
        assert!(ec.require_square_y(&Point::Infinity).is_err());

        let gx = ec.g().x().unwrap();
        let qr = Point::new(gx, ec.y_quadratic_residue(gx, true).unwrap());
        let non_qr = ec.opposite(&qr).unwrap();
        assert!(ec.has_square_y(&qr));
        assert!(ec.require_square_y(&qr).is_ok());
        assert!(!ec.has_square_y(&non_qr));

        // scaled Jacobian representation of the same points
        let z = u(0x1234_5678);
        let f = ec.field();
        for q in [&qr, &non_qr] {
            let (x, y) = (q.x().unwrap(), q.y().unwrap());
            let z2 = f.square(z);
            let jac = JacobianPoint {
                x: f.mul(x, z2),
                y: f.mul(y, f.mul(z2, z)),
                z,
            };
            assert_eq!(ec.aff_from_jac(&jac).unwrap(), *q);
            assert_eq!(ec.has_square_y_jac(&jac), ec.has_square_y(q));
        }
    }
}
