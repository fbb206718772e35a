//! Scalar Multiplication
//!
//! Double-and-add and Strauss-Shamir double scalar multiplication. Both run
//! in Jacobian coordinates and convert back to affine once.

use super::point::{JacobianPoint, Point};
use super::Curve;
use crate::error::EcError;
use crate::field::U576;

impl Curve {
    /// `m·Q`, with `m` reduced mod n first.
    pub fn mult(&self, m: U576, q: &Point) -> Result<Point, EcError> {
        self.require_on_curve(q)?;
        let m = self.scalars.reduce(m);
        if m.is_zero() || q.is_infinity() {
            return Ok(Point::Infinity);
        }
        let r = self.mult_jac(m, &q.to_jacobian());
        self.aff_from_jac(&r)
    }

    /// `m·G`
    pub fn mult_generator(&self, m: U576) -> Result<Point, EcError> {
        self.mult(m, &self.g)
    }

    /// `u·P + v·Q` with one shared doubling chain (Shamir's trick).
    pub fn double_mult(&self, u: U576, p: &Point, v: U576, q: &Point) -> Result<Point, EcError> {
        self.require_on_curve(p)?;
        self.require_on_curve(q)?;
        let u = self.scalars.reduce(u);
        let v = self.scalars.reduce(v);

        let pj = p.to_jacobian();
        let qj = q.to_jacobian();
        let pq = self.add_jac(&pj, &qj);

        let mut result = JacobianPoint::infinity();

        // Process bits from MSB to LSB
        for i in (0..u.bit_len().max(v.bit_len())).rev() {
            result = self.double_jac(&result);
            match (u.bit(i), v.bit(i)) {
                (true, true) => result = self.add_jac(&result, &pq),
                (true, false) => result = self.add_jac(&result, &pj),
                (false, true) => result = self.add_jac(&result, &qj),
                (false, false) => {}
            }
        }

        self.aff_from_jac(&result)
    }

    /// Left-to-right double-and-add; no validation.
    pub(crate) fn mult_jac(&self, m: U576, q: &JacobianPoint) -> JacobianPoint {
        let mut result = JacobianPoint::infinity();
        for i in (0..m.bit_len()).rev() {
            result = self.double_jac(&result);
            if m.bit(i) {
                result = self.add_jac(&result, q);
            }
        }
        result
    }
}
