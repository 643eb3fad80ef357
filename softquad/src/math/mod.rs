//! Transcendental functions: CORDIC sin/cos, Newton inverses, logarithms
//! and exponentials, roots, and hyperbolics.
//!
//! Everything here is built from the correctly rounded arithmetic core and
//! runs a fixed, bounded number of iterations; no function awaits external
//! progress or allocates. Domain errors (log of a non-positive value,
//! asin past ±1, even roots of negatives) produce the sentinel NaN per the
//! engine-wide error policy.

pub(crate) mod cordic;
mod hyper;
mod invtrig;
mod logexp;
mod roots;
mod trig;

/// Newton iteration count shared by the inverse functions. Every use
/// converges at least linearly with factor ½, so 25 iterations squeeze the
/// residual well under the documented 10⁻³ envelope (quadratic phases end
/// far below it).
pub(crate) const NEWTON_ITERATIONS: usize = 25;
