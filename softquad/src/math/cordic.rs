//! CORDIC rotation: tables and the shift-add loop.
//!
//! A rotation by φ is decomposed into 32 rotations through the fixed
//! angles θ_k = atan(2^−k); each step costs two scale-by-power-of-two
//! multiplies and two adds, and the accumulated stretching of the vector
//! is undone once at the end by the constant K = ∏ cos θ_k.

use tracing::debug;

use crate::bits::Float128;

/// Rotation steps per call.
pub(crate) const ITERATIONS: usize = 32;
/// Angle-table entries kept (k < 64).
pub(crate) const TABLE_SIZE: usize = 64;

/// Builds atan(2^−k) for k < 64. θ_0 is π/4 exactly (from the parsed
/// literal); the rest come from the alternating Maclaurin series, which
/// for x ≤ 1/2 sheds at least two bits per term.
pub(crate) fn theta_table(frac_pi_4: Float128) -> [Float128; TABLE_SIZE] {
    debug!("building CORDIC angle table");
    let mut table = [Float128::ZERO; TABLE_SIZE];
    table[0] = frac_pi_4;
    for (k, entry) in table.iter_mut().enumerate().skip(1) {
        *entry = atan_series(Float128::ONE.scale_b(-(k as i32)));
    }
    table
}

/// atan(x) = x − x³/3 + x⁵/5 − …, summed until a term no longer moves
/// the accumulator.
fn atan_series(x: Float128) -> Float128 {
    let xx = x * x;
    let mut power = x;
    let mut sum = x;
    let mut n = 1u32;
    let mut negate = true;
    // At x = 1/2 roughly 57 terms reach quad precision; the bound is a
    // backstop, not the expected exit.
    while n < 301 {
        n += 2;
        power = power * xx;
        let contribution = power / Float128::from(n);
        let next = if negate { sum - contribution } else { sum + contribution };
        if next == sum {
            break;
        }
        sum = next;
        negate = !negate;
    }
    sum
}

/// K = ∏_{k<32} cos(atan 2^−k) = ∏ 1/√(1 + 2^−2k).
pub(crate) fn scale_constant() -> Float128 {
    debug!("computing CORDIC scale constant");
    let mut k = Float128::ONE;
    for i in 0..ITERATIONS as i32 {
        let stretch = Float128::ONE + Float128::ONE.scale_b(-2 * i);
        k = k / stretch.sqrt();
    }
    k
}

/// Rotates (1, 0) by φ ∈ [−π/2, π/2]: returns (sin φ, cos φ).
pub(crate) fn rotate(phi: Float128) -> (Float128, Float128) {
    if phi.is_zero() {
        // Keeps the zero's sign in the sine.
        return (phi, Float128::ONE);
    }
    let t = crate::consts::tables();
    let mut x = Float128::ONE;
    let mut y = Float128::ZERO;
    let mut theta = Float128::ZERO;
    for i in 0..ITERATIONS {
        let step = i as i32;
        let (dx, dy) = (y.scale_b(-step), x.scale_b(-step));
        if theta < phi {
            x = x - dx;
            y = y + dy;
            theta = theta + t.cordic_theta[i];
        } else {
            x = x + dx;
            y = y - dy;
            theta = theta - t.cordic_theta[i];
        }
    }
    (y * t.cordic_k, x * t.cordic_k)
}
