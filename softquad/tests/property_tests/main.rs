//! Property-based tests for softquad
//!
//! This suite covers:
//! - Arithmetic identities and IEEE special-case behavior
//! - Trigonometric quadrant signs, inverses, and identities
//! - Parse/format round-trips and negative-number patterns
//! - Conversion round-trips and classification invariants

mod arith_properties;
mod convert_properties;
mod text_properties;
mod trig_properties;
