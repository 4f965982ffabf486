//! Inline floating-point accumulation loops.
//!
//! Each loop walks `0..n` and folds a per-index expression into a running sum.
//! The sum only exists so that the optimizer cannot drop the loop body.

use std::hint::black_box;

/// Basic level: `sum += sqrt(i) * i^2`.
pub fn accumulate(n: u64) -> f64 {
    let mut sum = 0.0f64;
    for i in 0..n {
        let x = black_box(i as f64);
        sum += x.sqrt() * x.powi(2);
    }
    sum
}

/// Complex level 1: `sum += i^2 - sqrt(i) * sin(i)`.
pub fn complex_level_1(n: u64) -> f64 {
    let mut sum = 0.0f64;
    for i in 0..n {
        let x = black_box(i as f64);
        sum += x * x - x.sqrt() * x.sin();
    }
    sum
}

/// Complex level 2: `sum += i^3 * ln(i + 1) - sin(i)`.
pub fn complex_level_2(n: u64) -> f64 {
    let mut sum = 0.0f64;
    for i in 0..n {
        let x = black_box(i as f64);
        sum += x.powi(3) * (x + 1.0).ln() - x.sin();
    }
    sum
}
