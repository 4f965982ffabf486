/// Dense row-major matrix of `i32`.
pub type Matrix = Vec<Vec<i32>>;

/// `size x size` matrix filled with `value`.
pub fn filled(size: usize, value: i32) -> Matrix {
    vec![vec![value; size]; size]
}

/// Naive i-j-k product of two square matrices of equal size.
///
/// Deliberately unblocked and unvectorized.
///
/// # Panics
///
/// Panics if `a` and `b` do not have the same number of rows, or if any row is
/// shorter than the number of rows (the operands must be square).
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let size = a.len();
    assert_eq!(b.len(), size, "operands must have the same size");

    let mut result = filled(size, 0);
    for i in 0..size {
        for j in 0..size {
            for k in 0..size {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Multiplies two all-ones `size x size` matrices.
pub fn matrix_multiplication(size: usize) -> Matrix {
    let a = filled(size, 1);
    let b = filled(size, 1);
    multiply(&a, &b)
}
