//! Matrix Operations Example for linalg-core
//!
//! Demonstrates:
//! - Matrix construction and elementwise arithmetic
//! - Matrix multiplication and matrix-vector products
//! - Concatenation and transpose
//! - The cofactor family: minor, cofactor, determinant, adjugate, inverse
//! - LU decomposition for float matrices
//!
//! Run with: cargo run --example matrix_operations

use linalg_core::{LinalgError, LuDecomposition, Matrix, Tolerance, Vector};

fn main() -> Result<(), LinalgError> {
    println!("Matrix Operations Demo");
    println!("======================\n");

    // ========================================================================
    // Construction and Arithmetic
    // ========================================================================
    println!("Construction and Arithmetic");
    println!("---------------------------\n");

    let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4])?;
    let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8])?;
    println!("A =\n{}\n", a);
    println!("B =\n{}\n", b);
    println!("A + B =\n{}\n", a.add(&b)?);
    println!("A - B =\n{}\n", a.sub(&b)?);
    println!("A x B =\n{}\n", a.matmul(&b)?);
    println!("A^T =\n{}\n", a.transpose());

    // ========================================================================
    // Vectors
    // ========================================================================
    println!("Vectors");
    println!("-------\n");

    let v = Vector::from_slice(&[0, 1, 2]);
    let w = Vector::from_slice(&[-1, 2, 5]);
    println!("v = {}, w = {}", v, w);
    println!("v . w = {}", v.dot(&w)?);
    println!("v x w = {}", v.cross(&w)?);
    println!("|w| = {:.4}\n", w.magnitude());

    let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as i32);
    println!("M =\n{}\n", m);
    println!("M v = {}", m.matvec(&v)?);
    println!("v M = {}\n", Matrix::vecmat(&v, &m)?);

    // ========================================================================
    // Concatenation
    // ========================================================================
    println!("Concatenation");
    println!("-------------\n");

    println!("[A | B] =\n{}\n", a.hcat(&b)?);
    println!("[A ; B] =\n{}\n", a.vcat(&b)?);
    println!("[M | v] =\n{}\n", m.hcat_vector(&v)?);

    // ========================================================================
    // Determinant Family
    // ========================================================================
    println!("Determinant Family");
    println!("------------------\n");

    let n = Matrix::from_vec(4, 4, vec![3, 2, 0, 1, 4, 0, 1, 2, 3, 0, 2, 1, 9, 2, 3, 1])?;
    println!("N =\n{}\n", n);
    println!("minor(0, 0) =\n{}\n", n.minor(0, 0)?);
    println!("cofactor(0, 1) = {}", n.cofactor(0, 1)?);
    println!("det(N) = {}", n.determinant()?);
    println!("trace(N) = {}", n.trace()?);
    println!("adj(N) =\n{}\n", n.adjugate()?);
    println!("N x adj(N) =\n{}\n", n.matmul(&n.adjugate()?)?);

    // Integer inverse truncates adj(N) / det(N)
    println!("inverse(N) over i64 =\n{}\n", n.inverse()?);

    let nf = Matrix::from_fn(4, 4, |i, j| *n.get(i, j).unwrap_or(&0) as f64);
    let inverse = nf.inverse()?;
    println!("inverse(N) over f64 =\n{}\n", inverse);
    let product = nf.matmul(&inverse)?;
    println!(
        "N x inverse(N) is identity: {}\n",
        product.approx_eq(&Matrix::identity(4), &Tolerance::strict())
    );

    match Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64).inverse() {
        Err(e) => println!("Inverting a singular matrix: {}\n", e),
        Ok(_) => println!("Unexpected inverse of a singular matrix\n"),
    }

    // ========================================================================
    // LU Decomposition
    // ========================================================================
    println!("LU Decomposition");
    println!("----------------\n");

    let lu = LuDecomposition::new(&nf)?;
    println!("L =\n{}\n", lu.lower());
    println!("U =\n{}\n", lu.upper());
    println!("permutation = {:?}", lu.permutation());
    println!("det via LU = {:.6}", lu.determinant());

    let rhs = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    let x = lu.solve(&rhs)?;
    println!("solve(N, {}) = {}", rhs, x);
    println!("N x = {}", nf.matvec(&x)?);

    Ok(())
}
