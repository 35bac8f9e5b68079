/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::dachshund::error::BeagleResult;
use nalgebra::DMatrix;

/// Dense `n x n` matrix representation backed by `nalgebra::DMatrix<f64>`.
pub type Matrix = DMatrix<f64>;

/// The matrix-multiplier is an injected capability, agnostic to whether the
/// underlying implementation runs on CPU, GPU, or a remote service.
///
/// The method is synchronous. A remote/GPU-backed implementation can block
/// internally (e.g. via its own runtime's `block_on`) without changing this
/// trait's shape -- see DESIGN.md for why this crate does not pull in an
/// async runtime just to model that possibility.
pub trait MatrixMultiplier {
    fn matmul(&self, a: &Matrix, b: &Matrix) -> BeagleResult<Matrix>;
}

/// Default `MatrixMultiplier`, backed directly by `nalgebra`'s `Mul` impl.
pub struct NalgebraMatMul;

impl MatrixMultiplier for NalgebraMatMul {
    fn matmul(&self, a: &Matrix, b: &Matrix) -> BeagleResult<Matrix> {
        Ok(a * b)
    }
}
