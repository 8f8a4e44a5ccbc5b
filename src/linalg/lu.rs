use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::error::{InterpolationError, Result};

//=====================================================================
// Solve A x = b by LU factorisation with partial pivoting.
//
// Every column is scaled to a largest entry of one before factorising,
// so pivot choice does not depend on the units of the unknowns. The
// system is singular when a column is entirely zero, when U ends up
// with an exactly zero diagonal entry, or when the solution is not
// finite. The reported column is the first offending one.
//=====================================================================
pub fn lu_solve(mut matrix: DMatrix<f64>, rhs: &DVector<f64>) -> Result<DVector<f64>> {
    assert!(matrix.is_square(), "LU solve: matrix must be square");
    assert_eq!(matrix.nrows(), rhs.len(), "LU solve: right-hand side length must match matrix dimension");
    let dim = matrix.nrows();
    if dim == 0 {
        return Ok(DVector::zeros(0));
    }

    let scales = DVector::from_iterator(dim, matrix.column_iter().map(|column| column.amax()));
    if let Some(column) = scales.iter().position(|scale| *scale == 0.0 || !scale.is_finite()) {
        return Err(InterpolationError::SingularSystem { column });
    }
    for (mut column, scale) in matrix.column_iter_mut().zip(scales.iter()) {
        column /= *scale;
    }

    let lu = matrix.lu();
    if let Some(column) = lu.u().diagonal().iter().position(|pivot| *pivot == 0.0 || !pivot.is_finite()) {
        return Err(InterpolationError::SingularSystem { column });
    }
    let scaled = lu.solve(rhs).ok_or(InterpolationError::SingularSystem { column: 0 })?;

    // Undo the column scaling
    let solution = scaled.component_div(&scales);
    if let Some(column) = solution.iter().position(|value| !value.is_finite()) {
        return Err(InterpolationError::SingularSystem { column });
    }

    debug!("Solved {}x{} system by LU factorisation", dim, dim);
    Ok(solution)
}
