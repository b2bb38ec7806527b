use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use super::py_err;
use crate::core::{factorial, fibonacci};

/// Calculate the factorial of n
///
/// Hand-style wrapper: the positional arguments arrive as one tuple which is
/// unpacked and converted explicitly before the native call.
#[pyfunction]
#[pyo3(signature = (*args))]
pub fn fact(args: &Bound<'_, PyTuple>) -> PyResult<u64> {
    if args.len() != 1 {
        return Err(PyTypeError::new_err(format!(
            "fact() takes exactly 1 argument ({} given)",
            args.len()
        )));
    }
    let n: u32 = args.get_item(0)?.extract()?;
    factorial(n).map_err(py_err)
}

/// Return the n-th term of 1, 2, 3, 5, 8, ...
#[pyfunction]
pub fn fib(n: u32) -> PyResult<u64> {
    fibonacci(n).map_err(py_err)
}
