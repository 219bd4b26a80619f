//! Custom test assertions for numeric results

/// Tolerance used by `assert_approx_eq!` when none is given
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Assert two floats are within a tolerance of each other
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, $crate::testing::helpers::DEFAULT_TOLERANCE)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() <= $tolerance,
            "expected {} to be within {} of {}",
            left,
            $tolerance,
            right
        );
    }};
}

/// Names of a slice of employee references, in order
pub fn names<'a, I>(employees: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a crate::model::Employee>,
{
    employees.into_iter().map(|e| e.name.as_str()).collect()
}
