//! # Factory Module
//!
//! Functions that build other functions. Each returned closure owns a copy of
//! the exponent it was created with.

/// Build a function that raises its input to `exponent`.
///
/// ```
/// use closure_kit_core::make_power;
///
/// let square = make_power(2);
/// let cube = make_power(3);
/// assert_eq!(square(4.0), 16.0);
/// assert_eq!(cube(2.0), 8.0);
/// ```
pub fn make_power(exponent: i32) -> impl Fn(f64) -> f64 + Clone {
    move |x| x.powi(exponent)
}

/// Same as [`make_power`].
pub fn power_factory(exponent: i32) -> impl Fn(f64) -> f64 + Clone {
    make_power(exponent)
}

/// Build one power function per exponent, keyed by the exponent.
pub fn power_table(exponents: &[i32]) -> Vec<(i32, Box<dyn Fn(f64) -> f64>)> {
    exponents
        .iter()
        .map(|&exponent| {
            let power: Box<dyn Fn(f64) -> f64> = Box::new(make_power(exponent));
            (exponent, power)
        })
        .collect()
}
