// Platform-agnostic math: native f64 methods with `std`, libm otherwise.

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    angle.sin_cos()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    (libm::sin(angle), libm::cos(angle))
}

#[inline]
pub(crate) fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

#[inline]
pub(crate) fn exp(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.exp();

    #[cfg(not(feature = "std"))]
    return libm::exp(x);
}

#[inline]
pub(crate) fn ln(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.ln();

    #[cfg(not(feature = "std"))]
    return libm::log(x);
}

#[inline]
pub(crate) fn log10(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.log10();

    #[cfg(not(feature = "std"))]
    return libm::log10(x);
}

#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.ceil();

    #[cfg(not(feature = "std"))]
    return libm::ceil(x);
}

#[inline]
pub(crate) fn fabs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}
