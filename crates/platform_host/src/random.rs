//! Randomness source shared by the shell and its apps.

/// Uniform `[0, 1)` sample.
///
/// Host builds have no entropy source and return a fixed midpoint, which keeps host-side runs
/// deterministic.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}
