//! Cell access macros
//!
//! Field kernels touch every cell several times per tick, so the hot
//! accessors skip bounds checks in release builds. Debug builds keep the
//! checked path and panic on a bad index.
//!
//! Usage:
//! ```rust
//! use eddy_engine::fast;
//!
//! let mut pressure = vec![0.0f32; 64];
//! fast!(pressure, [9] = 1.5);
//! assert_eq!(*fast!(pressure, [9]), 1.5);
//! ```

/// Indexed slice access, checked in debug and unchecked in release.
///
/// - `fast!(slice, [i])` yields `&slice[i]`
/// - `fast!(slice, [i] = v)` stores `v`
///
/// Callers must guarantee `i < slice.len()`. `FieldGrid` does this with a
/// release-mode `assert!` on the coordinates in `index`.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
