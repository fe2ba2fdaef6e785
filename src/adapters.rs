//! Allocation-free ordering adapters for the known primitive kinds
//!
//! Each adapter borrows a slice and implements [`Orderable`] directly on it.
//! [`KnownElement`] maps an element type to its adapter at compile time, so
//! generic code can pick the right one without going through dispatch.

use crate::orderable::Orderable;
use num_complex::Complex;

/// Element types that have a dedicated adapter
pub trait KnownElement: Sized + 'static {
    type Adapter<'a>: Orderable + 'a
    where
        Self: 'a;

    fn adapter(slice: &mut [Self]) -> Self::Adapter<'_>;
}

/// Wrap a slice in the adapter for its element type
pub fn adapt<T: KnownElement>(slice: &mut [T]) -> T::Adapter<'_> {
    T::adapter(slice)
}

macro_rules! natural_adapter {
    ($($(#[$meta:meta])* $name:ident => $ty:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub struct $name<'a>(pub &'a mut [$ty]);

            impl Orderable for $name<'_> {
                #[inline]
                fn len(&self) -> usize {
                    self.0.len()
                }

                #[inline]
                fn swap(&mut self, i: usize, j: usize) {
                    self.0.swap(i, j)
                }

                #[inline]
                fn less(&self, i: usize, j: usize) -> bool {
                    self.0[i] < self.0[j]
                }
            }

            impl KnownElement for $ty {
                type Adapter<'a> = $name<'a>;

                #[inline]
                fn adapter(slice: &mut [Self]) -> Self::Adapter<'_> {
                    $name(slice)
                }
            }
        )*
    };
}

natural_adapter! {
    IntSlice => isize,
    Int8Slice => i8,
    Int16Slice => i16,
    Int32Slice => i32,
    Int64Slice => i64,
    /// NaN compares false against everything, as with `<`
    Float32Slice => f32,
    Float64Slice => f64,
    /// Byte-wise lexicographic order
    StringSlice => String,
}

#[inline]
fn magnitude(z: Complex<f64>) -> f64 {
    z.norm()
}

/// Complex numbers with `f32` components, ordered by magnitude
#[derive(Debug)]
pub struct Complex64Slice<'a>(pub &'a mut [Complex<f32>]);

impl Orderable for Complex64Slice<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        let widen = |z: Complex<f32>| Complex::new(f64::from(z.re), f64::from(z.im));
        magnitude(widen(self.0[i])) < magnitude(widen(self.0[j]))
    }
}

/// Complex numbers with `f64` components, ordered by magnitude
///
/// Values with equal magnitude and different phase are incomparable, so their
/// relative order after a sort is unspecified.
#[derive(Debug)]
pub struct Complex128Slice<'a>(pub &'a mut [Complex<f64>]);

impl Orderable for Complex128Slice<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        magnitude(self.0[i]) < magnitude(self.0[j])
    }
}

/// Booleans with `false` before `true`
#[derive(Debug)]
pub struct BoolSlice<'a>(pub &'a mut [bool]);

impl Orderable for BoolSlice<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        !self.0[i] && self.0[j]
    }
}

impl KnownElement for Complex<f32> {
    type Adapter<'a> = Complex64Slice<'a>;

    fn adapter(slice: &mut [Self]) -> Self::Adapter<'_> {
        Complex64Slice(slice)
    }
}

impl KnownElement for Complex<f64> {
    type Adapter<'a> = Complex128Slice<'a>;

    fn adapter(slice: &mut [Self]) -> Self::Adapter<'_> {
        Complex128Slice(slice)
    }
}

impl KnownElement for bool {
    type Adapter<'a> = BoolSlice<'a>;

    fn adapter(slice: &mut [Self]) -> Self::Adapter<'_> {
        BoolSlice(slice)
    }
}
