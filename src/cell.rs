/// An entry of the 0/1 matrix given to [`solve`](crate::solve).
///
/// Only the presence or absence of an entry matters to the solver. Integers
/// are present when nonzero, and booleans when `true`. Floating-point
/// entries are present unless they compare equal to zero, so NaN counts as
/// present.
pub trait Cell {
    /// Returns whether this entry is a 1 of the matrix.
    fn is_present(&self) -> bool;
}

impl Cell for bool {
    #[inline]
    fn is_present(&self) -> bool {
        *self
    }
}

macro_rules! impl_cell_for_numbers {
    ($zero:literal => $($ty:ty),+) => {
        $(
            impl Cell for $ty {
                #[inline]
                fn is_present(&self) -> bool {
                    *self != $zero
                }
            }
        )+
    };
}

impl_cell_for_numbers!(0 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_cell_for_numbers!(0.0 => f32, f64);

impl<T: Cell + ?Sized> Cell for &T {
    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}
