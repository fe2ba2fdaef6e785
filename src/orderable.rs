//! The index-based ordering contract consumed by the sort driver

/// A sequence that a comparison sort can reorder in place
///
/// Indices passed to [`swap`](Orderable::swap) and [`less`](Orderable::less)
/// are always in `0..len()`; implementations do not re-validate them.
pub trait Orderable {
    /// Number of elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchange the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Strict weak ordering between the elements at `i` and `j`
    fn less(&self, i: usize, j: usize) -> bool;
}

impl<O: Orderable + ?Sized> Orderable for &mut O {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }
}

impl<O: Orderable + ?Sized> Orderable for Box<O> {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }
}

/// Inverts the ordering of the wrapped sequence
#[derive(Debug)]
pub struct Reverse<O>(pub O);

impl<O: Orderable> Orderable for Reverse<O> {
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
        self.0.less(j, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::Int32Slice;

    #[test]
    fn test_reverse_flips_less() {
        let mut data = vec![1, 2];
        let reversed = Reverse(Int32Slice(&mut data));
        assert!(!reversed.less(0, 1));
        assert!(reversed.less(1, 0));
        assert_eq!(reversed.len(), 2);
    }

    #[test]
    fn test_boxed_adapter_forwards() {
        let mut data = vec![4, 3];
        let mut boxed: Box<dyn Orderable + '_> = Box::new(Int32Slice(&mut data));
        assert!(boxed.less(1, 0));
        boxed.swap(0, 1);
        assert!(!boxed.is_empty());
        drop(boxed);
        assert_eq!(data, vec![3, 4]);
    }
}
