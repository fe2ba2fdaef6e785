//! Reflective fallback adapter for element types without a dedicated adapter

use crate::error::{SortError, SortResult};
use crate::orderable::Orderable;
use crate::reflect::{Category, Element, Reflect, ReflectSequence, SliceView, Value};

/// Orders any reflected sequence whose elements fall into a known [`Category`]
///
/// Elements are only touched through the generic accessors of
/// [`ReflectSequence`], so named types built on integers, floats, strings or
/// booleans compare exactly like their underlying representation.
pub struct Reflected<'a> {
    seq: Box<dyn ReflectSequence + 'a>,
    category: Category,
}

impl<'a> Reflected<'a> {
    /// Inspect `value` and build an adapter for it.
    ///
    /// Fails before touching any element if `value` is not a sequence or its
    /// element kind has no comparable category.
    pub fn new(value: &'a mut dyn Reflect) -> SortResult<Self> {
        let type_name = value.type_name();
        let kind = value.kind();
        if !kind.is_sequence() {
            return Err(SortError::not_a_sequence(type_name, kind));
        }
        let seq = value
            .as_sequence_mut()
            .ok_or_else(|| SortError::not_a_sequence(type_name, kind))?;

        Self::from_sequence(type_name, Box::new(seq))
    }

    /// Build an adapter over a borrowed slice
    pub fn from_slice<T: Element>(slice: &'a mut [T]) -> SortResult<Self> {
        Self::from_sequence(std::any::type_name::<[T]>(), Box::new(SliceView(slice)))
    }

    /// Build an adapter over generic sequence accessors.
    ///
    /// The first element must report a value of the declared category.
    pub fn from_sequence(
        type_name: &'static str,
        seq: Box<dyn ReflectSequence + 'a>,
    ) -> SortResult<Self> {
        let elem_kind = seq.elem_kind();
        let category = elem_kind
            .category()
            .ok_or_else(|| SortError::unsupported_element_kind(type_name, elem_kind))?;

        if !seq.is_empty() && seq.index(0).category() != Some(category) {
            return Err(SortError::kind_mismatch(type_name, elem_kind));
        }

        Ok(Self { seq, category })
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl Orderable for Reflected<'_> {
    fn len(&self) -> usize {
        self.seq.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        // Stage i before overwriting it; the accessors may share storage.
        let aux = self.seq.interface(i);
        self.seq.set(i, j);
        let restored = self.seq.set_interface(j, aux);
        assert!(
            restored.is_ok(),
            "staged element was rejected by its own sequence"
        );
    }

    fn less(&self, i: usize, j: usize) -> bool {
        match (self.category, self.seq.index(i), self.seq.index(j)) {
            (Category::Integer, Value::Int(a), Value::Int(b)) => a < b,
            (Category::Float, Value::Float(a), Value::Float(b)) => a < b,
            (Category::String, Value::Str(a), Value::Str(b)) => a < b,
            (Category::Bool, Value::Bool(a), Value::Bool(b)) => !a && b,
            (category, a, b) => {
                debug_assert!(false, "{category:?} adapter compared {a:?} with {b:?}");
                false
            }
        }
    }
}

impl std::fmt::Debug for Reflected<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reflected")
            .field("category", &self.category)
            .field("len", &self.seq.len())
            .finish()
    }
}
