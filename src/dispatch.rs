//! Adapter selection for sequences of unknown declared type

use crate::adapters::KnownElement;
use crate::error::{SortError, SortResult};
use crate::orderable::Orderable;
use crate::reflect::{Category, Element, Kind, Reflect};
use crate::reflected::Reflected;
use log::{debug, warn};
use num_complex::Complex;
use std::any::{Any, TypeId};
use std::fmt;

/// Declared sequence types with a dedicated adapter, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownKind {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    Bool,
}

impl KnownKind {
    pub const ALL: [KnownKind; 11] = [
        KnownKind::Int,
        KnownKind::Int8,
        KnownKind::Int16,
        KnownKind::Int32,
        KnownKind::Int64,
        KnownKind::Float32,
        KnownKind::Float64,
        KnownKind::Complex64,
        KnownKind::Complex128,
        KnownKind::String,
        KnownKind::Bool,
    ];

    /// Exact declared type this kind stands for
    pub fn declared_type_id(self) -> TypeId {
        match self {
            KnownKind::Int => TypeId::of::<Vec<isize>>(),
            KnownKind::Int8 => TypeId::of::<Vec<i8>>(),
            KnownKind::Int16 => TypeId::of::<Vec<i16>>(),
            KnownKind::Int32 => TypeId::of::<Vec<i32>>(),
            KnownKind::Int64 => TypeId::of::<Vec<i64>>(),
            KnownKind::Float32 => TypeId::of::<Vec<f32>>(),
            KnownKind::Float64 => TypeId::of::<Vec<f64>>(),
            KnownKind::Complex64 => TypeId::of::<Vec<Complex<f32>>>(),
            KnownKind::Complex128 => TypeId::of::<Vec<Complex<f64>>>(),
            KnownKind::String => TypeId::of::<Vec<String>>(),
            KnownKind::Bool => TypeId::of::<Vec<bool>>(),
        }
    }

    /// Element type of the declared sequence
    pub fn element_type_id(self) -> TypeId {
        match self {
            KnownKind::Int => TypeId::of::<isize>(),
            KnownKind::Int8 => TypeId::of::<i8>(),
            KnownKind::Int16 => TypeId::of::<i16>(),
            KnownKind::Int32 => TypeId::of::<i32>(),
            KnownKind::Int64 => TypeId::of::<i64>(),
            KnownKind::Float32 => TypeId::of::<f32>(),
            KnownKind::Float64 => TypeId::of::<f64>(),
            KnownKind::Complex64 => TypeId::of::<Complex<f32>>(),
            KnownKind::Complex128 => TypeId::of::<Complex<f64>>(),
            KnownKind::String => TypeId::of::<String>(),
            KnownKind::Bool => TypeId::of::<bool>(),
        }
    }

    /// Element kind of the sequence
    pub fn elem_kind(self) -> Kind {
        match self {
            KnownKind::Int => Kind::Int,
            KnownKind::Int8 => Kind::Int8,
            KnownKind::Int16 => Kind::Int16,
            KnownKind::Int32 => Kind::Int32,
            KnownKind::Int64 => Kind::Int64,
            KnownKind::Float32 => Kind::Float32,
            KnownKind::Float64 => Kind::Float64,
            KnownKind::Complex64 => Kind::Complex64,
            KnownKind::Complex128 => Kind::Complex128,
            KnownKind::String => Kind::String,
            KnownKind::Bool => Kind::Bool,
        }
    }

    /// First known kind whose declared type is exactly that of `value`
    pub fn of(value: &dyn Any) -> Option<Self> {
        let id = value.type_id();
        KnownKind::ALL
            .into_iter()
            .find(|&known| known.declared_type_id() == id)
    }

    /// Known kind whose element type is exactly `T`
    pub fn of_element<T: 'static>() -> Option<Self> {
        let id = TypeId::of::<T>();
        KnownKind::ALL
            .into_iter()
            .find(|&known| known.element_type_id() == id)
    }
}

/// Which adapter a dispatch produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Concrete(KnownKind),
    Reflective(Category),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Concrete(known) => write!(f, "concrete []{}", known.elem_kind()),
            Route::Reflective(category) => write!(f, "reflective {category:?}"),
        }
    }
}

/// An adapter together with the route that selected it
pub struct Dispatched<'a> {
    pub route: Route,
    pub adapter: Box<dyn Orderable + 'a>,
}

impl fmt::Debug for Dispatched<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatched")
            .field("route", &self.route)
            .field("len", &self.adapter.len())
            .finish()
    }
}

/// Return the ordering adapter for `seq`.
///
/// Known declared types get their concrete adapter; everything else goes
/// through [`Reflected`], which fails for non-sequences and unsupported
/// element kinds before any element is touched.
pub fn any<'a>(seq: &'a mut dyn Reflect) -> SortResult<Box<dyn Orderable + 'a>> {
    route(seq, true).map(|dispatched| dispatched.adapter)
}

/// Select an adapter, optionally refusing the reflective fallback
pub fn route<'a>(seq: &'a mut dyn Reflect, fallback: bool) -> SortResult<Dispatched<'a>> {
    let type_name = seq.type_name();

    if let Some(known) = KnownKind::of(seq.as_any()) {
        debug!("dispatch {type_name} -> concrete {known:?}");
        let adapter = concrete(seq.as_any_mut(), known).ok_or_else(|| {
            SortError::internal(&format!("{type_name} matched {known:?} but failed to downcast"))
        })?;
        return Ok(Dispatched {
            route: Route::Concrete(known),
            adapter,
        });
    }

    if !fallback {
        warn!("dispatch {type_name}: no concrete adapter and fallback disabled");
        return Err(SortError::fallback_disabled(type_name));
    }

    reflective(type_name, Reflected::new(seq))
}

/// Return the ordering adapter for a borrowed slice
pub fn any_slice<T: Element>(slice: &mut [T]) -> SortResult<Box<dyn Orderable + '_>> {
    route_slice(slice, true).map(|dispatched| dispatched.adapter)
}

/// Select an adapter for a borrowed slice, optionally refusing the fallback.
///
/// The element type decides the route exactly like the declared type does
/// in [`route`], so `&mut v[..]` and `&mut v` sort the same way.
pub fn route_slice<T: Element>(slice: &mut [T], fallback: bool) -> SortResult<Dispatched<'_>> {
    let type_name = std::any::type_name::<[T]>();

    if let Some(known) = KnownKind::of_element::<T>() {
        debug!("dispatch {type_name} -> concrete {known:?}");
        let adapter = T::concrete_adapter(slice).ok_or_else(|| {
            SortError::internal(&format!("{type_name} matched {known:?} but has no adapter"))
        })?;
        return Ok(Dispatched {
            route: Route::Concrete(known),
            adapter,
        });
    }

    if !fallback {
        warn!("dispatch {type_name}: no concrete adapter and fallback disabled");
        return Err(SortError::fallback_disabled(type_name));
    }

    reflective(type_name, Reflected::from_slice(slice))
}

fn reflective<'a>(
    type_name: &'static str,
    reflected: SortResult<Reflected<'a>>,
) -> SortResult<Dispatched<'a>> {
    match reflected {
        Ok(reflected) => {
            let category = reflected.category();
            debug!("dispatch {type_name} -> reflective {category:?}");
            Ok(Dispatched {
                route: Route::Reflective(category),
                adapter: Box::new(reflected),
            })
        }
        Err(err) => {
            warn!("dispatch {type_name} failed: {err}");
            Err(err)
        }
    }
}

fn concrete(any: &mut dyn Any, known: KnownKind) -> Option<Box<dyn Orderable + '_>> {
    match known {
        KnownKind::Int => downcast::<isize>(any),
        KnownKind::Int8 => downcast::<i8>(any),
        KnownKind::Int16 => downcast::<i16>(any),
        KnownKind::Int32 => downcast::<i32>(any),
        KnownKind::Int64 => downcast::<i64>(any),
        KnownKind::Float32 => downcast::<f32>(any),
        KnownKind::Float64 => downcast::<f64>(any),
        KnownKind::Complex64 => downcast::<Complex<f32>>(any),
        KnownKind::Complex128 => downcast::<Complex<f64>>(any),
        KnownKind::String => downcast::<String>(any),
        KnownKind::Bool => downcast::<bool>(any),
    }
}

fn downcast<T: KnownElement>(any: &mut dyn Any) -> Option<Box<dyn Orderable + '_>> {
    let vec = any.downcast_mut::<Vec<T>>()?;
    Some(Box::new(T::adapter(vec)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_sort::sort;

    #[derive(Clone, Debug, PartialEq)]
    struct Score(i64);
    crate::named_element!(Score(i64));

    #[test]
    fn test_known_kinds_route_concretely() {
        let mut ints = vec![3isize, 1];
        let mut bytes = vec![3i8, 1];
        let mut floats = vec![2.5f32, 1.0];
        let mut zs = vec![Complex::new(1.0f64, 1.0)];
        let mut words = vec!["b".to_string()];
        let mut flags = vec![true, false];

        let cases: [(&mut dyn Reflect, KnownKind); 6] = [
            (&mut ints, KnownKind::Int),
            (&mut bytes, KnownKind::Int8),
            (&mut floats, KnownKind::Float32),
            (&mut zs, KnownKind::Complex128),
            (&mut words, KnownKind::String),
            (&mut flags, KnownKind::Bool),
        ];
        for (seq, expected) in cases {
            let dispatched = route(seq, false).expect("known kinds never need the fallback");
            assert_eq!(dispatched.route, Route::Concrete(expected));
        }
    }

    #[test]
    fn test_known_kind_lookup() {
        assert_eq!(KnownKind::of(&Vec::<i16>::new()), Some(KnownKind::Int16));
        assert_eq!(KnownKind::of(&Vec::<u16>::new()), None);
        assert_eq!(KnownKind::of(&[1i16, 2]), None);
        assert_eq!(KnownKind::of(&5i16), None);
        assert_eq!(KnownKind::of(&Vec::<String>::new()), Some(KnownKind::String));

        for known in KnownKind::ALL {
            assert_ne!(known.declared_type_id(), known.element_type_id());
        }
        assert_eq!(KnownKind::of_element::<f64>(), Some(KnownKind::Float64));
        assert_eq!(KnownKind::of_element::<Complex<f32>>(), Some(KnownKind::Complex64));
        assert_eq!(KnownKind::of_element::<u8>(), None);
        assert_eq!(KnownKind::of_element::<Score>(), None);
    }

    #[test]
    fn test_slices_route_by_element_type() {
        let mut ints = vec![9i32, 4, 7, 1, 0];
        let Dispatched { route: chosen, mut adapter } = route_slice(&mut ints[1..4], false)
            .expect("known elements never need the fallback");
        assert_eq!(chosen, Route::Concrete(KnownKind::Int32));
        sort(&mut adapter);
        drop(adapter);
        assert_eq!(ints, vec![9, 1, 4, 7, 0]);

        let mut scores = vec![Score(5), Score(3), Score(1)];
        let err = route_slice(&mut scores[..2], false).expect_err("fallback is off");
        assert!(matches!(err, SortError::FallbackDisabled { .. }));

        let mut adapter = any_slice(&mut scores[..2]).expect("named integers are supported");
        sort(&mut adapter);
        drop(adapter);
        assert_eq!(scores, vec![Score(3), Score(5), Score(1)]);

        let mut unsigned = [3u16, 1];
        assert!(matches!(
            any_slice(&mut unsigned[..]).map(|_| ()),
            Err(SortError::UnsupportedElementKind {
                kind: Kind::Uint16,
                ..
            })
        ));
    }

    #[test]
    fn test_named_type_routes_reflectively() {
        let mut scores = vec![Score(7), Score(-2), Score(4)];
        let Dispatched { route: chosen, mut adapter } =
            route(&mut scores, true).expect("named integers are supported");
        assert_eq!(chosen, Route::Reflective(Category::Integer));

        sort(&mut adapter);
        drop(adapter);
        assert_eq!(scores, vec![Score(-2), Score(4), Score(7)]);
    }

    #[test]
    fn test_fallback_disabled() {
        let mut scores = vec![Score(1)];
        let err = route(&mut scores, false).expect_err("fallback is off");
        assert!(matches!(err, SortError::FallbackDisabled { .. }));
    }

    #[test]
    fn test_any_rejects_scalar_and_records() {
        let mut scalar = 1.5f64;
        assert!(matches!(
            any(&mut scalar).map(|_| ()),
            Err(SortError::NotASequence {
                kind: Kind::Float64,
                ..
            })
        ));

        let mut zs = [Complex::new(0.0f32, 1.0)];
        assert!(matches!(
            any(&mut zs).map(|_| ()),
            Err(SortError::UnsupportedElementKind {
                kind: Kind::Complex64,
                ..
            })
        ));
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::Concrete(KnownKind::Int32).to_string(), "concrete []int32");
        assert_eq!(
            Route::Reflective(Category::String).to_string(),
            "reflective String"
        );
    }
}
