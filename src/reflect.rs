//! Opt-in runtime type introspection for sortable values
//!
//! Rust has no built-in reflection, so types describe their own shape: an
//! [`Element`] declares its representation [`Kind`] and exposes a borrowed
//! [`Value`] view, and a [`Reflect`] value reports whether it is a sequence
//! and hands out generic, index-based accessors through [`ReflectSequence`].
//! Named element types opt in with [`named_element!`](crate::named_element).

use crate::adapters::KnownElement;
use crate::orderable::Orderable;
use num_complex::Complex;
use std::any::Any;
use std::fmt;

/// Representation kind of a value, independent of its declared name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    Bool,
    Array,
    Slice,
    Struct,
    Map,
}

/// Element categories the reflective adapter knows how to compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Integer,
    Float,
    String,
    Bool,
}

impl Kind {
    /// Narrow a kind to a comparable category; `None` means unsupported.
    ///
    /// Unsigned and complex kinds are deliberately absent.
    pub fn category(self) -> Option<Category> {
        match self {
            Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64 => {
                Some(Category::Integer)
            }
            Kind::Float32 | Kind::Float64 => Some(Category::Float),
            Kind::String => Some(Category::String),
            Kind::Bool => Some(Category::Bool),
            _ => None,
        }
    }

    /// Whether values of this kind are containers
    pub fn is_sequence(self) -> bool {
        matches!(self, Kind::Array | Kind::Slice)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Complex64 => "complex64",
            Kind::Complex128 => "complex128",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Struct => "struct",
            Kind::Map => "map",
        };
        write!(f, "{name}")
    }
}

/// Borrowed view of a single element, widened to its family's largest type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(Complex<f64>),
    Str(&'a str),
    Bool(bool),
    /// Structured values with no scalar view
    Opaque,
}

impl Value<'_> {
    /// Category this value compares under, `None` for unsupported values
    pub fn category(&self) -> Option<Category> {
        match self {
            Value::Int(_) => Some(Category::Integer),
            Value::Float(_) => Some(Category::Float),
            Value::Str(_) => Some(Category::String),
            Value::Bool(_) => Some(Category::Bool),
            Value::Uint(_) | Value::Complex(_) | Value::Opaque => None,
        }
    }
}

/// An element type that can describe its own representation
pub trait Element: Clone + 'static {
    const KIND: Kind;

    fn value(&self) -> Value<'_>;

    /// Dedicated adapter for slices of this exact type, if there is one
    fn concrete_adapter(slice: &mut [Self]) -> Option<Box<dyn Orderable + '_>> {
        let _ = slice;
        None
    }
}

macro_rules! impl_element {
    (@concrete) => {};
    (@concrete known) => {
        #[inline]
        fn concrete_adapter(slice: &mut [Self]) -> Option<Box<dyn Orderable + '_>> {
            Some(Box::new(<Self as KnownElement>::adapter(slice)))
        }
    };
    ($($ty:ty => $kind:ident as $variant:ident $([$known:ident])?),* $(,)?) => {
        $(
            impl Element for $ty {
                const KIND: Kind = Kind::$kind;

                #[inline]
                fn value(&self) -> Value<'_> {
                    Value::$variant(*self as _)
                }

                impl_element!(@concrete $($known)?);
            }
        )*
    };
}

impl_element! {
    isize => Int as Int [known],
    i8 => Int8 as Int [known],
    i16 => Int16 as Int [known],
    i32 => Int32 as Int [known],
    i64 => Int64 as Int [known],
    usize => Uint as Uint,
    u8 => Uint8 as Uint,
    u16 => Uint16 as Uint,
    u32 => Uint32 as Uint,
    u64 => Uint64 as Uint,
    f32 => Float32 as Float [known],
    f64 => Float64 as Float [known],
}

impl Element for bool {
    const KIND: Kind = Kind::Bool;

    #[inline]
    fn value(&self) -> Value<'_> {
        Value::Bool(*self)
    }

    impl_element!(@concrete known);
}

impl Element for String {
    const KIND: Kind = Kind::String;

    #[inline]
    fn value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }

    impl_element!(@concrete known);
}

impl Element for Complex<f32> {
    const KIND: Kind = Kind::Complex64;

    #[inline]
    fn value(&self) -> Value<'_> {
        Value::Complex(Complex::new(f64::from(self.re), f64::from(self.im)))
    }

    impl_element!(@concrete known);
}

impl Element for Complex<f64> {
    const KIND: Kind = Kind::Complex128;

    #[inline]
    fn value(&self) -> Value<'_> {
        Value::Complex(*self)
    }

    impl_element!(@concrete known);
}

/// A value whose shape can be inspected at runtime
pub trait Reflect: Any {
    fn kind(&self) -> Kind;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Generic container access, `None` for scalars
    fn as_sequence_mut(&mut self) -> Option<&mut dyn ReflectSequence> {
        None
    }
}

/// Representation-agnostic, index-based access to a container's elements
pub trait ReflectSequence {
    fn elem_kind(&self) -> Kind;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(&self, i: usize) -> Value<'_>;

    /// Owned copy of the element at `i`
    fn interface(&self, i: usize) -> Box<dyn Any>;

    /// Copy the element at `src` into `dst`
    fn set(&mut self, dst: usize, src: usize);

    /// Store a previously staged element at `dst`.
    ///
    /// Returns the value unchanged if its type does not match the elements.
    fn set_interface(&mut self, dst: usize, value: Box<dyn Any>) -> Result<(), Box<dyn Any>>;
}

impl<S: ReflectSequence + ?Sized> ReflectSequence for &mut S {
    fn elem_kind(&self) -> Kind {
        (**self).elem_kind()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn index(&self, i: usize) -> Value<'_> {
        (**self).index(i)
    }

    fn interface(&self, i: usize) -> Box<dyn Any> {
        (**self).interface(i)
    }

    fn set(&mut self, dst: usize, src: usize) {
        (**self).set(dst, src)
    }

    fn set_interface(&mut self, dst: usize, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        (**self).set_interface(dst, value)
    }
}

fn stage<T: Element>(elems: &[T], i: usize) -> Box<dyn Any> {
    Box::new(elems[i].clone())
}

fn copy<T: Element>(elems: &mut [T], dst: usize, src: usize) {
    let value = elems[src].clone();
    elems[dst] = value;
}

fn store<T: Element>(elems: &mut [T], dst: usize, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
    let value = value.downcast::<T>()?;
    elems[dst] = *value;
    Ok(())
}

macro_rules! impl_sequence_body {
    () => {
        fn elem_kind(&self) -> Kind {
            T::KIND
        }

        fn len(&self) -> usize {
            self[..].len()
        }

        fn index(&self, i: usize) -> Value<'_> {
            self[i].value()
        }

        fn interface(&self, i: usize) -> Box<dyn Any> {
            stage(&self[..], i)
        }

        fn set(&mut self, dst: usize, src: usize) {
            copy(&mut self[..], dst, src)
        }

        fn set_interface(&mut self, dst: usize, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
            store(&mut self[..], dst, value)
        }
    };
}

impl<T: Element> ReflectSequence for Vec<T> {
    impl_sequence_body!();
}

impl<T: Element, const N: usize> ReflectSequence for [T; N] {
    impl_sequence_body!();
}

/// A borrowed slice seen through [`ReflectSequence`]
#[derive(Debug)]
pub struct SliceView<'a, T>(pub &'a mut [T]);

impl<T: Element> ReflectSequence for SliceView<'_, T> {
    fn elem_kind(&self) -> Kind {
        T::KIND
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn index(&self, i: usize) -> Value<'_> {
        self.0[i].value()
    }

    fn interface(&self, i: usize) -> Box<dyn Any> {
        stage(self.0, i)
    }

    fn set(&mut self, dst: usize, src: usize) {
        copy(self.0, dst, src)
    }

    fn set_interface(&mut self, dst: usize, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        store(self.0, dst, value)
    }
}

impl<T: Element> Reflect for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Slice
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_sequence_mut(&mut self) -> Option<&mut dyn ReflectSequence> {
        Some(self)
    }
}

impl<T: Element, const N: usize> Reflect for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Array
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_sequence_mut(&mut self) -> Option<&mut dyn ReflectSequence> {
        Some(self)
    }
}

macro_rules! impl_scalar_reflect {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    <$ty as Element>::KIND
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn Any {
                    self
                }
            }
        )*
    };
}

impl_scalar_reflect!(
    isize,
    i8,
    i16,
    i32,
    i64,
    usize,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    bool,
    String,
    Complex<f32>,
    Complex<f64>,
);

/// Make a single-field tuple struct sortable through the reflective path.
///
/// The named type takes on the representation of its field:
///
/// ```ignore
/// #[derive(Clone)]
/// struct Name(String);
/// sortslice::named_element!(Name(String));
/// ```
#[macro_export]
macro_rules! named_element {
    ($($name:ident($inner:ty)),* $(,)?) => {
        $(
            impl $crate::reflect::Element for $name {
                const KIND: $crate::reflect::Kind =
                    <$inner as $crate::reflect::Element>::KIND;

                #[inline]
                fn value(&self) -> $crate::reflect::Value<'_> {
                    $crate::reflect::Element::value(&self.0)
                }
            }

            impl $crate::reflect::Reflect for $name {
                fn kind(&self) -> $crate::reflect::Kind {
                    <Self as $crate::reflect::Element>::KIND
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                    self
                }
            }
        )*
    };
}
