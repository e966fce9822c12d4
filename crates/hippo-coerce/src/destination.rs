//! Runtime destination tags
//!
//! [`Destination`] describes a destination type as data, for callers that
//! only learn it at runtime (the CLI, configuration files). Each tag maps to
//! exactly one static [`Coerce`] type, so the results match [`coerce`] and
//! [`resolve`] for that type.
//!
//! Tag syntax: a [`Kind`] name (`int`), `?kind` for the optional form,
//! `kind[]` for a delimited list, or `map`.

use hippo_diagnostics::HippoError;
use hippo_types::{DateOnly, DateTime, Document, Kind};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::list::coerce_list;
use crate::resolve::resolve;
use crate::scalar::{Coerce, coerce};

/// A destination type known at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// `T`
    Scalar(Kind),
    /// `Option<T>`
    Optional(Kind),
    /// `Vec<T>`
    List(Kind),
    /// [`Document`]
    Map,
}

/// A value produced through a [`Destination`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coerced {
    Absent,
    String(String),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float(f64),
    Bool(bool),
    Date(DateOnly),
    DateTime(DateTime),
    List(Vec<Coerced>),
    Map(Document),
}

macro_rules! by_kind {
    ($kind:expr, $shape:ident($($arg:expr),*)) => {
        match $kind {
            Kind::String => $shape::<String>($($arg),*),
            Kind::Int16 => $shape::<i16>($($arg),*),
            Kind::Int32 => $shape::<i32>($($arg),*),
            Kind::Int64 => $shape::<i64>($($arg),*),
            Kind::Float => $shape::<f64>($($arg),*),
            Kind::Bool => $shape::<bool>($($arg),*),
            Kind::Date => $shape::<DateOnly>($($arg),*),
            Kind::DateTime => $shape::<DateTime>($($arg),*),
        }
    };
}

impl Destination {
    /// Coerce a raw token, as [`coerce`] would.
    pub fn coerce(&self, raw: &str) -> Coerced {
        self.run(&Raw(raw))
    }

    /// Like [`Destination::coerce`], but list destinations split on
    /// `delimiter` instead of the default `,`.
    pub fn coerce_delimited(&self, raw: &str, delimiter: &str) -> Coerced {
        match *self {
            Self::List(kind) => by_kind!(kind, split_of(raw, delimiter)),
            _ => self.coerce(raw),
        }
    }

    /// Resolve candidate keys in a document, as [`resolve`] would.
    pub fn resolve(&self, document: &Document, keys: &[&str]) -> Coerced {
        self.run(&Lookup { document, keys })
    }

    fn run<S: Source>(&self, source: &S) -> Coerced {
        match *self {
            Self::Scalar(kind) => by_kind!(kind, scalar_of(source)),
            Self::Optional(kind) => by_kind!(kind, optional_of(source)),
            Self::List(kind) => by_kind!(kind, list_of(source)),
            Self::Map => Coerced::Map(source.extract()),
        }
    }
}

/// Where a destination reads its input from
trait Source {
    fn extract<T: Coerce>(&self) -> T;
}

struct Raw<'a>(&'a str);

impl Source for Raw<'_> {
    fn extract<T: Coerce>(&self) -> T {
        coerce(self.0)
    }
}

struct Lookup<'a> {
    document: &'a Document,
    keys: &'a [&'a str],
}

impl Source for Lookup<'_> {
    fn extract<T: Coerce>(&self) -> T {
        resolve(self.document, self.keys)
    }
}

fn scalar_of<T: Coerce + Into<Coerced>>(source: &impl Source) -> Coerced {
    source.extract::<T>().into()
}

fn optional_of<T: Coerce + Into<Coerced>>(source: &impl Source) -> Coerced {
    source.extract::<Option<T>>().map_or(Coerced::Absent, Into::into)
}

fn list_of<T: Coerce + Into<Coerced>>(source: &impl Source) -> Coerced {
    into_list(source.extract::<Vec<T>>())
}

fn split_of<T: Coerce + Into<Coerced>>(raw: &str, delimiter: &str) -> Coerced {
    into_list(coerce_list::<T>(raw, delimiter))
}

fn into_list<T: Into<Coerced>>(items: Vec<T>) -> Coerced {
    Coerced::List(items.into_iter().map(Into::into).collect())
}

macro_rules! coerced_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Coerced {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

coerced_from!(
    String => String,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f64 => Float,
    bool => Bool,
    DateOnly => Date,
    DateTime => DateTime,
    Document => Map,
);

impl fmt::Display for Coerced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "<absent>"),
            Self::String(s) => write!(f, "{}", s),
            Self::Int16(i) => write!(f, "{}", i),
            Self::Int32(i) => write!(f, "{}", i),
            Self::Int64(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Date(d) => write!(f, "{}", d),
            Self::DateTime(dt) => write!(f, "{}", dt),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                let json = serde_json::to_string(map).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{}", kind),
            Self::Optional(kind) => write!(f, "?{}", kind),
            Self::List(kind) => write!(f, "{}[]", kind),
            Self::Map => write!(f, "map"),
        }
    }
}

impl FromStr for Destination {
    type Err = HippoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("map") || tag.eq_ignore_ascii_case("object") {
            return Ok(Self::Map);
        }
        let kind = |name: &str| name.parse::<Kind>().map_err(|_| HippoError::unknown_type(s));
        if let Some(inner) = tag.strip_prefix('?') {
            return kind(inner).map(Self::Optional);
        }
        if let Some(inner) = tag.strip_suffix("[]") {
            return kind(inner).map(Self::List);
        }
        kind(tag).map(Self::Scalar)
    }
}
