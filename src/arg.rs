//! Materialized syscall arguments.
//!
//! An [`Arg`] is the decoded form of one raw register (or one field of a decoded kernel
//! record). Its [`Value`] is either a scalar interpreted from the raw word, bytes read
//! from the tracee, a nested [`Object`], or an array of further arguments.

use std::fmt;

/// How a raw scalar word is to be interpreted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScalarKind {
    /// No type information, e.g. the registers of a syscall missing from the catalog.
    Unknown,

    /// A C `int`. Only the low 32 bits are meaningful.
    Int,

    /// A C `long`.
    Long,

    UnsignedInt,
    UnsignedLong,

    /// A pointer into the tracee's address space.
    Address,

    /// A negated `errno` value (or zero for success).
    ErrorCode,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Scalar(ScalarKind),
    Bytes(Vec<u8>),
    Object(Object),
    Array(Vec<Arg>),
}

/// One decoded kernel record, e.g. a `struct stat`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Object {
    pub name: &'static str,
    pub fields: Vec<Arg>,
}

impl Object {
    pub fn new(name: &'static str, fields: Vec<Arg>) -> Self {
        Self { name, fields }
    }

    pub fn field(&self, name: &str) -> Option<&Arg> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Arg> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Arg {
    name: &'static str,
    raw: u64,
    value: Value,
    annotation: Option<String>,
    replace: bool,
}

impl Arg {
    pub fn new(name: &'static str, raw: u64, value: Value) -> Self {
        Self {
            name,
            raw,
            value,
            annotation: None,
            replace: false,
        }
    }

    pub fn scalar(name: &'static str, raw: u64, kind: ScalarKind) -> Self {
        Self::new(name, raw, Value::Scalar(kind))
    }

    pub fn bytes(name: &'static str, raw: u64, data: impl Into<Vec<u8>>) -> Self {
        Self::new(name, raw, Value::Bytes(data.into()))
    }

    pub fn object(name: &'static str, raw: u64, object: Object) -> Self {
        Self::new(name, raw, Value::Object(object))
    }

    pub fn array(name: &'static str, raw: u64, items: Vec<Arg>) -> Self {
        Self::new(name, raw, Value::Array(items))
    }

    /// A pointer argument whose target was not (or could not be) read.
    pub fn address(name: &'static str, raw: u64) -> Self {
        let mut arg = Self::scalar(name, raw, ScalarKind::Address);

        if raw == 0 {
            arg.set_annotation("NULL", true);
        }

        arg
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn raw(&self) -> u64 {
        self.raw
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn kind(&self) -> Option<ScalarKind> {
        match self.value {
            Value::Scalar(kind) => Some(kind),
            _ => None,
        }
    }

    /// Signed interpretation of the raw word, honoring the width of its scalar kind.
    pub fn int(&self) -> i64 {
        match self.value {
            Value::Scalar(ScalarKind::Int | ScalarKind::Unknown) => self.raw as u32 as i32 as i64,
            Value::Scalar(ScalarKind::UnsignedInt) => self.raw as u32 as i64,
            _ => self.raw as i64,
        }
    }

    /// True for a scalar carrying a negated `errno`.
    pub fn is_error(&self) -> bool {
        self.kind() == Some(ScalarKind::ErrorCode) && (self.raw as i64) < 0
    }

    pub fn data(&self) -> Option<&[u8]> {
        match &self.value {
            Value::Bytes(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut Vec<u8>> {
        match &mut self.value {
            Value::Bytes(data) => Some(data),
            _ => None,
        }
    }

    pub fn object_value(&self) -> Option<&Object> {
        match &self.value {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[Arg]> {
        match &self.value {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn items_mut(&mut self) -> Option<&mut Vec<Arg>> {
        match &mut self.value {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Whether a printer should show the annotation in place of the raw value.
    pub fn replace_with_annotation(&self) -> bool {
        self.replace && self.annotation.is_some()
    }

    pub fn set_annotation(&mut self, annotation: impl Into<String>, replace: bool) {
        let annotation = annotation.into();

        if annotation.is_empty() {
            self.annotation = None;
            self.replace = false;
        } else {
            self.annotation = Some(annotation);
            self.replace = replace;
        }
    }

    pub(crate) fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub(crate) fn with_annotation(mut self, annotation: impl Into<String>, replace: bool) -> Self {
        self.set_annotation(annotation, replace);
        self
    }

    pub(crate) fn set_kind(&mut self, kind: ScalarKind) {
        self.value = Value::Scalar(kind);
    }
}

/// An argument slot of an in-flight syscall.
///
/// Destination arguments are written by the kernel, so they stay `Unmaterialized` from
/// the syscall-enter-stop until the matching syscall-exit-stop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArgSlot {
    Unmaterialized { name: &'static str, raw: u64 },
    Known(Arg),
}

impl ArgSlot {
    pub fn name(&self) -> &'static str {
        match self {
            ArgSlot::Unmaterialized { name, .. } => name,
            ArgSlot::Known(arg) => arg.name(),
        }
    }

    pub fn raw(&self) -> u64 {
        match self {
            ArgSlot::Unmaterialized { raw, .. } => *raw,
            ArgSlot::Known(arg) => arg.raw(),
        }
    }

    pub fn known(&self) -> Option<&Arg> {
        match self {
            ArgSlot::Known(arg) => Some(arg),
            ArgSlot::Unmaterialized { .. } => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ArgSlot::Known(_))
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.replace_with_annotation() {
            if let Some(annotation) = &self.annotation {
                return write!(f, "{annotation}");
            }
        }

        match &self.value {
            Value::Scalar(ScalarKind::Address) => write!(f, "{:#x}", self.raw)?,
            Value::Scalar(ScalarKind::UnsignedInt | ScalarKind::UnsignedLong) => {
                write!(f, "{}", self.raw)?
            }
            Value::Scalar(ScalarKind::Long | ScalarKind::ErrorCode) => write!(f, "{}", self.raw as i64)?,
            Value::Scalar(_) => write!(f, "{}", self.int())?,
            Value::Bytes(data) => write!(f, "{:?}", String::from_utf8_lossy(data))?,
            Value::Object(object) => {
                write!(f, "{{")?;
                for (i, field) in object.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", field.name, field)?;
                }
                write!(f, "}}")?;
            },
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")?;
            },
        }

        if let Some(annotation) = &self.annotation {
            write!(f, " /* {annotation} */")?;
        }

        Ok(())
    }
}

impl fmt::Display for ArgSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgSlot::Unmaterialized { raw, .. } => write!(f, "{raw:#x}"),
            ArgSlot::Known(arg) => write!(f, "{arg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_honors_scalar_width() {
        let fd = Arg::scalar("fd", 0xffff_ffff_ffff_ff9c, ScalarKind::Int);
        assert_eq!(fd.int(), -100);

        let upper_garbage = Arg::scalar("fd", 0xdead_0000_0000_0003, ScalarKind::Int);
        assert_eq!(upper_garbage.int(), 3);

        let long = Arg::scalar("offset", -5i64 as u64, ScalarKind::Long);
        assert_eq!(long.int(), -5);
    }

    #[test]
    fn test_error_code_only_when_negative() {
        let ok = Arg::scalar("", 0, ScalarKind::ErrorCode);
        assert!(!ok.is_error());

        let enoent = Arg::scalar("", -2i64 as u64, ScalarKind::ErrorCode);
        assert!(enoent.is_error());

        let int = Arg::scalar("", -2i64 as u64, ScalarKind::Int);
        assert!(!int.is_error());
    }

    #[test]
    fn test_empty_annotation_clears_replace() {
        let mut arg = Arg::scalar("flags", 0, ScalarKind::Int);
        arg.set_annotation("", true);

        assert_eq!(arg.annotation(), None);
        assert!(!arg.replace_with_annotation());
    }

    #[test]
    fn test_display() {
        let null = Arg::address("buf", 0);
        assert_eq!(null.to_string(), "NULL");

        let data = Arg::bytes("buf", 0x1000, &b"hi\n"[..]);
        assert_eq!(data.to_string(), "\"hi\\n\"");

        let object = Arg::object("ts", 0x2000, Object::new("timespec", vec![
            Arg::scalar("sec", 1, ScalarKind::Long),
            Arg::scalar("nsec", 2, ScalarKind::Long),
        ]));
        assert_eq!(object.to_string(), "{sec=1, nsec=2}");
    }
}
