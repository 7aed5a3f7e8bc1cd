//! The static table describing every syscall we know how to decode.

#[cfg(target_arch = "aarch64")]
mod aarch64;
mod x86_64;

use crate::annotate::Annotator;
use crate::arg::{Arg, ArgSlot};
use crate::memory::Memory;
use crate::types::ArgType;

/// Where an argument's true byte length (or element count) comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LengthSource {
    None,

    /// The raw value of the previous argument.
    Preceding,

    /// The raw value of the next argument.
    Following,

    /// A 32-bit length cell pointed to by the next argument, e.g. `socklen_t *addrlen`.
    FollowingDereferenced,

    /// The syscall's return value. Only known at the exit-stop.
    ReturnValue,

    /// The descriptor's `count`.
    Fixed,

    /// A terminating NUL byte.
    NullTerminator,
}

#[derive(Clone, Copy, Debug)]
pub struct ArgDescriptor {
    pub name: &'static str,
    pub ty: ArgType,
    pub len: LengthSource,

    /// Element count for [`LengthSource::Fixed`].
    pub count: usize,

    /// Written by the kernel, so only meaningful at the exit-stop.
    pub destination: bool,

    /// Omitted from the decoded call when its raw value is zero and no later argument
    /// is reported.
    pub optional: bool,

    pub annotate: Option<Annotator>,
}

/// Start describing an argument. Refined with the builder methods below.
pub const fn arg(name: &'static str, ty: ArgType) -> ArgDescriptor {
    ArgDescriptor {
        name,
        ty,
        len: LengthSource::None,
        count: 0,
        destination: false,
        optional: false,
        annotate: None,
    }
}

impl ArgDescriptor {
    pub const fn len(mut self, len: LengthSource) -> Self {
        self.len = len;
        self
    }

    pub const fn fixed(mut self, count: usize) -> Self {
        self.len = LengthSource::Fixed;
        self.count = count;
        self
    }

    pub const fn destination(mut self) -> Self {
        self.destination = true;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub const fn annotate(mut self, hook: Annotator) -> Self {
        self.annotate = Some(hook);
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ReturnDescriptor {
    pub ty: ArgType,
    pub annotate: Option<Annotator>,
}

pub const fn ret(ty: ArgType) -> ReturnDescriptor {
    ReturnDescriptor { ty, annotate: None }
}

impl ReturnDescriptor {
    pub const fn annotate(mut self, hook: Annotator) -> Self {
        self.annotate = Some(hook);
        self
    }
}

/// What a [`Modifier`] may consult.
pub struct ModifierInput<'a> {
    /// Arguments as decoded, all known at the exit-stop.
    pub args: &'a [ArgSlot],

    pub raw: &'a [u64; 6],

    pub memory: &'a dyn Memory,
}

impl ModifierInput<'_> {
    /// Raw word of an already-decoded argument.
    pub fn arg_raw(&self, index: usize) -> Option<u64> {
        self.args.get(index).map(ArgSlot::raw)
    }
}

/// A post-decode rewrite of the argument list, for calls whose trailing arguments depend
/// on the value of an earlier one.
///
/// Runs once per call, at the exit-stop. The arguments it returns replace those at index
/// `from` and later; earlier arguments are never touched.
#[derive(Clone, Copy, Debug)]
pub struct Modifier {
    pub from: usize,
    pub rewrite: fn(&ModifierInput<'_>) -> Vec<Arg>,
}

#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub number: u64,
    pub name: &'static str,
    pub args: &'static [ArgDescriptor],
    pub ret: ReturnDescriptor,
    pub modifier: Option<Modifier>,
}

pub const fn entry(
    number: u64,
    name: &'static str,
    args: &'static [ArgDescriptor],
    ret: ReturnDescriptor,
) -> Entry {
    Entry {
        number,
        name,
        args,
        ret,
        modifier: None,
    }
}

impl Entry {
    pub const fn modifier(mut self, from: usize, rewrite: fn(&ModifierInput<'_>) -> Vec<Arg>) -> Self {
        self.modifier = Some(Modifier { from, rewrite });
        self
    }
}

/// An immutable, number-sorted syscall table for one architecture.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    entries: &'static [Entry],
}

impl Catalog {
    /// The table for the architecture this crate was built for.
    pub fn native() -> Self {
        #[cfg(target_arch = "x86_64")]
        return Self::x86_64();

        #[cfg(target_arch = "aarch64")]
        return Self::aarch64();

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        return Self::empty();
    }

    pub fn x86_64() -> Self {
        Self { entries: x86_64::ENTRIES }
    }

    #[cfg(target_arch = "aarch64")]
    pub fn aarch64() -> Self {
        Self { entries: aarch64::ENTRIES }
    }

    /// A table that knows no syscalls; every call decodes as unknown.
    pub fn empty() -> Self {
        Self { entries: &[] }
    }

    pub fn lookup(&self, number: u64) -> Option<&'static Entry> {
        let entries = self.entries;

        entries
            .binary_search_by_key(&number, |e| e.number)
            .ok()
            .map(|index| &entries[index])
    }

    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_invariants(catalog: &Catalog) {
        let entries = catalog.entries();

        for pair in entries.windows(2) {
            assert!(
                pair[0].number < pair[1].number,
                "{} ({}) is out of order or duplicated",
                pair[1].name,
                pair[1].number,
            );
        }

        for e in entries {
            assert!(!e.name.is_empty(), "syscall {} has no name", e.number);
            assert_ne!(e.ret.ty, ArgType::Unknown, "{} has no return type", e.name);
            assert!(e.args.len() <= 6, "{} has too many arguments", e.name);

            let last = e.args.len().saturating_sub(1);

            for (i, a) in e.args.iter().enumerate() {
                let at = format!("{}.{}", e.name, a.name);

                assert!(!a.name.is_empty(), "{} has an unnamed argument", e.name);

                if a.ty == ArgType::Data {
                    assert_ne!(a.len, LengthSource::None, "{} has no length source", at);
                }

                if a.ty == ArgType::String {
                    assert_eq!(a.len, LengthSource::NullTerminator, "{}", at);
                }

                match a.len {
                    LengthSource::Following | LengthSource::FollowingDereferenced => {
                        assert!(i < last, "{} reads past the last argument", at);
                    },
                    LengthSource::Preceding => {
                        assert!(i > 0, "{} reads before the first argument", at);
                    },
                    LengthSource::ReturnValue => {
                        assert!(a.destination, "{} sized by return value, but not written", at);
                    },
                    LengthSource::Fixed => {
                        assert!(a.count > 0, "{} has a zero fixed count", at);
                    },
                    LengthSource::None | LengthSource::NullTerminator => {},
                }
            }

            if let Some(modifier) = e.modifier {
                assert!(modifier.from <= e.args.len(), "{} modifier out of range", e.name);
            }
        }
    }

    #[test]
    fn test_x86_64_invariants() {
        check_invariants(&Catalog::x86_64());
    }

    #[test]
    fn test_x86_64_is_complete() {
        let catalog = Catalog::x86_64();

        for number in 0..=334 {
            assert!(catalog.lookup(number).is_some(), "missing syscall {}", number);
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::x86_64();

        assert_eq!(catalog.lookup(0).map(|e| e.name), Some("read"));
        assert_eq!(catalog.lookup(1).map(|e| e.name), Some("write"));
        assert_eq!(catalog.lookup(59).map(|e| e.name), Some("execve"));
        assert_eq!(catalog.lookup(435).map(|e| e.name), Some("clone3"));
        assert!(catalog.lookup(9999).is_none());
    }

    #[test]
    fn test_empty() {
        let catalog = Catalog::empty();

        assert!(catalog.is_empty());
        assert!(catalog.lookup(0).is_none());
    }

    #[test]
    fn test_read_buffer_waits_for_return_value() {
        let read = Catalog::x86_64().lookup(0).unwrap();
        let buf = &read.args[1];

        assert_eq!(buf.ty, ArgType::Data);
        assert_eq!(buf.len, LengthSource::ReturnValue);
        assert!(buf.destination);
    }
}
