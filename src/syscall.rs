//! Decoded syscall invocations.

use crate::arg::{Arg, ArgSlot};
use crate::catalog::Entry;

/// Call number and argument words as read from a syscall-stop's registers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RawSyscall {
    pub number: u64,
    pub args: [u64; 6],

    /// The return register. Only meaningful at a syscall-exit-stop.
    pub ret: u64,
}

impl RawSyscall {
    /// Set by the kernel when a stop is not actually inside a syscall.
    pub const NO_SYSCALL: u64 = u64::MAX;
}

/// One syscall, from its enter-stop to its exit-stop.
///
/// Created at the enter-stop and completed in place at the matching exit-stop, when the
/// arguments written by the kernel and the return value become known.
#[derive(Clone, Debug)]
pub struct Syscall {
    pub(crate) number: u64,
    pub(crate) entry: Option<&'static Entry>,
    pub(crate) raw: [u64; 6],
    pub(crate) raw_ret: Option<u64>,
    pub(crate) args: Vec<ArgSlot>,
    pub(crate) ret: Option<Arg>,
    pub(crate) paths: Vec<String>,
    pub(crate) complete: bool,
}

impl Syscall {
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The catalog name, or `"unknown"` for a call the catalog does not describe.
    pub fn name(&self) -> &'static str {
        self.entry.map(|e| e.name).unwrap_or("unknown")
    }

    pub fn entry(&self) -> Option<&'static Entry> {
        self.entry
    }

    pub fn is_unknown(&self) -> bool {
        self.entry.is_none()
    }

    /// True once the exit-stop has been decoded.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The argument registers, as read at the enter-stop.
    pub fn raw_args(&self) -> &[u64; 6] {
        &self.raw
    }

    pub fn args(&self) -> &[ArgSlot] {
        &self.args
    }

    /// An argument by name, if it has been materialized.
    pub fn arg(&self, name: &str) -> Option<&Arg> {
        self.args
            .iter()
            .filter_map(ArgSlot::known)
            .find(|a| a.name() == name)
    }

    /// The decoded return value, at the exit-stop only.
    pub fn ret(&self) -> Option<&Arg> {
        self.ret.as_ref()
    }

    pub fn raw_ret(&self) -> Option<u64> {
        self.raw_ret
    }

    /// True if the call returned a negated `errno`.
    pub fn failed(&self) -> bool {
        self.ret.as_ref().map(Arg::is_error).unwrap_or(false)
    }

    /// Filesystem paths the call refers to, as far as they could be recovered.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}
