//! Trace a Linux process and decode each of its syscalls into typed arguments.

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "x86_64")]
mod x86;

mod interrupt;

pub mod annotate;
pub mod arg;
pub mod catalog;
pub mod cmd;
pub mod error;
pub mod materialize;
pub mod memory;
pub mod ptracer;
pub mod record;
pub mod syscall;
pub mod types;

pub use arg::{Arg, ArgSlot, Object, ScalarKind, Value};
pub use catalog::Catalog;
pub use cmd::Command;
pub use error::{Error, Result};
pub use ptracer::{Exit, Pid, Registers, Signal, Target, TraceOptions, Tracer};
pub use syscall::{RawSyscall, Syscall};
pub use types::ArgType;

/// Decode the registers of a syscall-stop.
#[cfg(target_arch = "x86_64")]
pub use x86::decode as decode_registers;

/// Decode the registers of a syscall-stop.
#[cfg(target_arch = "aarch64")]
pub use aarch64::decode as decode_registers;
