//! The aarch64 (generic `asm-generic/unistd.h`) table.
//!
//! Not yet populated: every call decodes as unknown, with raw registers only.

use super::Entry;

pub static ENTRIES: &[Entry] = &[];
