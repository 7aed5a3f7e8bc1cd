//! Building a [`Syscall`] from raw registers, in two phases.
//!
//! At the enter-stop, arguments are decoded in order until the first one the kernel
//! writes to; that one is left [`ArgSlot::Unmaterialized`], and decoding stops, since
//! its extent (and every argument after it) may depend on what the call does. At the
//! exit-stop the remaining arguments and the return value are decoded, and any catalog
//! [`Modifier`](crate::catalog::Modifier) is applied.

use tracing::{debug, trace};

use crate::annotate;
use crate::arg::{Arg, ArgSlot, ScalarKind};
use crate::catalog::{ArgDescriptor, Catalog, Entry, LengthSource, ModifierInput};
use crate::memory::Memory;
use crate::syscall::{RawSyscall, Syscall};
use crate::types::{self, Extent, Input};

const RAW_NAMES: [&str; 6] = ["arg0", "arg1", "arg2", "arg3", "arg4", "arg5"];

/// Argument names that hold a filesystem path.
const PATH_ARGS: &[&str] = &[
    "filename",
    "pathname",
    "path",
    "oldname",
    "newname",
    "oldpath",
    "newpath",
    "from_pathname",
    "to_pathname",
    "library",
    "new_root",
    "put_old",
    "source",
    "target",
    "special",
];

/// Argument names that hold a descriptor which may resolve to a path.
const FD_ARGS: &[&str] = &[
    "fd", "dfd", "dirfd", "olddfd", "newdfd", "oldfd", "newfd", "fd_in", "fd_out", "in_fd",
    "out_fd", "from_dfd", "to_dfd",
];

/// Decode a syscall at its enter-stop.
pub fn enter(catalog: &Catalog, raw: &RawSyscall, memory: &dyn Memory) -> Syscall {
    let entry = catalog.lookup(raw.number);

    let mut syscall = Syscall {
        number: raw.number,
        entry,
        raw: raw.args,
        raw_ret: None,
        args: vec![],
        ret: None,
        paths: vec![],
        complete: false,
    };

    match entry {
        Some(entry) => {
            decode_args(entry, &raw.args, None, &mut syscall.args, memory);
        },
        None => {
            debug!(number = raw.number, "syscall missing from catalog");
            syscall.args = unknown_args(&raw.args);
        },
    }

    syscall.paths = paths(&syscall.args);

    syscall
}

/// Complete a syscall at its exit-stop, given the value of the return register.
///
/// Arguments already decoded at the enter-stop are kept as they are. Completing an
/// already-complete call does nothing.
pub fn exit(syscall: &mut Syscall, ret: u64, memory: &dyn Memory) {
    if syscall.complete {
        return;
    }

    syscall.raw_ret = Some(ret);

    match syscall.entry {
        Some(entry) => {
            let raw = syscall.raw;

            decode_args(entry, &raw, Some(ret), &mut syscall.args, memory);

            if let Some(modifier) = entry.modifier {
                let input = ModifierInput {
                    args: &syscall.args,
                    raw: &raw,
                    memory,
                };
                let rewritten = (modifier.rewrite)(&input);

                trace!(name = entry.name, from = modifier.from, count = rewritten.len(), "applying modifier");

                syscall.args.truncate(modifier.from);
                syscall.args.extend(rewritten.into_iter().map(ArgSlot::Known));
            }

            let mut value = types::handle(entry.ret.ty, &Input::new("ret", ret), memory);
            if let Some(hook) = entry.ret.annotate {
                hook(&mut value, memory.pid());
            }
            syscall.ret = Some(value);
        },
        None => {
            syscall.ret = Some(Arg::scalar("ret", ret, ScalarKind::Unknown));
        },
    }

    syscall.paths = paths(&syscall.args);
    syscall.complete = true;
}

/// Decode both phases at once, e.g. from a captured snapshot.
pub fn decode(catalog: &Catalog, raw: &RawSyscall, memory: &dyn Memory) -> Syscall {
    let mut syscall = enter(catalog, raw, memory);
    exit(&mut syscall, raw.ret, memory);
    syscall
}

// Fill `slots` in descriptor order. `ret` is `None` at the enter-stop.
fn decode_args(
    entry: &Entry,
    raw: &[u64; 6],
    ret: Option<u64>,
    slots: &mut Vec<ArgSlot>,
    memory: &dyn Memory,
) {
    let at_exit = ret.is_some();

    for (i, desc) in entry.args.iter().enumerate() {
        if slots.get(i).map(ArgSlot::is_known).unwrap_or(false) {
            continue;
        }

        let slot = if desc.destination && !at_exit {
            ArgSlot::Unmaterialized {
                name: desc.name,
                raw: raw[i],
            }
        } else {
            ArgSlot::Known(decode_arg(desc, i, raw, ret, memory))
        };

        let pending = !slot.is_known();

        if i < slots.len() {
            slots[i] = slot;
        } else {
            slots.push(slot);
        }

        if pending {
            return;
        }
    }

    trim_optional(entry, slots);
}

fn decode_arg(
    desc: &ArgDescriptor,
    index: usize,
    raw: &[u64; 6],
    ret: Option<u64>,
    memory: &dyn Memory,
) -> Arg {
    let input = Input {
        name: desc.name,
        raw: raw[index],
        following: raw.get(index + 1).copied().unwrap_or(0),
        preceding: index.checked_sub(1).map(|i| raw[i]).unwrap_or(0),
        ret,
        extent: extent(desc, index, raw, ret, memory),
        destination: desc.destination,
    };

    let mut arg = types::handle(desc.ty, &input, memory);

    if let Some(hook) = desc.annotate {
        hook(&mut arg, memory.pid());
    }

    arg
}

fn extent(
    desc: &ArgDescriptor,
    index: usize,
    raw: &[u64; 6],
    ret: Option<u64>,
    memory: &dyn Memory,
) -> Extent {
    let following = raw.get(index + 1).copied();

    match desc.len {
        LengthSource::None => Extent::Unknown,
        LengthSource::Preceding => match index.checked_sub(1) {
            Some(i) => Extent::Known(raw[i] as usize),
            None => Extent::Unknown,
        },
        LengthSource::Following => match following {
            Some(len) => Extent::Known(len as usize),
            None => Extent::Unknown,
        },
        LengthSource::FollowingDereferenced => {
            let len = match following {
                Some(0) | None => 0,
                Some(addr) => memory.read_u32(addr).unwrap_or(0),
            };
            Extent::Known(len as usize)
        },
        LengthSource::ReturnValue => match ret {
            Some(ret) if (ret as i64) >= 0 => Extent::Known(ret as usize),
            _ => Extent::Unknown,
        },
        LengthSource::Fixed => Extent::Known(desc.count),
        LengthSource::NullTerminator => Extent::Terminated,
    }
}

// Drop trailing optional arguments the caller left zero.
fn trim_optional(entry: &Entry, slots: &mut Vec<ArgSlot>) {
    while let Some(last) = slots.last() {
        let index = slots.len() - 1;

        let optional = entry
            .args
            .get(index)
            .map(|desc| desc.optional)
            .unwrap_or(false);

        if !optional || last.raw() != 0 {
            break;
        }

        slots.pop();
    }
}

fn unknown_args(raw: &[u64; 6]) -> Vec<ArgSlot> {
    raw.iter()
        .zip(RAW_NAMES)
        .map(|(raw, name)| ArgSlot::Known(Arg::scalar(name, *raw, ScalarKind::Unknown)))
        .collect()
}

fn paths(slots: &[ArgSlot]) -> Vec<String> {
    let mut paths: Vec<String> = vec![];

    for arg in slots.iter().filter_map(ArgSlot::known) {
        let name = arg.name();

        if !PATH_ARGS.contains(&name) && !FD_ARGS.contains(&name) {
            continue;
        }

        if let Some(path) = annotate::path_of(arg) {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::arg::Value;
    use crate::memory::MemoryImage;
    use crate::ptracer::Pid;

    fn image() -> MemoryImage {
        MemoryImage::new(Pid::from_raw(1))
    }

    fn raw(number: u64, args: [u64; 6]) -> RawSyscall {
        RawSyscall { number, args, ret: 0 }
    }

    fn known(slot: &ArgSlot) -> &Arg {
        slot.known().unwrap()
    }

    #[test]
    fn test_write() {
        let catalog = Catalog::x86_64();
        let mem = image().with(0x1000, &b"hi there"[..]);

        let mut call = enter(&catalog, &raw(1, [1, 0x1000, 2, 0, 0, 0]), &mem);

        assert_eq!(call.name(), "write");
        assert_eq!(call.args().len(), 3);
        assert_eq!(known(&call.args()[0]).int(), 1);
        assert_eq!(known(&call.args()[1]).data(), Some(&b"hi"[..]));
        assert_eq!(known(&call.args()[2]).raw(), 2);
        assert!(call.ret().is_none());

        exit(&mut call, 2, &mem);

        let ret = call.ret().unwrap();
        assert!(call.is_complete());
        assert!(!ret.is_error());
        assert_eq!(ret.int(), 2);
    }

    #[test]
    fn test_read_buffer_is_decoded_at_exit() {
        let catalog = Catalog::x86_64();
        let mut mem = image();

        let mut call = enter(&catalog, &raw(0, [3, 0x1000, 64, 0, 0, 0]), &mem);

        assert_eq!(call.args().len(), 2);
        assert_eq!(
            call.args()[1],
            ArgSlot::Unmaterialized { name: "buf", raw: 0x1000 },
        );

        // The kernel fills the buffer during the call.
        mem.insert(0x1000, &b"hello, world"[..]);
        exit(&mut call, 5, &mem);

        assert_eq!(call.args().len(), 3);
        assert!(call.args().iter().all(ArgSlot::is_known));
        assert_eq!(known(&call.args()[1]).data(), Some(&b"hello"[..]));
        assert_eq!(known(&call.args()[2]).raw(), 64);
    }

    #[test]
    fn test_failed_read_leaves_buffer_unread() {
        let catalog = Catalog::x86_64();
        let mem = image().with(0x1000, &b"stale"[..]);

        let call = decode(&catalog, &RawSyscall {
            number: 0,
            args: [3, 0x1000, 64, 0, 0, 0],
            ret: -(libc::EBADF as i64) as u64,
        }, &mem);

        let buf = known(&call.args()[1]);
        assert_eq!(buf.kind(), Some(ScalarKind::Address));
        assert!(call.failed());
        assert_eq!(call.ret().unwrap().annotation(), Some("EBADF (Bad file descriptor)"));
    }

    #[test]
    fn test_unknown_syscall() {
        let catalog = Catalog::x86_64();
        let mem = image();
        let args = [1, 2, 3, 4, 5, 6];

        let mut call = enter(&catalog, &raw(9999, args), &mem);

        assert!(call.is_unknown());
        assert_eq!(call.name(), "unknown");
        assert_eq!(call.args().len(), 6);

        let raws: Vec<u64> = call.args().iter().map(ArgSlot::raw).collect();
        assert_eq!(raws, args.to_vec());
        assert!(call.args().iter().all(|a| known(a).annotation().is_none()));

        exit(&mut call, 7, &mem);

        assert!(call.is_complete());
        assert_eq!(call.ret().unwrap().raw(), 7);
        assert_eq!(call.ret().unwrap().kind(), Some(ScalarKind::Unknown));
    }

    #[test]
    fn test_fcntl_modifier_runs_at_exit_only() {
        let catalog = Catalog::x86_64();
        let mem = image();
        let args = [3, libc::F_SETFL as u64, libc::O_APPEND as u64, 0, 0, 0];

        let mut call = enter(&catalog, &raw(72, args), &mem);

        assert_eq!(known(&call.args()[2]).kind(), Some(ScalarKind::Address));

        exit(&mut call, 0, &mem);

        let arg = known(&call.args()[2]);
        assert_eq!(call.args().len(), 3);
        assert_eq!(arg.kind(), Some(ScalarKind::Int));
        assert_eq!(arg.annotation(), Some("O_RDONLY|O_APPEND"));
        assert_eq!(known(&call.args()[1]).annotation(), Some("F_SETFL"));

        // A second completion must not apply the rewrite again.
        exit(&mut call, 0, &mem);
        assert_eq!(call.args().len(), 3);
    }

    #[test]
    fn test_fcntl_modifier_drops_unused_argument() {
        let catalog = Catalog::x86_64();
        let args = [3, libc::F_GETFL as u64, 0xdead, 0, 0, 0];

        let call = decode(&catalog, &raw(72, args), &image());

        assert_eq!(call.args().len(), 2);
    }

    #[test]
    fn test_trailing_optional_arguments_are_trimmed() {
        let catalog = Catalog::x86_64();
        let mem = image().with(0x1000, &b"/etc/hosts\0"[..]);
        let at_fdcwd = libc::AT_FDCWD as i64 as u64;

        // openat(AT_FDCWD, "/etc/hosts", O_RDONLY), `mode` unset.
        let call = enter(&catalog, &raw(257, [at_fdcwd, 0x1000, 0, 0, 0, 0]), &mem);
        assert_eq!(call.args().len(), 3);

        let call = enter(&catalog, &raw(257, [at_fdcwd, 0x1000, 0o100, 0o644, 0, 0]), &mem);
        assert_eq!(call.args().len(), 4);
        assert_eq!(known(&call.args()[3]).raw(), 0o644);
    }

    #[test]
    fn test_length_from_dereferenced_cell() {
        let catalog = Catalog::x86_64();

        let mut addr = vec![0; 16];
        addr[..2].copy_from_slice(&(libc::AF_INET as u16).to_le_bytes());
        addr[2..4].copy_from_slice(&8080u16.to_be_bytes());

        let mem = image()
            .with(0x1000, addr)
            .with(0x2000, 16u32.to_le_bytes().to_vec());

        // accept(3, &addr, &addrlen)
        let call = decode(&catalog, &RawSyscall {
            number: 43,
            args: [3, 0x1000, 0x2000, 0, 0, 0],
            ret: 4,
        }, &mem);

        let addr = known(&call.args()[1]).object_value().unwrap();
        assert_eq!(addr.name, "sockaddr_in");
        assert_eq!(addr.field("sin_port").unwrap().raw(), 8080);
        assert_eq!(known(&call.args()[2]).raw(), 16);
    }

    #[test]
    fn test_pipe_fds_are_an_array() {
        let catalog = Catalog::x86_64();

        let mut fds = 3i32.to_le_bytes().to_vec();
        fds.extend_from_slice(&4i32.to_le_bytes());
        let mem = image().with(0x1000, fds);

        let call = decode(&catalog, &raw(22, [0x1000, 0, 0, 0, 0, 0]), &mem);

        match known(&call.args()[0]).value() {
            Value::Array(items) => {
                let fds: Vec<i64> = items.iter().map(Arg::int).collect();
                assert_eq!(fds, vec![3, 4]);
            },
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn test_paths() {
        let catalog = Catalog::x86_64();
        let mem = image()
            .with(0x1000, &b"/tmp/a\0"[..])
            .with(0x2000, &b"/tmp/b\0"[..]);

        // rename("/tmp/a", "/tmp/b")
        let call = decode(&catalog, &raw(82, [0x1000, 0x2000, 0, 0, 0, 0]), &mem);

        assert_eq!(call.paths(), &["/tmp/a".to_string(), "/tmp/b".to_string()]);
    }

    #[test]
    fn test_empty_catalog_decodes_everything_as_unknown() {
        let call = decode(&Catalog::empty(), &raw(0, [0; 6]), &image());

        assert!(call.is_unknown());
        assert_eq!(call.args().len(), 6);
    }
}
