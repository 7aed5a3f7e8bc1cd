use crate::annotate;
use crate::arg::{Arg, ScalarKind};
use crate::error::Result;
use crate::memory::Memory;

use super::{Extent, Input, MAX_DATA, MAX_ITEMS};

const FD_SETSIZE: usize = 1024;

pub(super) fn data(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let data = match input.extent {
        Extent::Known(len) => mem.read(input.raw, len.min(MAX_DATA))?,
        Extent::Terminated => mem.read_cstring(input.raw)?,
        Extent::Unknown => return Ok(Arg::address(input.name, input.raw)),
    };

    Ok(Arg::bytes(input.name, input.raw, data))
}

pub(super) fn string(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let data = mem.read_cstring(input.raw)?;
    Ok(Arg::bytes(input.name, input.raw, data))
}

pub(super) fn string_array(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let mut items = vec![];

    for i in 0..MAX_ITEMS {
        let slot = match input.raw.checked_add(8 * i as u64) {
            Some(slot) => slot,
            None => break,
        };
        let addr = mem.read_u64(slot)?;

        if addr == 0 {
            break;
        }

        let item = match mem.read_cstring(addr) {
            Ok(data) => Arg::bytes("", addr, data),
            Err(_) => Arg::address("", addr),
        };
        items.push(item);
    }

    Ok(Arg::array(input.name, input.raw, items))
}

pub(super) fn int_array(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let count = match input.extent.known() {
        Some(count) => count.min(MAX_ITEMS),
        None => return Ok(Arg::address(input.name, input.raw)),
    };

    let bytes = mem.read(input.raw, 4 * count)?;
    let items = bytes
        .chunks_exact(4)
        .map(|b| {
            let value = i32::from_le_bytes([b[0], b[1], b[2], b[3]]);
            Arg::scalar("", value as i64 as u64, ScalarKind::Int)
        })
        .collect();

    Ok(Arg::array(input.name, input.raw, items))
}

// The value replaces the pointer: the cell is what a reader wants to see.
pub(super) fn uint_ptr(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let value = mem.read_u32(input.raw)?;
    Ok(Arg::scalar(input.name, value as u64, ScalarKind::UnsignedInt))
}

pub(super) fn uint64_ptr(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let value = mem.read_u64(input.raw)?;
    Ok(Arg::scalar(input.name, value, ScalarKind::UnsignedLong))
}

pub(super) fn sockoptval(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let len = match input.extent.known() {
        Some(len) => len,
        None => return Ok(Arg::address(input.name, input.raw)),
    };

    // Most options are a plain `int`.
    if len == 4 {
        let value = mem.read_u32(input.raw)?;
        return Ok(Arg::scalar(input.name, value as i32 as i64 as u64, ScalarKind::Int));
    }

    let data = mem.read(input.raw, len.min(MAX_DATA))?;
    Ok(Arg::bytes(input.name, input.raw, data))
}

pub(super) fn wait_status(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let status = mem.read_u32(input.raw)?;
    Ok(Arg::scalar(input.name, status as u64, ScalarKind::UnsignedInt))
}

/// The set bits of an `fd_set`, as annotated descriptors.
pub(super) fn fd_set(input: &Input, mem: &dyn Memory) -> Result<Arg> {
    let bytes = mem.read(input.raw, FD_SETSIZE / 8)?;

    let items = (0..8 * bytes.len())
        .filter(|fd| bytes[fd / 8] & (1 << (fd % 8)) != 0)
        .map(|fd| {
            let mut arg = Arg::scalar("fd", fd as u64, ScalarKind::Int);
            annotate::fd(&mut arg, mem.pid());
            arg
        })
        .collect();

    Ok(Arg::array(input.name, input.raw, items))
}

#[cfg(test)]
mod tests {
    use crate::memory::MemoryImage;
    use crate::ptracer::Pid;
    use crate::types::{handle, ArgType, Extent, Input};

    fn image() -> MemoryImage {
        MemoryImage::new(Pid::from_raw(1))
    }

    #[test]
    fn test_data_with_known_length() {
        let mem = image().with(0x1000, &b"hello world"[..]);
        let input = Input {
            extent: Extent::Known(5),
            ..Input::new("buf", 0x1000)
        };

        let arg = handle(ArgType::Data, &input, &mem);

        assert_eq!(arg.data(), Some(&b"hello"[..]));
        assert_eq!(arg.raw(), 0x1000);
    }

    #[test]
    fn test_data_with_unknown_length_is_not_read() {
        let mem = image().with(0x1000, &b"hello world"[..]);

        let arg = handle(ArgType::Data, &Input::new("buf", 0x1000), &mem);

        assert_eq!(arg.data(), None);
        assert_eq!(arg.raw(), 0x1000);
    }

    #[test]
    fn test_string_array() {
        let mut argv = vec![];
        for addr in [0x2000u64, 0x2003, 0] {
            argv.extend_from_slice(&addr.to_le_bytes());
        }
        let mem = image()
            .with(0x1000, argv)
            .with(0x2000, &b"ls\0-l\0"[..]);

        let arg = handle(ArgType::StringArray, &Input::new("argv", 0x1000), &mem);
        let items = arg.items().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].data(), Some(&b"ls"[..]));
        assert_eq!(items[1].data(), Some(&b"-l"[..]));
    }

    #[test]
    fn test_string_array_at_top_of_address_space() {
        let base = u64::MAX - 7;
        let mem = image()
            .with(base, 0x2000u64.to_le_bytes().to_vec())
            .with(0x2000, &b"ls\0"[..]);

        let arg = handle(ArgType::StringArray, &Input::new("argv", base), &mem);
        let items = arg.items().unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].data(), Some(&b"ls"[..]));
    }

    #[test]
    fn test_int_array() {
        let mut fds = vec![];
        for fd in [3i32, -1] {
            fds.extend_from_slice(&fd.to_le_bytes());
        }
        let mem = image().with(0x1000, fds);
        let input = Input {
            extent: Extent::Known(2),
            ..Input::new("pipefd", 0x1000)
        };

        let arg = handle(ArgType::IntArray, &input, &mem);
        let items = arg.items().unwrap();

        assert_eq!(items[0].int(), 3);
        assert_eq!(items[1].int(), -1);
    }

    #[test]
    fn test_uint_ptr_reads_the_pointee() {
        let mem = image().with(0x1000, 16u32.to_le_bytes().to_vec());

        let arg = handle(ArgType::UnsignedIntPtr, &Input::new("addrlen", 0x1000), &mem);

        assert_eq!(arg.raw(), 16);
    }

    #[test]
    fn test_sockoptval() {
        let mem = image()
            .with(0x1000, 1u32.to_le_bytes().to_vec())
            .with(0x2000, vec![7; 16]);

        let int = Input {
            extent: Extent::Known(4),
            ..Input::new("optval", 0x1000)
        };
        assert_eq!(handle(ArgType::Sockoptval, &int, &mem).int(), 1);

        let blob = Input {
            extent: Extent::Known(16),
            ..Input::new("optval", 0x2000)
        };
        assert_eq!(handle(ArgType::Sockoptval, &blob, &mem).data(), Some(&[7; 16][..]));
    }

    #[test]
    fn test_fd_set() {
        let mut bits = vec![0u8; 128];
        bits[0] = 0b0000_1001;
        bits[1] = 0b0000_0001;
        let mem = image().with(0x1000, bits);

        let arg = handle(ArgType::FdSet, &Input::new("readfds", 0x1000), &mem);
        let fds: Vec<i64> = arg.items().unwrap().iter().map(|a| a.int()).collect();

        assert_eq!(fds, vec![0, 3, 8]);
    }
}
