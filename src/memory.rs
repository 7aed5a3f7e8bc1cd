//! Reading the address space of a tracee.

use std::collections::BTreeMap;
use std::fs;
use std::os::unix::fs::FileExt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::ptracer::Pid;

/// Upper bound on a single NUL-terminated string read.
pub const MAX_STRING: usize = 4096;

const PAGE_SIZE: u64 = 4096;

/// Synchronous, bounded access to the memory of a (stopped) tracee.
///
/// Every type handler reads through this seam, so decoding can be driven from a live
/// process or from a captured [`MemoryImage`].
pub trait Memory {
    /// The process whose memory this is. Used by annotations that consult `/proc`.
    fn pid(&self) -> Pid;

    /// Read up to `len` bytes at `addr`.
    ///
    /// A zero `len` is not an error, and returns no bytes. A read that runs into an
    /// unmapped page returns the bytes before it.
    fn read(&self, addr: u64, len: usize) -> Result<Vec<u8>>;

    /// Read bytes at `addr` up to (not including) a NUL terminator.
    ///
    /// If memory becomes unreadable before a terminator is found, returns what was read.
    fn read_cstring(&self, addr: u64) -> Result<Vec<u8>> {
        let mut out = vec![];
        let mut addr = addr;

        while out.len() < MAX_STRING {
            // Never ask for bytes across a page boundary, so a fault past the end of the
            // string cannot hide the bytes before it.
            let to_page_end = (PAGE_SIZE - addr % PAGE_SIZE) as usize;
            let chunk_len = to_page_end.min(MAX_STRING - out.len()).min(64);

            let chunk = match self.read(addr, chunk_len) {
                Ok(chunk) => chunk,
                Err(err) if out.is_empty() => return Err(err),
                Err(_) => break,
            };

            if chunk.is_empty() {
                break;
            }

            if let Some(nul) = chunk.iter().position(|b| *b == 0) {
                out.extend_from_slice(&chunk[..nul]);
                return Ok(out);
            }

            out.extend_from_slice(&chunk);

            addr = match addr.checked_add(chunk.len() as u64) {
                Some(next) => next,
                None => break,
            };
        }

        Ok(out)
    }

    fn read_u32(&self, addr: u64) -> Result<u32> {
        let data = self.read_exact(addr, 4)?;
        Ok(u32::from_le_bytes([data[0], data[1], data[2], data[3]]))
    }

    fn read_u64(&self, addr: u64) -> Result<u64> {
        let data = self.read_exact(addr, 8)?;
        let mut word = [0u8; 8];
        word.copy_from_slice(&data);
        Ok(u64::from_le_bytes(word))
    }

    /// Read exactly `len` bytes, failing on a short read.
    fn read_exact(&self, addr: u64, len: usize) -> Result<Vec<u8>> {
        let data = self.read(addr, len)?;

        if data.len() < len {
            let source = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
            return Err(Error::Memory { addr, len, source });
        }

        Ok(data)
    }
}

/// Memory of a live tracee, read via `/proc/<pid>/mem`.
///
/// The tracee must be in a ptrace-stop for reads to be meaningful.
#[derive(Debug)]
pub struct ProcessMemory {
    pid: Pid,
    mem: Option<fs::File>,
}

impl ProcessMemory {
    pub fn new(pid: Pid) -> Self {
        // Opening may fail if the tracee is already gone. Reads then fail individually,
        // and handlers fall back to raw values.
        let mem = fs::File::open(proc_mem_path(pid)).ok();

        Self { pid, mem }
    }
}

fn proc_mem_path(pid: Pid) -> String {
    let tid = pid.as_raw() as u32;
    format!("/proc/{}/mem", tid)
}

impl Memory for ProcessMemory {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn read(&self, addr: u64, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Ok(vec![]);
        }

        let mem = match &self.mem {
            Some(mem) => mem,
            None => {
                let source = std::io::Error::from_raw_os_error(libc::ESRCH);
                return Err(Error::Memory { addr, len, source });
            },
        };

        let mut data = vec![0; len];
        let mut filled = 0;

        while filled < len {
            let at = match addr.checked_add(filled as u64) {
                Some(at) => at,
                None => break,
            };

            match mem.read_at(&mut data[filled..], at) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(source) if filled == 0 => {
                    return Err(Error::Memory { addr, len, source });
                },
                Err(_) => break,
            }
        }

        trace!(pid = self.pid.as_raw(), addr, len, filled, "read tracee memory");

        data.truncate(filled);
        Ok(data)
    }
}

/// A sparse, in-memory address space.
///
/// Used to decode syscalls against captured memory, and to drive the decoder in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryImage {
    pid: i32,
    regions: BTreeMap<u64, Vec<u8>>,
}

impl MemoryImage {
    pub fn new(pid: Pid) -> Self {
        Self {
            pid: pid.as_raw(),
            regions: BTreeMap::new(),
        }
    }

    /// Map `data` at `addr`. Regions must not overlap.
    pub fn insert(&mut self, addr: u64, data: impl Into<Vec<u8>>) -> &mut Self {
        self.regions.insert(addr, data.into());
        self
    }

    pub fn with(mut self, addr: u64, data: impl Into<Vec<u8>>) -> Self {
        self.insert(addr, data);
        self
    }

    fn region(&self, addr: u64) -> Option<(u64, &[u8])> {
        let (start, data) = self.regions.range(..=addr).next_back()?;
        let end = start.saturating_add(data.len() as u64);

        if addr < end {
            Some((*start, data))
        } else {
            None
        }
    }
}

impl Memory for MemoryImage {
    fn pid(&self) -> Pid {
        Pid::from_raw(self.pid)
    }

    fn read(&self, addr: u64, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Ok(vec![]);
        }

        let (start, data) = match self.region(addr) {
            Some(region) => region,
            None => {
                let source = std::io::Error::from_raw_os_error(libc::EIO);
                return Err(Error::Memory { addr, len, source });
            },
        };

        let offset = (addr - start) as usize;
        let end = data.len().min(offset + len);

        Ok(data[offset..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> MemoryImage {
        MemoryImage::new(Pid::from_raw(1))
            .with(0x1000, &b"hello\0world"[..])
            .with(0x2000, &b"unterminated"[..])
    }

    #[test]
    fn test_zero_length_read_is_empty() {
        let mem = image();

        assert_eq!(mem.read(0x1000, 0).unwrap(), Vec::<u8>::new());

        // Even for an unmapped address.
        assert_eq!(mem.read(0xdead, 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_read_is_bounded_by_mapping() {
        let mem = image();

        assert_eq!(mem.read(0x1006, 100).unwrap(), b"world".to_vec());
        assert!(mem.read(0x3000, 4).is_err());
        assert!(mem.read_exact(0x1006, 6).is_err());
    }

    #[test]
    fn test_read_cstring() {
        let mem = image();

        assert_eq!(mem.read_cstring(0x1000).unwrap(), b"hello".to_vec());
        assert_eq!(mem.read_cstring(0x1006).unwrap(), b"world".to_vec());
    }

    #[test]
    fn test_read_cstring_stops_at_unreadable_memory() {
        let mem = image();

        assert_eq!(mem.read_cstring(0x2000).unwrap(), b"unterminated".to_vec());
        assert!(mem.read_cstring(0x5000).is_err());
    }

    #[test]
    fn test_read_cstring_is_bounded() {
        let mem = MemoryImage::new(Pid::from_raw(1)).with(0x10_000, vec![b'a'; 3 * MAX_STRING]);

        assert_eq!(mem.read_cstring(0x10_000).unwrap().len(), MAX_STRING);
    }

    #[test]
    fn test_read_cstring_at_top_of_address_space() {
        let mem = MemoryImage::new(Pid::from_raw(1)).with(u64::MAX - 3, &b"abcd"[..]);

        assert_eq!(mem.read(u64::MAX - 3, 8).unwrap(), b"abcd".to_vec());
        assert_eq!(mem.read_cstring(u64::MAX - 3).unwrap(), b"abcd".to_vec());
    }

    #[test]
    fn test_read_integers() {
        let mem = MemoryImage::new(Pid::from_raw(1))
            .with(0x100, 0x1234_5678u32.to_le_bytes().to_vec())
            .with(0x200, 0x1122_3344_5566_7788u64.to_le_bytes().to_vec());

        assert_eq!(mem.read_u32(0x100).unwrap(), 0x1234_5678);
        assert_eq!(mem.read_u64(0x200).unwrap(), 0x1122_3344_5566_7788);
        assert!(mem.read_u64(0x100).is_err());
    }

    #[test]
    fn test_process_memory_reads_self() {
        let pid = nix::unistd::getpid();
        let mem = ProcessMemory::new(pid);

        let local = b"scry\0".to_vec();
        let addr = local.as_ptr() as u64;

        assert_eq!(mem.read(addr, 4).unwrap(), b"scry".to_vec());
        assert_eq!(mem.read_cstring(addr).unwrap(), b"scry".to_vec());
        assert!(mem.read(0, 8).is_err());
    }
}
