use std::io;

use nix::errno::Errno;

use crate::ptracer::Pid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not attach to tracee = {pid}")]
    Attach {
        pid: Pid,
        source: nix::Error,
    },

    #[error("Could not spawn tracee")]
    Spawn(#[source] io::Error),

    #[error("Could not restart tracee = {pid}")]
    Restart { pid: Pid, source: nix::Error },

    #[error("Tracee died while tracer was stopped = {pid}")]
    TraceeDied { pid: Pid, source: nix::Error },

    #[error("Syscall exit mismatch: entered {enter}, exited {exit}; a signal was likely missed")]
    SyscallMismatch { enter: i64, exit: i64 },

    #[error("Expected a syscall from tracee = {pid}, but saw -1; a signal was likely missed")]
    MissedSyscall { pid: Pid },

    #[error("Could not read {len} bytes of tracee memory at {addr:#x}")]
    Memory {
        addr: u64,
        len: usize,
        source: io::Error,
    },

    #[error("Input/output error")]
    IO(#[from] io::Error),

    #[error("OS error")]
    OS(#[from] nix::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True if the error came from a tracee that no longer exists.
    pub fn tracee_died(&self) -> bool {
        matches!(self, Error::TraceeDied { .. })
    }

    /// True if the target process could not be found at all.
    ///
    /// Callers treat this as a clean termination rather than a failure.
    pub fn no_such_process(&self) -> bool {
        match self {
            Error::Attach { source, .. } => *source == Errno::ESRCH,
            Error::TraceeDied { .. } => true,
            Error::OS(errno) => *errno == Errno::ESRCH,
            _ => false,
        }
    }
}

pub(crate) trait ResultExt<T> {
    /// Reclassify `ESRCH` from a ptrace request on `pid` as a dead tracee.
    fn died_if_esrch(self, pid: Pid) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, nix::Error> {
    fn died_if_esrch(self, pid: Pid) -> Result<T> {
        self.map_err(|source| match source {
            Errno::ESRCH => Error::TraceeDied { pid, source },
            source => Error::OS(source),
        })
    }
}

macro_rules! internal_error {
    ($msg: expr) => {
        return Err($crate::error::Error::Internal($msg.into()))
    };
}

pub(crate) use internal_error;
