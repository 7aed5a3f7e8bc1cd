//! Turning one raw argument word into a materialized [`Arg`].
//!
//! [`ArgType`] is a closed set, and [`handle`] matches on it exhaustively, so every tag
//! has exactly one handler by construction.

mod data;
mod net;
mod structs;

use tracing::warn;

use crate::arg::{Arg, ScalarKind};
use crate::error::Result;
use crate::memory::Memory;
use crate::record::shapes::*;

/// Upper bound on elements decoded from a tracee-supplied count.
pub const MAX_ITEMS: usize = 1024;

/// Upper bound on bytes decoded for a single buffer argument.
pub const MAX_DATA: usize = 1 << 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ArgType {
    Unknown,

    Int,
    Long,
    UnsignedInt,
    UnsignedLong,
    Address,
    ErrorCode,

    /// Negative values are a negated `errno`, others a plain count or handle.
    IntOrErrorCode,

    /// A byte buffer. Its length comes from the argument's length source.
    Data,

    /// A NUL-terminated string.
    String,

    /// A NULL-terminated array of string pointers, e.g. `argv`.
    StringArray,

    IntArray,
    UnsignedIntPtr,
    UnsignedInt64Ptr,
    Sockoptval,
    WaitStatus,
    FdSet,

    Sockaddr,
    Msghdr,
    MmsghdrArray,
    IovecArray,

    Stat,
    Statx,
    Statfs,
    Ustat,
    PollFdArray,
    SigAction,
    Siginfo,
    Stack,
    Timespec,
    TimespecArray,
    Timeval,
    TimevalArray,
    Timezone,
    Itimerval,
    Itimerspec,
    Timex,
    Utimbuf,
    Tms,
    Rusage,
    Rlimit,
    Utsname,
    Sysinfo,
    Sembuf,
    ShmidDs,
    CapUserHeader,
    CapUserData,
    SchedParam,
    SchedAttr,
    UserDesc,
    IoEvent,
    IoEvents,
    Iocb,
    EpollEvent,
    MqAttr,
    IoUringParams,
    CloneArgs,
    OpenHow,
    MountAttr,
    LandlockRulesetAttr,
}

impl ArgType {
    /// True for types whose raw word is an address to be read through.
    pub fn is_pointer(self) -> bool {
        !matches!(
            self,
            ArgType::Unknown
                | ArgType::Int
                | ArgType::Long
                | ArgType::UnsignedInt
                | ArgType::UnsignedLong
                | ArgType::Address
                | ArgType::ErrorCode
                | ArgType::IntOrErrorCode
        )
    }
}

/// How much memory an argument spans, as resolved from its length source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Extent {
    /// Not resolvable in this phase (or no length source).
    Unknown,

    /// A byte length for buffers, an element count for arrays.
    Known(usize),

    /// Ends at a NUL byte.
    Terminated,
}

impl Extent {
    pub fn known(self) -> Option<usize> {
        match self {
            Extent::Known(len) => Some(len),
            _ => None,
        }
    }
}

/// Everything a handler may consult besides tracee memory.
#[derive(Clone, Copy, Debug)]
pub struct Input {
    pub name: &'static str,
    pub raw: u64,

    /// Raw word of the next argument register.
    pub following: u64,

    /// Raw word of the previous argument register.
    pub preceding: u64,

    /// The syscall return value, at the exit-stop only.
    pub ret: Option<u64>,

    pub extent: Extent,

    /// Whether the kernel writes this argument.
    pub destination: bool,
}

impl Input {
    pub fn new(name: &'static str, raw: u64) -> Self {
        Self {
            name,
            raw,
            following: 0,
            preceding: 0,
            ret: None,
            extent: Extent::Unknown,
            destination: false,
        }
    }

    /// The return value if the call succeeded with a count.
    pub(crate) fn count_returned(&self) -> Option<usize> {
        self.ret
            .filter(|ret| (*ret as i64) >= 0)
            .map(|ret| ret as usize)
    }
}

/// Materialize one argument.
///
/// Never fails. A pointer to unreadable memory yields the bare address, and the failure
/// is logged.
pub fn handle(ty: ArgType, input: &Input, mem: &dyn Memory) -> Arg {
    if ty.is_pointer() && input.raw == 0 {
        return Arg::address(input.name, 0);
    }

    match dispatch(ty, input, mem) {
        Ok(arg) => arg,
        Err(err) => {
            warn!(
                pid = mem.pid().as_raw(),
                arg = input.name,
                addr = input.raw,
                ?ty,
                %err,
                "falling back to raw value",
            );
            Arg::address(input.name, input.raw)
        },
    }
}

fn dispatch(ty: ArgType, input: &Input, mem: &dyn Memory) -> Result<Arg> {
    use ArgType::*;

    let arg = match ty {
        Unknown => scalar(input, ScalarKind::Unknown),
        Int => scalar(input, ScalarKind::Int),
        Long => scalar(input, ScalarKind::Long),
        UnsignedInt => scalar(input, ScalarKind::UnsignedInt),
        UnsignedLong => scalar(input, ScalarKind::UnsignedLong),
        Address => Arg::address(input.name, input.raw),
        ErrorCode => scalar(input, ScalarKind::ErrorCode),
        IntOrErrorCode => {
            if (input.raw as i64) < 0 {
                scalar(input, ScalarKind::ErrorCode)
            } else {
                scalar(input, ScalarKind::Long)
            }
        },

        Data => data::data(input, mem)?,
        String => data::string(input, mem)?,
        StringArray => data::string_array(input, mem)?,
        IntArray => data::int_array(input, mem)?,
        UnsignedIntPtr => data::uint_ptr(input, mem)?,
        UnsignedInt64Ptr => data::uint64_ptr(input, mem)?,
        Sockoptval => data::sockoptval(input, mem)?,
        WaitStatus => data::wait_status(input, mem)?,
        FdSet => data::fd_set(input, mem)?,

        Sockaddr => net::sockaddr(input, mem)?,
        Msghdr => net::msghdr(input, mem)?,
        MmsghdrArray => net::mmsghdr_array(input, mem)?,
        IovecArray => net::iovec_array(input, mem)?,

        Stat => structs::record(input, mem, &STAT)?,
        Statx => structs::record(input, mem, &STATX)?,
        Statfs => structs::record(input, mem, &STATFS)?,
        Ustat => structs::record(input, mem, &USTAT)?,
        PollFdArray => structs::records(input, mem, &POLLFD, input.following as usize)?,
        SigAction => structs::record(input, mem, &SIGACTION)?,
        Siginfo => structs::record(input, mem, &SIGINFO)?,
        Stack => structs::record(input, mem, &STACK)?,
        Timespec => structs::record(input, mem, &TIMESPEC)?,
        TimespecArray => structs::records(input, mem, &TIMESPEC, fixed_count(input))?,
        Timeval => structs::record(input, mem, &TIMEVAL)?,
        TimevalArray => structs::records(input, mem, &TIMEVAL, fixed_count(input))?,
        Timezone => structs::record(input, mem, &TIMEZONE)?,
        Itimerval => structs::record(input, mem, &ITIMERVAL)?,
        Itimerspec => structs::record(input, mem, &ITIMERSPEC)?,
        Timex => structs::record(input, mem, &TIMEX)?,
        Utimbuf => structs::record(input, mem, &UTIMBUF)?,
        Tms => structs::record(input, mem, &TMS)?,
        Rusage => structs::record(input, mem, &RUSAGE)?,
        Rlimit => structs::record(input, mem, &RLIMIT)?,
        Utsname => structs::record(input, mem, &UTSNAME)?,
        Sysinfo => structs::record(input, mem, &SYSINFO)?,
        Sembuf => structs::records(input, mem, &SEMBUF, input.following as usize)?,
        ShmidDs => structs::record(input, mem, &SHMID_DS)?,
        CapUserHeader => structs::record(input, mem, &CAP_USER_HEADER)?,
        CapUserData => structs::record(input, mem, &CAP_USER_DATA)?,
        SchedParam => structs::record(input, mem, &SCHED_PARAM)?,
        SchedAttr => structs::record(input, mem, &SCHED_ATTR)?,
        UserDesc => structs::record(input, mem, &USER_DESC)?,
        IoEvent => structs::record(input, mem, &IO_EVENT)?,
        IoEvents => structs::records(input, mem, &IO_EVENT, input.count_returned().unwrap_or(0))?,
        Iocb => structs::iocb_array(input, mem)?,
        EpollEvent => structs::epoll_event(input, mem)?,
        MqAttr => structs::record(input, mem, &MQ_ATTR)?,
        IoUringParams => structs::record(input, mem, &IO_URING_PARAMS)?,
        CloneArgs => structs::record(input, mem, &CLONE_ARGS)?,
        OpenHow => structs::record(input, mem, &OPEN_HOW)?,
        MountAttr => structs::record(input, mem, &MOUNT_ATTR)?,
        LandlockRulesetAttr => structs::record(input, mem, &LANDLOCK_RULESET_ATTR)?,
    };

    Ok(arg)
}

fn scalar(input: &Input, kind: ScalarKind) -> Arg {
    Arg::scalar(input.name, input.raw, kind)
}

// Fixed-size arrays such as `utimes`' pair of timevals.
fn fixed_count(input: &Input) -> usize {
    input.extent.known().unwrap_or(2)
}
