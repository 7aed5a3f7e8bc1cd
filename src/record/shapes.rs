//! Kernel record layouts, as seen by an x86_64 tracee.

use crate::arg::ScalarKind;

use super::{Field, FieldKind, Shape, Width};

const U16: FieldKind = FieldKind::Scalar(Width::W16, ScalarKind::UnsignedInt);
const I16: FieldKind = FieldKind::Scalar(Width::W16, ScalarKind::Int);
const BE16: FieldKind = FieldKind::Scalar(Width::Be16, ScalarKind::UnsignedInt);
const U32: FieldKind = FieldKind::Scalar(Width::W32, ScalarKind::UnsignedInt);
const I32: FieldKind = FieldKind::Scalar(Width::W32, ScalarKind::Int);
const U64: FieldKind = FieldKind::Scalar(Width::W64, ScalarKind::UnsignedLong);
const I64: FieldKind = FieldKind::Scalar(Width::W64, ScalarKind::Long);
const PTR: FieldKind = FieldKind::Scalar(Width::W64, ScalarKind::Address);

const fn field(name: &'static str, offset: usize, kind: FieldKind) -> Field {
    Field { name, offset, kind }
}

pub static TIMESPEC: Shape = Shape {
    name: "timespec",
    size: 16,
    fields: &[
        field("tv_sec", 0, I64),
        field("tv_nsec", 8, I64),
    ],
};

pub static TIMEVAL: Shape = Shape {
    name: "timeval",
    size: 16,
    fields: &[
        field("tv_sec", 0, I64),
        field("tv_usec", 8, I64),
    ],
};

pub static TIMEZONE: Shape = Shape {
    name: "timezone",
    size: 8,
    fields: &[
        field("tz_minuteswest", 0, I32),
        field("tz_dsttime", 4, I32),
    ],
};

pub static ITIMERVAL: Shape = Shape {
    name: "itimerval",
    size: 32,
    fields: &[
        field("it_interval", 0, FieldKind::Record(&TIMEVAL)),
        field("it_value", 16, FieldKind::Record(&TIMEVAL)),
    ],
};

pub static ITIMERSPEC: Shape = Shape {
    name: "itimerspec",
    size: 32,
    fields: &[
        field("it_interval", 0, FieldKind::Record(&TIMESPEC)),
        field("it_value", 16, FieldKind::Record(&TIMESPEC)),
    ],
};

pub static UTIMBUF: Shape = Shape {
    name: "utimbuf",
    size: 16,
    fields: &[
        field("actime", 0, I64),
        field("modtime", 8, I64),
    ],
};

pub static STAT: Shape = Shape {
    name: "stat",
    size: 144,
    fields: &[
        field("st_dev", 0, U64),
        field("st_ino", 8, U64),
        field("st_nlink", 16, U64),
        field("st_mode", 24, U32),
        field("st_uid", 28, U32),
        field("st_gid", 32, U32),
        field("st_rdev", 40, U64),
        field("st_size", 48, I64),
        field("st_blksize", 56, I64),
        field("st_blocks", 64, I64),
        field("st_atim", 72, FieldKind::Record(&TIMESPEC)),
        field("st_mtim", 88, FieldKind::Record(&TIMESPEC)),
        field("st_ctim", 104, FieldKind::Record(&TIMESPEC)),
    ],
};

pub static STATX_TIMESTAMP: Shape = Shape {
    name: "statx_timestamp",
    size: 16,
    fields: &[
        field("tv_sec", 0, I64),
        field("tv_nsec", 8, U32),
    ],
};

pub static STATX: Shape = Shape {
    name: "statx",
    size: 256,
    fields: &[
        field("stx_mask", 0, U32),
        field("stx_blksize", 4, U32),
        field("stx_attributes", 8, U64),
        field("stx_nlink", 16, U32),
        field("stx_uid", 20, U32),
        field("stx_gid", 24, U32),
        field("stx_mode", 28, U16),
        field("stx_ino", 32, U64),
        field("stx_size", 40, U64),
        field("stx_blocks", 48, U64),
        field("stx_attributes_mask", 56, U64),
        field("stx_atime", 64, FieldKind::Record(&STATX_TIMESTAMP)),
        field("stx_btime", 80, FieldKind::Record(&STATX_TIMESTAMP)),
        field("stx_ctime", 96, FieldKind::Record(&STATX_TIMESTAMP)),
        field("stx_mtime", 112, FieldKind::Record(&STATX_TIMESTAMP)),
        field("stx_rdev_major", 128, U32),
        field("stx_rdev_minor", 132, U32),
        field("stx_dev_major", 136, U32),
        field("stx_dev_minor", 140, U32),
    ],
};

pub static STATFS: Shape = Shape {
    name: "statfs",
    size: 120,
    fields: &[
        field("f_type", 0, I64),
        field("f_bsize", 8, I64),
        field("f_blocks", 16, U64),
        field("f_bfree", 24, U64),
        field("f_bavail", 32, U64),
        field("f_files", 40, U64),
        field("f_ffree", 48, U64),
        field("f_fsid", 56, FieldKind::Array(&I32, 2)),
        field("f_namelen", 64, I64),
        field("f_frsize", 72, I64),
        field("f_flags", 80, I64),
    ],
};

pub static USTAT: Shape = Shape {
    name: "ustat",
    size: 32,
    fields: &[
        field("f_tfree", 0, I32),
        field("f_tinode", 8, U64),
        field("f_fname", 16, FieldKind::Text(6)),
        field("f_fpack", 22, FieldKind::Text(6)),
    ],
};

pub static POLLFD: Shape = Shape {
    name: "pollfd",
    size: 8,
    fields: &[
        field("fd", 0, I32),
        field("events", 4, U16),
        field("revents", 6, U16),
    ],
};

pub static IOVEC: Shape = Shape {
    name: "iovec",
    size: 16,
    fields: &[
        field("iov_base", 0, PTR),
        field("iov_len", 8, U64),
    ],
};

pub static MSGHDR: Shape = Shape {
    name: "msghdr",
    size: 56,
    fields: &[
        field("msg_name", 0, PTR),
        field("msg_namelen", 8, U32),
        field("msg_iov", 16, PTR),
        field("msg_iovlen", 24, U64),
        field("msg_control", 32, PTR),
        field("msg_controllen", 40, U64),
        field("msg_flags", 48, I32),
    ],
};

pub static CMSGHDR: Shape = Shape {
    name: "cmsghdr",
    size: 16,
    fields: &[
        field("cmsg_len", 0, U64),
        field("cmsg_level", 8, I32),
        field("cmsg_type", 12, I32),
    ],
};

pub static MMSGHDR: Shape = Shape {
    name: "mmsghdr",
    size: 64,
    fields: &[
        field("msg_hdr", 0, FieldKind::Record(&MSGHDR)),
        field("msg_len", 56, U32),
    ],
};

pub static RUSAGE: Shape = Shape {
    name: "rusage",
    size: 144,
    fields: &[
        field("ru_utime", 0, FieldKind::Record(&TIMEVAL)),
        field("ru_stime", 16, FieldKind::Record(&TIMEVAL)),
        field("ru_maxrss", 32, I64),
        field("ru_ixrss", 40, I64),
        field("ru_idrss", 48, I64),
        field("ru_isrss", 56, I64),
        field("ru_minflt", 64, I64),
        field("ru_majflt", 72, I64),
        field("ru_nswap", 80, I64),
        field("ru_inblock", 88, I64),
        field("ru_oublock", 96, I64),
        field("ru_msgsnd", 104, I64),
        field("ru_msgrcv", 112, I64),
        field("ru_nsignals", 120, I64),
        field("ru_nvcsw", 128, I64),
        field("ru_nivcsw", 136, I64),
    ],
};

pub static RLIMIT: Shape = Shape {
    name: "rlimit",
    size: 16,
    fields: &[
        field("rlim_cur", 0, U64),
        field("rlim_max", 8, U64),
    ],
};

pub static UTSNAME: Shape = Shape {
    name: "utsname",
    size: 390,
    fields: &[
        field("sysname", 0, FieldKind::Text(65)),
        field("nodename", 65, FieldKind::Text(65)),
        field("release", 130, FieldKind::Text(65)),
        field("version", 195, FieldKind::Text(65)),
        field("machine", 260, FieldKind::Text(65)),
        field("domainname", 325, FieldKind::Text(65)),
    ],
};

pub static SYSINFO: Shape = Shape {
    name: "sysinfo",
    size: 112,
    fields: &[
        field("uptime", 0, I64),
        field("loads", 8, FieldKind::Array(&U64, 3)),
        field("totalram", 32, U64),
        field("freeram", 40, U64),
        field("sharedram", 48, U64),
        field("bufferram", 56, U64),
        field("totalswap", 64, U64),
        field("freeswap", 72, U64),
        field("procs", 80, U16),
        field("totalhigh", 88, U64),
        field("freehigh", 96, U64),
        field("mem_unit", 104, U32),
    ],
};

pub static TMS: Shape = Shape {
    name: "tms",
    size: 32,
    fields: &[
        field("tms_utime", 0, I64),
        field("tms_stime", 8, I64),
        field("tms_cutime", 16, I64),
        field("tms_cstime", 24, I64),
    ],
};

pub static STACK: Shape = Shape {
    name: "stack_t",
    size: 24,
    fields: &[
        field("ss_sp", 0, PTR),
        field("ss_flags", 8, I32),
        field("ss_size", 16, U64),
    ],
};

/// `struct sigaction` as the kernel sees it, not the libc wrapper.
pub static SIGACTION: Shape = Shape {
    name: "sigaction",
    size: 32,
    fields: &[
        field("sa_handler", 0, PTR),
        field("sa_flags", 8, U64),
        field("sa_restorer", 16, PTR),
        field("sa_mask", 24, U64),
    ],
};

pub static SIGINFO: Shape = Shape {
    name: "siginfo",
    size: 128,
    fields: &[
        field("si_signo", 0, I32),
        field("si_errno", 4, I32),
        field("si_code", 8, I32),
        field("si_pid", 16, I32),
        field("si_uid", 20, U32),
        field("si_status", 24, I32),
    ],
};

pub static SCHED_PARAM: Shape = Shape {
    name: "sched_param",
    size: 4,
    fields: &[
        field("sched_priority", 0, I32),
    ],
};

pub static SCHED_ATTR: Shape = Shape {
    name: "sched_attr",
    size: 56,
    fields: &[
        field("size", 0, U32),
        field("sched_policy", 4, U32),
        field("sched_flags", 8, U64),
        field("sched_nice", 16, I32),
        field("sched_priority", 20, U32),
        field("sched_runtime", 24, U64),
        field("sched_deadline", 32, U64),
        field("sched_period", 40, U64),
        field("sched_util_min", 48, U32),
        field("sched_util_max", 52, U32),
    ],
};

/// Packed on x86_64.
pub static EPOLL_EVENT: Shape = Shape {
    name: "epoll_event",
    size: 12,
    fields: &[
        field("events", 0, U32),
        field("data", 4, U64),
    ],
};

pub static FD_SET: Shape = Shape {
    name: "fd_set",
    size: 128,
    fields: &[
        field("fds_bits", 0, FieldKind::Bytes(128)),
    ],
};

pub static SOCKADDR: Shape = Shape {
    name: "sockaddr",
    size: 16,
    fields: &[
        field("sa_family", 0, U16),
        field("sa_data", 2, FieldKind::Bytes(14)),
    ],
};

pub static SOCKADDR_IN: Shape = Shape {
    name: "sockaddr_in",
    size: 16,
    fields: &[
        field("sin_family", 0, U16),
        field("sin_port", 2, BE16),
        field("sin_addr", 4, FieldKind::Bytes(4)),
    ],
};

pub static SOCKADDR_IN6: Shape = Shape {
    name: "sockaddr_in6",
    size: 28,
    fields: &[
        field("sin6_family", 0, U16),
        field("sin6_port", 2, BE16),
        field("sin6_flowinfo", 4, U32),
        field("sin6_addr", 8, FieldKind::Bytes(16)),
        field("sin6_scope_id", 24, U32),
    ],
};

pub static SOCKADDR_UN: Shape = Shape {
    name: "sockaddr_un",
    size: 110,
    fields: &[
        field("sun_family", 0, U16),
        field("sun_path", 2, FieldKind::Text(108)),
    ],
};

pub static SOCKADDR_NL: Shape = Shape {
    name: "sockaddr_nl",
    size: 12,
    fields: &[
        field("nl_family", 0, U16),
        field("nl_pid", 4, U32),
        field("nl_groups", 8, U32),
    ],
};

pub static TIMEX: Shape = Shape {
    name: "timex",
    size: 208,
    fields: &[
        field("modes", 0, U32),
        field("offset", 8, I64),
        field("freq", 16, I64),
        field("maxerror", 24, I64),
        field("esterror", 32, I64),
        field("status", 40, I32),
        field("constant", 48, I64),
        field("precision", 56, I64),
        field("tolerance", 64, I64),
        field("time", 72, FieldKind::Record(&TIMEVAL)),
        field("tick", 88, I64),
        field("ppsfreq", 96, I64),
        field("jitter", 104, I64),
        field("shift", 112, I32),
        field("stabil", 120, I64),
        field("jitcnt", 128, I64),
        field("calcnt", 136, I64),
        field("errcnt", 144, I64),
        field("stbcnt", 152, I64),
        field("tai", 160, I32),
    ],
};

pub static IPC_PERM: Shape = Shape {
    name: "ipc_perm",
    size: 48,
    fields: &[
        field("key", 0, I32),
        field("uid", 4, U32),
        field("gid", 8, U32),
        field("cuid", 12, U32),
        field("cgid", 16, U32),
        field("mode", 20, U16),
        field("seq", 24, U16),
    ],
};

pub static SHMID_DS: Shape = Shape {
    name: "shmid_ds",
    size: 112,
    fields: &[
        field("shm_perm", 0, FieldKind::Record(&IPC_PERM)),
        field("shm_segsz", 48, U64),
        field("shm_atime", 56, I64),
        field("shm_dtime", 64, I64),
        field("shm_ctime", 72, I64),
        field("shm_cpid", 80, I32),
        field("shm_lpid", 84, I32),
        field("shm_nattch", 88, U64),
    ],
};

pub static SEMBUF: Shape = Shape {
    name: "sembuf",
    size: 6,
    fields: &[
        field("sem_num", 0, U16),
        field("sem_op", 2, I16),
        field("sem_flg", 4, I16),
    ],
};

pub static CAP_USER_HEADER: Shape = Shape {
    name: "cap_user_header",
    size: 8,
    fields: &[
        field("version", 0, U32),
        field("pid", 4, I32),
    ],
};

pub static CAP_USER_DATA: Shape = Shape {
    name: "cap_user_data",
    size: 12,
    fields: &[
        field("effective", 0, U32),
        field("permitted", 4, U32),
        field("inheritable", 8, U32),
    ],
};

pub static USER_DESC: Shape = Shape {
    name: "user_desc",
    size: 16,
    fields: &[
        field("entry_number", 0, U32),
        field("base_addr", 4, U32),
        field("limit", 8, U32),
        field("flags", 12, U32),
    ],
};

pub static IO_EVENT: Shape = Shape {
    name: "io_event",
    size: 32,
    fields: &[
        field("data", 0, U64),
        field("obj", 8, PTR),
        field("res", 16, I64),
        field("res2", 24, I64),
    ],
};

pub static IOCB: Shape = Shape {
    name: "iocb",
    size: 64,
    fields: &[
        field("aio_data", 0, U64),
        field("aio_key", 8, U32),
        field("aio_rw_flags", 12, I32),
        field("aio_lio_opcode", 16, U16),
        field("aio_reqprio", 18, I16),
        field("aio_fildes", 20, U32),
        field("aio_buf", 24, PTR),
        field("aio_nbytes", 32, U64),
        field("aio_offset", 40, I64),
        field("aio_flags", 56, U32),
        field("aio_resfd", 60, U32),
    ],
};

pub static MQ_ATTR: Shape = Shape {
    name: "mq_attr",
    size: 64,
    fields: &[
        field("mq_flags", 0, I64),
        field("mq_maxmsg", 8, I64),
        field("mq_msgsize", 16, I64),
        field("mq_curmsgs", 24, I64),
    ],
};

pub static IO_SQRING_OFFSETS: Shape = Shape {
    name: "io_sqring_offsets",
    size: 40,
    fields: &[
        field("head", 0, U32),
        field("tail", 4, U32),
        field("ring_mask", 8, U32),
        field("ring_entries", 12, U32),
        field("flags", 16, U32),
        field("dropped", 20, U32),
        field("array", 24, U32),
        field("user_addr", 32, U64),
    ],
};

pub static IO_CQRING_OFFSETS: Shape = Shape {
    name: "io_cqring_offsets",
    size: 40,
    fields: &[
        field("head", 0, U32),
        field("tail", 4, U32),
        field("ring_mask", 8, U32),
        field("ring_entries", 12, U32),
        field("overflow", 16, U32),
        field("cqes", 20, U32),
        field("flags", 24, U32),
        field("user_addr", 32, U64),
    ],
};

pub static IO_URING_PARAMS: Shape = Shape {
    name: "io_uring_params",
    size: 120,
    fields: &[
        field("sq_entries", 0, U32),
        field("cq_entries", 4, U32),
        field("flags", 8, U32),
        field("sq_thread_cpu", 12, U32),
        field("sq_thread_idle", 16, U32),
        field("features", 20, U32),
        field("wq_fd", 24, U32),
        field("sq_off", 40, FieldKind::Record(&IO_SQRING_OFFSETS)),
        field("cq_off", 80, FieldKind::Record(&IO_CQRING_OFFSETS)),
    ],
};

pub static CLONE_ARGS: Shape = Shape {
    name: "clone_args",
    size: 88,
    fields: &[
        field("flags", 0, U64),
        field("pidfd", 8, PTR),
        field("child_tid", 16, PTR),
        field("parent_tid", 24, PTR),
        field("exit_signal", 32, U64),
        field("stack", 40, PTR),
        field("stack_size", 48, U64),
        field("tls", 56, PTR),
        field("set_tid", 64, PTR),
        field("set_tid_size", 72, U64),
        field("cgroup", 80, U64),
    ],
};

pub static OPEN_HOW: Shape = Shape {
    name: "open_how",
    size: 24,
    fields: &[
        field("flags", 0, U64),
        field("mode", 8, U64),
        field("resolve", 16, U64),
    ],
};

pub static MOUNT_ATTR: Shape = Shape {
    name: "mount_attr",
    size: 32,
    fields: &[
        field("attr_set", 0, U64),
        field("attr_clr", 8, U64),
        field("propagation", 16, U64),
        field("userns_fd", 24, U64),
    ],
};

pub static LANDLOCK_RULESET_ATTR: Shape = Shape {
    name: "landlock_ruleset_attr",
    size: 16,
    fields: &[
        field("handled_access_fs", 0, U64),
        field("handled_access_net", 8, U64),
    ],
};

/// Every shape, for exhaustive checks.
pub static ALL: &[&Shape] = &[
    &TIMESPEC,
    &TIMEVAL,
    &TIMEZONE,
    &ITIMERVAL,
    &ITIMERSPEC,
    &UTIMBUF,
    &STAT,
    &STATX_TIMESTAMP,
    &STATX,
    &STATFS,
    &USTAT,
    &POLLFD,
    &IOVEC,
    &MSGHDR,
    &CMSGHDR,
    &MMSGHDR,
    &RUSAGE,
    &RLIMIT,
    &UTSNAME,
    &SYSINFO,
    &TMS,
    &STACK,
    &SIGACTION,
    &SIGINFO,
    &SCHED_PARAM,
    &SCHED_ATTR,
    &EPOLL_EVENT,
    &FD_SET,
    &SOCKADDR,
    &SOCKADDR_IN,
    &SOCKADDR_IN6,
    &SOCKADDR_UN,
    &SOCKADDR_NL,
    &TIMEX,
    &IPC_PERM,
    &SHMID_DS,
    &SEMBUF,
    &CAP_USER_HEADER,
    &CAP_USER_DATA,
    &USER_DESC,
    &IO_EVENT,
    &IOCB,
    &MQ_ATTR,
    &IO_SQRING_OFFSETS,
    &IO_CQRING_OFFSETS,
    &IO_URING_PARAMS,
    &CLONE_ARGS,
    &OPEN_HOW,
    &MOUNT_ATTR,
    &LANDLOCK_RULESET_ATTR,
];

#[cfg(all(test, target_arch = "x86_64"))]
mod tests {
    use std::mem::size_of;

    use memoffset::offset_of;

    use super::*;

    #[test]
    fn test_sizes_match_libc() {
        assert_eq!(STAT.size, size_of::<libc::stat>());
        assert_eq!(STATX.size, size_of::<libc::statx>());
        assert_eq!(STATFS.size, size_of::<libc::statfs>());
        assert_eq!(TIMESPEC.size, size_of::<libc::timespec>());
        assert_eq!(TIMEVAL.size, size_of::<libc::timeval>());
        assert_eq!(ITIMERVAL.size, size_of::<libc::itimerval>());
        assert_eq!(ITIMERSPEC.size, size_of::<libc::itimerspec>());
        assert_eq!(UTIMBUF.size, size_of::<libc::utimbuf>());
        assert_eq!(POLLFD.size, size_of::<libc::pollfd>());
        assert_eq!(IOVEC.size, size_of::<libc::iovec>());
        assert_eq!(MSGHDR.size, size_of::<libc::msghdr>());
        assert_eq!(MMSGHDR.size, size_of::<libc::mmsghdr>());
        assert_eq!(CMSGHDR.size, size_of::<libc::cmsghdr>());
        assert_eq!(RUSAGE.size, size_of::<libc::rusage>());
        assert_eq!(RLIMIT.size, size_of::<libc::rlimit>());
        assert_eq!(UTSNAME.size, size_of::<libc::utsname>());
        assert_eq!(SYSINFO.size, size_of::<libc::sysinfo>());
        assert_eq!(TMS.size, size_of::<libc::tms>());
        assert_eq!(STACK.size, size_of::<libc::stack_t>());
        assert_eq!(SIGINFO.size, size_of::<libc::siginfo_t>());
        assert_eq!(SCHED_PARAM.size, size_of::<libc::sched_param>());
        assert_eq!(EPOLL_EVENT.size, size_of::<libc::epoll_event>());
        assert_eq!(FD_SET.size, size_of::<libc::fd_set>());
        assert_eq!(SOCKADDR.size, size_of::<libc::sockaddr>());
        assert_eq!(SOCKADDR_IN.size, size_of::<libc::sockaddr_in>());
        assert_eq!(SOCKADDR_IN6.size, size_of::<libc::sockaddr_in6>());
        assert_eq!(SOCKADDR_UN.size, size_of::<libc::sockaddr_un>());
        assert_eq!(SOCKADDR_NL.size, size_of::<libc::sockaddr_nl>());
        assert_eq!(TIMEX.size, size_of::<libc::timex>());
        assert_eq!(IPC_PERM.size, size_of::<libc::ipc_perm>());
        assert_eq!(SHMID_DS.size, size_of::<libc::shmid_ds>());
        assert_eq!(SEMBUF.size, size_of::<libc::sembuf>());
        assert_eq!(MQ_ATTR.size, size_of::<libc::mq_attr>());
    }

    #[test]
    fn test_offsets_match_libc() {
        assert_eq!(offset_of!(libc::stat, st_mode), 24);
        assert_eq!(offset_of!(libc::stat, st_size), 48);
        assert_eq!(offset_of!(libc::stat, st_atime), 72);
        assert_eq!(offset_of!(libc::stat, st_mtime), 88);
        assert_eq!(offset_of!(libc::stat, st_ctime), 104);

        assert_eq!(offset_of!(libc::statx, stx_mode), 28);
        assert_eq!(offset_of!(libc::statx, stx_ino), 32);
        assert_eq!(offset_of!(libc::statx, stx_atime), 64);
        assert_eq!(offset_of!(libc::statx, stx_rdev_major), 128);

        assert_eq!(offset_of!(libc::statfs, f_fsid), 56);
        assert_eq!(offset_of!(libc::statfs, f_flags), 80);

        assert_eq!(offset_of!(libc::msghdr, msg_iov), 16);
        assert_eq!(offset_of!(libc::msghdr, msg_flags), 48);
        assert_eq!(offset_of!(libc::mmsghdr, msg_len), 56);

        assert_eq!(offset_of!(libc::sysinfo, procs), 80);
        assert_eq!(offset_of!(libc::sysinfo, totalhigh), 88);
        assert_eq!(offset_of!(libc::sysinfo, mem_unit), 104);

        assert_eq!(offset_of!(libc::stack_t, ss_size), 16);

        assert_eq!(offset_of!(libc::timex, time), 72);
        assert_eq!(offset_of!(libc::timex, shift), 112);
        assert_eq!(offset_of!(libc::timex, tai), 160);

        assert_eq!(offset_of!(libc::shmid_ds, shm_segsz), 48);
        assert_eq!(offset_of!(libc::shmid_ds, shm_cpid), 80);
        assert_eq!(offset_of!(libc::shmid_ds, shm_nattch), 88);
        assert_eq!(offset_of!(libc::ipc_perm, mode), 20);

        assert_eq!(offset_of!(libc::sockaddr_in6, sin6_addr), 8);
        assert_eq!(offset_of!(libc::sockaddr_in6, sin6_scope_id), 24);
        assert_eq!(offset_of!(libc::sockaddr_nl, nl_pid), 4);
    }

    #[test]
    fn test_kernel_only_sizes() {
        // Records libc does not (portably) expose.
        assert_eq!(SIGACTION.size, 32);
        assert_eq!(USTAT.size, 32);
        assert_eq!(TIMEZONE.size, 8);
        assert_eq!(CAP_USER_HEADER.size, 8);
        assert_eq!(CAP_USER_DATA.size, 12);
        assert_eq!(SCHED_ATTR.size, 56);
        assert_eq!(USER_DESC.size, 16);
        assert_eq!(IO_EVENT.size, 32);
        assert_eq!(IOCB.size, 64);
        assert_eq!(IO_URING_PARAMS.size, 40 + IO_SQRING_OFFSETS.size + IO_CQRING_OFFSETS.size);
        assert_eq!(CLONE_ARGS.size, 88);
        assert_eq!(OPEN_HOW.size, 24);
        assert_eq!(MOUNT_ATTR.size, 32);
        assert_eq!(LANDLOCK_RULESET_ATTR.size, 16);
    }
}
