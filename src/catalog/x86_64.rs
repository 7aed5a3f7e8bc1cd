//! The x86_64 table, numbered as in `asm/unistd_64.h`.

use super::LengthSource::{Following, FollowingDereferenced, NullTerminator, Preceding, ReturnValue};
use super::{arg, entry, ret, Entry, ModifierInput};
use crate::annotate;
use crate::arg::{Arg, ScalarKind};
use crate::types::ArgType::*;
use crate::types::{self, ArgType, Extent, Input};

pub static ENTRIES: &[Entry] = &[
    entry(0, "read", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("buf", Data).len(ReturnValue).destination(),
        arg("count", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(1, "write", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("buf", Data).len(Following),
        arg("count", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(2, "open", &[
        arg("filename", String).len(NullTerminator),
        arg("flags", Int).annotate(annotate::open_flags),
        arg("mode", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(3, "close", &[
        arg("fd", Int).annotate(annotate::fd),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(4, "stat", &[
        arg("filename", String).len(NullTerminator),
        arg("stat", Stat).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(5, "fstat", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("stat", Stat).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(6, "lstat", &[
        arg("filename", String).len(NullTerminator),
        arg("stat", Stat).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(7, "poll", &[
        arg("ufds", PollFdArray).destination(),
        arg("nfds", UnsignedInt),
        arg("timeout", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(8, "lseek", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("offset", Int),
        arg("whence", UnsignedInt).annotate(annotate::whence),
    ], ret(Int)),
    entry(9, "mmap", &[
        arg("addr", Address).annotate(annotate::null),
        arg("len", UnsignedLong),
        arg("prot", UnsignedLong).annotate(annotate::prot),
        arg("flags", UnsignedLong).annotate(annotate::mmap_flags),
        arg("fd", Int).annotate(annotate::fd),
        arg("off", UnsignedLong),
    ], ret(Address)),
    entry(10, "mprotect", &[
        arg("start", Address).annotate(annotate::null),
        arg("len", UnsignedInt),
        arg("prot", UnsignedLong).annotate(annotate::prot),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(11, "munmap", &[
        arg("start", Address).annotate(annotate::null),
        arg("len", UnsignedInt),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(12, "brk", &[
        arg("brk", Address).annotate(annotate::null),
    ], ret(Address)),
    entry(13, "rt_sigaction", &[
        arg("signum", Int),
        arg("act", SigAction),
        arg("oldact", SigAction).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(14, "rt_sigprocmask", &[
        arg("how", Int).annotate(annotate::sigprocmask_how),
        arg("set", Address),
        arg("oldset", Address).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(15, "rt_sigreturn", &[
        arg("__unused", Long),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(16, "ioctl", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("request", Int),
        arg("argp", Address),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(17, "pread64", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("buf", Data).len(ReturnValue).destination(),
        arg("count", Int),
        arg("offset", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(18, "pwrite64", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("buf", Data).len(Following),
        arg("count", Int),
        arg("offset", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(19, "readv", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("iov", IovecArray),
        arg("iovcnt", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(20, "writev", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("iov", IovecArray),
        arg("iovcnt", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(21, "access", &[
        arg("path", String).len(NullTerminator),
        arg("mode", UnsignedInt).annotate(annotate::access_mode),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(22, "pipe", &[
        arg("pipefd", IntArray).fixed(2).destination().annotate(annotate::fd_array),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(23, "select", &[
        arg("nfds", Int),
        arg("readfds", FdSet),
        arg("writefds", FdSet),
        arg("exceptfds", FdSet),
        arg("timeout", Timeval),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(24, "sched_yield", &[], ret(ErrorCode).annotate(annotate::errno)),
    entry(25, "mremap", &[
        arg("old_address", Address),
        arg("old_size", Int),
        arg("new_size", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(26, "msync", &[
        arg("addr", Address),
        arg("length", Int),
        arg("flags", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(27, "mincore", &[
        arg("addr", Address),
        arg("length", Int),
        arg("vec", Address),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(28, "madvise", &[
        arg("addr", Address),
        arg("length", Int),
        arg("advice", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(29, "shmget", &[
        arg("key", Int),
        arg("size", Int),
        arg("shmflg", Int),
    ], ret(Address)),
    entry(30, "shmat", &[
        arg("shmid", Int),
        arg("shmaddr", Address),
        arg("shmflg", Int),
    ], ret(Address)),
    entry(31, "shmctl", &[
        arg("shmid", Int),
        arg("cmd", Int),
        arg("buf", ShmidDs).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(32, "dup", &[
        arg("oldfd", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(33, "dup2", &[
        arg("oldfd", Int),
        arg("newfd", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(34, "pause", &[], ret(ErrorCode).annotate(annotate::errno)),
    entry(35, "nanosleep", &[
        arg("req", Timespec),
        arg("rem", Timespec).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(36, "getitimer", &[
        arg("which", Int),
        arg("curr_value", Itimerval).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(37, "alarm", &[
        arg("seconds", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(38, "setitimer", &[
        arg("which", Int),
        arg("new_value", Itimerval),
        arg("old_value", Itimerval).annotate(annotate::null),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(39, "getpid", &[], ret(Int)),
    entry(40, "sendfile", &[
        arg("out_fd", Int).annotate(annotate::fd),
        arg("in_fd", Int).annotate(annotate::fd),
        arg("offset", UnsignedInt),
        arg("count", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(41, "socket", &[
        arg("domain", Int).annotate(annotate::socket_domain),
        arg("type", Int).annotate(annotate::socket_type),
        arg("protocol", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(42, "connect", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("addr", Sockaddr).len(Following),
        arg("addrlen", UnsignedInt),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(43, "accept", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("addr", Sockaddr).len(FollowingDereferenced).destination(),
        arg("addrlen", UnsignedIntPtr).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(44, "sendto", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("buf", Data).len(Following),
        arg("len", UnsignedInt),
        arg("flags", Int).annotate(annotate::msg_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(45, "recvfrom", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("buf", Data).len(ReturnValue).destination(),
        arg("len", Int),
        arg("flags", Int).annotate(annotate::msg_flags),
        arg("addr", Sockaddr).len(FollowingDereferenced).destination(),
        arg("addrlen", UnsignedIntPtr).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(46, "sendmsg", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("msg", Msghdr),
        arg("flags", Int).annotate(annotate::msg_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(47, "recvmsg", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("msg", Msghdr).destination(),
        arg("flags", Int).annotate(annotate::msg_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(48, "shutdown", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("how", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(49, "bind", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("addr", Sockaddr).len(Following),
        arg("addrlen", UnsignedInt),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(50, "listen", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("backlog", UnsignedInt),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(51, "getsockname", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("addr", Sockaddr).len(FollowingDereferenced).destination(),
        arg("addrlen", UnsignedIntPtr).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(52, "getpeername", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("addr", Sockaddr).len(FollowingDereferenced).destination(),
        arg("addrlen", UnsignedIntPtr).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(53, "socketpair", &[
        arg("domain", Int).annotate(annotate::socket_domain),
        arg("type", Int).annotate(annotate::socket_type),
        arg("protocol", Int),
        arg("fds", IntArray).fixed(2).destination().annotate(annotate::fd_array),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(54, "setsockopt", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("level", Int),
        arg("optname", Int),
        arg("optval", Sockoptval).len(Following),
        arg("optlen", UnsignedInt),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(55, "getsockopt", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("level", Int),
        arg("optname", Int),
        arg("optval", Sockoptval).len(FollowingDereferenced).destination(),
        arg("optlen", UnsignedIntPtr).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(56, "clone", &[
        arg("fn", Address).annotate(annotate::null),
        arg("child_stack", Address).annotate(annotate::null),
        arg("flags", Int).annotate(annotate::clone_flags),
        arg("arg", Address).annotate(annotate::null),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(57, "fork", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(58, "vfork", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(59, "execve", &[
        arg("filename", String).len(NullTerminator),
        arg("argv", StringArray),
        arg("envp", StringArray),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(60, "exit", &[
        arg("status", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(61, "wait4", &[
        arg("pid", Int),
        arg("status", WaitStatus).annotate(annotate::wait_status),
        arg("options", Int).annotate(annotate::wait_options),
        arg("rusage", Rusage).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(62, "kill", &[
        arg("pid", Int),
        arg("sig", Int).annotate(annotate::signal),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(63, "uname", &[
        arg("buf", Utsname).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(64, "semget", &[
        arg("key", Int),
        arg("nsems", Int),
        arg("semflg", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(65, "semop", &[
        arg("semid", Int),
        arg("sops", Sembuf),
        arg("nsops", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(66, "semctl", &[
        arg("semid", Int),
        arg("semnum", Int),
        arg("cmd", Int),
        arg("arg", Address).destination().annotate(annotate::null),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(67, "shmdt", &[
        arg("shmaddr", Address),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(68, "msgget", &[
        arg("key", Int),
        arg("msgflg", Int).annotate(annotate::msg_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(69, "msgsnd", &[
        arg("msqid", Int),
        arg("msgp", Data).len(Following),
        arg("msgsz", Int),
        arg("msgflg", Int).annotate(annotate::msg_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(70, "msgrcv", &[
        arg("msqid", Int),
        arg("msgp", Data).len(ReturnValue).destination(),
        arg("msgsz", Int),
        arg("msgtyp", Long),
        arg("msgflg", Int).annotate(annotate::msg_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(71, "msgctl", &[
        arg("msqid", Int),
        arg("cmd", Int),
        arg("buf", Address).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(72, "fcntl", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("cmd", Int).annotate(annotate::fcntl_cmd),
        arg("arg", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno))
    .modifier(2, fcntl_arg),
    entry(73, "flock", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("operation", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(74, "fsync", &[
        arg("fd", Int).annotate(annotate::fd),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(75, "fdatasync", &[
        arg("fd", Int).annotate(annotate::fd),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(76, "truncate", &[
        arg("path", String).len(NullTerminator),
        arg("length", UnsignedInt),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(77, "ftruncate", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("length", UnsignedInt),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(78, "getdents", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("dirp", Address),
        arg("count", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(79, "getcwd", &[
        arg("buf", Data).len(ReturnValue).destination().annotate(annotate::trim_nul),
        arg("size", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(80, "chdir", &[
        arg("path", String).len(NullTerminator),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(81, "fchdir", &[
        arg("fd", Int).annotate(annotate::fd),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(82, "rename", &[
        arg("oldpath", String).len(NullTerminator),
        arg("newpath", String).len(NullTerminator),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(83, "mkdir", &[
        arg("pathname", String).len(NullTerminator),
        arg("mode", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(84, "rmdir", &[
        arg("pathname", String).len(NullTerminator),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(85, "creat", &[
        arg("pathname", String).len(NullTerminator),
        arg("mode", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(86, "link", &[
        arg("oldpath", String).len(NullTerminator),
        arg("newpath", String).len(NullTerminator),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(87, "unlink", &[
        arg("pathname", String).len(NullTerminator),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(88, "symlink", &[
        arg("oldpath", String).len(NullTerminator),
        arg("newpath", String).len(NullTerminator),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(89, "readlink", &[
        arg("pathname", String).len(NullTerminator),
        arg("buf", Data).len(ReturnValue).destination().annotate(annotate::trim_nul),
        arg("bufsiz", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(90, "chmod", &[
        arg("pathname", String).len(NullTerminator),
        arg("mode", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(91, "fchmod", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("mode", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(92, "chown", &[
        arg("pathname", String).len(NullTerminator),
        arg("owner", Int),
        arg("group", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(93, "fchown", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("owner", Int),
        arg("group", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(94, "lchown", &[
        arg("pathname", String).len(NullTerminator),
        arg("owner", Int),
        arg("group", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(95, "umask", &[
        arg("mask", Int),
    ], ret(Int)),
    entry(96, "gettimeofday", &[
        arg("tv", Timeval).destination(),
        arg("tz", Timezone).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(97, "getrlimit", &[
        arg("resource", Int),
        arg("rlim", Rlimit).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(98, "getrusage", &[
        arg("who", Int),
        arg("usage", Rusage).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(99, "sysinfo", &[
        arg("info", Sysinfo).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(100, "times", &[
        arg("tbuf", Tms).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(101, "ptrace", &[
        arg("request", Int),
        arg("pid", Int),
        arg("addr", Address),
        arg("data", Address),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(102, "getuid", &[], ret(Int)),
    entry(103, "syslog", &[
        arg("type", Int),
        arg("buf", Data).len(ReturnValue).destination(),
        arg("len", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(104, "getgid", &[], ret(Int)),
    entry(105, "setuid", &[
        arg("uid", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(106, "setgid", &[
        arg("gid", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(107, "geteuid", &[], ret(Int)),
    entry(108, "getegid", &[], ret(Int)),
    entry(109, "setpgid", &[
        arg("pid", Int),
        arg("pgid", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(110, "getppid", &[], ret(Int)),
    entry(111, "getpgrp", &[], ret(Int)),
    entry(112, "setsid", &[], ret(Int)),
    entry(113, "setreuid", &[
        arg("ruid", Int),
        arg("euid", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(114, "setregid", &[
        arg("rgid", Int),
        arg("egid", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(115, "getgroups", &[
        arg("size", Int),
        arg("list", IntArray).len(ReturnValue).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(116, "setgroups", &[
        arg("size", Int),
        arg("list", IntArray).len(Preceding),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(117, "setresuid", &[
        arg("ruid", Int),
        arg("euid", Int),
        arg("suid", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(118, "getresuid", &[
        arg("ruid", Int).destination(),
        arg("euid", Int).destination(),
        arg("suid", Int).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(119, "setresgid", &[
        arg("rgid", Int),
        arg("egid", Int),
        arg("sgid", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(120, "getresgid", &[
        arg("rgid", Int).destination(),
        arg("egid", Int).destination(),
        arg("sgid", Int).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(121, "getpgid", &[
        arg("pid", Int),
    ], ret(Int)),
    entry(122, "setfsuid", &[
        arg("fsuid", Int),
    ], ret(Int)),
    entry(123, "setfsgid", &[
        arg("fsgid", Int),
    ], ret(Int)),
    entry(124, "getsid", &[
        arg("pid", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(125, "capget", &[
        arg("header", CapUserHeader).destination(),
        arg("data", CapUserData).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(126, "capset", &[
        arg("header", CapUserHeader),
        arg("data", CapUserData),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(127, "rt_sigpending", &[
        arg("set", Address),
        arg("sigsetsize", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(128, "rt_sigtimedwait", &[
        arg("set", Address),
        arg("info", Siginfo),
        arg("timeout", Timespec),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(129, "rt_sigqueueinfo", &[
        arg("pid", Int),
        arg("sig", Int).annotate(annotate::signal),
        arg("info", Siginfo),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(130, "rt_sigsuspend", &[
        arg("set", Address),
    ], ret(Int)),
    entry(131, "sigaltstack", &[
        arg("ss", Stack),
        arg("old_ss", Stack).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(132, "utime", &[
        arg("filename", String).len(NullTerminator),
        arg("times", Utimbuf),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(133, "mknod", &[
        arg("filename", String).len(NullTerminator),
        arg("mode", Int),
        arg("dev", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(134, "uselib", &[
        arg("library", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(135, "personality", &[
        arg("persona", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(136, "ustat", &[
        arg("dev", Int),
        arg("ubuf", Ustat).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(137, "statfs", &[
        arg("path", String).len(NullTerminator),
        arg("buf", Statfs).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(138, "fstatfs", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("buf", Statfs).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(139, "sysfs", &[
        arg("option", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno))
    .modifier(1, sysfs_args),
    entry(140, "getpriority", &[
        arg("which", Int),
        arg("who", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(141, "setpriority", &[
        arg("which", Int),
        arg("who", Int),
        arg("prio", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(142, "sched_setparam", &[
        arg("pid", Int),
        arg("param", SchedParam),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(143, "sched_getparam", &[
        arg("pid", Int),
        arg("param", SchedParam).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(144, "sched_setscheduler", &[
        arg("pid", Int),
        arg("policy", Int),
        arg("param", SchedParam),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(145, "sched_getscheduler", &[
        arg("pid", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(146, "sched_get_priority_max", &[
        arg("policy", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(147, "sched_get_priority_min", &[
        arg("policy", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(148, "sched_rr_get_interval", &[
        arg("pid", Int),
        arg("interval", Timespec).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(149, "mlock", &[
        arg("addr", Address).annotate(annotate::null),
        arg("len", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(150, "munlock", &[
        arg("addr", Address).annotate(annotate::null),
        arg("len", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(151, "mlockall", &[
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(152, "munlockall", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(153, "vhangup", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(154, "modify_ldt", &[
        arg("func", Int).annotate(annotate::ldt_func),
        arg("ptr", UserDesc).destination(),
        arg("bytecount", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(155, "pivot_root", &[
        arg("new_root", String).len(NullTerminator),
        arg("put_old", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(156, "sysctl", &[
        arg("args", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(157, "prctl", &[
        arg("option", Int),
        arg("arg2", UnsignedLong),
        arg("arg3", UnsignedLong),
        arg("arg4", UnsignedLong),
        arg("arg5", UnsignedLong),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(158, "arch_prctl", &[
        arg("code", Int),
        arg("addr", Address).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(159, "adjtimex", &[
        arg("buf", Timex),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(160, "setrlimit", &[
        arg("resource", Int),
        arg("rlim", Rlimit),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(161, "chroot", &[
        arg("path", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(162, "sync", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(163, "acct", &[
        arg("filename", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(164, "settimeofday", &[
        arg("tv", Timeval),
        arg("tz", Timezone),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(165, "mount", &[
        arg("source", String).len(NullTerminator),
        arg("target", String).len(NullTerminator),
        arg("filesystemtype", String).len(NullTerminator),
        arg("mountflags", UnsignedLong),
        arg("data", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(166, "umount2", &[
        arg("target", String).len(NullTerminator),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(167, "swapon", &[
        arg("path", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(168, "swapoff", &[
        arg("path", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(169, "reboot", &[
        arg("magic", Int),
        arg("magic2", Int),
        arg("cmd", Int),
        arg("arg", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(170, "sethostname", &[
        arg("name", Data).len(Following),
        arg("len", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(171, "setdomainname", &[
        arg("name", Data).len(Following),
        arg("len", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(172, "iopl", &[
        arg("level", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(173, "ioperm", &[
        arg("from", UnsignedLong),
        arg("num", UnsignedLong),
        arg("turn_on", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(174, "create_module", &[
        arg("name", String).len(NullTerminator),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(175, "init_module", &[
        arg("module_image", Address),
        arg("len", UnsignedLong),
        arg("param_values", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(176, "delete_module", &[
        arg("name", String).len(NullTerminator),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(177, "get_kernel_syms", &[
        arg("table", Address).annotate(annotate::null),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(178, "query_module", &[
        arg("name", String).len(NullTerminator),
        arg("which", Int),
        arg("buf", Address),
        arg("bufsize", Int),
        arg("ret", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(179, "quotactl", &[
        arg("cmd", Int),
        arg("special", String).len(NullTerminator),
        arg("id", Int),
        arg("addr", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(180, "nfsservctl", &[
        arg("cmd", Int),
        arg("argp", Address),
        arg("resp", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(181, "getpmsg", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("ctlptr", Address),
        arg("dataptr", Address),
        arg("bandp", Address),
        arg("flagsp", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(182, "putpmsg", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("ctlptr", Address),
        arg("dataptr", Address),
        arg("band", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(183, "afs_syscall", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(184, "tuxcall", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(185, "security", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(186, "gettid", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(187, "readahead", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("offset", Long),
        arg("count", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(188, "setxattr", &[
        arg("path", String).len(NullTerminator),
        arg("name", String).len(NullTerminator),
        arg("value", Data).len(Following),
        arg("size", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(189, "lsetxattr", &[
        arg("path", String).len(NullTerminator),
        arg("name", String).len(NullTerminator),
        arg("value", Data).len(Following),
        arg("size", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(190, "fsetxattr", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("name", String).len(NullTerminator),
        arg("value", Data).len(Following),
        arg("size", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(191, "getxattr", &[
        arg("path", String).len(NullTerminator),
        arg("name", String).len(NullTerminator),
        arg("value", Data).len(ReturnValue).destination(),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(192, "lgetxattr", &[
        arg("path", String).len(NullTerminator),
        arg("name", String).len(NullTerminator),
        arg("value", Data).len(ReturnValue).destination(),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(193, "fgetxattr", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("name", String).len(NullTerminator),
        arg("value", Data).len(ReturnValue).destination(),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(194, "listxattr", &[
        arg("path", String).len(NullTerminator),
        arg("list", Data).len(ReturnValue).destination(),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(195, "llistxattr", &[
        arg("path", String).len(NullTerminator),
        arg("list", Data).len(ReturnValue).destination(),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(196, "flistxattr", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("list", Data).len(ReturnValue).destination(),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(197, "removexattr", &[
        arg("path", String).len(NullTerminator),
        arg("name", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(198, "lremovexattr", &[
        arg("path", String).len(NullTerminator),
        arg("name", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(199, "fremovexattr", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("name", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(200, "tkill", &[
        arg("tid", Int),
        arg("sig", Int).annotate(annotate::signal),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(201, "time", &[
        arg("t", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(202, "futex", &[
        arg("uaddr", Address),
        arg("op", Int),
        arg("val", Int),
        arg("timeout", Timespec).optional(),
        arg("uaddr2", Address).optional(),
        arg("val3", Int).optional(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(203, "sched_setaffinity", &[
        arg("pid", Int),
        arg("len", Int),
        arg("user_mask_ptr", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(204, "sched_getaffinity", &[
        arg("pid", Int),
        arg("len", Int),
        arg("user_mask_ptr", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(205, "set_thread_area", &[
        arg("u_info", UserDesc),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(206, "io_setup", &[
        arg("nr_events", Int),
        arg("ctx_idp", UnsignedIntPtr).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(207, "io_destroy", &[
        arg("ctx_id", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(208, "io_getevents", &[
        arg("ctx_id", UnsignedInt),
        arg("min_nr", Long),
        arg("nr", Long),
        arg("events", IoEvents),
        arg("timeout", Timespec),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(209, "io_submit", &[
        arg("ctx_id", UnsignedInt),
        arg("nr", Long),
        arg("iocbpp", Iocb),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(210, "io_cancel", &[
        arg("ctx_id", UnsignedInt),
        arg("iocb", Iocb),
        arg("result", IoEvent),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(211, "get_thread_area", &[
        arg("u_info", UserDesc).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(212, "lookup_dcookie", &[
        arg("cookie64", UnsignedLong),
        arg("buf", Data).len(ReturnValue).destination().annotate(annotate::trim_nul),
        arg("len", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(213, "epoll_create", &[
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(214, "epoll_ctl_old", &[
        arg("epfd", Int),
        arg("op", Int),
        arg("fd", Int).annotate(annotate::fd),
        arg("event", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(215, "epoll_wait_old", &[
        arg("epfd", Int),
        arg("events", Address),
        arg("maxevents", Int),
        arg("timeout", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(216, "remap_file_pages", &[
        arg("start", Address),
        arg("size", Int),
        arg("prot", Int).annotate(annotate::prot),
        arg("pgoff", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(217, "getdents64", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("dirp", Address),
        arg("count", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(218, "set_tid_address", &[
        arg("tidptr", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(219, "restart_syscall", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(220, "semtimedop", &[
        arg("semid", Int),
        arg("sops", Sembuf),
        arg("nsops", UnsignedInt),
        arg("timeout", Timespec),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(221, "fadvise64", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("offset", Long),
        arg("len", Long),
        arg("advice", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(222, "timer_create", &[
        arg("clockid", Int).annotate(annotate::clock_id),
        arg("sevp", Address),
        arg("timerid", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(223, "timer_settime", &[
        arg("timerid", Int),
        arg("flags", Int),
        arg("new_value", Itimerspec),
        arg("old_value", Itimerspec).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(224, "timer_gettime", &[
        arg("timerid", Int),
        arg("curr_value", Itimerspec).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(225, "timer_getoverrun", &[
        arg("timerid", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(226, "timer_delete", &[
        arg("timerid", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(227, "clock_settime", &[
        arg("clockid", Int).annotate(annotate::clock_id),
        arg("tp", Timespec),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(228, "clock_gettime", &[
        arg("clockid", Int).annotate(annotate::clock_id),
        arg("tp", Timespec).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(229, "clock_getres", &[
        arg("clockid", Int),
        arg("res", Timespec).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(230, "clock_nanosleep", &[
        arg("clockid", Int).annotate(annotate::clock_id),
        arg("flags", Int),
        arg("rqtp", Timespec),
        arg("rmtp", Timespec).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(231, "exit_group", &[
        arg("status", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(232, "epoll_wait", &[
        arg("epfd", Int),
        arg("events", EpollEvent).destination(),
        arg("maxevents", Int),
        arg("timeout", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(233, "epoll_ctl", &[
        arg("epfd", Int),
        arg("op", Int),
        arg("fd", Int).annotate(annotate::fd),
        arg("event", EpollEvent),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(234, "tgkill", &[
        arg("tgid", Int),
        arg("pid", Int),
        arg("sig", Int).annotate(annotate::signal),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(235, "utimes", &[
        arg("filename", String).len(NullTerminator),
        arg("times", TimevalArray).fixed(2),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(236, "vserver", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(237, "mbind", &[
        arg("addr", Address),
        arg("len", UnsignedLong),
        arg("mode", Int),
        arg("nodemask", UnsignedLong),
        arg("maxnode", UnsignedLong),
        arg("flags", UnsignedLong),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(238, "set_mempolicy", &[
        arg("mode", Int),
        arg("nodemask", Address),
        arg("maxnode", UnsignedLong),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(239, "get_mempolicy", &[
        arg("mode", Int),
        arg("nodemask", Address),
        arg("maxnode", Address),
        arg("addr", Address),
        arg("flags", UnsignedLong),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(240, "mq_open", &[
        arg("name", String).len(NullTerminator),
        arg("oflag", Int).annotate(annotate::open_flags),
        arg("mode", Int).optional(),
        arg("attr", MqAttr).optional(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(241, "mq_unlink", &[
        arg("name", String).len(NullTerminator),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(242, "mq_timedsend", &[
        arg("mqdes", Int),
        arg("msg_ptr", Data).len(Following),
        arg("msg_len", UnsignedLong),
        arg("msg_prio", UnsignedLong),
        arg("abs_timeout", Timespec),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(243, "mq_timedreceive", &[
        arg("mqdes", Int),
        arg("msg_ptr", Data).len(ReturnValue).destination(),
        arg("msg_len", UnsignedLong),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(244, "mq_notify", &[
        arg("mqdes", Int),
        arg("notification", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(245, "mq_getsetattr", &[
        arg("mqdes", Int),
        arg("mqstat", MqAttr),
        arg("omqstat", MqAttr).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(246, "kexec_load", &[
        arg("entry", UnsignedLong),
        arg("nr_segments", UnsignedLong),
        arg("segments", Address),
        arg("flags", UnsignedLong),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(247, "waitid", &[
        arg("idtype", Int),
        arg("id", Int),
        arg("infop", Siginfo).destination(),
        arg("options", Int).annotate(annotate::wait_options),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(248, "add_key", &[
        arg("type", String).len(NullTerminator),
        arg("description", String).len(NullTerminator),
        arg("payload", Data).len(Following),
        arg("plen", UnsignedLong),
        arg("keyring", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(249, "request_key", &[
        arg("type", String).len(NullTerminator),
        arg("description", String).len(NullTerminator),
        arg("callout_info", String).len(NullTerminator),
        arg("keyring", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(250, "keyctl", &[
        arg("cmd", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(251, "ioprio_set", &[
        arg("which", Int),
        arg("who", Int),
        arg("ioprio", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(252, "ioprio_get", &[
        arg("which", Int),
        arg("who", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(253, "inotify_init", &[], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(254, "inotify_add_watch", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("mask", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(255, "inotify_rm_watch", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("wd", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(256, "migrate_pages", &[
        arg("pid", Int),
        arg("maxnode", UnsignedLong),
        arg("old_nodes", Address),
        arg("new_nodes", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(257, "openat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("filename", String).len(NullTerminator),
        arg("flags", Int).annotate(annotate::open_flags),
        arg("mode", Int).optional(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(258, "mkdirat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("mode", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(259, "mknodat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("mode", Int),
        arg("dev", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(260, "fchownat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("filename", String).len(NullTerminator),
        arg("owner", Int),
        arg("group", Int),
        arg("flags", Int).annotate(annotate::at_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(261, "futimesat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("filename", String).len(NullTerminator),
        arg("times", TimevalArray).fixed(2),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(262, "newfstatat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("filename", String).len(NullTerminator),
        arg("statbuf", Stat).destination(),
        arg("flag", Int).annotate(annotate::at_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(263, "unlinkat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("flags", Int).annotate(annotate::at_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(264, "renameat", &[
        arg("olddfd", Int).annotate(annotate::fd),
        arg("oldname", String).len(NullTerminator),
        arg("newdfd", Int).annotate(annotate::fd),
        arg("newname", String).len(NullTerminator),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(265, "linkat", &[
        arg("olddfd", Int).annotate(annotate::fd),
        arg("oldname", String).len(NullTerminator),
        arg("newdfd", Int).annotate(annotate::fd),
        arg("newname", String).len(NullTerminator),
        arg("flags", Int).annotate(annotate::at_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(266, "symlinkat", &[
        arg("oldname", String).len(NullTerminator),
        arg("newdfd", Int).annotate(annotate::fd),
        arg("newname", String).len(NullTerminator),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(267, "readlinkat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("buf", Data).len(ReturnValue).destination(),
        arg("bufsiz", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(268, "fchmodat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("mode", Int),
        arg("flags", Int).annotate(annotate::at_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(269, "faccessat", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("mode", Int).annotate(annotate::access_mode),
        arg("flags", Int).optional().annotate(annotate::at_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(270, "pselect6", &[
        arg("nfds", Int),
        arg("readfds", FdSet),
        arg("writefds", FdSet),
        arg("exceptfds", FdSet),
        arg("timeout", Timeval),
        arg("sigmask", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(271, "ppoll", &[
        arg("fds", PollFdArray),
        arg("nfds", Int),
        arg("timeout", Timespec),
        arg("sigmask", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(272, "unshare", &[
        arg("flags", Int).annotate(annotate::clone_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(273, "set_robust_list", &[
        arg("head", Address),
        arg("len", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(274, "get_robust_list", &[
        arg("pid", Int),
        arg("head_ptr", Address),
        arg("len_ptr", Address),
    ], ret(Int)),
    entry(275, "splice", &[
        arg("fd_in", Int).annotate(annotate::fd),
        arg("off_in", Address),
        arg("fd_out", Int).annotate(annotate::fd),
        arg("off_out", Address),
        arg("len", Int),
        arg("flags", Int),
    ], ret(Int)),
    entry(276, "tee", &[
        arg("fd_in", Int).annotate(annotate::fd),
        arg("fd_out", Int).annotate(annotate::fd),
        arg("len", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(277, "sync_file_range", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("offset", Int),
        arg("nbytes", Int),
        arg("flags", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(278, "vmsplice", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("iov", IovecArray).destination(),
        arg("nr_segs", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(279, "move_pages", &[
        arg("pid", Int),
        arg("nr_pages", UnsignedLong),
        arg("pages", Address),
        arg("nodes", Address),
        arg("status", Address).destination(),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(280, "utimensat", &[
        arg("dirfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("times", TimespecArray).fixed(2),
        arg("flags", Int).annotate(annotate::at_flags),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(281, "epoll_pwait", &[
        arg("epfd", Int),
        arg("events", EpollEvent).destination(),
        arg("maxevents", Int),
        arg("timeout", Int),
        arg("sigmask", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(282, "signalfd", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("mask", Address),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(283, "timerfd_create", &[
        arg("clockid", Int).annotate(annotate::clock_id),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(284, "eventfd", &[
        arg("count", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(285, "fallocate", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("mode", Int),
        arg("offset", Int),
        arg("len", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(286, "timerfd_settime", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("flags", Int),
        arg("utmr", Itimerspec),
        arg("otmr", Itimerspec).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(287, "timerfd_gettime", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("otmr", Itimerspec).destination(),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(288, "accept4", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("addr", Sockaddr).len(FollowingDereferenced).destination(),
        arg("addrlen", UnsignedIntPtr).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(289, "signalfd4", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("mask", Address),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(290, "eventfd2", &[
        arg("count", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(291, "epoll_create1", &[
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(292, "dup3", &[
        arg("oldfd", Int),
        arg("newfd", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(293, "pipe2", &[
        arg("pipefd", IntArray).fixed(2).destination().annotate(annotate::fd_array),
        arg("flags", Int),
    ], ret(ErrorCode).annotate(annotate::errno)),
    entry(294, "inotify_init1", &[
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(295, "preadv", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("iov", IovecArray).destination(),
        arg("iovcnt", Int),
        arg("offset", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(296, "pwritev", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("iov", IovecArray),
        arg("iovcnt", Int),
        arg("offset", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(297, "rt_tgsigqueueinfo", &[
        arg("tgid", Int),
        arg("pid", Int),
        arg("sig", Int).annotate(annotate::signal),
        arg("uinfo", Siginfo),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(298, "perf_event_open", &[
        arg("attr", Address),
        arg("pid", Int),
        arg("cpu", Int),
        arg("group_fd", Int),
        arg("flags", UnsignedLong),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(299, "recvmmsg", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("msgvec", MmsghdrArray).destination(),
        arg("vlen", Int),
        arg("flags", Int).annotate(annotate::msg_flags),
        arg("timeout", Timeval),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(300, "fanotify_init", &[
        arg("flags", UnsignedLong),
        arg("event_f_flags", UnsignedLong),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(301, "fanotify_mark", &[
        arg("fanotify_fd", Int).annotate(annotate::fd),
        arg("flags", UnsignedLong),
        arg("mask", UnsignedLong),
        arg("dfd", Int).annotate(annotate::fd),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(302, "prlimit64", &[
        arg("pid", Int),
        arg("resource", Int),
        arg("new_rlim", Rlimit),
        arg("old_rlim", Rlimit).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(303, "name_to_handle_at", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("handle", Address),
        arg("mount_id", UnsignedIntPtr).destination(),
        arg("flags", Int).annotate(annotate::open_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(304, "open_by_handle_at", &[
        arg("mount_fd", Int),
        arg("handle", Address),
        arg("flags", Int).annotate(annotate::open_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(305, "clock_adjtime", &[
        arg("clk_id", Int).annotate(annotate::clock_id),
        arg("utx", Timex),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(306, "syncfs", &[
        arg("fd", Int).annotate(annotate::fd),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(307, "sendmmsg", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("msgvec", MmsghdrArray),
        arg("vlen", Int),
        arg("flags", Int).annotate(annotate::msg_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(308, "setns", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("nstype", Int).annotate(annotate::clone_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(309, "getcpu", &[
        arg("cpu", UnsignedIntPtr).destination(),
        arg("node", UnsignedIntPtr).destination(),
        arg("tcache", Address).annotate(annotate::null),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(310, "process_vm_readv", &[
        arg("pid", Int),
        arg("local_iov", IovecArray),
        arg("liovcnt", Int),
        arg("remote_iov", IovecArray),
        arg("riovcnt", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(311, "process_vm_writev", &[
        arg("pid", Int),
        arg("local_iov", IovecArray),
        arg("liovcnt", Int),
        arg("remote_iov", IovecArray),
        arg("riovcnt", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(312, "kcmp", &[
        arg("pid1", Int),
        arg("pid2", Int),
        arg("type", Int),
        arg("idx1", UnsignedLong),
        arg("idx2", UnsignedLong),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(313, "finit_module", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("uargs", String).len(NullTerminator),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(314, "sched_setattr", &[
        arg("pid", Int),
        arg("attr", SchedAttr),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(315, "sched_getattr", &[
        arg("pid", Int),
        arg("attr", SchedAttr).destination(),
        arg("size", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(316, "renameat2", &[
        arg("oldfd", Int).annotate(annotate::fd),
        arg("oldname", String).len(NullTerminator),
        arg("newfd", Int).annotate(annotate::fd),
        arg("newname", String).len(NullTerminator),
        arg("flags", Int).annotate(annotate::at_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(317, "seccomp", &[
        arg("op", Int),
        arg("flags", Int),
        arg("uargs", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(318, "getrandom", &[
        arg("buf", Data).len(ReturnValue).destination(),
        arg("count", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(319, "memfd_create", &[
        arg("name", String).len(NullTerminator),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(320, "kexec_file_load", &[
        arg("kernel_fd", Int).annotate(annotate::fd),
        arg("initrd_fd", Int).annotate(annotate::fd),
        arg("cmdline_len", Int),
        arg("cmdline_ptr", Address),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(321, "bpf", &[
        arg("cmd", Int),
        arg("attr", Address),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(322, "execveat", &[
        arg("dirfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("argv", StringArray),
        arg("envp", StringArray),
        arg("flags", Int).annotate(annotate::at_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(323, "userfaultfd", &[
        arg("flags", Int).annotate(annotate::open_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(324, "membarrier", &[
        arg("cmd", Int),
        arg("flags", Int),
        arg("cpuid", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(325, "mlock2", &[
        arg("addr", Address).annotate(annotate::null),
        arg("len", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(326, "copy_file_range", &[
        arg("fd_in", Int).annotate(annotate::fd),
        arg("off_in", UnsignedInt64Ptr),
        arg("fd_out", Int).annotate(annotate::fd),
        arg("off_out", UnsignedInt64Ptr),
        arg("len", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(327, "preadv2", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("iov", IovecArray).destination(),
        arg("iovcnt", Int),
        arg("offset", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(328, "pwritev2", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("iov", IovecArray),
        arg("iovcnt", Int),
        arg("offset", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(329, "pkey_mprotect", &[
        arg("addr", Address),
        arg("len", Int),
        arg("prot", Int).annotate(annotate::prot),
        arg("pkey", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(330, "pkey_alloc", &[
        arg("flags", Int),
        arg("access_rights", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(331, "pkey_free", &[
        arg("pkey", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(332, "statx", &[
        arg("dirfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("flags", Int).annotate(annotate::at_flags),
        arg("mask", Int),
        arg("statxbuf", Statx).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(333, "io_pgetevents", &[
        arg("ctx_id", Int).annotate(annotate::fd),
        arg("nr", UnsignedLong),
        arg("events", IoEvents).destination(),
        arg("timeout", Timespec),
        arg("usig", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(334, "rseq", &[
        arg("rseq", Address),
        arg("rseq_len", Int),
        arg("flags", Int),
        arg("sig", Int).annotate(annotate::signal),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(424, "pidfd_send_signal", &[
        arg("pidfd", Int),
        arg("sig", Int).annotate(annotate::signal),
        arg("info", Siginfo),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(425, "io_uring_setup", &[
        arg("entries", UnsignedInt),
        arg("params", IoUringParams).destination(),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(426, "io_uring_enter", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("to_submit", UnsignedInt),
        arg("min_complete", UnsignedInt),
        arg("flags", UnsignedInt),
        arg("sig", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(427, "io_uring_register", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("opcode", UnsignedInt),
        arg("arg", Address),
        arg("nr_args", UnsignedInt),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(428, "open_tree", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("filename", String).len(NullTerminator),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(429, "move_mount", &[
        arg("from_dfd", Int).annotate(annotate::fd),
        arg("from_pathname", String).len(NullTerminator),
        arg("to_dfd", Int).annotate(annotate::fd),
        arg("to_pathname", String).len(NullTerminator),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(430, "fsopen", &[
        arg("fs_name", String).len(NullTerminator),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(431, "fsconfig", &[
        arg("fs_fd", Int).annotate(annotate::fd),
        arg("cmd", Int),
        arg("key", String).len(NullTerminator),
        arg("value", String).len(NullTerminator),
        arg("aux", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(432, "fsmount", &[
        arg("fs_fd", Int).annotate(annotate::fd),
        arg("flags", Int),
        arg("ms_flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(433, "fspick", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("path", String).len(NullTerminator),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(434, "pidfd_open", &[
        arg("pid", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(435, "clone3", &[
        arg("clone_args", CloneArgs),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(436, "close_range", &[
        arg("first", Int),
        arg("last", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(437, "openat2", &[
        arg("dirfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("how", OpenHow),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(438, "pidfd_getfd", &[
        arg("pidfd", Int).annotate(annotate::fd),
        arg("targetfd", Int).annotate(annotate::fd),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(439, "faccessat2", &[
        arg("dfd", Int).annotate(annotate::fd),
        arg("pathname", String).len(NullTerminator),
        arg("mode", Int).annotate(annotate::access_mode),
        arg("flags", Int).optional().annotate(annotate::at_flags),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(440, "process_madvise", &[
        arg("pidfd", Int).annotate(annotate::fd),
        arg("iovec", IovecArray),
        arg("iovcnt", Int),
        arg("advice", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(441, "epoll_pwait2", &[
        arg("epfd", Int),
        arg("events", EpollEvent).destination(),
        arg("maxevents", Int),
        arg("timeout", Timespec),
        arg("sigmask", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(442, "mount_setattr", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("path", String).len(NullTerminator),
        arg("flags", Int).annotate(annotate::at_flags),
        arg("uattr", MountAttr),
        arg("size", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(443, "quotactl_fd", &[
        arg("fd", Int).annotate(annotate::fd),
        arg("cmd", Int),
        arg("id", Int),
        arg("addr", Address),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(444, "landlock_create_ruleset", &[
        arg("ruleset_attr", LandlockRulesetAttr),
        arg("size", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(445, "landlock_add_rule", &[
        arg("ruleset_fd", Int),
        arg("rule_type", Int),
        arg("rule_attr", Address),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(446, "landlock_restrict_self", &[
        arg("ruleset_fd", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(447, "memfd_secret", &[
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(448, "process_mrelease", &[
        arg("pidfd", Int),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(449, "futex_waitv", &[
        arg("waiters", Address),
        arg("nr_waiters", Int),
        arg("flags", Int),
        arg("timeout", Timespec),
        arg("clockid", Int).annotate(annotate::clock_id),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
    entry(450, "set_mempolicy_home_node", &[
        arg("start", Address),
        arg("len", UnsignedLong),
        arg("home_node", UnsignedLong),
        arg("flags", Int),
    ], ret(IntOrErrorCode).annotate(annotate::errno)),
];

const F_SETSIG: i32 = 10;

// The third `fcntl` argument is an int, a lock pointer, or absent, depending on `cmd`.
fn fcntl_arg(input: &ModifierInput<'_>) -> Vec<Arg> {
    let cmd = input.arg_raw(1).unwrap_or(0) as i32;
    let raw = input.raw[2];

    match cmd {
        libc::F_SETFL => {
            let mut arg = Arg::scalar("arg", raw, ScalarKind::Int);
            annotate::open_flags(&mut arg, input.memory.pid());
            vec![arg]
        },
        libc::F_DUPFD
        | libc::F_DUPFD_CLOEXEC
        | libc::F_SETFD
        | libc::F_SETOWN
        | F_SETSIG
        | libc::F_SETLEASE
        | libc::F_NOTIFY
        | libc::F_SETPIPE_SZ => vec![Arg::scalar("arg", raw, ScalarKind::Int)],
        libc::F_GETLK | libc::F_SETLK | libc::F_SETLKW => vec![Arg::address("arg", raw)],
        _ => vec![],
    }
}

// `sysfs(1, fsname)`, `sysfs(2, fs_index, buf)`, or `sysfs(3)`.
fn sysfs_args(input: &ModifierInput<'_>) -> Vec<Arg> {
    let string = |name, raw| {
        let arg = Input {
            extent: Extent::Terminated,
            ..Input::new(name, raw)
        };
        types::handle(ArgType::String, &arg, input.memory)
    };

    match input.arg_raw(0).unwrap_or(0) as i32 {
        1 => vec![string("fsname", input.raw[1])],
        2 => vec![
            Arg::scalar("fs_index", input.raw[1], ScalarKind::UnsignedInt),
            string("buf", input.raw[2]),
        ],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arg::ArgSlot;
    use crate::memory::MemoryImage;
    use crate::ptracer::Pid;

    fn modifier_input<'a>(
        args: &'a [ArgSlot],
        raw: &'a [u64; 6],
        memory: &'a MemoryImage,
    ) -> ModifierInput<'a> {
        ModifierInput { args, raw, memory }
    }

    fn known(name: &'static str, raw: u64) -> ArgSlot {
        ArgSlot::Known(Arg::scalar(name, raw, ScalarKind::Int))
    }

    #[test]
    fn test_fcntl_arg_by_command() {
        let mem = MemoryImage::new(Pid::from_raw(1));

        let setfl = [known("fd", 3), known("cmd", libc::F_SETFL as u64)];
        let raw = [3, libc::F_SETFL as u64, libc::O_NONBLOCK as u64, 0, 0, 0];
        let args = fcntl_arg(&modifier_input(&setfl, &raw, &mem));
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].annotation(), Some("O_RDONLY|O_NONBLOCK"));

        let getfd = [known("fd", 3), known("cmd", libc::F_GETFD as u64)];
        let raw = [3, libc::F_GETFD as u64, 0xdead, 0, 0, 0];
        assert!(fcntl_arg(&modifier_input(&getfd, &raw, &mem)).is_empty());

        let setlk = [known("fd", 3), known("cmd", libc::F_SETLK as u64)];
        let raw = [3, libc::F_SETLK as u64, 0x1000, 0, 0, 0];
        let args = fcntl_arg(&modifier_input(&setlk, &raw, &mem));
        assert_eq!(args[0].kind(), Some(ScalarKind::Address));
    }

    #[test]
    fn test_sysfs_args_by_option() {
        let mem = MemoryImage::new(Pid::from_raw(1)).with(0x1000, &b"ext4\0"[..]);

        let by_name = [known("option", 1)];
        let raw = [1, 0x1000, 0, 0, 0, 0];
        let args = sysfs_args(&modifier_input(&by_name, &raw, &mem));
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].data(), Some(&b"ext4"[..]));

        let by_index = [known("option", 2)];
        let raw = [2, 4, 0x1000, 0, 0, 0];
        let args = sysfs_args(&modifier_input(&by_index, &raw, &mem));
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].raw(), 4);

        let count = [known("option", 3)];
        let raw = [3, 0, 0, 0, 0, 0];
        assert!(sysfs_args(&modifier_input(&count, &raw, &mem)).is_empty());
    }
}
