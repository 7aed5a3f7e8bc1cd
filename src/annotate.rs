//! Annotation hooks referenced by the syscall catalog.
//!
//! Each hook may attach a human-readable label to a materialized argument, and choose
//! whether a printer should show it instead of the raw value.

use std::fs;

use nix::errno::Errno;
use nix::sys::signal::Signal;

use crate::arg::{Arg, Value};
use crate::ptracer::Pid;

/// Signature shared by all hooks.
pub type Annotator = fn(&mut Arg, Pid);

macro_rules! names {
    ($($name: ident),* $(,)?) => {
        &[$((libc::$name as u64, stringify!($name))),*]
    };
}

type Names = [(u64, &'static str)];

// Every name whose bits are all present in `raw`.
fn bits(raw: u64, table: &Names) -> Vec<&'static str> {
    table
        .iter()
        .filter(|(value, _)| *value != 0 && raw & value == *value)
        .map(|(_, name)| *name)
        .collect()
}

fn set_bits(arg: &mut Arg, names: Vec<&str>) {
    arg.set_annotation(names.join("|"), true);
}

fn set_one_of(arg: &mut Arg, raw: u64, table: &Names) {
    if let Some((_, name)) = table.iter().find(|(value, _)| *value == raw) {
        arg.set_annotation(*name, true);
    }
}

/// A file descriptor, labelled with what it refers to.
pub fn fd(arg: &mut Arg, pid: Pid) {
    let fd = arg.int();

    if fd == libc::AT_FDCWD as i64 {
        arg.set_annotation("AT_FDCWD", true);
        return;
    }

    match fd {
        0 => arg.set_annotation("STDIN", false),
        1 => arg.set_annotation("STDOUT", false),
        2 => arg.set_annotation("STDERR", false),
        fd if fd > 0 => {
            if let Ok(target) = fs::read_link(format!("/proc/{}/fd/{}", pid, fd)) {
                arg.set_annotation(target.to_string_lossy(), false);
            }
        },
        _ => {},
    }
}

/// An array of descriptors, e.g. the pair filled in by `pipe`.
pub fn fd_array(arg: &mut Arg, pid: Pid) {
    if let Some(items) = arg.items_mut() {
        for item in items {
            fd(item, pid);
        }
    }
}

pub fn null(arg: &mut Arg, _pid: Pid) {
    if arg.raw() == 0 {
        arg.set_annotation("NULL", true);
    }
}

/// Drop everything from the first NUL of a fixed-size buffer.
pub fn trim_nul(arg: &mut Arg, _pid: Pid) {
    if let Some(data) = arg.data_mut() {
        if let Some(nul) = data.iter().position(|b| *b == 0) {
            data.truncate(nul);
        }
    }
}

static OPEN_FLAGS: &Names = names![
    O_APPEND,
    O_ASYNC,
    O_CLOEXEC,
    O_CREAT,
    O_DIRECT,
    O_DIRECTORY,
    O_DSYNC,
    O_EXCL,
    O_NOATIME,
    O_NOCTTY,
    O_NOFOLLOW,
    O_NONBLOCK,
    O_PATH,
    O_SYNC,
    O_TMPFILE,
    O_TRUNC,
];

pub fn open_flags(arg: &mut Arg, _pid: Pid) {
    let raw = arg.raw();

    let mode = match raw as i32 & libc::O_ACCMODE {
        libc::O_WRONLY => "O_WRONLY",
        libc::O_RDWR => "O_RDWR",
        _ => "O_RDONLY",
    };

    let mut names = vec![mode];
    names.extend(bits(raw, OPEN_FLAGS));
    set_bits(arg, names);
}

pub fn access_mode(arg: &mut Arg, _pid: Pid) {
    if arg.raw() == libc::F_OK as u64 {
        arg.set_annotation("F_OK", true);
        return;
    }

    set_bits(arg, bits(arg.raw(), names![R_OK, W_OK, X_OK]));
}

pub fn at_flags(arg: &mut Arg, _pid: Pid) {
    let table = names![
        AT_SYMLINK_NOFOLLOW,
        AT_REMOVEDIR,
        AT_SYMLINK_FOLLOW,
        AT_NO_AUTOMOUNT,
        AT_EMPTY_PATH,
    ];
    set_bits(arg, bits(arg.raw(), table));
}

pub fn prot(arg: &mut Arg, _pid: Pid) {
    if arg.raw() == libc::PROT_NONE as u64 {
        arg.set_annotation("PROT_NONE", true);
        return;
    }

    let table = names![PROT_READ, PROT_WRITE, PROT_EXEC, PROT_GROWSDOWN, PROT_GROWSUP];
    set_bits(arg, bits(arg.raw(), table));
}

const MAP_TYPE: u64 = 0x3;
const MAP_SHARED_VALIDATE: u64 = 0x3;

pub fn mmap_flags(arg: &mut Arg, _pid: Pid) {
    let raw = arg.raw();

    let mut names = vec![];

    match raw & MAP_TYPE {
        MAP_SHARED_VALIDATE => names.push("MAP_SHARED_VALIDATE"),
        ty if ty == libc::MAP_SHARED as u64 => names.push("MAP_SHARED"),
        ty if ty == libc::MAP_PRIVATE as u64 => names.push("MAP_PRIVATE"),
        _ => {},
    }

    let table = names![
        MAP_ANONYMOUS,
        MAP_DENYWRITE,
        MAP_EXECUTABLE,
        MAP_FIXED,
        MAP_GROWSDOWN,
        MAP_HUGETLB,
        MAP_LOCKED,
        MAP_NONBLOCK,
        MAP_NORESERVE,
        MAP_POPULATE,
        MAP_STACK,
    ];
    names.extend(bits(raw, table));

    // Not exposed by libc on every target.
    names.extend(bits(raw, &[
        (0x40, "MAP_32BIT"),
        (0x80000, "MAP_SYNC"),
        (0x100000, "MAP_FIXED_NOREPLACE"),
    ]));

    set_bits(arg, names);
}

pub fn whence(arg: &mut Arg, _pid: Pid) {
    let raw = arg.raw();
    set_one_of(arg, raw, names![SEEK_SET, SEEK_CUR, SEEK_END, SEEK_DATA, SEEK_HOLE]);
}

pub fn signal(arg: &mut Arg, _pid: Pid) {
    if let Ok(signal) = Signal::try_from(arg.int() as i32) {
        arg.set_annotation(signal.as_str(), true);
    }
}

pub fn sigprocmask_how(arg: &mut Arg, _pid: Pid) {
    let raw = arg.raw();
    set_one_of(arg, raw, names![SIG_BLOCK, SIG_UNBLOCK, SIG_SETMASK]);
}

pub fn clock_id(arg: &mut Arg, _pid: Pid) {
    let raw = arg.raw();
    let table = names![
        CLOCK_REALTIME,
        CLOCK_MONOTONIC,
        CLOCK_PROCESS_CPUTIME_ID,
        CLOCK_THREAD_CPUTIME_ID,
        CLOCK_MONOTONIC_RAW,
        CLOCK_REALTIME_COARSE,
        CLOCK_MONOTONIC_COARSE,
        CLOCK_BOOTTIME,
        CLOCK_REALTIME_ALARM,
        CLOCK_BOOTTIME_ALARM,
        CLOCK_TAI,
    ];
    set_one_of(arg, raw, table);
}

static ADDRESS_FAMILIES: &Names = names![
    AF_UNSPEC,
    AF_UNIX,
    AF_INET,
    AF_AX25,
    AF_IPX,
    AF_APPLETALK,
    AF_X25,
    AF_INET6,
    AF_KEY,
    AF_NETLINK,
    AF_PACKET,
    AF_RDS,
    AF_IRDA,
    AF_LLC,
    AF_CAN,
    AF_TIPC,
    AF_BLUETOOTH,
    AF_ALG,
    AF_VSOCK,
];

/// Name of a socket address family, e.g. `AF_INET`.
pub fn address_family(raw: u64) -> Option<&'static str> {
    ADDRESS_FAMILIES
        .iter()
        .find(|(family, _)| *family == raw)
        .map(|(_, name)| *name)
}

pub fn socket_domain(arg: &mut Arg, _pid: Pid) {
    if let Some(name) = address_family(arg.raw()) {
        arg.set_annotation(name, true);
    }
}

pub fn socket_type(arg: &mut Arg, _pid: Pid) {
    let raw = arg.raw();
    let flags = (libc::SOCK_NONBLOCK | libc::SOCK_CLOEXEC) as u64;

    let types = names![SOCK_STREAM, SOCK_DGRAM, SOCK_RAW, SOCK_RDM, SOCK_SEQPACKET, SOCK_PACKET];
    let mut names: Vec<_> = types
        .iter()
        .filter(|(ty, _)| *ty == raw & !flags)
        .map(|(_, name)| *name)
        .collect();

    names.extend(bits(raw, names![SOCK_NONBLOCK, SOCK_CLOEXEC]));
    set_bits(arg, names);
}

pub fn msg_flags(arg: &mut Arg, _pid: Pid) {
    let table = names![
        MSG_OOB,
        MSG_PEEK,
        MSG_DONTROUTE,
        MSG_CTRUNC,
        MSG_TRUNC,
        MSG_DONTWAIT,
        MSG_EOR,
        MSG_WAITALL,
        MSG_CONFIRM,
        MSG_ERRQUEUE,
        MSG_NOSIGNAL,
        MSG_MORE,
        MSG_WAITFORONE,
        MSG_FASTOPEN,
        MSG_CMSG_CLOEXEC,
    ];
    set_bits(arg, bits(arg.raw(), table));
}

pub fn fcntl_cmd(arg: &mut Arg, _pid: Pid) {
    let raw = arg.raw();
    let table = names![
        F_DUPFD,
        F_GETFD,
        F_SETFD,
        F_GETFL,
        F_SETFL,
        F_GETLK,
        F_SETLK,
        F_SETLKW,
        F_SETOWN,
        F_GETOWN,
        F_SETLEASE,
        F_GETLEASE,
        F_NOTIFY,
        F_DUPFD_CLOEXEC,
        F_SETPIPE_SZ,
        F_GETPIPE_SZ,
        F_OFD_GETLK,
        F_OFD_SETLK,
        F_OFD_SETLKW,
        F_ADD_SEALS,
        F_GET_SEALS,
    ];
    set_one_of(arg, raw, table);
    set_one_of(arg, raw, &[(10, "F_SETSIG"), (11, "F_GETSIG")]);
}

pub fn wait_options(arg: &mut Arg, _pid: Pid) {
    let table = names![WNOHANG, WUNTRACED, WCONTINUED, WEXITED, WNOWAIT, __WALL, __WNOTHREAD, __WCLONE];
    set_bits(arg, bits(arg.raw(), table));
}

fn signal_name(signo: i32) -> String {
    match Signal::try_from(signo) {
        Ok(signal) => signal.as_str().to_owned(),
        Err(_) => signo.to_string(),
    }
}

pub fn wait_status(arg: &mut Arg, _pid: Pid) {
    let status = arg.raw() as i32;

    let text = if libc::WIFEXITED(status) {
        format!("WIFEXITED(s) && WEXITSTATUS(s) == {}", libc::WEXITSTATUS(status))
    } else if libc::WIFSIGNALED(status) {
        format!("WIFSIGNALED(s) && WTERMSIG(s) == {}", signal_name(libc::WTERMSIG(status)))
    } else if libc::WIFSTOPPED(status) {
        format!("WIFSTOPPED(s) && WSTOPSIG(s) == {}", signal_name(libc::WSTOPSIG(status)))
    } else {
        String::new()
    };

    arg.set_annotation(text, true);
}

pub fn clone_flags(arg: &mut Arg, _pid: Pid) {
    let raw = arg.raw();

    let table = names![
        CLONE_VM,
        CLONE_FS,
        CLONE_FILES,
        CLONE_SIGHAND,
        CLONE_PTRACE,
        CLONE_VFORK,
        CLONE_PARENT,
        CLONE_THREAD,
        CLONE_NEWNS,
        CLONE_SYSVSEM,
        CLONE_SETTLS,
        CLONE_PARENT_SETTID,
        CLONE_CHILD_CLEARTID,
        CLONE_DETACHED,
        CLONE_UNTRACED,
        CLONE_CHILD_SETTID,
        CLONE_NEWCGROUP,
        CLONE_NEWUTS,
        CLONE_NEWIPC,
        CLONE_NEWUSER,
        CLONE_NEWPID,
        CLONE_NEWNET,
        CLONE_IO,
    ];
    let mut names: Vec<String> = bits(raw, table).into_iter().map(String::from).collect();
    names.extend(bits(raw, &[(0x1000, "CLONE_PIDFD")]).into_iter().map(String::from));

    // The low byte is the signal sent to the parent on exit.
    let exit_signal = (raw & 0xff) as i32;
    if exit_signal != 0 {
        names.push(signal_name(exit_signal));
    }

    arg.set_annotation(names.join("|"), true);
}

/// `modify_ldt`'s function selector.
pub fn ldt_func(arg: &mut Arg, _pid: Pid) {
    let raw = arg.raw();
    set_one_of(arg, raw, &[(0, "read"), (1, "write"), (2, "read_default"), (0x11, "write_ex")]);
}

/// The `errno` name of a failed call's return value.
pub fn errno(arg: &mut Arg, _pid: Pid) {
    if !arg.is_error() {
        return;
    }

    let errno = Errno::from_i32(-(arg.raw() as i64) as i32);
    if errno != Errno::UnknownErrno {
        arg.set_annotation(format!("{:?} ({})", errno, errno.desc()), false);
    }
}

/// Path-like text carried by an argument, if any.
pub(crate) fn path_of(arg: &Arg) -> Option<String> {
    match arg.value() {
        Value::Bytes(data) if !data.is_empty() => Some(String::from_utf8_lossy(data).into_owned()),
        Value::Scalar(_) => arg
            .annotation()
            .filter(|a| a.starts_with('/'))
            .map(String::from),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::os::unix::io::AsRawFd;

    use super::*;
    use crate::arg::ScalarKind;

    fn int(raw: u64) -> Arg {
        Arg::scalar("", raw, ScalarKind::Int)
    }

    fn annotated(hook: Annotator, raw: u64) -> Option<String> {
        let mut arg = int(raw);
        hook(&mut arg, nix::unistd::getpid());
        arg.annotation().map(String::from)
    }

    #[test]
    fn test_fd() {
        assert_eq!(annotated(fd, 1).as_deref(), Some("STDOUT"));
        assert_eq!(annotated(fd, libc::AT_FDCWD as i64 as u64).as_deref(), Some("AT_FDCWD"));
        assert_eq!(annotated(fd, -1i64 as u64), None);
    }

    #[test]
    fn test_fd_resolves_proc_link() -> anyhow::Result<()> {
        let file = fs::File::open("/proc/self/status")?;
        let raw = file.as_raw_fd() as u64;

        let label = annotated(fd, raw).unwrap_or_default();

        assert!(label.ends_with("/status"), "{}", label);
        Ok(())
    }

    #[test]
    fn test_open_flags() {
        let raw = (libc::O_WRONLY | libc::O_CREAT | libc::O_TRUNC) as u64;

        assert_eq!(annotated(open_flags, raw).as_deref(), Some("O_WRONLY|O_CREAT|O_TRUNC"));
        assert_eq!(annotated(open_flags, 0).as_deref(), Some("O_RDONLY"));
    }

    #[test]
    fn test_mmap_flags() {
        let raw = (libc::MAP_PRIVATE | libc::MAP_ANONYMOUS) as u64;

        assert_eq!(annotated(mmap_flags, raw).as_deref(), Some("MAP_PRIVATE|MAP_ANONYMOUS"));
    }

    #[test]
    fn test_no_matching_flags_leaves_raw() {
        let mut arg = int(0);
        msg_flags(&mut arg, nix::unistd::getpid());

        assert_eq!(arg.annotation(), None);
        assert!(!arg.replace_with_annotation());
    }

    #[test]
    fn test_wait_status() {
        // Exited with status 3.
        assert_eq!(
            annotated(wait_status, 3 << 8).as_deref(),
            Some("WIFEXITED(s) && WEXITSTATUS(s) == 3"),
        );

        // Killed by SIGKILL.
        assert_eq!(
            annotated(wait_status, libc::SIGKILL as u64).as_deref(),
            Some("WIFSIGNALED(s) && WTERMSIG(s) == SIGKILL"),
        );
    }

    #[test]
    fn test_clone_flags_include_exit_signal() {
        let raw = (libc::CLONE_VM | libc::CLONE_VFORK | libc::SIGCHLD) as u64;

        assert_eq!(annotated(clone_flags, raw).as_deref(), Some("CLONE_VM|CLONE_VFORK|SIGCHLD"));
    }

    #[test]
    fn test_errno() {
        let mut ret = Arg::scalar("", -(libc::ENOENT as i64) as u64, ScalarKind::ErrorCode);
        errno(&mut ret, nix::unistd::getpid());

        assert_eq!(ret.annotation(), Some("ENOENT (No such file or directory)"));
        assert!(!ret.replace_with_annotation());
    }

    #[test]
    fn test_trim_nul() {
        let mut arg = Arg::bytes("buf", 0x1000, &b"/home\0garbage"[..]);
        trim_nul(&mut arg, nix::unistd::getpid());

        assert_eq!(arg.data(), Some(&b"/home"[..]));
    }

    #[test]
    fn test_signal() {
        assert_eq!(annotated(signal, libc::SIGTERM as u64).as_deref(), Some("SIGTERM"));
    }
}
