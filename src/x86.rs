use nix::sys::ptrace;

use crate::error::{Result, ResultExt};
use crate::ptracer::Pid;
use crate::syscall::RawSyscall;

/// Register state of a stopped tracee.
pub type Registers = libc::user_regs_struct;

pub(crate) fn registers(pid: Pid) -> Result<Registers> {
    ptrace::getregs(pid).died_if_esrch(pid)
}

/// Read the syscall out of a syscall-stop's registers.
///
/// The kernel saves the call number in `orig_rax`, since `rax` is overwritten with the
/// return value (or `-ENOSYS` at the enter-stop).
pub fn decode(regs: &Registers) -> RawSyscall {
    RawSyscall {
        number: regs.orig_rax,
        args: [regs.rdi, regs.rsi, regs.rdx, regs.r10, regs.r8, regs.r9],
        ret: regs.rax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeroed() -> Registers {
        // SAFETY: `user_regs_struct` is plain integers, and all-zero is a valid value.
        unsafe { std::mem::zeroed() }
    }

    #[test]
    fn test_decode() {
        let mut regs = zeroed();
        regs.orig_rax = 1;
        regs.rax = 2;
        regs.rdi = 10;
        regs.rsi = 11;
        regs.rdx = 12;
        regs.r10 = 13;
        regs.r8 = 14;
        regs.r9 = 15;
        regs.rcx = 99;

        let raw = decode(&regs);

        assert_eq!(raw.number, 1);
        assert_eq!(raw.args, [10, 11, 12, 13, 14, 15]);
        assert_eq!(raw.ret, 2);
    }

    #[test]
    fn test_no_syscall() {
        let mut regs = zeroed();
        regs.orig_rax = -1i64 as u64;

        assert_eq!(decode(&regs).number, RawSyscall::NO_SYSCALL);
    }
}
