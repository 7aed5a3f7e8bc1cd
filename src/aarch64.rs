use nix::errno::Errno;

use crate::error::{Result, ResultExt};
use crate::ptracer::Pid;
use crate::syscall::RawSyscall;

/// Linux constant defined in `include/uapi/linux/elf.h`.
const NT_PRSTATUS: i32 = 0x1;

/// Defined in [`arch/arm64/include/uapi/asm/ptrace.h`](https://android.googlesource.com/kernel/common/+/refs/heads/android-mainline/arch/arm64/include/uapi/asm/ptrace.h#88).
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct user_pt_regs {
    pub regs: [u64; 31],
    pub sp: u64,
    pub pc: u64,
    pub pstate: u64
}

/// Register state of a stopped tracee.
pub type Registers = user_pt_regs;

pub(crate) fn registers(pid: Pid) -> Result<Registers> {
    let mut data = std::mem::MaybeUninit::<Registers>::uninit();
    let mut rv = libc::iovec {
        iov_base: data.as_mut_ptr() as *mut libc::c_void,
        iov_len: std::mem::size_of::<Registers>(),
    };

    let res = unsafe {
        libc::ptrace(libc::PTRACE_GETREGSET, pid, NT_PRSTATUS, &mut rv as *mut _ as *mut libc::c_void)
    };

    Errno::result(res).died_if_esrch(pid)?;

    Ok(unsafe { data.assume_init() })
}

/// Read the syscall out of a syscall-stop's registers.
///
/// The call number is in `x8`. At the exit-stop `x0` holds the return value, so the
/// first argument must be taken from the enter-stop.
pub fn decode(regs: &Registers) -> RawSyscall {
    let r = &regs.regs;

    RawSyscall {
        number: r[8],
        args: [r[0], r[1], r[2], r[3], r[4], r[5]],
        ret: r[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let mut regs = user_pt_regs { regs: [0; 31], sp: 0, pc: 0, pstate: 0 };
        regs.regs[..6].copy_from_slice(&[10, 11, 12, 13, 14, 15]);
        regs.regs[8] = 63;

        let raw = decode(&regs);

        assert_eq!(raw.number, 63);
        assert_eq!(raw.args, [10, 11, 12, 13, 14, 15]);
    }
}
