//! Driving one traced process from syscall-stop to syscall-stop.

use std::fmt;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::os::unix::process::CommandExt;
use std::process::Child;
use std::thread;
use std::time::Duration;

use nix::{
    errno::Errno,
    sys::{
        ptrace,
        signal::kill,
        wait::{self, WaitPidFlag, WaitStatus},
    },
};
use tracing::{debug, info, trace, warn};

use crate::catalog::Catalog;
use crate::cmd::Command;
use crate::error::{internal_error, Error, Result, ResultExt};
use crate::interrupt;
use crate::materialize;
use crate::memory::ProcessMemory;
use crate::syscall::{RawSyscall, Syscall};

#[cfg(target_arch = "aarch64")]
use crate::aarch64 as arch;

#[cfg(target_arch = "x86_64")]
use crate::x86 as arch;

pub use nix::unistd::Pid;
pub use nix::sys::ptrace::Options;

/// POSIX signal.
pub use nix::sys::signal::Signal;

/// Register state of a tracee.
pub use arch::Registers;

/// Options required to tell syscall-stops apart from signal-delivery-stops.
/// These are:
/// - [`PTRACE_O_TRACESYSGOOD`](Options::PTRACE_O_TRACESYSGOOD)
pub const REQUIRED_OPTIONS: Options = Options::empty()
    .union(Options::PTRACE_O_TRACESYSGOOD);

/// What to trace.
#[derive(Clone, Debug)]
pub enum Target {
    /// Spawn a new child process, traced from its first instruction after `execve()`.
    Spawn(Command),

    /// Attach to a running process.
    Attach(Pid),
}

/// How a [`Tracer::run()`] ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Exit {
    Exited(i32),
    Signaled(Signal),

    /// The tracer received an interrupt and stopped tracing.
    Interrupted,

    /// The tracer let go of a still-running target.
    Detached,
}

impl Exit {
    /// The conventional shell exit code for this outcome.
    pub fn code(&self) -> i32 {
        match self {
            Exit::Exited(code) => *code,
            Exit::Signaled(signal) => 128 + *signal as i32,
            Exit::Interrupted => 128 + Signal::SIGINT as i32,
            Exit::Detached => 0,
        }
    }
}

/// Settings fixed when tracing starts.
#[derive(Clone, Debug)]
pub struct TraceOptions {
    ptrace: Options,
    suppress_output: bool,
    forward_interrupts: bool,
    catalog: Catalog,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            ptrace: REQUIRED_OPTIONS,
            suppress_output: false,
            forward_interrupts: false,
            catalog: Catalog::native(),
        }
    }
}

impl TraceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the ptrace options applied to the tracee.
    pub fn ptrace_options(&self) -> Options {
        self.ptrace
    }

    /// Set the ptrace options applied to the tracee.
    ///
    /// **NOTE:** [`REQUIRED_OPTIONS`] are always set, even if unset in the passed value.
    /// Options that auto-attach new tasks (`PTRACE_O_TRACEFORK` &c.) are not supported:
    /// only the initial tracee is followed.
    pub fn set_ptrace_options(&mut self, options: Options) {
        self.ptrace = options | REQUIRED_OPTIONS;
    }

    pub fn suppress_output(&self) -> bool {
        self.suppress_output
    }

    /// Send a spawned tracee's stdout and stderr to `/dev/null`. Stdin is inherited.
    pub fn set_suppress_output(&mut self, suppress: bool) {
        self.suppress_output = suppress;
    }

    pub fn forward_interrupts(&self) -> bool {
        self.forward_interrupts
    }

    /// Stop tracing when this process receives `SIGINT`, `SIGTERM`, or `SIGHUP`.
    pub fn set_forward_interrupts(&mut self, forward: bool) {
        self.forward_interrupts = forward;
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Set the syscall table used to decode calls. Defaults to [`Catalog::native()`].
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    // Stopped after spawn or attach, `run()` not yet called.
    Idle,

    // Running, next syscall-stop is an enter.
    WaitingForEnter,

    // Running inside a syscall, next syscall-stop is its exit.
    WaitingForExit,

    // Terminal. The tracee is gone, or no longer ours.
    Exited,
}

#[derive(Debug)]
enum Mode {
    // Self-attached, via a pre-exec `TRACEME` request.
    Spawned(Child),

    // Attached with `PTRACE_ATTACH`.
    Attached,
}

type SyscallHandler<'a> = Box<dyn FnMut(&Syscall) + 'a>;

#[derive(Default)]
struct Handlers<'a> {
    enter: Option<SyscallHandler<'a>>,
    exit: Option<SyscallHandler<'a>>,
    signal: Option<Box<dyn FnMut(Signal) + 'a>>,
    process_exit: Option<Box<dyn FnMut(i32) + 'a>>,
    attach: Option<Box<dyn FnMut(Pid) + 'a>>,
    detach: Option<Box<dyn FnMut(Pid) + 'a>>,
}

/// Tracer for a single Linux process.
///
/// All ptrace requests for a tracee must come from the thread that attached to it, so a
/// `Tracer` is neither `Send` nor `Sync`.
///
/// Handlers receive each [`Syscall`] by reference, and must not hold on to it: the
/// tracer completes the same value in place at the exit-stop.
pub struct Tracer<'a> {
    pid: Pid,
    mode: Mode,
    options: TraceOptions,
    state: State,

    /// Signal to deliver on the next restart.
    pending: Option<Signal>,

    /// Job-control stop in effect, until the tracee is sent `SIGCONT`.
    stopped: Option<Signal>,

    /// The syscall between its enter-stop and its exit-stop.
    in_flight: Option<Syscall>,

    exit: Option<Exit>,
    handlers: Handlers<'a>,

    #[doc(hidden)]
    _not_send: PhantomData<*const ()>,
}

impl<'a> Tracer<'a> {
    /// Start tracing `target` with default options.
    pub fn start(target: Target) -> Result<Self> {
        Self::start_with(target, TraceOptions::default())
    }

    pub fn start_with(target: Target, options: TraceOptions) -> Result<Self> {
        match target {
            Target::Spawn(cmd) => Self::spawn_with(cmd, options),
            Target::Attach(pid) => Self::attach_with(pid, options),
        }
    }

    pub fn spawn(cmd: Command) -> Result<Self> {
        Self::spawn_with(cmd, TraceOptions::default())
    }

    /// Spawn `cmd` for tracing.
    ///
    /// The command requests `PTRACE_TRACEME` after `fork()` and pre-`exec()`, so no
    /// syscall of the new program is missed. Returns once the tracee is stopped at the
    /// `SIGTRAP` that follows its `execve()`.
    pub fn spawn_with(cmd: Command, options: TraceOptions) -> Result<Self> {
        let mut child = cmd.to_std(options.suppress_output);

        // On fork, request `PTRACE_TRACEME`.
        unsafe {
            child.pre_exec(|| ptrace::traceme().map_err(|err| io::Error::from_raw_os_error(err as i32)))
        };

        let child = child.spawn().map_err(Error::Spawn)?;
        let pid = Pid::from_raw(child.id() as i32);

        info!(pid = pid.as_raw(), program = ?cmd.program(), "spawned tracee");

        let mut tracer = Self::new(pid, Mode::Spawned(child), options);
        tracer.wait_for_initial_stop(Signal::SIGTRAP)?;
        tracer.setup()?;

        Ok(tracer)
    }

    pub fn attach(pid: Pid) -> Result<Self> {
        Self::attach_with(pid, TraceOptions::default())
    }

    /// Attach to a running process, and wait for the resulting `SIGSTOP`.
    ///
    /// A missing process is reported as an [`Error::Attach`] for which
    /// [`Error::no_such_process()`] is true.
    pub fn attach_with(pid: Pid, options: TraceOptions) -> Result<Self> {
        ptrace::attach(pid).map_err(|source| Error::Attach { pid, source })?;

        info!(pid = pid.as_raw(), "attached to tracee");

        let mut tracer = Self::new(pid, Mode::Attached, options);
        tracer.wait_for_initial_stop(Signal::SIGSTOP)?;
        tracer.setup()?;

        Ok(tracer)
    }

    fn new(pid: Pid, mode: Mode, options: TraceOptions) -> Self {
        Self {
            pid,
            mode,
            options,
            state: State::Idle,
            pending: None,
            stopped: None,
            in_flight: None,
            exit: None,
            handlers: Handlers::default(),
            _not_send: PhantomData,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// True if the tracee was attached to, rather than spawned.
    pub fn is_attached(&self) -> bool {
        matches!(self.mode, Mode::Attached)
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    /// Set the syscall table used for calls decoded from now on.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.options.set_catalog(catalog);
    }

    /// The terminal outcome, once reached.
    pub fn exit(&self) -> Option<Exit> {
        self.exit
    }

    pub fn on_syscall_enter(&mut self, handler: impl FnMut(&Syscall) + 'a) {
        self.handlers.enter = Some(Box::new(handler));
    }

    pub fn on_syscall_exit(&mut self, handler: impl FnMut(&Syscall) + 'a) {
        self.handlers.exit = Some(Box::new(handler));
    }

    /// Called for each signal-delivery-stop (and group-stop) of the tracee.
    pub fn on_signal(&mut self, handler: impl FnMut(Signal) + 'a) {
        self.handlers.signal = Some(Box::new(handler));
    }

    /// Called with the exit code once the tracee terminates, or `128 + signo` if it
    /// was killed by a signal.
    pub fn on_process_exit(&mut self, handler: impl FnMut(i32) + 'a) {
        self.handlers.process_exit = Some(Box::new(handler));
    }

    /// Called once, when `run()` first resumes an attached tracee.
    pub fn on_attach(&mut self, handler: impl FnMut(Pid) + 'a) {
        self.handlers.attach = Some(Box::new(handler));
    }

    pub fn on_detach(&mut self, handler: impl FnMut(Pid) + 'a) {
        self.handlers.detach = Some(Box::new(handler));
    }

    /// Trace until the tracee terminates, the tracer is interrupted, or an error.
    ///
    /// After a terminal outcome, returns it again immediately.
    pub fn run(&mut self) -> Result<Exit> {
        if let Some(exit) = self.exit {
            return Ok(exit);
        }

        if self.state == State::Idle {
            if let (Mode::Attached, Some(handler)) = (&self.mode, self.handlers.attach.as_mut()) {
                handler(self.pid);
            }

            self.set_state(State::WaitingForEnter);
        }

        loop {
            if self.options.forward_interrupts && interrupt::take() {
                return self.interrupted();
            }

            self.restart()?;

            let status = match self.wait()? {
                Some(status) => status,
                None => return Ok(self.finish(Exit::Detached)),
            };

            match status {
                WaitStatus::Exited(_, code) => {
                    return Ok(self.finish(Exit::Exited(code)));
                },
                WaitStatus::Signaled(_, signal, _) => {
                    return Ok(self.finish(Exit::Signaled(signal)));
                },
                WaitStatus::PtraceSyscall(_) => {
                    self.syscall_stop()?;
                },
                WaitStatus::Stopped(_, signal) => {
                    if let Some(exit) = self.signal_stop(signal)? {
                        return Ok(exit);
                    }
                },
                WaitStatus::PtraceEvent(_, _, event) => {
                    debug!(pid = self.pid.as_raw(), event, "ignoring ptrace-event-stop");
                },
                WaitStatus::Continued(_) |
                WaitStatus::StillAlive => {
                    internal_error!("unreachable `wait()` status")
                },
            }
        }
    }

    /// Stop tracing, leaving the tracee running.
    pub fn detach(&mut self) -> Result<Exit> {
        if let Some(exit) = self.exit {
            return Ok(exit);
        }

        let pending = self.pending.take();

        match ptrace::detach(self.pid, pending) {
            Ok(()) => {},
            Err(Errno::ESRCH) => {
                // Not in a ptrace-stop (or gone). Stop it first.
                if let Some(exit) = self.stop_and_detach()? {
                    return Ok(exit);
                }
            },
            Err(err) => return Err(err.into()),
        }

        info!(pid = self.pid.as_raw(), "detached from tracee");

        self.terminate(Exit::Detached);

        if let Some(handler) = self.handlers.detach.as_mut() {
            handler(self.pid);
        }

        Ok(Exit::Detached)
    }

    fn wait_for_initial_stop(&mut self, expected: Signal) -> Result<()> {
        loop {
            let status = wait::waitpid(self.pid, Some(WaitPidFlag::__WALL)).died_if_esrch(self.pid)?;

            match status {
                WaitStatus::Stopped(_, signal) if signal == expected => {
                    debug!(pid = self.pid.as_raw(), ?signal, "saw initial stop");
                    return Ok(());
                },
                WaitStatus::Stopped(_, signal) => {
                    // Some other signal arrived first. Deliver it and keep waiting.
                    debug!(pid = self.pid.as_raw(), ?signal, "signal before initial stop");
                    ptrace::cont(self.pid, signal).died_if_esrch(self.pid)?;
                },
                WaitStatus::Exited(..) | WaitStatus::Signaled(..) => {
                    self.terminate(Exit::Detached);
                    return Err(Error::TraceeDied { pid: self.pid, source: Errno::ESRCH });
                },
                status => {
                    internal_error!(format!("unexpected initial stop: {status:?}"))
                },
            }
        }
    }

    fn setup(&mut self) -> Result<()> {
        ptrace::setoptions(self.pid, self.options.ptrace).died_if_esrch(self.pid)?;

        if self.options.forward_interrupts {
            interrupt::install()?;
            interrupt::register(self.pid);
        }

        Ok(())
    }

    // Resume the stopped tracee until its next syscall-stop, delivering any pending signal.
    fn restart(&mut self) -> Result<()> {
        let pending = self.pending.take();

        trace!(pid = self.pid.as_raw(), ?pending, "restarting tracee");

        match ptrace::syscall(self.pid, pending) {
            Ok(()) => Ok(()),
            Err(Errno::ESRCH) => {
                // Killed while stopped. The next `wait()` reports how it ended.
                debug!(pid = self.pid.as_raw(), "tracee vanished before restart");
                Ok(())
            },
            Err(source) => Err(Error::Restart { pid: self.pid, source }),
        }
    }

    // Block until the tracee changes state. `None` if it is no longer ours to wait on.
    fn wait(&mut self) -> Result<Option<WaitStatus>> {
        loop {
            match wait::waitpid(self.pid, Some(WaitPidFlag::__WALL)) {
                Ok(status) => {
                    trace!(?status, "wait status");
                    return Ok(Some(status));
                },
                Err(Errno::EINTR) => continue,
                Err(Errno::ECHILD) => {
                    debug!(pid = self.pid.as_raw(), "ECHILD for tracee, assuming detached");
                    return Ok(None);
                },
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn syscall_stop(&mut self) -> Result<()> {
        let regs = match arch::registers(self.pid) {
            Ok(regs) => regs,
            Err(err) if err.tracee_died() => {
                // Killed while stopped. The next `wait()` reports how it ended.
                debug!(pid = self.pid.as_raw(), "tracee vanished at syscall-stop");
                return Ok(());
            },
            Err(err) => return Err(err),
        };
        let raw = arch::decode(&regs);
        let memory = ProcessMemory::new(self.pid);

        match self.state {
            State::WaitingForEnter => {
                if raw.number == RawSyscall::NO_SYSCALL {
                    return Err(Error::MissedSyscall { pid: self.pid });
                }

                let syscall = materialize::enter(&self.options.catalog, &raw, &memory);

                debug!(pid = self.pid.as_raw(), name = syscall.name(), "syscall-enter-stop");

                if let Some(handler) = self.handlers.enter.as_mut() {
                    handler(&syscall);
                }

                self.in_flight = Some(syscall);
                self.set_state(State::WaitingForExit);
            },
            State::WaitingForExit => {
                let mut syscall = match self.in_flight.take() {
                    Some(syscall) => syscall,
                    None => internal_error!("syscall-exit-stop without an enter"),
                };

                if raw.number != syscall.number() {
                    return Err(Error::SyscallMismatch {
                        enter: syscall.number() as i64,
                        exit: raw.number as i64,
                    });
                }

                materialize::exit(&mut syscall, raw.ret, &memory);

                debug!(pid = self.pid.as_raw(), name = syscall.name(), ret = raw.ret as i64, "syscall-exit-stop");

                if let Some(handler) = self.handlers.exit.as_mut() {
                    handler(&syscall);
                }

                self.set_state(State::WaitingForEnter);
            },
            State::Idle | State::Exited => {
                internal_error!("syscall-stop outside of `run()`")
            },
        }

        Ok(())
    }

    // Route a signal-delivery-stop or group-stop. Returns the exit if the tracee
    // terminated while held in a job-control stop.
    fn signal_stop(&mut self, signal: Signal) -> Result<Option<Exit>> {
        use Signal::*;

        debug!(pid = self.pid.as_raw(), ?signal, "signal-delivery-stop");

        if let Some(handler) = self.handlers.signal.as_mut() {
            handler(signal);
        }

        self.pending = match signal {
            // Sent after each successful `execve()`, since `PTRACE_O_TRACEEXEC` is unset.
            SIGTRAP => None,
            SIGSTOP | SIGTSTP | SIGTTIN | SIGTTOU => {
                let group_stop = match is_group_stop(self.pid, signal) {
                    Ok(group_stop) => group_stop,
                    Err(err) if err.tracee_died() => {
                        debug!(pid = self.pid.as_raw(), "tracee vanished at signal-stop");
                        self.pending = None;
                        return Ok(None);
                    },
                    Err(err) => return Err(err),
                };

                self.stopped = Some(signal);

                if group_stop {
                    return self.hold_stopped();
                }

                Some(signal)
            },
            SIGCONT => {
                if let Some(stopped) = self.stopped.take() {
                    debug!(pid = self.pid.as_raw(), ?stopped, "job-control stop cleared");
                }

                Some(signal)
            },
            signal => Some(signal),
        };

        Ok(None)
    }

    // Keep a group-stopped tracee stopped until it has a `SIGCONT` pending, it dies, or
    // the tracer is interrupted.
    //
    // Restarting the tracee from a group-stop would let it run, whatever signal is
    // injected, so it is left in the stop and polled instead. Once resumed, the pending
    // `SIGCONT` is reported as a signal-delivery-stop of its own.
    fn hold_stopped(&mut self) -> Result<Option<Exit>> {
        debug!(pid = self.pid.as_raw(), stopped = ?self.stopped, "holding tracee in group-stop");

        self.pending = None;

        loop {
            if self.options.forward_interrupts && interrupt::pending() {
                return Ok(None);
            }

            match wait::waitpid(self.pid, Some(WaitPidFlag::__WALL | WaitPidFlag::WNOHANG)) {
                Ok(WaitStatus::StillAlive) | Err(Errno::EINTR) => {},
                Ok(WaitStatus::Exited(_, code)) => {
                    return Ok(Some(self.finish(Exit::Exited(code))));
                },
                Ok(WaitStatus::Signaled(_, signal, _)) => {
                    return Ok(Some(self.finish(Exit::Signaled(signal))));
                },
                Ok(status) => {
                    internal_error!(format!("unexpected status while held: {status:?}"))
                },
                Err(Errno::ECHILD) => return Ok(Some(self.finish(Exit::Detached))),
                Err(err) => return Err(err.into()),
            }

            if continue_pending(self.pid)? {
                debug!(pid = self.pid.as_raw(), "SIGCONT pending, resuming held tracee");
                return Ok(None);
            }

            thread::sleep(HOLD_POLL_INTERVAL);
        }
    }

    fn interrupted(&mut self) -> Result<Exit> {
        info!(pid = self.pid.as_raw(), "interrupted");

        // Drop the forwarded `SIGSTOP`.
        self.pending = None;
        self.stopped = None;

        match &mut self.mode {
            Mode::Attached => {
                if let Err(err) = ptrace::detach(self.pid, None) {
                    warn!(pid = self.pid.as_raw(), %err, "could not detach from tracee");
                }
            },
            Mode::Spawned(child) => {
                let _ = child.kill();
                let _ = child.wait();
            },
        }

        self.terminate(Exit::Interrupted);

        Ok(Exit::Interrupted)
    }

    // Stop a running tracee with `SIGSTOP`, then detach from the resulting stop.
    //
    // Returns the exit if the tracee terminated instead.
    fn stop_and_detach(&mut self) -> Result<Option<Exit>> {
        if let Err(err) = kill(self.pid, Signal::SIGSTOP) {
            debug!(pid = self.pid.as_raw(), %err, "could not stop tracee for detach");
        }

        loop {
            let status = match self.wait()? {
                Some(status) => status,
                None => return Ok(Some(self.finish(Exit::Detached))),
            };

            match status {
                WaitStatus::Stopped(_, Signal::SIGSTOP) => {
                    ptrace::detach(self.pid, None).died_if_esrch(self.pid)?;
                    return Ok(None);
                },
                WaitStatus::Stopped(_, signal) => {
                    ptrace::cont(self.pid, signal).died_if_esrch(self.pid)?;
                },
                WaitStatus::PtraceSyscall(_) | WaitStatus::PtraceEvent(..) => {
                    ptrace::cont(self.pid, None).died_if_esrch(self.pid)?;
                },
                WaitStatus::Exited(_, code) => {
                    return Ok(Some(self.finish(Exit::Exited(code))));
                },
                WaitStatus::Signaled(_, signal, _) => {
                    return Ok(Some(self.finish(Exit::Signaled(signal))));
                },
                WaitStatus::Continued(_) |
                WaitStatus::StillAlive => {
                    internal_error!("unreachable `wait()` status")
                },
            }
        }
    }

    // Record a terminal outcome and report it to the process-exit handler.
    fn finish(&mut self, exit: Exit) -> Exit {
        info!(pid = self.pid.as_raw(), ?exit, "tracee exited");

        self.terminate(exit);

        if matches!(exit, Exit::Exited(_) | Exit::Signaled(_)) {
            if let Some(handler) = self.handlers.process_exit.as_mut() {
                handler(exit.code());
            }
        }

        exit
    }

    fn terminate(&mut self, exit: Exit) {
        self.set_state(State::Exited);
        self.exit = Some(exit);
        self.in_flight = None;

        if self.options.forward_interrupts {
            interrupt::unregister(self.pid);
        }
    }

    fn set_state(&mut self, state: State) {
        trace!(pid = self.pid.as_raw(), ?state, "setting tracer state");
        self.state = state;
    }
}

impl fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("pid", &self.pid)
            .field("mode", &self.mode)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("stopped", &self.stopped)
            .field("exit", &self.exit)
            .finish()
    }
}

impl Drop for Tracer<'_> {
    fn drop(&mut self) {
        if self.exit.is_some() {
            return;
        }

        match &mut self.mode {
            Mode::Attached => {
                if let Err(err) = self.detach() {
                    warn!(pid = self.pid.as_raw(), %err, "could not detach from tracee on drop");
                }
            },
            Mode::Spawned(child) => {
                debug!(pid = self.pid.as_raw(), "killing spawned tracee on drop");
                let _ = child.kill();
                let _ = child.wait();
            },
        }
    }
}

const HOLD_POLL_INTERVAL: Duration = Duration::from_millis(10);

// Check if a process has `SIGCONT` pending, per `/proc/<pid>/status`.
fn continue_pending(pid: Pid) -> Result<bool> {
    let path = format!("/proc/{}/status", pid);

    let status = match fs::read_to_string(path) {
        Ok(status) => status,
        // Gone. A later `wait()` reports how it ended.
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err.into()),
    };

    Ok(sigcont_in_status(&status))
}

fn sigcont_in_status(status: &str) -> bool {
    let bit = 1u64 << (Signal::SIGCONT as i32 - 1);

    status
        .lines()
        .filter_map(|line| line.strip_prefix("SigPnd:").or_else(|| line.strip_prefix("ShdPnd:")))
        .filter_map(|mask| u64::from_str_radix(mask.trim(), 16).ok())
        .any(|mask| mask & bit != 0)
}

// Check if a wait stop with signal delivery is a group-stop.
fn is_group_stop(pid: Pid, sig: Signal) -> Result<bool> {
    use Signal::*;

    match sig {
        SIGSTOP | SIGTSTP | SIGTTIN | SIGTTOU => {
            // From the manual:
            //
            //     If PTRACE_GETSIGINFO fails with EINVAL, then it is definitely a
            //     group-stop.  (Other failure codes are possible, such as ESRCH
            //     ("no such process") if a SIGKILL killed the tracee.)
            //
            match ptrace::getsiginfo(pid) {
                Err(Errno::EINVAL) =>
                    Ok(true),
                Err(err) =>
                    Err(err).died_if_esrch(pid),
                Ok(_) =>
                    Ok(false)
            }
        },
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Exit::Exited(3).code(), 3);
        assert_eq!(Exit::Signaled(Signal::SIGKILL).code(), 137);
        assert_eq!(Exit::Interrupted.code(), 130);
        assert_eq!(Exit::Detached.code(), 0);
    }

    #[test]
    fn test_sigcont_in_status() {
        let status = "Name:\tsh\nSigQ:\t1/63338\nSigPnd:\t0000000000000000\nShdPnd:\t0000000000020000\n";
        assert!(sigcont_in_status(status));

        let status = "SigPnd:\t0000000000020000\nShdPnd:\t0000000000000000\n";
        assert!(sigcont_in_status(status));

        // `SIGSTOP` alone.
        let status = "SigPnd:\t0000000000000000\nShdPnd:\t0000000000040000\n";
        assert!(!sigcont_in_status(status));

        assert!(!sigcont_in_status(""));
    }

    #[test]
    fn test_required_options_are_always_set() {
        let mut options = TraceOptions::new();
        options.set_ptrace_options(Options::PTRACE_O_EXITKILL);

        assert!(options.ptrace_options().contains(Options::PTRACE_O_TRACESYSGOOD));
        assert!(options.ptrace_options().contains(Options::PTRACE_O_EXITKILL));
    }
}
