use std::os::unix::process::ExitStatusExt;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::getpid;
use ntest::timeout;
use scry::{Command, Exit, Pid, TraceOptions, Tracer};

mod support;
use support::PROCESS;

fn interrupt_after(delay: Duration) -> thread::JoinHandle<nix::Result<()>> {
    thread::spawn(move || {
        thread::sleep(delay);
        kill(getpid(), Signal::SIGINT)
    })
}

fn forwarding() -> TraceOptions {
    let mut options = TraceOptions::new();
    options.set_forward_interrupts(true);
    options
}

#[test]
#[timeout(5000)]
fn test_interrupt_kills_spawned_tracee() -> Result<()> {
    let _guard = PROCESS.lock().unwrap_or_else(|err| err.into_inner());

    let cmd = Command::new(["sleep", "60"])?;
    let mut tracer = Tracer::spawn_with(cmd, forwarding())?;
    let pid = tracer.pid();

    let interrupter = interrupt_after(Duration::from_millis(200));
    let exit = tracer.run()?;
    interrupter.join().expect("interrupter panicked")?;

    assert_eq!(exit, Exit::Interrupted);
    assert_eq!(exit.code(), 130);
    assert_eq!(kill(pid, None), Err(Errno::ESRCH));

    Ok(())
}

#[test]
#[timeout(5000)]
fn test_interrupt_detaches_attached_tracee() -> Result<()> {
    let _guard = PROCESS.lock().unwrap_or_else(|err| err.into_inner());

    let mut child = std::process::Command::new("sleep").arg("60").spawn()?;
    let pid = Pid::from_raw(child.id() as i32);

    let exit = {
        let mut tracer = Tracer::attach_with(pid, forwarding())?;

        let interrupter = interrupt_after(Duration::from_millis(200));
        let exit = tracer.run()?;
        interrupter.join().expect("interrupter panicked")?;
        exit
    };

    assert_eq!(exit, Exit::Interrupted);

    // Still running, and no longer traced.
    assert!(child.try_wait()?.is_none());

    child.kill()?;
    assert_eq!(child.wait()?.signal(), Some(libc::SIGKILL));

    Ok(())
}

#[test]
#[timeout(5000)]
fn test_interrupt_while_job_control_stopped() -> Result<()> {
    let _guard = PROCESS.lock().unwrap_or_else(|err| err.into_inner());

    let cmd = Command::new(["/bin/sh", "-c", "kill -STOP $$; exit 0"])?;
    let mut tracer = Tracer::spawn_with(cmd, forwarding())?;

    let interrupter = interrupt_after(Duration::from_millis(300));
    let exit = tracer.run()?;
    interrupter.join().expect("interrupter panicked")?;

    assert_eq!(exit, Exit::Interrupted);

    Ok(())
}
