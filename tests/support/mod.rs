use std::sync::Mutex;

use anyhow::Result;
use lazy_static::lazy_static;
use scry::{Command, Exit, Syscall, TraceOptions, Tracer};

lazy_static! {
    #[allow(unused)]
    /// Held by tests that touch process-wide state, such as signal dispositions.
    pub static ref PROCESS: Mutex<()> = Mutex::new(());
}

/// Everything observed while tracing one command to completion.
#[allow(unused)]
#[derive(Debug)]
pub struct Trace {
    pub entered: Vec<Syscall>,
    pub exited: Vec<Syscall>,
    pub exit: Exit,
    pub exit_code: Option<i32>,
}

#[allow(unused)]
impl Trace {
    pub fn find(&self, name: &str) -> Option<&Syscall> {
        self.exited.iter().find(|s| s.name() == name)
    }

    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Syscall> + 'a {
        self.exited.iter().filter(move |s| s.name() == name)
    }
}

#[allow(unused)]
pub fn trace(argv: &[&str]) -> Result<Trace> {
    let mut options = TraceOptions::new();
    options.set_suppress_output(true);

    trace_with(argv, options)
}

#[allow(unused)]
pub fn trace_with(argv: &[&str], options: TraceOptions) -> Result<Trace> {
    let cmd = Command::new(argv.iter().copied())?;

    let mut entered = vec![];
    let mut exited = vec![];
    let mut exit_code = None;

    let exit = {
        let mut tracer = Tracer::spawn_with(cmd, options)?;

        tracer.on_syscall_enter(|s| entered.push(s.clone()));
        tracer.on_syscall_exit(|s| exited.push(s.clone()));
        tracer.on_process_exit(|code| exit_code = Some(code));

        let exit = tracer.run()?;
        exit
    };

    Ok(Trace { entered, exited, exit, exit_code })
}
