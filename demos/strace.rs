use std::process;

use anyhow::Result;
use scry::{Command, Pid, Syscall, Target, TraceOptions, Tracer};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(StructOpt, Debug)]
struct Opt {
    /// Attach to a running process instead of spawning one.
    #[structopt(short, long)]
    pid: Option<i32>,

    /// Discard the spawned command's stdout and stderr.
    #[structopt(short, long)]
    quiet: bool,

    /// Print raw argument words instead of decoded values.
    #[structopt(long)]
    raw: bool,

    argv: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::from_args();

    let target = match opt.pid {
        Some(pid) => Target::Attach(Pid::from_raw(pid)),
        None => Target::Spawn(Command::new(opt.argv.clone())?),
    };

    let mut options = TraceOptions::new();
    options.set_suppress_output(opt.quiet);
    options.set_forward_interrupts(true);

    let mut tracer = match Tracer::start_with(target, options) {
        Ok(tracer) => tracer,
        Err(err) if err.no_such_process() => {
            eprintln!("no such process");
            return Ok(());
        },
        Err(err) => return Err(err.into()),
    };

    let raw = opt.raw;
    tracer.on_syscall_exit(move |syscall| eprintln!("{}", format_call(syscall, raw)));
    tracer.on_signal(|signal| eprintln!("--- {:?} ---", signal));
    tracer.on_process_exit(|code| eprintln!("+++ exited with {} +++", code));

    let exit = tracer.run()?;
    drop(tracer);

    process::exit(exit.code());
}

fn format_call(syscall: &Syscall, raw: bool) -> String {
    let args: Vec<String> = if raw {
        syscall.args().iter().map(|a| format!("{:#x}", a.raw())).collect()
    } else {
        syscall.args().iter().map(|a| a.to_string()).collect()
    };

    let ret = match syscall.ret() {
        Some(ret) if raw => format!("{:#x}", ret.raw()),
        Some(ret) => ret.to_string(),
        None => "?".into(),
    };

    format!("{}({}) = {}", syscall.name(), args.join(", "), ret)
}
