use std::ffi::{OsStr, OsString};
use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use crate::error::{Error, Result};

/// Command to spawn as a child process to be traced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Command {
    /// Argument vector. The first element is the program.
    argv: Vec<OsString>,

    env: Vec<(OsString, OsString)>,

    current_dir: Option<PathBuf>,
}

impl Command {
    /// Build a command from an argument vector, whose first element is the program.
    pub fn new<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

        if argv.is_empty() {
            let err = io::Error::new(io::ErrorKind::InvalidInput, "empty argument vector");
            return Err(Error::Spawn(err));
        }

        Ok(Self {
            argv,
            env: vec![],
            current_dir: None,
        })
    }

    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    /// Set an environment variable for the child, in addition to those inherited.
    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    // The `std` command to spawn. Stdin is always inherited.
    pub(crate) fn to_std(&self, suppress_output: bool) -> std::process::Command {
        let mut cmd = std::process::Command::new(&self.argv[0]);
        cmd.args(&self.argv[1..]);
        cmd.envs(self.env.iter().map(|(k, v)| (k, v)));

        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        if suppress_output {
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());
        }

        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_argv_is_an_error() {
        let err = Command::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::Spawn(_)));
    }

    #[test]
    fn test_to_std() -> anyhow::Result<()> {
        let cmd = Command::new(["echo", "hi"])?.env("SCRY_TEST", "1");

        let child = cmd.to_std(true);

        assert_eq!(child.get_program(), "echo");
        assert_eq!(child.get_args().collect::<Vec<_>>(), ["hi"]);
        assert_eq!(cmd.program(), "echo");
        Ok(())
    }
}
