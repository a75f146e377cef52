//! External markup conversion for spell descriptions.
//!
//! The database carries an HTML description which is turned into LaTeX by
//! an external program (pandoc by default). Conversion is best effort: every
//! failure, including a hung process, is reported as a [`ConvertError`] and
//! the caller falls back to the plain-text description.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Why a conversion produced no output.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("converter '{program}' not found")]
    NotFound { program: String },

    #[error("converter '{program}' exited with code {code:?}: {stderr}")]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("converter '{program}' timed out after {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("converter I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts a markup fragment into LaTeX.
pub trait TextConverter {
    fn convert(&self, input: &str) -> Result<String, ConvertError>;
}

/// Runs an external program, feeding input on stdin and reading stdout.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// `pandoc -f html -t latex` with the given timeout.
    pub fn pandoc(timeout: Duration) -> Self {
        Self::new(
            "pandoc",
            vec!["-f".into(), "html".into(), "-t".into(), "latex".into()],
            timeout,
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    async fn run(&self, input: &str) -> Result<String, ConvertError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConvertError::NotFound {
                        program: self.program.clone(),
                    }
                } else {
                    ConvertError::Io(e)
                }
            })?;

        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(input.as_bytes()).await?;
                stdin.shutdown().await?;
            }
            Ok::<(), std::io::Error>(())
        };

        // Feed and drain together so a large description cannot deadlock on full pipes
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            return Err(ConvertError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        fed?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl TextConverter for CommandConverter {
    fn convert(&self, input: &str) -> Result<String, ConvertError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async {
            match tokio::time::timeout(self.timeout, self.run(input)).await {
                Ok(result) => result,
                Err(_) => Err(ConvertError::Timeout {
                    program: self.program.clone(),
                    timeout: self.timeout,
                }),
            }
        })
    }
}

/// Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughConverter;

impl TextConverter for PassthroughConverter {
    fn convert(&self, input: &str) -> Result<String, ConvertError> {
        Ok(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_not_found() {
        let converter = CommandConverter::new(
            "spellcard-no-such-converter",
            Vec::new(),
            Duration::from_secs(5),
        );
        assert!(matches!(
            converter.convert("<p>x</p>"),
            Err(ConvertError::NotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_failure() {
        let converter = CommandConverter::new(
            "sh",
            vec!["-c".into(), "cat >/dev/null; echo boom >&2; exit 3".into()],
            Duration::from_secs(5),
        );
        match converter.convert("input") {
            Err(ConvertError::Failed { code, stderr, .. }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn stdout_is_returned() {
        let converter = CommandConverter::new("cat", Vec::new(), Duration::from_secs(5));
        assert_eq!(converter.convert("hello\n").unwrap(), "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn hung_process_times_out() {
        let converter = CommandConverter::new(
            "sleep",
            vec!["10".into()],
            Duration::from_millis(200),
        );
        assert!(matches!(
            converter.convert(""),
            Err(ConvertError::Timeout { .. })
        ));
    }
}
