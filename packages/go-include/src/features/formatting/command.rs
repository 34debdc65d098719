//! External formatter process

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::errors::{IncludeError, Result};
use crate::features::formatting::ports::SourceFormatter;

/// Pipes the buffer through an external program (stdin → stdout)
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: PathBuf,
    /// Pass `-srcdir <dir of filename>` so local imports resolve
    srcdir: bool,
}

impl CommandFormatter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            srcdir: false,
        }
    }

    /// `goimports`: fixes the import list and formats
    pub fn goimports() -> Self {
        Self {
            srcdir: true,
            ..Self::new("goimports")
        }
    }

    /// `gofmt`: formats only
    pub fn gofmt() -> Self {
        Self::new("gofmt")
    }

    fn command(&self, filename: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        if self.srcdir {
            if let Some(dir) = Path::new(filename).parent().filter(|d| !d.as_os_str().is_empty()) {
                cmd.arg("-srcdir").arg(dir);
            }
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl SourceFormatter for CommandFormatter {
    fn format(&self, filename: &str, source: &[u8]) -> Result<Vec<u8>> {
        let program = self.program.display().to_string();
        let mut child = self
            .command(filename)
            .spawn()
            .map_err(|e| IncludeError::format(filename, format!("failed to run {}: {}", program, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| IncludeError::format(filename, format!("{} has no stdin", program)))?;

        // Feed stdin from a helper thread so a full stdout pipe cannot block us
        let input = source.to_vec();
        let writer = std::thread::spawn(move || stdin.write_all(&input));

        let output = child
            .wait_with_output()
            .map_err(|e| IncludeError::format(filename, format!("{} failed: {}", program, e)))?;

        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) if !output.status.success() => {
                tracing::debug!(error = %e, "formatter closed stdin early");
            }
            Ok(Err(e)) => {
                return Err(IncludeError::format(
                    filename,
                    format!("failed to write to {}: {}", program, e),
                ))
            }
            Err(_) => {
                return Err(IncludeError::format(
                    filename,
                    format!("stdin writer for {} panicked", program),
                ))
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(IncludeError::format(
                filename,
                format!("{} exited with {}: {}", program, output.status, stderr.trim()),
            ));
        }

        tracing::debug!(formatter = %program, bytes = output.stdout.len(), "formatted output");
        Ok(output.stdout)
    }

    fn name(&self) -> &str {
        self.program.to_str().unwrap_or("formatter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_format_error() {
        let err = CommandFormatter::new("/nonexistent/go-include-formatter")
            .format("main.go", b"package main\n")
            .unwrap_err();
        assert!(matches!(err, IncludeError::Format { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_of_program_is_returned() {
        let out = CommandFormatter::new("cat")
            .format("main.go", b"package main\n")
            .unwrap();
        assert_eq!(out, b"package main\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_is_format_error() {
        let err = CommandFormatter::new("false")
            .format("main.go", b"package main\n")
            .unwrap_err();
        assert!(matches!(err, IncludeError::Format { .. }));
    }
}
