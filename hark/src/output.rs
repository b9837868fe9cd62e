use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use stt::ResponseFormat;

/// Where the rendered transcript goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// Resolve the target from an explicit `--output` value or the input path
    ///
    /// A caller-supplied path wins; "-" selects stdout. Without one, the
    /// transcript lands next to the input file with the format's canonical
    /// extension.
    pub fn resolve(output: Option<&Path>, input: &Path, format: ResponseFormat) -> Self {
        match output {
            Some(path) if path.as_os_str() == "-" => Self::Stdout,
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::File(input.with_extension(format.extension())),
        }
    }

    /// Write the transcript, overwriting any existing file
    ///
    /// File targets print a confirmation line naming the path; the stdout
    /// target prints the content alone.
    pub fn write(&self, content: &str) -> anyhow::Result<()> {
        match self {
            Self::File(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("failed to write transcript to '{}'", path.display()))?;

                println!("saved transcript to {}", path.display());
            }
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                if !content.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
            }
        }

        Ok(())
    }
}
