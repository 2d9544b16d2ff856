use crate::commands;
use crate::context::RunContext;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Output of one in-process run.
pub(crate) struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub(crate) fn lines(&self) -> Vec<&str> {
        self.stdout.trim_end_matches(['\r', '\n']).split('\n').collect()
    }
}

/// Scratch directory for template and data fixtures.
pub(crate) struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write a file below the fixture root, creating parent directories.
    pub(crate) fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// The default `testEnv: {{ testEnv }}` template.
    pub(crate) fn default_template(&self) -> String {
        path_str(&self.file("default", "testEnv: {{ testEnv }}"))
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }
}

pub(crate) fn path_str(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

/// Run twigc in-process with `-e none` prepended, like the shell tests do.
pub(crate) fn run_app(args: &[&str], ctx: RunContext) -> RunOutput {
    let mut argv = vec!["twigc", "-e", "none"];
    argv.extend_from_slice(args);
    run_raw(&argv, ctx)
}

/// Run twigc in-process with exactly `argv`.
pub(crate) fn run_raw(argv: &[&str], mut ctx: RunContext) -> RunOutput {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = commands::run(argv.iter().copied(), &mut ctx, &mut stdout, &mut stderr);
    RunOutput {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

/// A context with the given stdin and no environment.
pub(crate) fn piped(stdin: &str) -> RunContext {
    RunContext::new(Cursor::new(stdin.to_string()))
}
