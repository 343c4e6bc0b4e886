//! Test environment for isolated sitetask runs.
//!
//! Every project gets a `build.sh` that appends its arguments to
//! `tasks.log` and writes `dist/index.html`, plus a `bin/fake-rsync` that
//! logs its arguments and records what it would have copied in `synced.txt`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a sitetask CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

const BUILD_SCRIPT: &str = r#"echo "build $*" >> tasks.log
if [ -n "$BUILD_EXIT" ]; then
  exit "$BUILD_EXIT"
fi
mkdir -p dist
echo "<h1>hello</h1>" > dist/index.html
"#;

const SYNC_SCRIPT: &str = r#"#!/bin/sh
echo "sync $*" >> tasks.log
ls "$4" > synced.txt
exit "${SYNC_EXIT:-0}"
"#;

/// Isolated project directory plus an empty user config dir
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Project whose config has no remote
    pub fn new() -> Self {
        Self::with_remote(None)
    }

    pub fn with_remote(remote: Option<&str>) -> Self {
        let env = Self::bare();
        env.write("build.sh", BUILD_SCRIPT);
        env.write_executable("bin/fake-rsync", SYNC_SCRIPT);
        env.write("sitetask.toml", &env.config_text(remote));
        env
    }

    /// Empty project: no config, no stubs
    pub fn bare() -> Self {
        Self {
            project_root: TempDir::new().expect("temp project"),
            config_home: TempDir::new().expect("temp config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_sitetask")),
        }
    }

    fn config_text(&self, remote: Option<&str>) -> String {
        let mut text = format!(
            r#"[paths]
output = "dist"

[builder]
command = ["sh", "build.sh"]
force_flag = "--force"

[server]
command = ["sh", "-c", "echo serving >> tasks.log"]

[watcher]
command = ["sh", "-c", "echo watching >> tasks.log"]

[deploy]
transport = "rsync"
program = '{}'
"#,
            self.project_path("bin/fake-rsync").display()
        );
        if let Some(remote) = remote {
            text.push_str(&format!("remote = \"{}\"\n", remote));
        }
        text
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[cfg(unix)]
    pub fn write_executable(&self, relative: &str, content: &str) {
        use std::os::unix::fs::PermissionsExt;

        self.write(relative, content);
        let path = self.project_path(relative);
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
    }

    #[cfg(not(unix))]
    pub fn write_executable(&self, relative: &str, content: &str) {
        self.write(relative, content);
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project_path(relative).exists()
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative)).unwrap_or_default()
    }

    /// Lines the stubs appended, in order
    pub fn task_log(&self) -> Vec<String> {
        self.read("tasks.log")
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect()
    }

    /// Run sitetask from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("SITETASK_ROOT")
            .env_remove("SITETASK_CONFIG")
            .env_remove("SITETASK_REMOTE")
            .env_remove("SITETASK_OUTPUT_DIR")
            .env_remove("SITETASK_TRANSPORT")
            .env_remove("SITETASK_VERBOSITY")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute sitetask");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
