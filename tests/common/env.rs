//! Test environment builder for isolated extgen testing.
//!
//! Provides `TestEnv` - a temp project directory holding an `extgen.toml`
//! and `ios/App.xcodeproj/project.pbxproj`, plus helpers to run the binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{MINIMAL_CONFIG, PROJECT_FIXTURE};

/// Project file location inside a `TestEnv`
pub const PROJECT_FILE: &str = "ios/App.xcodeproj/project.pbxproj";

/// Result of running an extgen CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("cannot read {relative}: {e}"))
    }

    /// Run extgen from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run extgen from the project root with extra env vars
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
            .env_remove("EXTGEN_LOG")
            .env_remove("EXTGEN_BUNDLE_IDENTIFIER")
            .env_remove("EXTGEN_BUILD_NUMBER")
            .env_remove("EXTGEN_VERSION")
            .env_remove("EXTGEN_PLATFORM_ROOT");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute extgen");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for `TestEnv`
pub struct TestEnvBuilder {
    config: Option<String>,
    project: Option<String>,
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            config: Some(MINIMAL_CONFIG.to_string()),
            project: Some(PROJECT_FIXTURE.to_string()),
            files: Vec::new(),
        }
    }

    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    pub fn without_config(mut self) -> Self {
        self.config = None;
        self
    }

    pub fn with_project(mut self, content: &str) -> Self {
        self.project = Some(content.to_string());
        self
    }

    pub fn without_project(mut self) -> Self {
        self.project = None;
        self
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = tempfile::tempdir().expect("Failed to create temp dir");
        let write = |relative: &str, content: &str| {
            let path = project_root.path().join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create dir");
            }
            std::fs::write(path, content).expect("Failed to write file");
        };

        if let Some(config) = &self.config {
            write("extgen.toml", config);
        }
        if let Some(project) = &self.project {
            write(PROJECT_FILE, project);
        } else {
            std::fs::create_dir_all(project_root.path().join("ios")).expect("mkdir ios");
        }
        for (relative, content) in &self.files {
            write(relative, content);
        }

        TestEnv {
            project_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_extgen")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
