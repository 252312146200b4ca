//! End-to-end tests for the `html-to-pdf` binary.
//!
//! Each test runs the binary in a scratch directory with `PATH` pointing at
//! a directory that holds a fake `wkhtmltopdf` shell script, so the outcome
//! of the version check and of the conversion is scripted.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

const HTML: &str = "docs/planejamento-bi-ia.html";
const PDF: &str = "docs/planejamento-bi-ia.pdf";

/// Writing an executable while another thread forks can make exec fail with
/// ETXTBSY, so sandboxes are used one at a time.
static SERIAL: Mutex<()> = Mutex::new(());

/// Scratch working directory plus a `bin/` directory used as `PATH`.
struct Sandbox {
    root: TempDir,
    _serial: MutexGuard<'static, ()>,
}

impl Sandbox {
    fn new() -> Self {
        let serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("bin")).unwrap();
        Self {
            root,
            _serial: serial,
        }
    }

    fn workdir(&self) -> PathBuf {
        self.root.path().canonicalize().unwrap()
    }

    fn with_html(self) -> Self {
        let docs = self.root.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("planejamento-bi-ia.html"), "<h1>Planejamento</h1>").unwrap();
        self
    }

    /// Install a fake converter. `--version` exits with `version_code`; a
    /// conversion touches `invoked`, writes `stderr` to the error stream,
    /// creates the last argument as the output file and exits with
    /// `convert_code`. Only shell builtins are used since `PATH` is
    /// restricted.
    fn with_converter(self, version_code: i32, convert_code: i32, stderr: &str) -> Self {
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then\n  exit {version_code}\nfi\n\
             : > invoked\n\
             for a in \"$@\"; do last=\"$a\"; done\n\
             printf '%s\\n' '{stderr}' >&2\n\
             : > \"$last\"\n\
             exit {convert_code}\n"
        );
        let path = self.root.path().join("bin").join("wkhtmltopdf");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    fn run(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_html-to-pdf"))
            .current_dir(self.root.path())
            .env("PATH", self.root.path().join("bin"))
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn converter_was_invoked(&self) -> bool {
        self.root.path().join("invoked").exists()
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn missing_html_exits_without_converting() {
    let sandbox = Sandbox::new().with_converter(0, 0, "");
    let output = sandbox.run();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(HTML));
    assert!(!sandbox.converter_was_invoked());
}

#[test]
fn absent_converter_prints_absolute_html_path() {
    let sandbox = Sandbox::new().with_html();
    let output = sandbox.run();

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    let absolute = sandbox.workdir().join(HTML);
    assert!(
        text.contains(&absolute.display().to_string()),
        "stdout did not mention {}: {text}",
        absolute.display()
    );
    assert!(!sandbox.path(PDF).exists());
}

#[test]
fn failing_version_check_is_treated_as_absent() {
    let sandbox = Sandbox::new().with_html().with_converter(3, 0, "");
    let output = sandbox.run();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Salvar como PDF"));
    assert!(!sandbox.converter_was_invoked());
}

#[test]
fn successful_conversion_exits_zero() {
    let sandbox = Sandbox::new().with_html().with_converter(0, 0, "Done");
    let output = sandbox.run();

    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    assert!(stdout(&output).contains(PDF));
    assert!(sandbox.converter_was_invoked());
    assert!(sandbox.path(PDF).exists());
}

#[test]
fn failed_conversion_surfaces_stderr() {
    let sandbox = Sandbox::new()
        .with_html()
        .with_converter(0, 2, "Exit with code 1 due to network error: ContentNotFoundError");
    let output = sandbox.run();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("ContentNotFoundError"));
    assert!(sandbox.converter_was_invoked());
}

#[test]
fn unknown_argument_is_rejected() {
    let sandbox = Sandbox::new();
    let output = Command::new(env!("CARGO_BIN_EXE_html-to-pdf"))
        .arg("--landscape")
        .current_dir(sandbox.root.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
