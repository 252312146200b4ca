//! External converter – turns the pre-rendered HTML edition of the report
//! into PDF by running `wkhtmltopdf`.
//!
//! The flow is linear and never retries:
//!
//! 1. input HTML missing → [`Outcome::MissingInput`]
//! 2. converter not runnable → [`Outcome::Unavailable`], with manual
//!    print-to-PDF guidance
//! 3. converter exits 0 → [`Outcome::Converted`], otherwise
//!    [`Outcome::Failed`] carrying the converter's stderr
//!
//! Process spawning sits behind [`ConversionBackend`] so the flow can be
//! exercised without the real binary.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::content::{HTML_PATH, PDF_PATH};
use crate::error::{Error, Result};

/// Invocation settings for the converter.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Converter executable, resolved through `PATH` (default: `wkhtmltopdf`).
    pub program: PathBuf,
    /// HTML input (default: `docs/planejamento-bi-ia.html`).
    pub html_path: PathBuf,
    /// PDF output (default: `docs/planejamento-bi-ia.pdf`).
    pub pdf_path: PathBuf,
    /// Time given to page scripts before printing.
    pub javascript_delay_ms: u32,
    /// Margin applied to all four sides, in wkhtmltopdf units (default: `20mm`).
    pub margin: String,
    /// Centered footer text; `[page]` and `[topage]` are substituted by the
    /// converter.
    pub footer_center: String,
    pub footer_font_size: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("wkhtmltopdf"),
            html_path: PathBuf::from(HTML_PATH),
            pdf_path: PathBuf::from(PDF_PATH),
            javascript_delay_ms: 1000,
            margin: "20mm".to_string(),
            footer_center: "[page]/[topage]".to_string(),
            footer_font_size: 9,
        }
    }
}

impl ConverterConfig {
    /// Full argument list for a conversion run, ending with the input and
    /// output paths.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "--enable-local-file-access",
            "--print-media-type",
            "--no-stop-slow-scripts",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();

        let mut push = |flag: &str, value: String| {
            args.push(flag.into());
            args.push(value.into());
        };
        push("--javascript-delay", self.javascript_delay_ms.to_string());
        for side in ["top", "bottom", "left", "right"] {
            push(&format!("--margin-{side}"), self.margin.clone());
        }
        push("--footer-center", self.footer_center.clone());
        push("--footer-font-size", self.footer_font_size.to_string());

        args.push(self.html_path.clone().into_os_string());
        args.push(self.pdf_path.clone().into_os_string());
        args
    }
}

/// Result of probing for the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// The converter runs.
    Available,
    /// The converter is missing but a package manager that ships it was
    /// found. `command` is shown to the user, never executed.
    Installable { command: String },
    Unavailable,
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available)
    }
}

/// Seam between the conversion flow and process execution.
pub trait ConversionBackend {
    /// Check whether the converter can run. Never fails: any problem is
    /// reported as a non-available capability.
    fn detect(&self, config: &ConverterConfig) -> Capability;

    /// Run one conversion to completion.
    fn convert(&self, config: &ConverterConfig) -> Result<()>;
}

/// Package managers known to ship wkhtmltopdf, with the command to suggest.
const INSTALLERS: &[(&str, &str)] = &[
    ("apt-get", "sudo apt-get install -y wkhtmltopdf"),
    ("dnf", "sudo dnf install -y wkhtmltopdf"),
    ("brew", "brew install --cask wkhtmltopdf"),
    ("choco", "choco install wkhtmltopdf"),
    ("winget", "winget install wkhtmltopdf.wkhtmltox"),
];

/// Backend that spawns the real `wkhtmltopdf` process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Wkhtmltopdf;

/// Run `<program> --version` with all output discarded. True only if the
/// process starts and exits successfully.
fn runs_quietly(program: &OsStr) -> bool {
    Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

impl ConversionBackend for Wkhtmltopdf {
    fn detect(&self, config: &ConverterConfig) -> Capability {
        if runs_quietly(config.program.as_os_str()) {
            log::debug!("{} is available", config.program.display());
            return Capability::Available;
        }
        log::debug!("{} did not answer --version", config.program.display());

        INSTALLERS
            .iter()
            .find(|(manager, _)| runs_quietly(OsStr::new(manager)))
            .map(|(manager, command)| {
                log::debug!("found package manager {manager}");
                Capability::Installable {
                    command: (*command).to_string(),
                }
            })
            .unwrap_or(Capability::Unavailable)
    }

    fn convert(&self, config: &ConverterConfig) -> Result<()> {
        let output = Command::new(&config.program)
            .args(config.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                program: config.program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }
        Err(Error::Conversion {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Final state of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted { pdf_path: PathBuf },
    MissingInput { html_path: PathBuf },
    /// `html_path` is absolute so the user can open it directly.
    Unavailable {
        html_path: PathBuf,
        capability: Capability,
    },
    Failed { stderr: String },
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Converted { .. } => 0,
            _ => 1,
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Run the conversion flow, writing progress and guidance to `out`.
pub fn run(
    config: &ConverterConfig,
    backend: &dyn ConversionBackend,
    out: &mut dyn Write,
) -> io::Result<Outcome> {
    let html = &config.html_path;
    if !html.exists() {
        writeln!(out, "Arquivo {} não encontrado!", html.display())?;
        return Ok(Outcome::MissingInput {
            html_path: html.clone(),
        });
    }

    let program = config.program.display();
    let capability = backend.detect(config);
    if !capability.is_available() {
        let html_path = absolute(html);
        writeln!(out, "❌ {program} não encontrado")?;
        writeln!(
            out,
            "💡 Você pode abrir o arquivo HTML no navegador e usar 'Imprimir > Salvar como PDF'"
        )?;
        if let Capability::Installable { command } = &capability {
            writeln!(out, "📦 Para instalar: {command}")?;
        }
        writeln!(out, "📄 Arquivo HTML: {}", html_path.display())?;
        return Ok(Outcome::Unavailable {
            html_path,
            capability,
        });
    }

    writeln!(out, "Convertendo HTML para PDF usando {program}...")?;
    match backend.convert(config) {
        Ok(()) => {
            log::info!("converted '{}' to '{}'", html.display(), config.pdf_path.display());
            writeln!(out, "✅ PDF criado com sucesso: {}", config.pdf_path.display())?;
            Ok(Outcome::Converted {
                pdf_path: config.pdf_path.clone(),
            })
        }
        Err(e) => {
            log::warn!("conversion failed: {e}");
            let stderr = e.stderr_text();
            writeln!(out, "Erro ao converter: {stderr}")?;
            writeln!(out, "❌ Falha na conversão")?;
            Ok(Outcome::Failed { stderr })
        }
    }
}
