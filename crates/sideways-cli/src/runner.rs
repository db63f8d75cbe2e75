//! Conversion driver: input traversal, option wiring, output filename
//! derivation.

use std::fs;
use std::path::{Path, PathBuf};

use sideways::parser::sanitize_test_name;
use sideways::{ConvertOptions, Converter, LineEnding, Template};

use crate::commands::Cli;
use crate::error::{CliError, CliResult};
use crate::output::ProgressReporter;

/// Drives conversions over one file or a directory of files.
#[derive(Debug)]
pub struct Runner<'a> {
    cli: &'a Cli,
    converter: Converter,
    template: Option<Template>,
    reporter: ProgressReporter,
}

impl<'a> Runner<'a> {
    /// Wire CLI arguments into a converter; loads the template eagerly so
    /// a missing template file fails before any conversion starts.
    pub fn new(cli: &'a Cli, reporter: ProgressReporter) -> CliResult<Self> {
        let template = match &cli.output_tpl {
            Some(path) => Some(Template::load(path)?),
            None => None,
        };
        Ok(Self {
            cli,
            converter: Converter::new(build_options(cli)),
            template,
            reporter,
        })
    }

    /// Convert the configured input.
    pub fn run(&mut self) -> CliResult<()> {
        let input = self.cli.input.clone();
        if input.is_file() {
            let out = self.convert_file(&input, None)?;
            self.reporter.success(&out.display().to_string());
            Ok(())
        } else if input.is_dir() {
            self.convert_directory(&input)
        } else {
            Err(CliError::InputNotFound(input))
        }
    }

    fn convert_directory(&mut self, dir: &Path) -> CliResult<()> {
        let files = collect_files(dir, &self.cli.files_pattern, self.cli.recursive)?;
        if files.is_empty() {
            self.reporter.info(&format!(
                "No files matching \"{}\" under {}",
                self.cli.files_pattern,
                dir.display()
            ));
            return Ok(());
        }

        self.reporter
            .start_progress(files.len() as u64, "converting");
        let mut failed = 0;
        for file in &files {
            match self.convert_file(file, Some(dir)) {
                Ok(out) => self.reporter.success(&out.display().to_string()),
                Err(error) => {
                    failed += 1;
                    self.reporter
                        .failure(&format!("{}: {error}", file.display()));
                }
            }
            self.reporter.increment(1);
        }
        self.reporter.finish();

        if failed > 0 {
            Err(CliError::PartialFailure {
                failed,
                total: files.len(),
            })
        } else {
            Ok(())
        }
    }

    fn convert_file(&self, path: &Path, base_dir: Option<&Path>) -> CliResult<PathBuf> {
        let content = fs::read_to_string(path)?;
        let with_folders = base_dir.is_some() && self.cli.dest.is_some();
        let test_name = derive_test_name(path, base_dir, with_folders);

        let php = if is_side_file(path) {
            self.converter.convert_side(&content, self.template.as_ref())?
        } else {
            self.converter
                .convert_html(&content, Some(&test_name), self.template.as_ref())?
        };

        let out_path = match (&self.cli.output, base_dir) {
            (Some(explicit), None) => explicit.clone(),
            _ => self.derive_output_path(path, base_dir, &test_name, &content)?,
        };
        fs::write(&out_path, php)?;
        Ok(out_path)
    }

    fn derive_output_path(
        &self,
        input: &Path,
        base_dir: Option<&Path>,
        test_name: &str,
        content: &str,
    ) -> CliResult<PathBuf> {
        let out_dir = match &self.cli.dest {
            Some(dest) if dest.is_absolute() => dest.clone(),
            Some(dest) => {
                let base = base_dir
                    .map(Path::to_path_buf)
                    .or_else(|| input.parent().map(Path::to_path_buf))
                    .unwrap_or_else(|| PathBuf::from("."));
                base.join(dest)
            }
            None => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        if !out_dir.is_dir() {
            return Err(CliError::invalid_argument(format!(
                "Directory \"{}\" not found",
                out_dir.display()
            )));
        }

        let hash_postfix = if self.cli.use_hash_postfix {
            let hash = blake3::hash(content.as_bytes());
            format!("_{}_", &hash.to_hex().as_str()[..8])
        } else {
            String::new()
        };

        Ok(out_dir.join(format!(
            "{}{test_name}{hash_postfix}{}.php",
            self.cli.php_prefix, self.cli.php_postfix
        )))
    }
}

/// Output test name from the input path.
///
/// Without a destination folder, the file stem alone:
/// `auth/login/simple.html` → `Simple`. With one, the path relative to the
/// base keeps its folders: → `Auth_login_simple`.
fn derive_test_name(path: &Path, base_dir: Option<&Path>, with_folders: bool) -> String {
    if with_folders {
        let relative = base_dir
            .and_then(|base| path.strip_prefix(base).ok())
            .unwrap_or(path);
        let mut joined = relative
            .with_extension("")
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("_");
        if joined.is_empty() {
            joined = "some".to_string();
        }
        sanitize_test_name(&joined)
    } else {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "some".to_string());
        sanitize_test_name(&stem)
    }
}

fn is_side_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("side" | "json")
    )
}

fn collect_files(dir: &Path, pattern: &str, recursive: bool) -> CliResult<Vec<PathBuf>> {
    let glob_pattern = if recursive {
        dir.join("**").join(pattern)
    } else {
        dir.join(pattern)
    };
    let mut files = glob::glob(&glob_pattern.to_string_lossy())?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

fn build_options(cli: &Cli) -> ConvertOptions {
    let mut opts = ConvertOptions::default();
    if let Some(browser) = &cli.browser {
        opts.browser.clone_from(browser);
    }
    opts.test_url = cli.browser_url.clone();
    opts.remote_host = cli.remote_host.clone();
    opts.remote_port = cli.remote_port.clone();
    if let Some(prefix) = &cli.class_prefix {
        opts.class_prefix.clone_from(prefix);
    }
    opts.screenshots_on_every_step = cli.screenshots_on_every_step;
    opts.browsers = cli.browsers.clone();
    opts.project_name = cli.project_name.clone();
    opts.project_build = cli.project_build.clone();
    opts.suite_reference = cli.test_suite.clone();
    opts.browserstack_local = cli.browserstack_local;
    opts.browserstack_local_identifier = cli.browserstack_local_identifier.clone();
    opts.video = cli.video_enabled();
    if let Some(raw) = &cli.override_params {
        opts = opts.with_override_params(raw);
    }
    opts.single_test = cli.single_test;
    opts.custom_param1.clone_from(&cli.custom_param1);
    opts.custom_param2.clone_from(&cli.custom_param2);
    opts.eol = if cli.crlf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    };
    opts
}
