//! Test-unit assembly.
//!
//! Walks parsed test cases, runs each step through the command translator
//! and wraps the result in per-test methods with setup and failure
//! handling, either as a complete class or spliced into a user template.

use sideways_php_gen::{
    method_lines, render_file, render_stmts, Expr, PhpClass, PhpFile, PhpMethod, Stmt, INDENT,
};

use crate::capabilities::{self, SessionFlags};
use crate::commands::Translator;
use crate::config::{ConvertOptions, Session, DEFAULT_TEST_URL};
use crate::error::ConvertResult;
use crate::parser::{sanitize_test_name, TestCase};
use crate::template::Template;

/// Assembles one output unit from parsed test cases.
#[derive(Debug)]
pub struct Assembler<'a> {
    opts: &'a ConvertOptions,
    session: &'a mut Session,
}

impl<'a> Assembler<'a> {
    /// Create an assembler over the given options and session.
    pub fn new(opts: &'a ConvertOptions, session: &'a mut Session) -> Self {
        Self { opts, session }
    }

    /// Assemble a complete test-case class.
    pub fn assemble_class(
        &mut self,
        origin: &str,
        title: &str,
        test_url: Option<&str>,
        cases: &[TestCase],
    ) -> ConvertResult<String> {
        // Capability resolution happens before any method is composed so
        // an unsupported browser aborts with no output produced.
        let browsers_property = self.browsers_property(title)?;

        let mut methods = vec![self.setup_method(test_url)];
        for case in cases {
            methods.push(self.compose_method(case)?);
        }

        let mut additional_content = self.opts.additional_class_content.clone();
        if let Some(property) = browsers_property {
            additional_content.extend(property);
        }

        let file = PhpFile {
            header: self.header_comment(origin),
            pre_class: self.opts.pre_class.clone(),
            class: PhpClass {
                name: self.class_name(title),
                parent: self.opts.parent_class.clone(),
                additional_content,
                methods,
            },
        };
        Ok(render_file(&file, self.opts.eol))
    }

    /// Splice the assembled pieces into a user template.
    pub fn assemble_template(
        &mut self,
        template: &Template,
        origin: &str,
        title: &str,
        test_url: Option<&str>,
        cases: &[TestCase],
    ) -> ConvertResult<String> {
        let eol = self.opts.eol.as_str();
        let browsers = self.browsers_rendered(title)?;

        // Single-case recordings expose the method name and raw step
        // content; suites expose fully assembled methods instead.
        let mut method_name = "noop".to_string();
        let mut method_content = String::new();
        let mut methods_text = String::new();
        let mut depends = String::new();

        if let [case] = cases {
            let base = format!("test{}", sanitize_test_name(&case.name));
            let name = self.session.unique_method_name(&base);
            if let Some(last) = &self.session.last_test_name {
                if *last != name {
                    depends = format!("@depends {last}");
                }
            }
            let mut translator = Translator::new(self.opts, self.session);
            let mut stmts = Vec::new();
            for step in &case.steps {
                stmts.extend(translator.translate(step)?);
            }
            method_content = indent_all_but_first(&render_stmts(&stmts), 2).join(eol);
            self.session.last_test_name = Some(name.clone());
            self.session.test_index += 1;
            method_name = name;
        } else {
            let mut lines: Vec<String> = Vec::new();
            for case in cases {
                let method = self.compose_method(case)?;
                lines.extend(method_lines(&method));
                lines.push(String::new());
            }
            methods_text = indent_all_but_first(&lines, 1).join(eol);
        }

        let comment = {
            let mut lines = vec!["/*".to_string()];
            lines.extend(self.header_comment(origin).iter().map(|l| format!("* {l}")));
            lines.push("*/".to_string());
            lines.join(eol)
        };

        Ok(template.render(&[
            ("{$comment}", comment),
            ("{$className}", self.class_name(title)),
            ("{$browser}", self.opts.browser.clone()),
            (
                "{$testUrl}",
                test_url.unwrap_or(DEFAULT_TEST_URL).to_string(),
            ),
            (
                "{$remoteHost}",
                self.opts
                    .remote_host
                    .clone()
                    .unwrap_or_else(|| "127.0.0.1".to_string()),
            ),
            (
                "{$remotePort}",
                self.opts
                    .remote_port
                    .clone()
                    .unwrap_or_else(|| "4444".to_string()),
            ),
            ("{$testMethodName}", method_name),
            ("{$testMethodContent}", method_content),
            ("{$testMethods}", methods_text),
            ("{$customParam1}", self.opts.custom_param1.clone()),
            ("{$customParam2}", self.opts.custom_param2.clone()),
            ("{$browsers}", browsers),
            ("{$depends}", depends),
        ]))
    }

    /// Compose one test method: dependency annotation, step index, run
    /// log, translated steps inside a try/catch that converts any failure
    /// into a logged, screenshotted assertion failure.
    fn compose_method(&mut self, case: &TestCase) -> ConvertResult<PhpMethod> {
        let base = format!("test{}", sanitize_test_name(&case.name));
        let name = self.session.unique_method_name(&base);

        let doc = match &self.session.last_test_name {
            Some(last) if *last != name => vec![format!("@depends {last}")],
            _ => Vec::new(),
        };

        let mut try_body = Vec::new();
        {
            let mut translator = Translator::new(self.opts, self.session);
            for step in &case.steps {
                try_body.extend(translator.translate(step)?);
            }
        }
        try_body.push(Stmt::expr(Expr::this_call(
            "log",
            vec![Expr::str(format!("{name} completed with success"))],
        )));

        let failure_message = Expr::str("Selenium test ")
            .concat(Expr::constant("__METHOD__"))
            .concat(Expr::str(" failed with exception\n"))
            .concat(Expr::var("e")?.method("getMessage", vec![]));
        let handler = vec![
            Stmt::expr(Expr::this_call("log", vec![failure_message.clone()])),
            Stmt::expr(Expr::this_call(
                "log",
                vec![Expr::str("Stacktrace\n")
                    .concat(Expr::var("e")?.method("getTraceAsString", vec![]))],
            )),
            Stmt::expr(Expr::this_call(
                "takeScreenshot",
                vec![Expr::str("failure")],
            )),
            Stmt::expr(Expr::this_call("fail", vec![failure_message])),
        ];

        let body = vec![
            Stmt::assign(
                Expr::this().prop("testIndex"),
                Expr::int(i64::from(self.session.test_index)),
            ),
            Stmt::expr(Expr::this_call(
                "log",
                vec![Expr::str(format!("Running {name}"))],
            )),
            Stmt::try_catch(try_body, "Exception", "e", handler)?,
        ];

        self.session.test_index += 1;
        self.session.last_test_name = Some(name.clone());

        Ok(PhpMethod {
            name,
            doc,
            body,
        })
    }

    fn setup_method(&self, test_url: Option<&str>) -> PhpMethod {
        let mut body = vec![
            Stmt::expr(Expr::this_call(
                "setBrowser",
                vec![Expr::str(self.opts.browser.clone())],
            )),
            Stmt::expr(Expr::this_call(
                "setBrowserUrl",
                vec![Expr::str(test_url.unwrap_or(DEFAULT_TEST_URL))],
            )),
        ];
        if let Some(host) = &self.opts.remote_host {
            body.push(Stmt::expr(Expr::this_call(
                "setHost",
                vec![Expr::str(host.clone())],
            )));
        }
        if let Some(port) = &self.opts.remote_port {
            body.push(Stmt::expr(Expr::this_call(
                "setPort",
                vec![Expr::str(port.clone())],
            )));
        }
        PhpMethod {
            name: "setUp".to_string(),
            doc: Vec::new(),
            body,
        }
    }

    fn class_name(&self, title: &str) -> String {
        format!(
            "{}{}Test",
            self.opts.class_prefix,
            sanitize_test_name(title)
        )
    }

    fn header_comment(&self, origin: &str) -> Vec<String> {
        vec![
            format!("Autogenerated from {origin} by sideways."),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        ]
    }

    /// `public static $browsers = array(...)` lines, or `None` when no
    /// browser list is configured.
    fn browsers_property(&self, title: &str) -> ConvertResult<Option<Vec<String>>> {
        let rendered = self.browsers_rendered(title)?;
        if rendered.is_empty() {
            return Ok(None);
        }
        let mut lines = vec!["public static $browsers = array(".to_string()];
        lines.extend(rendered.lines().map(|line| format!("{INDENT}{line}")));
        lines.push(");".to_string());
        Ok(Some(lines))
    }

    fn browsers_rendered(&self, title: &str) -> ConvertResult<String> {
        let Some(csv) = self.opts.browsers.as_deref() else {
            return Ok(String::new());
        };
        if csv.trim().is_empty() {
            return Ok(String::new());
        }
        let resolved = capabilities::build(csv)?;
        let flags = SessionFlags {
            project: self.opts.project_name.as_deref(),
            build: self.opts.project_build.as_deref(),
            name: Some(title),
            local: self.opts.browserstack_local,
            local_identifier: self.opts.browserstack_local_identifier.as_deref(),
            video: self.opts.video,
        };
        Ok(capabilities::render(&resolved, &flags, "\n"))
    }
}

/// Indent every line except the first by `units` indent levels, the shape
/// template splicing expects.
fn indent_all_but_first(lines: &[String], units: usize) -> Vec<String> {
    let prefix = INDENT.repeat(units);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.is_empty() {
                line.clone()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}
