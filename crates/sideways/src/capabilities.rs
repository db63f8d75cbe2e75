//! Browser capability descriptors.
//!
//! A comma-separated browser list resolves against a static definitions
//! table; each entry renders as one descriptor array in the generated
//! `public static $browsers` block. Unknown names abort the conversion
//! before any output is produced.

use crate::error::{ConvertError, ConvertResult};

/// One row of the browser definitions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserDefinition {
    /// Driver browser name
    pub browser_name: Option<&'static str>,
    /// Browser version, unset means latest
    pub version: Option<&'static str>,
    /// Operating system
    pub os: Option<&'static str>,
    /// Operating system version
    pub os_version: Option<&'static str>,
    /// Screen resolution
    pub resolution: Option<&'static str>,
}

/// The static definitions table, keyed by the short name used on the
/// command line.
pub const BROWSER_DEFINITIONS: &[(&str, BrowserDefinition)] = &[
    (
        "chrome",
        BrowserDefinition {
            browser_name: Some("chrome"),
            version: None,
            os: Some("Windows"),
            os_version: Some("10"),
            resolution: Some("1920x1080"),
        },
    ),
    (
        "firefox",
        BrowserDefinition {
            browser_name: Some("firefox"),
            version: None,
            os: Some("Windows"),
            os_version: Some("10"),
            resolution: Some("1920x1080"),
        },
    ),
    (
        "edge",
        BrowserDefinition {
            browser_name: Some("edge"),
            version: None,
            os: Some("Windows"),
            os_version: Some("10"),
            resolution: Some("1920x1080"),
        },
    ),
    (
        "ie11",
        BrowserDefinition {
            browser_name: Some("internet explorer"),
            version: Some("11"),
            os: Some("Windows"),
            os_version: Some("10"),
            resolution: Some("1920x1080"),
        },
    ),
    (
        "safari",
        BrowserDefinition {
            browser_name: Some("safari"),
            version: None,
            os: Some("OS X"),
            os_version: Some("Monterey"),
            resolution: Some("1920x1080"),
        },
    ),
    (
        "chrome-mac",
        BrowserDefinition {
            browser_name: Some("chrome"),
            version: None,
            os: Some("OS X"),
            os_version: Some("Monterey"),
            resolution: Some("1920x1080"),
        },
    ),
    (
        "iphone",
        BrowserDefinition {
            browser_name: Some("iPhone"),
            version: None,
            os: Some("ios"),
            os_version: Some("15"),
            resolution: None,
        },
    ),
    (
        "android",
        BrowserDefinition {
            browser_name: Some("android"),
            version: None,
            os: Some("android"),
            os_version: Some("12.0"),
            resolution: None,
        },
    ),
];

/// Session-level flags appended to every descriptor.
#[derive(Debug, Clone, Default)]
pub struct SessionFlags<'a> {
    /// Project tag
    pub project: Option<&'a str>,
    /// Build id tag
    pub build: Option<&'a str>,
    /// Test name tag
    pub name: Option<&'a str>,
    /// Route sessions through a local tunnel
    pub local: bool,
    /// Tunnel identifier
    pub local_identifier: Option<&'a str>,
    /// Record video of the session
    pub video: bool,
}

/// One resolved capability descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCapability {
    /// Short name the descriptor was resolved from
    pub requested: String,
    /// Definitions-table row
    pub definition: BrowserDefinition,
}

/// Resolve a comma-separated browser list against the definitions table.
///
/// # Errors
///
/// Returns [`ConvertError::UnsupportedBrowser`] for any name absent from
/// the table.
pub fn build(browser_csv: &str) -> ConvertResult<Vec<BrowserCapability>> {
    browser_csv
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            BROWSER_DEFINITIONS
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, definition)| BrowserCapability {
                    requested: name.to_string(),
                    definition: *definition,
                })
                .ok_or_else(|| ConvertError::UnsupportedBrowser {
                    name: name.to_string(),
                })
        })
        .collect()
}

/// Render the descriptors as the interior of a PHP `array(...)` literal,
/// one entry per requested browser, comma-joined.
#[must_use]
pub fn render(capabilities: &[BrowserCapability], flags: &SessionFlags<'_>, eol: &str) -> String {
    capabilities
        .iter()
        .map(|capability| render_one(capability, flags, eol))
        .collect::<Vec<_>>()
        .join(&format!(",{eol}"))
}

fn render_one(capability: &BrowserCapability, flags: &SessionFlags<'_>, eol: &str) -> String {
    let definition = &capability.definition;
    let mut desired = Vec::new();
    push_param(&mut desired, "project", flags.project);
    push_param(&mut desired, "build", flags.build);
    push_param(&mut desired, "name", flags.name);
    if flags.local {
        desired.push("'browserstack.local' => true,".to_string());
        push_param(&mut desired, "browserstack.localIdentifier", flags.local_identifier);
    }
    if !flags.video {
        desired.push("'browserstack.video' => 'false',".to_string());
    }
    desired.push(format!(
        "'version' => '{}',",
        definition.version.unwrap_or_default()
    ));
    desired.push("'browserstack.user' => BROWSERSTACK_USER,".to_string());
    desired.push("'browserstack.key' => BROWSERSTACK_KEY,".to_string());
    desired.push(format!("'os' => '{}',", definition.os.unwrap_or_default()));
    desired.push(format!(
        "'os_version' => '{}',",
        definition.os_version.unwrap_or_default()
    ));
    desired.push(format!(
        "'resolution' => '{}'",
        definition.resolution.unwrap_or_default()
    ));

    let browser_name: &str = match definition.browser_name {
        Some(name) => name,
        None => &capability.requested,
    };
    let mut lines = vec![
        "array(".to_string(),
        format!("    'browserName' => '{browser_name}',"),
        "    'host' => 'hub.browserstack.com',".to_string(),
        "    'port' => 80,".to_string(),
        "    'sessionStrategy' => 'shared',".to_string(),
        "    'desiredCapabilities' => array(".to_string(),
    ];
    lines.extend(desired.into_iter().map(|line| format!("        {line}")));
    lines.push("    )".to_string());
    lines.push(")".to_string());
    lines.join(eol)
}

fn push_param(out: &mut Vec<String>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            out.push(format!("'{name}' => '{value}',"));
        }
    }
}
