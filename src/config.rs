//! Run configuration
//!
//! All fixed relative paths, the enumeration filter and the keyword tables live
//! in one [`GraderConfig`] value. It is resolved once when a run starts and then
//! passed by reference into every verifier; nothing mutates it afterwards.
//!
//! Defaults reproduce the task layout. An optional `taskgrade.toml` at the
//! workspace root overrides any subset of them:
//!
//! ```toml
//! page_title = "Example Domain"
//!
//! [paths]
//! log_fixture = "data/server.log"
//!
//! [enumeration]
//! pattern = "*.py"
//! excluded_roots = ["CODING", "TOOLS", "WRITING", "results"]
//!
//! [keywords]
//! technology = ["code", "data"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional override file at the workspace root
pub const CONFIG_FILE_NAME: &str = "taskgrade.toml";

/// Title expected in the page-title output
pub const DEFAULT_PAGE_TITLE: &str = "Example Domain";

/// Top-level directories reserved for task infrastructure and results
pub const DEFAULT_EXCLUDED_ROOTS: &[&str] = &["CODING", "TOOLS", "WRITING", "results"];

const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "code", "data", "digital", "software", "hardware", "computer", "internet", "network",
    "algorithm", "ai", "robot", "machine", "silicon", "circuit", "byte", "pixel", "screen",
    "server", "cloud", "tech", "program", "electric", "signal", "binary",
];

const BENEFIT_KEYWORDS: &[&str] = &[
    "benefit",
    "transform",
    "assist",
    "improve",
    "advance",
    "promise",
    "opportunit",
    "revolutioniz",
    "enhance",
    "help",
];

const CHALLENGE_KEYWORDS: &[&str] = &[
    "challenge",
    "concern",
    "ethical",
    "bias",
    "privacy",
    "risk",
    "question",
    "problem",
    "issue",
    "employment",
];

const OS_KEYWORDS: &[&str] = &[
    "linux", "darwin", "macos", "windows", "ubuntu", "debian", "arch", "fedora", "centos",
];

/// Complete configuration for one verification run
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraderConfig {
    /// Root every relative path is resolved against
    #[serde(skip)]
    pub workspace: PathBuf,
    pub paths: TaskPaths,
    pub enumeration: EnumerationConfig,
    pub keywords: KeywordTables,
    pub page_title: PageTitle,
    /// Replaces the host probe when set (e.g. "linux", "darwin", "windows")
    pub host_platform: Option<String>,
}

/// Fixture and output locations, relative to the workspace
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskPaths {
    pub temperatures_output: PathBuf,
    pub log_fixture: PathBuf,
    pub log_output: PathBuf,
    pub sales_fixture: PathBuf,
    pub sales_output: PathBuf,
    pub py_files_output: PathBuf,
    pub page_title_output: PathBuf,
    pub report_settings: PathBuf,
    pub report_output: PathBuf,
    pub haiku_output: PathBuf,
    pub summary_output: PathBuf,
    pub pros_cons_output: PathBuf,
    pub os_version_output: PathBuf,
}

impl Default for TaskPaths {
    fn default() -> Self {
        Self {
            temperatures_output: PathBuf::from("results/temperatures.txt"),
            log_fixture: PathBuf::from("data/server.log"),
            log_output: PathBuf::from("results/log_summary.txt"),
            sales_fixture: PathBuf::from("data/sales.csv"),
            sales_output: PathBuf::from("results/sales_summary.json"),
            py_files_output: PathBuf::from("results/py_files.txt"),
            page_title_output: PathBuf::from("results/page_title.txt"),
            report_settings: PathBuf::from("TOOLS/003/data/settings.json"),
            report_output: PathBuf::from("results/report.txt"),
            haiku_output: PathBuf::from("results/haiku.txt"),
            summary_output: PathBuf::from("results/summary.txt"),
            pros_cons_output: PathBuf::from("results/pros_cons.txt"),
            os_version_output: PathBuf::from("results/os_version.txt"),
        }
    }
}

/// File filter for the workspace enumeration task
///
/// `excluded_roots` is matched against the first path component only. Keeping
/// `results` in the list is what excludes stale outputs of earlier runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnumerationConfig {
    /// Glob matched against each file name
    pub pattern: String,
    pub excluded_roots: Vec<String>,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            pattern: "*.py".to_string(),
            excluded_roots: DEFAULT_EXCLUDED_ROOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Vocabulary tables used by the content heuristics
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordTables {
    pub technology: Vec<String>,
    pub benefit: Vec<String>,
    pub challenge: Vec<String>,
    pub os_names: Vec<String>,
    /// Accepted spellings per host platform identifier
    pub os_aliases: BTreeMap<String, Vec<String>>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();

        let mut os_aliases = BTreeMap::new();
        os_aliases.insert("linux".to_string(), owned(&["linux"]));
        os_aliases.insert("darwin".to_string(), owned(&["macos", "darwin", "mac"]));
        os_aliases.insert("windows".to_string(), owned(&["windows"]));

        Self {
            technology: owned(TECHNOLOGY_KEYWORDS),
            benefit: owned(BENEFIT_KEYWORDS),
            challenge: owned(CHALLENGE_KEYWORDS),
            os_names: owned(OS_KEYWORDS),
            os_aliases,
        }
    }
}

/// Expected page title, compared case-insensitively
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PageTitle(pub String);

impl Default for PageTitle {
    fn default() -> Self {
        Self(DEFAULT_PAGE_TITLE.to_string())
    }
}

impl GraderConfig {
    /// Default configuration rooted at `workspace`
    pub fn for_workspace(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            ..Self::default()
        }
    }

    /// Load configuration for `workspace`, applying `taskgrade.toml` if present
    pub fn load(workspace: &Path) -> Result<Self> {
        let config_path = workspace.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!(workspace = %workspace.display(), "no config file, using defaults");
            return Ok(Self::for_workspace(workspace));
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.workspace = workspace.to_path_buf();

        tracing::debug!(path = %config_path.display(), "loaded config overrides");
        Ok(config)
    }

    /// Resolve a workspace-relative path
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.workspace.join(relative)
    }
}
