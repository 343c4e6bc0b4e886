//! Configuration loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{TaskError, TaskResult};

use super::types::{Config, TransportKind, Verbosity};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "sitetask.toml";

/// Starter config written by `sitetask init`
pub const STARTER_TEMPLATE: &str = r#"# sitetask configuration

[paths]
# Builder output; deleted by `clean`, synced by `deploy`
output = "dist"

[builder]
command = ["pdm", "run", "src/builder/build.py"]
# Passed by `rebuild` only
force_flag = "--force"

[server]
command = ["pdm", "run", "src/builder/serve.py"]

[watcher]
command = ["pdm", "run", "src/builder/watch.py"]

[deploy]
# remote = "user@example.com:/var/www/site"
transport = "rsync"
ssh = "ssh"

[output]
color = "auto"
unicode = true
verbosity = "normal"
"#;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` / `SITETASK_CONFIG`
    Explicit(PathBuf),
    /// `<root>/sitetask.toml`
    Project(PathBuf),
    /// `<config_dir>/sitetask/config.toml`
    User(PathBuf),
    /// Built-in defaults
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => {
                Some(p)
            }
            ConfigSource::Defaults => None,
        }
    }

    pub fn describe(&self) -> String {
        match self.path() {
            Some(p) => p.display().to_string(),
            None => "built-in defaults".to_string(),
        }
    }
}

/// Effective configuration plus how it was found
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
fn load_with_warnings(path: &Path) -> TaskResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(super) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> TaskResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TaskError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve config for a project using the real user config dir and env
pub fn load_for_project(root: &Path, explicit: Option<&Path>) -> TaskResult<LoadedConfig> {
    load_for_project_with(root, explicit, user_config_path(), |key| {
        std::env::var(key).ok()
    })
}

/// Resolution order: explicit file, project file, user file, defaults.
/// The first file found is used whole; env overrides apply last.
pub fn load_for_project_with(
    root: &Path,
    explicit: Option<&Path>,
    user_config: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> TaskResult<LoadedConfig> {
    let source = if let Some(path) = explicit {
        ConfigSource::Explicit(path.to_path_buf())
    } else {
        let project = root.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            ConfigSource::Project(project)
        } else {
            match user_config.filter(|p| p.is_file()) {
                Some(user) => ConfigSource::User(user),
                None => ConfigSource::Defaults,
            }
        }
    };

    let (config, warnings) = match source.path() {
        Some(path) => load_with_warnings(path).map_err(|e| match e {
            TaskError::Io(io) => TaskError::InvalidConfig {
                file: path.to_path_buf(),
                message: io.to_string(),
            },
            other => other,
        })?,
        None => (Config::default(), Vec::new()),
    };

    debug!(source = %source.describe(), "loaded configuration");

    Ok(LoadedConfig {
        config: apply_env_overrides(config, get_env),
        source,
        warnings,
    })
}

pub(super) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // SITETASK_OUTPUT_DIR
    if let Some(dir) = get_env("SITETASK_OUTPUT_DIR").filter(|d| !d.trim().is_empty()) {
        config.paths.output = PathBuf::from(dir);
    }

    // SITETASK_REMOTE
    if let Some(remote) = get_env("SITETASK_REMOTE").filter(|r| !r.trim().is_empty()) {
        config.deploy.remote = Some(remote);
    }

    // SITETASK_TRANSPORT
    if let Some(transport) = get_env("SITETASK_TRANSPORT") {
        match TransportKind::parse_lenient(&transport) {
            Some(kind) => config.deploy.transport = kind,
            None => warn!(
                value = %transport,
                "ignoring SITETASK_TRANSPORT (expected rsync, scp or auto)"
            ),
        }
    }

    // SITETASK_VERBOSITY
    if let Some(verbosity) = get_env("SITETASK_VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lenient(&verbosity);
    }

    config
}

/// Write the starter config into `root`
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_starter(root: &Path, force: bool) -> TaskResult<PathBuf> {
    let path = root.join(PROJECT_CONFIG_FILE);
    if path.exists() && !force {
        return Err(TaskError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", path.display()),
        )));
    }
    fs::create_dir_all(root)?;
    fs::write(&path, STARTER_TEMPLATE)?;
    Ok(path)
}

/// User config file (`$XDG_CONFIG_HOME/sitetask/config.toml` or the
/// platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("sitetask").join("config.toml"))
}

/// First line that defines `key`, as `key = ...` or as a `[table]` header
pub(super) fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| defines_key(line.trim_start(), key))
        .map(|i| i + 1)
}

fn defines_key(line: &str, key: &str) -> bool {
    let name = if let Some(header) = line.strip_prefix('[') {
        header.trim_start_matches('[').split(']').next()
    } else if line.contains('=') {
        line.split('=').next()
    } else {
        None
    };

    // Dotted names (`a.b = 1`, `[a.b]`) define their last segment
    name.and_then(|n| n.split('.').next_back())
        .map(|last| last.trim().trim_matches('"'))
        == Some(key)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "output",
        "builder",
        "command",
        "force_flag",
        "server",
        "watcher",
        "deploy",
        "remote",
        "transport",
        "program",
        "ssh",
        "verbosity",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
