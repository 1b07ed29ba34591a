//! Dependency registry and definitions.
//!
//! Defines which optional dependencies exist, what they are needed for,
//! and how to install them on each platform. Install instructions are a
//! lookup table keyed by [`Platform`], so supporting a new platform means
//! adding an entry rather than another branch.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Operating system family used to pick install instructions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
    /// Any other OS, carrying the identifier it was detected as.
    Other(String),
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Parse an OS identifier.
    ///
    /// Accepts Rust's `std::env::consts::OS` names as well as the common
    /// `darwin` / `win32` spellings. Unrecognized identifiers are kept as
    /// [`Platform::Other`].
    pub fn from_identifier(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "macos" | "darwin" | "mac" | "osx" => Platform::MacOS,
            "windows" | "win32" => Platform::Windows,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Short label shown in front of an install command.
    pub fn label(&self) -> &str {
        match self {
            Platform::MacOS => "Mac",
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::Other(id) => id.as_str(),
        }
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_identifier(s))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOS => write!(f, "macos"),
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
            Platform::Other(id) => write!(f, "{}", id),
        }
    }
}

/// A platform-specific install instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallHint {
    /// Shell or package-manager command that installs the tool.
    pub command: String,
}

/// An optional dependency definition.
#[derive(Debug, Clone)]
pub struct Dependency {
    /// Registry name (e.g., "babashka")
    pub name: String,
    /// Human-readable name (e.g., "Babashka")
    pub display_name: String,
    /// Executable to probe (e.g., "bb")
    pub command: String,
    /// What the dependency is required for
    pub purpose: String,
    /// Short feature name used in the summary
    pub feature: String,
    /// Generic install page
    pub homepage: String,
    /// Install instructions per platform
    pub install_hints: HashMap<Platform, InstallHint>,
}

impl Dependency {
    /// Create a dependency with no platform install hints.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            command: command.into(),
            purpose: String::new(),
            feature: String::new(),
            homepage: String::new(),
            install_hints: HashMap::new(),
        }
    }

    /// Set what the dependency is required for and the feature it unlocks.
    pub fn needed_for(mut self, purpose: impl Into<String>, feature: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self.feature = feature.into();
        self
    }

    /// Set the generic install page.
    pub fn homepage(mut self, url: impl Into<String>) -> Self {
        self.homepage = url.into();
        self
    }

    /// Add an install command for a platform.
    pub fn with_hint(mut self, platform: Platform, command: impl Into<String>) -> Self {
        self.install_hints.insert(
            platform,
            InstallHint {
                command: command.into(),
            },
        );
        self
    }

    /// Install instruction for a platform, if one is known.
    pub fn install_hint(&self, platform: &Platform) -> Option<&InstallHint> {
        self.install_hints.get(platform)
    }
}

/// Registry of optional dependencies, kept in registration order.
#[derive(Debug, Clone)]
pub struct DependencyRegistry {
    dependencies: Vec<Dependency>,
}

impl Default for DependencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyRegistry {
    /// Create a registry with the built-in dependencies.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(
            Dependency::new("babashka", "Babashka", "bb")
                .needed_for("Modular template workflow (split/build)", "modular workflow")
                .homepage("https://babashka.org/")
                .with_hint(Platform::MacOS, "brew install borkdude/brew/babashka")
                .with_hint(Platform::Windows, "scoop install babashka")
                .with_hint(
                    Platform::Linux,
                    "bash < <(curl -s https://raw.githubusercontent.com/babashka/babashka/master/install)",
                ),
        );

        registry
    }

    /// Create a registry with no dependencies.
    pub fn empty() -> Self {
        Self {
            dependencies: Vec::new(),
        }
    }

    /// Add a dependency. A dependency with the same name is replaced in place.
    pub fn register(&mut self, dependency: Dependency) {
        match self
            .dependencies
            .iter_mut()
            .find(|d| d.name == dependency.name)
        {
            Some(existing) => *existing = dependency,
            None => self.dependencies.push(dependency),
        }
    }

    /// Look up a dependency by registry name.
    pub fn get(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.name == name)
    }

    /// Iterate over dependencies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter()
    }

    /// Number of registered dependencies.
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Whether the registry has no dependencies.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
