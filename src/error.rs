use std::fmt;
use std::path::PathBuf;

/// Routes-file loading error.
///
/// Every variant is fatal: registration stops at the first failure and no
/// partial route table is produced. Messages name the offending file and the
/// rule that failed so a host can surface them verbatim at bootstrap.
#[derive(Debug)]
pub enum RoutesError {
    /// The routes file does not exist or could not be read.
    ConfigLoad { path: PathBuf },
    /// The routes file has an extension other than `xml` or `json`.
    ConfigFormat { path: PathBuf, extension: String },
    /// The file parsed but is not a valid descriptor document.
    Malformed { path: PathBuf, detail: String },
    /// The descriptor has no `routes` section.
    NoRoutes { path: PathBuf },
    /// A route entry is missing one of its required attributes
    /// (`pattern`, `controller`, `name`).
    MissingRouteAttribute {
        /// Zero-based position of the entry in the `routes` list.
        index: usize,
        attribute: &'static str,
    },
    /// A middleware declaration lacks its required `middleware` identifier.
    MiddlewareMissing {
        /// Zero-based position of the entry in the `middlewares` list.
        index: usize,
    },
}

impl fmt::Display for RoutesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutesError::ConfigLoad { path } => {
                write!(f, "routes file loading failed: {}", path.display())
            }
            RoutesError::ConfigFormat { path, extension } => {
                write!(
                    f,
                    "routes file must be of xml or json type, got '{}': {}",
                    extension,
                    path.display()
                )
            }
            RoutesError::Malformed { path, detail } => {
                write!(f, "malformed routes file {}: {}", path.display(), detail)
            }
            RoutesError::NoRoutes { path } => {
                write!(f, "no routes section in file: {}", path.display())
            }
            RoutesError::MissingRouteAttribute { index, attribute } => {
                write!(
                    f,
                    "route entry #{} is missing its '{}' attribute",
                    index, attribute
                )
            }
            RoutesError::MiddlewareMissing { index } => {
                write!(
                    f,
                    "middleware entry #{}: middleware attribute is missing",
                    index
                )
            }
        }
    }
}

impl std::error::Error for RoutesError {}

/// Settings-file loading error. Fatal, like [`RoutesError`].
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file does not exist or could not be read.
    ConfigLoad { path: PathBuf },
    /// The settings file has an extension other than `ini` or `json`.
    ConfigFormat { path: PathBuf, extension: String },
    /// The file exists but could not be parsed as its declared format.
    Malformed { path: PathBuf, detail: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::ConfigLoad { path } => {
                write!(f, "failed to load config file: {}", path.display())
            }
            SettingsError::ConfigFormat { path, extension } => {
                write!(
                    f,
                    "config file must be of ini or json type, got '{}': {}",
                    extension,
                    path.display()
                )
            }
            SettingsError::Malformed { path, detail } => {
                write!(f, "malformed config file {}: {}", path.display(), detail)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
