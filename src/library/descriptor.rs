/// Library descriptors as exchanged with the libraries API.
///
/// Externally tagged: each descriptor serializes to an object with exactly one
/// key naming its kind, e.g. `{"jar": "dbfs:/libs/foo.jar"}` or
/// `{"pypi": {"package": "simplejson"}}`.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single library to install on (or remove from) a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// JAR uploaded to DBFS or S3.
    Jar(String),
    /// Python egg uploaded to DBFS or S3.
    Egg(String),
    /// Python wheel. Only ever seen in status responses.
    Whl(String),
    /// Maven artifact.
    Maven(MavenLibrary),
    /// Package from a Python package index.
    Pypi(PythonPackage),
    /// Package from a CRAN mirror.
    Cran(RPackage),
    /// Any other descriptor a status response carries, e.g. `{"requirements": "..."}`.
    /// Kept verbatim so it can be sent back unchanged.
    #[serde(untagged)]
    Other(Value),
}

/// Maven coordinates with optional repository and exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavenLibrary {
    /// `GroupId:ArtifactId:Version`.
    pub coordinates: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Dependencies to exclude, e.g. `slf4j:slf4j`. Omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
}

/// A PyPI requirement such as `simplejson==3.8.0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonPackage {
    pub package: String,
    /// Index URL; pip's default index when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

/// A CRAN package name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RPackage {
    pub package: String,
    /// CRAN mirror; the default CRAN repo when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl Library {
    /// The tag this descriptor serializes under.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Jar(_) => "jar",
            Self::Egg(_) => "egg",
            Self::Whl(_) => "whl",
            Self::Maven(_) => "maven",
            Self::Pypi(_) => "pypi",
            Self::Cran(_) => "cran",
            Self::Other(value) => value
                .as_object()
                .and_then(|m| m.keys().next())
                .map_or("unknown", String::as_str),
        }
    }

    /// Short human-readable identifier (path, coordinates or package).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Jar(path) | Self::Egg(path) | Self::Whl(path) => path,
            Self::Maven(m) => &m.coordinates,
            Self::Pypi(p) => &p.package,
            Self::Cran(r) => &r.package,
            Self::Other(value) => value
                .as_object()
                .and_then(|m| m.values().next())
                .and_then(Value::as_str)
                .unwrap_or_default(),
        }
    }
}
