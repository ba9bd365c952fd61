/// Assemble one [`Library`] descriptor from the install-source options of a command.
use super::descriptor::{Library, MavenLibrary, PythonPackage, RPackage};
use super::errors::InvariantError;

/// Resolved install-source values for one invocation; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibrarySelection {
    pub jar: Option<String>,
    pub egg: Option<String>,
    pub maven_coordinates: Option<String>,
    pub maven_repo: Option<String>,
    pub maven_exclusion: Vec<String>,
    pub pypi_package: Option<String>,
    pub pypi_repo: Option<String>,
    pub cran_package: Option<String>,
    pub cran_repo: Option<String>,
}

/// Build the descriptor for the single selected source.
///
/// Sources are considered in the fixed order jar, egg, maven, pypi, cran.
/// Companion values (`maven_repo`, `pypi_repo`, …) only attach to their own
/// source and are dropped when absent; an empty exclusion list is omitted.
///
/// # Errors
///
/// Returns `InvariantError` when zero or several sources are set. Option
/// validation runs first, so this indicates a bug rather than bad input.
pub fn build(selection: &LibrarySelection) -> Result<Library, InvariantError> {
    let mut candidates: Vec<(&'static str, Library)> = Vec::with_capacity(1);

    if let Some(path) = &selection.jar {
        candidates.push(("jar", Library::Jar(path.clone())));
    }
    if let Some(path) = &selection.egg {
        candidates.push(("egg", Library::Egg(path.clone())));
    }
    if let Some(coordinates) = &selection.maven_coordinates {
        candidates.push((
            "maven",
            Library::Maven(MavenLibrary {
                coordinates: coordinates.clone(),
                repo: selection.maven_repo.clone(),
                exclusions: selection.maven_exclusion.clone(),
            }),
        ));
    }
    if let Some(package) = &selection.pypi_package {
        candidates.push((
            "pypi",
            Library::Pypi(PythonPackage {
                package: package.clone(),
                repo: selection.pypi_repo.clone(),
            }),
        ));
    }
    if let Some(package) = &selection.cran_package {
        candidates.push((
            "cran",
            Library::Cran(RPackage {
                package: package.clone(),
                repo: selection.cran_repo.clone(),
            }),
        ));
    }

    match candidates.len() {
        0 => Err(InvariantError::NoSource),
        1 => Ok(candidates.swap_remove(0).1),
        _ => Err(InvariantError::MultipleSources(
            candidates.iter().map(|(kind, _)| *kind).collect(),
        )),
    }
}
