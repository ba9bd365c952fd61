/// Mutually exclusive option groups: "supply exactly one of these flags".
///
/// Commands declare their groups as `const` values and check them against the
/// provided options before doing any work.
use super::errors::UsageError;
use super::provided::{ProvidedOptions, canonical};

/// An ordered set of option names of which exactly one must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionGroup {
    members: &'static [&'static str],
}

impl OptionGroup {
    /// Declare a group. Member names use the hyphenated long-flag spelling without `--`.
    #[must_use]
    pub const fn new(members: &'static [&'static str]) -> Self {
        Self { members }
    }

    /// Members the user supplied, in command-line order.
    fn present<'a>(&self, provided: &'a ProvidedOptions) -> Vec<&'a str> {
        provided
            .iter()
            .filter(|name| self.members.iter().any(|m| canonical(m) == *name))
            .collect()
    }
}

/// Check the group invariant on behalf of `this_option`.
///
/// Succeeds silently when exactly one member of `group` is in `provided`.
///
/// # Errors
///
/// - `UsageError::MutuallyExclusive`: more than one member present; lists every
///   member other than `this_option`.
/// - `UsageError::MissingOneOf`: no member present; lists every member as `--name`.
pub fn validate(
    group: &OptionGroup,
    provided: &ProvidedOptions,
    this_option: &str,
) -> Result<(), UsageError> {
    let this_option = canonical(this_option);
    match group.present(provided).len() {
        1 => Ok(()),
        0 => Err(UsageError::MissingOneOf {
            options: group.members.iter().map(|m| format!("--{m}")).collect(),
        }),
        _ => Err(UsageError::MutuallyExclusive {
            others: group
                .members
                .iter()
                .filter(|m| canonical(m) != this_option)
                .map(|m| (*m).to_owned())
                .collect(),
            option: this_option,
        }),
    }
}

/// Check a group the way per-option resolution would: the first member the user
/// typed is the one that reports, falling back to the first declared member.
///
/// # Errors
///
/// See [`validate`].
pub fn validate_group(group: &OptionGroup, provided: &ProvidedOptions) -> Result<(), UsageError> {
    let trigger = group
        .present(provided)
        .first()
        .map(|s| (*s).to_owned())
        .or_else(|| group.members.first().map(|m| (*m).to_owned()))
        .unwrap_or_default();
    validate(group, provided, &trigger)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const SOURCES: OptionGroup = OptionGroup::new(&[
        "jar",
        "egg",
        "maven-coordinates",
        "pypi-package",
        "cran-package",
    ]);

    fn provided(names: &[&str]) -> ProvidedOptions {
        ProvidedOptions::from_names(names.iter().copied())
    }

    #[rstest]
    #[case::jar(&["cluster-id", "jar"])]
    #[case::egg(&["egg"])]
    #[case::maven_with_extras(&["maven-coordinates", "maven-repo", "maven-exclusion"])]
    #[case::underscore_spelling(&["pypi_package"])]
    #[case::cran_last(&["cluster-id", "cran-repo", "cran-package"])]
    fn test_exactly_one_succeeds(#[case] names: &[&str]) {
        assert_eq!(validate_group(&SOURCES, &provided(names)), Ok(()));
    }

    #[rstest]
    #[case::none(&[])]
    #[case::only_companions(&["cluster-id", "maven-repo", "pypi-repo"])]
    fn test_none_lists_every_member(#[case] names: &[&str]) {
        let err = validate_group(&SOURCES, &provided(names)).unwrap_err();
        assert_eq!(
            err,
            UsageError::MissingOneOf {
                options: vec![
                    "--jar".to_owned(),
                    "--egg".to_owned(),
                    "--maven-coordinates".to_owned(),
                    "--pypi-package".to_owned(),
                    "--cran-package".to_owned(),
                ],
            }
        );
        assert_eq!(
            err.to_string(),
            "Missing one of [--jar, --egg, --maven-coordinates, --pypi-package, --cran-package]."
        );
    }

    #[test]
    fn test_jar_and_egg_names_the_rest_of_the_group() {
        let err = validate_group(&SOURCES, &provided(&["jar", "egg"])).unwrap_err();
        assert_eq!(
            err,
            UsageError::MutuallyExclusive {
                option: "jar".to_owned(),
                others: vec![
                    "egg".to_owned(),
                    "maven-coordinates".to_owned(),
                    "pypi-package".to_owned(),
                    "cran-package".to_owned(),
                ],
            }
        );
        assert_eq!(
            err.to_string(),
            "Illegal usage: `jar` is mutually exclusive with arguments \
             [egg, maven-coordinates, pypi-package, cran-package]."
        );
    }

    #[test]
    fn test_trigger_follows_command_line_order() {
        match validate_group(&SOURCES, &provided(&["cran_package", "jar"])) {
            Err(UsageError::MutuallyExclusive { option, others }) => {
                assert_eq!(option, "cran-package");
                assert_eq!(others, ["jar", "egg", "maven-coordinates", "pypi-package"]);
            }
            other => panic!("expected MutuallyExclusive, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_excludes_only_this_option() {
        let p = provided(&["egg", "pypi-package"]);
        match validate(&SOURCES, &p, "maven_coordinates") {
            Err(UsageError::MutuallyExclusive { option, others }) => {
                assert_eq!(option, "maven-coordinates");
                assert_eq!(others, ["jar", "egg", "pypi-package", "cran-package"]);
            }
            other => panic!("expected MutuallyExclusive, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_does_not_depend_on_order() {
        let forward = validate(&SOURCES, &provided(&["jar", "egg"]), "jar");
        let backward = validate(&SOURCES, &provided(&["egg", "jar"]), "jar");
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_validate_does_not_touch_provided() {
        let p = provided(&["jar", "egg"]);
        let before = p.clone();
        let _ = validate_group(&SOURCES, &p);
        assert_eq!(p, before);
    }
}
