/// The set of options a user actually typed, derived from clap's `ArgMatches`.
use clap::ArgMatches;
use clap::parser::ValueSource;

/// Bring an option name to its canonical hyphenated form (`maven_repo` → `maven-repo`).
#[must_use]
pub fn canonical(name: &str) -> String {
    name.trim_start_matches('-').replace('_', "-")
}

/// Options supplied on the command line, canonicalized, in the order they were typed.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvidedOptions {
    names: Vec<String>,
}

impl ProvidedOptions {
    /// Build from option names in command-line order. Duplicates keep their first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = canonical(name.as_ref());
            if !out.contains(&name) {
                out.push(name);
            }
        }
        Self { names: out }
    }

    /// Collect the options explicitly set on the command line for the innermost subcommand.
    ///
    /// Defaults and environment-sourced values do not count as provided.
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let leaf = leaf_matches(matches);
        let mut typed: Vec<(usize, &str)> = leaf
            .ids()
            .map(clap::Id::as_str)
            .filter(|id| leaf.value_source(id) == Some(ValueSource::CommandLine))
            .map(|id| (leaf.index_of(id).unwrap_or(usize::MAX), id))
            .collect();
        typed.sort_by_key(|(idx, _)| *idx);
        Self::from_names(typed.into_iter().map(|(_, id)| id))
    }

    /// Provided names in command-line order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Descend through nested subcommands to the matches of the command that actually runs.
fn leaf_matches(matches: &ArgMatches) -> &ArgMatches {
    let mut current = matches;
    while let Some((_, sub)) = current.subcommand() {
        current = sub;
    }
    current
}
