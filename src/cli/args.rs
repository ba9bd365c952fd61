/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::config::DEFAULT_PROFILE;
use crate::library::LibrarySelection;

const CLUSTER_ID_HELP: &str = "Can be found in the URL at \
    https://*.cloud.databricks.com/#/setting/clusters/$CLUSTER_ID/configuration.";

const JOB_ID_HELP: &str = "Can be found in the URL at https://*.cloud.databricks.com/#job/$JOB_ID.";

/// databricks — manage jobs and cluster libraries from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "databricks",
    about = "Manage Databricks jobs and cluster libraries from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Profile section of ~/.databrickscfg to read connection settings from.
    #[arg(long, global = true, value_name = "NAME", default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Output format for listings.
    #[arg(
        long,
        global = true,
        value_name = "FORMAT",
        default_value = "table",
        ignore_case = true
    )]
    pub output: OutputFormat,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Aligned table with headers (human-readable).
    #[default]
    Table,
    /// The API response, pretty-printed.
    Json,
}

/// Top-level command groups.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Utility to interact with libraries.
    ///
    /// This is a wrapper around the libraries API
    /// (https://docs.databricks.com/api/latest/libraries.html).
    #[command(subcommand)]
    Libraries(LibrariesCommand),
    /// Utility to interact with jobs.
    ///
    /// This is a wrapper around the jobs API
    /// (https://docs.databricks.com/api/latest/jobs.html).
    #[command(subcommand)]
    Jobs(JobsCommand),
}

/// `databricks libraries …`
#[derive(Debug, Subcommand)]
pub enum LibrariesCommand {
    /// Get the status of all libraries on all clusters.
    ///
    /// If a library has been set to be installed on all clusters,
    /// is_library_for_all_clusters will be true, even if the library was
    /// also installed on a specific cluster.
    AllClusterStatuses,
    /// Get the status of all libraries for a specified cluster.
    ClusterStatus(ClusterStatusArgs),
    /// Alias of `all-cluster-statuses` or `cluster-status`.
    ///
    /// With --cluster-id, lists the libraries on that cluster; otherwise
    /// lists the libraries on all clusters.
    List(ListArgs),
    /// Install a library on a cluster.
    ///
    /// Libraries must be first uploaded to dbfs or s3. Only one library can
    /// be installed per invocation. Provide exactly one of
    /// [--jar, --egg, --maven-coordinates, --pypi-package, --cran-package].
    Install(InstallArgs),
    /// Mark libraries on a cluster to be uninstalled.
    ///
    /// Libraries marked for removal stay attached until the cluster is
    /// restarted.
    Uninstall(UninstallArgs),
}

/// Arguments for `libraries cluster-status`.
#[derive(Debug, Args)]
pub struct ClusterStatusArgs {
    #[arg(long, value_name = "CLUSTER_ID", help = CLUSTER_ID_HELP)]
    pub cluster_id: String,
}

/// Arguments for `libraries list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_name = "CLUSTER_ID", help = CLUSTER_ID_HELP)]
    pub cluster_id: Option<String>,
}

/// The mutually exclusive install sources and their companion options.
#[derive(Debug, Args)]
pub struct LibrarySourceArgs {
    /// JAR uploaded to dbfs or s3.
    #[arg(long, value_name = "PATH")]
    pub jar: Option<String>,

    /// Egg uploaded to dbfs or s3.
    #[arg(long, value_name = "PATH")]
    pub egg: Option<String>,

    /// Maven coordinates in the form GroupId:ArtifactId:Version (e.g. org.jsoup:jsoup:1.7.2).
    #[arg(long, value_name = "COORDINATES")]
    pub maven_coordinates: Option<String>,

    /// Maven repo to install the package from. If omitted, both Maven Central
    /// and Spark Packages are searched.
    #[arg(long, value_name = "URL")]
    pub maven_repo: Option<String>,

    /// Dependency to exclude, e.g. "slf4j:slf4j" or "*:hadoop-client". Repeatable.
    #[arg(long, value_name = "GROUP:ARTIFACT")]
    pub maven_exclusion: Vec<String>,

    /// PyPI package to install, optionally pinned: "simplejson" or "simplejson==3.8.0".
    #[arg(long, value_name = "PACKAGE")]
    pub pypi_package: Option<String>,

    /// Index to find the package in. If omitted, the default pip index is used.
    #[arg(long, value_name = "URL")]
    pub pypi_repo: Option<String>,

    /// CRAN package to install.
    #[arg(long, value_name = "PACKAGE")]
    pub cran_package: Option<String>,

    /// CRAN mirror to find the package in. If omitted, the default CRAN repo is used.
    #[arg(long, value_name = "URL")]
    pub cran_repo: Option<String>,
}

impl From<&LibrarySourceArgs> for LibrarySelection {
    fn from(args: &LibrarySourceArgs) -> Self {
        Self {
            jar: args.jar.clone(),
            egg: args.egg.clone(),
            maven_coordinates: args.maven_coordinates.clone(),
            maven_repo: args.maven_repo.clone(),
            maven_exclusion: args.maven_exclusion.clone(),
            pypi_package: args.pypi_package.clone(),
            pypi_repo: args.pypi_repo.clone(),
            cran_package: args.cran_package.clone(),
            cran_repo: args.cran_repo.clone(),
        }
    }
}

/// Arguments for `libraries install`.
#[derive(Debug, Args)]
pub struct InstallArgs {
    #[arg(long, value_name = "CLUSTER_ID", help = CLUSTER_ID_HELP)]
    pub cluster_id: String,

    #[command(flatten)]
    pub source: LibrarySourceArgs,
}

/// Arguments for `libraries uninstall`.
#[derive(Debug, Args)]
pub struct UninstallArgs {
    #[arg(long, value_name = "CLUSTER_ID", help = CLUSTER_ID_HELP)]
    pub cluster_id: String,

    /// Uninstall every library currently on the cluster.
    #[arg(
        long,
        conflicts_with_all = [
            "jar",
            "egg",
            "maven_coordinates",
            "maven_repo",
            "maven_exclusion",
            "pypi_package",
            "pypi_repo",
            "cran_package",
            "cran_repo",
        ]
    )]
    pub all: bool,

    #[command(flatten)]
    pub source: LibrarySourceArgs,
}

/// `databricks jobs …`
#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// Create a job from a JSON settings document.
    Create(CreateArgs),
    /// List all jobs, sorted by name.
    List,
    /// Overwrite a job's settings.
    Reset(ResetArgs),
    /// Describe a job.
    Get(JobIdArgs),
    /// Delete a job.
    Delete(JobIdArgs),
    /// Run a job now, optionally overriding its parameters.
    RunNow(RunNowArgs),
}

/// A job settings document given inline or as a file; exactly one is required.
#[derive(Debug, Args)]
pub struct JsonInput {
    /// Job settings as a JSON string.
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,

    /// Path to a file containing the job settings JSON.
    #[arg(long, value_name = "PATH")]
    pub json_file: Option<PathBuf>,
}

/// Arguments for `jobs create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub input: JsonInput,
}

/// Arguments for `jobs reset`.
#[derive(Debug, Args)]
pub struct ResetArgs {
    #[arg(long, value_name = "JOB_ID", help = JOB_ID_HELP)]
    pub job_id: i64,

    #[command(flatten)]
    pub input: JsonInput,
}

/// Arguments for commands addressing a single job.
#[derive(Debug, Args)]
pub struct JobIdArgs {
    #[arg(long, value_name = "JOB_ID", help = JOB_ID_HELP)]
    pub job_id: i64,
}

/// Arguments for `jobs run-now`. Each parameter option takes a JSON document.
#[derive(Debug, Args)]
pub struct RunNowArgs {
    #[arg(long, value_name = "JOB_ID", help = JOB_ID_HELP)]
    pub job_id: i64,

    /// JSON array of JAR task parameters, e.g. '[1, 2, 3]'.
    #[arg(long, value_name = "JSON")]
    pub jar_params: Option<String>,

    /// JSON object of notebook widget values, e.g. '{"a": 1}'.
    #[arg(long, value_name = "JSON")]
    pub notebook_params: Option<String>,

    /// JSON array of Python task parameters.
    #[arg(long, value_name = "JSON")]
    pub python_params: Option<String>,

    /// JSON array of spark-submit arguments.
    #[arg(long, value_name = "JSON")]
    pub spark_submit_params: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_ignores_case() {
        let cli = Cli::try_parse_from(["databricks", "jobs", "list", "--output", "JSON"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[rstest]
    #[case::source("--jar")]
    #[case::maven_repo("--maven-repo")]
    #[case::maven_exclusion("--maven-exclusion")]
    #[case::pypi_repo("--pypi-repo")]
    #[case::cran_repo("--cran-repo")]
    fn test_all_conflicts_with_library_options(#[case] flag: &str) {
        let err = Cli::try_parse_from([
            "databricks",
            "libraries",
            "uninstall",
            "--cluster-id",
            "c",
            "--all",
            flag,
            "x",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_repeated_maven_exclusions_accumulate() {
        let cli = Cli::try_parse_from([
            "databricks",
            "libraries",
            "install",
            "--cluster-id",
            "c",
            "--maven-coordinates",
            "org.jsoup:jsoup:1.7.2",
            "--maven-exclusion",
            "slf4j:slf4j",
            "--maven-exclusion",
            "*:hadoop-client",
        ])
        .unwrap();
        let Command::Libraries(LibrariesCommand::Install(args)) = cli.command else {
            panic!("expected libraries install");
        };
        assert_eq!(args.source.maven_exclusion, ["slf4j:slf4j", "*:hadoop-client"]);
        let selection = LibrarySelection::from(&args.source);
        assert_eq!(selection.maven_coordinates.as_deref(), Some("org.jsoup:jsoup:1.7.2"));
    }
}
