#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use std::path::PathBuf;
use submitcheck_core::output::annotations;
use submitcheck_core::{
    check_repository, detect_language, validate_url, ClientConfig, Error, GitHubApiClient,
    OutputSink, ValidationMode,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "submitcheck",
    version,
    about = "GitHub Actions helpers for reviewing submitted repositories"
)]
struct Cli {
    /// File that receives step outputs (default: stdout)
    #[arg(long, global = true, env = "GITHUB_OUTPUT")]
    github_output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Detect the primary supported language of a repository
    DetectLanguage(DetectLanguageArgs),
    /// Check the shape of a repository or pull request URL
    ValidateUrl(ValidateUrlArgs),
    /// Check that a repository exists and is not a fork
    ValidateRepo(ValidateRepoArgs),
}

#[derive(clap::Args)]
struct ApiArgs {
    /// GitHub token for API access
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,
}

// URL inputs are taken verbatim, so a submitted `--help` or `-x` is checked
// like any other string. Extra values are ignored.
#[derive(clap::Args)]
#[command(disable_help_flag = true)]
struct DetectLanguageArgs {
    #[command(flatten)]
    api: ApiArgs,

    /// Repository URL
    #[arg(
        value_name = "URL",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    inputs: Vec<String>,
}

impl DetectLanguageArgs {
    fn url(&self) -> Option<&str> {
        self.inputs.first().map(String::as_str)
    }
}

#[derive(clap::Args)]
#[command(disable_help_flag = true)]
struct ValidateUrlArgs {
    /// URL to validate, then `new-submission` to validate a repository URL
    /// (anything else validates a PR URL)
    #[arg(
        value_name = "URL [MODE]",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    inputs: Vec<String>,
}

impl ValidateUrlArgs {
    fn url(&self) -> &str {
        self.inputs.first().map(String::as_str).unwrap_or_default()
    }

    fn mode(&self) -> ValidationMode {
        ValidationMode::from_token(self.inputs.get(1).map(String::as_str))
    }
}

#[derive(clap::Args)]
struct ValidateRepoArgs {
    /// Repository URL
    #[arg(long, env = "URL")]
    url: Option<String>,

    #[command(flatten)]
    api: ApiArgs,
}

fn main() {
    init_tracing();
    std::process::exit(run(Cli::parse()));
}

fn run(cli: Cli) -> i32 {
    let sink = output_sink(&cli.github_output);

    let result = match cli.command {
        Commands::DetectLanguage(args) => run_detect_language(args, &sink),
        Commands::ValidateUrl(args) => run_validate_url(args),
        Commands::ValidateRepo(args) => run_validate_repo(args, &sink),
    };

    match result {
        Ok(()) => 0,
        Err(e) => report_failure(&e, &sink),
    }
}

/// Logs go to stderr so stdout stays free for `key=value` fallback output
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SUBMITCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Filter empty string from Option (env vars may produce "" for empty values)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn require_url<'a>(url: Option<&'a str>, missing: &str) -> Result<&'a str, Error> {
    url.filter(|s| !s.is_empty())
        .ok_or_else(|| Error::MissingInput(missing.to_string()))
}

fn output_sink(github_output: &Option<String>) -> OutputSink {
    OutputSink::new(clean_opt(github_output).map(PathBuf::from))
}

fn client(api: &ApiArgs) -> GitHubApiClient {
    GitHubApiClient::new(ClientConfig::new(
        clean_opt(&api.api_url),
        clean_opt(&api.token),
    ))
}

/// Drive one async check on a single-threaded runtime
fn block_on<F, T>(future: F) -> Result<T, Error>
where
    F: std::future::Future<Output = Result<T, Error>>,
{
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Runtime(format!("failed to create runtime: {e}")))?
        .block_on(future)
}

fn run_detect_language(args: DetectLanguageArgs, sink: &OutputSink) -> Result<(), Error> {
    let url = require_url(args.url(), "Repository URL is required")?;
    let client = client(&args.api);

    let language = block_on(detect_language(url, &client))?;
    sink.set_output("language", &language);
    Ok(())
}

fn run_validate_url(args: ValidateUrlArgs) -> Result<(), Error> {
    let mode = args.mode();

    validate_url(args.url(), mode).into_result()?;
    tracing::debug!(mode = mode.as_str(), "URL accepted");
    Ok(())
}

fn run_validate_repo(args: ValidateRepoArgs, sink: &OutputSink) -> Result<(), Error> {
    let url = require_url(args.url.as_deref(), "URL environment variable is required")?;
    let client = client(&args.api);

    let normalized = block_on(check_repository(url, &client))?;
    sink.set_output("normalized_url", &normalized);
    Ok(())
}

/// Report through both channels the runner reads, then yield the exit code
fn report_failure(err: &Error, sink: &OutputSink) -> i32 {
    let message = err.to_string();
    eprintln!("{}", annotations::error(&message));
    sink.set_output("error_message", &message);
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use submitcheck_core::ErrorKind;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn validate_url_args(cli: Cli) -> ValidateUrlArgs {
        match cli.command {
            Commands::ValidateUrl(args) => args,
            _ => panic!("expected validate-url"),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_clean_opt() {
        assert_eq!(clean_opt(&None), None);
        assert_eq!(clean_opt(&Some(String::new())), None);
        assert_eq!(clean_opt(&Some("x".to_string())), Some("x"));
    }

    #[test]
    fn test_require_url() {
        let err = require_url(None, "Repository URL is required").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingInput);
        assert_eq!(err.to_string(), "Repository URL is required");

        let err = require_url(Some(""), "URL environment variable is required").unwrap_err();
        assert_eq!(err.to_string(), "URL environment variable is required");

        assert_eq!(require_url(Some("u"), "m").unwrap(), "u");
    }

    #[test]
    fn test_empty_github_output_is_stdout() {
        let cli = parse(&["submitcheck", "--github-output=", "validate-url"]);
        assert_eq!(cli.github_output.as_deref(), Some(""));
        assert_eq!(output_sink(&cli.github_output), OutputSink::Stdout);

        let sink = output_sink(&Some("/tmp/out".to_string()));
        assert_eq!(sink, OutputSink::File(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_validate_url_positionals() {
        let args = validate_url_args(parse(&[
            "submitcheck",
            "validate-url",
            "https://github.com/owner/repo",
            "new-submission",
        ]));
        assert_eq!(args.url(), "https://github.com/owner/repo");
        assert_eq!(args.mode(), ValidationMode::NewSubmission);
        assert!(run_validate_url(args).is_ok());

        let args = validate_url_args(parse(&[
            "submitcheck",
            "validate-url",
            "https://github.com/owner/repo/pull/7",
        ]));
        assert_eq!(args.mode(), ValidationMode::PullRequest);
        assert!(run_validate_url(args).is_ok());
    }

    #[test]
    fn test_validate_url_missing() {
        let args = validate_url_args(parse(&["submitcheck", "validate-url"]));
        let err = run_validate_url(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingInput);
        assert_eq!(err.to_string(), "URL is required");
    }

    #[test]
    fn test_hyphen_leading_url_is_validated() {
        for input in ["--help", "-x", "-h", "--url=x"] {
            let args = validate_url_args(parse(&["submitcheck", "validate-url", input]));
            assert_eq!(args.url(), input);

            let err = run_validate_url(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UrlMismatch, "input {input:?}");
        }
    }

    #[test]
    fn test_extra_positionals_are_ignored() {
        let args = validate_url_args(parse(&[
            "submitcheck",
            "validate-url",
            "https://github.com/owner/repo/pull/1",
            "new-submission",
            "extra",
            "-x",
        ]));
        assert_eq!(args.mode(), ValidationMode::NewSubmission);

        let err = run_validate_url(args).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid GitHub URL: \"https://github.com/owner/repo/pull/1\""));
    }

    #[test]
    fn test_detect_language_hyphen_url() {
        let cli = parse(&["submitcheck", "detect-language", "--help", "more"]);
        match cli.command {
            Commands::DetectLanguage(args) => assert_eq!(args.url(), Some("--help")),
            _ => panic!("expected detect-language"),
        }
    }

    #[test]
    fn test_failure_writes_error_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        let path_str = path.to_str().unwrap();

        let cli = parse(&["submitcheck", "--github-output", path_str, "validate-url", "-x"]);
        assert_eq!(run(cli), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "error_message=Invalid GitHub PR URL format: \"-x\". \
             Expected: https://github.com/owner/repo/pull/123\n"
        );
    }

    #[test]
    fn test_success_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        let path_str = path.to_str().unwrap();

        let cli = parse(&[
            "submitcheck",
            "--github-output",
            path_str,
            "validate-url",
            "https://github.com/owner/repo/pull/12/",
        ]);
        assert_eq!(run(cli), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_report_failure_escapes_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        let sink = OutputSink::new(Some(path.clone()));

        let err = Error::MissingInput("50% done\nretry".to_string());
        assert_eq!(report_failure(&err, &sink), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "error_message=50%25 done%0Aretry\n");
    }

    #[test]
    fn test_validate_repo_writes_normalized_url() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/repos/owner/repo")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"fork":false}"#)
            .create();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        let api_url = server.url();

        let cli = parse(&[
            "submitcheck",
            "--github-output",
            path.to_str().unwrap(),
            "validate-repo",
            "--url",
            "https://github.com/owner/repo/",
            "--api-url",
            &api_url,
        ]);
        assert_eq!(run(cli), 0);
        mock.assert();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "normalized_url=https://github.com/owner/repo\n");
    }

    #[test]
    fn test_validate_repo_fork_fails() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/repos/owner/repo")
            .with_status(200)
            .with_body(r#"{"fork":true}"#)
            .create();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        let api_url = server.url();

        let cli = parse(&[
            "submitcheck",
            "--github-output",
            path.to_str().unwrap(),
            "validate-repo",
            "--url",
            "https://github.com/owner/repo",
            "--api-url",
            &api_url,
        ]);
        assert_eq!(run(cli), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("error_message=Repository owner/repo is a fork."));
    }
}
