// Backlink runner CLI.
//
// Reads a targets file of `URL [keywords...]` lines, submits each target to
// the full tool catalog, and streams the collected records as CSV on
// stdout. Progress and per-tool failures go to stderr via the logger.

use anyhow::{Context, Result};
use backlink_runner::{BacklinkRunner, RunConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: backlink-runner [OPTIONS] <TARGETS_FILE>

Each line of TARGETS_FILE is: <url> [keywords...]
Blank lines and lines starting with '#' are skipped.

Options:
  --headed           Run the browser with a visible window
  --timeout <SECS>   Per-tool timeout in seconds (default 45)
  -h, --help         Print this help";

#[derive(Debug)]
struct CliArgs {
    headed: bool,
    timeout_secs: Option<u64>,
    targets_file: PathBuf,
}

/// One parsed targets-file line.
#[derive(Debug, PartialEq, Eq)]
struct Target {
    url: String,
    keywords: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let args = match parse_args(std::env::args().skip(1))? {
        Some(args) => args,
        None => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let contents = std::fs::read_to_string(&args.targets_file).with_context(|| {
        format!("Failed to read targets file {}", args.targets_file.display())
    })?;
    let targets = parse_targets(&contents)?;
    if targets.is_empty() {
        anyhow::bail!(
            "No targets found in {}",
            args.targets_file.display()
        );
    }

    let mut config_builder = RunConfig::builder().headless(!args.headed);
    if let Some(secs) = args.timeout_secs {
        config_builder = config_builder.per_tool_timeout_secs(secs);
    }
    let config = config_builder.build()?;

    let started = chrono::Utc::now();
    let runner = BacklinkRunner::launch(config).await?;

    let mut raw_total = 0usize;
    let mut per_target = Vec::with_capacity(targets.len());
    for target in &targets {
        let outcome = runner.run_for_target(&target.url, &target.keywords).await;
        if outcome.records.is_empty() {
            info!("No backlinks reported for {}", target.url);
        }
        raw_total += outcome.summary.raw_records;
        per_target.push(outcome.records);
    }

    if let backlink_runner::CleanupResult::PartialFailure(errors) = runner.shutdown().await {
        for error in errors {
            warn!("Teardown: {error}");
        }
    }

    // Export dedups once across the whole batch: the same backlink URL is
    // routinely reported for several targets.
    let records = aggregate_for_export(per_target);

    println!("target_url,keywords,tool_url,backlink_url");
    for record in &records {
        println!(
            "{},{},{},{}",
            csv_field(&record.target_url),
            csv_field(&record.keywords),
            csv_field(&record.tool_url),
            csv_field(&record.backlink_url)
        );
    }

    info!(
        "Run started {} finished with {} unique records from {} raw across {} targets",
        started.to_rfc3339(),
        records.len(),
        raw_total,
        targets.len()
    );

    Ok(())
}

/// Flatten per-target record sets and dedup by backlink URL across the
/// whole batch, keeping first-seen order.
fn aggregate_for_export(
    per_target: Vec<Vec<backlink_runner::BacklinkRecord>>,
) -> Vec<backlink_runner::BacklinkRecord> {
    backlink_runner::dedupe_by_backlink(per_target.into_iter().flatten().collect())
}

/// Parse CLI arguments; `Ok(None)` means help was requested.
fn parse_args<I>(args: I) -> Result<Option<CliArgs>>
where
    I: IntoIterator<Item = String>,
{
    let mut headed = false;
    let mut timeout_secs = None;
    let mut targets_file = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--headed" => headed = true,
            "--timeout" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--timeout requires a value"))?;
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("Invalid --timeout value: {value}"))?;
                timeout_secs = Some(secs);
            }
            other if other.starts_with('-') => {
                anyhow::bail!("Unknown option: {other}\n\n{USAGE}");
            }
            other => {
                if targets_file.replace(PathBuf::from(other)).is_some() {
                    anyhow::bail!("Only one targets file may be given\n\n{USAGE}");
                }
            }
        }
    }

    let targets_file =
        targets_file.ok_or_else(|| anyhow::anyhow!("Missing targets file\n\n{USAGE}"))?;

    Ok(Some(CliArgs {
        headed,
        timeout_secs,
        targets_file,
    }))
}

/// Parse targets-file contents: one `URL [keywords...]` per line.
fn parse_targets(contents: &str) -> Result<Vec<Target>> {
    let mut targets = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let url = parts
            .next()
            .unwrap_or_default()
            .to_string();
        if !backlink_runner::utils::url_utils::is_scrapable_url(&url) {
            anyhow::bail!("Line {}: not a valid http(s) URL: {url}", line_no + 1);
        }
        let keywords = parts.collect::<Vec<_>>().join(" ");

        targets.push(Target { url, keywords });
    }
    Ok(targets)
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn parses_flags_and_targets_file() {
        let parsed = parse_args(args(&["--headed", "--timeout", "60", "targets.txt"]))
            .unwrap()
            .unwrap();
        assert!(parsed.headed);
        assert_eq!(parsed.timeout_secs, Some(60));
        assert_eq!(parsed.targets_file, PathBuf::from("targets.txt"));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse_args(args(&["--help"])).unwrap().is_none());
        assert!(parse_args(args(&["-h", "targets.txt"])).unwrap().is_none());
    }

    #[test]
    fn missing_file_and_bad_flags_error() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["--frobnicate", "t.txt"])).is_err());
        assert!(parse_args(args(&["--timeout"])).is_err());
        assert!(parse_args(args(&["a.txt", "b.txt"])).is_err());
    }

    #[test]
    fn target_lines_split_url_and_keywords() {
        let targets = parse_targets(
            "https://example.com rust seo tools\n\n# comment\nhttps://other.com\n",
        )
        .unwrap();
        assert_eq!(
            targets,
            vec![
                Target {
                    url: "https://example.com".into(),
                    keywords: "rust seo tools".into(),
                },
                Target {
                    url: "https://other.com".into(),
                    keywords: String::new(),
                },
            ]
        );
    }

    #[test]
    fn invalid_target_url_is_rejected_with_line_number() {
        let err = parse_targets("https://ok.com\nnot-a-url kw\n").unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn export_dedups_across_targets() {
        use backlink_runner::SubmissionTask;

        let first = SubmissionTask::new("https://one.example", "", "https://tool.example/");
        let second = SubmissionTask::new("https://two.example", "", "https://tool.example/");

        let records = aggregate_for_export(vec![
            vec![
                first.record("https://other.com/shared"),
                first.record("https://other.com/only-one"),
            ],
            vec![
                second.record("https://other.com/shared"),
                second.record("https://other.com/only-two"),
            ],
        ]);

        let backlinks: Vec<&str> = records.iter().map(|r| r.backlink_url.as_str()).collect();
        assert_eq!(
            backlinks,
            vec![
                "https://other.com/shared",
                "https://other.com/only-one",
                "https://other.com/only-two",
            ]
        );
        // first target to report a shared link keeps it
        assert_eq!(records[0].target_url, "https://one.example");
    }

    #[test]
    fn csv_fields_escape_delimiters_and_quotes() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
