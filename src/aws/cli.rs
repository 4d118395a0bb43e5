//! AWS CLI command execution.
//!
//! Provides utilities for running `aws` commands and collecting their output.

use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::process::Command;
use std::sync::OnceLock;

/// Largest stdout accepted from a single command.
///
/// Checked once the command has finished and its output is buffered, not
/// while it streams.
const MAX_OUTPUT_BYTES: usize = 500_000;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
/// The AWS CLI pager is disabled so output is never held back waiting for a
/// terminal.
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command cannot start, exits non-zero, or produces too much output
pub fn run(cmd: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd)
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = cmds
        .split_first()
        .ok_or_else(|| format!("Empty command: '{cmd}'"))?;

    let output = Command::new(program)
        .args(args)
        .env("AWS_PAGER", "")
        .output()
        .map_err(|e| {
            log::error!("Command execution failed: {}", e);
            format!("Failed to execute {program}: {e}")
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("ERROR running {program}: {}", stderr.trim()).into());
    }

    log::debug!(
        "Success cmd: {cmd} stdout.len()={} code={:?}",
        output.stdout.len(),
        output.status.code()
    );
    if output.stdout.len() > MAX_OUTPUT_BYTES {
        return Err(format!(
            "Response too large: {} bytes for command: {:?}",
            output.stdout.len(),
            cmds
        )
        .into());
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    Ok(stdout)
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_describe_zones() {
        let input = "aws ec2 describe-availability-zones --region us-east-1 --output json";
        let expected = vec![
            "aws",
            "ec2",
            "describe-availability-zones",
            "--region",
            "us-east-1",
            "--output",
            "json",
        ];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_quoted_filter() {
        let input = "aws ec2 describe-availability-zones --filters 'Name=state,Values=available' --query \"AvailabilityZones[].ZoneName\"";
        let parts = split_and_strip(input);
        assert_eq!(parts[4], "Name=state,Values=available");
        assert_eq!(parts[6], "AvailabilityZones[].ZoneName");
    }

    #[test]
    fn test_split_empty_quotes() {
        let input = "Empty '' Single Quotes";
        let expected = vec!["Empty", "", "Single", "Quotes"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_run_empty_command() {
        assert!(run("   ").is_err());
    }

    #[test]
    fn test_run_missing_program() {
        let err = run("definitely-not-an-aws-binary --version").unwrap_err();
        assert!(err.to_string().contains("definitely-not-an-aws-binary"));
    }
}
