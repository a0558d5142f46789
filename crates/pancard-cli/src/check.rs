//! # Check Command
//!
//! Runs the requested modes against one candidate. Modes run in the order
//! validate, decode, summary. A strict rejection in validate mode stops
//! before the later modes and yields exit code 1.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use pancard_core::{decode, normalize, summarize, validate_strict};

use crate::render;

/// Arguments for a single PAN check.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// PAN card number to validate or decode.
    #[arg(value_name = "PAN")]
    pub pan: String,

    /// Only validate the PAN (strict; exits 1 when rejected).
    #[arg(short, long)]
    pub validate: bool,

    /// Decode the PAN and show a detailed breakdown (default).
    #[arg(short, long)]
    pub decode: bool,

    /// Show a one-sentence summary of the PAN.
    #[arg(short, long)]
    pub summary: bool,

    /// Emit JSON instead of text.
    #[arg(short, long)]
    pub json: bool,
}

impl CheckArgs {
    /// Decode is implied when no mode flag is given.
    pub fn decode_requested(&self) -> bool {
        self.decode || (!self.validate && !self.summary)
    }
}

/// Execute the check. Returns the process exit code.
///
/// # Errors
///
/// Fails only when writing to `out` or JSON encoding fails.
pub fn run_check(args: &CheckArgs, out: &mut impl Write) -> Result<u8> {
    let candidate = normalize(&args.pan);
    tracing::debug!(pan = %candidate, json = args.json, "checking candidate");

    if args.validate {
        let result = validate_strict(&args.pan);
        match &result {
            Ok(()) => tracing::info!(pan = %candidate, "accepted"),
            Err(e) => tracing::info!(pan = %candidate, reason = %e, "rejected"),
        }

        let line = if args.json {
            serde_json::to_string(&render::validation_json(&candidate, result.as_ref().err()))?
        } else {
            render::validation_text(&candidate, result.as_ref().err())
        };
        writeln!(out, "{line}").context("failed to write validation result")?;

        if result.is_err() {
            return Ok(1);
        }
    }

    if args.decode_requested() {
        let report = decode(&args.pan);
        tracing::info!(
            valid = report.is_valid,
            holder_type = %report.holder_type.type_name,
            "decoded candidate"
        );

        let text = if args.json {
            format!("{}\n", serde_json::to_string_pretty(&report)?)
        } else {
            render::report_text(&candidate, &report)
        };
        out.write_all(text.as_bytes()).context("failed to write decode report")?;
    }

    if args.summary {
        let summary = summarize(&args.pan);
        let line = if args.json {
            serde_json::to_string(&serde_json::json!({ "pan": candidate, "summary": summary }))?
        } else {
            format!("Summary: {summary}")
        };
        writeln!(out, "{line}").context("failed to write summary")?;
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pan: &str) -> CheckArgs {
        CheckArgs {
            pan: pan.to_string(),
            validate: false,
            decode: false,
            summary: false,
            json: false,
        }
    }

    fn run(args: &CheckArgs) -> (u8, String) {
        let mut buf = Vec::new();
        let code = run_check(args, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn decode_is_default_mode() {
        let a = args("ABCPE1234K");
        assert!(a.decode_requested());
        let (code, out) = run(&a);
        assert_eq!(code, 0);
        assert!(out.contains("PAN Card Analysis: ABCPE1234K"));
        assert!(out.contains("Holder Type: Individual (Person)"));
    }

    #[test]
    fn summary_alone_skips_decode() {
        let a = CheckArgs {
            summary: true,
            ..args("ABCPE1234K")
        };
        assert!(!a.decode_requested());
        let (code, out) = run(&a);
        assert_eq!(code, 0);
        assert!(out.starts_with("Summary: Valid PAN ABCPE1234K"));
        assert!(!out.contains("PAN Card Analysis"));
    }

    #[test]
    fn validate_accepts() {
        let a = CheckArgs {
            validate: true,
            ..args("abcpe1234k")
        };
        let (code, out) = run(&a);
        assert_eq!(code, 0);
        assert_eq!(out, "✓ ABCPE1234K is a valid PAN\n");
    }

    #[test]
    fn validate_rejects_with_exit_one() {
        let a = CheckArgs {
            validate: true,
            summary: true,
            ..args("ABCP12345")
        };
        let (code, out) = run(&a);
        assert_eq!(code, 1);
        assert_eq!(
            out,
            "✗ ABCP12345 is not a valid PAN: PAN must be exactly 10 characters, got 9\n"
        );
    }

    #[test]
    fn decode_of_malformed_input_exits_zero() {
        let (code, out) = run(&args("AB"));
        assert_eq!(code, 0);
        assert!(out.contains("Valid: false"));
        assert!(out.contains("absent"));
    }

    #[test]
    fn validate_json() {
        let a = CheckArgs {
            validate: true,
            json: true,
            ..args("ABCP1234EK")
        };
        let (code, out) = run(&a);
        assert_eq!(code, 1);
        let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["pan"], "ABCP1234EK");
        assert_eq!(v["valid"], false);
        assert_eq!(v["position"], 4);
    }

    #[test]
    fn decode_json_is_the_report() {
        let a = CheckArgs {
            json: true,
            ..args(" abcde1234f ")
        };
        let (code, out) = run(&a);
        assert_eq!(code, 0);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["original_input"], " abcde1234f ");
        assert_eq!(v["is_valid"], true);
        assert_eq!(v["holder_type"]["type_name"], "Unknown");
    }

    #[test]
    fn summary_json() {
        let a = CheckArgs {
            summary: true,
            json: true,
            ..args("XYZCH5678M")
        };
        let (_, out) = run(&a);
        let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["pan"], "XYZCH5678M");
        assert!(v["summary"].as_str().unwrap().contains("Company"));
    }

    #[test]
    fn all_modes_in_order() {
        let a = CheckArgs {
            validate: true,
            decode: true,
            summary: true,
            ..args("ABCPE1234K")
        };
        let (code, out) = run(&a);
        assert_eq!(code, 0);
        let v = out.find("is a valid PAN").unwrap();
        let d = out.find("PAN Card Analysis").unwrap();
        let s = out.find("Summary:").unwrap();
        assert!(v < d && d < s);
    }
}
