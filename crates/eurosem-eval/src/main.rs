/// Evaluates EUROSEM detachment and transport rates for a set of points
/// read from JSON.

use anyhow::{Context, Result};
use clap::Parser;
use eurosem_core::{evaluate_points, PointInputs, PointRates};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "eurosem-eval", about = "Evaluate rainfall/flow detachment and transport capacity per point")]
struct Args {
    /// JSON file holding one PointInputs object or an array of them.
    #[arg(short, long, required_unless_present = "template")]
    input: Option<String>,

    /// Write results here instead of stdout.
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Print a default PointInputs record and exit.
    #[arg(long)]
    template: bool,
}

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Serialize, Debug)]
struct PointRecord {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    rates: Option<PointRates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// A JSON array yields many points, a single object yields one.
fn parse_points(json: &str) -> Result<Vec<PointInputs>> {
    let value: Value = serde_json::from_str(json).context("parsing point inputs")?;
    let points = if value.is_array() {
        Vec::<PointInputs>::deserialize(value).context("parsing point inputs")?
    } else {
        vec![PointInputs::deserialize(value).context("parsing point inputs")?]
    };
    Ok(points)
}

fn evaluate_records(points: &[PointInputs]) -> Vec<PointRecord> {
    evaluate_points(points)
        .into_iter()
        .enumerate()
        .map(|(index, r)| match r {
            Ok(rates) => PointRecord { index, rates: Some(rates), error: None },
            Err(e) => PointRecord { index, rates: None, error: Some(e.to_string()) },
        })
        .collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(s)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.template {
        println!("{}", to_json(&PointInputs::default(), true)?);
        return Ok(());
    }

    let Some(path) = args.input else {
        eprintln!("No input specified. Use --help for usage.");
        return Ok(());
    };

    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let points = parse_points(&text).with_context(|| format!("in {path}"))?;
    eprintln!("[eurosem-eval] Evaluating {} points from {path} ...", points.len());

    let records = evaluate_records(&points);
    let mut failed = 0usize;
    for r in &records {
        if let Some(e) = &r.error {
            eprintln!("  [warn] point {}: {e}", r.index);
            failed += 1;
        }
    }

    let out = to_json(&records, args.pretty)?;
    match &args.output {
        Some(dest) => {
            fs::write(dest, out + "\n").with_context(|| format!("writing {dest}"))?;
            eprintln!("  -> {dest}");
        }
        None => println!("{out}"),
    }

    eprintln!("Done. {} evaluated, {failed} rejected.", records.len() - failed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_object_and_array_both_parse() {
        assert_eq!(parse_points("{}").unwrap(), vec![PointInputs::default()]);
        let many = parse_points(r#"[{}, {"flow": {"cohesion": 0.5}}]"#).unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].flow.cohesion, 0.5);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_points("[{").is_err());
    }

    #[test]
    fn misspelled_key_is_an_error() {
        let err = parse_points(r#"[{"rainfall": {"rainfall_intensity": 0.0}}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("rainfall_intensity"), "{err:#}");
    }

    #[test]
    fn records_carry_rates_or_error() {
        let mut bad = PointInputs::default();
        bad.rainfall.rainfall = -1.0;
        let recs = evaluate_records(&[PointInputs::default(), bad]);
        assert!(recs[0].rates.is_some() && recs[0].error.is_none());
        let msg = recs[1].error.as_deref().unwrap();
        assert!(msg.contains("rainfall detachment"), "{msg}");

        let v: serde_json::Value = serde_json::from_str(&to_json(&recs, false).unwrap()).unwrap();
        assert!(v[0].get("error").is_none());
        assert!(v[1].get("rates").is_none());
        assert_eq!(v[1]["index"], 1);
    }
}
