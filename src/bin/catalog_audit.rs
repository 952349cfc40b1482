//! Report what the catalogs contain and which names cannot be resolved.
//!
//! Loading tolerates duplicate names; only lookups of those names fail. This
//! helper lists them up front so the catalog data can be fixed before a
//! resolution trips over it. `--strict` turns any duplicate into a failing
//! exit status.

use action_catalog::{CatalogStore, LoadOptions, Tier, find_resource_dir, init_tracing};
use anyhow::{Context, Result, bail};
use serde_json::{Map, Value, json};
use std::env;
use std::path::PathBuf;

fn main() {
    init_tracing();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let args = CliArgs::parse()?;
    let dir = match args.resources {
        Some(dir) => dir,
        None => find_resource_dir()?,
    };
    let store = CatalogStore::load(&dir, &args.options)
        .with_context(|| format!("loading catalogs from {}", dir.display()))?;

    let report = audit_report(&store);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for tier in Tier::ALL {
            let duplicates = store.ambiguous_names(tier);
            println!("{tier}: {} records", store.len(tier));
            for name in &duplicates {
                println!("  duplicate: {name}");
            }
        }
    }

    let clean = Tier::ALL
        .iter()
        .all(|tier| store.ambiguous_names(*tier).is_empty());
    Ok(clean || !args.strict)
}

fn audit_report(store: &CatalogStore) -> Value {
    let mut tiers = Map::new();
    for tier in Tier::ALL {
        tiers.insert(
            tier.as_str().to_string(),
            json!({
                "records": store.len(tier),
                "names": store.tier(tier).names().count(),
                "duplicates": store.ambiguous_names(tier),
            }),
        );
    }
    Value::Object(tiers)
}

struct CliArgs {
    resources: Option<PathBuf>,
    options: LoadOptions,
    json: bool,
    strict: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut resources = None;
        let mut options = LoadOptions::default();
        let mut json = false;
        let mut strict = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--resources" => {
                    resources = Some(PathBuf::from(next_value(&mut args, "--resources")?));
                }
                "--abilities-file" => {
                    options.abilities_file = next_value(&mut args, "--abilities-file")?;
                }
                "--spells-file" => {
                    options.spells_file = next_value(&mut args, "--spells-file")?;
                }
                "--json" => json = true,
                "--strict" => strict = true,
                "--help" | "-h" => {
                    println!(
                        "Usage: catalog-audit [--resources DIR] [--abilities-file NAME] [--spells-file NAME] [--json] [--strict]"
                    );
                    std::process::exit(0);
                }
                other => bail!("unknown argument: {other}"),
            }
        }

        Ok(CliArgs {
            resources,
            options,
            json,
            strict,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_duplicates_per_tier() {
        let store = CatalogStore::from_documents(
            Some(r#"<abils><a english="Provoke" /></abils>"#),
            Some(r#"<spells><s english="Sleepga II" /><s english="Sleepga II" /><s english="Dia" /></spells>"#),
        )
        .unwrap();

        let report = audit_report(&store);
        assert_eq!(report["ability"]["records"], 1);
        assert_eq!(report["ability"]["duplicates"], json!([]));
        assert_eq!(report["spell"]["records"], 3);
        assert_eq!(report["spell"]["names"], 2);
        assert_eq!(report["spell"]["duplicates"], json!(["Sleepga II"]));
    }

    #[test]
    fn file_name_flags_override_the_defaults() {
        let args = CliArgs::parse_from(
            ["--abilities-file", "job_abils.xml", "--strict"]
                .iter()
                .map(|s| s.to_string()),
        )
        .unwrap();
        assert_eq!(args.options.abilities_file, "job_abils.xml");
        assert_eq!(args.options.spells_file, "spells.xml");
        assert!(args.strict);
        assert!(args.resources.is_none());

        assert!(CliArgs::parse_from(["--spells-file".to_string()].into_iter()).is_err());
    }
}
