//! Resolve action names against the catalogs and print their commands.
//!
//! Prints one command string per resolved name (`/ma "Dia" <t>`), or one
//! NDJSON record per name with `--json`. Unknown names and ambiguous names
//! are reported separately and map to distinct exit codes so callers can tell
//! a typo from catalog data that needs fixing.

use action_catalog::{
    ActionResolver, CatalogError, CatalogStore, LoadOptions, init_tracing, shared_catalog,
    split_names,
};
use anyhow::{Context, Result, bail};
use serde_json::json;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_NOT_FOUND: u8 = 2;
const EXIT_AMBIGUOUS: u8 = 3;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = CliArgs::parse()?;
    if args.names.is_empty() {
        bail!("no action names given\n{}", usage());
    }

    let owned;
    let store = match &args.resources {
        Some(dir) => {
            owned = CatalogStore::load(dir, &args.options)
                .with_context(|| format!("loading catalogs from {}", dir.display()))?;
            &owned
        }
        None => shared_catalog()?,
    };
    let resolver = ActionResolver::new(store);

    let mut outcome = Outcome::default();
    for (name, result) in resolver.resolve_many(&args.names) {
        let record = match result {
            Ok(descriptor) if descriptor.is_valid_name() => {
                let command = descriptor.command_string();
                if !args.json {
                    println!("{command}");
                }
                json!({
                    "query": name,
                    "status": "resolved",
                    "command": command,
                    "descriptor": descriptor,
                })
            }
            Ok(_) => {
                outcome.not_found = true;
                if !args.json {
                    eprintln!("no ability or spell named '{name}'");
                }
                json!({ "query": name, "status": "not_found" })
            }
            Err(err @ CatalogError::AmbiguousEntry { .. }) => {
                outcome.ambiguous = true;
                if !args.json {
                    eprintln!("{err}");
                }
                json!({ "query": name, "status": "ambiguous", "error": err.to_string() })
            }
            Err(err) => return Err(err).with_context(|| format!("resolving '{name}'")),
        };
        if args.json {
            println!("{}", serde_json::to_string(&record)?);
        }
    }

    Ok(ExitCode::from(outcome.code()))
}

#[derive(Default)]
struct Outcome {
    not_found: bool,
    ambiguous: bool,
}

impl Outcome {
    fn code(&self) -> u8 {
        if self.ambiguous {
            EXIT_AMBIGUOUS
        } else if self.not_found {
            EXIT_NOT_FOUND
        } else {
            0
        }
    }
}

struct CliArgs {
    resources: Option<PathBuf>,
    options: LoadOptions,
    json: bool,
    names: Vec<String>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        Self::parse_from(env::args_os().skip(1))
    }

    fn parse_from(mut args: impl Iterator<Item = std::ffi::OsString>) -> Result<Self> {
        let mut resources: Option<PathBuf> = None;
        let mut options = LoadOptions::default();
        let mut json = false;
        let mut names: Vec<String> = Vec::new();

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
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
                "--names" => {
                    names.extend(split_names(&next_value(&mut args, "--names")?));
                }
                "--json" => json = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other if other.starts_with("--") => bail!("unknown flag: {other}"),
                other => names.push(other.to_string()),
            }
        }

        Ok(CliArgs {
            resources,
            options,
            json,
            names,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: resolve-action [--resources DIR] [--abilities-file NAME] [--spells-file NAME] [--json] [--names \"A, B\"] [NAME ...]\n\
Resolves each name (abilities first, then spells) and prints its command string.\n\
Exit status: 0 all resolved, 2 some name unknown, 3 some name ambiguous in the catalog.\n"
}
