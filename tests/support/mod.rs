#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "resolve-action" => env!("CARGO_BIN_EXE_resolve-action"),
        "catalog-audit" => env!("CARGO_BIN_EXE_catalog-audit"),
        other => panic!("unknown helper {other}"),
    };
    PathBuf::from(path)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a command that is expected to fail, returning its output regardless.
pub fn run_unchecked(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

/// Render one catalog record element with the given attributes.
pub fn record(tag: &str, name: &str, attrs: &[(&str, &str)]) -> String {
    let mut element = format!("<{tag} english=\"{name}\"");
    for (key, value) in attrs {
        element.push_str(&format!(" {key}=\"{value}\""));
    }
    element.push_str(" />");
    element
}

pub fn abilities_doc(records: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<abils>\n{}\n</abils>\n",
        records.join("\n")
    )
}

pub fn spells_doc(records: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<spells>\n{}\n</spells>\n",
        records.join("\n")
    )
}

/// Temporary resource directory holding catalog documents.
pub struct CatalogFixture {
    dir: TempDir,
    root: PathBuf,
}

impl CatalogFixture {
    /// Documents are written directly into the directory.
    pub fn flat() -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate fixture dir")?;
        let root = dir.path().to_path_buf();
        Ok(Self { dir, root })
    }

    /// Documents are written into a `resources/` subdirectory.
    pub fn nested() -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate fixture dir")?;
        let root = dir.path().join("resources");
        fs::create_dir(&root)?;
        Ok(Self { dir, root })
    }

    /// Directory to hand to the loader.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_abilities(&self, text: &str) -> Result<()> {
        fs::write(self.root.join("abils.xml"), text).context("writing abils.xml")
    }

    pub fn write_spells(&self, text: &str) -> Result<()> {
        fs::write(self.root.join("spells.xml"), text).context("writing spells.xml")
    }
}

/// Fixture shared by most tests: a few abilities and spells, one name in
/// both tiers, and one spell listed twice.
pub fn standard_fixture() -> Result<CatalogFixture> {
    let fixture = CatalogFixture::nested()?;
    fixture.write_abilities(&abilities_doc(&[
        record(
            "a",
            "Provoke",
            &[
                ("id", "35"),
                ("index", "547"),
                ("prefix", "/ja"),
                ("targets", "Enemy"),
                ("recast", "30"),
            ],
        ),
        record(
            "a",
            "Berserk",
            &[("id", "16"), ("prefix", "/ja"), ("targets", "Self"), ("recast", "300")],
        ),
        record(
            "a",
            "Ranged",
            &[("id", "2"), ("prefix", "/range"), ("targets", "Enemy")],
        ),
        record(
            "a",
            "Ward",
            &[("id", "90"), ("prefix", "/ja"), ("targets", "Self"), ("tpcost", "100")],
        ),
    ]))?;
    fixture.write_spells(&spells_doc(&[
        record(
            "s",
            "Dia",
            &[
                ("id", "23"),
                ("index", "23"),
                ("prefix", "/ma"),
                ("targets", "Enemy"),
                ("mpcost", "7"),
                ("casttime", "1"),
                ("recast", "5"),
            ],
        ),
        record(
            "s",
            "Cure",
            &[("id", "1"), ("prefix", "/ma"), ("targets", "Self, Party"), ("mpcost", "8")],
        ),
        record(
            "s",
            "Ward",
            &[("id", "91"), ("prefix", "/ma"), ("targets", "Enemy"), ("mpcost", "12")],
        ),
        record("s", "Sleepga II", &[("id", "274"), ("prefix", "/ma"), ("targets", "Enemy")]),
        record("s", "Sleepga II", &[("id", "275"), ("prefix", "/ma"), ("targets", "Enemy")]),
    ]))?;
    Ok(fixture)
}
