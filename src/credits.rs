//! Dependency credits.
//!
//! The list of bundled dependencies ships inside the binary as
//! `credits.json`; `--credits` prints it as a compact table.

use crate::error::{Result, TwigcError};
use serde::Deserialize;

const EMBEDDED_MANIFEST: &str = include_str!("../credits.json");

/// One bundled dependency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub license: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    packages: Vec<Package>,
}

/// Source of the installed-package list.
pub trait ManifestReader {
    /// Installed packages, sorted case-insensitively by name.
    fn packages(&self) -> Result<Vec<Package>>;
}

/// Reads the manifest compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedManifest;

impl ManifestReader for EmbeddedManifest {
    fn packages(&self) -> Result<Vec<Package>> {
        parse_manifest(EMBEDDED_MANIFEST)
    }
}

/// Parse manifest JSON and sort its packages.
pub fn parse_manifest(json: &str) -> Result<Vec<Package>> {
    let manifest: Manifest = serde_json::from_str(json)
        .map_err(|_| TwigcError::ConfigError("Error decoding credits.json".to_string()))?;

    let mut packages = manifest.packages;
    packages.sort_by_key(|p| p.name.to_lowercase());
    Ok(packages)
}

/// Render packages as the `--credits` table.
///
/// Columns are left-aligned, each followed by two spaces; versions lose a
/// leading `v`; an empty license list prints as `?`.
pub fn format_table(packages: &[Package]) -> String {
    let header = ["name", "version", "licence"].map(String::from);
    let rows: Vec<[String; 3]> = packages
        .iter()
        .map(|p| {
            let license = if p.license.is_empty() {
                "?".to_string()
            } else {
                p.license.join(", ")
            };
            [
                p.name.clone(),
                p.version.trim_start_matches('v').to_string(),
                license,
            ]
        })
        .collect();

    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line: String = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}  ", cell, width = width))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_manifest_parses() {
        let packages = EmbeddedManifest.packages().unwrap();
        assert!(packages.iter().any(|p| p.name == "minijinja"));
    }

    #[test]
    fn packages_sort_case_insensitively() {
        let json = r#"{"packages": [
            {"name": "zeta", "version": "1"},
            {"name": "Alpha", "version": "2"},
            {"name": "beta", "version": "3"}
        ]}"#;
        let names: Vec<_> = parse_manifest(json)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn missing_packages_key_is_error() {
        let err = parse_manifest(r#"{"other": []}"#).unwrap_err();
        assert_eq!(err.to_string(), "Error decoding credits.json");
        assert!(parse_manifest("not json").is_err());
    }

    #[test]
    fn table_layout() {
        let packages = vec![
            Package {
                name: "twig/twig".to_string(),
                version: "v2.4.4".to_string(),
                license: vec!["BSD-3-Clause".to_string()],
            },
            Package {
                name: "x".to_string(),
                version: "1.0".to_string(),
                license: vec![],
            },
        ];

        let table = format_table(&packages);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "name       version  licence");
        assert_eq!(lines[1], "twig/twig  2.4.4    BSD-3-Clause");
        assert_eq!(lines[2], "x          1.0      ?");
    }
}
