// panel.rs - Ordered species panel of nucleotide accessions

use crate::error::SourceError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A labelled accession in the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEntry {
    pub species: String,
    pub accession: String,
}

impl PanelEntry {
    pub fn new(species: impl Into<String>, accession: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            accession: accession.into(),
        }
    }
}

/// Ordered list of accessions; consecutive entries are compared pairwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesPanel {
    pub entries: Vec<PanelEntry>,
}

/// Primate mitochondrial control-region records
const PRIMATE_PANEL: [(&str, &str); 12] = [
    ("German Neanderthal", "AF011222"),
    ("Russian Neanderthal", "AF254446"),
    ("European Human", "X90314"),
    ("Mountain Gorilla Rwanda", "AF089820"),
    ("Chimp Troglodytes", "AF176766"),
    ("Puti Orangutan", "AF451972"),
    ("Jari Orangutan", "AF451964"),
    ("Western Lowland Gorilla", "AY079510"),
    ("Eastern Lowland Gorilla", "AF050738"),
    ("Chimp Schweinfurthii", "AF176722"),
    ("Chimp Vellerosus", "AF315498"),
    ("Chimp Verus", "AF176731"),
];

fn accession_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // GenBank/RefSeq style: letter prefix, optional underscore, digits, optional version
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z]{1,6}_?[0-9]{5,9}(\.[0-9]+)?$").expect("accession pattern is valid")
    })
}

/// Check that `accession` looks like a nucleotide accession
pub fn validate_accession(accession: &str) -> Result<(), SourceError> {
    if accession_pattern().is_match(accession) {
        Ok(())
    } else {
        Err(SourceError::InvalidAccession(accession.to_string()))
    }
}

impl SpeciesPanel {
    pub fn new(entries: Vec<PanelEntry>) -> Result<Self, SourceError> {
        for entry in &entries {
            validate_accession(&entry.accession)?;
        }
        Ok(Self { entries })
    }

    /// Panel built from bare accessions, each labelled with itself
    pub fn from_accessions<I, S>(accessions: I) -> Result<Self, SourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = accessions
            .into_iter()
            .map(|a| {
                let a = a.as_ref().trim();
                PanelEntry::new(a, a)
            })
            .collect();
        Self::new(entries)
    }

    pub fn primates() -> Self {
        Self {
            entries: PRIMATE_PANEL
                .iter()
                .map(|(species, accession)| PanelEntry::new(*species, *accession))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn accessions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.accession.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.species.as_str()).collect()
    }
}

impl Default for SpeciesPanel {
    fn default() -> Self {
        Self::primates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_primate_panel() {
        let panel = SpeciesPanel::primates();
        assert_eq!(panel.len(), 12);
        assert_eq!(panel.entries[0], PanelEntry::new("German Neanderthal", "AF011222"));
        assert_eq!(panel.accessions().last(), Some(&"AF176731"));
        assert!(panel.accessions().iter().all(|a| validate_accession(a).is_ok()));
    }

    #[test_case("AF011222"; "genbank")]
    #[test_case("X90314"; "single letter prefix")]
    #[test_case("AF011222.1"; "versioned")]
    #[test_case("NC_012920"; "refseq")]
    fn test_valid_accessions(accession: &str) {
        assert!(validate_accession(accession).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case("12345678"; "no prefix")]
    #[test_case("AF01"; "too short")]
    #[test_case("AF011222; rm"; "trailing junk")]
    fn test_invalid_accessions(accession: &str) {
        assert!(matches!(
            validate_accession(accession),
            Err(SourceError::InvalidAccession(_))
        ));
    }

    #[test]
    fn test_from_accessions() {
        let panel = SpeciesPanel::from_accessions([" AF011222", "X90314 "]).unwrap();
        assert_eq!(panel.labels(), vec!["AF011222", "X90314"]);
        assert!(SpeciesPanel::from_accessions(["bogus"]).is_err());
    }
}
