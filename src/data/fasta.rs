// fasta.rs - Accession records resolved from a FASTA file

use super::panel::SpeciesPanel;
use super::sequence::{SequenceRecord, SequenceSource};
use crate::error::SourceError;
use bio::io::fasta;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Does a FASTA record id refer to `accession`?
///
/// Accepts the bare accession, a versioned id (`AF011222.1`) and NCBI
/// pipe-delimited ids (`gi|3273765|gb|AF011222.1|`).
pub fn matches_accession(record_id: &str, accession: &str) -> bool {
    record_id.split('|').any(|part| {
        part == accession
            || part
                .strip_prefix(accession)
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(|version| {
                    !version.is_empty() && version.chars().all(|c| c.is_ascii_digit())
                })
    })
}

/// Produces the panel's sequences, in panel order, from one FASTA file
#[derive(Debug)]
pub struct FastaSource {
    path: PathBuf,
    panel: SpeciesPanel,
}

impl FastaSource {
    pub fn new(path: impl Into<PathBuf>, panel: SpeciesPanel) -> Self {
        Self {
            path: path.into(),
            panel,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn panel(&self) -> &SpeciesPanel {
        &self.panel
    }

    fn read_records(&self) -> Result<Vec<fasta::Record>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let reader = fasta::Reader::new(BufReader::new(file));
        let mut records = Vec::new();
        for record_result in reader.records() {
            let record = record_result.map_err(|e| SourceError::Fasta {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
            record.check().map_err(|message| SourceError::Fasta {
                path: self.path.clone(),
                message: message.to_string(),
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

impl SequenceSource for FastaSource {
    fn name(&self) -> &str {
        "FASTA accessions"
    }

    fn sequences(&mut self) -> Result<Vec<SequenceRecord>, SourceError> {
        let records = self.read_records()?;

        // first record wins when an accession appears more than once
        let mut by_accession: HashMap<&str, &fasta::Record> = HashMap::new();
        for entry in &self.panel.entries {
            if by_accession.contains_key(entry.accession.as_str()) {
                continue;
            }
            let found = records
                .iter()
                .find(|r| matches_accession(r.id(), &entry.accession));
            if let Some(record) = found {
                by_accession.insert(entry.accession.as_str(), record);
            }
        }

        self.panel
            .entries
            .iter()
            .map(|entry| -> Result<SequenceRecord, SourceError> {
                let record = by_accession
                    .get(entry.accession.as_str())
                    .ok_or_else(|| SourceError::AccessionNotFound {
                        accession: entry.accession.clone(),
                        path: self.path.clone(),
                    })?;
                let mut seq = SequenceRecord::new(record.id(), record.seq().to_vec())
                    .with_description(entry.species.clone());
                if let Some(desc) = record.desc() {
                    seq = seq.with_description(format!("{} ({})", entry.species, desc));
                }
                Ok(seq)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::panel::PanelEntry;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use test_case::test_case;

    fn fasta_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn panel(accessions: &[(&str, &str)]) -> SpeciesPanel {
        let entries = accessions.iter().map(|(s, a)| PanelEntry::new(*s, *a)).collect();
        SpeciesPanel::new(entries).unwrap()
    }

    #[test_case("AF011222", "AF011222", true; "bare")]
    #[test_case("AF011222.1", "AF011222", true; "versioned")]
    #[test_case("gi|3273765|gb|AF011222.1|", "AF011222", true; "pipe delimited")]
    #[test_case("AF0112220", "AF011222", false; "longer accession")]
    #[test_case("AF011222.x", "AF011222", false; "bad version")]
    #[test_case("X90314", "AF011222", false; "different")]
    fn test_matches_accession(id: &str, accession: &str, expected: bool) {
        assert_eq!(matches_accession(id, accession), expected);
    }

    #[test]
    fn test_panel_order_is_kept() {
        let file = fasta_file(
            ">X90314.1 Homo sapiens\nACGT\nAC\n>AF011222.1 Neanderthal\nACGA\n>AF254446.1\nTTTT\n",
        );
        let mut source = FastaSource::new(
            file.path(),
            panel(&[("Neanderthal", "AF011222"), ("Human", "X90314"), ("Russian", "AF254446")]),
        );
        let batch = source.sequences().unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].id, "AF011222.1");
        assert_eq!(batch[0].sequence, b"ACGA".to_vec());
        assert_eq!(batch[1].sequence, b"ACGTAC".to_vec());
        assert_eq!(batch[1].description.as_deref(), Some("Human (Homo sapiens)"));
        assert_eq!(batch[2].description.as_deref(), Some("Russian"));
    }

    #[test]
    fn test_missing_accession_is_an_error() {
        let file = fasta_file(">X90314.1\nACGT\n");
        let mut source = FastaSource::new(file.path(), panel(&[("Neanderthal", "AF011222")]));
        match source.sequences() {
            Err(SourceError::AccessionNotFound { accession, .. }) => {
                assert_eq!(accession, "AF011222")
            }
            other => panic!("expected AccessionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut source = FastaSource::new("/nonexistent/records.fasta", SpeciesPanel::primates());
        assert!(matches!(source.sequences(), Err(SourceError::Io { .. })));
    }
}
