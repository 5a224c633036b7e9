// entrez.rs - NCBI E-utilities request building for accession panels

use super::panel::{validate_accession, SpeciesPanel};
use crate::error::SourceError;
use serde::{Deserialize, Serialize};

pub const EFETCH_ENDPOINT: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// Identity and database used for efetch requests.
///
/// NCBI asks every client to identify itself; the contact is supplied here
/// rather than held as process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrezConfig {
    pub email: Option<String>,
    pub tool: String,
    pub database: String,
}

impl Default for EntrezConfig {
    fn default() -> Self {
        Self {
            email: None,
            tool: env!("CARGO_PKG_NAME").to_string(),
            database: "nucleotide".to_string(),
        }
    }
}

impl EntrezConfig {
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// efetch URL returning the FASTA records of `accessions`
    pub fn efetch_url(&self, accessions: &[&str]) -> Result<String, SourceError> {
        for accession in accessions {
            validate_accession(accession)?;
        }

        let mut url = format!(
            "{}?db={}&id={}&rettype=fasta&retmode=text&tool={}",
            EFETCH_ENDPOINT,
            urlencoding::encode(&self.database),
            urlencoding::encode(&accessions.join(",")),
            urlencoding::encode(&self.tool)
        );
        if let Some(email) = &self.email {
            url.push_str("&email=");
            url.push_str(&urlencoding::encode(email));
        }
        Ok(url)
    }

    /// One efetch URL covering the whole panel
    pub fn panel_url(&self, panel: &SpeciesPanel) -> Result<String, SourceError> {
        self.efetch_url(&panel.accessions())
    }
}
