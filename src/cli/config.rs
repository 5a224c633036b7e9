// config.rs - Configuration file support

use crate::data::PanelEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub fasta: Option<String>,
    pub output_dir: Option<String>,
    pub format: Option<String>,
    pub bins: Option<usize>,

    // Random trial
    pub trials: Option<usize>,
    pub length: Option<usize>,
    pub alphabet: Option<String>,
    pub seed: Option<u64>,
    pub skip_random: Option<bool>,

    // Engine and pairing
    pub pairing: Option<String>,
    pub strategy: Option<String>,
    pub max_length: Option<usize>,

    // Performance
    pub threads: Option<usize>,

    // NCBI identity
    pub email: Option<String>,

    // Flags
    pub dry_run: Option<bool>,

    // Accession panel (replaces the built-in primate panel)
    pub panel: Option<Vec<PanelEntry>>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# seqdist.toml - Configuration file for seqdist
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# FASTA file with the records of the accession panel (enables the real-data trial)
fasta = "/path/to/primates.fasta"

# Directory receiving one series file per trial
output_dir = "results"

# Output format: tsv, csv, json
format = "tsv"

# Histogram bins shown on the console and stored in JSON output
bins = 10

# =============================================================================
# RANDOM TRIAL
# =============================================================================

# Number of trials; each compares two fresh random sequences
trials = 20

# Length of every random sequence
length = 400

# Symbols sampled uniformly
alphabet = "ACTG"

# Seed for reproducible runs (omit for OS entropy)
# seed = 42

# Skip the random trial entirely
skip_random = false

# =============================================================================
# ENGINE
# =============================================================================

# Pairing of odd-sized batches: strict, drop-trailing, reuse-last
pairing = "strict"

# Table strategy: rolling (linear memory) or full (quadratic table)
strategy = "rolling"

# Reject sequences longer than this (comparison cost grows with the product of lengths)
# max_length = 20000

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# NCBI
# =============================================================================

# Contact e-mail sent with efetch requests (see --print-fetch-urls)
# email = "you@example.org"

# =============================================================================
# ACCESSION PANEL (omit to use the built-in primate panel)
# =============================================================================

# [[panel]]
# species = "German Neanderthal"
# accession = "AF011222"
#
# [[panel]]
# species = "European Human"
# accession = "X90314"
"#
        .to_string()
    }
}
