// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{EngineConfig, PairingPolicy, TableStrategy};
use crate::data::{PanelEntry, SpeciesPanel};
use crate::output::OutputFormat;
use std::path::Path;
use std::str::FromStr;

pub struct ValidationResult {
    pub engine_config: EngineConfig,
    pub pairing: PairingPolicy,
    pub format: OutputFormat,
    pub panel: SpeciesPanel,
}

/// Validate all command line arguments.
///
/// `config_panel` is the `[[panel]]` table of the configuration file, if any;
/// `--accessions` takes precedence over it.
pub fn validate_args(
    args: &Args,
    config_panel: Option<&[PanelEntry]>,
) -> Result<ValidationResult, String> {
    let pairing = PairingPolicy::from_str(&args.pairing)?;
    let strategy = TableStrategy::from_str(&args.strategy)?;
    let format = OutputFormat::from_str(&args.format)?;

    if args.bins == 0 {
        return Err("--bins must be at least 1".to_string());
    }
    if args.alphabet.is_empty() && !args.skip_random {
        return Err("--alphabet must contain at least one symbol".to_string());
    }
    if !args.alphabet.is_ascii() && !args.skip_random {
        return Err(format!("--alphabet must contain ASCII symbols only, got '{}'", args.alphabet));
    }
    if matches!(args.threads, Some(0)) {
        return Err("--threads must be at least 1".to_string());
    }
    if let Some(limit) = args.max_length {
        if limit == 0 {
            return Err("--max-length must be at least 1".to_string());
        }
        if !args.skip_random && args.length > limit {
            return Err(format!(
                "--length {} exceeds --max-length {}; random sequences would be rejected",
                args.length, limit
            ));
        }
    }

    if args.skip_random && args.fasta.is_none() && !args.print_fetch_urls {
        return Err("Nothing to do: --skip-random given without --fasta".to_string());
    }

    if let Some(fasta) = &args.fasta {
        if !Path::new(fasta).is_file() && !args.print_fetch_urls {
            return Err(format!("FASTA file not found: {}", fasta));
        }
    }

    let panel_result = if let Some(list) = &args.accessions {
        SpeciesPanel::from_accessions(list.split(',').filter(|a| !a.trim().is_empty()))
    } else if let Some(entries) = config_panel {
        SpeciesPanel::new(entries.to_vec())
    } else {
        Ok(SpeciesPanel::primates())
    };
    let panel = panel_result.map_err(|e| format!("Invalid accession panel: {}", e))?;

    if panel.is_empty() {
        return Err("Accession panel is empty".to_string());
    }

    Ok(ValidationResult {
        engine_config: EngineConfig::new(strategy, args.max_length),
        pairing,
        format,
        panel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["seqdist"], args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let result = validate_args(&parse(&[]), None).unwrap();
        assert_eq!(result.pairing, PairingPolicy::Strict);
        assert_eq!(result.engine_config, EngineConfig::default());
        assert_eq!(result.format, OutputFormat::Tsv);
        assert_eq!(result.panel, SpeciesPanel::primates());
    }

    #[test]
    fn test_invalid_values() {
        assert!(validate_args(&parse(&["--pairing", "zip"]), None).is_err());
        assert!(validate_args(&parse(&["--strategy", "banded"]), None).is_err());
        assert!(validate_args(&parse(&["--format", "phylip"]), None).is_err());
        assert!(validate_args(&parse(&["--bins", "0"]), None).is_err());
        assert!(validate_args(&parse(&["--alphabet", "ÅC"]), None).is_err());
        assert!(validate_args(&parse(&["--max-length", "100"]), None).is_err());
        assert!(validate_args(&parse(&["--skip-random"]), None).is_err());
        assert!(validate_args(&parse(&["--fasta", "/nonexistent/panel.fasta"]), None).is_err());
    }

    #[test]
    fn test_accessions_override_config_panel() {
        let config_panel = vec![PanelEntry::new("Chimp Verus", "AF176731")];
        let args = parse(&["--accessions", "AF011222,X90314"]);
        let result = validate_args(&args, Some(config_panel.as_slice())).unwrap();
        assert_eq!(result.panel.accessions(), vec!["AF011222", "X90314"]);

        let result = validate_args(&parse(&[]), Some(config_panel.as_slice())).unwrap();
        assert_eq!(result.panel.labels(), vec!["Chimp Verus"]);
    }

    #[test]
    fn test_invalid_accession() {
        let result = validate_args(&parse(&["--accessions", "AF011222,not-an-id"]), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_engine_settings() {
        let args = parse(&["--strategy", "full", "--max-length", "500"]);
        let result = validate_args(&args, None).unwrap();
        assert_eq!(result.engine_config, EngineConfig::new(TableStrategy::Full, Some(500)));
    }
}
