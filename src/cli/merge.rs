// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: &Config) -> Self {
        // Input/Output
        if self.fasta.is_none() {
            self.fasta = config.fasta.clone();
        }
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir.clone();
        }
        if let (true, Some(format)) = (self.format == "tsv", &config.format) {
            self.format = format.clone();
        }
        if let (true, Some(bins)) = (self.bins == 10, config.bins) {
            self.bins = bins;
        }

        // Random trial (only override defaults, not explicit CLI values)
        if let (true, Some(trials)) = (self.trials == 20, config.trials) {
            self.trials = trials;
        }
        if let (true, Some(length)) = (self.length == 400, config.length) {
            self.length = length;
        }
        if let (true, Some(alphabet)) = (self.alphabet == "ACTG", &config.alphabet) {
            self.alphabet = alphabet.clone();
        }
        if self.seed.is_none() {
            self.seed = config.seed;
        }

        // Engine and pairing
        if let (true, Some(pairing)) = (self.pairing == "strict", &config.pairing) {
            self.pairing = pairing.clone();
        }
        if let (true, Some(strategy)) = (self.strategy == "rolling", &config.strategy) {
            self.strategy = strategy.clone();
        }
        if self.max_length.is_none() {
            self.max_length = config.max_length;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        if self.email.is_none() {
            self.email = config.email.clone();
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.skip_random && config.skip_random.unwrap_or(false) {
            self.skip_random = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args; the config is returned for
    /// settings that have no flag (the accession panel)
    pub fn with_config_file(self, config_path: &str) -> Result<(Self, Config), String> {
        let config = Config::from_file(config_path)?;
        let merged = self.merge_with_config(&config);
        Ok((merged, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["seqdist"], args).unwrap()
    }

    #[test]
    fn test_config_fills_defaults() {
        let config = Config {
            trials: Some(5),
            pairing: Some("reuse-last".to_string()),
            fasta: Some("panel.fasta".to_string()),
            skip_random: Some(true),
            ..Config::default()
        };
        let args = parse(&[]).merge_with_config(&config);
        assert_eq!(args.trials, 5);
        assert_eq!(args.pairing, "reuse-last");
        assert_eq!(args.fasta.as_deref(), Some("panel.fasta"));
        assert!(args.skip_random);
        assert_eq!(args.length, 400);
    }

    #[test]
    fn test_cli_wins_over_config() {
        let config = Config {
            trials: Some(5),
            strategy: Some("full".to_string()),
            seed: Some(1),
            ..Config::default()
        };
        let args = parse(&["--trials", "8", "--seed", "9"]).merge_with_config(&config);
        assert_eq!(args.trials, 8);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.strategy, "full");
    }
}
