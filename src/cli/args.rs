// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// seqdist - Edit distance distributions for random and real DNA sequences
pub struct Args {
    /// path to FASTA file holding the records of the accession panel (enables the real-data trial)
    #[argh(option)]
    pub fasta: Option<String>,

    /// comma-separated accessions to compare instead of the built-in primate panel
    #[argh(option)]
    pub accessions: Option<String>,

    /// number of random trials, each comparing two fresh sequences (default: 20)
    #[argh(option, default = "20")]
    pub trials: usize,

    /// length of each random sequence (default: 400)
    #[argh(option, default = "400")]
    pub length: usize,

    /// alphabet sampled by the random generator (default: ACTG)
    #[argh(option, default = "String::from(\"ACTG\")")]
    pub alphabet: String,

    /// seed for reproducible random trials (default: OS entropy)
    #[argh(option)]
    pub seed: Option<u64>,

    /// skip the random trial
    #[argh(switch)]
    pub skip_random: bool,

    /// pairing of odd-sized batches: strict, drop-trailing, reuse-last (default: strict)
    #[argh(option, default = "String::from(\"strict\")")]
    pub pairing: String,

    /// table strategy: rolling, full (default: rolling)
    #[argh(option, default = "String::from(\"rolling\")")]
    pub strategy: String,

    /// reject sequences longer than this many symbols
    #[argh(option)]
    pub max_length: Option<usize>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// directory receiving one series file per trial
    #[argh(option)]
    pub output_dir: Option<String>,

    /// output format: tsv, csv, json (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// number of histogram bins (default: 10)
    #[argh(option, default = "10")]
    pub bins: usize,

    /// contact e-mail sent with NCBI efetch requests
    #[argh(option)]
    pub email: Option<String>,

    /// print the efetch URL for the accession panel and exit
    #[argh(switch)]
    pub print_fetch_urls: bool,

    /// validate inputs and show the pairing plan without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
