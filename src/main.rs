// main.rs - CLI entry point

use seqdist::cli::Config;
use seqdist::core::pairs;
use seqdist::output::print_report;
use seqdist::prelude::*;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    let mut config_panel = None;
    if let Some(config_path) = args.config.clone() {
        let (merged, config) = args.with_config_file(&config_path)?;
        args = merged;
        config_panel = config.panel;
    }

    let validation = validate_args(&args, config_panel.as_deref())?;

    if args.print_fetch_urls {
        let mut entrez = EntrezConfig::default();
        if let Some(email) = &args.email {
            entrez = entrez.with_email(email.clone());
        }
        let url = entrez.panel_url(&validation.panel).map_err(|e| e.to_string())?;
        println!("{}", url);
        if args.email.is_none() {
            eprintln!("⚠️  No --email given: NCBI asks clients to identify themselves");
        }
        return Ok(());
    }

    println!("🚀 seqdist v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "⚡ Engine: {} | Pairing: {}",
        validation.engine_config.strategy.description(),
        validation.pairing.description()
    );
    if let Some(limit) = validation.engine_config.max_sequence_length {
        println!("📏 Maximum sequence length: {}", limit);
    }

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    if args.dry_run {
        return run_dry(&args, &validation);
    }

    let total_start = Instant::now();
    let engine = DistanceEngine::new(validation.engine_config.clone());
    let mut trials_run = 0;

    if !args.skip_random {
        println!(
            "\n🎲 Random trial: {} pairs of length {} over '{}'{}",
            args.trials,
            args.length,
            args.alphabet,
            args.seed.map(|s| format!(" (seed {})", s)).unwrap_or_default()
        );
        let mut source =
            RandomDnaSource::for_trials(args.trials, args.length, &args.alphabet, args.seed)
                .map_err(|e| e.to_string())?;
        run_trial("random", &mut source, &engine, &validation, &args, &command_line)?;
        trials_run += 1;
    }

    if let Some(fasta) = &args.fasta {
        println!(
            "\n🧬 Real-data trial: {} accessions from {}",
            validation.panel.len(),
            fasta
        );
        let mut source = FastaSource::new(fasta, validation.panel.clone());
        run_trial("real", &mut source, &engine, &validation, &args, &command_line)?;
        trials_run += 1;
    }

    let total_elapsed = total_start.elapsed();
    println!("\n🎉 === SEQDIST COMPLETED SUCCESSFULLY ===");
    println!("⏱️  Total execution time: {:.2}s", total_elapsed.as_secs_f64());
    println!("📊 Trials run: {}", trials_run);
    println!("🔧 Command: {}", command_line);

    Ok(())
}

/// Produce a batch, compare it and report the resulting series
fn run_trial(
    trial: &str,
    source: &mut dyn SequenceSource,
    engine: &DistanceEngine,
    validation: &ValidationResult,
    args: &Args,
    command_line: &str,
) -> Result<(), String> {
    let start = Instant::now();
    let batch = source
        .sequences()
        .map_err(|e| format!("{} source failed: {}", source.name(), e))?;

    let total_symbols: usize = batch.iter().map(SequenceRecord::len).sum();
    println!(
        "✅ Loaded {} sequences ({} symbols) from {}",
        batch.len(),
        total_symbols,
        source.name()
    );

    let series = compare_batch_with_progress::<u8, _>(&batch, engine, validation.pairing)
        .map_err(|e| e.to_string())?;
    println!(
        "✅ Compared {} pairs in {:.2}s",
        series.len(),
        start.elapsed().as_secs_f64()
    );

    print_report(trial, &series, args.bins);

    if let Some(dir) = &args.output_dir {
        let labels: Vec<String> = batch
            .iter()
            .map(|r| r.description.clone().unwrap_or_else(|| r.id.clone()))
            .collect();
        let extension = args.format.to_lowercase();
        let path = Path::new(dir).join(format!("{}.{}", trial, extension));
        let path = path.to_string_lossy();
        write_series(
            &path,
            validation.format,
            trial,
            &series,
            &labels,
            args.bins,
            command_line,
        )?;
    }

    Ok(())
}

/// Report what would be compared without running the engine
fn run_dry(args: &Args, validation: &ValidationResult) -> Result<(), String> {
    if !args.skip_random {
        let plan = pairs(args.trials * 2, validation.pairing).map_err(|e| e.to_string())?;
        println!("🎲 Random trial: {} pairs of length {}", plan.len(), args.length);
    }

    if args.fasta.is_some() {
        let labels = validation.panel.labels();
        let plan = pairs(labels.len(), validation.pairing).map_err(|e| e.to_string())?;
        println!("🧬 Real-data trial: {} pairs", plan.len());
        for (left, right) in plan {
            println!("  • {} ↔ {}", labels[left], labels[right]);
        }
    }

    println!("✅ Dry run completed successfully");
    Ok(())
}
