use distance_analyzer::analyzer::AnalysisReport;
use distance_analyzer::io::{load_recording, write_json_file};
use distance_analyzer::config::{load_config, OutputConfig, RuntimeConfig};
use distance_analyzer::{AnalyzerParams, DistanceAnalyzer};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = parse_cli()?;

    let samples = load_recording(&config.input)?;
    println!(
        "Analyzing {} samples from {}",
        samples.len(),
        config.input.display()
    );

    let analyzer = DistanceAnalyzer::new(config.params.clone());
    let report = analyzer.analyze(&samples).map_err(|e| e.to_string())?;

    print_text_summary(&report, &config.params);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn parse_cli() -> Result<RuntimeConfig, String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "analyze".to_string());
    let mut args = env::args().skip(1);
    let first = args.next().ok_or_else(|| usage(&program))?;

    match first.as_str() {
        "-h" | "--help" => Err(usage(&program)),
        "--config" => {
            let path = args.next().ok_or_else(|| usage(&program))?;
            load_config(Path::new(&path))
        }
        _ => {
            let mut config = RuntimeConfig {
                input: PathBuf::from(first),
                output: OutputConfig::default(),
                params: AnalyzerParams::default(),
            };
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--json" => {
                        let path = args.next().ok_or_else(|| usage(&program))?;
                        config.output.json_out = Some(PathBuf::from(path));
                    }
                    other => return Err(format!("Unknown argument `{other}`\n{}", usage(&program))),
                }
            }
            Ok(config)
        }
    }
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <data.csv> [--json <report.json>]\n       {program} --config <config.json>"
    )
}

fn print_text_summary(report: &AnalysisReport, params: &AnalyzerParams) {
    let s = &report.summary;
    println!("\nRecording summary");
    println!("  samples: {}", s.count);
    println!("  mean: {:.2} cm", s.mean);
    println!("  std: {:.2} cm", s.std);
    println!("  min / max: {:.2} / {:.2} cm", s.min, s.max);
    println!("  range: {:.2} cm", s.range);
    if s.stability_pct.is_nan() {
        println!("  stability: not computable (zero mean)");
    } else {
        println!("  stability (lower is better): {:.2}%", s.stability_pct);
    }
    println!(
        "  rapid changes (>{:.1} cm): {}",
        params.rapid_change_threshold, s.rapid_change_count
    );

    println!(
        "\nDetected {} periods of significant movement (>{:.1} cm/s)",
        report.regions.len(),
        params.movement_threshold
    );
    for region in &report.regions {
        println!("  samples {}..{}", region.start_index, region.end_index);
    }
    println!("\nTotal analysis time: {:.3} ms", report.timing.total_ms);
}
