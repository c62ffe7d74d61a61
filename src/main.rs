use anyhow::Context;
use clap::Parser;
use employee_records::app::render_employees;
use employee_records::utils::logger;
use employee_records::{CliConfig, RecordImporter};
use std::fs::File;
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 設定錯誤時還沒有 subscriber，直接輸出到 stderr
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if settings.log_json {
        logger::init_json_logger(&settings.log_level);
    } else {
        logger::init_cli_logger(&settings.log_level);
    }
    tracing::debug!("Settings: {:?}", settings);

    match run(&settings) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when some records were rejected.
fn run(settings: &employee_records::Settings) -> anyhow::Result<bool> {
    let importer = RecordImporter::new(settings.input_format).with_fail_fast(settings.fail_fast);

    let report = match &settings.input_path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            importer.import_reader(file)?
        }
        None => importer.import_reader(io::stdin().lock())?,
    };

    if !report.accepted.is_empty() {
        println!("{}", render_employees(&report.accepted, settings.output_format)?);
    }

    for rejection in &report.rejected {
        eprintln!("⚠️  record {}: {}", rejection.location, rejection.error);
    }

    if !report.is_clean() {
        tracing::warn!(
            "{} of {} records rejected",
            report.rejected.len(),
            report.total()
        );
    }

    Ok(report.is_clean())
}
