use crate::SelectionArgs;
use logscope_core::{ExposedLoggerRegistry, ExposureConfig, ManagedLoggerTable, StaticNameSource};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};
use tracing::info;

pub struct SelectOptions {
    pub config: Option<PathBuf>,
    pub selection: SelectionArgs,
    pub backend: Option<String>,
    pub domain: Option<String>,
}

#[derive(Tabled)]
struct ExposedRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Key")]
    key: String,
}

/// Merge the optional config file with command-line overrides.
fn resolve_config(options: SelectOptions) -> Result<ExposureConfig, Box<dyn std::error::Error>> {
    let mut config = match options.config {
        Some(path) => ExposureConfig::from_path(&path)?,
        None => {
            let base = options
                .selection
                .base
                .clone()
                .ok_or("--base is required without --config")?;
            let levels = options
                .selection
                .levels
                .ok_or("--levels is required without --config")?;
            ExposureConfig::new(base, levels)
        }
    };

    if let Some(base) = options.selection.base {
        config.name = base;
    }
    if let Some(levels) = options.selection.levels {
        config.levels = levels;
    }
    if options.selection.omit_class_loggers {
        config.omit_class_loggers = true;
    }
    if let Some(backend) = options.backend {
        config.backend = backend;
    }
    if let Some(domain) = options.domain {
        config.domain = domain;
    }
    Ok(config)
}

fn read_names(files: &[PathBuf]) -> std::io::Result<StaticNameSource> {
    if files.is_empty() {
        return StaticNameSource::from_reader(std::io::stdin().lock());
    }

    let mut source = StaticNameSource::default();
    for path in files {
        source.extend(StaticNameSource::from_reader(BufReader::new(File::open(path)?))?);
    }
    Ok(source)
}

pub fn run(
    options: SelectOptions,
    json: bool,
    files: Vec<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(options)?;
    let discovery = config.discovery()?;
    let source = read_names(&files)?;
    info!("Read {} logger names", source.len());

    let registry = ExposedLoggerRegistry::new();
    let mut managed = ManagedLoggerTable::new(config.backend()?);
    let report = discovery.run(&source, &registry, &mut managed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.exposed.is_empty() {
        println!("No loggers to expose.");
        return Ok(());
    }

    let rows: Vec<ExposedRow> = report
        .exposed
        .iter()
        .zip(&report.registered)
        .map(|(logger, key)| ExposedRow {
            name: logger.name().to_string(),
            group: logger.group().unwrap_or("-").to_string(),
            key: key.clone(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::psql()).to_string());
    Ok(())
}
