use anyhow::Result;
use chrono::Local;
use tracing::{info, info_span};

use mdr_cli::config::{ConfigOverrides, resolve_config};
use mdr_cli::pipeline::{
    ExportFormat, OutputConfig, TableShape, check, compare, export, ingest, resolve_output_path,
};
use mdr_output::ExportOptions;

use crate::cli::{CompareArgs, ExportFormatArg, InputArgs};
use crate::types::CompareResult;

pub fn run_compare(args: &CompareArgs) -> Result<CompareResult> {
    let build = &args.inputs.build;
    let repository = &args.inputs.repository;
    let span = info_span!("run", build = %build.display());
    let _guard = span.enter();

    let config = resolve_config(args.config.as_deref(), overrides_from_args(args))?;
    let tables = ingest(build, repository)?;
    let comparison = compare(&tables, &config)?;

    let report = if args.no_export {
        info!("report export skipped");
        None
    } else {
        let output = output_config_from_args(args);
        let path = resolve_output_path(build, &output, &Local::now());
        export(&comparison, &path, &output)?;
        Some(path)
    };

    Ok(CompareResult {
        build: build.clone(),
        repository: repository.clone(),
        config,
        comparison,
        report,
    })
}

pub fn run_check(args: &InputArgs) -> Result<Vec<TableShape>> {
    let span = info_span!("check", build = %args.build.display());
    let _guard = span.enter();
    check(&args.build, &args.repository)
}

fn overrides_from_args(args: &CompareArgs) -> ConfigOverrides {
    ConfigOverrides {
        volume_marker: args.volume.clone(),
        libraries: args.libraries.clone(),
        path_delimiter: args.delimiter.clone(),
        include_conditionally_required: args.include_conditional,
    }
}

fn output_config_from_args(args: &CompareArgs) -> OutputConfig {
    let mut options = ExportOptions::default().with_overwrite(args.overwrite);
    if let Some(header) = &args.annotation_column {
        options = options.with_annotation_column(header.clone());
    }
    OutputConfig {
        output: args.output.clone(),
        output_dir: args.output_dir.clone(),
        format: match args.format {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
        },
        options,
    }
}
