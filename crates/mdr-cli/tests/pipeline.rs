//! Integration tests for the command-line pipeline stages.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use mdr_cli::config::{ConfigOverrides, load_config_file, resolve_config};
use mdr_cli::pipeline::{
    ExportFormat, OutputConfig, check, compare, export, ingest, resolve_output_path,
};
use mdr_output::ExportOptions;

const REPOSITORY_HEADER: &str = "f_ver,mdes_form_name,mde_name,item_refname,crf_collection_guidance,mandatory_to_be_collected,mde_is_cond_reqd,library,latest";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn fixtures() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let build = write(
        dir.path(),
        "rcc_build.csv",
        "RefName Path,Variable Name\n\
         DM001 >> Demographics,DMCAT\n\
         DM001 >> Demographics,SEX\n\
         DM001_1 >> Demographics,SEX\n\
         AE001_1 >> Adverse Events,AETERM\n",
    );
    let repository = write(
        dir.path(),
        "mdr_repository.csv",
        &format!(
            "{REPOSITORY_HEADER}\n\
             Volume 3 2025R1,DM001,Category,DMCAT,Record once,True,False,Core,True\n\
             Volume 3 2025R1,DM001,Sex,SEX,,True,False,Core,True\n\
             Volume 3 2025R1,AE001,Term,AETERM,,True,False,Core,True\n\
             Volume 3 2025R1,AE001,Start Date,AESTDAT,Partial dates allowed,True,True,Core,True\n\
             Volume 3 2024R2,AE001,Outcome,AEOUT,,True,False,Core,False\n\
             Volume 2 2025R1,AE001,Serious,AESER,,True,False,Core,True\n\
             Volume 3 2025R1,AE001,Severity,AESEV,,True,False,Oncology,True\n"
        ),
    );
    (dir, build, repository)
}

#[test]
fn compare_reports_missing_items_per_instance() {
    let (_dir, build, repository) = fixtures();
    let tables = ingest(&build, &repository).unwrap();
    let config = resolve_config(None, ConfigOverrides::default()).unwrap();
    let comparison = compare(&tables, &config).unwrap();

    let keys: Vec<(&str, &str)> = comparison
        .rows
        .iter()
        .map(|row| (row.form_name.as_str(), row.item_name.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("AE001_1", "AESEV"),
            ("AE001_1", "AESTDAT"),
            ("DM001_1", "DMCAT")
        ]
    );
    assert_eq!(comparison.stats.build_rows, 4);
    assert_eq!(comparison.stats.repository_rows, 7);
    assert_eq!(comparison.stats.form_instances, 3);
}

#[test]
fn library_override_narrows_scope() {
    let (_dir, build, repository) = fixtures();
    let tables = ingest(&build, &repository).unwrap();
    let config = resolve_config(
        None,
        ConfigOverrides {
            libraries: vec!["Core".to_string()],
            ..ConfigOverrides::default()
        },
    )
    .unwrap();
    let comparison = compare(&tables, &config).unwrap();
    assert!(comparison.rows.iter().all(|row| row.item_name != "AESEV"));
    assert_eq!(comparison.rows.len(), 2);
}

#[test]
fn config_file_is_loaded_and_overridden() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "compare.toml",
        "volume_marker = \"Volume 2\"\nallowed_libraries = [\"Core\"]\n",
    );
    let loaded = load_config_file(&path).unwrap();
    assert_eq!(loaded.volume_marker, "Volume 2");

    let resolved = resolve_config(
        Some(&path),
        ConfigOverrides {
            volume_marker: Some("Volume 3".to_string()),
            include_conditionally_required: true,
            ..ConfigOverrides::default()
        },
    )
    .unwrap();
    assert_eq!(resolved.volume_marker, "Volume 3");
    assert!(resolved.include_conditionally_required);
    assert!(resolved.allows_library("Core"));
    assert!(!resolved.allows_library("Oncology"));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "compare.toml", "volume = \"Volume 3\"\n");
    assert!(load_config_file(&path).is_err());
}

#[test]
fn check_reports_shapes_and_missing_columns() {
    let (dir, build, repository) = fixtures();
    let shapes = check(&build, &repository).unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].rows, 4);
    assert_eq!(shapes[0].columns, 2);
    assert_eq!(shapes[1].columns, 9);
    assert!(shapes.iter().all(|shape| shape.sheet.is_none()));

    let broken = write(dir.path(), "broken.csv", "RefName Path\nAE001\n");
    let err = check(&broken, &repository).unwrap_err();
    assert!(format!("{err:#}").contains("Variable Name"));
}

#[test]
fn export_writes_timestamped_report_next_to_build() {
    let (dir, build, repository) = fixtures();
    let tables = ingest(&build, &repository).unwrap();
    let config = resolve_config(None, ConfigOverrides::default()).unwrap();
    let comparison = compare(&tables, &config).unwrap();

    let output = OutputConfig {
        options: ExportOptions::default().with_annotation_column("Comments"),
        ..OutputConfig::default()
    };
    let now = Utc.with_ymd_and_hms(2025, 6, 30, 17, 45, 0).unwrap();
    let path = resolve_output_path(&build, &output, &now);
    assert_eq!(
        path,
        dir.path().join("MDRComparisonOutput_2025_06_30_17_45_00.csv")
    );
    export(&comparison, &path, &output).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Form Name,Item,Type,Description,Context,Comments")
    );
    assert_eq!(lines.count(), comparison.rows.len());

    // A second run in the same second must not clobber the first report.
    assert!(export(&comparison, &path, &output).is_err());
}

#[test]
fn json_export_respects_overwrite() {
    let (dir, build, repository) = fixtures();
    let tables = ingest(&build, &repository).unwrap();
    let config = resolve_config(None, ConfigOverrides::default()).unwrap();
    let comparison = compare(&tables, &config).unwrap();

    let path = dir.path().join("report.json");
    fs::write(&path, "{}").unwrap();
    let output = OutputConfig {
        output: Some(path.clone()),
        format: ExportFormat::Json,
        ..OutputConfig::default()
    };
    let err = export(&comparison, &path, &output).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<mdr_output::OutputError>(),
        Some(mdr_output::OutputError::AlreadyExists { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

    let output = OutputConfig {
        options: ExportOptions::default().with_overwrite(true),
        ..output
    };
    export(&comparison, &path, &output).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("\"missing\": 3"));
}

fn write_build_workbook(dir: &Path, sheet: &str) -> PathBuf {
    let path = dir.join("rcc_build.xlsx");
    let mut workbook = Workbook::new();
    let items = workbook.add_worksheet();
    items.set_name(sheet).unwrap();
    let rows = [
        ["RefName Path", "Variable Name"],
        ["DM001 >> Demographics", "DMCAT"],
        ["DM001 >> Demographics", "SEX"],
        ["DM001_1 >> Demographics", "SEX"],
        ["AE001_1 >> Adverse Events", "AETERM"],
    ];
    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            items.write_string(row as u32, col as u16, *value).unwrap();
        }
    }
    workbook.save(&path).unwrap();
    path
}

#[test]
fn workbook_build_compares_like_csv() {
    let (dir, _build, repository) = fixtures();
    let build = write_build_workbook(dir.path(), "Item");

    let shapes = check(&build, &repository).unwrap();
    assert_eq!(shapes[0].sheet, Some("Item"));
    assert_eq!(shapes[0].rows, 4);
    assert_eq!(shapes[1].sheet, None);

    let tables = ingest(&build, &repository).unwrap();
    let config = resolve_config(None, ConfigOverrides::default()).unwrap();
    let comparison = compare(&tables, &config).unwrap();
    assert_eq!(comparison.rows.len(), 3);
}

#[test]
fn workbook_without_item_sheet_fails_check() {
    let (dir, _build, repository) = fixtures();
    let build = write_build_workbook(dir.path(), "Sheet1");

    let err = check(&build, &repository).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("worksheet 'Item' not found"), "{message}");
}
