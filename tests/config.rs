// tests/config.rs
use std::fs;
use std::path::PathBuf;

use skillmap::config::{self, AppOptions, ExportFormat};
use skillmap::{SkillNormalizer, SkillmapError};

#[test]
fn defaults_match_documented_constants() {
    let opts = AppOptions::default();
    assert_eq!(opts.ranking.global_hot_k, 15);
    assert_eq!(opts.ranking.focus_k, 5);
    assert_eq!(opts.ranking.hot_limit, 5);
    assert_eq!(opts.ranking.chart_top_k, 10);
    assert_eq!(opts.export.out_dir, PathBuf::from("outputs"));
    assert_eq!(opts.export.format, ExportFormat::Csv);
    assert_eq!(opts.collect.max_token_words, 6);
    assert_eq!(opts.collect.roles.len(), 5);
}

#[test]
fn toml_file_overrides_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("skillmap.toml");
    fs::write(
        &path,
        r#"
[ranking]
focus_k = 3

[export]
out_dir = "reports"
format = "tsv"
heatmaps = false

[vocabulary.aliases]
"k8s" = "Kubernetes"
"#,
    )
    .unwrap();

    let opts = config::load(Some(path.as_path())).unwrap();
    assert_eq!(opts.ranking.focus_k, 3);
    assert_eq!(opts.ranking.global_hot_k, 15);
    assert_eq!(opts.export.out_dir, PathBuf::from("reports"));
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert!(!opts.export.heatmaps && opts.export.workbook);

    // file aliases merge into the built-in table
    let n = SkillNormalizer::new(&opts.vocabulary);
    assert_eq!(n.normalize("K8s"), "Kubernetes");
    assert_eq!(n.normalize("pytorch"), "PyTorch");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = config::load(Some(tmp.path().join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(err, SkillmapError::MissingConfig(_)));
}

#[test]
fn malformed_file_is_a_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.toml");
    fs::write(&path, "[ranking]\nfocus_k = \"many\"\n").unwrap();
    let err = config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, SkillmapError::Config(_)));
}

#[test]
fn gui_out_dir_text() {
    let mut opts = AppOptions::default();
    opts.export.set_out_dir("  ");
    assert_eq!(opts.export.out_dir, PathBuf::from("outputs"));
    opts.export.set_out_dir(" results ");
    assert_eq!(opts.export.out_dir, PathBuf::from("results"));
    assert_eq!(opts.export.table_path("tidy_postings"), PathBuf::from("results").join("tidy_postings.csv"));
}
