// tests/collect.rs
use std::fs;

use skillmap::config::AppOptions;
use skillmap::{SkillmapError, runner};

const PAGE_A: &str = r#"<!doctype html>
<html><body>
  <div class="job-card">
    <h3 class="job-title">Senior Data Analyst</h3>
    <div class="company">Acme Corp</div>
    <div class="job-location">Austin, TX</div>
    <ul><li>SQL</li><li>Power BI</li><li>Excel</li><li>SQL</li></ul>
  </div>
  <div class="result-card">
    <h2 class="result-card__title">Machine Learning Engineer</h2>
    <span class="result-card__subtitle">Globex</span>
    <span class="job-result-card__location">Remote</span>
    <p>Python, PyTorch; AWS</p>
  </div>
</body></html>"#;

const PAGE_B: &str = r#"<html><body>
  <article data-job-card>
    <h2>BI Developer</h2>
    <span class="company-name">Initech</span>
    <span class="location">Boston</span>
    Tableau • DAX
  </article>
</body></html>"#;

const PASSTHROUGH: &str = "skills,job_title,extra\n\"Spark, Scala\",Data Engineer,x\n";

#[test]
fn collects_pages_and_csv_in_name_order() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("saved_pages");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a_listing.html"), PAGE_A).unwrap();
    fs::write(src.join("b_listing.HTM"), PAGE_B).unwrap();
    fs::write(src.join("c_more.csv"), PASSTHROUGH).unwrap();
    fs::write(src.join("notes.txt"), "ignored").unwrap();

    let mut opts = AppOptions::default();
    opts.collect.source_dir = src;
    opts.collect.out = tmp.path().join("out").join("collected_jobs.csv");

    let summary = runner::collect(&opts, None).unwrap();
    assert_eq!(summary.rows, 4);
    assert_eq!(summary.files_read, 3);
    assert!(summary.skipped.is_empty());

    let text = fs::read_to_string(&opts.collect.out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "job_title,role,location,company,skills");
    assert_eq!(lines[1], "Senior Data Analyst,Data Analyst,\"Austin, TX\",Acme Corp,\"Excel, Power BI, SQL\"");
    assert_eq!(lines[2], "Machine Learning Engineer,,Remote,Globex,\"AWS, PyTorch, Python\"");
    // no list or paragraphs: the whole card text is tokenized
    assert_eq!(lines[3], "BI Developer,BI Developer,Boston,Initech,\"BI Developer Initech Boston Tableau, DAX\"");
    assert_eq!(lines[4], "Data Engineer,,,,\"Spark, Scala\"");
}

#[test]
fn collected_file_feeds_the_analyzer() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("pages");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("page.html"), PAGE_A).unwrap();

    let mut opts = AppOptions::default();
    opts.collect.source_dir = src;
    opts.collect.out = tmp.path().join("jobs.csv");
    opts.export.out_dir = tmp.path().join("outputs");
    runner::collect(&opts, None).unwrap();

    let analysis = runner::load_and_analyze(&opts, &opts.collect.out).unwrap();
    assert_eq!(analysis.cities, vec!["Austin, TX", "Remote"]);
    assert_eq!(analysis.tidy.len(), 6);
}

#[test]
fn missing_source_dir_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.collect.source_dir = tmp.path().join("nowhere");
    opts.collect.out = tmp.path().join("jobs.csv");

    let err = runner::collect(&opts, None).unwrap_err();
    assert!(matches!(err, SkillmapError::MissingSource(_)));
    assert!(!opts.collect.out.exists());
}

#[test]
fn empty_source_dir_writes_header_only() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.collect.source_dir = tmp.path().to_path_buf();
    opts.collect.out = tmp.path().join("jobs.csv");

    let summary = runner::collect(&opts, None).unwrap();
    assert_eq!(summary.rows, 0);
    assert_eq!(fs::read_to_string(&opts.collect.out).unwrap(), "job_title,role,location,company,skills\n");
}

#[test]
fn malformed_csv_is_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("saved_pages");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a_listing.html"), PAGE_B).unwrap();
    fs::write(src.join("b_broken.csv"), b"job_title,skills\n\xff\xfe,SQL\n").unwrap();

    let mut opts = AppOptions::default();
    opts.collect.source_dir = src.clone();
    opts.collect.out = tmp.path().join("collected_jobs.csv");

    let summary = runner::collect(&opts, None).unwrap();
    assert_eq!(summary.rows, 1);
    assert_eq!(summary.files_read, 1);
    assert_eq!(summary.skipped, vec![src.join("b_broken.csv")]);
}
