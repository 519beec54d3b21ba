// tests/pipeline.rs
use std::collections::HashSet;

use skillmap::analysis::{aggregate::names, analyze, distinct_cities, expand};
use skillmap::config::RankingOptions;
use skillmap::{PostingRecord, RawSkills, SkillNormalizer};

fn posting(role: &str, location: &str, skills: &str) -> PostingRecord {
    PostingRecord::new("Job", role, location, "Co", skills)
}

fn austin() -> Vec<PostingRecord> {
    vec![
        posting("Data Analyst", "Austin", "SQL, Power BI, Power BI"),
        posting("Data Analyst", "Austin", "sql,Tableau"),
    ]
}

fn sample() -> Vec<PostingRecord> {
    vec![
        posting("Data Analyst", "Austin", "SQL; Excel; Tableau"),
        posting("Data Scientist", " Austin ", "Python, SQL, pytorch"),
        posting("Data Scientist", "Boston", "Python | R | sql"),
        posting("ML Engineer", "Boston", "Python\naws\nDocker\nKubernetes"),
        posting("BI Developer", "Chicago", "powerbi, SQL, DAX"),
        posting("Business Analyst", "Denver", ""),
        posting("Data Analyst", "Chicago", "Excel, sql, Looker, dbt, Airflow, Snowflake"),
    ]
}

#[test]
fn end_to_end_austin() {
    let a = analyze(&austin(), &SkillNormalizer::default(), &RankingOptions::default());
    let counts = a.aggregates.count_by_location_skill();

    // duplicates within a posting are kept
    assert_eq!(a.tidy.len(), 5);
    assert_eq!(counts.get("Austin", "SQL"), 2);
    assert_eq!(counts.get("Austin", "Power BI"), 2);
    assert_eq!(counts.get("Austin", "Tableau"), 1);
    assert_eq!(names(&a.aggregates.top_k_for_city("Austin", 2)), vec!["Power BI", "SQL"]);
}

#[test]
fn row_count_is_conserved() {
    let a = analyze(&sample(), &SkillNormalizer::default(), &RankingOptions::default());
    let n = a.tidy.len() as u64;
    assert_eq!(a.aggregates.count_by_location_skill().total(), n);
    assert_eq!(a.aggregates.count_by_skill_role().total(), n);
    assert_eq!(a.aggregates.global_skill_totals().values().sum::<u64>(), n);
    for m in [a.city_skill_matrix(), a.skill_role_matrix()] {
        assert_eq!(m.cells.iter().flatten().sum::<u64>(), n);
    }
}

#[test]
fn duplicates_are_preserved() {
    let rows = expand(&[posting("r", "X", "SQL, SQL, AWS")], &SkillNormalizer::default());
    let skills: Vec<&str> = rows.iter().map(|r| r.skill.as_str()).collect();
    assert_eq!(skills, vec!["SQL", "SQL", "AWS"]);
}

#[test]
fn tidy_rows_never_hold_empty_skills() {
    let records = vec![
        posting("r", "X", " ; , |"),
        PostingRecord { raw_skills: RawSkills::Missing, ..posting("r", "X", "") },
        PostingRecord { raw_skills: RawSkills::List(vec!["".into(), " sql ".into()]), ..posting("r", "X", "") },
    ];
    let rows = expand(&records, &SkillNormalizer::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].skill, "SQL");
}

#[test]
fn location_is_trimmed_only() {
    let rows = expand(
        &[posting("r", "  new york ", "sql"), posting("r", "New York", "sql")],
        &SkillNormalizer::default(),
    );
    assert_eq!(rows[0].location, "new york");
    assert_eq!(rows[1].location, "New York");
    assert_eq!(
        distinct_cities(&[posting("r", "  new york ", ""), posting("r", "New York", "")]),
        vec!["New York", "new york"]
    );
}

#[test]
fn top_k_is_bounded() {
    let a = analyze(&sample(), &SkillNormalizer::default(), &RankingOptions::default());
    for city in &a.cities {
        let top = a.aggregates.top_k_for_city(city, 5);
        assert!(top.len() <= 5);
        assert_eq!(top.is_empty(), a.aggregates.city_ranking(city).is_empty());
    }
    assert!(a.aggregates.top_k_for_city("Chicago", 5).len() == 5);
    assert!(a.aggregates.top_k_for_city("Denver", 5).is_empty());
    assert!(a.aggregates.top_k_for_city("Atlantis", 5).is_empty());
    assert!(a.aggregates.top_k_for_city("", 5).is_empty());
}

#[test]
fn recommendations_cover_every_city() {
    let a = analyze(&sample(), &SkillNormalizer::default(), &RankingOptions::default());
    let cities: Vec<&str> = a.recommendations.iter().map(|r| r.city.as_str()).collect();
    assert_eq!(cities, vec!["Austin", "Boston", "Chicago", "Denver"]);

    let denver = &a.recommendations[3];
    assert!(denver.focus_skills.is_empty() && denver.hot_skills.is_empty());
    assert_eq!(denver.note(), "Focus on the above skills for better interview alignment in this city.");

    let austin = &a.recommendations[0];
    assert_eq!(austin.focus_skills[0], "SQL");
    assert_eq!(austin.focus_joined(), "SQL, Excel, PyTorch, Python, Tableau");
}

#[test]
fn hot_skills_are_globally_and_locally_ranked() {
    let ranking = RankingOptions { global_hot_k: 3, ..RankingOptions::default() };
    let a = analyze(&sample(), &SkillNormalizer::default(), &ranking);
    let global: HashSet<String> = names(&a.aggregates.top_k_overall(3)).into_iter().collect();
    assert_eq!(global, ["SQL", "Python", "Excel"].iter().map(|s| s.to_string()).collect());

    for rec in &a.recommendations {
        let local: HashSet<String> = names(&a.aggregates.city_ranking(&rec.city)).into_iter().collect();
        assert!(rec.hot_skills.len() <= ranking.hot_limit);
        for skill in &rec.hot_skills {
            assert!(global.contains(skill) && local.contains(skill), "{skill} in {}", rec.city);
        }
    }

    let boston = a.recommendations.iter().find(|r| r.city == "Boston").unwrap();
    assert_eq!(boston.hot_skills, vec!["Python", "SQL"]);
}

#[test]
fn empty_input_gives_empty_outputs() {
    let a = analyze(&[], &SkillNormalizer::default(), &RankingOptions::default());
    assert!(a.is_empty());
    assert!(a.cities.is_empty());
    assert!(a.recommendations.is_empty());
    assert!(a.aggregates.top_k_overall(15).is_empty());
    assert!(a.overall_chart().is_empty());
}

#[test]
fn charts_follow_chart_top_k() {
    let ranking = RankingOptions { chart_top_k: 2, ..RankingOptions::default() };
    let a = analyze(&sample(), &SkillNormalizer::default(), &ranking);

    let overall = a.overall_chart();
    assert_eq!(overall.row_labels, vec!["Austin", "Boston", "Chicago", "Denver"]);
    assert_eq!(overall.col_labels, vec!["SQL", "Python"]);
    assert_eq!(overall.cells[3], vec![0, 0]);

    let boston = a.city_chart("Boston").unwrap();
    assert_eq!(boston.row_labels, vec!["Python", "AWS"]);
    assert_eq!(boston.col_labels, vec!["Boston"]);
    assert!(a.city_chart("Denver").is_none());
}
