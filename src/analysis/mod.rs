// src/analysis/mod.rs

pub mod aggregate;
pub mod recommend;
pub mod tidy;

pub use aggregate::{Aggregates, CountMatrix, CountTable, Ranking};
pub use recommend::{RecommendationEntry, derive_recommendations};
pub use tidy::{distinct_cities, expand};

use crate::config::RankingOptions;
use crate::model::{PostingRecord, TidyRow};
use crate::skills::SkillNormalizer;
use crate::table::Table;

/// Everything one run derives from a batch of postings.
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    pub postings: usize,
    pub tidy: Vec<TidyRow>,
    pub aggregates: Aggregates,
    /// Distinct trimmed locations of all postings, sorted.
    pub cities: Vec<String>,
    pub recommendations: Vec<RecommendationEntry>,
    pub ranking: RankingOptions,
}

/// records → tidy rows → aggregates → recommendations.
pub fn analyze(
    records: &[PostingRecord],
    normalizer: &SkillNormalizer,
    ranking: &RankingOptions,
) -> Analysis {
    let tidy = expand(records, normalizer);
    let aggregates = Aggregates::build(&tidy);
    let cities = distinct_cities(records);
    let recommendations = derive_recommendations(&cities, &aggregates, ranking);

    tracing::debug!(
        postings = records.len(),
        tidy_rows = tidy.len(),
        skills = aggregates.skill_count(),
        counted = aggregates.count_by_location_skill().total(),
        cities = cities.len(),
        "analysis done"
    );

    Analysis {
        postings: records.len(),
        tidy,
        aggregates,
        cities,
        recommendations,
        ranking: ranking.clone(),
    }
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.tidy.is_empty()
    }

    pub fn tidy_table(&self) -> Table {
        Table::new(&TidyRow::HEADERS).with_rows(self.tidy.iter().map(TidyRow::to_row).collect())
    }

    /// location × skill
    pub fn city_skill_matrix(&self) -> CountMatrix {
        self.aggregates.count_by_location_skill().pivot()
    }

    /// skill × role
    pub fn skill_role_matrix(&self) -> CountMatrix {
        self.aggregates.count_by_skill_role().pivot()
    }

    pub fn recommendations_table(&self) -> Table {
        Table::new(&RecommendationEntry::HEADERS)
            .with_rows(self.recommendations.iter().map(RecommendationEntry::to_row).collect())
    }

    /// All cities × the overall top `chart_top_k` skills.
    pub fn overall_chart(&self) -> CountMatrix {
        let skills = aggregate::names(&self.aggregates.top_k_overall(self.ranking.chart_top_k));
        CountMatrix::select(self.aggregates.count_by_location_skill(), &self.cities, &skills)
    }

    /// The city's top `chart_top_k` skills as a one-column matrix; `None` without skills.
    pub fn city_chart(&self, city: &str) -> Option<CountMatrix> {
        let top = self.aggregates.top_k_for_city(city, self.ranking.chart_top_k);
        if top.is_empty() {
            return None;
        }
        Some(CountMatrix {
            row_labels: aggregate::names(&top),
            col_labels: vec![s!(city)],
            cells: top.iter().map(|(_, n)| vec![*n]).collect(),
        })
    }
}
