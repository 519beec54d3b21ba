// src/analysis/recommend.rs
use std::collections::HashSet;

use super::aggregate::{Aggregates, names};
use crate::config::RankingOptions;
use crate::config::consts::RECOMMENDATION_NOTE;

/// Per-city advice derived from local and global rankings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecommendationEntry {
    pub city: String,
    /// Top local skills.
    pub focus_skills: Vec<String>,
    /// Local skills that are also globally hot, local rank order.
    pub hot_skills: Vec<String>,
}

impl RecommendationEntry {
    pub const HEADERS: [&'static str; 4] = [
        "city",
        "recommend_focus_skills",
        "hot_skills_here_and_globally",
        "note",
    ];

    pub fn focus_joined(&self) -> String {
        self.focus_skills.join(", ")
    }

    pub fn hot_joined(&self) -> String {
        self.hot_skills.join(", ")
    }

    pub fn note(&self) -> &'static str {
        RECOMMENDATION_NOTE
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.city.clone(),
            self.focus_joined(),
            self.hot_joined(),
            s!(self.note()),
        ]
    }
}

/// One entry per city, in the order given.
pub fn derive_recommendations(
    cities: &[String],
    aggregates: &Aggregates,
    ranking: &RankingOptions,
) -> Vec<RecommendationEntry> {
    let hot: HashSet<String> = names(&aggregates.top_k_overall(ranking.global_hot_k))
        .into_iter()
        .collect();

    cities
        .iter()
        .map(|city| {
            let local = aggregates.city_ranking(city);
            let focus_skills = local
                .iter()
                .take(ranking.focus_k)
                .map(|(skill, _)| skill.clone())
                .collect();
            let hot_skills = local
                .iter()
                .filter(|(skill, _)| hot.contains(skill))
                .take(ranking.hot_limit)
                .map(|(skill, _)| skill.clone())
                .collect();

            RecommendationEntry { city: city.clone(), focus_skills, hot_skills }
        })
        .collect()
}
