// src/analysis/aggregate.rs
use std::collections::{BTreeSet, HashMap};

use crate::model::TidyRow;
use crate::table::Table;

/// `(skill, count)` pairs, count descending, then skill ascending.
pub type Ranking = Vec<(String, u64)>;

/// Counts keyed by an ordered pair `(outer, inner)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountTable {
    rows: HashMap<String, HashMap<String, u64>>,
    total: u64,
}

impl CountTable {
    pub fn add(&mut self, outer: &str, inner: &str) {
        *self
            .rows
            .entry(s!(outer))
            .or_default()
            .entry(s!(inner))
            .or_insert(0) += 1;
        self.total += 1;
    }

    /// 0 for an absent combination.
    pub fn get(&self, outer: &str, inner: &str) -> u64 {
        self.rows
            .get(outer)
            .and_then(|row| row.get(inner))
            .copied()
            .unwrap_or(0)
    }

    pub fn row(&self, outer: &str) -> Option<&HashMap<String, u64>> {
        self.rows.get(outer)
    }

    /// Sum over all keys.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn outer_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.rows.keys().cloned().collect();
        labels.sort();
        labels
    }

    pub fn inner_labels(&self) -> Vec<String> {
        self.rows
            .values()
            .flat_map(HashMap::keys)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Dense pivot over every label, sorted on both axes.
    pub fn pivot(&self) -> CountMatrix {
        CountMatrix::select(self, &self.outer_labels(), &self.inner_labels())
    }
}

/// A 2-D count grid; absent combinations are 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountMatrix {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// `cells[r][c]`
    pub cells: Vec<Vec<u64>>,
}

impl CountMatrix {
    /// Cells for exactly the given labels, in the given order.
    pub fn select(table: &CountTable, rows: &[String], cols: &[String]) -> Self {
        let cells = rows
            .iter()
            .map(|r| cols.iter().map(|c| table.get(r, c)).collect())
            .collect();
        Self {
            row_labels: rows.to_vec(),
            col_labels: cols.to_vec(),
            cells,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells.get(row).and_then(|r| r.get(col)).copied().unwrap_or(0)
    }

    pub fn max(&self) -> u64 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty() || self.col_labels.is_empty()
    }

    /// First header is `corner` (the row axis name), then the column labels.
    pub fn to_table(&self, corner: &str) -> Table {
        let mut headers = Vec::with_capacity(self.col_labels.len() + 1);
        headers.push(s!(corner));
        headers.extend(self.col_labels.iter().cloned());

        let rows = self
            .row_labels
            .iter()
            .zip(&self.cells)
            .map(|(label, cells)| {
                let mut row = Vec::with_capacity(cells.len() + 1);
                row.push(label.clone());
                row.extend(cells.iter().map(u64::to_string));
                row
            })
            .collect();

        Table { headers, rows }
    }
}

/// Grouped counts over one tidy relation.
#[derive(Clone, Debug, Default)]
pub struct Aggregates {
    location_skill: CountTable,
    skill_role: CountTable,
    skill_totals: HashMap<String, u64>,
}

impl Aggregates {
    /// One pass over the tidy rows.
    pub fn build(rows: &[TidyRow]) -> Self {
        let mut agg = Self::default();
        for row in rows {
            agg.location_skill.add(&row.location, &row.skill);
            agg.skill_role.add(&row.skill, &row.role);
            *agg.skill_totals.entry(row.skill.clone()).or_insert(0) += 1;
        }
        agg
    }

    pub fn count_by_location_skill(&self) -> &CountTable {
        &self.location_skill
    }

    pub fn count_by_skill_role(&self) -> &CountTable {
        &self.skill_role
    }

    pub fn global_skill_totals(&self) -> &HashMap<String, u64> {
        &self.skill_totals
    }

    pub fn skill_count(&self) -> usize {
        self.skill_totals.len()
    }

    pub fn overall_ranking(&self) -> Ranking {
        rank(&self.skill_totals)
    }

    pub fn top_k_overall(&self, k: usize) -> Ranking {
        let mut ranking = self.overall_ranking();
        ranking.truncate(k);
        ranking
    }

    /// Every skill seen in `city`, ranked. Empty for an unknown city.
    pub fn city_ranking(&self, city: &str) -> Ranking {
        self.location_skill.row(city).map(rank).unwrap_or_default()
    }

    pub fn top_k_for_city(&self, city: &str, k: usize) -> Ranking {
        let mut ranking = self.city_ranking(city);
        ranking.truncate(k);
        ranking
    }
}

/// Count descending, ties by name ascending.
pub fn rank(counts: &HashMap<String, u64>) -> Ranking {
    let mut ranking: Ranking = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking
}

/// Names only, rank order kept.
pub fn names(ranking: &[(String, u64)]) -> Vec<String> {
    ranking.iter().map(|(name, _)| name.clone()).collect()
}
