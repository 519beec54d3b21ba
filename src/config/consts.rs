// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Layered config
pub const CONFIG_FILE: &str = "skillmap.toml";
pub const ENV_PREFIX: &str = "SKILLMAP_";

// Collect
pub const DEFAULT_SOURCE_DIR: &str = "saved_pages";
pub const DEFAULT_COLLECTED_FILE: &str = "collected_jobs.csv";
pub const DEFAULT_MAX_TOKEN_WORDS: usize = 6;
pub const DEFAULT_ROLES: [&str; 5] = [
    "Data Scientist",
    "Data Analyst",
    "Business Analyst",
    "ML Engineer",
    "BI Developer",
];
pub const CARD_SELECTOR: &str =
    "[data-job-card], .job-card, .result-card, .job-listing, .occludable-update";
pub const TITLE_SELECTOR: &str = ".job-title, .result-card__title, h3, h2, .title";
pub const COMPANY_SELECTOR: &str = ".company, .result-card__subtitle, .company-name";
pub const LOCATION_SELECTOR: &str = ".job-location, .job-result-card__location, .location";

// Postings CSV
pub const POSTING_COLUMNS: [&str; 5] = ["job_title", "role", "location", "company", "skills"];
pub const NA_MARKERS: [&str; 11] = [
    "", "NaN", "nan", "NA", "N/A", "n/a", "NULL", "null", "None", "<NA>", "#N/A",
];

// Export
pub const DEFAULT_OUT_DIR: &str = "outputs";
pub const HEATMAP_OVERALL_FILE: &str = "heatmap_top10_overall_skills_by_city.png";
pub const WORKBOOK_FILE: &str = "skill_role_matrix.xlsx";
pub const RECOMMENDATIONS_CSV: &str = "recommendations_by_city.csv";
pub const RECOMMENDATIONS_TXT: &str = "recommendations.txt";
pub const TIDY_STEM: &str = "tidy_postings";
pub const CITY_SKILL_STEM: &str = "city_vs_skill";
pub const SKILL_ROLE_STEM: &str = "skill_vs_role";

// Heatmap text
pub const CHART_FONT_FAMILY: &str = "sans-serif";
pub const FONT_CANDIDATES: [&str; 8] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

// Workbook sheets
pub const SHEET_SKILL_ROLE: &str = "Skill_vs_Role";
pub const SHEET_CITY_SKILL: &str = "City_vs_Skill";
pub const SHEET_TIDY: &str = "Tidy_Postings";

// Ranking
pub const GLOBAL_HOT_K: usize = 15;
pub const CITY_FOCUS_K: usize = 5;
pub const HOT_LIMIT: usize = 5;
pub const CHART_TOP_K: usize = 10;

pub const RECOMMENDATION_NOTE: &str =
    "Focus on the above skills for better interview alignment in this city.";
