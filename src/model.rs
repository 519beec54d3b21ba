// src/model.rs

/// The skills cell of a posting as it arrived.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RawSkills {
    /// Free text, e.g. `"Python; SQL, AWS"`.
    Text(String),
    /// Already split upstream; items are taken as tokens.
    List(Vec<String>),
    /// Absent cell. Parses like `""`.
    #[default]
    Missing,
}

impl RawSkills {
    /// Text form for writing back to a postings CSV.
    pub fn to_cell(&self) -> String {
        match self {
            RawSkills::Text(text) => text.clone(),
            RawSkills::List(items) => items.join(", "),
            RawSkills::Missing => s!(),
        }
    }
}

impl From<&str> for RawSkills {
    fn from(text: &str) -> Self {
        RawSkills::Text(s!(text))
    }
}

impl From<String> for RawSkills {
    fn from(text: String) -> Self {
        RawSkills::Text(text)
    }
}

impl From<Vec<String>> for RawSkills {
    fn from(items: Vec<String>) -> Self {
        RawSkills::List(items)
    }
}

/// One job posting. Missing text fields are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostingRecord {
    pub job_title: String,
    pub role: String,
    pub location: String,
    pub company: String,
    pub raw_skills: RawSkills,
}

impl PostingRecord {
    pub fn new(
        job_title: impl Into<String>,
        role: impl Into<String>,
        location: impl Into<String>,
        company: impl Into<String>,
        raw_skills: impl Into<RawSkills>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            role: role.into(),
            location: location.into(),
            company: company.into(),
            raw_skills: raw_skills.into(),
        }
    }

    /// Location as used for grouping: trimmed, case kept.
    pub fn city(&self) -> &str {
        self.location.trim()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.job_title.clone(),
            self.role.clone(),
            self.location.clone(),
            self.company.clone(),
            self.raw_skills.to_cell(),
        ]
    }
}

/// A posting exploded to exactly one normalized, non-empty skill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TidyRow {
    pub job_title: String,
    pub role: String,
    pub location: String,
    pub company: String,
    pub skill: String,
}

impl TidyRow {
    pub const HEADERS: [&'static str; 5] = ["job_title", "role", "location", "company", "skill"];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.job_title.clone(),
            self.role.clone(),
            self.location.clone(),
            self.company.clone(),
            self.skill.clone(),
        ]
    }
}
