// src/specs/job_cards.rs
use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::{CardSelectorOptions, CollectOptions};
use crate::core::sanitize::normalize_ws;
use crate::error::{Result, SkillmapError};
use crate::model::{PostingRecord, RawSkills};

/// Bullet-ish separators seen in skill blurbs.
static TOKEN_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\n\r\-\x{2022}\x{2023}]").expect("static regex"));

/// Compiled selectors for one collection run.
pub struct CardSpec {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    items: Selector,
    paragraphs: Selector,
    roles: Vec<String>,
    max_token_words: usize,
}

impl CardSpec {
    pub fn new(opts: &CollectOptions) -> Result<Self> {
        let CardSelectorOptions { card, title, company, location } = &opts.selectors;
        Ok(Self {
            card: selector(card)?,
            title: selector(title)?,
            company: selector(company)?,
            location: selector(location)?,
            items: selector("li")?,
            paragraphs: selector("p")?,
            roles: opts.roles.clone(),
            max_token_words: opts.max_token_words,
        })
    }

    /// All postings on one saved page, in document order.
    pub fn parse_page(&self, html: &str) -> Vec<PostingRecord> {
        let doc = Html::parse_document(html);
        doc.select(&self.card).map(|card| self.parse_card(card)).collect()
    }

    fn parse_card(&self, card: ElementRef<'_>) -> PostingRecord {
        let job_title = first_text(card, &self.title);
        let role = infer_role(&job_title, &self.roles);
        let tokens = extract_tokens(&self.skill_text(card), self.max_token_words);

        PostingRecord {
            role: s!(role),
            location: first_text(card, &self.location),
            company: first_text(card, &self.company),
            raw_skills: if tokens.is_empty() {
                RawSkills::Missing
            } else {
                RawSkills::Text(tokens.join(", "))
            },
            job_title,
        }
    }

    /// List items, else paragraphs, else the whole card.
    fn skill_text(&self, card: ElementRef<'_>) -> String {
        let items: Vec<String> = card.select(&self.items).map(element_text).collect();
        if !items.is_empty() {
            return items.join("\n");
        }
        let paragraphs: Vec<String> = card.select(&self.paragraphs).map(element_text).collect();
        if !paragraphs.is_empty() {
            return paragraphs.join("\n");
        }
        element_text(card)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SkillmapError::Selector {
        selector: s!(css),
        reason: format!("{e:?}"),
    })
}

/// Text nodes joined by spaces, whitespace collapsed.
fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

fn first_text(card: ElementRef<'_>, sel: &Selector) -> String {
    card.select(sel).next().map(element_text).unwrap_or_default()
}

/// Distinct candidate tokens, sorted: longer than one char, at most `max_words` words.
pub fn extract_tokens(text: &str, max_words: usize) -> Vec<String> {
    TOKEN_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|t| t.chars().count() > 1 && t.split_whitespace().count() <= max_words)
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// First role contained (case-insensitively) in the title, else `""`.
pub fn infer_role<'a>(title: &str, roles: &'a [String]) -> &'a str {
    let title = title.to_lowercase();
    roles
        .iter()
        .find(|role| title.contains(&role.to_lowercase()))
        .map(String::as_str)
        .unwrap_or("")
}
