//! Hand-authored narrative insights, grouped into titled sections.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::Pillar;

const EMBEDDED: &str = include_str!("../assets/insights.json");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Glyph shown next to the bullet.
    pub fn icon(&self) -> &'static str {
        match self {
            Sentiment::Positive => "⬆",
            Sentiment::Negative => "⬇",
            Sentiment::Neutral => "➖",
        }
    }
}

/// One bullet. Bullets without a tagged sentiment read as neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    #[serde(default)]
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSection {
    pub id: String,
    pub title: String,
    pub pillar: Pillar,
    pub insights: Vec<Insight>,
}

/// Immutable collection of all insight sections, in authoring order.
#[derive(Debug, Clone, Default)]
pub struct InsightCatalog {
    sections: Vec<InsightSection>,
}

impl InsightCatalog {
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED).context("parsing embedded insights")
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let sections: Vec<InsightSection> = serde_json::from_str(text)?;
        Ok(InsightCatalog { sections })
    }

    pub fn section(&self, id: &str) -> Option<&InsightSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn for_pillar(&self, pillar: Pillar) -> impl Iterator<Item = &InsightSection> {
        self.sections.iter().filter(move |s| s.pillar == pillar)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
