//! Static personal data shown on the site.

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

const PORTFOLIO_JSON: &str = include_str!("../data/portfolio.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub nav_links: Vec<NavLink>,
    pub about: About,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub chart: Chart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub name: String,
    pub first_name: String,
    pub dob: String,
    pub location: String,
    pub email: String,
    pub title: String,
    pub typing_strings: Vec<TypingStep>,
    pub soft_skills: Vec<String>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub programming_languages: Vec<String>,
    pub interests: Vec<String>,
}

/// One phrase of the hero typing animation and how long it stays on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingStep {
    pub text: String,
    pub pause_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub name: String,
    pub level: String,
    pub pct: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub frontend: Vec<Skill>,
    pub backend: Vec<Skill>,
    pub tools: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github_url: String,
    pub case_study: Option<CaseStudy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub overview: String,
    pub challenge: String,
    pub solution: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub results: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub role: String,
    pub company: String,
    pub description: Vec<String>,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    pub labels: Vec<String>,
    pub data: Vec<u32>,
}

impl Portfolio {
    /// Load the data embedded at build time.
    pub fn load() -> Result<Self> {
        Self::from_json(PORTFOLIO_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let portfolio: Self =
            serde_json::from_str(json).context("Failed to parse portfolio data")?;
        portfolio.check()?;

        Ok(portfolio)
    }

    fn check(&self) -> Result<()> {
        ensure!(
            self.chart.labels.len() == self.chart.data.len(),
            "chart has {} labels but {} values",
            self.chart.labels.len(),
            self.chart.data.len()
        );

        let skills = self
            .skills
            .frontend
            .iter()
            .chain(&self.skills.backend)
            .chain(&self.skills.tools);

        for skill in skills {
            ensure!(
                skill.level <= 100,
                "skill {} has level {} above 100",
                skill.name,
                skill.level
            );
        }

        for language in &self.about.spoken_languages {
            ensure!(
                language.pct <= 100,
                "language {} has proficiency {} above 100",
                language.name,
                language.pct
            );
        }

        Ok(())
    }
}
