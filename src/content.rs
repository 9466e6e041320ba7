use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const CONTENT_FILE: &str = "portfolio.json";

static GLOBAL_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(|| SiteContent::load(CONTENT_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("skill '{name}' has level {level}, expected 0-100")]
    SkillLevel { name: String, level: u8 },
    #[error("contact email must not be empty")]
    EmptyEmail,
    #[error("{field} is not a usable link: '{value}'")]
    InvalidLink { field: String, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteContent {
    pub owner: String,
    pub brand: String,
    pub email: String,
    pub resume: String,
    pub scheduling_url: String,
    pub github: String,
    pub linkedin: String,
    pub hero: Hero,
    pub projects: Projects,
    pub about: About,
    pub skills: Vec<Skill>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Projects {
    pub heading: String,
    pub subheading: String,
    #[serde(default)]
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0-100.
    pub level: u8,
    pub icon: SkillIcon,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Code,
    Lightbulb,
    Palette,
}

impl SkillIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Code => "💻",
            Self::Lightbulb => "💡",
            Self::Palette => "🎨",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub heading: String,
    pub subheading: String,
}

impl SiteContent {
    /// Loads and validates an embedded content file.
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_slice(bytes)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.email.trim().is_empty() {
            return Err(ContentError::EmptyEmail);
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }

        check_link("resume", &self.resume, true)?;
        check_link("scheduling_url", &self.scheduling_url, false)?;
        check_link("github", &self.github, false)?;
        check_link("linkedin", &self.linkedin, false)?;
        for project in &self.projects.items {
            check_link(&format!("link of '{}'", project.title), &project.link, false)?;
            check_link(&format!("image of '{}'", project.title), &project.image, true)?;
        }
        Ok(())
    }
}

/// Outbound targets must be absolute http(s) URLs; assets may also be
/// site-relative paths served from `public/`.
fn check_link(field: &str, value: &str, allow_site_path: bool) -> Result<(), ContentError> {
    let value = value.trim();
    let absolute = value.starts_with("https://") || value.starts_with("http://");
    let site_path = allow_site_path && value.starts_with('/') && !value.starts_with("//");
    if absolute || site_path {
        Ok(())
    } else {
        Err(ContentError::InvalidLink {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// The site's content, parsed once per process.
pub fn site_content() -> Result<&'static SiteContent, &'static ContentError> {
    GLOBAL_CONTENT.as_ref()
}
