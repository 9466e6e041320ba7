use std::{fmt, str::FromStr};

use thiserror::Error;

/// A named, vertically contiguous region of the page.
///
/// The string form is the DOM `id` of the section element and the target of
/// navigation clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Projects,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [Self::Home, Self::Projects, Self::About, Self::Contact];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    /// Navigation label, the id with its first letter upper-cased.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "projects" => Ok(Self::Projects),
            "about" => Ok(Self::About),
            "contact" => Ok(Self::Contact),
            other => Err(SectionError::UnknownSection(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("section registry must contain at least one section")]
    EmptyRegistry,
    #[error("section registered twice: {0}")]
    DuplicateSection(SectionId),
}

/// Ordered set of sections on the page.
///
/// Order is both the navigation order and the tie-break priority when more
/// than one section sits under the anchor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<SectionId>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<SectionId>) -> Result<Self, SectionError> {
        if sections.is_empty() {
            return Err(SectionError::EmptyRegistry);
        }
        for (i, id) in sections.iter().enumerate() {
            if sections[..i].contains(id) {
                return Err(SectionError::DuplicateSection(*id));
            }
        }
        Ok(Self { sections })
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().copied()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self {
            sections: SectionId::ALL.to_vec(),
        }
    }
}

/// Viewport-relative vertical extent of a section, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the horizontal line `y` passes through this section,
    /// edges included.
    pub fn contains_line(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Live layout of the page's sections.
///
/// Returns `None` for a section that is not currently in the document.
pub trait SectionGeometry {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds>;
}

impl<F> SectionGeometry for F
where
    F: Fn(SectionId) -> Option<SectionBounds>,
{
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self(id)
    }
}
