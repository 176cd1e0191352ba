//! Content sections and their default documents.
//!
//! Each section maps to one document in the store, keyed by a fixed path.
//! The defaults below are the authoritative fallback for every top-level
//! field: readers never see a missing or `null` field.

use serde_json::{json, Value};

/// A content section of the portfolio site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Experience,
    Projects,
    TechStack,
    Certifications,
    Testimonials,
    Contact,
    Footer,
    BeyondCoding,
    Network,
    QuickNav,
}

impl Section {
    pub const ALL: [Self; 12] = [
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::TechStack,
        Self::Certifications,
        Self::Testimonials,
        Self::Contact,
        Self::Footer,
        Self::BeyondCoding,
        Self::Network,
        Self::QuickNav,
    ];

    /// Resolve a URL slug into a section.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "hero" => Some(Self::Hero),
            "about" => Some(Self::About),
            "experience" => Some(Self::Experience),
            "projects" => Some(Self::Projects),
            "tech-stack" => Some(Self::TechStack),
            "certifications" => Some(Self::Certifications),
            "testimonials" => Some(Self::Testimonials),
            "contact" => Some(Self::Contact),
            "footer" => Some(Self::Footer),
            "beyond-coding" => Some(Self::BeyondCoding),
            "network" => Some(Self::Network),
            "quick-nav" => Some(Self::QuickNav),
            _ => None,
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::TechStack => "tech-stack",
            Self::Certifications => "certifications",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
            Self::Footer => "footer",
            Self::BeyondCoding => "beyond-coding",
            Self::Network => "network",
            Self::QuickNav => "quick-nav",
        }
    }

    /// Fixed document path for this section in the store.
    #[must_use]
    pub fn document_path(self) -> String {
        format!("content/{}", self.slug())
    }

    /// Hard-coded default document for this section.
    ///
    /// Every top-level field a reader can observe has a value here.
    #[must_use]
    pub fn defaults(self) -> Value {
        match self {
            Self::Hero => json!({
                "title": "Hello, I build software.",
                "subtitle": "Full-stack engineer",
                "tagline": "",
                "cta_label": "View my work",
                "cta_href": "#projects",
                "social_links": [],
            }),
            Self::About => json!({
                "heading": "About",
                "paragraphs": [],
                "photo_url": "",
                "resume_url": "",
            }),
            Self::Experience => json!({
                "heading": "Experience",
                "roles": [],
            }),
            Self::Projects => json!({
                "heading": "Projects",
                "projects": [],
            }),
            Self::TechStack => json!({
                "heading": "Tech Stack",
                "categories": [],
            }),
            Self::Certifications => json!({
                "heading": "Certifications",
                "certifications": [],
            }),
            Self::Testimonials => json!({
                "heading": "Testimonials",
                "testimonials": [],
            }),
            Self::Contact => json!({
                "heading": "Get in Touch",
                "email": "",
                "location": "",
                "form_enabled": true,
                "social_links": [],
            }),
            Self::Footer => json!({
                "text": "",
                "links": [],
            }),
            Self::BeyondCoding => json!({
                "heading": "Beyond Coding",
                "interests": [],
            }),
            Self::Network => json!({
                "heading": "Network",
                "platforms": [],
            }),
            Self::QuickNav => json!({
                "links": [],
            }),
        }
    }
}
