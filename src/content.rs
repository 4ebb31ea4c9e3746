use chrono::Datelike;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

/// Parsed once, on first access, and shared for the lifetime of the process.
pub static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| load().expect("bundled portfolio content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse content: {0}")]
    Parse(String),
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Code,
    Database,
    Brain,
    Globe,
    Star,
    Zap,
    Sparkles,
    Phone,
    Mail,
    Linkedin,
    Github,
    Calendar,
    Award,
    ExternalLink,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Database => "🗄",
            Self::Brain => "🧠",
            Self::Globe => "🌐",
            Self::Star => "★",
            Self::Zap => "⚡",
            Self::Sparkles => "✨",
            Self::Phone => "📞",
            Self::Mail => "✉",
            Self::Linkedin => "in",
            Self::Github => "gh",
            Self::Calendar => "📅",
            Self::Award => "🏆",
            Self::ExternalLink => "↗",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Code => "icon icon-code",
            Self::Database => "icon icon-database",
            Self::Brain => "icon icon-brain",
            Self::Globe => "icon icon-globe",
            Self::Star => "icon icon-star",
            Self::Zap => "icon icon-zap",
            Self::Sparkles => "icon icon-sparkles",
            Self::Phone => "icon icon-phone",
            Self::Mail => "icon icon-mail",
            Self::Linkedin => "icon icon-linkedin",
            Self::Github => "icon icon-github",
            Self::Calendar => "icon icon-calendar",
            Self::Award => "icon icon-award",
            Self::ExternalLink => "icon icon-external-link",
        }
    }
}

/// Tailwind gradient stops, e.g. `from-blue-400 to-purple-600`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gradient(pub String);

impl Gradient {
    pub fn background(&self) -> String {
        format!("bg-gradient-to-r {}", self.0)
    }

    pub fn text(&self) -> String {
        format!("bg-gradient-to-r {} bg-clip-text text-transparent", self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub phone_href: String,
    pub footer: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub skills: Vec<String>,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
    pub gradient: Gradient,
    pub icon: Icon,
    pub milestone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub specialization: String,
    pub institution: String,
    pub period: String,
    pub score: String,
    pub scale: String,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub contacts: Vec<ContactLink>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
}

impl Portfolio {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.email.trim().is_empty() || self.profile.phone.trim().is_empty() {
            return Err(ContentError::Invalid(
                "profile needs an email and a phone number".to_string(),
            ));
        }
        if let Some(c) = self.skills.iter().find(|c| c.skills.is_empty()) {
            return Err(ContentError::Invalid(format!(
                "skill category '{}' has no skills",
                c.title
            )));
        }
        if let Some(e) = self.experience.iter().find(|e| e.description.is_empty()) {
            return Err(ContentError::Invalid(format!(
                "experience '{}' at '{}' has no description",
                e.title, e.company
            )));
        }
        let gradients = self
            .contacts
            .iter()
            .map(|c| (&c.label, &c.gradient))
            .chain(self.skills.iter().map(|c| (&c.title, &c.gradient)))
            .chain(self.experience.iter().map(|e| (&e.title, &e.gradient)))
            .chain(self.projects.iter().map(|p| (&p.title, &p.gradient)))
            .chain(self.education.iter().map(|e| (&e.degree, &e.gradient)));
        for (owner, gradient) in gradients {
            if gradient.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "'{owner}' has an empty gradient"
                )));
            }
        }
        Ok(())
    }
}

pub fn parse(json: &str) -> Result<Portfolio, ContentError> {
    let portfolio = serde_json::from_str::<Portfolio>(json)
        .map_err(|e| ContentError::Parse(e.to_string()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

pub fn load() -> Result<Portfolio, ContentError> {
    let file = ContentAssets::get(PORTFOLIO_FILE)
        .ok_or_else(|| ContentError::Missing(PORTFOLIO_FILE.to_string()))?;
    let json = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    let portfolio = parse(json)?;
    log::debug!(
        "loaded portfolio: {} skill categories, {} roles, {} projects",
        portfolio.skills.len(),
        portfolio.experience.len(),
        portfolio.projects.len()
    );
    Ok(portfolio)
}

pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

/// Year the site was built, for the footer.
pub fn copyright_year() -> Option<i32> {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|built| built.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_loads() {
        let p = load().expect("bundled content should load");
        assert_eq!(p.profile.name, "Imran Shaikh");
        assert_eq!(p.skills.len(), 4);
        assert_eq!(p.experience.len(), 3);
        assert_eq!(p.projects.len(), 2);
        assert_eq!(p.certifications.len(), 1);
    }

    #[test]
    fn test_list_order_is_display_order() {
        let p = portfolio();
        let titles = p.skills.iter().map(|c| c.title.as_str()).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Programming Languages",
                "Web Technologies",
                "ML & Data Science",
                "Database Technologies"
            ]
        );
        assert_eq!(p.experience[0].company, "Maskottchen Technologies");
        assert_eq!(p.experience[2].milestone, "💼 Professional Growth");
    }

    #[test]
    fn test_outbound_links() {
        let p = portfolio();
        assert_eq!(p.profile.mailto(), "mailto:imranance99@gmail.com");
        assert!(p.profile.phone_href.starts_with("tel:"));
        assert!(p.contacts.iter().any(|c| c.href.starts_with("mailto:")));
        assert!(p.contacts.iter().any(|c| c.href == "#"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(parse("{"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_empty_skills() {
        let mut p = portfolio().clone();
        p.skills[1].skills.clear();
        let err = p.validate().unwrap_err();
        assert_eq!(
            err,
            ContentError::Invalid("skill category 'Web Technologies' has no skills".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_empty_gradient() {
        let mut p = portfolio().clone();
        p.projects[0].gradient = Gradient("  ".to_string());
        assert!(matches!(p.validate(), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_gradient_classes() {
        let g = Gradient("from-pink-400 to-red-400".to_string());
        assert_eq!(g.background(), "bg-gradient-to-r from-pink-400 to-red-400");
        assert!(g.text().ends_with("bg-clip-text text-transparent"));
    }

    #[test]
    fn test_copyright_year_from_build_time() {
        let year = copyright_year().expect("build.rs stamps an RFC 3339 time");
        assert!(year >= 2024);
    }

    #[test]
    fn test_icon_names() {
        let icon: Icon = serde_json::from_str("\"external-link\"").unwrap();
        assert_eq!(icon, Icon::ExternalLink);
        assert_eq!(Icon::Brain.class(), "icon icon-brain");
    }
}
