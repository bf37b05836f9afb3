//! Static page content: section identifiers and every list the page renders.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::PortfolioError;

/// An in-page section. The anchor id doubles as the navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    About,
    Skills,
    Projects,
    Design,
    Photography,
    Social,
    Contact,
}

impl SectionId {
    /// Document order, top to bottom.
    pub const ALL: [SectionId; 7] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Design,
        SectionId::Photography,
        SectionId::Social,
        SectionId::Contact,
    ];

    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Design => "Design",
            SectionId::Photography => "Photography",
            SectionId::Social => "Social",
            SectionId::Contact => "Contact",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parses a `location.hash` value such as `#Contact`.
    pub fn from_fragment(fragment: &str) -> Result<Self, PortfolioError> {
        fragment.strip_prefix('#').unwrap_or(fragment).parse()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.anchor() == s)
            .ok_or_else(|| PortfolioError::UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Language,
    Tool,
    Design,
}

impl SkillCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SkillCategory::Language => "Language",
            SkillCategory::Tool => "Tool",
            SkillCategory::Design => "Design",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0 to 100.
    pub level: u8,
    pub category: SkillCategory,
}

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub const SKILLS: [Skill; 10] = [
    skill("Java", 65, SkillCategory::Language),
    skill("Python", 70, SkillCategory::Language),
    skill("C / C++", 60, SkillCategory::Language),
    skill("HTML/CSS/JS", 72, SkillCategory::Language),
    skill("MySQL", 62, SkillCategory::Language),
    skill("Gemini AI", 68, SkillCategory::Tool),
    skill("Telegram Bot API", 75, SkillCategory::Tool),
    skill("Adobe Illustrator", 70, SkillCategory::Design),
    skill("Canva", 80, SkillCategory::Design),
    skill("Git", 55, SkillCategory::Tool),
];

pub const STRENGTHS: [&str; 6] = [
    "Problem Solving",
    "Quick Learner",
    "Team Collaboration",
    "Creative Thinking",
    "Communication",
    "Social Responsibility",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        figure: "4th",
        label: "Year CSE",
    },
    Stat {
        figure: "1",
        label: "AI Project",
    },
    Stat {
        figure: "3+",
        label: "Design Tools",
    },
    Stat {
        figure: "2027",
        label: "Graduation",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

const fn card(icon: &'static str, title: &'static str, text: &'static str) -> Card {
    Card { icon, title, text }
}

pub const TOOL_CARDS: [Card; 4] = [
    card(
        "⚙️",
        "IDEs & Version Control",
        "NetBeans IDE for Java development; Git for version control and collaborative workflows.",
    ),
    card(
        "🤖",
        "AI Integration",
        "Gemini API integration for context-aware, multilingual AI-powered applications.",
    ),
    card(
        "📬",
        "Bot Development",
        "Telegram Bot API: building automated, intelligent bots with real-world utility.",
    ),
    card(
        "🎨",
        "Creative Suite",
        "Adobe Illustrator for vector art; Canva for rapid, polished design production.",
    ),
];

pub const DESIGN_CARDS: [Card; 4] = [
    card(
        "📱",
        "Social Media Design",
        "Scroll-stopping visuals crafted for engagement: brand-consistent, audience-aware, platform-optimised.",
    ),
    card(
        "🪧",
        "Poster & Banner Design",
        "Event posters, academic banners, and promotional materials with bold compositional choices.",
    ),
    card(
        "✏️",
        "UI Layouts",
        "Clean interface compositions with strong typographic hierarchy and purposeful negative space.",
    ),
    card(
        "🎭",
        "Brand Compositions",
        "Cohesive brand-style visuals that communicate identity through color, form, and typography.",
    ),
];

/// Label and name pairs shown under the design cards.
pub const DESIGN_TOOLS: [(&str, &str); 2] = [
    ("Primary Tool", "Adobe Illustrator"),
    ("Rapid Design", "Canva"),
];

pub const SOCIAL_CARDS: [Card; 3] = [
    card(
        "🤝",
        "Voluntary Service",
        "Active participation in community service projects and student support programs.",
    ),
    card(
        "📋",
        "Event Coordination",
        "Planning and executing university and community events with full logistical ownership.",
    ),
    card(
        "👥",
        "Team Leadership",
        "Building collaborative teams and guiding them toward shared objectives.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub tech: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub credit: &'static str,
    pub repo_url: &'static str,
}

pub const FEATURED_PROJECT: Project = Project {
    tech: "Python · Telegram Bot API · Gemini AI",
    name: "MetroMate",
    description: "An intelligent AI-powered Telegram bot built for university students. MetroMate delivers class routines, faculty information, and course content in both Bangla and English, using Gemini AI for context-aware academic Q&A with conversation memory.",
    features: &[
        "Academic Info Retrieval",
        "AI-Powered Q&A",
        "Bangla & English",
        "Context-Aware",
        "Easy Deployment",
        "Conversation Memory",
    ],
    credit: "Developed with Nahidul Islam Roni",
    repo_url: "https://github.com/ubaydafox/AI_Project",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const GENRES: [Genre; 2] = [
    Genre {
        name: "Nature",
        icon: "🌿",
        description: "Landscapes, flora, and the quiet beauty of the natural world.",
    },
    Genre {
        name: "Portrait",
        icon: "👤",
        description: "Human expression, emotion, and the stories behind the eyes.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// Web links open in a new tab; `tel:` and `mailto:` hand off to the OS.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("https://") || self.href.starts_with("http://")
    }
}

pub const CONTACT_LINKS: [ContactLink; 5] = [
    ContactLink {
        icon: "📞",
        label: "Phone",
        value: "01607896458",
        href: "tel:01607896458",
    },
    ContactLink {
        icon: "✉️",
        label: "Email",
        value: "ubaydaazad@gmail.com",
        href: "mailto:ubaydaazad@gmail.com",
    },
    ContactLink {
        icon: "💼",
        label: "LinkedIn",
        value: "abu-ubayda-131bb3190",
        href: "https://www.linkedin.com/in/abu-ubayda-131bb3190",
    },
    ContactLink {
        icon: "💻",
        label: "GitHub",
        value: "ubaydafox",
        href: "https://github.com/ubaydafox",
    },
    ContactLink {
        icon: "📸",
        label: "Instagram",
        value: "ubaydafox",
        href: "https://instagram.com/ubaydafox",
    },
];

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub initials: &'static str,
    pub roles: [&'static str; 4],
    pub tagline: &'static str,
    pub degree: &'static str,
    pub university: &'static str,
    pub graduation: u16,
    pub organization: &'static str,
    pub position: &'static str,
    pub location: &'static str,
    pub country: &'static str,
    pub availability: &'static str,
    pub currently: &'static str,
    pub instagram: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Roles joined with middle dots, as used in the hero and footer.
    pub fn role_line(&self) -> String {
        self.roles.join(" · ")
    }
}

pub const PROFILE: Profile = Profile {
    first_name: "Abu",
    last_name: "Ubayda",
    initials: "AU",
    roles: ["CSE Student", "Developer", "Designer", "Photographer"],
    tagline: "crafting digital experiences where code meets creativity.",
    degree: "B.Sc. in Computer Science & Engineering",
    university: "Metropolitan University, Sylhet",
    graduation: 2027,
    organization: "Students Welfare",
    position: "Organising Secretary",
    location: "Sylhet",
    country: "Bangladesh",
    availability: "Available for remote work",
    currently: "4th year CSE student, developing AI-powered solutions, leading student welfare initiatives, and capturing the world through photography.",
    instagram: "https://instagram.com/ubaydafox",
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonLd<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: String,
    job_title: &'a str,
    email: Option<&'a str>,
    telephone: Option<&'a str>,
    address: AddressLd<'a>,
    alumni_of: OrganizationLd<'a>,
    knows_about: Vec<&'a str>,
    same_as: Vec<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressLd<'a> {
    #[serde(rename = "@type")]
    kind: &'a str,
    address_locality: &'a str,
    address_country: &'a str,
}

#[derive(Serialize)]
struct OrganizationLd<'a> {
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
}

/// schema.org `Person` structured data for the document head.
pub fn person_json_ld() -> Result<String, serde_json::Error> {
    let link_target = |scheme: &str| {
        CONTACT_LINKS
            .iter()
            .find_map(|c| c.href.strip_prefix(scheme))
    };
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: PROFILE.full_name(),
        job_title: "Software Developer",
        email: link_target("mailto:"),
        telephone: link_target("tel:"),
        address: AddressLd {
            kind: "PostalAddress",
            address_locality: PROFILE.location,
            address_country: PROFILE.country,
        },
        alumni_of: OrganizationLd {
            kind: "CollegeOrUniversity",
            name: PROFILE.university,
        },
        knows_about: SKILLS.iter().map(|s| s.name).collect(),
        same_as: CONTACT_LINKS
            .iter()
            .filter(|c| c.is_external())
            .map(|c| c.href)
            .collect(),
    };
    serde_json::to_string(&person)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_and_anchors() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["About", "Skills", "Projects", "Design", "Photography", "Social", "Contact"]
        );
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(id.to_string(), id.anchor());
        }
    }

    #[test]
    fn test_section_parsing() {
        for id in SectionId::ALL {
            assert_eq!(id.anchor().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(SectionId::from_fragment("#Contact"), Ok(SectionId::Contact));
        assert_eq!(SectionId::from_fragment("Skills"), Ok(SectionId::Skills));
        assert_eq!(
            SectionId::from_fragment("#contact"),
            Err(PortfolioError::UnknownSection("contact".to_string()))
        );
        assert!(SectionId::from_fragment("").is_err());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        let python = SKILLS
            .iter()
            .find(|s| s.name == "Python")
            .expect("python should be listed");
        assert_eq!(python.level, 70);
        assert_eq!(python.category.label(), "Language");
    }

    #[test]
    fn test_contact_links() {
        let external: Vec<&str> = CONTACT_LINKS
            .iter()
            .filter(|c| c.is_external())
            .map(|c| c.label)
            .collect();
        assert_eq!(external, vec!["LinkedIn", "GitHub", "Instagram"]);
        assert!(CONTACT_LINKS.iter().any(|c| c.href.starts_with("tel:")));
        assert!(CONTACT_LINKS.iter().any(|c| c.href.starts_with("mailto:")));
    }

    #[test]
    fn test_profile_lines() {
        assert_eq!(PROFILE.full_name(), "Abu Ubayda");
        assert_eq!(
            PROFILE.role_line(),
            "CSE Student · Developer · Designer · Photographer"
        );
    }

    #[test]
    fn test_person_json_ld() {
        let json = person_json_ld().expect("profile should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], "Abu Ubayda");
        assert_eq!(value["email"], "ubaydaazad@gmail.com");
        assert_eq!(value["telephone"], "01607896458");
        assert_eq!(value["address"]["addressCountry"], "Bangladesh");
        assert_eq!(value["alumniOf"]["name"], PROFILE.university);
        assert_eq!(value["sameAs"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["knowsAbout"][1], "Python");
    }
}
