//! The literal data the page is built from.
//!
//! Nothing in here is computed: changing what the site says means editing
//! these constants and recompiling.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Id of the section this entry scrolls to.
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectItem {
    pub index: u8,
    pub description: &'static str,
}

impl ProjectItem {
    pub fn title(&self) -> String {
        format!("Project {}", self.index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconGlyph {
    pub path: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    TextArea { rows: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

pub const BRAND: &str = "Rizwan.dev";

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", anchor: "home" },
    NavItem { label: "Skills", anchor: "skills" },
    NavItem { label: "Projects", anchor: "projects" },
    NavItem { label: "Contact", anchor: "contact" },
];

pub const HERO_HEADING: &str = "Full\u{2011}Stack Engineer";
pub const HERO_TAGLINE: &str =
    "I architect scalable systems with enterprise\u{2011}grade performance and modern UI/UX standards.";
pub const HERO_PRIMARY_ACTION: &str = "Hire Me";
pub const HERO_SECONDARY_ACTION: &str = "Download CV";

pub const SKILLS_HEADING: &str = "Tech Stack";
pub const SKILLS: [&str; 8] = [
    "Java",
    "Spring Boot",
    "React.js",
    "Docker",
    "Kubernetes",
    "PostgreSQL",
    "AWS",
    "CI/CD",
];

const PROJECT_BLURB: &str =
    "High\u{2011}performance full\u{2011}stack application with microservice\u{2011}ready architecture.";

pub const PROJECTS_HEADING: &str = "Featured Projects";
pub const PROJECT_ACTION: &str = "View Details \u{2192}";
pub const PROJECTS: [ProjectItem; 3] = [
    ProjectItem { index: 1, description: PROJECT_BLURB },
    ProjectItem { index: 2, description: PROJECT_BLURB },
    ProjectItem { index: 3, description: PROJECT_BLURB },
];

pub const CONTACT_HEADING: &str = "Contact";
pub const CONTACT_TAGLINE: &str = "Let\u{2019}s build something impactful.";
pub const CONTACT_FIELDS: [FormField; 3] = [
    FormField { placeholder: "Your Name", kind: FieldKind::Input },
    FormField { placeholder: "Email", kind: FieldKind::Input },
    FormField { placeholder: "Message", kind: FieldKind::TextArea { rows: 4 } },
];
pub const CONTACT_SUBMIT: &str = "Send Message";

pub const SOCIAL_ICONS: [IconGlyph; 3] = [
    IconGlyph { path: "M16 8a6 6 0 11-12 0 6 6 0 0112 0z" },
    IconGlyph { path: "M4 4l16 16M20 4L4 20" },
    IconGlyph { path: "M12 2l4 20-4-4-4 4 4-20z" },
];

pub const FOOTER_NOTE: &str = "\u{a9} 2025 Rizwan \u{2022} Premium Portfolio";
