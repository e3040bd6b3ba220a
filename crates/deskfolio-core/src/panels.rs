//! Static content panels hosted by Finder windows.
//!
//! Each panel is fixed data; the shell lays it out. Panels that contain
//! clickable rows expose them through [`Panel::targets`] so hit-testing and
//! URL opening stay out of the rendering code.

/// Which static panel a Finder window shows instead of the column browser.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Panel {
    About,
    Activities,
    Career,
    Links,
    Contact,
}

impl Panel {
    pub const fn heading(self) -> &'static str {
        match self {
            Panel::About => "About me",
            Panel::Activities => "Activities",
            Panel::Career => "Career",
            Panel::Links => "Connect with me",
            Panel::Contact => "Contact",
        }
    }

    /// Clickable rows, in display order, with the URL each opens.
    pub fn targets(self) -> Vec<Target> {
        match self {
            Panel::Links => LINKS
                .iter()
                .map(|l| Target { label: l.name, url: l.url.to_string() })
                .collect(),
            Panel::Contact => vec![
                Target { label: CONTACT.email, url: format!("mailto:{}", CONTACT.email) },
                Target { label: CONTACT.phone, url: format!("tel:{}", dial_string(CONTACT.phone)) },
            ],
            Panel::About | Panel::Activities | Panel::Career => Vec::new(),
        }
    }
}

/// A clickable row and the URL it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub label: &'static str,
    pub url: String,
}

// ── about ─────────────────────────────────────────────────────────────────

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub intro: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub strengths: &'static [&'static str],
}

pub static ABOUT: Profile = Profile {
    name: "Woosung Jo",
    role: "DevOps Engineer / Python Backend",
    intro: &[
        "Hello.",
        "I'm Woosung Jo, a developer who picks up new things quickly and puts them to use.",
        "Python is my main language, and lately I've been studying DevOps.",
    ],
    tech: &["Python", "Javascript", "FastAPI", "Docker", "Kubernetes", "AWS"],
    strengths: &[
        "Creative problem solving",
        "Open communication",
        "Quick to adapt",
        "Applying technology",
    ],
};

// ── activities ────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ActivityKind {
    Event,
    Work,
    Award,
}

pub struct Activity {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ActivityKind,
}

pub struct ActivityYear {
    pub year: &'static str,
    pub items: &'static [Activity],
}

const fn act(title: &'static str, description: &'static str, kind: ActivityKind) -> Activity {
    Activity { title, description, kind }
}

pub static ACTIVITIES: &[ActivityYear] = &[
    ActivityYear {
        year: "2025",
        items: &[act("SK Shieldus Rookies", "Bootcamp run by SK Shieldus", ActivityKind::Work)],
    },
    ActivityYear {
        year: "2023",
        items: &[
            act("NAVER DEVIEW", "Attended NAVER's tech conference", ActivityKind::Event),
            act("ETRI research trainee", "Two-month research assignment at ETRI", ActivityKind::Work),
        ],
    },
    ActivityYear {
        year: "2022",
        items: &[
            act("NAVER Software Yanolja", "Mentored younger students in AI", ActivityKind::Event),
            act(
                "Spring conference award",
                "Best paper at the Korean Institute of Intelligent Systems conference",
                ActivityKind::Award,
            ),
            act(
                "CDS big data contest award",
                "Grand prize in Hanyang University's big data contest",
                ActivityKind::Award,
            ),
            act("AI-X hackathon", "Idea hackathon built around AI", ActivityKind::Event),
            act("Goyang datathon", "Built an AI model from public big data", ActivityKind::Event),
            act("ICT Hanium", "Project mentored by LG CNS engineers", ActivityKind::Event),
        ],
    },
    ActivityYear {
        year: "2021",
        items: &[
            act("AWS DeepRacer", "Reinforcement-learning DeepRacer with AWS", ActivityKind::Event),
            act("Game development club", "Mentor in the university game club", ActivityKind::Event),
        ],
    },
    ActivityYear {
        year: "2016",
        items: &[
            act("GIGDC high school award", "Bronze prize for a first solo game", ActivityKind::Award),
            act("AppJam", "Game development hackathon", ActivityKind::Work),
        ],
    },
];

// ── career ────────────────────────────────────────────────────────────────

pub struct CareerEntry {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub static CAREER: &[CareerEntry] = &[
    CareerEntry {
        company: "UINetworks",
        position: "Python Developer",
        period: "2023.09 - 2024.12",
        description: "Big data processing algorithms; built a Kafka replacement for an air-gapped network.",
        tech: &["Python", "Sumo", "React", "RockyLinux"],
    },
    CareerEntry {
        company: "ETRI",
        position: "Research Trainee",
        period: "2023.06 - 2023.08",
        description: "Set up and benchmarked VP models, then visualised results on video.",
        tech: &["Python", "ROS2", "Computer Vision", "Ubuntu"],
    },
];

// ── links ─────────────────────────────────────────────────────────────────

pub struct ExternalLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub static LINKS: &[ExternalLink] = &[
    ExternalLink { name: "GitHub", url: "https://github.com/Oldentomato" },
    ExternalLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/%EC%9A%B0%EC%84%B1-%EC%A1%B0-524ab4261/",
    },
    ExternalLink { name: "Blog", url: "https://odblog.vercel.app/" },
];

// ── contact ───────────────────────────────────────────────────────────────

pub struct ContactCard {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub static CONTACT: ContactCard = ContactCard {
    email: "jwsjws99@gmail.com",
    phone: "+82 10-9161-4120",
    location: "Seoul, South Korea",
};

/// `+82 10-9161-4120` → `+821091614120`
fn dial_string(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_panel_targets() {
        let targets = Panel::Links.targets();
        let labels: Vec<_> = targets.iter().map(|t| t.label).collect();
        assert_eq!(labels, ["GitHub", "LinkedIn", "Blog"]);
        assert!(targets.iter().all(|t| t.url.starts_with("https://")));
    }

    #[test]
    fn contact_targets_use_mail_and_tel() {
        let targets = Panel::Contact.targets();
        assert_eq!(targets[0].url, "mailto:jwsjws99@gmail.com");
        assert_eq!(targets[1].url, "tel:+821091614120");
    }

    #[test]
    fn plain_panels_have_no_targets() {
        assert!(Panel::About.targets().is_empty());
        assert!(Panel::Career.targets().is_empty());
    }

    #[test]
    fn timeline_is_newest_first() {
        let years: Vec<_> = ACTIVITIES.iter().map(|y| y.year).collect();
        assert_eq!(years, ["2025", "2023", "2022", "2021", "2016"]);
        assert!(ACTIVITIES.iter().all(|y| !y.items.is_empty()));
    }
}
