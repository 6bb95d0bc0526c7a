use std::time::Duration;

use crate::typewriter::Timing;

pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub topics: &'static [&'static str],
    pub fun_fact: &'static str,
    pub image: &'static str,
    pub roles: &'static [&'static str],
}

pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    InDevelopment,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::InDevelopment => "In Development",
            Self::Completed => "Completed",
        }
    }
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub category: &'static str,
    pub status: ProjectStatus,
    pub hash: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    // plain text, needs no icon font
    pub glyph: &'static str,
}

pub struct Highlight {
    pub glyph: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// How far the page scrolls before the header gets its solid background.
pub const SOLID_HEADER_OFFSET: f64 = 50.0;

pub fn header_is_solid(scroll_y: f64) -> bool {
    scroll_y > SOLID_HEADER_OFFSET
}

pub const ROLE_TIMING: Timing = Timing {
    type_delay: Duration::from_millis(80),
    delete_delay: Duration::from_millis(40),
    pause: Duration::from_millis(2000),
};

pub const SCENE_URL: &str = "https://prod.spline.design/NbVmy6DPLhY-5Lvg/scene.splinecode";

pub const PROFILE: Profile = Profile {
    name: "CIPHER",
    handle: "swas3301",
    tagline: "Building secure systems. Breaking assumptions.",
    bio: &[
        "Working on crypto-integrated projects, from e-commerce platforms to full-scale Web3 applications.",
        "Currently deep-diving into cryptography, blockchain internals, and data structures & algorithms.",
        "Open to Web3, DeFi, and backend collaborations.",
    ],
    topics: &["DSA", "Smart Contracts", "System Design"],
    fun_fact: "Enjoys optimizing algorithms & ethically breaking blockchains",
    image: "/pfp.jpeg",
    roles: &[
        "Web3 Developer",
        "Cryptographer",
        "Backend Engineer",
        "Security Researcher",
        "DeFi Builder",
    ],
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Arsenal", href: "#skills" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        items: &[
            "C", "C++", "Java", "HTML5", "JavaScript", "Bash", "Python", "PHP", "Rust",
            "TypeScript", "Go",
        ],
    },
    SkillCategory {
        name: "Cloud & Infra",
        items: &["GCP", "AWS", "Azure", "Heroku", "Cloudflare", "Netlify"],
    },
    SkillCategory {
        name: "Frameworks",
        items: &["FastAPI", "Django", "Flask", "Next.js", "Node.js", "Vite", "Bootstrap"],
    },
    SkillCategory {
        name: "Databases",
        items: &["MongoDB", "MySQL", "SQLite", "PostgreSQL"],
    },
    SkillCategory {
        name: "DevOps & Security",
        items: &["Docker", "Apache", "Nginx", "TOR"],
    },
    SkillCategory {
        name: "ML & Testing",
        items: &["TensorFlow", "Playwright", "Selenium"],
    },
    SkillCategory {
        name: "Design",
        items: &["Figma", "Canva"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "CryptoVault DeFi",
        description: "Decentralized finance protocol with yield farming, staking, and cross-chain bridge capabilities built on Ethereum L2.",
        tech: &["Rust", "Solidity", "React", "Web3.js"],
        category: "DeFi",
        status: ProjectStatus::Active,
        hash: "0x7f3a...b2c1",
    },
    Project {
        id: 2,
        title: "ZK-Auth Protocol",
        description: "Zero-knowledge authentication system for privacy-preserving identity verification on-chain.",
        tech: &["TypeScript", "Circom", "Next.js", "Ethereum"],
        category: "Cryptography",
        status: ProjectStatus::InDevelopment,
        hash: "0x9e1d...f4a8",
    },
    Project {
        id: 3,
        title: "BlockCommerce",
        description: "E-commerce platform with integrated cryptocurrency payments and NFT-based loyalty rewards program.",
        tech: &["Python", "FastAPI", "React", "Solana"],
        category: "Web3",
        status: ProjectStatus::Active,
        hash: "0x2b5c...8d3e",
    },
    Project {
        id: 4,
        title: "NetSentinel",
        description: "Network security monitoring tool with real-time threat detection and blockchain-based audit logging.",
        tech: &["Go", "Docker", "PostgreSQL", "React"],
        category: "Security",
        status: ProjectStatus::Completed,
        hash: "0x6a4f...1c7b",
    },
];

// TODO - swap the placeholder "#" urls for real profile links
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Discord", url: "#", icon: "devicon-discord-plain" },
    SocialLink { name: "LinkedIn", url: "#", icon: "devicon-linkedin-plain" },
    SocialLink { name: "X", url: "#", icon: "devicon-twitter-original" },
    SocialLink { name: "YouTube", url: "#", icon: "devicon-youtube-plain" },
    SocialLink { name: "Instagram", url: "#", icon: "devicon-instagram-plain" },
    SocialLink { name: "Reddit", url: "#", icon: "devicon-reddit-plain" },
    SocialLink { name: "Facebook", url: "#", icon: "devicon-facebook-plain" },
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { label: "Email", value: "cipher@web3.dev", glyph: "✉" },
    ContactDetail { label: "Location", value: "Decentralized", glyph: "⌖" },
    ContactDetail { label: "Availability", value: "Open for projects", glyph: "◷" },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { glyph: "</>", label: "Focus", value: "Full-Stack & Web3" },
    Highlight { glyph: "⛨", label: "Specialty", value: "Cryptography & Security" },
    Highlight { glyph: "⚙", label: "Approach", value: "Performance-First" },
];

pub const MARQUEE_WORDS: &[&str] = &[
    "Web3",
    "Cryptography",
    "DeFi",
    "DSA",
    "Backend",
    "Security",
    "Blockchain",
    "Smart Contracts",
    "Zero Knowledge",
    "Rust",
    "System Design",
    "DevOps",
    "Ethical Hacking",
    "TypeScript",
    "Go",
    "Python",
    "Docker",
    "Solidity",
];
