use crate::portfolio::Metric;

pub const OWNER: &str = "Jacob Macdonnell";

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub static METRICS: [Metric; 4] = [
    Metric::new("🔒", "Vulnerabilities Patched", "500+"),
    Metric::new("👤", "Security Awareness Trainings", "50+"),
    Metric::new("⚠", "Incidents Resolved", "100+"),
    Metric::new("📈", "Security Audits Completed", "25+"),
];

pub static SKILLS: [Skill; 6] = [
    Skill {
        name: "Risk Assessment",
        level: 90,
    },
    Skill {
        name: "Governance and Compliance (NIST, ISO 27001)",
        level: 85,
    },
    Skill {
        name: "Incident Response",
        level: 80,
    },
    Skill {
        name: "Vulnerability Management",
        level: 85,
    },
    Skill {
        name: "Network Security",
        level: 75,
    },
    Skill {
        name: "Scripting (Python, PowerShell)",
        level: 70,
    },
];

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Security Awareness Program",
        description: "Designed and delivered phishing simulations and training modules for staff across the organization.",
        tags: &["Training", "Phishing", "GRC"],
    },
    Project {
        title: "Vulnerability Management Pipeline",
        description: "Automated scanning, triage and remediation tracking with prioritised reporting for asset owners.",
        tags: &["Scanning", "Automation", "Reporting"],
    },
    Project {
        title: "Compliance Gap Analysis",
        description: "Mapped existing controls against a security framework and produced a remediation roadmap.",
        tags: &["NIST CSF", "Audit", "Risk"],
    },
];
