//! Static copy and link tables rendered by the landing page.

use crate::domain::{LoginOptionKind, SectionId};

pub const PRODUCT_NAME: &str = "Sarathi";
pub const COPYRIGHT: &str = "© 2024 Sarathi Field Management System. All rights reserved.";
pub const REPORT_PROBLEM_HREF: &str = "register_problem.php";

pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const CONTACT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
pub const CONTACT_NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

impl NavItem {
    pub fn section_id(&self) -> SectionId {
        SectionId::from(self.section)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub text: &'static str,
    pub href: &'static str,
}

impl FooterLink {
    /// In-page anchors (`#team`) map to a section; anything else is an
    /// outbound link.
    pub fn section(&self) -> Option<SectionId> {
        self.href
            .strip_prefix('#')
            .filter(|anchor| !anchor.is_empty())
            .map(SectionId::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginPortal {
    pub icon: &'static str,
    pub text: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOption {
    pub kind: LoginOptionKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", section: SectionId::HOME },
    NavItem { label: "Features", section: SectionId::FEATURES },
    NavItem { label: "About", section: SectionId::ABOUT },
    NavItem { label: "Team", section: SectionId::TEAM },
    NavItem { label: "Contact", section: SectionId::CONTACT },
];

pub const HERO_TITLE_LEAD: &str = "Streamline Your ";
pub const HERO_TITLE_ACCENT: &str = "Field Operations";
pub const HERO_TITLE_TAIL: &str = " with Precision";
pub const HERO_BLURB: &str = "Sarathi provides a comprehensive field management platform for tracking attendance, managing tasks, and coordinating teams efficiently across various industries.";

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { icon: "👥", value: "5000+", label: "Active Users" },
    HeroStat { icon: "✔", value: "99%", label: "Accuracy Rate" },
    HeroStat { icon: "🕑", value: "24/7", label: "Support" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "📍",
        title: "Smart Attendance",
        description: "Location-based check-ins with real-time tracking and automated reporting for accurate attendance management.",
    },
    Feature {
        icon: "☑",
        title: "Task Management",
        description: "Assign, track, and manage field tasks with priority levels, deadlines, and progress monitoring.",
    },
    Feature {
        icon: "📅",
        title: "Leave & Shift Management",
        description: "Streamline leave requests and shift scheduling with automated approvals and calendar integration.",
    },
    Feature {
        icon: "📷",
        title: "Photo Reports",
        description: "Capture and tag field photos with GPS metadata for comprehensive visual documentation.",
    },
    Feature {
        icon: "📊",
        title: "Analytics Dashboard",
        description: "Gain insights with detailed analytics and customizable reports for data-driven decisions.",
    },
    Feature {
        icon: "📱",
        title: "Mobile Ready",
        description: "Fully responsive platform that works seamlessly across all devices and screen sizes.",
    },
];

pub const ABOUT_HEADING: &str = "Streamlining Field Operations";
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "At Sarathi, we're committed to transforming field operations through innovative technology. Our platform is designed to simplify complex processes and enhance productivity across various industries.",
    "We focus on creating intuitive solutions that address real-world challenges in field management, from attendance tracking to comprehensive reporting.",
];

pub const MISSION_CARDS: &[Feature] = &[
    Feature {
        icon: "🎯",
        title: "Precision Focus",
        description: "Accurate and reliable solutions",
    },
    Feature {
        icon: "💡",
        title: "Innovation Driven",
        description: "Continuous improvement",
    },
];

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Kaustubh Nagavekar",
        role: "Founder & CEO",
        description: "Leading the vision and strategy",
    },
    TeamMember {
        name: "Pratik",
        role: "Product Lead",
        description: "Driving product development",
    },
    TeamMember {
        name: "Laxman",
        role: "Technical Lead",
        description: "Architecting technical solutions",
    },
    TeamMember {
        name: "Sanket Gudade",
        role: "Operations",
        description: "Managing implementation",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📍",
        title: "Visit Our Office",
        lines: &["123 Business Street, Suite 100", "Mumbai, India 400001"],
    },
    ContactChannel {
        icon: "📞",
        title: "Call Us",
        lines: &["+91 22 1234 5678", "Monday - Friday, 9AM-6PM"],
    },
    ContactChannel {
        icon: "✉",
        title: "Email Us",
        lines: &["info@sarathi.com", "support@sarathi.com"],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "𝕏", label: "Twitter" },
    SocialLink { icon: "in", label: "LinkedIn" },
    SocialLink { icon: "f", label: "Facebook" },
    SocialLink { icon: "◎", label: "Instagram" },
];

pub const QUICK_LINKS: &[FooterLink] = &[
    FooterLink { text: "Home", href: "#home" },
    FooterLink { text: "Features", href: "#features" },
    FooterLink { text: "About", href: "#about" },
    FooterLink { text: "Team", href: "#team" },
];

pub const RESOURCES: &[FooterLink] = &[
    FooterLink { text: "Documentation", href: "#" },
    FooterLink { text: "API", href: "#" },
    FooterLink { text: "Support", href: "#" },
    FooterLink { text: "Contact", href: "#contact" },
];

pub const VOLUNTEER_LOGIN_HREF: &str = "volunteer_login.php";
pub const ADMIN_LOGIN_HREF: &str = "adminlogin.php";
pub const VOLUNTEER_REGISTER_HREF: &str = "volunteer_request_fixed.php";

pub const LOGIN_PORTALS: &[LoginPortal] = &[
    LoginPortal { icon: "👤", text: "Volunteer Login", href: VOLUNTEER_LOGIN_HREF },
    LoginPortal { icon: "🛡", text: "Admin Login", href: ADMIN_LOGIN_HREF },
    LoginPortal { icon: "➕", text: "Create Volunteer Account", href: VOLUNTEER_REGISTER_HREF },
];

pub const LOGIN_OPTIONS: &[LoginOption] = &[
    LoginOption {
        kind: LoginOptionKind::Volunteer,
        icon: "👤",
        title: "Volunteer Login",
        description: "Access your volunteer dashboard to manage tasks, track attendance, and submit reports.",
        href: VOLUNTEER_LOGIN_HREF,
    },
    LoginOption {
        kind: LoginOptionKind::Admin,
        icon: "🛡",
        title: "Admin Login",
        description: "Access the admin panel to manage volunteers, approve requests, and view analytics.",
        href: ADMIN_LOGIN_HREF,
    },
    LoginOption {
        kind: LoginOptionKind::Register,
        icon: "➕",
        title: "Create Volunteer Account",
        description: "Register as a new volunteer. Submit your details for admin approval to get started.",
        href: VOLUNTEER_REGISTER_HREF,
    },
];
