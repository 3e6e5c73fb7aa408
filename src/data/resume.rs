//! Static biographical data rendered by the site.
//!
//! Content only: the record is a plain `static` so the whole site compiles
//! to markup with no fetching, parsing, or deserialization at runtime.
//! Free-text summary fields hold markdown and are rendered through the
//! `Markdown` component.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

#[derive(Clone, Copy, Debug)]
pub struct Resume {
    pub name: &'static str,
    pub initials: &'static str,
    pub url: &'static str,
    pub location: &'static str,
    pub location_link: &'static str,
    pub description: &'static str,
    pub summary: &'static str,
    pub avatar_url: &'static str,
    pub skills: &'static [&'static str],
    pub soft_skills: &'static [&'static str],
    pub contact: Contact,
    pub work: &'static [WorkExperience],
    pub education: &'static [Education],
    pub projects: &'static [Project],
    pub publications: &'static [Publication],
    pub courses: &'static [Course],
}

#[derive(Clone, Copy, Debug)]
pub struct Contact {
    pub email: &'static str,
    pub tel: &'static str,
    pub social: &'static [SocialLink],
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct WorkExperience {
    pub company: &'static str,
    pub href: &'static str,
    pub title: &'static str,
    pub logo_url: &'static str,
    pub location: &'static str,
    pub start: &'static str,
    /// `None` marks a position still held.
    pub end: Option<&'static str>,
    pub badges: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub school: &'static str,
    pub href: &'static str,
    pub degree: &'static str,
    pub logo_url: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub href: &'static str,
    pub dates: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub links: &'static [ProjectLink],
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Website,
    Source,
}

impl LinkKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Source => "Source",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Publication {
    pub title: &'static str,
    pub kind: &'static str,
    pub venue: &'static str,
    pub year: &'static str,
    pub link: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Course {
    pub title: &'static str,
    pub provider: &'static str,
    pub year: &'static str,
    pub certificate: &'static str,
}

/// First whitespace-separated token of the name, for the hero greeting.
#[must_use]
pub fn first_name(resume: &Resume) -> &'static str {
    resume.name.split_whitespace().next().unwrap_or("User")
}

/// Render a date range; an open end displays as "Present".
#[must_use]
pub fn period(start: &str, end: Option<&str>) -> String {
    format!("{start} - {}", end.unwrap_or("Present"))
}

pub static DATA: Resume = Resume {
    name: "Sayeeda Baqt",
    initials: "SB",
    url: "https://github.com/baqt-code",
    location: "Bengaluru, Karnataka, 560034, India",
    location_link: "https://www.google.com/maps/place/bengaluru",
    description: "Junior Engineer with hands-on experience in backend development, database management, and API integration.",
    summary: "Motivated Software Developer with hands-on experience in backend development, database management, and API integration. Strong foundation in programming fundamentals with practical exposure to web applications, data analysis, and cloud technologies. Eager to contribute to legacy system maintenance and improvement while learning modern development practices in a fast-paced environment.",
    avatar_url: "/avatar.png",
    skills: &[
        "Java",
        "Python",
        "SQL",
        "JavaScript",
        "C++",
        "Node.js",
        "RESTful API Development",
        "Machine Learning",
        "NLP",
        "MySQL",
        "Database Schema Design",
        "Google Cloud Platform",
        "Git",
        "LangChain",
        "Streamlit",
        "FAISS",
    ],
    soft_skills: &[
        "Legacy code debugging",
        "System troubleshooting",
        "Complex query optimization",
        "Problem Solving",
        "Communication",
        "Leadership",
    ],
    contact: Contact {
        email: "sayeedabaqt2711@gmail.com",
        tel: "+919481345728",
        social: &[
            SocialLink { name: "GitHub", url: "https://github.com/baqt-code" },
            SocialLink { name: "LinkedIn", url: "https://www.linkedin.com/in/sb1234567/" },
            SocialLink { name: "Email", url: "mailto:sayeedabaqt2711@gmail.com" },
        ],
    },
    work: &[
        WorkExperience {
            company: "RV Institute of Technology & Management",
            href: "https://rvitm.edu.in/",
            title: "Pilot Emergency Landing Advisor - Developer",
            logo_url: "/rvitm-logo.png",
            location: "Bengaluru, India",
            start: "Jul 2024",
            end: Some("Aug 2024"),
            badges: &["Backend Development", "Database Management"],
            description: "Built a real-time web application helping pilots locate nearby airports and emergency landing sites using geolocation services. Developed backend logic for runway availability calculations and distance optimization algorithms. Designed and implemented SQL database schema for airport data, runway specifications, and location coordinates. Integrated geolocation APIs and created RESTful endpoints for frontend communication.",
        },
        WorkExperience {
            company: "RV Institute of Technology & Management",
            href: "https://rvitm.edu.in/",
            title: "Equity Research Analysis LLM Model - Developer",
            logo_url: "/rvitm-logo.png",
            location: "Bengaluru, India",
            start: "Jun 2024",
            end: Some("Jul 2024"),
            badges: &["Data Processing", "NLP"],
            description: "Developed an intelligent research tool for financial data analysis using machine learning and natural language processing. Built data pipeline for processing large datasets and implemented efficient content retrieval system. Created interactive user interface for research analysts with real-time data visualization. Managed complex data storage and retrieval using vector databases and SQL queries.",
        },
    ],
    education: &[
        Education {
            school: "RV Institute of Technology & Management",
            href: "https://rvitm.edu.in/",
            degree: "B.E in Information Science & Engineering",
            logo_url: "/rvitm-logo.png",
            start: "Nov 2021",
            end: "Dec 2025",
            description: "GPA: 8.2\nRelevant Coursework: Database Management Systems, Software Engineering, Web Technologies, Cloud Computing",
        },
        Education {
            school: "Sri Chaitanya Techno School",
            href: "#",
            degree: "Highschool diploma in 12th Grade",
            logo_url: "/sri-chaitanya-logo.png",
            start: "Jan 2020",
            end: "May 2021",
            description: "GPA: 9.4",
        },
        Education {
            school: "Kendriya Vidyalaya Sanghatan",
            href: "#",
            degree: "Highschool diploma in 10th Grade",
            logo_url: "/kv-logo.png",
            start: "Jan 2018",
            end: "May 2019",
            description: "GPA: 9.4",
        },
    ],
    projects: &[
        Project {
            title: "Pilot Emergency Landing Advisor",
            href: "https://aircraft-plum.vercel.app",
            dates: "Jul 2024 - Aug 2024",
            description: "Web-based application designed to provide pilots with real-time information about their current flight. Features pilot and aircraft details, airport data, live location tracking, and emergency landing site suggestions. Fetches pilot/aircraft ID from backend and displays airport runway details with alternative landing sites when runways are full.",
            technologies: &[
                "JavaScript",
                "HTML",
                "CSS",
                "Node.js",
                "SQL",
                "Geolocation API",
                "RESTful API",
                "Vercel",
            ],
            links: &[
                ProjectLink { kind: LinkKind::Website, href: "https://aircraft-plum.vercel.app" },
                ProjectLink { kind: LinkKind::Source, href: "https://github.com/baqt-code/aircraft" },
            ],
            image: "/project1.png",
        },
        Project {
            title: "Sahara News Research Tool",
            href: "https://github.com/baqt-code/LLM-MODEL",
            dates: "Jun 2024 - Jul 2024",
            description: "Machine learning-powered news research application with user authentication, URL-based article data loading, text chunk processing, and FAISS vector indexing. Features AI-powered question answering system that allows users to process news article URLs and perform intelligent Q&A on processed content.",
            technologies: &[
                "Python",
                "Streamlit",
                "FAISS",
                "Machine Learning",
                "NLP",
                "Authentication",
                "Vector Database",
            ],
            links: &[
                ProjectLink { kind: LinkKind::Source, href: "https://github.com/baqt-code/LLM-MODEL" },
            ],
            image: "/project2.png",
        },
        Project {
            title: "AI Chatbot",
            href: "https://chatbot-sandy-three-72.vercel.app",
            dates: "2024",
            description: "Next.js web application with TypeScript featuring a modern chatbot interface. Built with responsive design principles and optimized for performance. Includes development server capabilities and automated deployment integration.",
            technologies: &["Next.js", "TypeScript", "React", "CSS", "Vercel", "Geist Font"],
            links: &[
                ProjectLink { kind: LinkKind::Website, href: "https://chatbot-sandy-three-72.vercel.app" },
                ProjectLink { kind: LinkKind::Source, href: "https://github.com/baqt-code/chatbot" },
            ],
            image: "/project3.png",
        },
        Project {
            title: "Personal Portfolio",
            href: "https://github.com/baqt-code/portfolio",
            dates: "2024",
            description: "Modern personal portfolio website. Features responsive design, reveal animations, and optimized performance, with content driven entirely by a static data record.",
            technologies: &["Rust", "Leptos", "WebAssembly", "Trunk", "CSS"],
            links: &[
                ProjectLink { kind: LinkKind::Source, href: "https://github.com/baqt-code/portfolio" },
            ],
            image: "/project4.png",
        },
        Project {
            title: "Machine Learning Projects",
            href: "https://github.com/baqt-code/1RF21IS048",
            dates: "2024",
            description: "Collection of machine learning and data analysis projects including K-Nearest Neighbors (KNN) algorithm implementation, wine quality prediction model, and Walmart data analysis. Built using Jupyter Notebooks with comprehensive data preprocessing and model evaluation.",
            technologies: &[
                "Python",
                "Jupyter Notebook",
                "Machine Learning",
                "KNN Algorithm",
                "Data Analysis",
                "Data Preprocessing",
            ],
            links: &[
                ProjectLink { kind: LinkKind::Source, href: "https://github.com/baqt-code/1RF21IS048" },
            ],
            image: "/project5.png",
        },
    ],
    publications: &[
        Publication {
            title: "Transformative Potential of LLMs in Healthcare",
            kind: "Research Paper",
            venue: "Indiana Journal of Multidisciplinary Research",
            year: "2024",
            link: "#",
            description: "Conducted comprehensive literature review analyzing 50+ research papers on AI applications in medical diagnostics, patient care, and clinical decision support. Investigated technical challenges in implementing LLMs within healthcare systems, including data privacy, model accuracy, and integration with existing hospital infrastructure.",
        },
    ],
    courses: &[
        Course {
            title: "Networking Basics",
            provider: "Cisco Networking Academy",
            year: "2023",
            certificate: "#",
        },
        Course { title: "Web Development", provider: "Yhills", year: "2023", certificate: "#" },
        Course { title: "Machine Learning", provider: "Acmegrade", year: "2022", certificate: "#" },
    ],
};
