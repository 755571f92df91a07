//! Fixed vocabularies shared by the extractors and analyzers.
//!
//! Declaration order matters: skills are emitted in the order they are listed
//! here, and the seniority / industry tables are evaluated top to bottom.

/// Technical skills grouped by category. Categories are only for
/// readability; matching flattens them into one list.
pub const TECHNICAL_SKILLS: &[(&str, &[&str])] = &[
    (
        "frontend",
        &[
            "react", "reactjs", "react.js", "angular", "vue", "vuejs", "vue.js",
            "javascript", "typescript", "html", "css", "sass", "scss", "bootstrap",
            "tailwind", "material-ui", "chakra", "styled-components", "webpack",
            "vite", "babel", "jquery", "d3", "chart.js", "three.js",
        ],
    ),
    (
        "backend",
        &[
            "nodejs", "node.js", "express", "nestjs", "fastify", "koa",
            "python", "django", "flask", "fastapi", "java", "spring", "spring boot",
            "c#", "asp.net", ".net", "php", "laravel", "symfony", "ruby", "rails",
            "go", "golang", "rust", "scala", "kotlin",
        ],
    ),
    (
        "databases",
        &[
            "mysql", "postgresql", "postgres", "mongodb", "redis", "sqlite",
            "oracle", "sql server", "dynamodb", "cassandra", "elasticsearch",
            "firebase", "firestore", "supabase", "prisma", "sequelize", "mongoose",
        ],
    ),
    (
        "cloud",
        &[
            "aws", "amazon web services", "azure", "gcp", "google cloud",
            "docker", "kubernetes", "k8s", "jenkins", "terraform", "ansible",
            "heroku", "vercel", "netlify", "digitalocean", "cloudflare",
        ],
    ),
    (
        "mobile",
        &[
            "react native", "flutter", "swift", "kotlin", "ionic", "xamarin",
            "android", "ios", "mobile development", "app development",
        ],
    ),
    (
        "data",
        &[
            "python", "r", "sql", "pandas", "numpy", "matplotlib", "seaborn",
            "scikit-learn", "tensorflow", "pytorch", "jupyter", "tableau",
            "power bi", "excel", "data analysis", "machine learning", "ai",
        ],
    ),
    (
        "devops",
        &[
            "docker", "kubernetes", "jenkins", "gitlab ci", "github actions",
            "terraform", "ansible", "chef", "puppet", "monitoring", "logging",
            "prometheus", "grafana", "elk stack", "ci/cd", "devops",
        ],
    ),
    (
        "tools",
        &[
            "git", "github", "gitlab", "bitbucket", "jira", "confluence",
            "slack", "teams", "figma", "sketch", "adobe", "photoshop",
            "illustrator", "indesign", "after effects", "premiere",
        ],
    ),
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "team leadership", "project management", "agile", "scrum",
    "communication", "verbal communication", "written communication",
    "teamwork", "collaboration", "cross-functional collaboration",
    "problem solving", "critical thinking", "analytical thinking",
    "strategic thinking", "creative thinking", "innovation",
    "time management", "organizational skills", "attention to detail",
    "adaptability", "flexibility", "learning agility", "growth mindset",
    "mentoring", "coaching", "training", "presentation", "public speaking",
    "client relations", "customer service", "stakeholder management",
    "conflict resolution", "negotiation", "decision making",
];

pub const MAX_TECHNICAL_SKILLS: usize = 12;
pub const MAX_SOFT_SKILLS: usize = 8;

/// Generic professional terms counted by the keyword extractor.
pub const IMPORTANT_KEYWORDS: &[&str] = &[
    "project", "team", "development", "design", "implementation",
    "management", "analysis", "optimization", "performance", "scalability",
    "security", "collaboration", "innovation", "solution", "strategy",
    "agile", "scrum", "deployment", "testing", "debugging", "architecture",
    "api", "database", "frontend", "backend", "fullstack", "responsive",
    "mobile", "web", "application", "software", "system", "platform",
];

pub const SECTION_NAMES: &[&str] = &[
    "experience", "work experience", "employment", "career",
    "education", "academic", "learning",
    "skills", "technical skills", "competencies",
    "projects", "portfolio", "accomplishments",
    "certifications", "licenses", "awards",
];

/// A resume "has sections" once this many section names appear.
pub const MIN_SECTION_MATCHES: usize = 3;

pub const ACTION_VERBS: &[&str] = &[
    "developed", "implemented", "managed", "led", "created", "designed",
    "optimized", "improved", "increased", "reduced", "achieved", "delivered",
    "built",
];

pub const SENIOR_KEYWORDS: &[&str] = &[
    "senior", "sr.", "lead", "principal", "staff", "chief", "head of",
    "director", "vp", "architect",
];

pub const MID_KEYWORDS: &[&str] = &[
    "developer", "engineer", "analyst", "specialist", "consultant", "coordinator",
];

pub const JUNIOR_KEYWORDS: &[&str] = &[
    "junior", "jr.", "intern", "trainee", "associate", "entry", "assistant",
    "graduate",
];

pub const DEGREE_KEYWORDS: &[&str] = &[
    "phd", "ph.d", "doctorate", "doctoral",
    "masters", "master's", "mba", "ms", "ma", "msc",
    "bachelor", "bachelor's", "bs", "ba", "bsc", "btech", "be",
    "associate", "associates", "diploma", "certificate",
];

pub const ADVANCED_DEGREE_KEYWORDS: &[&str] = &["phd", "ph.d", "doctorate", "masters", "master's", "mba"];

pub const INSTITUTION_KEYWORDS: &[&str] = &[
    "university", "college", "institute", "school", "academy",
    "mit", "stanford", "harvard", "berkeley", "caltech",
];

/// Title-cased soft skills that mark leadership experience.
pub const LEADERSHIP_SKILLS: &[&str] = &["Leadership", "Management", "Mentoring"];

/// Industry label and the lowercase technical skills that indicate it.
pub const INDUSTRY_MARKERS: &[(&str, &[&str])] = &[
    ("Software Development", &["react", "javascript", "nodejs", "frontend", "backend"]),
    ("Data Science", &["python", "machine learning", "tensorflow", "pandas"]),
    ("DevOps/Cloud", &["aws", "docker", "kubernetes", "devops"]),
    ("Design", &["photoshop", "illustrator", "figma", "design"]),
];

pub const DEFAULT_INDUSTRY: &str = "Technology";

/// Every technical skill in declaration order, duplicates included.
pub fn technical_skills() -> impl Iterator<Item = &'static str> {
    TECHNICAL_SKILLS.iter().flat_map(|(_, skills)| skills.iter().copied())
}
