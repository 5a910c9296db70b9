//! Static page content: who, what they build, and where to find them.

pub static OWNER: &str = "Omkar Haldankar";

pub static ROLES: &[&str] = &[
    "Full Stack Developer",
    "DevOps & CI/CD Engineer",
    "AWS Cloud Developer",
];

pub static INTRO: &str = "I build modern, scalable full-stack web applications with a strong focus on clean UI, robust backend architecture, and efficient DevOps workflows. Passionate about shipping production-ready solutions using modern web technologies and cloud platforms.";

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// devicon class, when devicon has one
    pub icon: Option<&'static str>,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        icon: Some("devicon-react-original"),
        color: "#61DAFB",
    },
    Skill {
        name: "Next.js",
        icon: Some("devicon-nextjs-plain"),
        color: "#ffffff",
    },
    Skill {
        name: "Tailwind CSS",
        icon: Some("devicon-tailwindcss-original"),
        color: "#38BDF8",
    },
    Skill {
        name: "Node.js",
        icon: Some("devicon-nodejs-plain"),
        color: "#3C873A",
    },
    Skill {
        name: "MongoDB",
        icon: Some("devicon-mongodb-plain"),
        color: "#47A248",
    },
    Skill {
        name: "PostgreSQL",
        icon: Some("devicon-postgresql-plain"),
        color: "#336791",
    },
    Skill {
        name: "Docker",
        icon: Some("devicon-docker-plain"),
        color: "#2496ED",
    },
    Skill {
        name: "AWS",
        icon: Some("devicon-amazonwebservices-plain-wordmark"),
        color: "#FF9900",
    },
    Skill {
        name: "Resend",
        icon: None,
        color: "#000000",
    },
    Skill {
        name: "Material UI",
        icon: Some("devicon-materialui-plain"),
        color: "#007FFF",
    },
    Skill {
        name: "ShadCN",
        icon: None,
        color: "#ffffff",
    },
    Skill {
        name: "Vercel",
        icon: Some("devicon-vercel-original"),
        color: "#ffffff",
    },
    Skill {
        name: "Vite",
        icon: Some("devicon-vitejs-plain"),
        color: "#646CFF",
    },
    Skill {
        name: "GitHub",
        icon: Some("devicon-github-original"),
        color: "#ffffff",
    },
    Skill {
        name: "Prisma",
        icon: Some("devicon-prisma-original"),
        color: "#ffffff",
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Food Delivery Platform",
        description: "A full-stack food delivery application that allows users to browse restaurants, add items to cart, place orders, and track deliveries. Built with scalable backend APIs, secure authentication, and a clean user interface focused on performance and user experience.",
        image: "/foodel.jpg",
        link: "https://food-del-frontend-sdcz.onrender.com/",
    },
    Project {
        title: "Local Service Booking App",
        description: "A service-based platform connecting users with local professionals such as electricians, plumbers, and technicians. Features include service discovery, booking management, role-based access, and a reliable backend designed for real-world scalability.",
        image: "/localservice.jpg",
        link: "https://main.d287xgonuziz7u.amplifyapp.com/",
    },
    Project {
        title: "Smart-Bookmark App",
        description: "A bookmark management application that allows users to organize, manage, and access your favorite links anytime. Securely store your bookmarks with real-time updates.",
        image: "/smartbookmark.png",
        link: "https://smart-bookmark-app-eta-nine.vercel.app/",
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Omkar27-git",
        icon: "devicon-github-original",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/omkar-haldankar-b19b0431a/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "LeetCode",
        href: "https://leetcode.com/u/IgUUlNBgPk/",
        icon: "devicon-leetcode-plain",
    },
    SocialLink {
        label: "X",
        href: "https://x.com/OHaldankar92917",
        icon: "devicon-twitter-original",
    },
];

pub static RESUME_PDF: &str = "/resume.pdf";
pub static RESUME_PREVIEW: &str = "/resume-preview.png";
pub static HERO_IMAGE: &str = "/desk.png";
