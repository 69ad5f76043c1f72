use super::{PortfolioProject, ServiceOffering};

pub static SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        id: 1,
        title: "Web Applications & Websites",
        description: "Modern, responsive web apps and websites built for performance and scale.",
        bullets: &["Responsive UI", "SEO-friendly pages", "Progressive Web Apps"],
    },
    ServiceOffering {
        id: 2,
        title: "Custom Software Solutions",
        description: "Tailored tools and integrations that fit your unique workflows.",
        bullets: &["API Integrations", "Business-specific tools", "Secure architecture"],
    },
    ServiceOffering {
        id: 3,
        title: "Automation Tools",
        description: "Automate repetitive tasks to save time and reduce errors.",
        bullets: &["Python automation", "ETL & scheduling", "Email & CRM automation"],
    },
    ServiceOffering {
        id: 4,
        title: "Data Analysis & Visualization",
        description: "Turn raw data into clear insights and interactive dashboards.",
        bullets: &["Data cleaning", "Interactive dashboards", "Ad-hoc analysis"],
    },
];

pub static PROJECTS: &[PortfolioProject] = &[
    PortfolioProject {
        id: 1,
        title: "Real Estate Sales Dashboard",
        subtitle: "Live performance tracking for field sales teams",
        tags: &["Power BI", "Automation"],
        excerpt: "A dashboard to track campaigns, leads, and sales performance across regions.",
    },
    PortfolioProject {
        id: 2,
        title: "CRM Automation Suite",
        subtitle: "Reduced manual workload by 70%",
        tags: &["Python", "CRM"],
        excerpt: "Automated lead assignment, sanitization and daily reporting pipelines.",
    },
    PortfolioProject {
        id: 3,
        title: "Marketing Analytics Portal",
        subtitle: "Campaign ROI and qualification analytics",
        tags: &["Looker", "SQL"],
        excerpt: "Interactive portal for marketing managers to inspect campaign-level metrics.",
    },
];
