//! The built-in career table. Declaration order is load-bearing: listing
//! order, tie-breaks in recommendations, and skills-to-learn ordering all
//! follow it.

use super::CareerProfile;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn career(
    name: &str,
    required_skills: &[&str],
    nice_to_have: &[&str],
    description: &str,
    avg_salary: &str,
    growth_outlook: &str,
    education_required: &str,
    industry: &[&str],
) -> CareerProfile {
    CareerProfile {
        name: name.to_string(),
        required_skills: strings(required_skills),
        nice_to_have: strings(nice_to_have),
        description: description.to_string(),
        avg_salary: avg_salary.to_string(),
        growth_outlook: growth_outlook.to_string(),
        education_required: education_required.to_string(),
        industry: strings(industry),
    }
}

pub(super) fn builtin_careers() -> Vec<CareerProfile> {
    vec![
        career(
            "Data Scientist",
            &[
                "Python",
                "Machine Learning",
                "Statistics",
                "SQL",
                "Data Visualization",
                "Pandas",
                "NumPy",
                "Scikit-learn",
                "Deep Learning",
                "Data Analysis",
            ],
            &["TensorFlow", "PyTorch", "Spark", "AWS", "R", "Tableau"],
            "Analyze complex data to help companies make data-driven decisions",
            "$120,000 - $160,000",
            "22% (Much faster than average)",
            "Bachelor's or Master's in Computer Science, Statistics, or related field",
            &["Technology", "Finance", "Healthcare", "E-commerce"],
        ),
        career(
            "Software Engineer",
            &[
                "Python",
                "Java",
                "Algorithms",
                "Data Structures",
                "System Design",
                "Git",
                "Testing",
                "Debugging",
                "API",
                "Databases",
            ],
            &["Docker", "Kubernetes", "AWS", "Microservices", "CI/CD"],
            "Design, develop, and maintain software applications and systems",
            "$110,000 - $150,000",
            "25% (Much faster than average)",
            "Bachelor's in Computer Science or related field",
            &["Technology", "Finance", "Healthcare", "Entertainment"],
        ),
        career(
            "Machine Learning Engineer",
            &[
                "Python",
                "Machine Learning",
                "Deep Learning",
                "TensorFlow",
                "PyTorch",
                "MLOps",
                "Docker",
                "Kubernetes",
                "Cloud",
                "Algorithms",
            ],
            &["Spark", "AWS", "Azure", "Model Optimization", "Edge Computing"],
            "Build and deploy machine learning models at scale in production",
            "$140,000 - $180,000",
            "21% (Much faster than average)",
            "Bachelor's or Master's in CS, ML, or related field",
            &["Technology", "AI Companies", "Research", "Autonomous Vehicles"],
        ),
        career(
            "Full Stack Developer",
            &[
                "JavaScript",
                "React",
                "Node.js",
                "HTML",
                "CSS",
                "SQL",
                "Git",
                "API",
                "REST",
                "Express",
            ],
            &["TypeScript", "Next.js", "MongoDB", "Docker", "AWS"],
            "Develop both front-end and back-end of web applications",
            "$100,000 - $140,000",
            "23% (Much faster than average)",
            "Bachelor's in Computer Science or self-taught with portfolio",
            &["Technology", "Startups", "E-commerce", "Media"],
        ),
        career(
            "Data Engineer",
            &[
                "Python",
                "SQL",
                "Spark",
                "Kafka",
                "ETL",
                "Data Pipelines",
                "AWS",
                "Airflow",
                "Databases",
                "Big Data",
            ],
            &["Snowflake", "Databricks", "Kubernetes", "Terraform"],
            "Build and maintain data infrastructure and pipelines",
            "$115,000 - $155,000",
            "20% (Much faster than average)",
            "Bachelor's in Computer Science or Data Engineering",
            &["Technology", "Finance", "E-commerce", "Healthcare"],
        ),
        career(
            "DevOps Engineer",
            &[
                "Linux",
                "Docker",
                "Kubernetes",
                "CI/CD",
                "AWS",
                "Jenkins",
                "Terraform",
                "Ansible",
                "Git",
                "Monitoring",
            ],
            &["Python", "Shell", "Azure", "GCP", "Security"],
            "Automate and optimize software development and deployment processes",
            "$110,000 - $145,000",
            "20% (Much faster than average)",
            "Bachelor's in Computer Science or System Administration",
            &["Technology", "Cloud Services", "Finance", "All Industries"],
        ),
        career(
            "Frontend Developer",
            &[
                "JavaScript",
                "React",
                "HTML",
                "CSS",
                "TypeScript",
                "Git",
                "Responsive Design",
                "API",
                "Testing",
            ],
            &[
                "Vue.js",
                "Angular",
                "Redux",
                "Webpack",
                "Performance Optimization",
            ],
            "Create user interfaces and experiences for web applications",
            "$90,000 - $130,000",
            "23% (Much faster than average)",
            "Bachelor's in CS or self-taught with strong portfolio",
            &["Technology", "Design Agencies", "E-commerce", "Media"],
        ),
        career(
            "Backend Developer",
            &[
                "Python",
                "Java",
                "Node.js",
                "SQL",
                "API",
                "REST",
                "Databases",
                "System Design",
                "Git",
                "Security",
            ],
            &["Microservices", "GraphQL", "Docker", "AWS", "Caching"],
            "Develop server-side logic and database management",
            "$105,000 - $140,000",
            "22% (Much faster than average)",
            "Bachelor's in Computer Science",
            &["Technology", "Finance", "SaaS", "E-commerce"],
        ),
        career(
            "Cloud Architect",
            &[
                "AWS",
                "Azure",
                "GCP",
                "System Design",
                "Networking",
                "Security",
                "Docker",
                "Kubernetes",
                "Terraform",
                "Microservices",
            ],
            &["Multi-Cloud", "Cost Optimization", "Compliance", "Serverless"],
            "Design and oversee cloud computing strategies",
            "$135,000 - $175,000",
            "19% (Much faster than average)",
            "Bachelor's + Cloud Certifications",
            &["Technology", "Consulting", "Enterprise", "All Industries"],
        ),
        career(
            "AI Research Scientist",
            &[
                "Machine Learning",
                "Deep Learning",
                "Python",
                "Mathematics",
                "Research",
                "PyTorch",
                "TensorFlow",
                "NLP",
                "Computer Vision",
                "Statistics",
            ],
            &["Publications", "PhD", "Reinforcement Learning", "Transformers"],
            "Conduct cutting-edge research in artificial intelligence",
            "$150,000 - $200,000+",
            "24% (Much faster than average)",
            "Master's or PhD in CS, AI, or related field",
            &["Research Labs", "Big Tech", "AI Startups", "Academia"],
        ),
        career(
            "Business Analyst",
            &[
                "Data Analysis",
                "Excel",
                "SQL",
                "Business Intelligence",
                "Communication",
                "Problem Solving",
                "Requirements Gathering",
                "Analytics",
            ],
            &["Python", "Tableau", "Power BI", "Agile", "Project Management"],
            "Bridge business needs and technical solutions through data analysis",
            "$80,000 - $110,000",
            "14% (Faster than average)",
            "Bachelor's in Business, Economics, or related field",
            &["Consulting", "Finance", "Technology", "Healthcare"],
        ),
        career(
            "Product Manager",
            &[
                "Product Strategy",
                "Communication",
                "Agile",
                "User Research",
                "Analytics",
                "Roadmap Planning",
                "Stakeholder Management",
                "Problem Solving",
            ],
            &["Technical Background", "SQL", "A/B Testing", "Design Thinking"],
            "Define product vision and strategy, working with engineering and design",
            "$120,000 - $160,000",
            "18% (Much faster than average)",
            "Bachelor's in any field + product experience",
            &["Technology", "SaaS", "E-commerce", "Finance"],
        ),
    ]
}
