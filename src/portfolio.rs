//! The read-only record every scene draws from.

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Format, Toml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub field: String,
    pub email: String,
    pub linkedin: String,
    /// Displayed positionally: index picks color and level.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Loads a portfolio from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("portfolio file {:?} does not exist", path);
        }
        Figment::new()
            .merge(Toml::file(path))
            .extract()
            .with_context(|| format!("failed to read portfolio from {:?}", path))
    }

    /// Demonstration record used when no file is given.
    pub fn sample() -> Self {
        fn project(name: &str, description: &str, technologies: [&str; 4]) -> Project {
            Project {
                name: name.to_string(),
                description: description.to_string(),
                technologies: technologies.iter().map(|t| t.to_string()).collect(),
            }
        }

        Self {
            name: "Alex Johnson".to_string(),
            title: "Senior Software Engineer".to_string(),
            field: "Full-Stack Development & AI".to_string(),
            email: "alex.johnson@email.com".to_string(),
            linkedin: "linkedin.com/in/alexjohnson".to_string(),
            skills: [
                "React & Next.js",
                "Node.js & Express",
                "Python & Django",
                "TypeScript",
                "AWS & Cloud",
                "Machine Learning",
                "Docker & K8s",
                "PostgreSQL",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            projects: vec![
                project(
                    "AI-Powered Analytics",
                    "Machine learning platform for business intelligence",
                    ["Python", "TensorFlow", "React", "AWS"],
                ),
                project(
                    "Real-time Chat App",
                    "Scalable messaging platform with WebSocket",
                    ["Node.js", "Socket.io", "React", "MongoDB"],
                ),
                project(
                    "E-commerce Platform",
                    "Full-stack marketplace with payment integration",
                    ["Next.js", "Stripe", "PostgreSQL", "Vercel"],
                ),
                project(
                    "Mobile Health Tracker",
                    "Cross-platform health monitoring application",
                    ["React Native", "Firebase", "Redux", "Charts.js"],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sample_has_eight_skills_and_four_projects() {
        let portfolio = Portfolio::sample();
        assert_eq!(portfolio.name, "Alex Johnson");
        assert_eq!(portfolio.skills.len(), 8);
        assert_eq!(portfolio.projects.len(), 4);
        assert!(portfolio.projects.iter().all(|p| p.technologies.len() == 4));
    }

    #[test]
    fn sample_survives_toml() {
        let text = toml::to_string(&Portfolio::sample()).unwrap();
        let parsed: Portfolio = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Portfolio::sample());
    }

    #[test]
    fn load_reads_file_with_missing_lists() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
name = "Sam Lee"
title = "Engineer"
field = "Systems"
email = "sam@example.com"
linkedin = "linkedin.com/in/samlee"

[[projects]]
name = "Kernel"
description = "A tiny kernel"
"#
        )
        .unwrap();

        let portfolio = Portfolio::load(file.path()).unwrap();
        assert_eq!(portfolio.name, "Sam Lee");
        assert!(portfolio.skills.is_empty());
        assert_eq!(portfolio.projects.len(), 1);
        assert!(portfolio.projects[0].technologies.is_empty());
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = Portfolio::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn load_rejects_incomplete_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"Only A Name\"").unwrap();
        assert!(Portfolio::load(file.path()).is_err());
    }
}
