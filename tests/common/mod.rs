// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides temp working directories and a builder for page config documents

#![allow(dead_code)]

use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The end-to-end example document.
pub const CLUB_CONFIG: &str = r#"{"copyright":"© 2024 Club","organization":{"name":"Club","description":"We code.","link":"https://example.org","logo":""},"announcements":[{"title":"Hi","content":"Welcome","date":"2024-01-01"}],"meetings":[],"projects":{"Tools":[{"name":"Widget","description":"A widget","link":"https://example.org/widget"}]}}"#;

pub struct TestConfigBuilder {
    copyright: String,
    organization: Value,
    announcements: Vec<Value>,
    meetings: Vec<Value>,
    projects: Map<String, Value>,
}

impl TestConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            copyright: format!("© 2024 {}", name),
            organization: json!({
                "name": name,
                "description": format!("About {}", name),
                "link": "https://example.org",
                "logo": ""
            }),
            announcements: Vec::new(),
            meetings: Vec::new(),
            projects: Map::new(),
        }
    }

    pub fn with_logo(mut self, logo: &str) -> Self {
        self.organization["logo"] = Value::String(logo.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.organization["description"] = Value::String(description.to_string());
        self
    }

    pub fn add_announcement(mut self, title: &str, content: &str, date: &str) -> Self {
        self.announcements
            .push(json!({"title": title, "content": content, "date": date}));
        self
    }

    pub fn add_meeting(mut self, date: &str, time: &str, location: &str, topic: &str) -> Self {
        self.meetings.push(
            json!({"date": date, "time": time, "location": location, "topic": topic}),
        );
        self
    }

    pub fn add_category(mut self, category: &str) -> Self {
        self.projects
            .entry(category.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        self
    }

    pub fn add_project(mut self, category: &str, name: &str, link: &str) -> Self {
        let entry = self
            .projects
            .entry(category.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(list) = entry {
            list.push(json!({
                "name": name,
                "description": format!("{} project", name),
                "link": link
            }));
        }
        self
    }

    pub fn to_json(&self) -> String {
        json!({
            "copyright": self.copyright,
            "organization": self.organization,
            "announcements": self.announcements,
            "meetings": self.meetings,
            "projects": self.projects,
        })
        .to_string()
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `config.json` in the working directory
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("config.json", content)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Create the `build/` directory the default output path expects
    pub fn create_build_dir(&self) -> PathBuf {
        let dir = self.path().join("build");
        fs::create_dir_all(&dir).expect("Failed to create build directory");
        dir
    }

    pub fn output_file(&self) -> PathBuf {
        self.path().join("build").join("index.html")
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_file()).expect("Failed to read output file")
    }

    /// Names of entries in `build/`, sorted
    pub fn build_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path().join("build"))
            .expect("Failed to list build directory")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

/// Contents of the meetings table body
pub fn table_body(html: &str) -> &str {
    let start = html.find("<tbody>").expect("no tbody") + "<tbody>".len();
    let end = html.find("</tbody>").expect("no closing tbody");
    &html[start..end]
}

/// Byte offsets of each needle in `html`, panicking if one is missing
pub fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("'{}' not found in output", needle))
        })
        .collect()
}

pub fn is_sorted(values: &[usize]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}
