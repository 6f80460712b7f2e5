//! Shared resume data contracts consumed by the terminal shell and site UI.
//!
//! This crate is intentionally runtime-agnostic. It defines the serializable resume
//! record, a recursively-formattable section value tree, and the built-in sample
//! resume without depending on Leptos or browser APIs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod sample;
mod section;

use serde::{Deserialize, Serialize};

pub use sample::sample_resume;
pub use section::SectionValue;

/// Maximum technical skill level; bar widths scale `level / SKILL_LEVEL_MAX`.
pub const SKILL_LEVEL_MAX: u8 = 10;

/// Contact details shown by `whoami` and the header section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// GitHub profile path.
    pub github: String,
}

/// Resume header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Full name.
    pub name: String,
    /// Contact sub-record.
    pub contact: Contact,
    /// Short personal statement paragraph.
    pub personal_statement: String,
}

/// One work-experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Job title.
    pub title: String,
    /// Employer name.
    pub company: String,
    /// Employment period, free-form text.
    pub period: String,
    /// Role description paragraph.
    pub description: String,
    /// Bullet-point achievements.
    pub achievements: Vec<String>,
}

/// A graded course inside an education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course name.
    pub name: String,
    /// Achieved grade.
    pub grade: String,
}

/// One education entry.
///
/// An entry carries either `modules` or `courses` depending on the level of
/// study; renderers show whichever is present, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    /// Institution name.
    pub school: String,
    /// Qualification obtained or in progress.
    pub qualification: String,
    /// Graduation year, free-form text.
    pub graduation_year: String,
    /// Module list for degree-level entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<String>>,
    /// Graded course list for school-level entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<Course>>,
}

/// Skills section: ordered technical skills with levels plus plain soft skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    /// Technical skills as `(name, level)` pairs; level is `0..=SKILL_LEVEL_MAX`.
    pub technical: Vec<(String, u8)>,
    /// Soft skills, plain strings.
    pub soft: Vec<String>,
}

/// One project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// Project description paragraph.
    pub description: String,
    /// Technologies used.
    pub technologies: Vec<String>,
    /// Highlight bullet points.
    pub highlights: Vec<String>,
}

/// The full resume record read by every shell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Header block with name, contact, and statement.
    pub header: Header,
    /// Work-experience entries, most recent first.
    pub experience: Vec<Experience>,
    /// Education entries, most recent first.
    pub education: Vec<Education>,
    /// Technical and soft skills.
    pub skills: Skills,
    /// Project entries.
    pub projects: Vec<Project>,
}

/// Top-level section names in declaration order, as listed by `ls`.
pub const SECTION_NAMES: [&str; 5] = ["header", "experience", "education", "skills", "projects"];

impl Resume {
    /// Returns the top-level section names in declaration order.
    pub fn section_names(&self) -> &'static [&'static str] {
        &SECTION_NAMES
    }

    /// Resolves a top-level section name to its formattable value tree.
    ///
    /// Returns `None` when `name` is not a known section.
    pub fn section(&self, name: &str) -> Option<SectionValue> {
        match name {
            "header" => Some(self.header.to_value()),
            "experience" => Some(SectionValue::List(
                self.experience.iter().map(Experience::to_value).collect(),
            )),
            "education" => Some(SectionValue::List(
                self.education.iter().map(Education::to_value).collect(),
            )),
            "skills" => Some(self.skills.to_value()),
            "projects" => Some(SectionValue::List(
                self.projects.iter().map(Project::to_value).collect(),
            )),
            _ => None,
        }
    }
}

impl Header {
    fn to_value(&self) -> SectionValue {
        SectionValue::Record(vec![
            ("name".to_string(), SectionValue::text(&self.name)),
            (
                "contact".to_string(),
                SectionValue::Record(vec![
                    ("email".to_string(), SectionValue::text(&self.contact.email)),
                    ("phone".to_string(), SectionValue::text(&self.contact.phone)),
                    (
                        "github".to_string(),
                        SectionValue::text(&self.contact.github),
                    ),
                ]),
            ),
            (
                "personalStatement".to_string(),
                SectionValue::text(&self.personal_statement),
            ),
        ])
    }
}

impl Experience {
    fn to_value(&self) -> SectionValue {
        SectionValue::Record(vec![
            ("title".to_string(), SectionValue::text(&self.title)),
            ("company".to_string(), SectionValue::text(&self.company)),
            ("period".to_string(), SectionValue::text(&self.period)),
            (
                "description".to_string(),
                SectionValue::text(&self.description),
            ),
            (
                "achievements".to_string(),
                SectionValue::text_list(&self.achievements),
            ),
        ])
    }
}

impl Education {
    fn to_value(&self) -> SectionValue {
        let mut fields = vec![
            ("school".to_string(), SectionValue::text(&self.school)),
            (
                "qualification".to_string(),
                SectionValue::text(&self.qualification),
            ),
            (
                "graduationYear".to_string(),
                SectionValue::text(&self.graduation_year),
            ),
        ];
        if let Some(modules) = &self.modules {
            fields.push(("modules".to_string(), SectionValue::text_list(modules)));
        } else if let Some(courses) = &self.courses {
            fields.push((
                "courses".to_string(),
                SectionValue::List(
                    courses
                        .iter()
                        .map(|course| {
                            SectionValue::Record(vec![
                                ("name".to_string(), SectionValue::text(&course.name)),
                                ("grade".to_string(), SectionValue::text(&course.grade)),
                            ])
                        })
                        .collect(),
                ),
            ));
        }
        SectionValue::Record(fields)
    }
}

impl Skills {
    fn to_value(&self) -> SectionValue {
        SectionValue::Record(vec![
            (
                "technical".to_string(),
                SectionValue::Record(
                    self.technical
                        .iter()
                        .map(|(name, level)| (name.clone(), SectionValue::Text(level.to_string())))
                        .collect(),
                ),
            ),
            ("soft".to_string(), SectionValue::text_list(&self.soft)),
        ])
    }
}

impl Project {
    fn to_value(&self) -> SectionValue {
        SectionValue::Record(vec![
            ("title".to_string(), SectionValue::text(&self.title)),
            (
                "description".to_string(),
                SectionValue::text(&self.description),
            ),
            (
                "technologies".to_string(),
                SectionValue::text_list(&self.technologies),
            ),
            (
                "highlights".to_string(),
                SectionValue::text_list(&self.highlights),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_section_resolves() {
        let resume = sample_resume();
        for name in resume.section_names() {
            assert!(resume.section(name).is_some(), "section `{name}` missing");
        }
    }

    #[test]
    fn unknown_section_is_none() {
        assert!(sample_resume().section("references").is_none());
    }

    #[test]
    fn education_value_prefers_modules_over_courses() {
        let entry = Education {
            school: "University".to_string(),
            qualification: "BSc".to_string(),
            graduation_year: "2027".to_string(),
            modules: Some(vec!["Databases".to_string()]),
            courses: Some(vec![Course {
                name: "Business".to_string(),
                grade: "C".to_string(),
            }]),
        };
        let SectionValue::Record(fields) = entry.to_value() else {
            panic!("education should render as a record");
        };
        assert!(fields.iter().any(|(key, _)| key == "modules"));
        assert!(!fields.iter().any(|(key, _)| key == "courses"));
    }

    #[test]
    fn resume_serde_round_trip() {
        let resume = sample_resume();
        let raw = serde_json::to_string(&resume).expect("serialize");
        let back: Resume = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(back, resume);
    }

    #[test]
    fn header_keys_use_original_wire_names() {
        let raw = serde_json::to_string(&sample_resume().header).expect("serialize");
        assert!(raw.contains("personalStatement"));
    }
}
