//! Built-in sample resume used as the site's default data set.

use crate::{Contact, Course, Education, Experience, Header, Project, Resume, Skills};

/// Returns the built-in sample resume.
pub fn sample_resume() -> Resume {
    Resume {
        header: Header {
            name: "Avery Quinn".to_string(),
            contact: Contact {
                email: "avery.quinn@example.com".to_string(),
                phone: "+44 7700 900123".to_string(),
                github: "github.com/averyq".to_string(),
            },
            personal_statement: "Passionate computer science student with strong problem-solving \
                                 and programming skills. Seeking a challenging role in software \
                                 development."
                .to_string(),
        },
        experience: vec![
            Experience {
                title: "Senior Software Developer".to_string(),
                company: "Tech Innovators Inc.".to_string(),
                period: "Jan 2020 - Present".to_string(),
                description: "Lead development of cutting-edge web applications using React, \
                              Node.js, and GraphQL."
                    .to_string(),
                achievements: vec![
                    "Architected and implemented a microservices-based backend that improved \
                     system scalability by 200%"
                        .to_string(),
                    "Mentored junior developers, increasing team productivity by 30%".to_string(),
                    "Introduced automated testing practices, reducing bug reports by 50%"
                        .to_string(),
                ],
            },
            Experience {
                title: "Full Stack Developer".to_string(),
                company: "Digital Solutions Co.".to_string(),
                period: "Jun 2018 - Dec 2019".to_string(),
                description: "Developed and maintained full-stack applications and implemented \
                              CI/CD pipelines."
                    .to_string(),
                achievements: vec![
                    "Optimized database queries, resulting in a 40% reduction in API response \
                     times"
                        .to_string(),
                    "Implemented responsive design principles, improving mobile user engagement \
                     by 25%"
                        .to_string(),
                    "Contributed to open-source projects, gaining recognition in the developer \
                     community"
                        .to_string(),
                ],
            },
            Experience {
                title: "Junior Web Developer".to_string(),
                company: "StartUp Ventures".to_string(),
                period: "Sep 2016 - May 2018".to_string(),
                description: "Assisted in the development of web applications and gained \
                              experience in agile methodologies."
                    .to_string(),
                achievements: vec![
                    "Developed a custom CMS that streamlined content management processes by 60%"
                        .to_string(),
                    "Collaborated with UX designers to implement intuitive user interfaces"
                        .to_string(),
                    "Participated in code reviews and adopted best practices for clean, \
                     maintainable code"
                        .to_string(),
                ],
            },
        ],
        education: vec![
            Education {
                school: "Queen's University".to_string(),
                qualification: "Bachelor of Computer Science".to_string(),
                graduation_year: "2027".to_string(),
                modules: Some(vec![
                    "Databases".to_string(),
                    "Programming".to_string(),
                    "Cyber Security".to_string(),
                    "Web Development".to_string(),
                    "Computer Architecture".to_string(),
                    "Maths for Computer Science".to_string(),
                ]),
                courses: None,
            },
            Education {
                school: "Grammar School".to_string(),
                qualification: "A Levels".to_string(),
                graduation_year: "2023".to_string(),
                modules: None,
                courses: Some(vec![
                    Course {
                        name: "Technology & Design".to_string(),
                        grade: "A".to_string(),
                    },
                    Course {
                        name: "Software Systems Development".to_string(),
                        grade: "B".to_string(),
                    },
                    Course {
                        name: "Business".to_string(),
                        grade: "C".to_string(),
                    },
                ]),
            },
        ],
        skills: Skills {
            technical: vec![
                ("Python".to_string(), 6),
                ("C#".to_string(), 5),
                ("Java".to_string(), 6),
                ("JavaScript".to_string(), 7),
                ("HTML".to_string(), 8),
                ("CSS".to_string(), 7),
                ("SQL".to_string(), 7),
                ("Linux".to_string(), 8),
                ("Git".to_string(), 6),
            ],
            soft: vec![
                "Problem-solving".to_string(),
                "Teamwork".to_string(),
                "Communication".to_string(),
            ],
        },
        projects: vec![Project {
            title: "Personal CV Website".to_string(),
            description: "Built a personal website with a terminal-style resume explorer and \
                          deployed it as a static site."
                .to_string(),
            technologies: vec![
                "Rust".to_string(),
                "WebAssembly".to_string(),
                "Leptos".to_string(),
            ],
            highlights: vec![
                "Interactive terminal".to_string(),
                "Theme switcher for the entire site".to_string(),
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SKILL_LEVEL_MAX;

    #[test]
    fn sample_skill_levels_stay_in_range() {
        for (name, level) in sample_resume().skills.technical {
            assert!(level <= SKILL_LEVEL_MAX, "skill `{name}` out of range");
        }
    }

    #[test]
    fn sample_education_entries_carry_exactly_one_sublist() {
        for entry in sample_resume().education {
            assert!(
                entry.modules.is_some() != entry.courses.is_some(),
                "entry `{}` must carry modules or courses, not both",
                entry.school
            );
        }
    }
}
