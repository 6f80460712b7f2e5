//! Built-in command handlers, one concrete type per registered name.

use resume_model::{Resume, SKILL_LEVEL_MAX};

use crate::{Command, CommandOutput, ShellEffect};

pub(crate) fn builtin() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(Help),
        Box::new(Whoami),
        Box::new(ExperienceCmd),
        Box::new(EducationCmd),
        Box::new(SkillsCmd),
        Box::new(ProjectsCmd),
        Box::new(Clear),
        Box::new(Neofetch),
        Box::new(Ls),
        Box::new(Cat),
        Box::new(Echo),
    ]
}

struct Help;

impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn summary(&self) -> &'static str {
        "Show this help message"
    }

    fn execute(&self, _resume: &Resume, _args: &[String]) -> CommandOutput {
        CommandOutput::markup(
            "<h2>Available Commands:</h2>\
             <ul>\
             <li><strong>whoami</strong>: Display personal information</li>\
             <li><strong>experience</strong>: Show work experience</li>\
             <li><strong>education</strong>: Display education information</li>\
             <li><strong>skills</strong>: List skills</li>\
             <li><strong>projects</strong>: Show personal projects</li>\
             <li><strong>clear</strong>: Clear the terminal</li>\
             <li><strong>neofetch</strong>: Display system information</li>\
             <li><strong>ls</strong>: List available files</li>\
             <li><strong>cat [filename]</strong>: Display file contents</li>\
             <li><strong>echo [text]</strong>: Display a line of text</li>\
             <li><strong>help</strong>: Show this help message</li>\
             </ul>",
        )
    }
}

struct Whoami;

impl Command for Whoami {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn summary(&self) -> &'static str {
        "Display personal information"
    }

    fn execute(&self, resume: &Resume, _args: &[String]) -> CommandOutput {
        let header = &resume.header;
        CommandOutput::markup(format!(
            "<h1>{}</h1>\
             <p>Email: {}</p>\
             <p>Phone: {}</p>\
             <p>GitHub: {}</p>\
             <p>{}</p>",
            header.name,
            header.contact.email,
            header.contact.phone,
            header.contact.github,
            header.personal_statement,
        ))
    }
}

struct ExperienceCmd;

impl Command for ExperienceCmd {
    fn name(&self) -> &'static str {
        "experience"
    }

    fn summary(&self) -> &'static str {
        "Show work experience"
    }

    fn execute(&self, resume: &Resume, _args: &[String]) -> CommandOutput {
        let jobs = resume
            .experience
            .iter()
            .map(|job| {
                let achievements = job
                    .achievements
                    .iter()
                    .map(|achievement| format!("<li>{achievement}</li>"))
                    .collect::<String>();
                format!(
                    "<div class=\"job\">\
                     <h3>{} - {}</h3>\
                     <p>{}</p>\
                     <p>{}</p>\
                     <ul>{achievements}</ul>\
                     </div>",
                    job.title, job.company, job.period, job.description,
                )
            })
            .collect::<String>();
        CommandOutput::markup(format!("<h2>Work Experience</h2>{jobs}"))
    }
}

struct EducationCmd;

impl Command for EducationCmd {
    fn name(&self) -> &'static str {
        "education"
    }

    fn summary(&self) -> &'static str {
        "Display education information"
    }

    fn execute(&self, resume: &Resume, _args: &[String]) -> CommandOutput {
        let entries = resume
            .education
            .iter()
            .map(|entry| {
                // One sub-list per entry: modules when present, else courses.
                let sublist = if let Some(modules) = &entry.modules {
                    let items = modules
                        .iter()
                        .map(|module| format!("<li>{module}</li>"))
                        .collect::<String>();
                    format!("<p><strong>Modules:</strong></p><ul>{items}</ul>")
                } else if let Some(courses) = &entry.courses {
                    let items = courses
                        .iter()
                        .map(|course| format!("<li>{}: {}</li>", course.name, course.grade))
                        .collect::<String>();
                    format!("<p><strong>Courses:</strong></p><ul>{items}</ul>")
                } else {
                    String::new()
                };
                format!(
                    "<div class=\"education\">\
                     <h3>{} - {}</h3>\
                     <p>Graduation Date: {}</p>\
                     {sublist}\
                     </div>",
                    entry.qualification, entry.school, entry.graduation_year,
                )
            })
            .collect::<String>();
        CommandOutput::markup(format!("<h2>Education</h2>{entries}"))
    }
}

struct SkillsCmd;

impl Command for SkillsCmd {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn summary(&self) -> &'static str {
        "List skills"
    }

    fn execute(&self, resume: &Resume, _args: &[String]) -> CommandOutput {
        let technical = resume
            .skills
            .technical
            .iter()
            .map(|(skill, level)| {
                let percent = u32::from(*level) * 100 / u32::from(SKILL_LEVEL_MAX);
                format!(
                    "<div class=\"skill\">\
                     <h4>{skill}</h4>\
                     <div class=\"progress-bar\">\
                     <div class=\"progress\" data-level=\"{percent}\" style=\"width: 0%\"></div>\
                     </div>\
                     </div>"
                )
            })
            .collect::<String>();
        let soft = resume
            .skills
            .soft
            .iter()
            .map(|skill| format!("<li>{skill}</li>"))
            .collect::<String>();
        CommandOutput::with_effect(
            format!(
                "<h2>Skills</h2>\
                 <h3>Technical Skills</h3>{technical}\
                 <h3>Soft Skills</h3><ul>{soft}</ul>"
            ),
            ShellEffect::AnimateSkillBars,
        )
    }
}

struct ProjectsCmd;

impl Command for ProjectsCmd {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn summary(&self) -> &'static str {
        "Show personal projects"
    }

    fn execute(&self, resume: &Resume, _args: &[String]) -> CommandOutput {
        let projects = resume
            .projects
            .iter()
            .map(|project| {
                let highlights = project
                    .highlights
                    .iter()
                    .map(|highlight| format!("<li>{highlight}</li>"))
                    .collect::<String>();
                format!(
                    "<div class=\"project\">\
                     <h3>{}</h3>\
                     <p>{}</p>\
                     <p><strong>Technologies:</strong> {}</p>\
                     <p><strong>Highlights:</strong></p>\
                     <ul>{highlights}</ul>\
                     </div>",
                    project.title,
                    project.description,
                    project.technologies.join(", "),
                )
            })
            .collect::<String>();
        CommandOutput::markup(format!("<h2>Projects</h2>{projects}"))
    }
}

struct Clear;

impl Command for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn summary(&self) -> &'static str {
        "Clear the terminal"
    }

    fn execute(&self, _resume: &Resume, _args: &[String]) -> CommandOutput {
        CommandOutput::with_effect("", ShellEffect::ClearLog)
    }
}

struct Neofetch;

const NEOFETCH_LOGO: &str = r"
 ____  _____ ____  _   _ __  __ _____    ___  ____
|  _ \| ____/ ___|| | | |  \/  | ____|  / _ \/ ___|
| |_) |  _| \___ \| | | | |\/| |  _|   | | | \___ \
|  _ <| |___ ___) | |_| | |  | | |___  | |_| |___) |
|_| \_\_____|____/ \___/|_|  |_|_____|  \___/|____/
";

impl Command for Neofetch {
    fn name(&self) -> &'static str {
        "neofetch"
    }

    fn summary(&self) -> &'static str {
        "Display system information"
    }

    fn execute(&self, resume: &Resume, _args: &[String]) -> CommandOutput {
        let info = format!(
            "\n\
             OS: Interactive Resume OS\n\
             Host: {}'s Portfolio\n\
             Kernel: Rust (wasm32)\n\
             Shell: Interactive Terminal\n\
             DE: Web Browser\n\
             WM: DOM\n\
             Terminal: Custom Web Terminal\n\
             CPU: User's Device\n\
             Memory: Browser Allocated\n",
            resume.header.name
        );
        CommandOutput::markup(format!("<pre>{NEOFETCH_LOGO}{info}</pre>"))
    }
}

struct Ls;

impl Command for Ls {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn summary(&self) -> &'static str {
        "List available files"
    }

    fn execute(&self, resume: &Resume, _args: &[String]) -> CommandOutput {
        let items = resume
            .section_names()
            .iter()
            .map(|section| format!("<li>{section}.txt</li>"))
            .collect::<String>();
        CommandOutput::markup(format!("<ul>{items}</ul>"))
    }
}

struct Cat;

impl Command for Cat {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn summary(&self) -> &'static str {
        "Display file contents"
    }

    fn execute(&self, resume: &Resume, args: &[String]) -> CommandOutput {
        let Some(raw) = args.first() else {
            return CommandOutput::markup("Usage: cat [section]");
        };
        let section = raw.strip_suffix(".txt").unwrap_or(raw);
        match resume.section(section) {
            Some(value) => CommandOutput::markup(format!(
                "<pre class=\"section\">{}</pre>",
                value.render()
            )),
            None => CommandOutput::markup(format!("Section not found: {section}")),
        }
    }
}

struct Echo;

impl Command for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn summary(&self) -> &'static str {
        "Display a line of text"
    }

    fn execute(&self, _resume: &Resume, args: &[String]) -> CommandOutput {
        CommandOutput::markup(args.join(" "))
    }
}
