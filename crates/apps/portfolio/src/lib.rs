//! Portfolio desktop apps: the about page, the project list and the resume viewer.

mod about;
mod projects;
mod resume;

pub use about::AboutApp;
pub use projects::{Project, ProjectsApp, PROJECTS};
pub use resume::{download_resume, open_resume, ResumeApp, RESUME_FILE_NAME, RESUME_URL};
