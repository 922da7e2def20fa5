use leptos::*;
use system_ui::prelude::*;

/// One entry in the projects window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub client: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// Public deployment, if any.
    pub link: Option<&'static str>,
    /// Hosted on the client's private network.
    pub internal: bool,
    pub highlight: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        name: "Branch Feedback Platform",
        client: "Retail banking client",
        description: "High-volume feedback capture for branch transactions, built for \
                      reliability and data integrity under sustained load.",
        technologies: &["Node.js", "Backend Architecture", "High Availability"],
        link: Some("https://example.com/feedback"),
        internal: false,
        highlight: "1M+ daily transactions",
    },
    Project {
        name: "Admin Feedback Console",
        client: "Retail banking client",
        description: "Internal reporting console with role-based collection and analysis \
                      of stakeholder feedback.",
        technologies: &["Node.js", "React", "Oracle Database", "NGINX"],
        link: None,
        internal: true,
        highlight: "Enterprise-grade security",
    },
    Project {
        name: "Customer Kiosk Service",
        client: "Retail banking client",
        description: "Customer-facing submission service tuned for fast processing and \
                      secure backend operations.",
        technologies: &["Node.js", "Backend Architecture", "Performance Optimization"],
        link: Some("https://example.com/kiosk"),
        internal: false,
        highlight: "1M+ daily submissions",
    },
];

#[component]
/// Projects window contents.
pub fn ProjectsApp() -> impl IntoView {
    view! {
        <div class="app-shell app-projects-shell">
            <Stack gap=LayoutGap::Md>
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Title>"Featured Projects"</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        "Enterprise-scale systems"
                    </Text>
                </Stack>
                {PROJECTS.into_iter().map(project_card).collect_view()}
            </Stack>
        </div>
    }
}

fn project_card(project: Project) -> impl IntoView {
    let footer = match (project.internal, project.link) {
        (false, Some(link)) => view! {
            <a class="project-link" href=link target="_blank" rel="noopener noreferrer">
                <Icon icon=IconName::ExternalLink size=IconSize::Sm />
                "View Live"
            </a>
        }
        .into_view(),
        _ => view! {
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                "Internal deployment (hosted on client servers)"
            </Text>
        }
        .into_view(),
    };

    view! {
        <Panel layout_class="project-card">
            <Stack gap=LayoutGap::Sm>
                <Cluster>
                    <Stack gap=LayoutGap::None>
                        <Text role=TextRole::Label>{project.name}</Text>
                        <Text role=TextRole::Caption tone=TextTone::Accent>{project.client}</Text>
                    </Stack>
                    <Badge tone=TextTone::Primary>{project.highlight}</Badge>
                </Cluster>
                <Text tone=TextTone::Secondary>{project.description}</Text>
                <Cluster gap=LayoutGap::Sm>
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <Badge>{*tech}</Badge> })
                        .collect_view()}
                </Cluster>
                {footer}
            </Stack>
        </Panel>
    }
}
