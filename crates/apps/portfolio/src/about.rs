use leptos::*;
use system_ui::prelude::*;

const PHOTO_URL: &str = "/photo/photo.jpg";

const HIGHLIGHTS: [(IconName, &str); 4] = [
    (IconName::Document, "Frontend architecture"),
    (IconName::Settings, "Backend services and APIs"),
    (IconName::Folder, "Relational databases"),
    (IconName::User, "Authentication and access control"),
];

const SKILLS: [&str; 12] = [
    "Rust",
    "TypeScript",
    "React",
    "Node.js",
    "PostgreSQL",
    "REST APIs",
    "WebAssembly",
    "NGINX",
    "Docker",
    "CI/CD",
    "CSS",
    "Git",
];

#[component]
/// About window contents.
pub fn AboutApp() -> impl IntoView {
    let photo_failed = create_rw_signal(false);

    view! {
        <div class="app-shell app-about-shell">
            <Stack gap=LayoutGap::Lg>
                <Cluster gap=LayoutGap::Lg>
                    <div class="about-avatar">
                        <Show
                            when=move || !photo_failed.get()
                            fallback=|| view! { <Icon icon=IconName::User size=IconSize::Lg /> }
                        >
                            <img
                                src=PHOTO_URL
                                alt="Profile photo"
                                on:error=move |_| photo_failed.set(true)
                            />
                        </Show>
                    </div>
                    <Stack gap=LayoutGap::Sm>
                        <Heading>"Portfolio Owner"</Heading>
                        <Text tone=TextTone::Accent>"Full-Stack Software Developer"</Text>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            "Building reliable, production-ready systems"
                        </Text>
                    </Stack>
                </Cluster>

                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Title>"About"</Text>
                    <Text tone=TextTone::Secondary>
                        "A full-stack developer who cares about systems that keep working after \
                         launch: clean boundaries, maintainable code and measured performance work."
                    </Text>
                    <Text tone=TextTone::Secondary>
                        "Experience spans authentication flows, role-based access control and API \
                         design for high-traffic services."
                    </Text>
                </Stack>

                <Grid columns=2 gap=LayoutGap::Sm>
                    {HIGHLIGHTS
                        .into_iter()
                        .map(|(icon, text)| {
                            view! {
                                <Panel>
                                    <Cluster gap=LayoutGap::Sm>
                                        <Icon icon=icon size=IconSize::Sm />
                                        <Text>{text}</Text>
                                    </Cluster>
                                </Panel>
                            }
                        })
                        .collect_view()}
                </Grid>

                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Title>"Tech Stack"</Text>
                    <Cluster gap=LayoutGap::Sm ui_slot="skills">
                        {SKILLS.into_iter().map(|skill| view! { <Badge>{skill}</Badge> }).collect_view()}
                    </Cluster>
                </Stack>
            </Stack>
        </div>
    }
}
