use std::rc::Rc;

use leptos::*;
use platform_host::{ExternalUrlError, ExternalUrlService};
use system_ui::prelude::*;

pub const RESUME_URL: &str = "/resume/resume.pdf";
pub const RESUME_FILE_NAME: &str = "Resume.pdf";

/// Opens the resume in a new browsing context.
pub async fn open_resume(urls: &dyn ExternalUrlService) -> Result<(), ExternalUrlError> {
    urls.open_url(RESUME_URL).await
}

/// Saves the resume as [`RESUME_FILE_NAME`].
pub async fn download_resume(urls: &dyn ExternalUrlService) -> Result<(), ExternalUrlError> {
    urls.download_url(RESUME_URL, RESUME_FILE_NAME).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewerState {
    Loading,
    Ready,
    Unavailable,
}

#[component]
/// Resume window contents.
pub fn ResumeApp(
    /// Host navigation collaborator.
    external_urls: Rc<dyn ExternalUrlService>,
) -> impl IntoView {
    let viewer = create_rw_signal(ViewerState::Loading);
    let external_urls = store_value(external_urls);

    let on_open = Callback::new(move |_| {
        let urls = external_urls.get_value();
        spawn_local(async move {
            if let Err(err) = open_resume(urls.as_ref()).await {
                logging::warn!("could not open resume: {err}");
            }
        });
    });
    let on_download = Callback::new(move |_| {
        let urls = external_urls.get_value();
        spawn_local(async move {
            if let Err(err) = download_resume(urls.as_ref()).await {
                logging::warn!("could not download resume: {err}");
            }
        });
    });

    view! {
        <div class="app-shell app-resume-shell">
            <Cluster ui_slot="resume-actions">
                <Cluster gap=LayoutGap::Sm>
                    <Icon icon=IconName::Document size=IconSize::Sm />
                    <Text tone=TextTone::Secondary>{RESUME_FILE_NAME}</Text>
                </Cluster>
                <Cluster gap=LayoutGap::Sm>
                    <Button size=ButtonSize::Sm leading_icon=IconName::ExternalLink on_click=on_open>
                        "Open"
                    </Button>
                    <Button
                        size=ButtonSize::Sm
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::Download
                        on_click=on_download
                    >
                        "Download"
                    </Button>
                </Cluster>
            </Cluster>

            <Panel layout_class="resume-viewer">
                <Show
                    when=move || viewer.get() != ViewerState::Unavailable
                    fallback=|| {
                        view! {
                            <Stack align=LayoutAlign::Center>
                                <Icon icon=IconName::Document size=IconSize::Lg />
                                <Text role=TextRole::Title>"Resume Not Available"</Text>
                                <Text tone=TextTone::Secondary>
                                    "Add resume.pdf to the public/resume folder."
                                </Text>
                            </Stack>
                        }
                    }
                >
                    <Show when=move || viewer.get() == ViewerState::Loading>
                        <Text tone=TextTone::Secondary>"Loading resume..."</Text>
                    </Show>
                    <iframe
                        src=RESUME_URL
                        title="Resume"
                        class="resume-frame"
                        data-ui-loading=move || if viewer.get() == ViewerState::Loading { "true" } else { "false" }
                        on:load=move |_| viewer.set(ViewerState::Ready)
                        on:error=move |_| viewer.set(ViewerState::Unavailable)
                    ></iframe>
                </Show>
            </Panel>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryExternalUrlService, NoopExternalUrlService, UrlRequest};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_and_download_target_the_resume() {
        let urls = MemoryExternalUrlService::default();
        block_on(open_resume(&urls)).expect("open");
        block_on(download_resume(&urls)).expect("download");
        assert_eq!(
            urls.requests(),
            vec![
                UrlRequest::Open("/resume/resume.pdf".to_string()),
                UrlRequest::Download {
                    url: "/resume/resume.pdf".to_string(),
                    file_name: "Resume.pdf".to_string(),
                },
            ]
        );
    }

    #[test]
    fn unavailable_host_reports_error() {
        assert_eq!(
            block_on(open_resume(&NoopExternalUrlService)),
            Err(ExternalUrlError::Unavailable)
        );
    }
}
