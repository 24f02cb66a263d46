use crate::domain::a001_content_generation::ui::details::ContentCreatorPage;
use contracts::shared::client_config::ClientConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // Provide the startup configuration to the whole app via context.
    provide_context(config);

    view! {
        <ContentCreatorPage />
    }
}
