use leptos::prelude::*;

/// Hero header for the single page: title with a highlighted word and a tagline
#[component]
pub fn PageHeader(
    /// Leading part of the title
    #[prop(into)]
    title: String,

    /// Highlighted tail of the title (optional)
    #[prop(optional, into)]
    highlight: MaybeProp<String>,

    /// Optional tagline under the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">
                {title}
                {move || highlight.get().map(|h| view! {
                    " "
                    <span class="page-header__highlight">{h}</span>
                })}
            </h1>
            {move || subtitle.get().map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
        </header>
    }
}
