use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка с одним сгенерированным текстом и кнопкой копирования
#[component]
#[allow(non_snake_case)]
pub fn ResultCard(
    #[prop(into)] title: String,
    icon_name: &'static str,
    /// CSS-модификатор акцента: "social" или "article"
    accent: &'static str,
    text: String,
    /// Иконка-галочка, пока это поле считается скопированным
    #[prop(into)]
    is_copied: Signal<bool>,
    on_copy: Callback<()>,
) -> impl IntoView {
    view! {
        <section class=format!("result-card result-card--{}", accent)>
            <div class="result-card__header">
                <div class="result-card__title">
                    {icon(icon_name)}
                    <span>{title}</span>
                </div>
                <Button
                    variant="icon"
                    title="Copiar"
                    on_click=Callback::new(move |_| on_copy.run(()))
                >
                    {move || {
                        if is_copied.get() {
                            view! { <span class="result-card__copied">{icon("check")}</span> }.into_any()
                        } else {
                            icon("copy")
                        }
                    }}
                </Button>
            </div>
            <div class="result-card__body">{text}</div>
        </section>
    }
}
