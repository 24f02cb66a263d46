//! Content Generation - View Component

use super::model::generate;
use super::result_card::ResultCard;
use super::view_model::ContentCreatorVm;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a001_content_generation::CopiedField;
use contracts::shared::client_config::ClientConfig;
use leptos::prelude::*;
use thaw::Spinner;

#[component]
#[allow(non_snake_case)]
pub fn ContentCreatorPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_else(|| {
        log::warn!("ClientConfig context not found, using default webhook");
        ClientConfig::default()
    });
    let vm = ContentCreatorVm::new();

    // Таймер индикатора не должен пережить страницу
    on_cleanup(move || vm.cancel_copy_timer());

    let handle_generate = Callback::new(move |_: leptos::ev::MouseEvent| {
        let Some(request) = vm.begin_generation() else {
            return;
        };
        log::debug!("Dispatching content generation to {}", config.webhook_url);

        let config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome = generate(&config, &request).await;
            vm.finish_generation(outcome);
        });
    });

    view! {
        <main class="content-creator">
            <PageHeader
                title="Cerebro"
                highlight="Creator"
                subtitle="Transforma tus ideas en contenido profesional con la potencia de Gemini 3 Flash y tu ADN de marca."
            />

            <div class="form-card">
                <Textarea
                    id="idea"
                    label="Tu idea central"
                    placeholder="¿Sobre qué quieres escribir hoy?"
                    value=Signal::derive(move || vm.idea())
                    on_input=Callback::new(move |v: String| vm.set_idea(v))
                />
                <Input
                    id="context"
                    label="Contexto adicional (Opcional)"
                    placeholder="Ej: Tono profesional, enfocado en tecnología..."
                    value=Signal::derive(move || vm.context())
                    on_input=Callback::new(move |v: String| vm.set_context(v))
                />
                <Button
                    class="form-card__submit"
                    disabled=Signal::derive(move || !vm.can_submit())
                    on_click=handle_generate
                >
                    {move || {
                        if vm.is_loading() {
                            view! { <Spinner /> }.into_any()
                        } else {
                            view! {
                                <span>"Generar Magia"</span>
                                {icon("sparkles")}
                            }
                            .into_any()
                        }
                    }}
                </Button>
            </div>

            // Панель результатов появляется только после успешного ответа
            {move || {
                vm.result()
                    .map(|result| {
                        view! {
                            <div class="results">
                                <ResultCard
                                    title="LinkedIn Post"
                                    icon_name="linkedin"
                                    accent="social"
                                    text=result.social_post
                                    is_copied=Signal::derive(move || vm.is_copied(CopiedField::Social))
                                    on_copy=Callback::new(move |_| vm.copy(CopiedField::Social))
                                />
                                <ResultCard
                                    title="Blog Article"
                                    icon_name="file-text"
                                    accent="article"
                                    text=result.article
                                    is_copied=Signal::derive(move || vm.is_copied(CopiedField::Article))
                                    on_copy=Callback::new(move |_| vm.copy(CopiedField::Article))
                                />
                            </div>
                        }
                    })
            }}
        </main>
    }
}
