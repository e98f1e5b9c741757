use yew::prelude::*;
use yew_router::prelude::*;

use crate::icons::{use_icon_refresh, Icon};
use crate::reveal::use_scroll_reveal;
use crate::services::{active_service, ServicesSelection, SERVICES};
use crate::Route;

#[function_component(ServicesPanel)]
pub fn services_panel() -> Html {
    let selection = use_state_eq(ServicesSelection::default);
    use_icon_refresh(selection.active_index());

    let select = {
        let selection = selection.clone();
        Callback::from(move |index: usize| {
            let mut next = *selection;
            if next.select(index) {
                selection.set(next);
            }
        })
    };

    let service = active_service(&selection);
    let tab_classes = selection.tab_classes();

    html! {
        <div class="services-panel">
            <div class="flex flex-wrap justify-center gap-3 mb-12" role="tablist">
                { for SERVICES.iter().zip(tab_classes).enumerate().map(|(i, (entry, class))| {
                    let onclick = {
                        let select = select.clone();
                        Callback::from(move |_: MouseEvent| select.emit(i))
                    };
                    html! {
                        <button
                            class={class}
                            role="tab"
                            aria-selected={(i == selection.active_index()).to_string()}
                            {onclick}
                        >
                            { entry.title }
                        </button>
                    }
                }) }
            </div>

            <div class="bg-card rounded-2xl shadow-lg p-8 md:p-12 max-w-4xl mx-auto" role="tabpanel">
                <div class="flex items-start gap-6">
                    <div class="w-16 h-16 shrink-0 rounded-xl bg-accent/10 text-accent flex items-center justify-center">
                        <span id="service-detail-icon"><Icon name={service.icon} class="w-8 h-8" /></span>
                    </div>
                    <div>
                        <h3 id="service-detail-title" class="text-3xl font-bold mb-2">{ service.title }</h3>
                        <p id="service-detail-subtitle" class="text-accent font-medium mb-4">{ service.subtitle }</p>
                        <p id="service-detail-description" class="text-muted-foreground leading-relaxed">{ service.description }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_reveal();

    html! {
        <div class="services-page pt-24">
            <section class="py-20 bg-background">
                <div class="container mx-auto px-4">
                    <div class="text-center max-w-3xl mx-auto mb-16">
                        <h1 class="text-5xl font-bold mb-6">{"Our Services"}</h1>
                        <p class="text-xl text-muted-foreground">
                            {"Quis autem vel eum iure reprehenderit qui in ea voluptate velit esse quam nihil molestiae."}
                        </p>
                    </div>
                    <ServicesPanel />
                </div>
            </section>

            <section class="py-20 bg-muted/30">
                <div class="container mx-auto px-4 text-center">
                    <div class="card-hover bg-card rounded-2xl p-10 max-w-2xl mx-auto shadow-sm">
                        <h2 class="text-3xl font-bold mb-4">{"Not sure where to start?"}</h2>
                        <p class="text-muted-foreground mb-8">
                            {"Tell us about the role and we will suggest the right engagement."}
                        </p>
                        <Link<Route> to={Route::Contact} classes="inline-flex px-8 py-4 rounded-lg bg-accent text-accent-foreground font-semibold">
                            {"Talk to a Consultant"}
                        </Link<Route>>
                    </div>
                </div>
            </section>
        </div>
    }
}
