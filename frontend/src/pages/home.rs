use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav::AnchorLink;
use crate::icons::{use_icon_refresh, Icon};
use crate::reveal::{hero_class, use_hero_reveal, use_scroll_reveal};
use crate::services::SERVICES;
use crate::Route;

pub const STATS: [(&str, &str); 4] = [
    ("500+", "Placements Made"),
    ("98%", "Client Retention"),
    ("15", "Years Experience"),
    ("40+", "Industries Served"),
];

pub const PROCESS_STEPS: [(&str, &str); 4] = [
    ("Discovery", "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque."),
    ("Search", "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit."),
    ("Selection", "Neque porro quisquam est qui dolorem ipsum quia dolor sit amet consectetur."),
    ("Placement", "Ut enim ad minima veniam quis nostrum exercitationem ullam corporis suscipit."),
];

#[function_component(StatsGrid)]
pub fn stats_grid() -> Html {
    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
            { for STATS.iter().map(|(value, label)| html! {
                <div class="stat-item text-center">
                    <div class="text-4xl font-bold text-accent mb-2">{ *value }</div>
                    <div class="text-muted-foreground">{ *label }</div>
                </div>
            }) }
        </div>
    }
}

#[function_component(ProcessTimeline)]
pub fn process_timeline() -> Html {
    html! {
        <div class="timeline-container relative max-w-3xl mx-auto space-y-12">
            { for PROCESS_STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                <div class="relative pl-12">
                    <div class="absolute left-0 top-0 w-8 h-8 rounded-full bg-accent text-accent-foreground flex items-center justify-center font-bold">
                        { i + 1 }
                    </div>
                    <h3 class="text-xl font-semibold mb-2">{ *title }</h3>
                    <p class="text-muted-foreground">{ *text }</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let hero_revealed = use_hero_reveal();
    use_scroll_reveal();
    use_icon_refresh(());

    html! {
        <div class="home-page">
            // Hero
            <section class="relative min-h-screen flex items-center bg-primary">
                <div class="container mx-auto px-4 py-32">
                    <div class={hero_class(hero_revealed)}>
                        <h1 class="text-5xl md:text-6xl font-bold text-white mb-6">
                            {"Connecting Exceptional Talent with Visionary Companies"}
                        </h1>
                        <p class="text-xl text-white/80 mb-10 max-w-2xl">
                            {"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore."}
                        </p>
                        <div class="flex flex-wrap gap-4">
                            <Link<Route> to={Route::Contact} classes="inline-flex items-center gap-2 px-8 py-4 rounded-lg bg-accent text-accent-foreground font-semibold">
                                {"Start Hiring"}
                                <Icon name="arrow-right" class="w-5 h-5" />
                            </Link<Route>>
                            <AnchorLink href="#services-preview" class="inline-flex items-center px-8 py-4 rounded-lg border border-white/30 text-white font-semibold">
                                {"Our Services"}
                            </AnchorLink>
                        </div>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-background">
                <div class="container mx-auto px-4">
                    <StatsGrid />
                </div>
            </section>

            <section id="services-preview" class="py-20 bg-muted/30">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center mb-12">{"What We Do"}</h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="card-hover bg-card rounded-xl p-6 shadow-sm">
                                <div class="w-12 h-12 rounded-lg bg-accent/10 text-accent flex items-center justify-center mb-4">
                                    <Icon name={service.icon} />
                                </div>
                                <h3 class="text-lg font-semibold mb-2">{ service.title }</h3>
                                <p class="text-sm text-muted-foreground">{ service.subtitle }</p>
                            </div>
                        }) }
                    </div>
                    <div class="text-center mt-10">
                        <Link<Route> to={Route::Services} classes="text-accent font-semibold">
                            {"Explore all services"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-background">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center mb-12">{"How We Work"}</h2>
                    <ProcessTimeline />
                </div>
            </section>
        </div>
    }
}
