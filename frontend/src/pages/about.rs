use yew::prelude::*;

use crate::icons::{use_icon_refresh, Icon};
use crate::pages::home::{ProcessTimeline, StatsGrid};
use crate::reveal::use_scroll_reveal;

const VALUES: [(&str, &str, &str); 3] = [
    ("shield-check", "Integrity", "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore."),
    ("handshake", "Partnership", "Excepteur sint occaecat cupidatat non proident sunt in culpa qui officia."),
    ("trending-up", "Results", "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium."),
];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_reveal();
    use_icon_refresh(());

    html! {
        <div class="about-page pt-24">
            <section class="py-20 bg-background">
                <div class="container mx-auto px-4 max-w-3xl text-center">
                    <h1 class="text-5xl font-bold mb-6">{"About TalentPro"}</h1>
                    <p class="text-xl text-muted-foreground">
                        {"Lorem ipsum dolor sit amet, consectetur adipiscing elit. For fifteen years we have matched leaders with the organisations that need them."}
                    </p>
                </div>
            </section>

            <section class="py-16 bg-muted/30">
                <div class="container mx-auto px-4">
                    <StatsGrid />
                </div>
            </section>

            <section class="py-20 bg-background">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center mb-12">{"Our Values"}</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        { for VALUES.iter().map(|(icon, title, text)| html! {
                            <div class="card-hover bg-card rounded-xl p-8 shadow-sm text-center">
                                <div class="w-14 h-14 mx-auto rounded-full bg-accent/10 text-accent flex items-center justify-center mb-4">
                                    <Icon name={*icon} />
                                </div>
                                <h3 class="text-xl font-semibold mb-3">{ *title }</h3>
                                <p class="text-muted-foreground">{ *text }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-20 bg-muted/30">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center mb-12">{"Our Journey"}</h2>
                    <ProcessTimeline />
                </div>
            </section>
        </div>
    }
}
