use yew::prelude::*;

use crate::forms::contact::ContactForm;
use crate::forms::submission::use_submitter;
use crate::icons::{use_icon_refresh, Icon};
use crate::reveal::use_scroll_reveal;

const CONTACT_DETAILS: [(&str, &str, &str); 3] = [
    ("mail", "Email", "hello@talentpro.example"),
    ("phone", "Phone", "+1 (555) 010-2030"),
    ("map-pin", "Office", "100 Market Street, Suite 400"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let submitter = use_submitter();
    use_scroll_reveal();
    use_icon_refresh(());

    html! {
        <div class="contact-page pt-24">
            <section class="py-20 bg-background">
                <div class="container mx-auto px-4">
                    <div class="text-center max-w-3xl mx-auto mb-16">
                        <h1 class="text-5xl font-bold mb-6">{"Get in Touch"}</h1>
                        <p class="text-xl text-muted-foreground">
                            {"Tell us what you are hiring for. A consultant answers every message within one business day."}
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-3 gap-12">
                        <div class="space-y-6">
                            { for CONTACT_DETAILS.iter().map(|(icon, label, value)| html! {
                                <div class="card-hover flex items-center gap-4 bg-card rounded-xl p-6 shadow-sm">
                                    <div class="w-12 h-12 rounded-lg bg-accent/10 text-accent flex items-center justify-center">
                                        <Icon name={*icon} />
                                    </div>
                                    <div>
                                        <div class="text-sm text-muted-foreground">{ *label }</div>
                                        <div class="font-medium">{ *value }</div>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="lg:col-span-2 bg-card rounded-2xl shadow-lg p-8">
                            <ContactForm {submitter} />
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
