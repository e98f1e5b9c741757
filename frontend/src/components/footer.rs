use yew::prelude::*;
use yew_router::prelude::*;

use crate::forms::newsletter::NewsletterForm;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-primary text-white">
            <div class="container mx-auto px-4 py-16">
                <div class="grid md:grid-cols-3 gap-12">
                    <div>
                        <div class="text-xl font-bold mb-4">{"TalentPro"}</div>
                        <p class="text-white/70">
                            {"Executive search and recruiting for companies that cannot afford the wrong hire."}
                        </p>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">{"Explore"}</h4>
                        <ul class="space-y-2 text-white/70">
                            <li><Link<Route> to={Route::About}>{"About"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Services}>{"Services"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">{"Stay in the loop"}</h4>
                        <p class="text-white/70 mb-4">{"Hiring insights, once a month."}</p>
                        <NewsletterForm />
                    </div>
                </div>
                <div class="border-t border-white/10 mt-12 pt-8 text-sm text-white/50 text-center">
                    {"© TalentPro. All rights reserved."}
                </div>
            </div>
        </footer>
    }
}
