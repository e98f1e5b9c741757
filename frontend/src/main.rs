use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod icons;
mod motion;
mod nav;
mod page_events;
mod reveal;
mod services;

mod components {
    pub mod footer;
    pub mod nav;
    pub mod success_modal;
}
mod forms {
    pub mod contact;
    pub mod newsletter;
    pub mod submission;
    pub mod validation;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
}

use components::{footer::Footer, nav::Nav};
use forms::submission::SubmitterHandle;
use motion::MotionPreference;
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    services::Services,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="min-h-screen flex flex-col items-center justify-center gap-6 pt-24">
                    <h1 class="text-4xl font-bold">{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-accent font-semibold">
                        {"Back to the home page"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[derive(Properties, PartialEq)]
struct AppProps {
    motion: MotionPreference,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let submitter = use_state(SubmitterHandle::from_config);

    html! {
        <ContextProvider<MotionPreference> context={props.motion}>
            <ContextProvider<SubmitterHandle> context={(*submitter).clone()}>
                <BrowserRouter>
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </BrowserRouter>
            </ContextProvider<SubmitterHandle>>
        </ContextProvider<MotionPreference>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let motion = motion::install();
    page_events::install();

    info!("Starting TalentPro site");
    yew::Renderer::<App>::with_props(AppProps { motion }).render();
}
