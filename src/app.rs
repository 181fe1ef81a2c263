use dioxus::prelude::*;

use crate::{
    domain::SessionHistory,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::SimulatorPage,
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Simulator {},
}

#[component]
pub fn App() -> Element {
    // Session-scoped state: the history lives and dies with this window.
    let history = use_signal(SessionHistory::default);
    use_context_provider(|| history);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Simulator() -> Element {
    rsx! { Shell { SimulatorPage {} } }
}
