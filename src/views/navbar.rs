use dioxus::prelude::*;
use crate::configs::ThemeConfig;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let config = use_context::<ThemeConfig>();
    let toggle_id = config.toggle_id.clone();

    // The controller owns the toggle's inner markup, so bind once the button is in the DOM.
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            match crate::theme::bind_theme_controller(config.clone()) {
                Ok(_) => log::info!("Theme controller bound to #{}", config.toggle_id),
                Err(e) => log::warn!("Theme controller unavailable: {}", e),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &config;
        }
    });

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar",
                div {
                    id: "navbar",
                    class: "navbar-inner",
                    Link {
                        class: "navbar-link",
                        to: Route::Home,
                        "Home"
                    }
                    button {
                        id: "{toggle_id}",
                        class: "theme-toggle",
                        r#type: "button",
                        aria_label: "Toggle theme",
                        title: "Toggle theme",
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
