use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            class: "page",
            h1 {
                class: "page-title",
                "Light & Dark"
            }
            p {
                class: "page-text",
                "The page follows your system color scheme until you pick one with the toggle above. Your choice is remembered."
            }
        }
    }
}
