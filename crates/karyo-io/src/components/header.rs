//! Application header with brand mark and page navigation.

use dioxus::prelude::*;

use crate::page::Page;

/// Props for the [`Header`] component.
#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    /// Currently active page, highlighted in the navigation.
    active: Page,
    /// Fired with the selected page when a navigation button is
    /// clicked.
    on_navigate: EventHandler<Page>,
}

/// Top navigation bar.
#[component]
pub fn Header(props: HeaderProps) -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "brand",
                span { class: "brand-mark", "K" }
                h1 { class: "brand-name", "KaryoType Assistant" }
            }
            nav { class: "app-nav",
                for page in Page::ALL {
                    {render_nav_button(page, props.active == page, &props.on_navigate)}
                }
            }
        }
    }
}

/// Render one navigation button.
fn render_nav_button(page: Page, is_active: bool, on_navigate: &EventHandler<Page>) -> Element {
    let class = if is_active {
        "nav-button nav-button-active"
    } else {
        "nav-button"
    };
    let aria_current = if is_active { "page" } else { "false" };
    let onclick = {
        let on_navigate = *on_navigate;
        move |_| on_navigate.call(page)
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "aria-current": "{aria_current}",
            "{page.label()}"
        }
    }
}
