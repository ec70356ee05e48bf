use dioxus::prelude::*;

/// Page body below the fixed header.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen pt-32 pb-16 {class}",
            div { class: "container mx-auto px-6",
                {children}
            }
        }
    )
}
