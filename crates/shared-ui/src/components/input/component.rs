use dioxus::prelude::*;

/// Rounded text input with an optional leading icon.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] icon: Option<Element>,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_icon = icon.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if let Some(icon) = icon {
                span { class: "input-icon", {icon} }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "data-icon": has_icon,
                "aria-invalid": error.is_some(),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
        if let Some(msg) = error {
            div { class: "input-error", "{msg}" }
        }
    }
}
