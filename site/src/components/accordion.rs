use leptos::*;

/// Collapsible block using details/summary, used for the FAQ entries.
#[component]
pub fn Accordion(
    #[prop(into)] summary: String,
    #[prop(optional)] open: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("accordion {}", extra)
    } else {
        "accordion".to_string()
    };

    view! {
        <details class=full_class open=open>
            <summary class="accordion-summary">{summary}</summary>
            <div class="accordion-body">
                {children()}
            </div>
        </details>
    }
}
