use leptos::*;

/// Anchored page section. The `id` is the scroll target the navigation bar
/// resolves against.
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="page-section">
            <h2 class="page-section-title">{title}</h2>
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_section_renders_anchor_and_title() {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        let parent: web_sys::HtmlElement = host.clone().dyn_into().unwrap();

        mount_to(parent, || {
            view! {
                <Section id="about" title="אודות">
                    <p>"תוכן"</p>
                </Section>
            }
        });

        let section = host
            .query_selector("section#about.page-section")
            .unwrap()
            .unwrap();
        let title = section
            .query_selector(".page-section-title")
            .unwrap()
            .unwrap();
        assert_eq!(title.text_content().as_deref(), Some("אודות"));

        host.remove();
    }
}
