use leptos::*;
use leptos_router::*;

use crate::components::navbar::Navbar;
use crate::head;
use crate::pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <PageShell>
                <Routes>
                    <Route path="/" view=HomePage />
                </Routes>
            </PageShell>
        </Router>
    }
}

/// Root page wrapper: applies the document metadata once on mount and
/// centers all page content.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    create_effect(move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                head::apply_document_metadata(&document, &head::SITE_METADATA);
            }
        }
    });

    view! {
        <main class="container">
            {children()}
        </main>
    }
}
