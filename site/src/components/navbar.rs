use leptos::*;
use wasm_bindgen::JsCast;

/// Vertical scroll offset in pixels past which the bar picks up its
/// elevated (frosted, shadowed) style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

const LOGO_URL: &str =
    "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?auto=format&fit=crop&w=100&q=80";

/// A single in-page navigation destination.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    /// Matches the `id` of a section element on the page.
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The fixed set of destinations, in display order. Both the desktop row
/// and the mobile panel iterate this same array.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        id: "services",
        label: "שירותים",
        icon: "📷",
    },
    NavItem {
        id: "gallery",
        label: "גלריה",
        icon: "🖼️",
    },
    NavItem {
        id: "testimonials",
        label: "המלצות",
        icon: "💬",
    },
    NavItem {
        id: "about",
        label: "אודות",
        icon: "ℹ️",
    },
    NavItem {
        id: "faq",
        label: "שאלות נפוצות",
        icon: "❓",
    },
    NavItem {
        id: "contact",
        label: "צור קשר",
        icon: "✉️",
    },
];

/// True once the page has scrolled past the threshold. Pure function of the
/// offset; rapid toggling near the threshold is acceptable for a visual-only
/// effect, so there is no hysteresis.
pub fn is_elevated(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Smooth-scrolls the viewport to the section with the given id. A missing
/// section is silently ignored.
pub fn scroll_to_section(id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(element) = document.get_element_by_id(id) {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

/// Window scroll subscription that detaches its handler again when dropped.
struct ScrollSubscription {
    handler: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

impl ScrollSubscription {
    /// Registers `on_scroll` for every window scroll event, passing the
    /// current vertical offset.
    fn attach(on_scroll: impl Fn(f64) + 'static) -> Option<Self> {
        let handler = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                if let Ok(offset) = window.scroll_y() {
                    on_scroll(offset);
                }
            }
        }) as Box<dyn FnMut(_)>);

        let window = web_sys::window()?;
        window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { handler })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.handler.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Fixed site-wide navigation bar. Transparent over the hero, frosted once
/// the page scrolls; collapses into a hamburger-triggered panel on narrow
/// viewports.
#[component]
pub fn Navbar() -> impl IntoView {
    let is_open = create_rw_signal(false);
    let scrolled = create_rw_signal(false);

    // Track the window scroll position for the elevated style. The listener
    // is registered on mount and removed again on cleanup.
    create_effect(move |_| {
        let subscription =
            ScrollSubscription::attach(move |offset| scrolled.set(is_elevated(offset)));
        on_cleanup(move || drop(subscription));
    });

    let nav_class = move || {
        if scrolled.get() {
            "navbar navbar-elevated"
        } else {
            "navbar"
        }
    };

    let toggle_label = move || {
        if is_open.get() {
            "סגור תפריט"
        } else {
            "פתח תפריט"
        }
    };

    view! {
        <nav id="navbar" dir="rtl" class=nav_class aria-label="ניווט ראשי">
            <div class="navbar-inner">
                <a href="/" class="navbar-brand">
                    <img
                        class="navbar-logo"
                        src=LOGO_URL
                        alt="לוגו סטודיו לצילום אלפא"
                    />
                    <span class="navbar-title">"סטודיו לצילום אלפא"</span>
                </a>

                <div class="navbar-links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let item = *item;
                            view! {
                                <button
                                    class="navbar-link"
                                    aria-label=format!("ניווט אל {}", item.label)
                                    on:click=move |_| {
                                        is_open.set(false);
                                        scroll_to_section(item.id);
                                    }
                                >
                                    <span class="navbar-link-icon" aria-hidden="true">
                                        {item.icon}
                                    </span>
                                    <span>{item.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="navbar-toggle"
                    aria-expanded=move || is_open.get().to_string()
                    aria-label=toggle_label
                    on:click=move |_| is_open.update(|open| *open = !*open)
                >
                    {move || if is_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || is_open.get() fallback=|| ()>
                <div class="navbar-menu">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let item = *item;
                            view! {
                                <button
                                    class="navbar-menu-link"
                                    aria-label=format!("ניווט אל {}", item.label)
                                    on:click=move |_| {
                                        is_open.set(false);
                                        scroll_to_section(item.id);
                                    }
                                >
                                    <span class="navbar-link-icon" aria-hidden="true">
                                        {item.icon}
                                    </span>
                                    <span>{item.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
