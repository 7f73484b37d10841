use web_sys::Document;

/// Social-preview image with the explicit dimensions crawlers expect.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PreviewImage {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

/// Static document metadata consumed by search engines and link-preview
/// crawlers.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub canonical_url: &'static str,
    pub site_name: &'static str,
    pub locale: &'static str,
    pub image: PreviewImage,
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "סטודיו לצילום אלפא | סטודיו צילום מקצועי בישראל",
    description: "סטודיו לצילום מוביל המספק שירות מקצועי ואיכותי. הזמינו תור עוד היום!",
    keywords: "סטודיו לצילום, שירות, איכות, מקצועיות, ישראל, צילום, סטודיו לצילום אלפא",
    canonical_url: "https://alpha-photography.com",
    site_name: "סטודיו לצילום אלפא",
    locale: "he_IL",
    image: PreviewImage {
        url: "https://images.unsplash.com/photo-1542038784456-1ea8e935640e",
        width: 1200,
        height: 630,
        alt: "סטודיו לצילום אלפא",
    },
};

/// Writes the full metadata surface into the live document: title, root
/// lang/dir, standard meta tags, the Open Graph block and the Twitter card
/// block. Existing tags with the same key are updated in place, so repeated
/// application leaves a single tag per key.
pub fn apply_document_metadata(document: &Document, metadata: &SiteMetadata) {
    document.set_title(metadata.title);

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", "he");
        let _ = root.set_attribute("dir", "rtl");
    }

    set_meta(document, "name", "description", metadata.description);
    set_meta(document, "name", "keywords", metadata.keywords);

    set_meta(document, "property", "og:type", "website");
    set_meta(document, "property", "og:locale", metadata.locale);
    set_meta(document, "property", "og:url", metadata.canonical_url);
    set_meta(document, "property", "og:title", metadata.title);
    set_meta(document, "property", "og:description", metadata.description);
    set_meta(document, "property", "og:site_name", metadata.site_name);
    set_meta(document, "property", "og:image", metadata.image.url);
    set_meta(
        document,
        "property",
        "og:image:width",
        &metadata.image.width.to_string(),
    );
    set_meta(
        document,
        "property",
        "og:image:height",
        &metadata.image.height.to_string(),
    );
    set_meta(document, "property", "og:image:alt", metadata.image.alt);

    set_meta(document, "name", "twitter:card", "summary_large_image");
    set_meta(document, "name", "twitter:title", metadata.title);
    set_meta(document, "name", "twitter:description", metadata.description);
    set_meta(document, "name", "twitter:image", metadata.image.url);
}

/// Upserts a single `<meta>` tag in the document head, keyed by either
/// `name` or `property`.
fn set_meta(document: &Document, key_attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{}='{}']", key_attr, key);
    if let Ok(Some(existing)) = document.query_selector(&selector) {
        let _ = existing.set_attribute("content", content);
        return;
    }

    if let Some(head) = document.head() {
        if let Ok(element) = document.create_element("meta") {
            let _ = element.set_attribute(key_attr, key);
            let _ = element.set_attribute("content", content);
            let _ = head.append_child(&element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_apply_sets_title_and_direction() {
        let document = document();
        apply_document_metadata(&document, &SITE_METADATA);

        assert_eq!(document.title(), SITE_METADATA.title);
        let root = document.document_element().unwrap();
        assert_eq!(root.get_attribute("lang").as_deref(), Some("he"));
        assert_eq!(root.get_attribute("dir").as_deref(), Some("rtl"));
    }

    #[wasm_bindgen_test]
    fn test_apply_writes_open_graph_block() {
        let document = document();
        apply_document_metadata(&document, &SITE_METADATA);

        let og_image = document
            .query_selector("meta[property='og:image']")
            .unwrap()
            .unwrap();
        assert_eq!(
            og_image.get_attribute("content").as_deref(),
            Some(SITE_METADATA.image.url)
        );

        let og_width = document
            .query_selector("meta[property='og:image:width']")
            .unwrap()
            .unwrap();
        assert_eq!(og_width.get_attribute("content").as_deref(), Some("1200"));
    }

    #[wasm_bindgen_test]
    fn test_apply_writes_twitter_card_block() {
        let document = document();
        apply_document_metadata(&document, &SITE_METADATA);

        let card = document
            .query_selector("meta[name='twitter:card']")
            .unwrap()
            .unwrap();
        assert_eq!(
            card.get_attribute("content").as_deref(),
            Some("summary_large_image")
        );
    }

    #[wasm_bindgen_test]
    fn test_apply_is_idempotent() {
        let document = document();
        apply_document_metadata(&document, &SITE_METADATA);
        apply_document_metadata(&document, &SITE_METADATA);

        let descriptions = document
            .query_selector_all("meta[name='description']")
            .unwrap();
        assert_eq!(descriptions.length(), 1);
    }
}
