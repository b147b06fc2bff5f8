//! Static landing page content.
//!
//! Everything on the page except the editable identity texts: hero, service
//! cards, the iPhone catalog, testimonials, contact and footer. Embedded as
//! JSON and parsed through the schema types so the document shape is checked
//! by tests rather than trusted.

pub mod schema;

pub use schema::LandingContent;

const LANDING_JSON: &str = include_str!("../../content/landing.json");

/// Parse the embedded landing document.
pub fn landing() -> Result<LandingContent, String> {
    serde_json::from_str(LANDING_JSON)
        .map_err(|e| format!("Embedded landing content is invalid: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_document_parses() {
        let content = landing().expect("landing.json must match the schema");
        assert_eq!(content.brand.name, "The White Order");
        assert!(!content.hero.title_lead.is_empty());
    }

    #[test]
    fn catalog_counts_match_the_page() {
        let content = landing().unwrap();
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.iphone_catalog.models.len(), 3);
        assert_eq!(content.testimonials.len(), 3);
    }

    #[test]
    fn serializes_camel_case_for_the_webview() {
        let content = landing().unwrap();
        let json = serde_json::to_string(&content).unwrap();
        assert!(json.contains("\"iphoneCatalog\""));
        assert!(json.contains("\"whatsappUrl\""));
    }

    #[test]
    fn testimonial_ids_are_unique() {
        let content = landing().unwrap();
        let mut ids: Vec<u32> = content.testimonials.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.testimonials.len());
    }
}
