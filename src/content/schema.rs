use serde::{Deserialize, Serialize};

/// Root of the landing page content document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingContent {
    pub brand: Brand,
    pub nav: Nav,
    pub hero: Hero,
    pub identity_section: IdentitySection,
    pub services: Vec<ServiceFeature>,
    pub iphone_catalog: IphoneCatalog,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactSection,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub wordmark: String,
    pub initial: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nav {
    pub links: Vec<Link>,
    pub contact_cta: Link,
    pub guide_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub badge: String,
    pub title_lead: String,
    pub title_accent: String,
    pub subtitle: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    pub image_seed: String,
}

/// Static chrome around the editable identity texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySection {
    pub heading: String,
    pub edit_label: String,
    pub cancel_label: String,
    pub mission_label: String,
    pub image_seed: String,
    pub overlay_quote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFeature {
    pub title: String,
    pub description: String,
    /// Icon id the frontend maps to its icon set (e.g. "truck").
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IphoneCatalog {
    pub heading: String,
    pub subheading: String,
    pub cta_label: String,
    pub models: Vec<IphoneModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IphoneModel {
    pub name: String,
    pub price: String,
    pub image_seed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub text: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    pub title: String,
    pub body: String,
    pub whatsapp_url: String,
    pub tiktok_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub description: String,
    pub legal_name: String,
}
