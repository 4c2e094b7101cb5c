//! Section descriptors and resolvers.
//!
//! A page is built from named *sections*. Each section is described once, as
//! a `static` descriptor that ties together everything needed to produce it:
//!
//! ```text
//! SingletonSection<T>                     ListSection<T>
//! ├── name          "gallery"             ├── name          "gallery items"
//! ├── content_type  "gallerySection"      ├── content_type  "galleryItem"
//! ├── include       2                     ├── order         "fields.order"
//! ├── map           RawEntry -> T         ├── map           RawEntry -> T
//! ├── is_vacant     &T -> bool            └── fallback      () -> Vec<T>
//! └── fallback      () -> T
//! ```
//!
//! ## Resolver Contract
//!
//! [`SingletonSection::fetch`] and [`ListSection::fetch`] make exactly one
//! content-client call and never fail: a transport or provider error is
//! logged and reported as absent (`None` / empty). The page composer never
//! sees an error, only an outcome to merge with the fallback.
//!
//! `resolve` is fetch followed by the merge from [`crate::resolve`], which is
//! what the page composers call.
//!
//! ## Modules
//!
//! - [`records`]: the typed record for every section and its field mapping
//! - [`fallback`]: the static fallback value for every section

pub mod fallback;
pub mod records;

use tracing::warn;

use crate::content::{ContentClient, RawEntry};
use crate::resolve::{Resolved, merge_list, merge_singleton};
use records::*;

/// A content type with (at most) one entry.
pub struct SingletonSection<T> {
    pub name: &'static str,
    pub content_type: &'static str,
    /// Link depth to resolve; sections with embedded lists need 2.
    pub include: u8,
    pub map: fn(&RawEntry) -> T,
    pub is_vacant: fn(&T) -> bool,
    pub fallback: fn() -> T,
}

/// A content type whose entries form a list.
pub struct ListSection<T> {
    pub name: &'static str,
    pub content_type: &'static str,
    pub order: Option<&'static str>,
    pub map: fn(&RawEntry) -> T,
    pub fallback: fn() -> Vec<T>,
}

impl<T> SingletonSection<T> {
    pub async fn fetch(&self, client: &dyn ContentClient) -> Option<T> {
        match client.get_singleton(self.content_type, self.include).await {
            Ok(entry) => entry.as_ref().map(self.map),
            Err(e) => {
                warn!(
                    section = self.name,
                    content_type = self.content_type,
                    error = %e,
                    "content fetch failed"
                );
                None
            }
        }
    }

    pub async fn resolve(&self, client: &dyn ContentClient) -> Resolved<T> {
        merge_singleton(
            self.name,
            self.fetch(client).await,
            self.is_vacant,
            self.fallback,
        )
    }
}

impl<T> ListSection<T> {
    pub async fn fetch(&self, client: &dyn ContentClient) -> Vec<T> {
        match client.list_entries(self.content_type, self.order).await {
            Ok(entries) => entries.iter().map(self.map).collect(),
            Err(e) => {
                warn!(
                    section = self.name,
                    content_type = self.content_type,
                    error = %e,
                    "content fetch failed"
                );
                Vec::new()
            }
        }
    }

    pub async fn resolve(&self, client: &dyn ContentClient) -> Resolved<Vec<T>> {
        merge_list(self.name, self.fetch(client).await, self.fallback)
    }
}

fn never_vacant<T>(_: &T) -> bool {
    false
}

// ============================================================================
// Home page
// ============================================================================

pub static HERO: SingletonSection<Hero> = SingletonSection {
    name: "hero",
    content_type: "heroSection",
    include: 1,
    map: Hero::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::hero,
};

pub static SERVICES: ListSection<Service> = ListSection {
    name: "services",
    content_type: "service",
    order: None,
    map: Service::from_entry,
    fallback: fallback::services,
};

pub static ABOUT: SingletonSection<AboutSection> = SingletonSection {
    name: "about",
    content_type: "aboutSection",
    include: 2,
    map: AboutSection::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::about,
};

pub static SERVICES_HEADER: SingletonSection<ServicesHeader> = SingletonSection {
    name: "services header",
    content_type: "servicesHeader",
    include: 1,
    map: ServicesHeader::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::services_header,
};

pub static GALLERY: SingletonSection<GallerySection> = SingletonSection {
    name: "gallery",
    content_type: "gallerySection",
    include: 2,
    map: GallerySection::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::gallery,
};

pub static GALLERY_ITEMS: ListSection<GalleryItem> = ListSection {
    name: "gallery items",
    content_type: "galleryItem",
    order: Some("fields.order"),
    map: GalleryItem::from_entry,
    fallback: fallback::gallery_items,
};

pub static TESTIMONIALS: SingletonSection<TestimonialsSection> = SingletonSection {
    name: "testimonials",
    content_type: "testimonialsSection",
    include: 2,
    map: TestimonialsSection::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::testimonials,
};

// ============================================================================
// Layout
// ============================================================================

pub static HEADER: SingletonSection<HeaderContent> = SingletonSection {
    name: "header",
    content_type: "headerContent",
    include: 2,
    map: HeaderContent::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::header,
};

pub static FOOTER: SingletonSection<FooterContent> = SingletonSection {
    name: "footer",
    content_type: "footerContent",
    include: 2,
    map: FooterContent::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::footer,
};

// ============================================================================
// About, services and contact pages
// ============================================================================

pub static ABOUT_US_HERO: SingletonSection<PageHero> = SingletonSection {
    name: "about-us hero",
    content_type: "aboutUsHero",
    include: 1,
    map: PageHero::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::about_us_hero,
};

pub static TRADITIONAL_MODERN: SingletonSection<TraditionalModernSection> = SingletonSection {
    name: "traditional and modern",
    content_type: "traditionalModernSection",
    include: 1,
    map: TraditionalModernSection::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::traditional_modern,
};

pub static PROCESS: SingletonSection<ProcessSection> = SingletonSection {
    name: "process",
    content_type: "processSection",
    include: 2,
    map: ProcessSection::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::process,
};

pub static FEATURES: SingletonSection<FeaturesSection> = SingletonSection {
    name: "features",
    content_type: "featuresSection",
    include: 2,
    map: FeaturesSection::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::features,
};

pub static SERVICES_HERO: SingletonSection<PageHero> = SingletonSection {
    name: "services hero",
    content_type: "servicesHero",
    include: 1,
    map: PageHero::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::services_hero,
};

pub static CONTACT_HERO: SingletonSection<PageHero> = SingletonSection {
    name: "contact hero",
    content_type: "contactHero",
    include: 1,
    map: PageHero::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::contact_hero,
};

pub static CONTACT_FORM: SingletonSection<ContactFormSection> = SingletonSection {
    name: "contact form",
    content_type: "contactFormSection",
    include: 1,
    map: ContactFormSection::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::contact_form,
};

pub static OFFICE_ADDRESSES: SingletonSection<OfficeAddressesSection> = SingletonSection {
    name: "office addresses",
    content_type: "officeAddressesSection",
    include: 2,
    map: OfficeAddressesSection::from_entry,
    is_vacant: never_vacant,
    fallback: fallback::office_addresses,
};

// ============================================================================
// Portfolio
// ============================================================================

pub static PORTFOLIO_HERO: SingletonSection<PageHero> = SingletonSection {
    name: "portfolio hero",
    content_type: "portfolioHero",
    include: 1,
    map: PageHero::from_portfolio_entry,
    is_vacant: never_vacant,
    fallback: fallback::portfolio_hero,
};

pub static ONGOING_PROJECTS: SingletonSection<ProjectsSection> = SingletonSection {
    name: "ongoing projects",
    content_type: "ongoingProjectsSection",
    include: 2,
    map: ProjectsSection::ongoing_from_entry,
    is_vacant: ProjectsSection::is_vacant,
    fallback: fallback::ongoing_projects,
};

pub static COMPLETED_PROJECTS: SingletonSection<ProjectsSection> = SingletonSection {
    name: "completed projects",
    content_type: "completedProjectsSection",
    include: 2,
    map: ProjectsSection::completed_from_entry,
    is_vacant: ProjectsSection::is_vacant,
    fallback: fallback::completed_projects,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Origin;
    use crate::test_helpers::FakeContent;
    use serde_json::json;

    #[tokio::test]
    async fn singleton_fetch_maps_the_entry() {
        let client = FakeContent::empty().with("heroSection", json!({"title": "Bespoke"}));
        let hero = HERO.fetch(&client).await.unwrap();
        assert_eq!(hero.title, "Bespoke");
        assert_eq!(client.call_count("heroSection"), 1);
    }

    #[tokio::test]
    async fn singleton_fetch_absorbs_errors() {
        let client = FakeContent::empty().fail("heroSection");
        assert!(HERO.fetch(&client).await.is_none());
        assert_eq!(client.call_count("heroSection"), 1);
    }

    #[tokio::test]
    async fn list_fetch_absorbs_errors() {
        let client = FakeContent::failing();
        assert!(SERVICES.fetch(&client).await.is_empty());
    }

    #[tokio::test]
    async fn list_fetch_sends_order_key() {
        let client = FakeContent::empty();
        GALLERY_ITEMS.fetch(&client).await;
        assert_eq!(
            client.calls(),
            vec![("galleryItem".to_string(), Some("fields.order".to_string()))]
        );
    }

    #[tokio::test]
    async fn resolve_falls_back_for_every_singleton_on_failure() {
        let client = FakeContent::failing();
        assert!(HERO.resolve(&client).await.is_fallback());
        assert!(ABOUT.resolve(&client).await.is_fallback());
        assert!(SERVICES_HEADER.resolve(&client).await.is_fallback());
        assert!(GALLERY.resolve(&client).await.is_fallback());
        assert!(TESTIMONIALS.resolve(&client).await.is_fallback());
        assert!(HEADER.resolve(&client).await.is_fallback());
        assert!(FOOTER.resolve(&client).await.is_fallback());
        assert!(ABOUT_US_HERO.resolve(&client).await.is_fallback());
        assert!(TRADITIONAL_MODERN.resolve(&client).await.is_fallback());
        assert!(PROCESS.resolve(&client).await.is_fallback());
        assert!(FEATURES.resolve(&client).await.is_fallback());
        assert!(SERVICES_HERO.resolve(&client).await.is_fallback());
        assert!(CONTACT_HERO.resolve(&client).await.is_fallback());
        assert!(CONTACT_FORM.resolve(&client).await.is_fallback());
        assert!(OFFICE_ADDRESSES.resolve(&client).await.is_fallback());
        assert!(PORTFOLIO_HERO.resolve(&client).await.is_fallback());
        assert!(ONGOING_PROJECTS.resolve(&client).await.is_fallback());
        assert!(COMPLETED_PROJECTS.resolve(&client).await.is_fallback());
    }

    #[tokio::test]
    async fn resolve_falls_back_for_every_list_when_empty() {
        let client = FakeContent::empty();
        let services = SERVICES.resolve(&client).await;
        assert_eq!(services.origin, Origin::Fallback);
        assert_eq!(services.value, fallback::services());

        let items = GALLERY_ITEMS.resolve(&client).await;
        assert_eq!(items.origin, Origin::Fallback);
        assert_eq!(items.value, fallback::gallery_items());
    }

    #[tokio::test]
    async fn empty_gallery_items_use_the_fallback_items_in_order() {
        let client = FakeContent::empty();
        let items = GALLERY_ITEMS.resolve(&client).await.value;
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        let expected: Vec<String> = fallback::gallery_items()
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(titles, expected);
        assert_eq!(items.len(), 6);
    }

    #[tokio::test]
    async fn vacant_projects_section_is_replaced() {
        let client = FakeContent::empty().with(
            "ongoingProjectsSection",
            json!({"sectionTitle": "Now Building", "projects": []}),
        );
        let resolved = ONGOING_PROJECTS.resolve(&client).await;
        assert!(resolved.is_fallback());
        assert!(!resolved.value.projects.is_empty());
    }

    #[tokio::test]
    async fn contact_form_without_options_keeps_live_copy() {
        let client = FakeContent::empty().with(
            "contactFormSection",
            json!({
                "title": "Talk To Our Joiners",
                "subtitle": "Live copy",
                "projectTypeOptions": []
            }),
        );
        let resolved = CONTACT_FORM.resolve(&client).await;
        assert_eq!(resolved.origin, Origin::Live);
        assert_eq!(resolved.value.title, "Talk To Our Joiners");
        assert!(resolved.value.project_type_options.is_empty());
    }

    #[tokio::test]
    async fn gallery_without_items_keeps_live_copy() {
        let client = FakeContent::empty().with(
            "gallerySection",
            json!({"title": "Recent Work", "galleryItem": []}),
        );
        let resolved = GALLERY.resolve(&client).await;
        assert_eq!(resolved.origin, Origin::Live);
        assert_eq!(resolved.value.title, "Recent Work");
    }

    #[tokio::test]
    async fn populated_contact_form_is_live() {
        let client = FakeContent::empty().with(
            "contactFormSection",
            json!({"projectTypeOptions": ["Staircases"]}),
        );
        let resolved = CONTACT_FORM.resolve(&client).await;
        assert_eq!(resolved.origin, Origin::Live);
        assert_eq!(resolved.value.project_type_options, vec!["Staircases"]);
        assert_eq!(resolved.value.title, "Get In Touch");
    }
}
