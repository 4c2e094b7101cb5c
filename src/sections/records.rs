//! Typed section records and their mappings from raw CMS entries.
//!
//! Every record has all of its fields; each `from_entry` applies the defaults
//! for fields the entry leaves out. Where the CMS model has a meaningful
//! default (a gallery subtitle, a step number, an icon name) it is applied
//! here, once, rather than in the templates.

use serde::Serialize;

use crate::content::RawEntry;

// ============================================================================
// Home page
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub background_image: Option<String>,
}

impl Hero {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text("title"),
            subtitle: entry.text("subtitle"),
            cta_text: entry.text("ctaText"),
            cta_link: entry.text("ctaLink"),
            background_image: entry.asset_url("backgroundImage"),
        }
    }
}

/// One service card. `background` and `text_color` are the CMS's colour
/// tokens (e.g. `bg-white`); the renderer turns them into a card tone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub background: String,
    pub text_color: String,
}

impl Service {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text("title"),
            description: entry.text("description"),
            icon: entry.text("icon"),
            background: entry.text("backgroundColor"),
            text_color: entry.text("textColor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutSection {
    pub title: String,
    pub subtitle: String,
    /// Markdown.
    pub description: String,
    pub vision_items: Vec<VisionItem>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisionItem {
    pub title: String,
    pub description: String,
}

impl AboutSection {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text("title"),
            subtitle: entry.text("subtitle"),
            description: entry.text("description"),
            vision_items: entry
                .entries("visionItems")
                .iter()
                .map(|item| VisionItem {
                    title: item.text("title"),
                    description: item.text("description"),
                })
                .collect(),
            image: entry.asset_url("image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesHeader {
    pub subtitle: String,
    pub title: String,
    pub description: String,
    pub background_image: Option<String>,
}

impl ServicesHeader {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            subtitle: entry.text("subtitle"),
            title: entry.text("title"),
            description: entry.text("description"),
            background_image: entry.asset_url("backgroundImage"),
        }
    }
}

/// Grid footprint of a gallery tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GridSpan {
    Single,
    Double,
    Full,
}

impl GridSpan {
    /// Parse the CMS's layout token (`col-span-1`, `col-span-1 md:col-span-2`,
    /// `col-span-full`). Anything unrecognised is a single cell.
    pub fn parse(token: &str) -> Self {
        if token.contains("col-span-full") {
            GridSpan::Full
        } else if token.contains("col-span-2") {
            GridSpan::Double
        } else {
            GridSpan::Single
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            GridSpan::Single => "span-1",
            GridSpan::Double => "span-2",
            GridSpan::Full => "span-full",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub span: GridSpan,
}

impl GalleryItem {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text("title"),
            description: entry.text("description"),
            image: entry.asset_url("image"),
            span: GridSpan::parse(&entry.text("gridSpan")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GallerySection {
    pub subtitle: String,
    pub title: String,
    pub items: Vec<GalleryItem>,
}

impl GallerySection {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            subtitle: entry.text_or("subtitle", "Gallery"),
            title: entry.text_or("title", "Get To Know Us"),
            items: entry
                .entries("galleryItem")
                .iter()
                .map(GalleryItem::from_entry)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub location: String,
    pub image: Option<String>,
}

impl Testimonial {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            quote: entry.text("quote"),
            name: entry.text("name"),
            location: entry.text("location"),
            image: entry.asset_url("image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialsSection {
    pub subtitle: String,
    pub title: String,
    pub testimonials: Vec<Testimonial>,
}

impl TestimonialsSection {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            subtitle: entry.text_or("subtitle", "Testimonials"),
            title: entry.text_or("title", "What Our Customer Says!!"),
            testimonials: entry
                .entries("testimonial")
                .iter()
                .map(Testimonial::from_entry)
                .collect(),
        }
    }
}

// ============================================================================
// Layout: header and footer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    /// Icon name; empty for header links, which only carry a label.
    pub icon: String,
}

impl SocialLink {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            platform: entry.text("platform"),
            url: entry.text("url"),
            icon: entry.text("icon"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

impl FooterLink {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            label: entry.text("label"),
            url: entry.text("url"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterContent {
    pub logo: Option<String>,
    /// Markdown.
    pub description: String,
    pub social_links: Vec<SocialLink>,
    pub service_links: Vec<FooterLink>,
    pub company_links: Vec<FooterLink>,
    pub support_links: Vec<FooterLink>,
    pub copyright_text: String,
}

impl FooterContent {
    pub fn from_entry(entry: &RawEntry) -> Self {
        let links = |field: &str| -> Vec<FooterLink> {
            entry
                .entries(field)
                .iter()
                .map(FooterLink::from_entry)
                .collect()
        };
        Self {
            logo: entry.asset_url("logo"),
            description: entry.text("description"),
            social_links: entry
                .entries("socialLinks")
                .iter()
                .map(SocialLink::from_entry)
                .collect(),
            service_links: links("serviceLinks"),
            company_links: links("companyLinks"),
            support_links: links("supportLinks"),
            copyright_text: entry.text("copyrightText"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderContent {
    pub logo: Option<String>,
    pub business_hours: String,
    pub phone: String,
    pub address: String,
    pub social_links: Vec<SocialLink>,
}

impl HeaderContent {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            logo: entry.asset_url("logo"),
            business_hours: entry.text("businessHours"),
            phone: entry.text("phone"),
            address: entry.text("address"),
            social_links: entry
                .entries("socialLinks")
                .iter()
                .map(SocialLink::from_entry)
                .collect(),
        }
    }
}

// ============================================================================
// Inner pages
// ============================================================================

/// Banner at the top of the inner pages (about, services, portfolio, contact).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageHero {
    pub title: String,
    pub subtitle: String,
    pub background_image: Option<String>,
}

impl PageHero {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text("title"),
            subtitle: entry.text("subtitle"),
            background_image: entry.asset_url("backgroundImage"),
        }
    }

    /// The portfolio banner stores its strapline under `description`.
    pub fn from_portfolio_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text("title"),
            subtitle: entry.text("description"),
            background_image: entry.asset_url("backgroundImage"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraditionalModernSection {
    pub title: String,
    /// Markdown.
    pub description: String,
    pub contact_link_text: String,
    pub contact_link_url: String,
    pub image: Option<String>,
}

impl TraditionalModernSection {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text("title"),
            description: entry.text("description"),
            contact_link_text: entry.text_or("contactLinkText", "Contact Us"),
            contact_link_url: entry.text_or("contactLinkUrl", "/contact-us"),
            image: entry.asset_url("image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
    pub step_number: String,
    pub background: String,
    pub text_color: String,
}

impl ProcessStep {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text("title"),
            description: entry.text("description"),
            step_number: entry.text_or("stepNumber", "01"),
            background: entry.text_or("backgroundColor", "bg-white"),
            text_color: entry.text_or("textColor", "text-gray-800"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessSection {
    pub subtitle: String,
    pub title: String,
    pub description: String,
    pub steps: Vec<ProcessStep>,
}

impl ProcessSection {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            subtitle: entry.text_or("subtitle", "How We Work"),
            title: entry.text_or("title", "Get Started With Our Process"),
            description: entry.text("description"),
            steps: entry
                .entries("processStep")
                .iter()
                .map(ProcessStep::from_entry)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub background: String,
    pub text_color: String,
    pub icon_background: String,
}

impl FeatureItem {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text("title"),
            description: entry.text("description"),
            icon: entry.text_or("icon", "Target"),
            background: entry.text_or("backgroundColor", "bg-white"),
            text_color: entry.text_or("textColor", "text-gray-800"),
            icon_background: entry.text_or("iconBackgroundColor", "bg-amber-600"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturesSection {
    pub subtitle: String,
    pub title: String,
    pub description: String,
    pub features: Vec<FeatureItem>,
}

impl FeaturesSection {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            subtitle: entry.text_or("subtitle", "Features"),
            title: entry.text_or("title", "Develop ideas into solutions for your business"),
            description: entry.text("description"),
            features: entry
                .entries("featureItem")
                .iter()
                .map(FeatureItem::from_entry)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactFormSection {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub project_type_options: Vec<String>,
}

impl ContactFormSection {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            title: entry.text_or("title", "Get In Touch"),
            subtitle: entry.text_or("subtitle", "Say hay to us!"),
            button_text: entry.text_or("buttonText", "Send Messages"),
            project_type_options: entry.strings("projectTypeOptions"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficeLocation {
    pub location_name: String,
    pub is_active: bool,
    pub phone_numbers: Vec<String>,
    pub email_address: String,
    pub office_address: String,
}

impl OfficeLocation {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            location_name: entry.text("locationName"),
            is_active: entry.flag("isActive"),
            phone_numbers: entry.strings("phoneNumbers"),
            email_address: entry.text("emailAddress"),
            office_address: entry.text("officeAddress"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficeAddressesSection {
    pub subtitle: String,
    pub title: String,
    pub locations: Vec<OfficeLocation>,
}

impl OfficeAddressesSection {
    pub fn from_entry(entry: &RawEntry) -> Self {
        Self {
            subtitle: entry.text_or("subtitle", "Addresses"),
            title: entry.text_or("title", "Our Office Addresses"),
            locations: entry
                .entries("locations")
                .iter()
                .map(OfficeLocation::from_entry)
                .collect(),
        }
    }
}

// ============================================================================
// Portfolio
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Ongoing,
    Completed,
}

impl ProjectStatus {
    fn parse(token: &str, default: ProjectStatus) -> Self {
        match token {
            "ongoing" => ProjectStatus::Ongoing,
            "completed" => ProjectStatus::Completed,
            _ => default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub client: String,
    pub started_on: String,
    pub completed_on: String,
    pub status: ProjectStatus,
    /// Markdown.
    pub description: String,
    pub image: Option<String>,
}

impl Project {
    fn from_entry(entry: &RawEntry, default_status: ProjectStatus) -> Self {
        Self {
            title: entry.text("title"),
            client: entry.text("client"),
            started_on: entry.text("startedOn"),
            completed_on: entry.text("completedOn"),
            status: ProjectStatus::parse(&entry.text("status"), default_status),
            description: entry.text("description"),
            image: entry.asset_url("image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsSection {
    pub section_title: String,
    pub projects: Vec<Project>,
}

impl ProjectsSection {
    pub fn ongoing_from_entry(entry: &RawEntry) -> Self {
        Self::from_entry(entry, "Ongoing Projects", ProjectStatus::Ongoing)
    }

    pub fn completed_from_entry(entry: &RawEntry) -> Self {
        Self::from_entry(entry, "All Completed Projects", ProjectStatus::Completed)
    }

    fn from_entry(entry: &RawEntry, default_title: &str, default_status: ProjectStatus) -> Self {
        Self {
            section_title: entry.text_or("sectionTitle", default_title),
            projects: entry
                .entries("projects")
                .iter()
                .map(|project| Project::from_entry(project, default_status))
                .collect(),
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hero_defaults_missing_fields() {
        let hero = Hero::from_entry(&RawEntry::new("heroSection", json!({"title": "T"})));
        assert_eq!(hero.title, "T");
        assert_eq!(hero.subtitle, "");
        assert_eq!(hero.cta_link, "");
        assert_eq!(hero.background_image, None);
    }

    #[test]
    fn gallery_section_applies_cms_defaults() {
        let section = GallerySection::from_entry(&RawEntry::new("gallerySection", json!({})));
        assert_eq!(section.subtitle, "Gallery");
        assert_eq!(section.title, "Get To Know Us");
        assert!(section.items.is_empty());
    }

    #[test]
    fn gallery_items_parse_grid_spans() {
        let section = GallerySection::from_entry(&RawEntry::new(
            "gallerySection",
            json!({"galleryItem": [
                {"fields": {"title": "a", "gridSpan": "col-span-1"}},
                {"fields": {"title": "b", "gridSpan": "col-span-1 md:col-span-2"}},
                {"fields": {"title": "c", "gridSpan": "col-span-full"}},
                {"fields": {"title": "d"}}
            ]}),
        ));
        let spans: Vec<GridSpan> = section.items.iter().map(|i| i.span).collect();
        assert_eq!(
            spans,
            vec![GridSpan::Single, GridSpan::Double, GridSpan::Full, GridSpan::Single]
        );
    }

    #[test]
    fn process_steps_default_number_and_colors() {
        let step = ProcessStep::from_entry(&RawEntry::new("processStep", json!({"title": "Plan"})));
        assert_eq!(step.step_number, "01");
        assert_eq!(step.background, "bg-white");
        assert_eq!(step.text_color, "text-gray-800");
    }

    #[test]
    fn feature_items_default_icon() {
        let item = FeatureItem::from_entry(&RawEntry::new("featureItem", json!({})));
        assert_eq!(item.icon, "Target");
        assert_eq!(item.icon_background, "bg-amber-600");
    }

    #[test]
    fn contact_form_defaults() {
        let form = ContactFormSection::from_entry(&RawEntry::new("contactFormSection", json!({})));
        assert_eq!(form.title, "Get In Touch");
        assert_eq!(form.button_text, "Send Messages");
        assert!(form.project_type_options.is_empty());
    }

    #[test]
    fn office_locations_map_all_fields() {
        let section = OfficeAddressesSection::from_entry(&RawEntry::new(
            "officeAddressesSection",
            json!({"locations": [{"fields": {
                "locationName": "Central London",
                "isActive": true,
                "phoneNumbers": ["07949 296795"],
                "emailAddress": "hello@example.com",
                "officeAddress": "Railway Arch 467, London"
            }}]}),
        ));
        assert_eq!(section.title, "Our Office Addresses");
        let location = &section.locations[0];
        assert_eq!(location.location_name, "Central London");
        assert!(location.is_active);
        assert_eq!(location.phone_numbers, vec!["07949 296795"]);
    }

    #[test]
    fn projects_default_status_per_section() {
        let raw = RawEntry::new(
            "ongoingProjectsSection",
            json!({"projects": [
                {"fields": {"title": "A"}},
                {"fields": {"title": "B", "status": "completed"}}
            ]}),
        );
        let ongoing = ProjectsSection::ongoing_from_entry(&raw);
        assert_eq!(ongoing.section_title, "Ongoing Projects");
        assert_eq!(ongoing.projects[0].status, ProjectStatus::Ongoing);
        assert_eq!(ongoing.projects[1].status, ProjectStatus::Completed);

        let completed = ProjectsSection::completed_from_entry(&raw);
        assert_eq!(completed.section_title, "All Completed Projects");
        assert_eq!(completed.projects[0].status, ProjectStatus::Completed);
    }

    #[test]
    fn portfolio_hero_reads_description() {
        let hero = PageHero::from_portfolio_entry(&RawEntry::new(
            "portfolioHero",
            json!({"title": "Projects", "description": "Our work"}),
        ));
        assert_eq!(hero.subtitle, "Our work");
    }

    #[test]
    fn footer_collects_link_groups() {
        let footer = FooterContent::from_entry(&RawEntry::new(
            "footerContent",
            json!({
                "companyLinks": [{"label": "About Us", "url": "/about-us"}],
                "socialLinks": [{"platform": "Instagram", "url": "#", "icon": "instagram"}]
            }),
        ));
        assert_eq!(footer.company_links[0].label, "About Us");
        assert_eq!(footer.social_links[0].icon, "instagram");
        assert!(footer.service_links.is_empty());
        assert_eq!(footer.copyright_text, "");
    }
}
