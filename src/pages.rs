//! Page composers.
//!
//! Each composer fans out every section resolver its page needs, layout
//! sections included, waits for all of them, and assembles a page record:
//!
//! ```text
//! compose_contact(client)
//!     ├── HEADER.resolve ─────────┐
//!     ├── FOOTER.resolve ─────────┤
//!     ├── CONTACT_HERO.resolve ───┤ tokio::join!  (no early exit)
//!     ├── CONTACT_FORM.resolve ───┤
//!     └── OFFICE_ADDRESSES ───────┘
//!                                 ▼
//!                    Composed { page: ContactPage, report }
//! ```
//!
//! Resolvers never fail, so neither do composers. A slow section delays the
//! page but cannot break it. Nothing is spawned: the futures are polled
//! together on the request's task and dropped with it if the client goes away.

use crate::content::ContentClient;
use crate::resolve::{Resolved, SectionReport};
use crate::sections::records::*;
use crate::sections::{
    ABOUT, ABOUT_US_HERO, COMPLETED_PROJECTS, CONTACT_FORM, CONTACT_HERO, FEATURES, FOOTER,
    GALLERY, GALLERY_ITEMS, HEADER, HERO, OFFICE_ADDRESSES, ONGOING_PROJECTS, PORTFOLIO_HERO,
    PROCESS, SERVICES, SERVICES_HEADER, SERVICES_HERO, TESTIMONIALS, TRADITIONAL_MODERN,
};

/// The site's fixed routes, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Portfolio,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about-us",
            Route::Services => "/our-services",
            Route::Portfolio => "/portfolio",
            Route::Contact => "/contact-us",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About Us",
            Route::Services => "Our Services",
            Route::Portfolio => "Portfolio",
            Route::Contact => "Contact Us",
        }
    }
}

/// A composed page plus where each of its sections came from.
#[derive(Debug, Clone)]
pub struct Composed<P> {
    pub page: P,
    pub report: Vec<SectionReport>,
}

/// Sections shared by every page.
#[derive(Debug, Clone)]
pub struct Layout {
    pub header: HeaderContent,
    pub footer: FooterContent,
}

impl Layout {
    fn from_resolved(header: Resolved<HeaderContent>, footer: Resolved<FooterContent>) -> Self {
        Self {
            header: header.value,
            footer: footer.value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HomePage {
    pub layout: Layout,
    pub hero: Hero,
    pub about: AboutSection,
    pub services_header: ServicesHeader,
    pub services: Vec<Service>,
    pub gallery: GallerySection,
    pub gallery_items: Vec<GalleryItem>,
    pub testimonials: TestimonialsSection,
}

#[derive(Debug, Clone)]
pub struct AboutPage {
    pub layout: Layout,
    pub hero: PageHero,
    pub about: AboutSection,
    pub traditional: TraditionalModernSection,
    pub gallery: GallerySection,
}

#[derive(Debug, Clone)]
pub struct ServicesPage {
    pub layout: Layout,
    pub hero: PageHero,
    pub features: FeaturesSection,
    pub services_header: ServicesHeader,
    pub services: Vec<Service>,
    pub process: ProcessSection,
}

#[derive(Debug, Clone)]
pub struct PortfolioPage {
    pub layout: Layout,
    pub hero: PageHero,
    pub ongoing: ProjectsSection,
    pub completed: ProjectsSection,
}

#[derive(Debug, Clone)]
pub struct ContactPage {
    pub layout: Layout,
    pub hero: PageHero,
    pub form: ContactFormSection,
    pub offices: OfficeAddressesSection,
}

// ============================================================================
// Composers
// ============================================================================

pub async fn compose_layout(client: &dyn ContentClient) -> Composed<Layout> {
    let (header, footer) = tokio::join!(HEADER.resolve(client), FOOTER.resolve(client));
    Composed {
        report: vec![header.report(), footer.report()],
        page: Layout::from_resolved(header, footer),
    }
}

pub async fn compose_home(client: &dyn ContentClient) -> Composed<HomePage> {
    let (
        header,
        footer,
        hero,
        about,
        services_header,
        services,
        gallery,
        gallery_items,
        testimonials,
    ) = tokio::join!(
        HEADER.resolve(client),
        FOOTER.resolve(client),
        HERO.resolve(client),
        ABOUT.resolve(client),
        SERVICES_HEADER.resolve(client),
        SERVICES.resolve(client),
        GALLERY.resolve(client),
        GALLERY_ITEMS.resolve(client),
        TESTIMONIALS.resolve(client),
    );
    let report = vec![
        header.report(),
        footer.report(),
        hero.report(),
        about.report(),
        services_header.report(),
        services.report(),
        gallery.report(),
        gallery_items.report(),
        testimonials.report(),
    ];
    Composed {
        page: HomePage {
            layout: Layout::from_resolved(header, footer),
            hero: hero.value,
            about: about.value,
            services_header: services_header.value,
            services: services.value,
            gallery: gallery.value,
            gallery_items: gallery_items.value,
            testimonials: testimonials.value,
        },
        report,
    }
}

pub async fn compose_about(client: &dyn ContentClient) -> Composed<AboutPage> {
    let (header, footer, hero, about, traditional, gallery) = tokio::join!(
        HEADER.resolve(client),
        FOOTER.resolve(client),
        ABOUT_US_HERO.resolve(client),
        ABOUT.resolve(client),
        TRADITIONAL_MODERN.resolve(client),
        GALLERY.resolve(client),
    );
    let report = vec![
        header.report(),
        footer.report(),
        hero.report(),
        about.report(),
        traditional.report(),
        gallery.report(),
    ];
    Composed {
        page: AboutPage {
            layout: Layout::from_resolved(header, footer),
            hero: hero.value,
            about: about.value,
            traditional: traditional.value,
            gallery: gallery.value,
        },
        report,
    }
}

pub async fn compose_services(client: &dyn ContentClient) -> Composed<ServicesPage> {
    let (header, footer, hero, features, services_header, services, process) = tokio::join!(
        HEADER.resolve(client),
        FOOTER.resolve(client),
        SERVICES_HERO.resolve(client),
        FEATURES.resolve(client),
        SERVICES_HEADER.resolve(client),
        SERVICES.resolve(client),
        PROCESS.resolve(client),
    );
    let report = vec![
        header.report(),
        footer.report(),
        hero.report(),
        features.report(),
        services_header.report(),
        services.report(),
        process.report(),
    ];
    Composed {
        page: ServicesPage {
            layout: Layout::from_resolved(header, footer),
            hero: hero.value,
            features: features.value,
            services_header: services_header.value,
            services: services.value,
            process: process.value,
        },
        report,
    }
}

pub async fn compose_portfolio(client: &dyn ContentClient) -> Composed<PortfolioPage> {
    let (header, footer, hero, ongoing, completed) = tokio::join!(
        HEADER.resolve(client),
        FOOTER.resolve(client),
        PORTFOLIO_HERO.resolve(client),
        ONGOING_PROJECTS.resolve(client),
        COMPLETED_PROJECTS.resolve(client),
    );
    let report = vec![
        header.report(),
        footer.report(),
        hero.report(),
        ongoing.report(),
        completed.report(),
    ];
    Composed {
        page: PortfolioPage {
            layout: Layout::from_resolved(header, footer),
            hero: hero.value,
            ongoing: ongoing.value,
            completed: completed.value,
        },
        report,
    }
}

pub async fn compose_contact(client: &dyn ContentClient) -> Composed<ContactPage> {
    let (header, footer, hero, form, offices) = tokio::join!(
        HEADER.resolve(client),
        FOOTER.resolve(client),
        CONTACT_HERO.resolve(client),
        CONTACT_FORM.resolve(client),
        OFFICE_ADDRESSES.resolve(client),
    );
    let report = vec![
        header.report(),
        footer.report(),
        hero.report(),
        form.report(),
        offices.report(),
    ];
    Composed {
        page: ContactPage {
            layout: Layout::from_resolved(header, footer),
            hero: hero.value,
            form: form.value,
            offices: offices.value,
        },
        report,
    }
}

/// Compose a route and return only its section report.
pub async fn report_for(route: Route, client: &dyn ContentClient) -> Vec<SectionReport> {
    match route {
        Route::Home => compose_home(client).await.report,
        Route::About => compose_about(client).await.report,
        Route::Services => compose_services(client).await.report,
        Route::Portfolio => compose_portfolio(client).await.report,
        Route::Contact => compose_contact(client).await.report,
    }
}
