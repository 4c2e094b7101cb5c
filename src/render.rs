//! HTML page rendering.
//!
//! Turns composed page records into complete HTML documents. Every page has
//! the same frame:
//!
//! ```text
//! <html>
//! ├── head: meta, title, inlined CSS (theme variables + static/style.css)
//! └── body
//!     ├── header.site-header
//!     │   ├── div.top-bar      hours, phone, address, social labels
//!     │   └── div.brand-bar    logo + nav (hamburger on small screens)
//!     ├── main.{page}-page     page sections
//!     ├── footer.site-footer   description, social icons, three link columns
//!     ├── div#toast            form notifications
//!     └── script               static/enquiry.js (inlined)
//! ```
//!
//! ## Enquiry Forms
//!
//! The contact page carries the form inline. Home and services pages carry
//! the same form in a `<dialog>` opened by any `[data-open-enquiry]` button;
//! a button's `data-project-type` preselects that service. All forms post
//! JSON to `/api/send-email` through `static/enquiry.js`.
//!
//! ## Long-form Text
//!
//! Descriptions the CMS authors as prose (about, footer, traditional/modern,
//! projects) are rendered as markdown with raw HTML dropped. Everything else
//! is plain text, escaped by maud.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};

use crate::config::{self, SiteConfig};
use crate::pages::{
    AboutPage, ContactPage, HomePage, Layout, PortfolioPage, Route, ServicesPage,
};
use crate::sections::records::*;

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/enquiry.js");

const ENDPOINT: &str = "/api/send-email";
const LOGO: &str = "/assets/logo.png";
const CONTACT_METHODS: [&str; 2] = ["Email", "Phone"];

/// Site-wide values every page needs, computed once at startup.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub default_project_type: String,
    /// Theme variables followed by the static stylesheet.
    pub css: String,
}

impl Chrome {
    pub fn from_config(config: &SiteConfig) -> Self {
        let theme_css = config::generate_theme_css(&config.theme);
        Self {
            site_name: config.site.name.clone(),
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            default_project_type: config.enquiry.default_project_type.clone(),
            css: format!("{theme_css}\n\n{CSS_STATIC}"),
        }
    }

    fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) => format!("{page} | {}", self.site_name),
            None => self.title.clone(),
        }
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(chrome: &Chrome, title: &str, body_class: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(chrome.description);
                title { (title) }
                style { (PreEscaped(&chrome.css)) }
            }
            body class=(body_class) {
                (content)
                div.toast #toast role="status" aria-live="polite" hidden {
                    strong.toast-title {}
                    p.toast-description {}
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the page frame: header, page content, footer.
fn page_frame(layout: &Layout, chrome: &Chrome, current: Option<Route>, main: Markup) -> Markup {
    html! {
        (site_header(&layout.header, chrome, render_nav(current)))
        (main)
        (site_footer(&layout.footer, chrome))
    }
}

/// Renders the two-row site header
fn site_header(header: &HeaderContent, chrome: &Chrome, nav: Markup) -> Markup {
    html! {
        header.site-header {
            div.top-bar {
                div.container {
                    ul.top-bar-facts {
                        li { span.icon aria-hidden="true" { "🕘" } (header.business_hours) }
                        li { span.icon aria-hidden="true" { "☎" } (header.phone) }
                        li { span.icon aria-hidden="true" { "⌖" } (header.address) }
                    }
                    ul.top-bar-social {
                        @for social in &header.social_links {
                            li { a href=(social.url) { (social.platform) } }
                        }
                    }
                }
            }
            div.brand-bar {
                div.container {
                    a.brand href="/" {
                        img src=(header.logo.as_deref().unwrap_or(LOGO))
                            alt={ (chrome.site_name) " logo" } width="60" height="60";
                    }
                    nav.site-nav { (nav) }
                }
            }
        }
    }
}

/// Renders the navigation menu (inline on wide screens, hamburger panel on
/// narrow ones)
pub fn render_nav(current: Option<Route>) -> Markup {
    html! {
        input.nav-toggle type="checkbox" id="nav-toggle";
        label.nav-hamburger for="nav-toggle" aria-label="Menu" {
            span.hamburger-line {}
            span.hamburger-line {}
            span.hamburger-line {}
        }
        div.nav-panel {
            label.nav-close for="nav-toggle" { "×" }
            ul {
                @for route in Route::ALL {
                    li class=[(current == Some(route)).then_some("current")] {
                        a href=(route.path()) { (route.label()) }
                    }
                }
            }
        }
    }
}

fn site_footer(footer: &FooterContent, chrome: &Chrome) -> Markup {
    html! {
        footer.site-footer {
            div.container.footer-grid {
                div.footer-about {
                    a href="/" {
                        img src=(footer.logo.as_deref().unwrap_or(LOGO))
                            alt={ (chrome.site_name) " logo" } width="60" height="60";
                    }
                    div.footer-description { (markdown(&footer.description)) }
                    ul.footer-social {
                        @for social in &footer.social_links {
                            li {
                                a href=(social.url) aria-label=(social.platform) {
                                    (social_icon(&social.icon))
                                }
                            }
                        }
                    }
                }
                (footer_column("Services", &footer.service_links))
                (footer_column("Company", &footer.company_links))
                (footer_column("Support", &footer.support_links))
            }
            div.footer-bottom {
                p { (footer.copyright_text) }
            }
        }
    }
}

fn footer_column(heading: &str, links: &[FooterLink]) -> Markup {
    html! {
        div.footer-column {
            h4 { (heading) }
            ul {
                @for link in links {
                    @let href = if link.url.is_empty() { "#" } else { link.url.as_str() };
                    li { a href=(href) { (link.label) } }
                }
            }
        }
    }
}

/// Banner used at the top of inner pages.
fn page_hero(hero: &PageHero, split: bool, default_image: &str) -> Markup {
    let image = hero.background_image.as_deref().unwrap_or(default_image);
    html! {
        section.page-hero {
            img.hero-image src=(image) alt="" aria-hidden="true";
            div.hero-overlay {}
            div.container.hero-content {
                h1 {
                    @if split {
                        @let lines = split_title(&hero.title);
                        (lines.0)
                        @if !lines.1.is_empty() { br; (lines.1) }
                    } @else {
                        (hero.title)
                    }
                }
                p.hero-subtitle { (hero.subtitle) }
            }
        }
    }
}

/// Split a title into two lines at the middle word (the first line gets the
/// extra word when the count is odd).
pub fn split_title(title: &str) -> (String, String) {
    let words: Vec<&str> = title.split_whitespace().collect();
    let mid = words.len().div_ceil(2);
    (words[..mid].join(" "), words[mid..].join(" "))
}

/// Markdown to HTML with raw HTML dropped.
fn markdown(text: &str) -> Markup {
    let parser = Parser::new(text)
        .filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

/// Map an icon name from the CMS to a glyph.
fn feature_icon(name: &str) -> &'static str {
    match name {
        "Zap" => "⚡",
        "Shield" => "🛡",
        "CheckCircle" => "✔",
        "Award" => "🏅",
        "Users" => "👥",
        _ => "◎",
    }
}

fn social_icon(name: &str) -> Markup {
    let label = match name.to_ascii_lowercase().as_str() {
        "facebook" => "f",
        "linkedin" => "in",
        "twitter" | "x" => "𝕏",
        _ => "◎",
    };
    html! { span.social-icon aria-hidden="true" { (label) } }
}

/// Card tone from a CMS colour token: anything that is not a white or grey
/// background is treated as dark and gets light text.
fn tone(background: &str) -> &'static str {
    if background.is_empty() || background.contains("white") || background.contains("gray") {
        "tone-light"
    } else {
        "tone-dark"
    }
}

// ============================================================================
// Enquiry form
// ============================================================================

struct FormSettings<'a> {
    id: &'a str,
    options: &'a [String],
    default_project_type: &'a str,
    button_text: &'a str,
}

fn enquiry_form(settings: &FormSettings) -> Markup {
    html! {
        form.enquiry-form id=(settings.id) action=(ENDPOINT) method="post"
            data-default-project-type=(settings.default_project_type) novalidate {
            div.form-column {
                label { "Name"
                    input type="text" name="name" placeholder="Enter your name" required;
                }
                label { "Your Email"
                    input type="email" name="email" placeholder="Enter your email" required;
                }
                label { "Phone Number"
                    input type="tel" name="phone" placeholder="Enter your phone number";
                }
                label { "Project Type"
                    select name="projectType" required {
                        @for choice in settings.options {
                            @let selected = choice == settings.default_project_type;
                            option value=(choice) selected[selected] { (choice) }
                        }
                    }
                }
            }
            div.form-column {
                label { "Property Location"
                    input type="text" name="propertyLocation"
                        placeholder="Enter your property location";
                }
                label { "Project Description"
                    textarea name="projectDescription" rows="5" placeholder="Enter your message" {}
                }
                fieldset.contact-methods {
                    legend { "Preferred Contact Method" }
                    @for method in CONTACT_METHODS {
                        label.radio {
                            input type="radio" name="preferredContact" value=(method);
                            (method)
                        }
                    }
                }
                label { "Timeline"
                    input type="text" name="Timeline"
                        placeholder="Tell us how soon you want your project started!";
                }
                button.button.button-accent type="submit" { (settings.button_text) }
            }
        }
    }
}

fn enquiry_dialog(options: &[String], chrome: &Chrome) -> Markup {
    html! {
        dialog.enquiry-dialog #enquiry-dialog {
            form method="dialog" {
                button.dialog-close aria-label="Close" { "×" }
            }
            h2 { "Start Your Project" }
            p { "Tell us about your project and we'll get back to you." }
            (enquiry_form(&FormSettings {
                id: "enquiry-dialog-form",
                options,
                default_project_type: &chrome.default_project_type,
                button_text: "Send Enquiry",
            }))
        }
    }
}

// ============================================================================
// Shared sections
// ============================================================================

fn about_block(about: &AboutSection) -> Markup {
    html! {
        section.about.section {
            div.container {
                h2.eyebrow { (about.subtitle) }
                div.narrow {
                    h3.section-title { (about.title) }
                    div.prose { (markdown(&about.description)) }
                }
                div.two-column {
                    img.rounded src=(about.image.as_deref().unwrap_or("/assets/1.png"))
                        alt="Our workshop" loading="lazy";
                    div.vision-card {
                        h4 { "Our Vision" }
                        ul.vision-list {
                            @for item in &about.vision_items {
                                li {
                                    span.tick aria-hidden="true" { "✓" }
                                    div {
                                        h5 { (item.title) ":" }
                                        p { (item.description) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn services_block(header: &ServicesHeader, services: &[Service]) -> Markup {
    let (first, second) = split_title(&header.title);
    let long_title = header.title.split_whitespace().count() > 6;
    html! {
        section.services.section {
            @if let Some(image) = &header.background_image {
                div.ornament style={ "background-image: url('" (image) "')" } {}
            }
            div.container {
                p.eyebrow.accent { (header.subtitle) }
                h2.section-title {
                    @if long_title { (first) br; (second) } @else { (header.title) }
                }
                p.lede { (header.description) }
                div.service-track #service-track {
                    @for service in services {
                        article class={ "service-card " (tone(&service.background)) } {
                            div.service-icon { (service.icon) }
                            h3 { (service.title) }
                            p { (service.description) }
                            button.link-button type="button" data-open-enquiry
                                data-project-type=(service.title) { "Enquire" }
                        }
                    }
                }
                div.track-controls {
                    button.scroll-button type="button" data-scroll="-1" aria-label="Scroll left" {
                        "‹"
                    }
                    button.scroll-button type="button" data-scroll="1" aria-label="Scroll right" {
                        "›"
                    }
                }
            }
        }
    }
}

fn gallery_block(subtitle: &str, title: &str, items: &[GalleryItem]) -> Markup {
    html! {
        section.gallery.section {
            div.container {
                h2.eyebrow.centered { (subtitle) }
                h3.section-title.centered { (title) }
                div.gallery-grid {
                    @for item in items {
                        figure class={ "gallery-tile " (item.span.class()) } {
                            @if let Some(image) = &item.image {
                                img src=(image) alt=(item.title) loading="lazy";
                            }
                            @if !item.description.is_empty() {
                                figcaption { (item.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

pub fn render_home(page: &HomePage, chrome: &Chrome) -> Markup {
    let hero = &page.hero;
    let options: Vec<String> = page.services.iter().map(|s| s.title.clone()).collect();
    let main = html! {
        main.home-page {
            section.home-hero {
                img.hero-image src=(hero.background_image.as_deref().unwrap_or("/assets/2.png"))
                    alt="" aria-hidden="true";
                div.hero-overlay {}
                div.container.hero-content {
                    h1 { (hero.title) }
                    p.hero-subtitle { (hero.subtitle) }
                    div.hero-actions {
                        a.button.button-accent href=(hero.cta_link) { (hero.cta_text) }
                        button.button.button-ghost type="button" data-open-enquiry {
                            "Request a Quote"
                        }
                    }
                }
            }
            (about_block(&page.about))
            (services_block(&page.services_header, &page.services))
            (gallery_block(&page.gallery.subtitle, &page.gallery.title, &page.gallery_items))
            section.testimonials.section {
                div.container {
                    h2.eyebrow.centered { (page.testimonials.subtitle) }
                    h3.section-title.centered { (page.testimonials.title) }
                    div.testimonial-grid {
                        @for testimonial in &page.testimonials.testimonials {
                            blockquote.testimonial {
                                p { "\u{201c}" (testimonial.quote) "\u{201d}" }
                                footer {
                                    @if let Some(image) = &testimonial.image {
                                        img.avatar src=(image) alt=(testimonial.name)
                                            width="40" height="40";
                                    }
                                    div {
                                        strong { (testimonial.name) }
                                        span.muted { (testimonial.location) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            (enquiry_dialog(&options, chrome))
        }
    };
    base_document(
        chrome,
        &chrome.page_title(None),
        "home",
        page_frame(&page.layout, chrome, Some(Route::Home), main),
    )
}

pub fn render_about(page: &AboutPage, chrome: &Chrome) -> Markup {
    let traditional = &page.traditional;
    let main = html! {
        main.about-page {
            (page_hero(&page.hero, true, "/assets/3.png"))
            (about_block(&page.about))
            section.traditional.section {
                div.container.two-column {
                    div {
                        h3.section-title { (traditional.title) }
                        div.prose { (markdown(&traditional.description)) }
                        a.text-link href=(traditional.contact_link_url) {
                            (traditional.contact_link_text)
                        }
                    }
                    @if let Some(image) = &traditional.image {
                        img.rounded src=(image) alt="Our workshop" loading="lazy";
                    }
                }
            }
            (gallery_block(&page.gallery.subtitle, &page.gallery.title, &page.gallery.items))
        }
    };
    base_document(
        chrome,
        &chrome.page_title(Some(Route::About.label())),
        "about",
        page_frame(&page.layout, chrome, Some(Route::About), main),
    )
}

pub fn render_services(page: &ServicesPage, chrome: &Chrome) -> Markup {
    let features = &page.features;
    let process = &page.process;
    let options: Vec<String> = page.services.iter().map(|s| s.title.clone()).collect();
    let main = html! {
        main.services-page {
            (page_hero(&page.hero, false, "/assets/4.png"))
            section.features.section {
                div.container {
                    p.eyebrow.accent { (features.subtitle) }
                    h2.section-title { (features.title) }
                    p.lede { (features.description) }
                    div.feature-grid {
                        @for feature in &features.features {
                            article class={ "feature-card " (tone(&feature.background)) } {
                                div.feature-icon { (feature_icon(&feature.icon)) }
                                h3 { (feature.title) }
                                p { (feature.description) }
                            }
                        }
                    }
                }
            }
            (services_block(&page.services_header, &page.services))
            section.process.section {
                div.container {
                    p.eyebrow.centered { (process.subtitle) }
                    h2.section-title.centered { (process.title) }
                    p.lede.centered { (process.description) }
                    div.process-grid {
                        @for step in &process.steps {
                            article class={ "process-step " (tone(&step.background)) } {
                                span.step-number aria-hidden="true" { (step.step_number) }
                                h3 { (step.title) }
                                p { (step.description) }
                            }
                        }
                    }
                }
            }
            (enquiry_dialog(&options, chrome))
        }
    };
    base_document(
        chrome,
        &chrome.page_title(Some(Route::Services.label())),
        "services",
        page_frame(&page.layout, chrome, Some(Route::Services), main),
    )
}

fn project_card(project: &Project) -> Markup {
    let ongoing = project.status == ProjectStatus::Ongoing;
    html! {
        article.project-card {
            div.project-image {
                img src=(project.image.as_deref().unwrap_or("/assets/placeholder.png"))
                    alt=(project.title) loading="lazy";
                @if ongoing {
                    span.badge { (project.status.label()) }
                }
            }
            div.project-body {
                h3 { (project.title) }
                dl {
                    dt { "Client:" } dd { (project.client) }
                    dt { "Started On:" } dd { (project.started_on) }
                    dt { "Completed On:" }
                    dd class=[ongoing.then_some("ongoing")] { (project.completed_on) }
                }
                div.project-description { (markdown(&project.description)) }
            }
        }
    }
}

pub fn render_portfolio(page: &PortfolioPage, chrome: &Chrome) -> Markup {
    let main = html! {
        main.portfolio-page {
            (page_hero(&page.hero, false, "/assets/5.png"))
            section.projects.section {
                div.container {
                    h2.section-title { (page.ongoing.section_title) }
                    div.project-grid.two-up {
                        @for project in &page.ongoing.projects { (project_card(project)) }
                    }
                }
            }
            section.projects.completed.section {
                div.container {
                    h2.section-title { (page.completed.section_title) }
                    div.project-grid {
                        @for project in &page.completed.projects { (project_card(project)) }
                    }
                }
            }
        }
    };
    base_document(
        chrome,
        &chrome.page_title(Some(Route::Portfolio.label())),
        "portfolio",
        page_frame(&page.layout, chrome, Some(Route::Portfolio), main),
    )
}

pub fn render_contact(page: &ContactPage, chrome: &Chrome) -> Markup {
    let form = &page.form;
    let offices = &page.offices;
    let first_active = offices
        .locations
        .iter()
        .position(|l| l.is_active)
        .unwrap_or(0);
    let main = html! {
        main.contact-page {
            (page_hero(&page.hero, true, "/assets/6.png"))
            section.contact-form.section {
                div.container {
                    h2.section-title { (form.title) }
                    h3.subtitle { (form.subtitle) }
                    (enquiry_form(&FormSettings {
                        id: "contact-form",
                        options: &form.project_type_options,
                        default_project_type: &chrome.default_project_type,
                        button_text: &form.button_text,
                    }))
                }
            }
            section.offices.section {
                div.container {
                    p.eyebrow.accent { (offices.subtitle) }
                    h2.section-title { (offices.title) }
                    div.office-list {
                        @for (index, location) in offices.locations.iter().enumerate() {
                            details.office open[index == first_active] {
                                summary { (location.location_name) }
                                dl {
                                    dt { "Phone" }
                                    dd {
                                        @for phone in &location.phone_numbers {
                                            a href={ "tel:" (phone.replace(' ', "")) } { (phone) }
                                            br;
                                        }
                                    }
                                    dt { "Email" }
                                    dd {
                                        a href={ "mailto:" (location.email_address) } {
                                            (location.email_address)
                                        }
                                    }
                                    dt { "Address" }
                                    dd { (location.office_address) }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    base_document(
        chrome,
        &chrome.page_title(Some(Route::Contact.label())),
        "contact",
        page_frame(&page.layout, chrome, Some(Route::Contact), main),
    )
}

pub fn render_not_found(layout: &Layout, chrome: &Chrome) -> Markup {
    let main = html! {
        main.not-found-page {
            section.section {
                div.container.centered {
                    h1.section-title { "Page not found" }
                    p.lede { "The page you were looking for doesn't exist or has moved." }
                    a.button.button-accent href="/" { "Back to home" }
                }
            }
        }
    };
    base_document(
        chrome,
        &chrome.page_title(Some("Page not found")),
        "not-found",
        page_frame(layout, chrome, None, main),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::fallback;

    fn chrome() -> Chrome {
        Chrome::from_config(&SiteConfig::default())
    }

    fn layout() -> Layout {
        Layout {
            header: fallback::header(),
            footer: fallback::footer(),
        }
    }

    fn home() -> HomePage {
        HomePage {
            layout: layout(),
            hero: fallback::hero(),
            about: fallback::about(),
            services_header: fallback::services_header(),
            services: fallback::services(),
            gallery: fallback::gallery(),
            gallery_items: fallback::gallery_items(),
            testimonials: fallback::testimonials(),
        }
    }

    fn contact() -> ContactPage {
        ContactPage {
            layout: layout(),
            hero: fallback::contact_hero(),
            form: fallback::contact_form(),
            offices: fallback::office_addresses(),
        }
    }

    #[test]
    fn nav_renders_every_route() {
        let html = render_nav(None).into_string();
        for route in Route::ALL {
            assert!(html.contains(&format!(r#"href="{}""#, route.path())));
            assert!(html.contains(route.label()));
        }
        assert!(!html.contains(r#"class="current""#));
    }

    #[test]
    fn nav_marks_current_item() {
        let html = render_nav(Some(Route::Portfolio)).into_string();
        assert!(html.contains(r#"<li class="current"><a href="/portfolio">"#));
    }

    #[test]
    fn base_document_includes_doctype_css_and_script() {
        let chrome = chrome();
        let doc = base_document(&chrome, "Test", "home", html! { p { "x" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("--color-primary: #925422"));
        assert!(doc.contains(r#"class="home""#));
        assert!(doc.contains("<script>"));
    }

    #[test]
    fn split_title_puts_extra_word_first() {
        assert_eq!(
            split_title("Get in Touch with London's Expert Carpenters"),
            ("Get in Touch with".to_string(), "London's Expert Carpenters".to_string())
        );
        assert_eq!(split_title("One"), ("One".to_string(), String::new()));
        assert_eq!(split_title(""), (String::new(), String::new()));
    }

    #[test]
    fn markdown_drops_raw_html() {
        let html = markdown("**Bold** <script>alert(1)</script>").into_string();
        assert!(html.contains("<strong>Bold</strong>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn tone_from_background_token() {
        assert_eq!(tone("bg-white"), "tone-light");
        assert_eq!(tone("bg-gray-100"), "tone-light");
        assert_eq!(tone("bg-[#8b572a]"), "tone-dark");
        assert_eq!(tone(""), "tone-light");
    }

    #[test]
    fn home_renders_sections_and_dialog() {
        let html = render_home(&home(), &chrome()).into_string();
        assert!(html.contains("Bespoke Carpentry &amp; Joinery Services in London"));
        assert!(html.contains("Get To Know Us"));
        assert!(html.contains("span-full"));
        assert!(html.contains(r#"id="enquiry-dialog""#));
        assert!(html.contains(r#"data-project-type="Doors &amp; Windows""#));
        assert!(html.contains("What Our Customer Says!!"));
    }

    #[test]
    fn contact_form_uses_wire_field_names() {
        let html = render_contact(&contact(), &chrome()).into_string();
        for name in [
            "name",
            "email",
            "phone",
            "projectType",
            "propertyLocation",
            "projectDescription",
            "preferredContact",
            "Timeline",
        ] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "{name}");
        }
        assert!(html.contains(r#"<option value="Furniture" selected>"#));
        assert!(html.contains("Send Messages"));
    }

    #[test]
    fn contact_opens_the_active_office() {
        let html = render_contact(&contact(), &chrome()).into_string();
        assert!(html.contains(r#"<details class="office" open><summary>Central London"#));
        assert!(html.contains(r#"<details class="office"><summary>North London"#));
        assert!(html.contains(r#"href="tel:07949296795""#));
    }

    #[test]
    fn contact_hero_title_is_split() {
        let html = render_contact(&contact(), &chrome()).into_string();
        assert!(html.contains("<h1>Get in Touch with<br>London"));
    }

    #[test]
    fn portfolio_badges_only_ongoing_projects() {
        let page = PortfolioPage {
            layout: layout(),
            hero: fallback::portfolio_hero(),
            ongoing: fallback::ongoing_projects(),
            completed: fallback::completed_projects(),
        };
        let html = render_portfolio(&page, &chrome()).into_string();
        assert_eq!(html.matches(r#"<span class="badge">"#).count(), 2);
        assert!(html.contains("All Completed Projects"));
    }

    #[test]
    fn not_found_keeps_the_layout() {
        let html = render_not_found(&layout(), &chrome()).into_string();
        assert!(html.contains("Page not found"));
        assert!(html.contains("site-header"));
        assert!(html.contains("© 2025 Shay Joinery Ltd. All rights reserved."));
    }

    #[test]
    fn escapes_cms_text() {
        let mut page = home();
        page.hero.title = "<em>Hi</em>".to_string();
        let html = render_home(&page, &chrome()).into_string();
        assert!(html.contains("&lt;em&gt;Hi&lt;/em&gt;"));
    }
}
