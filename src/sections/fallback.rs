//! Static fallback values, one per section.
//!
//! These are what a page renders when the CMS is unreachable, the content
//! type has no entry, or the entry is vacant. Every list here is non-empty;
//! the merge policy relies on that to keep rendered lists populated.
//!
//! Images point at files served from `/assets`.

use super::records::*;

const LOREM_SHORT: &str = "Lorem Ipsum has been the industry's standard dummy text ever since the 1500s, when an unknown printer took a galley.";
const LOREM_LONG: &str = "Lorem Ipsum has been the industry's standard dummy text ever since the 1500s, when an unknown printer took a galley of type and scrambled it to make a type specimen book.";
const CONTACT_EMAIL: &str = "shay.joineryltd@gmail.com";

fn asset(file: &str) -> Option<String> {
    Some(format!("/assets/{file}"))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ============================================================================
// Home page
// ============================================================================

pub fn hero() -> Hero {
    Hero {
        title: "Bespoke Carpentry & Joinery Services in London".into(),
        subtitle: "Transform your space with Shay Joinery, London's trusted specialists in carpentry and joinery. From custom kitchens to handcrafted furniture, we bring over 20+ years of expertise to every project.".into(),
        cta_text: "Get Started".into(),
        cta_link: "/contact-us".into(),
        background_image: None,
    }
}

pub fn services() -> Vec<Service> {
    let service = |title: &str, description: &str, icon: &str, background: &str, text: &str| Service {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        background: background.into(),
        text_color: text.into(),
    };
    vec![
        service(
            "Bespoke Furniture & Cabinetry",
            "Transform your home with custom handcrafted furniture, including wardrobes, storage units, desks, media centers, and display cabinets, designed to fit your space perfectly.",
            "🪑",
            "bg-[#8b572a]",
            "text-white",
        ),
        service(
            "Kitchen Carpentry Services",
            "Create your dream kitchen with custom carpentry: handmade cabinets, solid wood worktops, islands, pantries, and tailored storage solutions built just for you.",
            "🍽️",
            "bg-white",
            "text-black",
        ),
        service(
            "Doors & Windows",
            "Enhance your home with bespoke internal doors, expert external door and sash window restoration, and custom window frames, complete with quality fittings.",
            "🚪",
            "bg-white",
            "text-black",
        ),
        service(
            "Architectural Joinery",
            "Add charm with custom cornices, ceiling roses, and timber mouldings crafted to perfection by experienced joiners.",
            "🛠️",
            "bg-white",
            "text-black",
        ),
    ]
}

pub fn about() -> AboutSection {
    let vision = |title: &str, description: &str| VisionItem {
        title: title.into(),
        description: description.into(),
    };
    AboutSection {
        title: "Building with Heart, Crafting with Skill.".into(),
        subtitle: "About Us".into(),
        description: "Shay Joinery provides professional commercial joinery services throughout London. We've completed office fit-outs in Canary Wharf, restaurant interiors in Soho, and retail displays in Covent Garden. Our commercial carpentry team understands the importance of durability, functionality, and aesthetic appeal in business environments.".into(),
        vision_items: vec![
            vision("Craftsmanship", "Every piece showcases meticulous attention to detail"),
            vision("Sustainability", "We source timber from certified sustainable forests"),
            vision("Innovation", "Combining traditional joinery techniques with modern technology"),
            vision("Customer Focus", "Your satisfaction drives everything we do"),
            vision("Local Expertise", "Deep knowledge of London properties and building regulations"),
        ],
        image: asset("1.png"),
    }
}

pub fn services_header() -> ServicesHeader {
    ServicesHeader {
        subtitle: "Our Services".into(),
        title: "Custom Furniture & Interior Woodwork Built to Last.".into(),
        description: "Our skilled London joiners combine time-honoured techniques with contemporary innovation to deliver".into(),
        background_image: asset("Ornament.png"),
    }
}

pub fn gallery() -> GallerySection {
    GallerySection {
        subtitle: "Gallery".into(),
        title: "Get To Know Us".into(),
        items: gallery_items(),
    }
}

pub fn gallery_items() -> Vec<GalleryItem> {
    let item = |title: &str, file: &str, span: GridSpan| GalleryItem {
        title: title.into(),
        description: String::new(),
        image: asset(file),
        span,
    };
    vec![
        item("Factory interior", "3.png", GridSpan::Single),
        item("Living room with shelves", "4.png", GridSpan::Double),
        item("Living room with shelves (smaller crop)", "5.png", GridSpan::Single),
        item("Hands working with wood", "6.png", GridSpan::Single),
        item("Workshop machines", "6.png", GridSpan::Single),
        item("Modern luxury living room", "4.png", GridSpan::Full),
    ]
}

pub fn testimonials() -> TestimonialsSection {
    TestimonialsSection {
        subtitle: "Testimonials".into(),
        title: "What Our Customer Says!!".into(),
        testimonials: vec![
            Testimonial {
                quote: "Shay Joinery transformed our Victorian terrace with beautiful bespoke carpentry. Their attention to detail is exceptional.".into(),
                name: "Sarah M".into(),
                location: "Clapham".into(),
                image: asset("7.png"),
            },
            Testimonial {
                quote: "Professional, reliable, and incredibly skilled. The fitted wardrobes they created maximised every inch of our bedroom.".into(),
                name: "James T".into(),
                location: "Islington".into(),
                image: asset("8.png"),
            },
        ],
    }
}

// ============================================================================
// Layout
// ============================================================================

pub fn header() -> HeaderContent {
    let social = |platform: &str| SocialLink {
        platform: platform.into(),
        url: "#".into(),
        icon: String::new(),
    };
    HeaderContent {
        logo: None,
        business_hours: "Monday - Friday 9 AM - 5 PM".into(),
        phone: "07949 296795".into(),
        address: "Railway Arch 467, Bow Common Lane, London".into(),
        social_links: vec![social("LinkedIn"), social("Twitter"), social("Facebook")],
    }
}

pub fn footer() -> FooterContent {
    let link = |label: &str, url: &str| FooterLink {
        label: label.into(),
        url: url.into(),
    };
    let social = |platform: &str, icon: &str| SocialLink {
        platform: platform.into(),
        url: "#".into(),
        icon: icon.into(),
    };
    FooterContent {
        logo: None,
        description: "Handcrafted carpentry and joinery for London homes and businesses, from a single fitted wardrobe to a full commercial fit-out.".into(),
        social_links: vec![
            social("Instagram", "instagram"),
            social("Facebook", "facebook"),
            social("LinkedIn", "linkedin"),
        ],
        service_links: vec![
            link("Bespoke Furniture & Cabinetry", "/our-services"),
            link("Kitchen Carpentry Services", "/our-services"),
            link("Doors & Windows", "/our-services"),
            link("Architectural Joinery", "/our-services"),
            link("Commercial Joinery Services", "/our-services"),
            link("Flooring Services", "/our-services"),
            link("Additional Services", "/our-services"),
        ],
        company_links: vec![
            link("About Us", "/about-us"),
            link("Our Services", "/our-services"),
            link("Contact Us", "/contact-us"),
        ],
        support_links: vec![
            link("Privacy Policy", "#"),
            link("Terms of Service", "#"),
            link("Code of Conduct", "#"),
        ],
        copyright_text: "© 2025 Shay Joinery Ltd. All rights reserved.".into(),
    }
}

// ============================================================================
// About, services and contact pages
// ============================================================================

pub fn about_us_hero() -> PageHero {
    PageHero {
        title: "Master Craftsmen in London Carpentry & Joinery".into(),
        subtitle: "Whether you need custom furniture making in London or professional carpentry services for your renovation project, Shay Joinery delivers exceptional quality and attention to detail.".into(),
        background_image: None,
    }
}

pub fn traditional_modern() -> TraditionalModernSection {
    TraditionalModernSection {
        title: "We are a traditional & modern joinery business".into(),
        description: "Based in Islington, our fully equipped London joinery workshop features state-of-the-art machinery alongside traditional hand tools. The combination enables us to handle projects of any size while maintaining the precision and quality that distinguish handmade joinery.".into(),
        contact_link_text: "Contact Us".into(),
        contact_link_url: "/contact-us".into(),
        image: asset("2.png"),
    }
}

pub fn process() -> ProcessSection {
    let step = |title: &str, number: &str, background: &str, text: &str| ProcessStep {
        title: title.into(),
        description: LOREM_LONG.into(),
        step_number: number.into(),
        background: background.into(),
        text_color: text.into(),
    };
    ProcessSection {
        subtitle: "How We Work".into(),
        title: "Get Started With Our Process".into(),
        description: LOREM_SHORT.into(),
        steps: vec![
            step("Planning", "01", "bg-[#8B572A]", "text-white"),
            step("Brainstorming", "02", "bg-white", "text-gray-800"),
            step("Targeting", "03", "bg-white", "text-gray-800"),
        ],
    }
}

pub fn features() -> FeaturesSection {
    let feature = |title: &str, icon: &str| FeatureItem {
        title: title.into(),
        description: LOREM_LONG.into(),
        icon: icon.into(),
        background: "bg-white".into(),
        text_color: "text-gray-800".into(),
        icon_background: "bg-amber-600".into(),
    };
    FeaturesSection {
        subtitle: "Features".into(),
        title: "Develop ideas into solutions for your business".into(),
        description: LOREM_SHORT.into(),
        features: vec![
            feature("On Target", "Target"),
            feature("Efficient", "Zap"),
            feature("Full Support", "Shield"),
            feature("Guarantee", "CheckCircle"),
            feature("Safe and Secure", "Award"),
            feature("Trusted", "Users"),
        ],
    }
}

pub fn services_hero() -> PageHero {
    PageHero {
        title: "Professional Carpentry & Joinery Services in London".into(),
        subtitle: "Shay Joinery offers comprehensive carpentry and joinery services throughout Greater London. Our skilled craftsmen deliver exceptional results, from bespoke furniture to commercial fit-outs.".into(),
        background_image: None,
    }
}

pub fn contact_hero() -> PageHero {
    PageHero {
        title: "Get in Touch with London's Expert Carpenters".into(),
        subtitle: "Ready to discuss your carpentry or joinery project? Contact Shay Joinery today for a free consultation and quote. Our London-based team is here to bring your vision to life.".into(),
        background_image: None,
    }
}

pub fn contact_form() -> ContactFormSection {
    ContactFormSection {
        title: "Get In Touch".into(),
        subtitle: "Say hay to us!".into(),
        button_text: "Send Messages".into(),
        project_type_options: strings(&[
            "Furniture",
            "Kitchen Carpentry",
            "Doors & Windows",
            "Architectural Joinery",
            "Flooring Services",
            "Commercial",
        ]),
    }
}

pub fn office_addresses() -> OfficeAddressesSection {
    let location = |name: &str, active: bool, phones: &[&str], address: &str| OfficeLocation {
        location_name: name.into(),
        is_active: active,
        phone_numbers: strings(phones),
        email_address: CONTACT_EMAIL.into(),
        office_address: address.into(),
    };
    OfficeAddressesSection {
        subtitle: "Addresses".into(),
        title: "Our Office Addresses".into(),
        locations: vec![
            location(
                "Central London",
                true,
                &["07949 296795", "07973 282475"],
                "Railway Arch 467, Bow Common Lane, London E3 4BN / E3 4BH",
            ),
            location("North London", false, &["07949 296795"], "North London Office Address"),
            location("South London", false, &["07973 282475"], "South London Office Address"),
            location("East London", false, &["07949 296795"], "East London Office Address"),
        ],
    }
}

// ============================================================================
// Portfolio
// ============================================================================

pub fn portfolio_hero() -> PageHero {
    PageHero {
        title: "Our London Carpentry & Joinery Projects".into(),
        subtitle: "Discover our portfolio, showcasing exceptional carpentry and joinery work throughout London. From luxury residential projects in Kensington to commercial fit-outs in the city, each project demonstrates our commitment to quality craftsmanship.".into(),
        background_image: None,
    }
}

fn project(title: &str, completed_on: &str, status: ProjectStatus, description: &str, file: &str) -> Project {
    Project {
        title: title.into(),
        client: "Laing O'Rourke".into(),
        started_on: "Apr 10, 2024".into(),
        completed_on: completed_on.into(),
        status,
        description: description.into(),
        image: asset(file),
    }
}

pub fn ongoing_projects() -> ProjectsSection {
    ProjectsSection {
        section_title: "Ongoing Projects".into(),
        projects: vec![
            project(
                "Belgravia Townhouse Restoration",
                "Ongoing",
                ProjectStatus::Ongoing,
                "Complete restoration of a historic townhouse in Belgravia, including custom joinery, period-accurate moldings, and bespoke furniture pieces.",
                "2.png",
            ),
            project(
                "Modern Kitchen Design, Notting Hill",
                "Ongoing",
                ProjectStatus::Ongoing,
                "Contemporary kitchen renovation featuring custom cabinetry, integrated appliances, and a unique breakfast bar design with premium materials.",
                "5.png",
            ),
        ],
    }
}

pub fn completed_projects() -> ProjectsSection {
    ProjectsSection {
        section_title: "All Completed Projects".into(),
        projects: vec![
            project(
                "City of London Office Fit-out",
                "Apr 10, 2025",
                ProjectStatus::Completed,
                "Modern office space transformation with custom-built workstations, meeting room furniture, and reception area joinery.",
                "3.png",
            ),
            project(
                "Shoreditch Restaurant Interior",
                "Apr 10, 2025",
                ProjectStatus::Completed,
                "Industrial-chic restaurant interior featuring custom banquette seating, bar counter, and decorative wooden elements.",
                "6.png",
            ),
            project(
                "Hampstead Family Home",
                "Apr 10, 2025",
                ProjectStatus::Completed,
                "Complete home renovation including custom wardrobes, built-in storage solutions, and bespoke furniture pieces.",
                "4.png",
            ),
        ],
    }
}
