//! Fallback merge policy.
//!
//! Given what a section resolver produced and the section's static fallback,
//! decide what the page actually renders:
//!
//! | Kind | Live value used when | Otherwise |
//! |------|----------------------|-----------|
//! | Singleton | present and not vacant | fallback |
//! | List | non-empty | fallback |
//!
//! Only the ongoing and completed projects sections can be *vacant*: found,
//! but with no projects. Such a section is treated like a missing one. Every
//! other section uses its live copy whenever the CMS returns an entry.
//!
//! The merge is applied to each section on its own. Nothing here looks at
//! any other section of the page.

use tracing::debug;

/// Where a resolved section's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Live,
    Fallback,
}

/// A section value ready for rendering. Never absent, never an empty list.
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    pub name: &'static str,
    pub value: T,
    pub origin: Origin,
}

/// Name and origin of one resolved section, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionReport {
    pub name: &'static str,
    pub origin: Origin,
}

impl<T> Resolved<T> {
    pub fn report(&self) -> SectionReport {
        SectionReport {
            name: self.name,
            origin: self.origin,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }
}

/// Merge a singleton resolver outcome with its fallback.
pub fn merge_singleton<T>(
    name: &'static str,
    outcome: Option<T>,
    is_vacant: fn(&T) -> bool,
    fallback: fn() -> T,
) -> Resolved<T> {
    match outcome {
        Some(value) if !is_vacant(&value) => Resolved {
            name,
            value,
            origin: Origin::Live,
        },
        Some(_) => {
            debug!(section = name, "section is vacant, using fallback");
            fallback_of(name, fallback())
        }
        None => {
            debug!(section = name, "section is absent, using fallback");
            fallback_of(name, fallback())
        }
    }
}

/// Merge a list resolver outcome with its fallback.
pub fn merge_list<T>(
    name: &'static str,
    outcome: Vec<T>,
    fallback: fn() -> Vec<T>,
) -> Resolved<Vec<T>> {
    if outcome.is_empty() {
        debug!(section = name, "section list is empty, using fallback");
        fallback_of(name, fallback())
    } else {
        Resolved {
            name,
            value: outcome,
            origin: Origin::Live,
        }
    }
}

fn fallback_of<T>(name: &'static str, value: T) -> Resolved<T> {
    Resolved {
        name,
        value,
        origin: Origin::Fallback,
    }
}

/// Whether a slice of reports contains any fallback.
pub fn any_fallback(reports: &[SectionReport]) -> bool {
    reports.iter().any(|r| r.origin == Origin::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &String) -> bool {
        false
    }

    fn empty_string(value: &String) -> bool {
        value.is_empty()
    }

    fn fallback_text() -> String {
        "fallback".to_string()
    }

    fn fallback_items() -> Vec<u32> {
        vec![7, 8, 9]
    }

    #[test]
    fn singleton_present_is_live() {
        let resolved = merge_singleton("hero", Some("live".to_string()), never, fallback_text);
        assert_eq!(resolved.value, "live");
        assert_eq!(resolved.origin, Origin::Live);
        assert!(!resolved.is_fallback());
    }

    #[test]
    fn singleton_absent_uses_fallback() {
        let resolved = merge_singleton("hero", None, never, fallback_text);
        assert_eq!(resolved.value, "fallback");
        assert_eq!(resolved.origin, Origin::Fallback);
    }

    #[test]
    fn singleton_vacant_uses_fallback() {
        let resolved = merge_singleton("gallery", Some(String::new()), empty_string, fallback_text);
        assert_eq!(resolved.value, "fallback");
        assert!(resolved.is_fallback());
    }

    #[test]
    fn list_non_empty_is_live() {
        let resolved = merge_list("services", vec![1, 2], fallback_items);
        assert_eq!(resolved.value, vec![1, 2]);
        assert_eq!(resolved.origin, Origin::Live);
    }

    #[test]
    fn list_empty_uses_fallback_in_order() {
        let resolved = merge_list("gallery items", Vec::new(), fallback_items);
        assert_eq!(resolved.value, vec![7, 8, 9]);
        assert_eq!(resolved.origin, Origin::Fallback);
    }

    #[test]
    fn report_carries_name_and_origin() {
        let resolved = merge_list("services", Vec::<u32>::new(), fallback_items);
        assert_eq!(
            resolved.report(),
            SectionReport {
                name: "services",
                origin: Origin::Fallback
            }
        );
    }

    #[test]
    fn any_fallback_detects_a_single_fallback() {
        let live = SectionReport {
            name: "a",
            origin: Origin::Live,
        };
        let fallback = SectionReport {
            name: "b",
            origin: Origin::Fallback,
        };
        assert!(!any_fallback(&[live, live]));
        assert!(any_fallback(&[live, fallback]));
    }
}
