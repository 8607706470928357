//! Content Catalog
//!
//! Static content shown on the practice website: services, credentials,
//! blog articles, patient testimonials, navigation and contact details.
//!
//! The catalog is compiled into the binary and never mutated.

mod data;
mod types;

pub use types::{BlogPost, ClinicInfo, NavItem, Qualification, Service, Testimonial};

/// All treatment areas in display order
pub fn services() -> &'static [Service] {
    data::SERVICES
}

/// Look up a service by id
pub fn service(id: &str) -> Option<&'static Service> {
    data::SERVICES.iter().find(|s| s.id == id)
}

pub fn qualifications() -> &'static [Qualification] {
    data::QUALIFICATIONS
}

/// Blog posts, newest first
pub fn blog_posts() -> &'static [BlogPost] {
    data::BLOG_POSTS
}

/// Look up a blog post by id
pub fn blog_post(id: &str) -> Option<&'static BlogPost> {
    data::BLOG_POSTS.iter().find(|p| p.id == id)
}

pub fn testimonials() -> &'static [Testimonial] {
    data::TESTIMONIALS
}

/// Mean star rating across all testimonials
pub fn average_rating() -> f64 {
    let reviews = data::TESTIMONIALS;
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u32 = reviews.iter().map(|t| u32::from(t.rating)).sum();
    f64::from(total) / reviews.len() as f64
}

pub fn nav_items() -> &'static [NavItem] {
    data::NAV_ITEMS
}

pub fn clinic_info() -> &'static ClinicInfo {
    &data::CLINIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_service_ids_unique() {
        let ids: HashSet<_> = services().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), services().len());
        assert_eq!(services().len(), 6);
    }

    #[test]
    fn test_service_lookup() {
        let thyroid = service("thyroid").unwrap();
        assert_eq!(thyroid.title, "Thyroid Disorders");
        assert!(!thyroid.symptoms.is_empty());
        assert!(service("dermatology").is_none());
    }

    #[test]
    fn test_blog_lookup() {
        assert_eq!(blog_posts().len(), 5);
        assert_eq!(blog_post("3").unwrap().category, "Critical Care");
        assert!(blog_post("99").is_none());
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(testimonials().iter().all(|t| (1..=5).contains(&t.rating)));
        let avg = average_rating();
        assert!(avg > 4.0 && avg <= 5.0);
    }

    #[test]
    fn test_nav_anchors() {
        assert!(nav_items().iter().all(|n| n.href.starts_with('#')));
        assert_eq!(clinic_info().availability_days, "Saturday & Sunday");
    }
}
