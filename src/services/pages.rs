//! Services assembling the static marketing pages.

use crate::domain::content::SiteContent;
use crate::dto::pages::{AboutPageData, ContactPageData, HomePageData, ServicesPageData};

const HOME_SERVICES: usize = 3;
const HOME_POSTS: usize = 3;

pub fn load_home_page(content: &SiteContent) -> HomePageData {
    HomePageData {
        banner: content.banner.clone(),
        services: content.services.iter().take(HOME_SERVICES).cloned().collect(),
        testimonials: content.testimonials.clone(),
        latest_posts: content
            .latest_posts(HOME_POSTS)
            .into_iter()
            .cloned()
            .collect(),
    }
}

pub fn load_about_page(content: &SiteContent) -> AboutPageData {
    AboutPageData {
        about: content.about.clone(),
        testimonials: content.testimonials.clone(),
    }
}

pub fn load_services_page(content: &SiteContent) -> ServicesPageData {
    ServicesPageData {
        services: content.services.clone(),
    }
}

pub fn load_contact_page(content: &SiteContent) -> ContactPageData {
    ContactPageData {
        contact: content.contact.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::MedicalService;

    fn service(slug: &str) -> MedicalService {
        MedicalService {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            description: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn home_page_shows_service_teaser() {
        let content = SiteContent {
            services: ["cardiology", "dental", "pediatrics", "radiology"]
                .into_iter()
                .map(service)
                .collect(),
            ..SiteContent::default()
        };

        let page = load_home_page(&content);
        assert_eq!(page.services.len(), HOME_SERVICES);
        assert!(page.latest_posts.is_empty());

        assert_eq!(load_services_page(&content).services.len(), 4);
    }
}
