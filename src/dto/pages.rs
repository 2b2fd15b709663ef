use serde::Serialize;

use crate::domain::content::{
    AboutSection, Banner, BlogPost, ContactInfo, MedicalService, Testimonial,
};

/// Data required to render the home page.
#[derive(Debug, Serialize)]
pub struct HomePageData {
    pub banner: Banner,
    /// First few services shown as a teaser.
    pub services: Vec<MedicalService>,
    pub testimonials: Vec<Testimonial>,
    pub latest_posts: Vec<BlogPost>,
}

#[derive(Debug, Serialize)]
pub struct AboutPageData {
    pub about: AboutSection,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Serialize)]
pub struct ServicesPageData {
    pub services: Vec<MedicalService>,
}

#[derive(Debug, Serialize)]
pub struct ContactPageData {
    pub contact: ContactInfo,
}
