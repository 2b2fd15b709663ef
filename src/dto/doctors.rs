use serde::Serialize;

use crate::domain::doctor::Doctor;
use crate::pagination::Paginated;

/// Query parameters accepted by the doctors listing.
#[derive(Debug, Default)]
pub struct DoctorsQuery {
    pub page: Option<usize>,
}

/// Data required to render the doctors listing.
#[derive(Debug, Serialize)]
pub struct DoctorsPageData {
    pub doctors: Paginated<Doctor>,
}
