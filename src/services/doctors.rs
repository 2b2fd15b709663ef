//! Services backing the doctors directory.

use crate::api::PortalApi;
use crate::dto::doctors::{DoctorsPageData, DoctorsQuery};
use crate::pagination::Paginated;
use crate::services::ServiceResult;

/// Fetches the doctor listing and slices out the requested page.
pub async fn load_doctors_page<A>(
    api: &A,
    query: DoctorsQuery,
    per_page: usize,
) -> ServiceResult<DoctorsPageData>
where
    A: PortalApi + ?Sized,
{
    let doctors = api.list_doctors().await.map_err(|err| {
        log::error!("Failed to load doctors: {err}");
        err
    })?;

    Ok(DoctorsPageData {
        doctors: Paginated::from_items(doctors, query.page.unwrap_or(1), per_page),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api::stub::StubApi;
    use crate::services::ServiceError;

    #[actix_web::test]
    async fn doctors_are_paginated() {
        let api = StubApi::new().with_doctors(14);

        let data = load_doctors_page(&api, DoctorsQuery { page: Some(3) }, 6)
            .await
            .unwrap();

        assert_eq!(data.doctors.page, 3);
        assert_eq!(data.doctors.items.len(), 2);
        assert_eq!(data.doctors.items[0].full_name, "Doctor #13");
        assert_eq!((data.doctors.start, data.doctors.end), (13, 14));
        assert_eq!(api.calls(), 1);
    }

    #[actix_web::test]
    async fn empty_listing_hides_pager() {
        let api = StubApi::new();

        let data = load_doctors_page(&api, DoctorsQuery::default(), 6)
            .await
            .unwrap();

        assert!(data.doctors.items.is_empty());
        assert!(!data.doctors.visible);
    }

    #[actix_web::test]
    async fn api_failure_is_reported() {
        let api = StubApi::new().failing(ApiError::Transport("down".to_string()));

        let result = load_doctors_page(&api, DoctorsQuery::default(), 6).await;

        assert!(matches!(result, Err(ServiceError::Api(ApiError::Transport(_)))));
    }
}
