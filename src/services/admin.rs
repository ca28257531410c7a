use serde_json::Value;

use crate::api::{Backend, BackendExt, endpoints};
use crate::dto::admin::DashboardData;

async fn count<B>(api: &B, endpoint: &str, token: &str) -> usize
where
    B: Backend + ?Sized,
{
    api.get::<Vec<Value>>(endpoint, Some(token))
        .await
        .map(|items| items.len())
        .unwrap_or_default()
}

/// Counts the entities listed by the backend for the dashboard cards.
pub async fn load_dashboard<B>(api: &B, token: &str) -> DashboardData
where
    B: Backend + ?Sized,
{
    DashboardData {
        muebles: count(api, endpoints::MUEBLES, token).await,
        variantes: count(api, endpoints::VARIANTES, token).await,
        ordenes: count(api, endpoints::ORDENES, token).await,
        usuarios: count(api, endpoints::USUARIOS, token).await,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::ApiMethod;
    use crate::api::mock::{MockBackend, backend_failure};

    #[actix_web::test]
    async fn failed_counts_are_zero() {
        let mut api = MockBackend::new();
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Get && req.endpoint == "/muebles")
            .times(1)
            .returning(|_| Ok(json!([{}, {}])));
        api.expect_send()
            .withf(|req| req.method == ApiMethod::Get && req.endpoint == "/usuarios")
            .times(1)
            .returning(|_| Ok(json!([{}])));
        api.expect_send()
            .withf(|req| req.endpoint == "/variantes" || req.endpoint == "/ordenes")
            .times(2)
            .returning(|_| Err(backend_failure()));

        let data = load_dashboard(&api, "t").await;

        assert_eq!(
            data,
            DashboardData {
                muebles: 2,
                variantes: 0,
                ordenes: 0,
                usuarios: 1,
            }
        );
    }
}
