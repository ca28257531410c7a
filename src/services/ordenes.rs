//! Order (quote) workflows shared by the customer and admin pages.

use serde_json::{Value, json};

use crate::api::{Backend, BackendExt, endpoints};
use crate::domain::orden::{CrearOrdenRequest, Orden};
use crate::dto::ordenes::{OrdenDetailData, OrdenDetailOutcome, OrdenFormData, OrdenesOutcome};
use crate::forms::ordenes::NuevaOrdenForm;
use crate::services::muebles::list_muebles;
use crate::services::variantes::list_variantes;
use crate::services::{ServiceError, ServiceResult};

pub const CREATED_MESSAGE: &str = "Orden creada exitosamente";
pub const CONFIRMED_MESSAGE: &str =
    "Orden confirmada exitosamente (Estado: VENTA, precios congelados)";
pub const CANCELLED_MESSAGE: &str = "Orden cancelada exitosamente";
pub const DETAIL_DELETED_MESSAGE: &str = "Detalle eliminado exitosamente";
pub const EMPTY_ORDER_MESSAGE: &str = "Debe agregar al menos un mueble a la orden";

/// Lists the orders visible to the token's owner.
pub async fn list_ordenes<B>(api: &B, token: &str) -> Vec<Orden>
where
    B: Backend + ?Sized,
{
    api.get(endpoints::ORDENES, Some(token))
        .await
        .unwrap_or_default()
}

/// Loads the muebles and variantes offered by the order form.
pub async fn load_order_form<B>(api: &B, token: &str) -> OrdenFormData
where
    B: Backend + ?Sized,
{
    OrdenFormData {
        muebles: list_muebles(api, Some(token)).await,
        variantes: list_variantes(api, Some(token)).await,
    }
}

async fn detail_with<B>(api: &B, token: &str, orden: Option<Orden>) -> OrdenDetailData
where
    B: Backend + ?Sized,
{
    OrdenDetailData {
        orden,
        muebles: list_muebles(api, Some(token)).await,
        variantes: list_variantes(api, Some(token)).await,
    }
}

/// Loads one order plus the catalog used to describe its lines.
pub async fn load_orden<B>(api: &B, token: &str, id: i32) -> OrdenDetailData
where
    B: Backend + ?Sized,
{
    let orden = api.get(&endpoints::orden(id), Some(token)).await.ok();
    detail_with(api, token, orden).await
}

/// Submits a new quote. A form without a single complete line is rejected
/// before the backend is contacted.
pub async fn create_orden<B>(
    api: &B,
    token: &str,
    form: NuevaOrdenForm,
) -> ServiceResult<OrdenesOutcome>
where
    B: Backend + ?Sized,
{
    let request = CrearOrdenRequest::try_from(form)?;
    if request.detalles.is_empty() {
        return Err(ServiceError::EmptyOrder);
    }

    api.post::<_, Value>(endpoints::ORDENES, &request, Some(token))
        .await?;

    Ok(OrdenesOutcome {
        ordenes: list_ordenes(api, token).await,
        success: CREATED_MESSAGE,
    })
}

/// Moves a quote to VENTA; the backend freezes prices.
pub async fn confirmar_orden<B>(api: &B, token: &str, id: i32) -> ServiceResult<OrdenDetailOutcome>
where
    B: Backend + ?Sized,
{
    let orden: Orden = api
        .post(&endpoints::confirmar_orden(id), &json!({}), Some(token))
        .await?;

    Ok(OrdenDetailOutcome {
        detail: detail_with(api, token, Some(orden)).await,
        success: CONFIRMED_MESSAGE,
    })
}

pub async fn cancelar_orden<B>(api: &B, token: &str, id: i32) -> ServiceResult<OrdenDetailOutcome>
where
    B: Backend + ?Sized,
{
    let orden: Orden = api
        .post(&endpoints::cancelar_orden(id), &json!({}), Some(token))
        .await?;

    Ok(OrdenDetailOutcome {
        detail: detail_with(api, token, Some(orden)).await,
        success: CANCELLED_MESSAGE,
    })
}

/// Removes one line from a quote and reloads the order.
pub async fn eliminar_detalle<B>(
    api: &B,
    token: &str,
    orden_id: i32,
    detalle_id: i32,
) -> ServiceResult<OrdenDetailOutcome>
where
    B: Backend + ?Sized,
{
    api.delete(&endpoints::detalle_orden(orden_id, detalle_id), Some(token))
        .await?;

    Ok(OrdenDetailOutcome {
        detail: load_orden(api, token, orden_id).await,
        success: DETAIL_DELETED_MESSAGE,
    })
}
