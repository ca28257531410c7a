use crate::api::{Backend, BackendExt, endpoints};
use crate::domain::mueble::Mueble;
use crate::domain::variante::Variante;
use crate::dto::catalogo::CatalogoPageData;

/// Loads the public catalog. Both reads go out without a token, one after
/// the other; a failed read shows up as an empty section.
pub async fn load_catalogo<B>(api: &B) -> CatalogoPageData
where
    B: Backend + ?Sized,
{
    let muebles: Vec<Mueble> = api.get(endpoints::MUEBLES, None).await.unwrap_or_default();
    let variantes: Vec<Variante> = api.get(endpoints::VARIANTES, None).await.unwrap_or_default();

    CatalogoPageData { muebles, variantes }
}
