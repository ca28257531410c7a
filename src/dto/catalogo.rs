use crate::domain::mueble::Mueble;
use crate::domain::variante::Variante;

/// Data required to render the public catalog.
#[derive(Debug, Default)]
pub struct CatalogoPageData {
    pub muebles: Vec<Mueble>,
    pub variantes: Vec<Variante>,
}
