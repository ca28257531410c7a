//! DTOs shaped for the order list, form and detail templates.

use crate::domain::mueble::Mueble;
use crate::domain::orden::Orden;
use crate::domain::variante::Variante;

/// Choices offered by the new-order form.
#[derive(Debug, Default)]
pub struct OrdenFormData {
    pub muebles: Vec<Mueble>,
    pub variantes: Vec<Variante>,
}

/// Aggregated data required to render the order detail page.
#[derive(Debug, Default)]
pub struct OrdenDetailData {
    /// `None` when the backend could not return the order.
    pub orden: Option<Orden>,
    pub muebles: Vec<Mueble>,
    pub variantes: Vec<Variante>,
}

#[derive(Debug)]
pub struct OrdenesOutcome {
    pub ordenes: Vec<Orden>,
    pub success: &'static str,
}

#[derive(Debug)]
pub struct OrdenDetailOutcome {
    pub detail: OrdenDetailData,
    pub success: &'static str,
}
