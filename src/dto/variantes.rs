use crate::domain::variante::Variante;

#[derive(Debug)]
pub struct VariantesOutcome {
    pub variantes: Vec<Variante>,
    pub success: &'static str,
}
