use crate::domain::mueble::Mueble;

/// Fresh listing returned after a successful mutation.
#[derive(Debug)]
pub struct MueblesOutcome {
    pub muebles: Vec<Mueble>,
    pub success: &'static str,
}
