use crate::domain::usuario::Usuario;

/// Fresh user listing plus the message describing what changed.
#[derive(Debug)]
pub struct UsuariosOutcome {
    pub usuarios: Vec<Usuario>,
    pub success: &'static str,
}
