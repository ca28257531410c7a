use serde::Serialize;

/// Entity counts shown on the admin dashboard.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct DashboardData {
    pub muebles: usize,
    pub variantes: usize,
    pub ordenes: usize,
    pub usuarios: usize,
}
