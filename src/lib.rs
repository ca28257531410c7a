//! Server-rendered ordering front end for a furniture store.
//!
//! The crate holds no state of its own: every page is built from the JSON
//! backend at `api_base_url`, with the caller's bearer token taken from the
//! signed session cookie.

#[cfg(feature = "data")]
pub mod domain;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod session;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use std::time::Duration;

    use actix_files::Files;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::middleware::{Logger, from_fn};
    use actix_web::{App, HttpServer, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::api::ApiClient;
    use crate::middleware::{require_admin, require_login};
    use crate::models::config::ServerConfig;
    use crate::routes::admin::show_dashboard;
    use crate::routes::auth::{login, logout, logout_get, register, show_login, show_register};
    use crate::routes::catalogo::show_catalogo;
    use crate::routes::main::show_index;
    use crate::routes::muebles::{
        create_mueble, delete_mueble, edit_mueble, list_muebles, new_mueble, update_mueble,
    };
    use crate::routes::ordenes::{
        admin_cancelar_orden, admin_confirmar_orden, admin_eliminar_detalle, admin_ordenes,
        admin_show_orden, cancelar_mi_orden, confirmar_mi_orden, create_orden,
        eliminar_mi_detalle, mis_ordenes, new_orden, show_mi_orden,
    };
    use crate::routes::usuarios::{
        activar_usuario, degradar_usuario, list_usuarios, promover_usuario,
    };
    use crate::routes::variantes::{
        create_variante, delete_variante, edit_variante, list_variantes, new_variante,
        update_variante,
    };

    /// Registers every route: public pages, then the `require_login` and
    /// `require_admin` scopes.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(show_index)
            .service(show_login)
            .service(login)
            .service(show_register)
            .service(register)
            .service(logout_get)
            .service(logout)
            .service(
                web::scope("/catalogo")
                    .wrap(from_fn(require_login))
                    .service(show_catalogo),
            )
            .service(
                web::scope("/mis-ordenes")
                    .wrap(from_fn(require_login))
                    .service(mis_ordenes)
                    .service(new_orden)
                    .service(create_orden)
                    .service(show_mi_orden)
                    .service(confirmar_mi_orden)
                    .service(cancelar_mi_orden)
                    .service(eliminar_mi_detalle),
            )
            .service(
                web::scope("/admin")
                    .wrap(from_fn(require_admin))
                    .service(show_dashboard)
                    .service(list_muebles)
                    .service(new_mueble)
                    .service(create_mueble)
                    .service(edit_mueble)
                    .service(update_mueble)
                    .service(delete_mueble)
                    .service(list_variantes)
                    .service(new_variante)
                    .service(create_variante)
                    .service(edit_variante)
                    .service(update_variante)
                    .service(delete_variante)
                    .service(admin_ordenes)
                    .service(admin_show_orden)
                    .service(admin_confirmar_orden)
                    .service(admin_cancelar_orden)
                    .service(admin_eliminar_detalle)
                    .service(list_usuarios)
                    .service(promover_usuario)
                    .service(degradar_usuario)
                    .service(activar_usuario),
            );
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let api = ApiClient::new(
            &server_config.api_base_url,
            Duration::from_secs(server_config.api_timeout_secs),
        )
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;

        // Keys and stores for sessions and flash messages.
        let secret_key = server_config.session_key()?;

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Listening on {}:{}, backend at {}",
            bind_address.0,
            bind_address.1,
            api.base_url()
        );

        let api = web::Data::new(api);
        let tera = web::Data::new(tera);
        let cookie_secure = server_config.cookie_secure;

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(cookie_secure)
                        .build(),
                )
                .wrap(Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(configure)
                .app_data(tera.clone())
                .app_data(api.clone())
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
