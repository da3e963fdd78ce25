//! Authentication routes under `/auth`

pub mod change_password;
pub mod login;
pub mod logout;
pub mod refresh;

use actix_web::web;
use lp_core::repositories::{RefreshTokenRepository, UserRepository};

use crate::middleware::JwtAuth;

pub fn configure<U, T>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login::login::<U, T>))
            .route("/logout", web::post().to(logout::logout::<U, T>))
            .route("/refresh", web::post().to(refresh::refresh_token::<U, T>))
            .service(
                web::resource("/change-password")
                    .wrap(JwtAuth::authenticated())
                    .route(web::patch().to(change_password::change_password::<U, T>)),
            ),
    );
}
