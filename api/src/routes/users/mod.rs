//! User routes under `/users`
//!
//! `/users/me` is open to any authenticated user, everything else requires
//! the `ADMIN` role. Literal segments are registered before `/{id}`.

pub mod admin;
pub mod me;

use actix_web::web;
use lp_core::repositories::{RefreshTokenRepository, UserRepository};

use crate::middleware::JwtAuth;

pub fn configure<U, T>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
{
    cfg.service(
        web::scope("/users")
            .service(
                web::resource("/me")
                    .wrap(JwtAuth::authenticated())
                    .route(web::get().to(me::get_me::<U, T>))
                    .route(web::patch().to(me::update_me::<U, T>)),
            )
            .service(
                web::resource("")
                    .wrap(JwtAuth::admin())
                    .route(web::post().to(admin::create_user::<U, T>))
                    .route(web::get().to(admin::list_users::<U, T>)),
            )
            .service(
                web::resource("/paginated")
                    .wrap(JwtAuth::admin())
                    .route(web::get().to(admin::list_users_paginated::<U, T>)),
            )
            .service(
                web::resource("/{id}/reset-password")
                    .wrap(JwtAuth::admin())
                    .route(web::patch().to(admin::reset_password::<U, T>)),
            )
            .service(
                web::resource("/{id}")
                    .wrap(JwtAuth::admin())
                    .route(web::get().to(admin::get_user::<U, T>))
                    .route(web::patch().to(admin::update_user::<U, T>))
                    .route(web::delete().to(admin::delete_user::<U, T>)),
            ),
    );
}
