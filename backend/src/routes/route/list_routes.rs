/* gateway-acl
 * Copyright (C) 2025 gateway-acl contributors
 *
 * This library is free software; you can redistribute it and/or
 * modify it under the terms of the GNU Lesser General Public
 * License as published by the Free Software Foundation; either
 * version 2 of the License, or (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
 * Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public
 * License along with this library; if not, write to the
 * Free Software Foundation, Inc., 59 Temple Place - Suite 330,
 * Boston, MA 02111-1307, USA.
 */

use actix_web::{get, web, HttpResponse, Responder};
use db_connector::models::routes::Route;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::Error,
    models::route::RouteResponse,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

#[derive(Deserialize, IntoParams)]
pub struct ListRoutesQuery {
    /// Substring filter on the route path.
    pub rota: Option<String>,
    /// Substring filter on the domain.
    pub dominio: Option<String>,
}

/// Escapes LIKE metacharacters so a filter value matches literally.
/// Postgres honors `\` as the default escape character for LIKE.
fn contains_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// List routes, optionally filtered by substring on route and/or domain.
#[utoipa::path(
    context_path = "/rotas",
    params(ListRoutesQuery),
    responses(
        (status = 200, description = "List of routes", body = [RouteResponse]),
        (status = 500, description = "Internal server error", body = [crate::error::ApiMessage])
    )
)]
#[get("")]
pub async fn list_routes(
    state: web::Data<AppState>,
    query: web::Query<ListRoutesQuery>,
) -> actix_web::Result<impl Responder> {
    use db_connector::schema::routes::dsl as routes;

    let ListRoutesQuery { rota, dominio } = query.into_inner();

    // An empty query value counts as absent.
    let rota = rota.filter(|v| !v.is_empty());
    let dominio = dominio.filter(|v| !v.is_empty());

    let mut conn = get_connection(&state)?;

    let result: Vec<Route> = web_block_unpacked(move || {
        let result = match (rota, dominio) {
            (None, None) => routes::routes.select(Route::as_select()).load(&mut conn),
            (Some(r), None) => routes::routes
                .filter(routes::route.like(contains_pattern(&r)))
                .select(Route::as_select())
                .load(&mut conn),
            (None, Some(d)) => routes::routes
                .filter(routes::domain.like(contains_pattern(&d)))
                .select(Route::as_select())
                .load(&mut conn),
            (Some(r), Some(d)) => routes::routes
                .filter(routes::route.like(contains_pattern(&r)))
                .filter(routes::domain.like(contains_pattern(&d)))
                .select(Route::as_select())
                .load(&mut conn),
        };

        match result {
            Ok(v) => Ok(v),
            Err(err) => {
                log::error!("Failed to load routes: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    let body: Vec<RouteResponse> = result.into_iter().map(RouteResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}
