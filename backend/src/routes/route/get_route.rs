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
use diesel::result::Error::NotFound;

use crate::{
    error::Error,
    models::route::RouteResponse,
    utils::{get_connection, parse_uuid, web_block_unpacked},
    AppState,
};

/// Get a single route by id.
#[utoipa::path(
    context_path = "/rotas",
    params(
        ("id" = String, Path, description = "Route id")
    ),
    responses(
        (status = 200, description = "The route", body = RouteResponse),
        (status = 400, description = "Invalid id", body = [crate::error::ApiMessage]),
        (status = 404, description = "Route not found", body = [crate::error::ApiMessage]),
        (status = 500, description = "Internal server error", body = [crate::error::ApiMessage])
    )
)]
#[get("/{id}")]
pub async fn get_route(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    use db_connector::schema::routes::dsl as routes;

    let route_id = parse_uuid(&path)?;
    let mut conn = get_connection(&state)?;

    let route: Route = web_block_unpacked(move || {
        match routes::routes
            .find(route_id)
            .select(Route::as_select())
            .get_result(&mut conn)
        {
            Ok(r) => Ok(r),
            Err(NotFound) => Err(Error::RouteNotFound),
            Err(err) => {
                log::error!("Failed to load route {route_id}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(RouteResponse::from(route)))
}
