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

use actix_web::{patch, web, HttpResponse, Responder};
use db_connector::models::routes::Route;
use diesel::prelude::*;
use diesel::result::{
    DatabaseErrorKind,
    Error::{DatabaseError, NotFound},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::Error,
    models::route::RouteResponse,
    utils::{get_connection, parse_uuid, web_block_unpacked},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateRouteSchema {
    pub route: Option<String>,
    pub domain: Option<String>,
    pub active: Option<bool>,
}

/// Partially update a route. Omitted fields keep their stored value; at least
/// one of `route`/`domain` must be supplied.
#[utoipa::path(
    context_path = "/rotas",
    request_body = UpdateRouteSchema,
    params(
        ("id" = String, Path, description = "Route id")
    ),
    responses(
        (status = 200, description = "Route updated", body = RouteResponse),
        (status = 400, description = "No updatable fields or duplicate (route, domain)", body = [crate::error::ApiMessage]),
        (status = 404, description = "Route not found", body = [crate::error::ApiMessage]),
        (status = 500, description = "Internal server error", body = [crate::error::ApiMessage])
    )
)]
#[patch("/{id}")]
pub async fn update_route(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateRouteSchema>,
) -> actix_web::Result<impl Responder> {
    use db_connector::schema::routes::dsl as routes;

    let route_id = parse_uuid(&path)?;

    let UpdateRouteSchema {
        route,
        domain,
        active,
    } = payload.into_inner();

    // Blank strings count as "not supplied".
    let route = route.filter(|v| !v.trim().is_empty());
    let domain = domain.filter(|v| !v.trim().is_empty());

    if route.is_none() && domain.is_none() {
        return Err(Error::NoRouteUpdateFields.into());
    }

    let mut conn = get_connection(&state)?;

    let updated = web_block_unpacked(move || {
        let existing: Route = match routes::routes
            .find(route_id)
            .select(Route::as_select())
            .get_result(&mut conn)
        {
            Ok(r) => r,
            Err(NotFound) => return Err(Error::RouteNotFound),
            Err(err) => {
                log::error!("Failed to load route {route_id}: {err}");
                return Err(Error::InternalError);
            }
        };

        match diesel::update(routes::routes.find(route_id))
            .set((
                routes::route.eq(route.unwrap_or(existing.route)),
                routes::domain.eq(domain.unwrap_or(existing.domain)),
                routes::active.eq(active.unwrap_or(existing.active)),
            ))
            .get_result::<Route>(&mut conn)
        {
            Ok(r) => Ok(r),
            Err(DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(Error::RouteAlreadyExists)
            }
            Err(err) => {
                log::error!("Failed to update route {route_id}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(RouteResponse::from(updated)))
}
