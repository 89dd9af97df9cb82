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

use actix_web::{post, web, HttpResponse, Responder};
use db_connector::models::routes::Route;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error::DatabaseError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{ApiMessage, Error},
    models::route::RouteResponse,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateRouteSchema {
    pub route: Option<String>,
    pub domain: Option<String>,
    pub active: Option<bool>,
}

/// Create a new route. `(route, domain)` must be unique. Missing fields are
/// all reported together, one envelope entry per field.
#[utoipa::path(
    context_path = "/rotas",
    request_body = CreateRouteSchema,
    responses(
        (status = 201, description = "Route created", body = RouteResponse),
        (status = 400, description = "Missing fields or route already registered", body = [ApiMessage]),
        (status = 500, description = "Internal server error", body = [ApiMessage])
    )
)]
#[post("")]
pub async fn create_route(
    state: web::Data<AppState>,
    payload: web::Json<CreateRouteSchema>,
) -> actix_web::Result<impl Responder> {
    use db_connector::schema::routes::dsl as routes;

    let CreateRouteSchema {
        route,
        domain,
        active,
    } = payload.into_inner();

    let mut field_errors = Vec::new();
    if route.as_deref().map_or(true, |v| v.trim().is_empty()) {
        field_errors.push(ApiMessage::bad_request("Rota é obrigatória"));
    }
    if domain.as_deref().map_or(true, |v| v.trim().is_empty()) {
        field_errors.push(ApiMessage::bad_request("Domínio é obrigatório"));
    }
    if active.is_none() {
        field_errors.push(ApiMessage::bad_request("Ativo é obrigatório"));
    }

    let (route, domain, active) = match (route, domain, active) {
        (Some(route), Some(domain), Some(active))
            if !route.trim().is_empty() && !domain.trim().is_empty() =>
        {
            (route, domain, active)
        }
        _ => return Ok(HttpResponse::BadRequest().json(field_errors)),
    };

    let mut conn = get_connection(&state)?;

    let created = web_block_unpacked(move || {
        let existing = match routes::routes
            .filter(routes::route.eq(&route))
            .filter(routes::domain.eq(&domain))
            .select(Route::as_select())
            .first(&mut conn)
            .optional()
        {
            Ok(v) => v,
            Err(err) => {
                log::error!("Failed to check for an existing route: {err}");
                return Err(Error::InternalError);
            }
        };
        if existing.is_some() {
            return Err(Error::RouteAlreadyExists);
        }

        let new_route = Route {
            id: uuid::Uuid::new_v4(),
            route,
            domain,
            active,
        };

        match diesel::insert_into(routes::routes)
            .values(&new_route)
            .get_result::<Route>(&mut conn)
        {
            Ok(r) => Ok(r),
            // The unique constraint closes the gap between the check above
            // and this insert.
            Err(DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(Error::RouteAlreadyExists)
            }
            Err(err) => {
                log::error!("Failed to insert route: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Created().json(RouteResponse::from(created)))
}
