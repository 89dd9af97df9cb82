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

use actix_web::{put, web, HttpResponse, Responder};
use db_connector::models::groups::Group;
use diesel::prelude::*;
use diesel::result::{
    DatabaseErrorKind,
    Error::{DatabaseError, NotFound},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::Error,
    models::group::GroupResponse,
    utils::{get_connection, parse_uuid, web_block_unpacked},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateGroupSchema {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Defaults to true when omitted.
    pub active: Option<bool>,
    pub unit: Option<String>,
}

/// Replace all fields of an existing group.
#[utoipa::path(
    context_path = "/grupos",
    request_body = UpdateGroupSchema,
    params(
        ("id" = String, Path, description = "Group id")
    ),
    responses(
        (status = 200, description = "Group updated", body = GroupResponse),
        (status = 400, description = "Missing fields or duplicate (name, unit)", body = [crate::error::ApiMessage]),
        (status = 404, description = "Group not found", body = [crate::error::ApiMessage]),
        (status = 500, description = "Internal server error", body = [crate::error::ApiMessage])
    )
)]
#[put("/{id}")]
pub async fn update_group(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateGroupSchema>,
) -> actix_web::Result<impl Responder> {
    use db_connector::schema::groups::dsl as groups;

    let group_id = parse_uuid(&path)?;

    let UpdateGroupSchema {
        name,
        description,
        active,
        unit,
    } = payload.into_inner();

    let (name, unit) = match (name, unit) {
        (Some(name), Some(unit)) if !name.trim().is_empty() && !unit.trim().is_empty() => {
            (name, unit)
        }
        _ => return Err(Error::MissingGroupFields.into()),
    };

    let mut conn = get_connection(&state)?;

    let updated = web_block_unpacked(move || {
        match groups::groups
            .find(group_id)
            .select(Group::as_select())
            .get_result::<Group>(&mut conn)
        {
            Ok(_) => (),
            Err(NotFound) => return Err(Error::GroupNotFound),
            Err(err) => {
                log::error!("Failed to load group {group_id}: {err}");
                return Err(Error::InternalError);
            }
        }

        match diesel::update(groups::groups.find(group_id))
            .set((
                groups::name.eq(name),
                groups::description.eq(description),
                groups::active.eq(active.unwrap_or(true)),
                groups::unit.eq(unit),
            ))
            .get_result::<Group>(&mut conn)
        {
            Ok(g) => Ok(g),
            Err(DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(Error::GroupAlreadyExists)
            }
            Err(err) => {
                log::error!("Failed to update group {group_id}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Ok().json(GroupResponse::from(updated)))
}
