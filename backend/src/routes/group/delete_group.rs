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

use actix_web::{delete, web, HttpResponse, Responder};
use db_connector::models::groups::Group;
use diesel::prelude::*;
use diesel::result::Error::NotFound;

use crate::{
    error::Error,
    utils::{get_connection, parse_uuid, web_block_unpacked},
    AppState,
};

/// Delete a group. Join rows referencing it are removed by the database
/// cascade.
#[utoipa::path(
    context_path = "/grupos",
    params(
        ("id" = String, Path, description = "Group id")
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 400, description = "Invalid id", body = [crate::error::ApiMessage]),
        (status = 404, description = "Group not found", body = [crate::error::ApiMessage]),
        (status = 500, description = "Internal server error", body = [crate::error::ApiMessage])
    )
)]
#[delete("/{id}")]
pub async fn delete_group(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    use db_connector::schema::groups::dsl as groups;

    let group_id = parse_uuid(&path)?;
    let mut conn = get_connection(&state)?;

    web_block_unpacked(move || {
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

        match diesel::delete(groups::groups.find(group_id)).execute(&mut conn) {
            Ok(_) => Ok(()),
            Err(err) => {
                log::error!("Failed to delete group {group_id}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}
