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
use db_connector::models::groups::Group;
use diesel::prelude::*;

use crate::{
    error::Error,
    models::group::GroupResponse,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

/// List all groups, unfiltered.
#[utoipa::path(
    context_path = "/grupos",
    responses(
        (status = 200, description = "List of groups", body = [GroupResponse]),
        (status = 500, description = "Internal server error", body = [crate::error::ApiMessage])
    )
)]
#[get("")]
pub async fn list_groups(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    use db_connector::schema::groups::dsl as groups;

    let mut conn = get_connection(&state)?;

    let all_groups: Vec<Group> = web_block_unpacked(move || {
        match groups::groups.select(Group::as_select()).load(&mut conn) {
            Ok(g) => Ok(g),
            Err(err) => {
                log::error!("Failed to load groups: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    let body: Vec<GroupResponse> = all_groups.into_iter().map(GroupResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}
