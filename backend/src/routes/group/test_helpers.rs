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

use super::*;
use actix_web::{test, App};
use db_connector::{models::groups::Group, test_connection_pool};
use diesel::prelude::*;

use crate::models::group::GroupResponse;
use crate::tests::configure as test_configure;
use create_group::CreateGroupSchema;

/// Names carry a random suffix so tests can share one database.
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

/// Create a group through the HTTP surface.
pub async fn create_test_group(name: &str, unit: &str) -> GroupResponse {
    let app = App::new().configure(test_configure).configure(configure);
    let app = test::init_service(app).await;

    let body = CreateGroupSchema {
        name: Some(name.to_string()),
        description: Some("test group".to_string()),
        active: None,
        unit: Some(unit.to_string()),
    };

    let req = test::TestRequest::post()
        .uri("/grupos")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success(), "Failed to create group");

    test::read_body_json(resp).await
}

pub fn get_group_from_db(group_id: &str) -> Option<Group> {
    use db_connector::schema::groups::dsl::*;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    let uuid_val = uuid::Uuid::parse_str(group_id).unwrap();

    groups
        .filter(id.eq(uuid_val))
        .select(Group::as_select())
        .first(&mut conn)
        .ok()
}

pub fn delete_test_group_from_db(group_id: &str) {
    use db_connector::schema::groups::dsl::*;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    let uuid_val = uuid::Uuid::parse_str(group_id).unwrap();

    diesel::delete(groups.filter(id.eq(uuid_val)))
        .execute(&mut conn)
        .ok();
}
