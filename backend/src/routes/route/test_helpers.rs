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
use db_connector::{
    models::{route_groups::RouteGroup, routes::Route},
    test_connection_pool,
};
use diesel::prelude::*;

use crate::models::route::RouteResponse;
use crate::tests::configure as test_configure;
use create_route::CreateRouteSchema;

/// Route paths and domains carry a random marker so tests can share one
/// database.
pub fn unique_marker() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Create an active route through the HTTP surface.
pub async fn create_test_route(route: &str, domain: &str) -> RouteResponse {
    let app = App::new().configure(test_configure).configure(configure);
    let app = test::init_service(app).await;

    let body = CreateRouteSchema {
        route: Some(route.to_string()),
        domain: Some(domain.to_string()),
        active: Some(true),
    };

    let req = test::TestRequest::post()
        .uri("/rotas")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success(), "Failed to create route");

    test::read_body_json(resp).await
}

pub fn get_route_from_db(route_id: &str) -> Option<Route> {
    use db_connector::schema::routes::dsl::*;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    let uuid_val = uuid::Uuid::parse_str(route_id).unwrap();

    routes
        .filter(id.eq(uuid_val))
        .select(Route::as_select())
        .first(&mut conn)
        .ok()
}

pub fn delete_test_route_from_db(route_id: &str) {
    use db_connector::schema::routes::dsl::*;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();
    let uuid_val = uuid::Uuid::parse_str(route_id).unwrap();

    diesel::delete(routes.filter(id.eq(uuid_val)))
        .execute(&mut conn)
        .ok();
}

/// Insert a join row associating a route with a group.
pub fn link_route_to_group(route_id_str: &str, group_id_str: &str) {
    use db_connector::schema::route_groups::dsl::*;

    let pool = test_connection_pool();
    let mut conn = pool.get().unwrap();

    let link = RouteGroup {
        id: uuid::Uuid::new_v4(),
        route_id: uuid::Uuid::parse_str(route_id_str).unwrap(),
        group_id: uuid::Uuid::parse_str(group_id_str).unwrap(),
        created_at: chrono::Utc::now().naive_utc(),
    };

    diesel::insert_into(route_groups)
        .values(&link)
        .execute(&mut conn)
        .unwrap();
}
