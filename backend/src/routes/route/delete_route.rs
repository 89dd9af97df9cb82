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
use db_connector::models::routes::Route;
use diesel::prelude::*;
use diesel::result::Error::NotFound;

use crate::{
    error::Error,
    utils::{get_connection, parse_uuid, web_block_unpacked},
    AppState,
};

/// Delete a route. Blocked while any group relationship references it.
#[utoipa::path(
    context_path = "/rotas",
    params(
        ("id" = String, Path, description = "Route id")
    ),
    responses(
        (status = 204, description = "Route deleted"),
        (status = 400, description = "Invalid id or route has group relationships", body = [crate::error::ApiMessage]),
        (status = 404, description = "Route not found", body = [crate::error::ApiMessage]),
        (status = 500, description = "Internal server error", body = [crate::error::ApiMessage])
    )
)]
#[delete("/{id}")]
pub async fn delete_route(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    use db_connector::schema::route_groups::dsl as route_groups;
    use db_connector::schema::routes::dsl as routes;

    let route_id = parse_uuid(&path)?;
    let mut conn = get_connection(&state)?;

    web_block_unpacked(move || {
        match routes::routes
            .find(route_id)
            .select(Route::as_select())
            .get_result::<Route>(&mut conn)
        {
            Ok(_) => (),
            Err(NotFound) => return Err(Error::RouteNotFound),
            Err(err) => {
                log::error!("Failed to load route {route_id}: {err}");
                return Err(Error::InternalError);
            }
        }

        let linked: i64 = match route_groups::route_groups
            .filter(route_groups::route_id.eq(route_id))
            .count()
            .get_result(&mut conn)
        {
            Ok(n) => n,
            Err(err) => {
                log::error!("Failed to count group relationships of route {route_id}: {err}");
                return Err(Error::InternalError);
            }
        };
        if linked > 0 {
            return Err(Error::RouteHasGroupLinks);
        }

        match diesel::delete(routes::routes.find(route_id)).execute(&mut conn) {
            Ok(_) => Ok(()),
            Err(err) => {
                log::error!("Failed to delete route {route_id}: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use crate::{
        routes::{
            group::test_helpers::{create_test_group, delete_test_group_from_db, unique_name},
            route::{configure, test_helpers::*},
        },
        tests::configure as test_configure,
    };

    #[actix_web::test]
    async fn test_delete_route() {
        let route_path = format!("/users/{}", unique_marker());
        let created = create_test_route(&route_path, "alpha.example").await;

        let app = App::new().configure(test_configure).configure(configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/rotas/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 204);

        assert!(get_route_from_db(&created.id).is_none());
    }

    #[actix_web::test]
    async fn test_delete_route_not_found() {
        let app = App::new().configure(test_configure).configure(configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/rotas/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn test_delete_route_with_group_link() {
        let route_path = format!("/users/{}", unique_marker());
        let route = create_test_route(&route_path, "alpha.example").await;
        let group = create_test_group(&unique_name("linked-grupo"), "U1").await;
        link_route_to_group(&route.id, &group.id);

        let app = App::new().configure(test_configure).configure(configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/rotas/{}", route.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        // The route survives.
        assert!(get_route_from_db(&route.id).is_some());

        // Dropping the group cascades the join row; the route can then go.
        delete_test_group_from_db(&group.id);

        let req = test::TestRequest::delete()
            .uri(&format!("/rotas/{}", route.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 204);

        assert!(get_route_from_db(&route.id).is_none());
    }
}
