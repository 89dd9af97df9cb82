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

use std::net::Ipv4Addr;

use actix_web::{App, HttpServer};
pub use backend::*;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/**
 * Start a server that hosts the api documentation.
 */
#[actix_web::main]
async fn main() {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            routes::group::list_groups::list_groups,
            routes::group::get_group::get_group,
            routes::group::create_group::create_group,
            routes::group::update_group::update_group,
            routes::group::delete_group::delete_group,
            routes::route::list_routes::list_routes,
            routes::route::get_route::get_route,
            routes::route::create_route::create_route,
            routes::route::update_route::update_route,
            routes::route::delete_route::delete_route,
        ),
        components(schemas(
            routes::group::create_group::CreateGroupSchema,
            routes::group::update_group::UpdateGroupSchema,
            routes::route::create_route::CreateRouteSchema,
            routes::route::update_route::UpdateRouteSchema,
            models::group::GroupResponse,
            models::route::RouteResponse,
            error::ApiMessage,
        ))
    )]
    struct ApiDoc;

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new().service(SwaggerUi::new("/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
    })
    .bind((Ipv4Addr::UNSPECIFIED, 12345))
    .unwrap()
    .run()
    .await
    .unwrap();
}
