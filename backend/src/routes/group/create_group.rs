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
use db_connector::models::groups::Group;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error::DatabaseError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::Error,
    models::group::GroupResponse,
    utils::{get_connection, web_block_unpacked},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateGroupSchema {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Defaults to true when omitted.
    pub active: Option<bool>,
    pub unit: Option<String>,
}

/// Create a new group. `(name, unit)` must be unique.
#[utoipa::path(
    context_path = "/grupos",
    request_body = CreateGroupSchema,
    responses(
        (status = 201, description = "Group created", body = GroupResponse),
        (status = 400, description = "Missing fields or group already registered", body = [crate::error::ApiMessage]),
        (status = 500, description = "Internal server error", body = [crate::error::ApiMessage])
    )
)]
#[post("")]
pub async fn create_group(
    state: web::Data<AppState>,
    payload: web::Json<CreateGroupSchema>,
) -> actix_web::Result<impl Responder> {
    use db_connector::schema::groups::dsl as groups;

    let CreateGroupSchema {
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

    let created = web_block_unpacked(move || {
        let existing = match groups::groups
            .filter(groups::name.eq(&name))
            .filter(groups::unit.eq(&unit))
            .select(Group::as_select())
            .first(&mut conn)
            .optional()
        {
            Ok(v) => v,
            Err(err) => {
                log::error!("Failed to check for an existing group: {err}");
                return Err(Error::InternalError);
            }
        };
        if existing.is_some() {
            return Err(Error::GroupAlreadyExists);
        }

        let new_group = Group {
            id: uuid::Uuid::new_v4(),
            name,
            description,
            active: active.unwrap_or(true),
            unit,
        };

        match diesel::insert_into(groups::groups)
            .values(&new_group)
            .get_result::<Group>(&mut conn)
        {
            Ok(g) => Ok(g),
            // The unique constraint closes the gap between the check above
            // and this insert.
            Err(DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(Error::GroupAlreadyExists)
            }
            Err(err) => {
                log::error!("Failed to insert group: {err}");
                Err(Error::InternalError)
            }
        }
    })
    .await?;

    Ok(HttpResponse::Created().json(GroupResponse::from(created)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::{
        error::ApiMessage,
        routes::group::{configure, test_helpers::*},
        tests::configure as test_configure,
    };

    #[actix_web::test]
    async fn test_create_group_defaults_active() {
        let app = App::new().configure(test_configure).configure(configure);
        let app = test::init_service(app).await;

        let name = unique_name("create-grupo");
        let body = CreateGroupSchema {
            name: Some(name.clone()),
            description: Some("operations group".to_string()),
            active: None,
            unit: Some("U1".to_string()),
        };

        let req = test::TestRequest::post()
            .uri("/grupos")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);

        let created: GroupResponse = test::read_body_json(resp).await;
        assert_eq!(created.name, name);
        assert!(created.active);

        let db_group = get_group_from_db(&created.id);
        assert!(db_group.is_some());
        assert!(db_group.unwrap().active);

        delete_test_group_from_db(&created.id);
    }

    #[actix_web::test]
    async fn test_create_group_explicit_inactive() {
        let app = App::new().configure(test_configure).configure(configure);
        let app = test::init_service(app).await;

        let name = unique_name("inactive-grupo");
        let body = CreateGroupSchema {
            name: Some(name),
            description: None,
            active: Some(false),
            unit: Some("U1".to_string()),
        };

        let req = test::TestRequest::post()
            .uri("/grupos")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);

        let created: GroupResponse = test::read_body_json(resp).await;
        assert!(!created.active);

        delete_test_group_from_db(&created.id);
    }

    #[actix_web::test]
    async fn test_create_group_missing_fields() {
        let app = App::new().configure(test_configure).configure(configure);
        let app = test::init_service(app).await;

        let body = CreateGroupSchema {
            name: Some(unique_name("no-unit-grupo")),
            description: None,
            active: None,
            unit: None,
        };

        let req = test::TestRequest::post()
            .uri("/grupos")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let errors: Vec<ApiMessage> = test::read_body_json(resp).await;
        assert_eq!(errors.len(), 1);
        assert!(errors[0].error);
        assert_eq!(errors[0].code, 400);
        assert_eq!(errors[0].message, "Nome e Unidade são obrigatórios");
    }

    #[actix_web::test]
    async fn test_create_group_duplicate() {
        let name = unique_name("dup-grupo");
        let created = create_test_group(&name, "U1").await;

        let app = App::new().configure(test_configure).configure(configure);
        let app = test::init_service(app).await;

        let body = CreateGroupSchema {
            name: Some(name.clone()),
            description: None,
            active: None,
            unit: Some("U1".to_string()),
        };

        let req = test::TestRequest::post()
            .uri("/grupos")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let errors: Vec<ApiMessage> = test::read_body_json(resp).await;
        assert_eq!(errors[0].message, "Grupo já cadastrado");

        // Same name under a different unit is allowed.
        let body = CreateGroupSchema {
            name: Some(name),
            description: None,
            active: None,
            unit: Some("U2".to_string()),
        };
        let req = test::TestRequest::post()
            .uri("/grupos")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
        let second: GroupResponse = test::read_body_json(resp).await;

        delete_test_group_from_db(&created.id);
        delete_test_group_from_db(&second.id);
    }
}
