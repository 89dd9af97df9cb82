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

use actix_web::{error, http::StatusCode, HttpResponse};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("Erro interno do Servidor")]
    InternalError,
    #[display("ID inválido")]
    InvalidId,
    #[display("Grupo não encontrado")]
    GroupNotFound,
    #[display("Grupo já cadastrado")]
    GroupAlreadyExists,
    #[display("Nome e Unidade são obrigatórios")]
    MissingGroupFields,
    #[display("Rota não encontrada")]
    RouteNotFound,
    #[display("Rota já cadastrada")]
    RouteAlreadyExists,
    #[display("Pelo menos uma das informações deve ser fornecida para atualizar a rota")]
    NoRouteUpdateFields,
    #[display("Rota possui relacionamentos com grupos, não pode ser excluída")]
    RouteHasGroupLinks,
}

/// One element of the client-facing error envelope. Every failed request
/// carries a JSON array of these, one entry per issue.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiMessage {
    pub error: bool,
    pub code: u16,
    pub message: String,
}

impl ApiMessage {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiMessage {
            error: true,
            code: StatusCode::BAD_REQUEST.as_u16(),
            message: message.into(),
        }
    }
}

impl From<&Error> for ApiMessage {
    fn from(err: &Error) -> Self {
        use error::ResponseError;

        ApiMessage {
            error: true,
            code: err.status_code().as_u16(),
            message: err.to_string(),
        }
    }
}

impl error::ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json([ApiMessage::from(self)])
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::GroupNotFound => StatusCode::NOT_FOUND,
            Self::GroupAlreadyExists => StatusCode::BAD_REQUEST,
            Self::MissingGroupFields => StatusCode::BAD_REQUEST,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::RouteAlreadyExists => StatusCode::BAD_REQUEST,
            Self::NoRouteUpdateFields => StatusCode::BAD_REQUEST,
            Self::RouteHasGroupLinks => StatusCode::BAD_REQUEST,
        }
    }
}
