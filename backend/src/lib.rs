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

use db_connector::Pool;

pub mod error;
pub mod models;
pub mod routes;
pub mod utils;

pub struct AppState {
    pub pool: Pool,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use actix_web::web::{self, ServiceConfig};

    pub fn configure(cfg: &mut ServiceConfig) {
        let pool = db_connector::test_connection_pool();

        let state = AppState { pool };

        cfg.app_data(web::Data::new(state));
    }
}
