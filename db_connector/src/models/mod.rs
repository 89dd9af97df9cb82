pub mod groups;
pub mod route_groups;
pub mod routes;
