use super::groups::Group;
use super::routes::Route;
use diesel::prelude::*;

#[derive(
    Debug, Clone, Queryable, Selectable, Insertable, Identifiable, Associations, PartialEq,
)]
#[diesel(belongs_to(Route, foreign_key = route_id))]
#[diesel(belongs_to(Group, foreign_key = group_id))]
#[diesel(table_name = crate::schema::route_groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RouteGroup {
    pub id: uuid::Uuid,
    pub route_id: uuid::Uuid,
    pub group_id: uuid::Uuid,
    pub created_at: chrono::NaiveDateTime,
}
