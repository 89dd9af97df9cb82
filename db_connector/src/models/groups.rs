use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable, Insertable, Identifiable, PartialEq)]
#[diesel(table_name = crate::schema::groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Group {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub unit: String,
}
