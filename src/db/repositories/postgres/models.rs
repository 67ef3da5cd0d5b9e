use diesel::prelude::*;

use super::schema::schools;
use crate::api::{NewSchool, School, SchoolId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schools)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SchoolRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schools)]
pub struct NewSchoolRow {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<SchoolRow> for School {
    fn from(row: SchoolRow) -> Self {
        School {
            id: SchoolId::new(row.id),
            name: row.name,
            address: row.address,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

impl From<&NewSchool> for NewSchoolRow {
    fn from(school: &NewSchool) -> Self {
        NewSchoolRow {
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: school.latitude,
            longitude: school.longitude,
        }
    }
}
