use crate::domain::Facility;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct DbFacility {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonFacility {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
}

// the front end reads `data.facilities`, so the list is wrapped rather than returned bare
#[derive(Serialize, Deserialize, Debug)]
pub struct FacilitiesResponse {
    pub facilities: Vec<JsonFacility>,
}

impl From<DbFacility> for Facility {
    fn from(db_facility: DbFacility) -> Self {
        Facility {
            id: db_facility.id,
            name: db_facility.name,
            description: db_facility.description,
            image: db_facility.image,
        }
    }
}

impl From<Facility> for JsonFacility {
    fn from(facility: Facility) -> Self {
        JsonFacility {
            id: facility.id,
            name: facility.name,
            description: facility.description,
            image: facility.image,
        }
    }
}
