use crate::domain::{NewUser, User};
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct DbUser {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonUser {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct NewUserPayload {
    pub name: String,
}

impl From<DbUser> for User {
    fn from(db_user: DbUser) -> Self {
        User {
            id: db_user.id,
            name: db_user.name,
        }
    }
}

impl From<User> for JsonUser {
    fn from(user: User) -> Self {
        JsonUser {
            id: user.id,
            name: user.name,
        }
    }
}

impl From<NewUserPayload> for NewUser {
    fn from(payload: NewUserPayload) -> Self {
        NewUser { name: payload.name }
    }
}
