use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{pizza, restaurant_pizza};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    RestaurantPizza,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::RestaurantPizza => Entity::has_many(restaurant_pizza::Entity).into(),
        }
    }
}

impl Related<restaurant_pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantPizza.def()
    }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef {
        restaurant_pizza::Relation::Pizza.def()
    }

    fn via() -> Option<RelationDef> {
        Some(restaurant_pizza::Relation::Restaurant.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, name: &str, address: &str) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if address.trim().is_empty() {
        return Err(ModelError::Validation("address required".into()));
    }
    let am = ActiveModel {
        name: Set(name.to_string()),
        address: Set(address.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
