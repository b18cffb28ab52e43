use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{pizza, restaurant};

/// Fact row linking one restaurant to one pizza at a given price.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_pizza")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: f64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Pizza,
    Restaurant,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Pizza => Entity::belongs_to(pizza::Entity)
                .from(Column::PizzaId)
                .to(pizza::Column::Id)
                .into(),
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity)
                .from(Column::RestaurantId)
                .to(restaurant::Column::Id)
                .into(),
        }
    }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pizza.def()
    }
}

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    price: f64,
    pizza_id: i32,
    restaurant_id: i32,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        price: Set(price),
        pizza_id: Set(pizza_id),
        restaurant_id: Set(restaurant_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
