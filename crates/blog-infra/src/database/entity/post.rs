//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub image: String,
    pub category_id: i32,
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status_id: i32,
    pub date: DateTimeWithTimeZone,
    pub likes_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::status::Entity",
        from = "Column::StatusId",
        to = "super::status::Column::Id"
    )]
    Status,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blog_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            image: model.image,
            category_id: model.category_id,
            description: model.description,
            content: model.content,
            status_id: model.status_id,
            date: model.date.into(),
            likes_count: model.likes_count,
        }
    }
}
