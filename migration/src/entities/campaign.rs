use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub admin_id: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub email_template: String,
    pub participant_list_id: String,
    pub scheduled_at: DateTimeUtc,
    pub status: String,
    pub sent: i64,
    pub clicked: i64,
    pub submitted: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
