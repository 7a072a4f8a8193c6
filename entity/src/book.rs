use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub physical: bool,
    pub digital: bool,
    pub publisher: String,
    pub list_price: Option<f64>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub checked_out: bool,
    pub checked_out_by: Option<String>,
    pub series: Option<String>,
    pub authors: Json,
    pub language: Option<String>,
    #[sea_orm(column_name = "type")]
    pub book_type: String,
    pub volume: Option<i32>,
    pub isbn: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
