use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "deudas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub monto: f64,
    pub descripcion: String,
    /// Owning merchant; ownership checks compare against this column
    #[sea_orm(indexed)]
    pub comercio_id: String,
    #[sea_orm(indexed)]
    pub deudor_id: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ComercioId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Comercio,
    #[sea_orm(
        belongs_to = "super::deudor::Entity",
        from = "Column::DeudorId",
        to = "super::deudor::Column::Id",
        on_delete = "Cascade"
    )]
    Deudor,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comercio.def()
    }
}

impl Related<super::deudor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deudor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
