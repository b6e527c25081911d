use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "deudores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// National ID, the natural key a deudor is addressed by
    #[sea_orm(unique)]
    pub dni: String,
    pub nombre: String,
    pub apellido: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::deuda::Entity")]
    Deuda,
}

impl Related<super::deuda::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deuda.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
