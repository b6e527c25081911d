use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    // Nullable: an account can exist without a local credential, in which
    // case it can never pass credential verification.
    pub password_hash: Option<String>,
    pub role: String,
    pub created_at: i64,
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
