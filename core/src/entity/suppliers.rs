use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub phone_no: String,
    pub email: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::supplier_ingredients::Entity")]
    SupplierIngredients,
}

impl Related<super::supplier_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierIngredients.def()
    }
}

impl Related<super::ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        super::supplier_ingredients::Relation::Ingredients.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::supplier_ingredients::Relation::Suppliers.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
