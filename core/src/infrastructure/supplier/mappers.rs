use chrono::Utc;

use crate::domain::supplier::entities::Supplier;
use crate::entity::suppliers::Model as SupplierModel;

impl From<SupplierModel> for Supplier {
    fn from(model: SupplierModel) -> Self {
        Supplier {
            id: model.id,
            name: model.name,
            phone_no: model.phone_no,
            email: model.email,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<&SupplierModel> for Supplier {
    fn from(model: &SupplierModel) -> Self {
        Supplier {
            id: model.id,
            name: model.name.clone(),
            phone_no: model.phone_no.clone(),
            email: model.email.clone(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
