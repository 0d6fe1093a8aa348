pub mod create_supplier_ingredients;
pub mod get_link_options;
pub mod get_supplier_ingredients;
pub mod record_price_list;
