pub mod get_inventory;
