pub mod supplier_ingredient_repository;
