pub mod db;
pub mod errors;
pub mod memory;
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod supplier {
    pub mod entity;
    pub mod repository;
}
