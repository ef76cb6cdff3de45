pub mod db;
mod errors;
mod money;
pub mod user {
    pub mod entity;
    pub mod repository;
}
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod sale {
    pub mod entity;
    pub mod repository;
}
