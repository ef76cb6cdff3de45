pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod user {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod category {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod sale {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
