pub mod application {
    pub mod user {
        pub mod credentials;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod log_in;
        pub mod sign_up;
    }
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_name;
        pub mod update;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod ownership;
        pub mod update;
    }
    pub mod sale {
        pub mod get_all;
        pub mod get_by_product;
        pub mod record;
        pub mod summary;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod log_in;
            pub mod sign_up;
        }
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_name;
            pub mod update;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod sale {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod summary;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_product;
            pub mod record;
            pub mod summary;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
