pub mod application {
    pub mod assistant {
        pub mod ask;
    }
    pub mod connection {
        pub mod set_credential;
        pub mod sync;
    }
    pub mod session {
        pub mod end;
        pub mod get_transcript;
        pub mod start;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod assistant {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod ask;
        }
    }
    pub mod connection {
        pub mod errors;
        pub mod model;
        pub mod resolver;
        pub mod use_cases {
            pub mod set_credential;
            pub mod sync;
        }
    }
    pub mod content {
        pub mod catalog;
        pub mod model;
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod end;
            pub mod get_transcript;
            pub mod start;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
