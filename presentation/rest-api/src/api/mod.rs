pub mod error;
pub mod params;
pub mod tags;

pub mod chat {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod connection {
    pub mod dto;
    pub mod routes;
}
pub mod content {
    pub mod dto;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod session {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
