pub mod session {
    pub mod repository;
}
