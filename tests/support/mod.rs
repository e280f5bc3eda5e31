pub mod file_host;
pub mod socket_guard;
pub mod upstream;
