pub mod credential;
pub mod revocation_list;
