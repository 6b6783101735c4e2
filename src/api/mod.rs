pub mod awesome;
pub mod awesome_dto;
pub mod utils;
