pub mod goods;
pub mod order;
pub mod profile;
