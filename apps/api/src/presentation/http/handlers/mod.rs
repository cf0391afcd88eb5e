pub mod engagement;
pub mod health;
