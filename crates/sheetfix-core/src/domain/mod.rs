pub mod cell;
pub mod email;
pub mod mobile;
pub mod name;

pub use cell::CellValue;
pub use email::{derive_email, EMAIL_DOMAIN};
pub use mobile::{clean_mobile, clean_mobile_cell};
pub use name::{clean_name, clean_name_cell};
