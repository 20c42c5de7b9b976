pub mod a001_product;
pub mod a002_staff_member;
