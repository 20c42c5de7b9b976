pub mod aggregate;

pub use aggregate::StaffMember;
