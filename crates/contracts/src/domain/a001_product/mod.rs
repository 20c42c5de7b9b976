pub mod aggregate;

pub use aggregate::{
    parse_commission_percent, BulkCommissionUpdateRequest, CommissionUpdateRequest, Product,
    MAX_COMMISSION_PERCENT,
};
