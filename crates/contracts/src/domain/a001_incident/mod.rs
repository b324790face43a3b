pub mod aggregate;
pub mod schema;

pub use aggregate::{
    AccountDetail, ContactDetail, CustomerDetail, Incident, LastAction, MarketingDetail,
    ProductDetail,
};
