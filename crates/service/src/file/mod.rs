pub mod waitlist_store;
pub mod contact_store;
