pub mod waitlist;
pub mod contact;

pub use contact::{ContactRecord, SubmissionType};
pub use waitlist::WaitlistRecord;
