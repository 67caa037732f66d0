//! Wallet actions and the transaction submission seam

pub mod actions;
pub mod submitter;

pub use actions::HtlcActions;
pub use submitter::{
    dry_run_transaction_id, DryRunSubmitter, SubmissionReceipt, SubmittedOperation,
    TransactionSubmitter,
};
