mod channel;
mod ledger;
mod notification;
mod settings;
mod shared;
mod sources;
mod tenant;
mod tick;

pub use channel::Channel;
pub use ledger::DedupRecord;
pub use notification::{EventKind, NotifiableEvent};
pub use settings::{ReminderSettings, KYC_RENEWAL_WINDOW_MINUTES};
pub use shared::entity::{Entity, ID};
pub use sources::{FilingRecord, HearingRecord, KycRecord, TaskRecord};
pub use tenant::Tenant;
pub use tick::TickReport;
