use crate::error::LexbaseError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lexbase_reminders_api_structs::run_tick::APIResponse;
use lexbase_reminders_domain::{
    Channel, DedupRecord, EventKind, NotifiableEvent, ReminderSettings, Tenant, TickReport,
    KYC_RENEWAL_WINDOW_MINUTES,
};
use lexbase_reminders_infra::{Context, DispatchError, DueWindow};
use tracing::{debug, error, warn};

/// Blocks until the tick completes or fails and reports the outcome to the
/// caller.
pub async fn run_tick_controller(ctx: web::Data<Context>) -> Result<HttpResponse, LexbaseError> {
    let usecase = RunTickUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(APIResponse::new(report)))
        .map_err(LexbaseError::from)
}

/// Runs one scheduler pass: for every tenant, for every event kind, find
/// due candidates, filter through the notification ledger, dispatch per
/// channel and record successes. Strictly sequential so the
/// check-dispatch-record sequence stays a single-writer protocol.
#[derive(Debug)]
pub struct RunTickUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    TickInProgress,
    TenantEnumeration,
}

impl From<UseCaseError> for LexbaseError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::TickInProgress => {
                Self::Conflict("A reminder tick is already running".into())
            }
            UseCaseError::TenantEnumeration => Self::InternalError,
        }
    }
}

fn due_window(kind: EventKind, settings: &ReminderSettings, now: i64) -> DueWindow {
    let lead_minutes = match kind {
        EventKind::Hearing => settings.hearing_lead_minutes,
        EventKind::Filing => settings.filing_lead_minutes,
        EventKind::TaskDeadline => settings.task_lead_minutes,
        // Fixed horizon, not configurable per tenant
        EventKind::KycRenewal => KYC_RENEWAL_WINDOW_MINUTES,
    };
    DueWindow {
        start: now,
        end: now + lead_minutes * 60 * 1000,
    }
}

async fn find_due(
    ctx: &Context,
    tenant: &Tenant,
    kind: EventKind,
    window: DueWindow,
) -> anyhow::Result<Vec<NotifiableEvent>> {
    match kind {
        EventKind::Hearing => ctx.repos.hearings.find_due(&tenant.id, window).await,
        EventKind::Filing => ctx.repos.filings.find_due(&tenant.id, window).await,
        EventKind::TaskDeadline => ctx.repos.task_deadlines.find_due(&tenant.id, window).await,
        EventKind::KycRenewal => ctx.repos.kyc_renewals.find_due(&tenant.id, window).await,
    }
}

/// One event against every enabled channel. Nothing in here can abort the
/// tick: every failure is logged, counted and left for the next tick to
/// retry while the event remains inside its window.
async fn process_candidate(
    event: &NotifiableEvent,
    settings: &ReminderSettings,
    ctx: &Context,
    report: &mut TickReport,
) {
    for channel in Channel::all() {
        if !settings.channel_enabled(channel) {
            continue;
        }
        // No address on this channel: skipped for the channel only, the
        // event stays a candidate for the remaining channels.
        let recipient = match event.address(channel) {
            Some(recipient) => recipient,
            None => continue,
        };

        let already_sent = match ctx
            .repos
            .ledger
            .was_sent(
                &event.tenant_id,
                event.kind,
                &event.entity_id,
                &recipient,
                channel,
            )
            .await
        {
            Ok(already_sent) => already_sent,
            Err(e) => {
                error!(
                    "Notification ledger lookup failed for event: {:?} on channel: {}. Error: {:?}",
                    event, channel, e
                );
                report.candidates_skipped += 1;
                continue;
            }
        };
        if already_sent {
            debug!(
                "Skipping already notified event: {} for recipient: {} on channel: {}",
                event.entity_id, recipient, channel
            );
            continue;
        }

        match ctx
            .dispatcher
            .send(channel, &recipient, &event.subject(), &event.body())
            .await
        {
            Ok(_) => {
                let record = DedupRecord::new(
                    event.tenant_id.clone(),
                    event.kind,
                    event.entity_id.clone(),
                    recipient,
                    channel,
                    ctx.sys.get_timestamp_millis(),
                );
                if let Err(e) = ctx.repos.ledger.record_sent(&record).await {
                    // The notification went out; the missing row only means
                    // one extra send if the event is still due next tick.
                    error!(
                        "Unable to record notification ledger entry: {:?}. Error: {:?}",
                        record, e
                    );
                }
                report.notifications_sent += 1;
            }
            Err(DispatchError::ChannelUnavailable(channel)) => {
                warn!(
                    "The {} channel is enabled for tenant: {} but has no provider configured",
                    channel, event.tenant_id
                );
                report.candidates_skipped += 1;
            }
            Err(e) => {
                error!(
                    "Dispatch failed for event: {} to recipient: {} on channel: {}. Error: {:?}",
                    event.entity_id, recipient, channel, e
                );
                report.candidates_skipped += 1;
            }
        }
    }
}

/// A query failure for any event kind abandons the rest of this tenant's
/// tick; the error propagates to the tenant loop and the tick moves on to
/// the next tenant.
async fn process_tenant(
    tenant: &Tenant,
    ctx: &Context,
    report: &mut TickReport,
) -> anyhow::Result<()> {
    let settings = ctx.repos.reminder_settings.get(&tenant.id).await;
    let now = ctx.sys.get_timestamp_millis();

    for kind in EventKind::all() {
        let window = due_window(kind, &settings, now);
        let events = find_due(ctx, tenant, kind, window).await?;
        for event in events {
            process_candidate(&event, &settings, ctx, report).await;
        }
    }
    Ok(())
}

#[async_trait::async_trait(?Send)]
impl UseCase for RunTickUseCase {
    type Response = TickReport;

    type Error = UseCaseError;

    const NAME: &'static str = "RunReminderTick";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        // Single-flight: a concurrent run-now while the periodic tick is in
        // flight reports a conflict instead of interleaving sends.
        let _guard = ctx
            .tick_lock
            .try_lock()
            .map_err(|_| UseCaseError::TickInProgress)?;

        let tenants = ctx.repos.tenants.all().await.map_err(|e| {
            error!("Unable to enumerate tenants: {:?}", e);
            UseCaseError::TenantEnumeration
        })?;

        let mut report = TickReport::default();
        for tenant in tenants {
            report.tenants_processed += 1;
            if let Err(e) = process_tenant(&tenant, ctx, &mut report).await {
                error!(
                    "Tick aborted for tenant: {} ({}). Error: {:?}",
                    tenant.id, tenant.name, e
                );
                report.tenant_failures += 1;
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexbase_reminders_domain::{FilingRecord, HearingRecord, KycRecord, TaskRecord, ID};
    use lexbase_reminders_infra::{
        setup_context_inmemory, InMemoryDispatcher, InMemoryFilingSourceRepo,
        InMemoryHearingSourceRepo, InMemoryKycRenewalSourceRepo, InMemoryNotificationLedgerRepo,
        InMemoryTaskDeadlineSourceRepo, StaticTimeSys,
    };
    use std::sync::Arc;

    const NOW: i64 = 1633078800000; // Fri Oct 01 2021 09:00:00 GMT+0000
    const MINUTE: i64 = 60 * 1000;
    const DAY: i64 = 24 * 60 * MINUTE;

    struct TestContext {
        ctx: Context,
        dispatcher: Arc<InMemoryDispatcher>,
        ledger: Arc<InMemoryNotificationLedgerRepo>,
        hearings: Arc<InMemoryHearingSourceRepo>,
        filings: Arc<InMemoryFilingSourceRepo>,
        tasks: Arc<InMemoryTaskDeadlineSourceRepo>,
        kyc_documents: Arc<InMemoryKycRenewalSourceRepo>,
    }

    fn setup() -> TestContext {
        let mut ctx = setup_context_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(NOW));

        let dispatcher = Arc::new(InMemoryDispatcher::new());
        let ledger = Arc::new(InMemoryNotificationLedgerRepo::new());
        let hearings = Arc::new(InMemoryHearingSourceRepo::new());
        let filings = Arc::new(InMemoryFilingSourceRepo::new());
        let tasks = Arc::new(InMemoryTaskDeadlineSourceRepo::new());
        let kyc_documents = Arc::new(InMemoryKycRenewalSourceRepo::new());
        ctx.dispatcher = dispatcher.clone();
        ctx.repos.ledger = ledger.clone();
        ctx.repos.hearings = hearings.clone();
        ctx.repos.filings = filings.clone();
        ctx.repos.task_deadlines = tasks.clone();
        ctx.repos.kyc_renewals = kyc_documents.clone();

        TestContext {
            ctx,
            dispatcher,
            ledger,
            hearings,
            filings,
            tasks,
            kyc_documents,
        }
    }

    async fn insert_tenant(ctx: &Context, name: &str) -> Tenant {
        let tenant = Tenant::new(name);
        ctx.repos.tenants.insert(&tenant).await.unwrap();
        tenant
    }

    fn hearing(
        tenant_id: &ID,
        starts_in: i64,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> HearingRecord {
        HearingRecord {
            id: Default::default(),
            tenant_id: tenant_id.clone(),
            case_number: "C-2021-042".into(),
            title: "Preliminary hearing".into(),
            starts_at: NOW + starts_in,
            client_name: "Ada Hansen".into(),
            client_email: email.map(|e| e.to_string()),
            client_phone: phone.map(|p| p.to_string()),
        }
    }

    async fn run_tick(ctx: &Context) -> TickReport {
        execute(RunTickUseCase {}, ctx).await.expect("Tick to run")
    }

    #[actix_web::main]
    #[test]
    async fn email_only_client_gets_exactly_one_email_reminder() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        // All channels on, but the client is only reachable by email
        let mut settings = ReminderSettings::defaults(tenant.id.clone());
        settings.sms_enabled = true;
        settings.whatsapp_enabled = true;
        test.ctx
            .repos
            .reminder_settings
            .upsert(&settings)
            .await
            .unwrap();

        test.hearings
            .push(hearing(&tenant.id, 45 * MINUTE, Some("ada@example.com"), None));

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.notifications_sent, 1);
        assert_eq!(report.candidates_skipped, 0);

        let records = test.ledger.all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].channel, Channel::Email);
        assert_eq!(records[0].recipient, "ada@example.com");
        assert_eq!(records[0].entity_type, EventKind::Hearing);
        assert_eq!(records[0].tenant_id, tenant.id);
        assert!(test.dispatcher.sent_on(Channel::Sms).is_empty());
        assert!(test.dispatcher.sent_on(Channel::Whatsapp).is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn running_identical_tick_twice_sends_once() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;
        test.hearings
            .push(hearing(&tenant.id, 45 * MINUTE, Some("ada@example.com"), None));

        let first = run_tick(&test.ctx).await;
        let second = run_tick(&test.ctx).await;

        assert_eq!(first.notifications_sent, 1);
        assert_eq!(second.notifications_sent, 0);
        assert_eq!(test.dispatcher.sent().len(), 1);
        assert_eq!(test.ledger.all().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn event_at_window_end_is_due_but_not_beyond() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        // Default hearing lead is 60 minutes
        test.hearings
            .push(hearing(&tenant.id, 60 * MINUTE, Some("inside@example.com"), None));
        test.hearings.push(hearing(
            &tenant.id,
            60 * MINUTE + 1,
            Some("outside@example.com"),
            None,
        ));

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.notifications_sent, 1);
        let sent = test.dispatcher.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "inside@example.com");
    }

    #[actix_web::main]
    #[test]
    async fn past_event_is_not_due() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;
        test.hearings
            .push(hearing(&tenant.id, -MINUTE, Some("ada@example.com"), None));

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.notifications_sent, 0);
        assert!(test.dispatcher.sent().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn disabled_sms_never_dispatches_while_email_proceeds() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        // Default settings: email on, sms off. Client reachable on both.
        test.hearings.push(hearing(
            &tenant.id,
            45 * MINUTE,
            Some("ada@example.com"),
            Some("+4799887766"),
        ));

        run_tick(&test.ctx).await;
        assert_eq!(test.dispatcher.sent_on(Channel::Email).len(), 1);
        assert!(test.dispatcher.sent_on(Channel::Sms).is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn enabled_sms_dispatches_alongside_email() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        let mut settings = ReminderSettings::defaults(tenant.id.clone());
        settings.sms_enabled = true;
        test.ctx
            .repos
            .reminder_settings
            .upsert(&settings)
            .await
            .unwrap();

        test.hearings.push(hearing(
            &tenant.id,
            45 * MINUTE,
            Some("ada@example.com"),
            Some("+4799887766"),
        ));

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.notifications_sent, 2);
        assert_eq!(test.dispatcher.sent_on(Channel::Email).len(), 1);
        let sms = test.dispatcher.sent_on(Channel::Sms);
        assert_eq!(sms.len(), 1);
        assert_eq!(sms[0].recipient, "+4799887766");
    }

    #[actix_web::main]
    #[test]
    async fn whatsapp_recipients_use_the_templated_address() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        let mut settings = ReminderSettings::defaults(tenant.id.clone());
        settings.email_enabled = false;
        settings.whatsapp_enabled = true;
        test.ctx
            .repos
            .reminder_settings
            .upsert(&settings)
            .await
            .unwrap();

        test.hearings
            .push(hearing(&tenant.id, 45 * MINUTE, None, Some("+4799887766")));

        run_tick(&test.ctx).await;
        let sent = test.dispatcher.sent_on(Channel::Whatsapp);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "whatsapp:+4799887766");

        let records = test.ledger.all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].recipient, "whatsapp:+4799887766");
    }

    #[actix_web::main]
    #[test]
    async fn dispatch_failure_does_not_block_other_recipients() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        let mut failing = hearing(&tenant.id, 30 * MINUTE, Some("bad@example.com"), None);
        failing.client_name = "Bob Olsen".into();
        test.hearings.push(failing);
        test.hearings
            .push(hearing(&tenant.id, 45 * MINUTE, Some("ada@example.com"), None));
        test.dispatcher.fail_recipient("bad@example.com");

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.notifications_sent, 1);
        assert_eq!(report.candidates_skipped, 1);
        assert_eq!(report.tenant_failures, 0);

        // Only the delivered notification is in the ledger; the failed one
        // stays eligible for the next tick.
        let records = test.ledger.all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].recipient, "ada@example.com");
    }

    #[actix_web::main]
    #[test]
    async fn unconfigured_channel_is_skipped_and_counted() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;
        test.dispatcher.make_channel_unavailable(Channel::Email);
        test.hearings
            .push(hearing(&tenant.id, 45 * MINUTE, Some("ada@example.com"), None));

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.notifications_sent, 0);
        assert_eq!(report.candidates_skipped, 1);
        assert!(test.ledger.all().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn tenant_query_failure_does_not_affect_other_tenants() {
        let test = setup();
        let failing_tenant = insert_tenant(&test.ctx, "Aune Advokater").await;
        let healthy_tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        test.hearings.fail_for(failing_tenant.id.clone());
        test.hearings.push(hearing(
            &healthy_tenant.id,
            45 * MINUTE,
            Some("ada@example.com"),
            None,
        ));

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.tenants_processed, 2);
        assert_eq!(report.tenant_failures, 1);
        assert_eq!(report.notifications_sent, 1);
        assert_eq!(test.dispatcher.sent()[0].recipient, "ada@example.com");
    }

    #[actix_web::main]
    #[test]
    async fn filing_and_task_deadlines_are_notified() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        test.filings.push(FilingRecord {
            id: Default::default(),
            tenant_id: tenant.id.clone(),
            case_number: "C-2021-042".into(),
            title: "Statement of defence".into(),
            due_at: NOW + 30 * MINUTE,
            client_name: "Ada Hansen".into(),
            client_email: Some("ada@example.com".into()),
            client_phone: None,
        });
        test.tasks.push(TaskRecord {
            id: Default::default(),
            tenant_id: tenant.id.clone(),
            title: "Draft witness list".into(),
            due_at: NOW + 30 * MINUTE,
            completed: false,
            assignee_name: "Kari Berg".into(),
            assignee_email: Some("kari@hansenco.example".into()),
            assignee_phone: None,
        });
        // Completed tasks are never candidates
        test.tasks.push(TaskRecord {
            id: Default::default(),
            tenant_id: tenant.id.clone(),
            title: "File power of attorney".into(),
            due_at: NOW + 30 * MINUTE,
            completed: true,
            assignee_name: "Kari Berg".into(),
            assignee_email: Some("kari@hansenco.example".into()),
            assignee_phone: None,
        });

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.notifications_sent, 2);

        let sent = test.dispatcher.sent();
        assert!(sent
            .iter()
            .any(|m| m.subject.contains("Filing deadline reminder")));
        assert!(sent
            .iter()
            .any(|m| m.subject.contains("Task deadline reminder")));
        let kinds: Vec<_> = test.ledger.all().iter().map(|r| r.entity_type).collect();
        assert!(kinds.contains(&EventKind::Filing));
        assert!(kinds.contains(&EventKind::TaskDeadline));
    }

    #[actix_web::main]
    #[test]
    async fn only_verified_kyc_documents_inside_the_week_are_due() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        let document = |renewal_in: i64, is_verified: bool, email: &str| KycRecord {
            id: Default::default(),
            tenant_id: tenant.id.clone(),
            document_kind: "Passport".into(),
            renewal_reminder_at: NOW + renewal_in,
            is_verified,
            client_name: "Ada Hansen".into(),
            client_email: Some(email.to_string()),
            client_phone: None,
        };
        test.kyc_documents.push(document(3 * DAY, true, "due@example.com"));
        test.kyc_documents
            .push(document(3 * DAY, false, "unverified@example.com"));
        test.kyc_documents
            .push(document(8 * DAY, true, "later@example.com"));

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.notifications_sent, 1);
        let sent = test.dispatcher.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "due@example.com");
        assert!(sent[0].subject.contains("KYC renewal due"));
    }

    #[actix_web::main]
    #[test]
    async fn tenant_without_settings_row_uses_defaults() {
        let test = setup();
        let tenant = insert_tenant(&test.ctx, "Hansen & Co").await;

        // No settings upserted: email on, sms/whatsapp off, 60 minute leads
        test.hearings.push(hearing(
            &tenant.id,
            59 * MINUTE,
            Some("ada@example.com"),
            Some("+4799887766"),
        ));

        let report = run_tick(&test.ctx).await;
        assert_eq!(report.notifications_sent, 1);
        assert_eq!(test.dispatcher.sent_on(Channel::Email).len(), 1);
        assert!(test.dispatcher.sent_on(Channel::Sms).is_empty());
        assert!(test.dispatcher.sent_on(Channel::Whatsapp).is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn concurrent_tick_reports_a_conflict() {
        let test = setup();
        insert_tenant(&test.ctx, "Hansen & Co").await;

        let _guard = test.ctx.tick_lock.try_lock().unwrap();
        let mut usecase = RunTickUseCase {};
        let res = usecase.execute(&test.ctx).await;
        assert!(matches!(res, Err(UseCaseError::TickInProgress)));
    }
}
