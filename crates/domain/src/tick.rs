/// Aggregated outcome of one scheduler pass across all tenants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub tenants_processed: usize,
    pub notifications_sent: usize,
    /// Candidates skipped because a channel was unavailable or a provider
    /// rejected the dispatch. Dedup suppression is not counted here.
    pub candidates_skipped: usize,
    pub tenant_failures: usize,
}
