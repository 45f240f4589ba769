/// Bucket count served by the packet-forwarder metrics endpoint
pub const BUCKET_COUNT: u32 = 54;

/// Splash title shown on the intro page
pub const TITLE: &str = "RAKPiOS";

/// Render-time settings shared by all pages.
///
/// Fixed at process start; the default is the only set the daemon uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Title drawn on the intro page
    pub title: String,
    /// Number of buckets the metrics endpoint reports
    pub bucket_count: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: TITLE.into(),
            bucket_count: BUCKET_COUNT,
        }
    }
}
