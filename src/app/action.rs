#[derive(Debug, PartialEq)]
pub enum Action {
    Submit { id: String, expression: String },
    Refresh,
    Lookup { id: String },
    ScheduleBannerDismiss,
    Quit,
}
