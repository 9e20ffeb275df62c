/// Identification of a use case, used for log targets and UI titles
pub trait UseCaseMetadata {
    /// Index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "bulk_upload"
    fn usecase_name() -> &'static str;

    /// Title shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_bulk_upload"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
